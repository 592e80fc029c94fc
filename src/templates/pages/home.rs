// templates/pages/home.rs

use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        Nav::Home,
        html! {
            div class="home-page-container" {
                header class="home-header" {
                    h1 { "Welcome to JobTrack!" }
                    p class="subtitle" {
                        "Your personal dashboard for managing job applications efficiently."
                    }
                }

                section class="home-content" {
                    p {
                        "Never lose track of an application again. Log companies, positions, "
                        "application dates, statuses, and important notes all in one place."
                    }

                    div class="home-actions" {
                        a href="/create" class="home-button primary" { "Log New Application" }
                        a href="/gallery" class="home-button secondary" { "View Application Gallery" }
                    }
                }
            }
        },
    )
}
