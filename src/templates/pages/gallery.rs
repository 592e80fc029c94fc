use crate::domain::{ApplicationRecord, PageState, Statistics, Status};
use crate::flash::ShownFlash;
use crate::templates::components::{application_card, deferred, flash_alert};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub fn gallery_page(flash: Option<&ShownFlash>, state: &PageState<Vec<ApplicationRecord>>) -> Markup {
    desktop_layout(
        "Application Gallery",
        Nav::Gallery,
        html! {
            div class="gallery-page-container" {
                h1 { "Application Gallery" }

                @if let Some(shown) = flash {
                    (flash_alert(shown))
                }

                (deferred(
                    "gallery-content",
                    "/gallery/content",
                    matches!(state, PageState::Loading),
                    gallery_content(state),
                ))
            }
        },
    )
}

fn summary(stats: &Statistics) -> Markup {
    html! {
        section class="statistics-section" {
            h2 { "Summary" }
            div class="stats-grid" {
                div class="stat-item" {
                    span class="stat-value" { (stats.total) }
                    span class="stat-label" { "Total Applications" }
                }
                @for status in Status::ALL {
                    div class="stat-item" {
                        span class=(format!("stat-value status-{}", status.as_str().to_lowercase())) { (stats.count(status)) }
                        span class="stat-label" { (status.as_str()) }
                    }
                }
            }
        }
    }
}

pub fn gallery_content(state: &PageState<Vec<ApplicationRecord>>) -> Markup {
    html! {
        @match state {
            PageState::Loading => p class="center-text" { "Loading applications..." },
            PageState::Failed(msg) => p class="error-text" { (msg) },
            PageState::Loaded(apps) => {
                (summary(&Statistics::from_records(apps)))

                @if apps.is_empty() {
                    div class="center-text empty-state" {
                        p { "You haven't logged any applications yet!" }
                        a href="/create" class="create-link-button" { "Log your first one!" }
                    }
                } @else {
                    div class="gallery-grid" {
                        @for app in apps {
                            (application_card(app))
                        }
                    }
                    p class="export-link" {
                        a href="/gallery/export.xlsx" { "Export to spreadsheet" }
                    }
                }
            }
        }
    }
}
