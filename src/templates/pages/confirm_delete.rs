use crate::domain::RecordId;
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

/// Shown when a delete arrives without confirmation; nothing has been
/// deleted yet.
pub fn confirm_delete_page(id: &RecordId) -> Markup {
    desktop_layout(
        "Delete Application",
        Nav::None,
        html! {
            div class="confirm-delete-container" {
                h1 { "Delete this application?" }
                p { "Are you sure you want to delete this application entry? This cannot be undone." }
                form method="post" action=(format!("/update/{id}/delete")) class="confirm-delete-form" {
                    input type="hidden" name="confirm" value="yes";
                    button type="submit" class="delete-button" { "Yes, delete it" }
                    a href=(format!("/update/{id}")) class="cancel-link" { "Cancel" }
                }
            }
        },
    )
}
