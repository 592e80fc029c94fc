use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Which sidebar link is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Create,
    Gallery,
    None,
}

// Removes any element carrying data-dismiss-after once its time is up,
// including ones swapped in later by htmx.
const DISMISS_SCRIPT: &str = r#"
function jtDismiss(root) {
  root.querySelectorAll('[data-dismiss-after]').forEach(function (el) {
    if (el.dataset.dismissArmed) return;
    el.dataset.dismissArmed = '1';
    setTimeout(function () { el.remove(); }, Number(el.dataset.dismissAfter));
  });
}
document.addEventListener('DOMContentLoaded', function () { jtDismiss(document); });
document.addEventListener('htmx:load', function (e) { jtDismiss(e.target); });
"#;

fn nav_link(href: &str, label: &str, is_active: bool) -> Markup {
    html! {
        a href=(href) class=[is_active.then_some("active")] { (label) }
    }
}

pub fn desktop_layout(title: &str, active: Nav, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · JobTrack" }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
                script { (PreEscaped(DISMISS_SCRIPT)) }
            }
            body {
                div class="App" {
                    nav class="sidebar" {
                        a href="/" class="sidebar-logo" { "JobTrack" }
                        (nav_link("/", "Home", active == Nav::Home))
                        (nav_link("/create", "Log Application", active == Nav::Create))
                        (nav_link("/gallery", "View Gallery", active == Nav::Gallery))
                    }
                    main class="content" {
                        (content)
                    }
                }
            }
        }
    }
}
