use dioxus::prelude::*;

use crate::components::Button;
use crate::t;

/// Shown when a page has nothing to render. The reset affordance hands
/// control back to the caller, which decides what "reset" means.
#[component]
pub fn EmptyState(
    #[props(default = false)] show_reset: bool,
    on_reset: Option<EventHandler<()>>,
    title: Option<String>,
    subtitle: Option<String>,
) -> Element {
    let title = title.unwrap_or_else(|| t!("empty-title"));
    let subtitle = subtitle.unwrap_or_else(|| t!("empty-subtitle"));

    rsx! {
        section { class: "empty-state",
            h2 { class: "empty-state__title", "{title}" }
            p { class: "empty-state__subtitle", "{subtitle}" }
            if show_reset {
                Button {
                    label: t!("empty-reset"),
                    ghost: true,
                    onclick: move |_| {
                        if let Some(handler) = on_reset {
                            handler.call(());
                        }
                    },
                }
            }
        }
    }
}
