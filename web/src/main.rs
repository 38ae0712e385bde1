use api::Session;
use dioxus::prelude::*;

use ui::account::{LoginModal, RegisterModal};
use ui::components::AppNavbar;
use ui::core::registry::ModalRegistry;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; the navbar's locale switcher writes it.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Session context shared by the navbar, the menu, and the account dialogs.
    let session = use_signal(Session::default);
    use_context_provider(|| session);

    ModalRegistry::provide();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web shell: navbar, the shell-owned account dialogs, and the routed page
/// body behind suspense and error fences.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar {}
        LoginModal {}
        RegisterModal {}

        main { class: "page-shell",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "page-error",
                        h2 { "Something went sideways." }
                        p { "Reload the page, or come back in a moment." }
                        pre { class: "page-error__detail", "{errors:?}" }
                    }
                },
                SuspenseBoundary {
                    fallback: |_| rsx! {
                        div { class: "page-loading", "Loading…" }
                    },
                    Outlet::<Route> {}
                }
            }
        }
    }
}
