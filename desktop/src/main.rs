#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use api::Session;
use ui::account::{LoginModal, RegisterModal};
use ui::components::AppNavbar;
use ui::core::registry::ModalRegistry;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Homeport – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
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

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div forces a full remount on language change; the
        // hidden marker keeps an explicit reactive dependency on lang_code.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop shell mirroring the web one: navbar, shell-owned account
/// dialogs, and the routed page body behind suspense and error fences.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppNavbar {}
        LoginModal {}
        RegisterModal {}

        main { class: "page-shell",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "page-error",
                        h2 { "Something went sideways." }
                        p { "Restart the app, or come back in a moment." }
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
