use api::Session;
use dioxus::prelude::*;

use crate::account::UserMenu;
use crate::i18n::{self};
use crate::t;

// Navbar stylesheet (linked normally; inlined for release native builds so
// packaged apps don't depend on an external file)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Marketplace header: brand, host call-to-action, locale switcher, and the
/// account menu.
///
/// The shell provides a `Signal<Session>` context; this component bootstraps
/// it from the server once on mount and keeps it current across sign-in and
/// sign-out. A bootstrap failure degrades to the anonymous menu rather than
/// taking the shell down.
///
/// The language selector triggers a re-render via a local signal; every
/// render pulls fresh localized strings via `fl!`.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let mut session = use_context::<Signal<Session>>();
    use_future(move || async move {
        if let Ok(fetched) = api::get_current_user().await {
            session.set(fetched);
        }
    });

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            // Update local select state
            current_lang.set(val.clone());
            // Propagate to global language code signal if the platform provided one
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let on_sign_out = move |_| {
        spawn(async move {
            if api::sign_out().await.is_ok() {
                session.set(Session::Anonymous);
            }
        });
    };

    let tagline = t!("brand-tagline");

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Homeport" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                div { class: "navbar__actions",
                    // Inert for now; hosting onboarding lives outside this shell.
                    span { class: "navbar__host-cta", {t!("nav-host-cta")} }

                    UserMenu { session: session(), on_sign_out: on_sign_out }
                }

                // Locale switcher
                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
