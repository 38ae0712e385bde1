use api::{Credentials, Session};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::core::registry::{use_modal_registry, ModalId};
use crate::dialog::Modal;
use crate::t;

/// Sign-in dialog. Mounted once by the shell; visibility is owned by the
/// modal registry. While a submission is in flight the dialog is disabled,
/// so repeat clicks and the close button are inert until the server answers.
#[component]
pub fn LoginModal() -> Element {
    let mut registry = use_modal_registry();
    let mut session = use_context::<Signal<Session>>();

    let open = registry.is_open(ModalId::Login);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal(|| Option::<String>::None);

    let on_submit = move |_| {
        submitting.set(true);
        submit_error.set(None);
        spawn(async move {
            let credentials = Credentials {
                email: email(),
                password: password(),
            };
            match api::sign_in(credentials).await {
                Ok(next) => {
                    session.set(next);
                    email.set(String::new());
                    password.set(String::new());
                    registry.close(ModalId::Login);
                }
                Err(err) => {
                    tracing::warn!("sign-in failed: {err}");
                    submit_error.set(Some(t!("login-failed")));
                }
            }
            submitting.set(false);
        });
    };

    let switch_to_register = move |_| {
        registry.close(ModalId::Login);
        registry.open(ModalId::Register);
    };

    rsx! {
        Modal {
            open,
            disabled: submitting(),
            title: t!("login-title"),
            action_label: t!("login-action"),
            secondary_action_label: t!("login-switch"),
            on_close: move |_| registry.close(ModalId::Login),
            on_submit: on_submit,
            secondary_action: EventHandler::new(switch_to_register),
            body: rsx! {
                div { class: "modal-form",
                    h3 { class: "modal-form__heading", {t!("login-subtitle")} }
                    label { class: "modal-form__label", r#for: "login-email", {t!("login-email")} }
                    input {
                        id: "login-email",
                        class: "modal-form__input",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { class: "modal-form__label", r#for: "login-password", {t!("login-password")} }
                    input {
                        id: "login-password",
                        class: "modal-form__input",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(message) = submit_error() {
                        p { class: "modal-form__error", "{message}" }
                    }
                }
            },
            footer: rsx! {
                p { class: "modal-form__hint", {t!("login-footer")} }
            },
        }
    }
}
