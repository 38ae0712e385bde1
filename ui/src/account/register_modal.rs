use api::{NewAccount, Session};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::core::registry::{use_modal_registry, ModalId};
use crate::dialog::Modal;
use crate::t;

/// Account-creation dialog; mirror of `LoginModal` with a name field.
#[component]
pub fn RegisterModal() -> Element {
    let mut registry = use_modal_registry();
    let mut session = use_context::<Signal<Session>>();

    let open = registry.is_open(ModalId::Register);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal(|| Option::<String>::None);

    let on_submit = move |_| {
        submitting.set(true);
        submit_error.set(None);
        spawn(async move {
            let account = NewAccount {
                name: name(),
                email: email(),
                password: password(),
            };
            match api::register(account).await {
                Ok(next) => {
                    session.set(next);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    registry.close(ModalId::Register);
                }
                Err(err) => {
                    tracing::warn!("registration failed: {err}");
                    submit_error.set(Some(t!("register-failed")));
                }
            }
            submitting.set(false);
        });
    };

    let switch_to_login = move |_| {
        registry.close(ModalId::Register);
        registry.open(ModalId::Login);
    };

    rsx! {
        Modal {
            open,
            disabled: submitting(),
            title: t!("register-title"),
            action_label: t!("register-action"),
            secondary_action_label: t!("register-switch"),
            on_close: move |_| registry.close(ModalId::Register),
            on_submit: on_submit,
            secondary_action: EventHandler::new(switch_to_login),
            body: rsx! {
                div { class: "modal-form",
                    h3 { class: "modal-form__heading", {t!("register-subtitle")} }
                    label { class: "modal-form__label", r#for: "register-name", {t!("register-name")} }
                    input {
                        id: "register-name",
                        class: "modal-form__input",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { class: "modal-form__label", r#for: "register-email", {t!("register-email")} }
                    input {
                        id: "register-email",
                        class: "modal-form__input",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { class: "modal-form__label", r#for: "register-password", {t!("register-password")} }
                    input {
                        id: "register-password",
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
                p { class: "modal-form__hint", {t!("register-footer")} }
            },
        }
    }
}
