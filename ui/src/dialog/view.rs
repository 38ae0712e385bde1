use dioxus::prelude::*;

use crate::components::Button;
use crate::core::timing;
use crate::t;

use super::engine::{CloseTicket, DialogEngine};

/// Blocking dialog shell with a fade/slide transition and a primary /
/// secondary action footer.
///
/// The caller keeps the open request; this component only decides how the
/// panel looks while getting there. `disabled` gates every action handler,
/// which is how callers guard an in-flight submission. Submitting never
/// closes the dialog by itself.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
    action_label: String,
    #[props(default = false)] disabled: bool,
    title: Option<String>,
    body: Element,
    footer: Option<Element>,
    secondary_action: Option<EventHandler<()>>,
    secondary_action_label: Option<String>,
) -> Element {
    let mut engine = use_signal(|| DialogEngine::new(open));

    // Mirror the caller's request into the lifecycle machine. A request
    // flipping to false tears down without the exit animation.
    use_effect(use_reactive((&open,), move |(open,)| {
        engine.with_mut(|eng| eng.sync_open(open));
    }));

    let begin_close = move |_| {
        let ticket = engine.with_mut(|eng| eng.request_close(disabled));
        if let Some(ticket) = ticket {
            schedule_close_notify(engine, ticket, on_close);
        }
    };

    let submit = move |_| {
        if disabled {
            return;
        }
        on_submit.call(());
    };

    let has_secondary = secondary_action.is_some() && secondary_action_label.is_some();
    let run_secondary = move |_| {
        if disabled {
            return;
        }
        if let Some(handler) = secondary_action {
            handler.call(());
        }
    };

    if !open {
        return rsx! {};
    }

    let panel_state = if engine().is_shown() {
        "modal__panel--shown"
    } else {
        "modal__panel--hidden"
    };

    rsx! {
        div { class: "modal", role: "dialog", aria_modal: "true",
            div { class: "modal__dialog",
                div { class: "modal__panel {panel_state}",
                    header { class: "modal__header",
                        button {
                            r#type: "button",
                            class: "modal__close",
                            aria_label: t!("modal-close"),
                            onclick: begin_close,
                            "✕"
                        }
                        if let Some(title) = title.as_ref() {
                            div { class: "modal__title", "{title}" }
                        }
                    }

                    div { class: "modal__body", {body} }

                    footer { class: "modal__footer",
                        div { class: "modal__actions",
                            if has_secondary {
                                Button {
                                    label: secondary_action_label.clone().unwrap_or_default(),
                                    ghost: true,
                                    disabled: disabled,
                                    onclick: run_secondary,
                                }
                            }
                            Button {
                                label: action_label.clone(),
                                disabled: disabled,
                                onclick: submit,
                            }
                        }
                        if let Some(extra) = footer {
                            {extra}
                        }
                    }
                }
            }
        }
    }
}

/// Let the exit animation play out before telling the caller the dialog is
/// gone. The task dies with the component scope, and the engine drops
/// tickets that were superseded while the timer slept, so a disposed or
/// reopened dialog never hears a late notification.
fn schedule_close_notify(
    mut engine: Signal<DialogEngine>,
    ticket: CloseTicket,
    on_close: EventHandler<()>,
) {
    spawn(async move {
        timing::sleep_ms(ticket.delay_ms).await;
        if engine.with_mut(|eng| eng.finish_close(ticket)) {
            on_close.call(());
        }
    });
}
