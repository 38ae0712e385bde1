use dioxus::prelude::*;

/// Shared action button. `ghost` renders the outlined variant used for
/// secondary actions.
#[component]
pub fn Button(
    label: String,
    onclick: EventHandler<MouseEvent>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] ghost: bool,
) -> Element {
    let variant = if ghost {
        "button--ghost"
    } else {
        "button--primary"
    };

    rsx! {
        button {
            r#type: "button",
            class: "button {variant}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
