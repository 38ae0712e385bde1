use dioxus::prelude::*;

/// Initials badge standing in for a profile photo. Anonymous viewers pass
/// an empty name and get the placeholder glyph.
#[component]
pub fn Avatar(#[props(default)] name: String) -> Element {
    let badge = initials(&name);

    rsx! {
        span { class: "avatar", aria_hidden: "true", "{badge}" }
    }
}

/// First letter of the first two words, uppercased. Empty or whitespace-only
/// names fall back to a middle dot.
fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "·".into()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_word_names_use_both_initials() {
        assert_eq!(initials("Demi Harbor"), "DH");
    }

    #[test]
    fn extra_words_are_ignored() {
        assert_eq!(initials("Ana de la Cruz"), "AD");
    }

    #[test]
    fn single_names_and_blanks() {
        assert_eq!(initials("nova"), "N");
        assert_eq!(initials("   "), "·");
    }
}
