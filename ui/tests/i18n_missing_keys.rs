use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non-fallback locale provides *at least* the keys present
/// in the fallback (en-US) `homeport-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/homeport-ui.ftl`
/// 2. Copy all keys from `en-US/homeport-ui.ftl`
/// 3. Run `cargo test -p homeport-ui` to confirm completeness.
#[test]
fn all_locales_have_all_fallback_keys() {
    // Embed the FTL sources at compile time.
    // (If you add a new locale, register it here.)
    const EN_US: &str = include_str!("../i18n/en-US/homeport-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/homeport-ui.ftl");

    let fallback_keys = extract_keys(EN_US);

    // Ensure fallback itself has no duplicates and at least one key.
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "locale {locale} is missing {} key(s): {missing:?}",
                missing.len()
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness failures:\n{}",
        failures.join("\n")
    );
}

/// Extract message IDs from a Fluent source. Any trimmed line of the form
/// `<identifier> = ...` counts; comments, terms (`-` prefix), blank lines,
/// and continuation lines are skipped.
fn extract_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        if let Some(key) = parse_key(line) {
            keys.insert(key);
        }
    }
    keys
}

fn assert_no_dup_keys(content: &str, locale: &str) {
    let mut seen: HashSet<String> = HashSet::new();
    for line in content.lines() {
        if let Some(key) = parse_key(line) {
            assert!(
                seen.insert(key.clone()),
                "locale {locale} defines `{key}` more than once"
            );
        }
    }
}

fn parse_key(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
        return None;
    }
    let (maybe_id, _) = line.split_at(line.find('=')?);
    let id = maybe_id.trim();
    if !id.is_empty() && id.chars().all(valid_key_char) {
        Some(id.to_string())
    } else {
        None
    }
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}
