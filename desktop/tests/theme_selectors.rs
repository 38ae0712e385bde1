#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the dialog
  shell, the listing grid, and the empty state in particular) remain present
  in the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS
  relied upon by Rust components (dialogs, cards, menus, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page-shell",
    ".container",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Dialog shell
    ".modal {",
    ".modal__panel--shown",
    ".modal__panel--hidden",
    ".modal__actions",
    // Home page
    ".listing-grid",
    ".listing-card__media",
    ".listing-card__price",
    ".empty-state",
    // Fences
    ".page-loading",
    ".page-error",
];

#[test]
fn theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Shared theme is missing required selectors: {missing:?}"
    );
}

#[test]
fn modal_exit_duration_matches_the_engine() {
    // The exit animation length and the deferred close notification are the
    // same 300 ms; if the theme changes, dialog::engine::CLOSE_DELAY_MS must
    // move with it.
    assert!(
        THEME_CSS.contains("--modal-exit-ms: 300ms"),
        "Modal exit duration drifted from the 300 ms close notification delay"
    );
}
