//! Shared UI crate for Homeport. Cross-platform views and components live here.

use dioxus::prelude::*;

/// Shared theme, linked by the web shell and embedded by packaged desktop
/// builds (see `desktop/src/main.rs`).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod account;
pub mod core;
pub mod dialog;
pub mod i18n;
pub mod listings;
pub mod views;

pub mod components {
    // Marketplace navbar with the account menu (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub mod button;
    pub use button::Button;

    pub mod container;
    pub use container::Container;

    pub mod empty_state;
    pub use empty_state::EmptyState;
}
