mod avatar;
mod login_modal;
mod menu;
mod register_modal;

pub use avatar::Avatar;
pub use login_modal::LoginModal;
pub use menu::{menu_entries, MenuEntry, MenuState, UserMenu};
pub use register_modal::RegisterModal;
