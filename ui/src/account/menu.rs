use api::Session;
use dioxus::prelude::*;

use crate::account::Avatar;
use crate::core::format;
use crate::core::registry::{use_modal_registry, ModalId};
use crate::t;

/// Entries the dropdown can show. Which subset appears is decided by
/// `menu_entries`; what each one does is decided in `UserMenu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Trips,
    Favorites,
    Reservations,
    Properties,
    HostHome,
    Logout,
    Login,
    Register,
}

impl MenuEntry {
    pub fn label(&self) -> String {
        match self {
            MenuEntry::Trips => t!("menu-trips"),
            MenuEntry::Favorites => t!("menu-favorites"),
            MenuEntry::Reservations => t!("menu-reservations"),
            MenuEntry::Properties => t!("menu-properties"),
            MenuEntry::HostHome => t!("menu-host"),
            MenuEntry::Logout => t!("menu-logout"),
            MenuEntry::Login => t!("menu-login"),
            MenuEntry::Register => t!("menu-register"),
        }
    }
}

/// Item set per authentication state. Exhaustive match on purpose: adding a
/// session variant forces a decision here.
pub fn menu_entries(session: &Session) -> Vec<MenuEntry> {
    match session {
        Session::Authenticated { .. } => vec![
            MenuEntry::Trips,
            MenuEntry::Favorites,
            MenuEntry::Reservations,
            MenuEntry::Properties,
            MenuEntry::HostHome,
            MenuEntry::Logout,
        ],
        Session::Anonymous => vec![MenuEntry::Login, MenuEntry::Register],
    }
}

/// Panel visibility. The trigger click is the only transition; clicking an
/// item or elsewhere on the page leaves the panel where it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Account dropdown. Login/register go through the modal registry, logout
/// through `on_sign_out`; section entries are reported via `on_select` so
/// the shell can route them.
#[component]
pub fn UserMenu(
    session: Session,
    on_sign_out: EventHandler<()>,
    on_select: Option<EventHandler<MenuEntry>>,
) -> Element {
    let mut menu = use_signal(MenuState::default);
    let mut registry = use_modal_registry();

    let entries = menu_entries(&session);
    let viewer = session.user().cloned();

    let mut activate = move |entry: MenuEntry| match entry {
        MenuEntry::Login => registry.open(ModalId::Login),
        MenuEntry::Register => registry.open(ModalId::Register),
        MenuEntry::Logout => on_sign_out.call(()),
        other => {
            if let Some(handler) = on_select {
                handler.call(other);
            }
        }
    };

    rsx! {
        div { class: "user-menu",
            button {
                r#type: "button",
                class: "user-menu__trigger",
                aria_label: t!("user-menu-toggle"),
                aria_expanded: menu().is_open(),
                onclick: move |_| menu.with_mut(MenuState::toggle),
                span { class: "user-menu__burger", aria_hidden: "true" }
                Avatar { name: viewer.as_ref().map(|user| user.name.clone()).unwrap_or_default() }
            }

            if menu().is_open() {
                div { class: "user-menu__panel",
                    if let Some(user) = viewer.as_ref() {
                        div { class: "user-menu__header",
                            span { class: "user-menu__name", "{user.name}" }
                            span { class: "user-menu__since",
                                {t!("user-menu-since", date = format::format_member_since(&user.created_at))}
                            }
                        }
                    }

                    div { class: "user-menu__items",
                        for entry in entries.into_iter() {
                            if entry == MenuEntry::Logout {
                                hr { class: "user-menu__divider" }
                            }
                            MenuItem {
                                label: entry.label(),
                                onclick: move |_| activate(entry),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItem(label: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "user-menu__item",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::User;

    fn authenticated() -> Session {
        Session::Authenticated {
            user: User {
                id: "u-1".into(),
                name: "Demi Harbor".into(),
                email: "demo@homeport.app".into(),
                created_at: "2023-03-14T09:30:00Z".into(),
            },
        }
    }

    #[test]
    fn authenticated_menu_has_account_entries_only() {
        let entries = menu_entries(&authenticated());

        assert_eq!(
            entries,
            vec![
                MenuEntry::Trips,
                MenuEntry::Favorites,
                MenuEntry::Reservations,
                MenuEntry::Properties,
                MenuEntry::HostHome,
                MenuEntry::Logout,
            ]
        );
        assert!(!entries.contains(&MenuEntry::Login));
        assert!(!entries.contains(&MenuEntry::Register));
    }

    #[test]
    fn anonymous_menu_is_exactly_login_and_register() {
        assert_eq!(
            menu_entries(&Session::Anonymous),
            vec![MenuEntry::Login, MenuEntry::Register]
        );
    }

    #[test]
    fn toggle_parity_round_trips() {
        let mut state = MenuState::default();
        assert!(!state.is_open());

        for _ in 0..3 {
            state.toggle();
        }
        assert!(state.is_open(), "odd toggles leave the panel open");

        state.toggle();
        assert!(!state.is_open(), "even toggles return it to closed");
    }
}
