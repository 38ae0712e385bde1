//! Process-wide registry of named dialogs.
//!
//! Which account dialog is open is shell-level state: the navbar requests
//! them, the shell mounts them, and either side may close them. The
//! registry carries that state in a context-provided signal so components
//! ask for it instead of reaching into a global.

use std::collections::HashSet;

use dioxus::prelude::*;

/// Identity of an externally managed dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Login,
    Register,
}

#[derive(Clone, Copy)]
pub struct ModalRegistry {
    open: Signal<HashSet<ModalId>>,
}

impl ModalRegistry {
    /// Install a fresh registry into context. Call once from the shell,
    /// above every component that uses dialogs.
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            open: Signal::new(HashSet::new()),
        })
    }

    pub fn open(&mut self, id: ModalId) {
        self.open.with_mut(|set| {
            set.insert(id);
        });
    }

    pub fn close(&mut self, id: ModalId) {
        self.open.with_mut(|set| {
            set.remove(&id);
        });
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.read().contains(&id)
    }
}

/// Grab the shell's registry from context.
pub fn use_modal_registry() -> ModalRegistry {
    use_context::<ModalRegistry>()
}
