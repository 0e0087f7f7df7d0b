use dioxus::{logger::tracing::debug, prelude::*};

/// Open flag of one menu or submenu instance.
///
/// Each [`Menu`](super::Menu) and [`Submenu`](super::Submenu) creates its own
/// and shares it with its subtree through context. Nested submenus provide a
/// new one, so the nearest ancestor's flag is always the one found.
#[derive(Clone, Copy, PartialEq)]
pub struct MenuOpenState {
    open: Signal<bool>,
}

impl MenuOpenState {
    pub fn new(open: Signal<bool>) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn set_open(&mut self, open: bool) {
        if *self.open.peek() == open {
            return;
        }
        debug!(open, "menu open state changed");
        self.open.set(open);
    }

    pub fn signal(&self) -> Signal<bool> {
        self.open
    }
}

#[derive(Clone, Copy)]
pub(crate) struct RootMenuScope(pub MenuOpenState);

#[derive(Clone, Copy)]
pub(crate) struct SubmenuScope(pub MenuOpenState);

/// Open state of the enclosing [`Menu`](super::Menu), if any.
pub fn use_menu_open_state() -> Option<MenuOpenState> {
    try_use_context::<RootMenuScope>().map(|scope| scope.0)
}

/// Open state of the nearest enclosing [`Submenu`](super::Submenu), if any.
pub fn use_submenu_open_state() -> Option<MenuOpenState> {
    try_use_context::<SubmenuScope>().map(|scope| scope.0)
}
