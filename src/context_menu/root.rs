use dioxus::{logger::tracing::warn, prelude::*};

use super::{
    primitive,
    state::{use_menu_open_state, use_submenu_open_state, MenuOpenState, RootMenuScope, SubmenuScope},
};
use crate::{
    class_names::{take_class, ClassList},
    presence::{AnimatedPresence, Motion},
    settings::use_menu_settings,
};

const CONTEXT_MENU_CSS: Asset = asset!("/assets/context_menu.css");

const PANEL_CLASS: &str = "context-menu-content overflow-visible rounded-lg bg-neutral-850 py-1 shadow-lg";

/// Root of a context menu.
///
/// Owns the menu's open flag, starting closed unless `default_open` is set,
/// and keeps it in sync with the primitive. The menu is non-modal.
#[component]
pub fn Menu(#[props(default)] default_open: bool, children: Element) -> Element {
    let open = use_signal(|| default_open);
    let RootMenuScope(mut menu) = use_context_provider(|| RootMenuScope(MenuOpenState::new(open)));

    rsx! {
        document::Link { rel: "stylesheet", href: CONTEXT_MENU_CSS }
        primitive::Root {
            modal: false,
            default_open,
            on_open_change: move |open: bool| menu.set_open(open),
            {children}
        }
    }
}

/// The menu panel. Mounted only while the menu is open or animating closed.
#[component]
pub fn Content(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let Some(menu) = use_menu_open_state() else {
        warn!("context_menu::Content rendered outside of a Menu");
        return rsx! {};
    };
    let settings = use_menu_settings();
    let mut attributes = attributes;
    let class = ClassList::new(PANEL_CLASS)
        .extend(take_class(&mut attributes))
        .build();
    let animation = settings.animation;

    rsx! {
        AnimatedPresence { present: menu.signal(), animate: animation.enabled,
            primitive::Portal {
                primitive::Content { attributes,
                    Motion {
                        duration_ms: animation.content.settle_ms(),
                        initial_scale: animation.initial_scale,
                        class,
                        style: "width: {settings.content_width}px; transform-origin: top left;",
                        {children}
                    }
                }
            }
        }
    }
}

/// A nested menu with its own open flag, independent of its parent's and of
/// its siblings'.
#[component]
pub fn Submenu(#[props(default)] default_open: bool, children: Element) -> Element {
    let open = use_signal(|| default_open);
    let SubmenuScope(mut submenu) = use_context_provider(|| SubmenuScope(MenuOpenState::new(open)));

    rsx! {
        primitive::Sub { open, on_open_change: move |open: bool| submenu.set_open(open), {children} }
    }
}

/// Panel of a [`Submenu`], beside its trigger.
#[component]
pub fn Subcontent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let Some(submenu) = use_submenu_open_state() else {
        warn!("context_menu::Subcontent rendered outside of a Submenu");
        return rsx! {};
    };
    let settings = use_menu_settings();
    let mut attributes = attributes;
    let class = ClassList::new(PANEL_CLASS)
        .extend(take_class(&mut attributes))
        .build();
    let animation = settings.animation;

    rsx! {
        AnimatedPresence { present: submenu.signal(), animate: animation.enabled,
            primitive::Portal {
                primitive::SubContent { side_offset: settings.submenu_offset, attributes,
                    Motion {
                        duration_ms: animation.submenu.settle_ms(),
                        initial_scale: animation.initial_scale,
                        class,
                        style: "width: {settings.content_width}px; transform-origin: top left;",
                        {children}
                    }
                }
            }
        }
    }
}
