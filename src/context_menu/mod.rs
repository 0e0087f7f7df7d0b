//! Themed context menu.
//!
//! Every part is a component in this module, used by path:
//!
//! ```ignore
//! use menukit::context_menu::{self, RadioOption};
//!
//! rsx! {
//!     context_menu::Menu {
//!         context_menu::Trigger { div { "Right-click me" } }
//!         context_menu::Content {
//!             context_menu::Title { "Actions" }
//!             context_menu::Button { text: "Copy", onclick: move |_| copy() }
//!             context_menu::Divider {}
//!             context_menu::Submenu {
//!                 context_menu::Subtrigger { text: "Theme", chevron: true }
//!                 context_menu::Subcontent {
//!                     context_menu::RadioGroup {
//!                         options: vec![RadioOption::new("Light", "light"), RadioOption::new("Dark", "dark")],
//!                         value: theme(),
//!                         on_value_change: move |v| theme.set(Some(v)),
//!                     }
//!                 }
//!             }
//!             context_menu::Checkbox { label: "Wrap lines", checked: wrap(), set_checked: move |v| wrap.set(v) }
//!         }
//!     }
//! }
//! ```
//!
//! [`Menu`] and each [`Submenu`] own an independent open flag. [`Content`]
//! and [`Subcontent`] mount only while their flag is set and animate in and
//! out.

mod checkbox_item;
mod items;
pub mod primitive;
mod radio;
mod root;
mod state;

pub use checkbox_item::{normalize_checked_change, Checkbox};
pub use items::{Button, Divider, Subtrigger, Title};
pub use primitive::{use_menu_handle, CheckedState, MenuHandle, Portal, Trigger};
pub use radio::{RadioGroup, RadioItem, RadioOption};
pub use root::{Content, Menu, Submenu, Subcontent};
pub use state::{use_menu_open_state, use_submenu_open_state, MenuOpenState};
