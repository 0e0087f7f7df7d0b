use dioxus::{logger::tracing::trace, prelude::*};

use super::primitive::{self, CheckedState};
use crate::class_names::{take_class, ClassList};

const CHECKBOX_ITEM_CLASS: &str = "flex h-8 items-center pl-3 pr-2 text-sm text-white hover:cursor-pointer hover:bg-neutral-800 focus:bg-neutral-800 focus:outline-none data-[disabled]:pointer-events-none data-[disabled]:opacity-50";

/// Maps the item's reported state to the caller's boolean. Interacting with
/// the item never makes it indeterminate.
pub fn normalize_checked_change(state: CheckedState) -> bool {
    match state {
        CheckedState::Checked => true,
        CheckedState::Unchecked | CheckedState::Indeterminate => false,
    }
}

/// Menu item with a leading [`Checkbox`](crate::checkbox::Checkbox).
///
/// Only the caller can put it in the indeterminate state, through
/// `indeterminate`.
#[component]
pub fn Checkbox(
    label: String,
    checked: bool,
    set_checked: EventHandler<bool>,
    indeterminate: Option<bool>,
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut attributes = attributes;
    let class = ClassList::new(CHECKBOX_ITEM_CLASS)
        .extend(take_class(&mut attributes))
        .build();
    let state = CheckedState::from_flags(checked, indeterminate == Some(true));

    rsx! {
        primitive::CheckboxItem {
            checked: state,
            on_checked_change: move |next: CheckedState| {
                let checked = normalize_checked_change(next);
                trace!(?next, checked, "checkbox item changed");
                set_checked.call(checked);
            },
            disabled,
            class,
            attributes,
            span { class: "mr-3 flex h-4 w-4 items-center justify-center",
                crate::checkbox::Checkbox { checked, indeterminate }
            }
            span { "{label}" }
        }
    }
}
