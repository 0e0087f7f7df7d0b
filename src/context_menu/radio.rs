use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::{items::Divider, primitive};

const RADIO_ITEM_CLASS: &str = "flex h-8 items-center pl-3 pr-2 text-sm text-white hover:cursor-pointer hover:bg-neutral-800 focus:bg-neutral-800 focus:outline-none data-[disabled]:pointer-events-none data-[disabled]:opacity-50";

/// One choice of a [`RadioGroup`], identified by `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    pub label: String,
    pub value: String,
}

impl RadioOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Whether a divider follows the option at `index`: between neighbours only.
pub(crate) fn divider_after(index: usize, len: usize) -> bool {
    index + 1 < len
}

/// Single-select list of options. The option whose value equals `value` is
/// shown as selected; choosing another reports its value.
#[component]
pub fn RadioGroup(
    options: Vec<RadioOption>,
    value: Option<String>,
    on_value_change: Option<EventHandler<String>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let len = options.len();
    rsx! {
        primitive::RadioGroup { attributes,
            for (index, option) in options.iter().enumerate() {
                div { key: "{option.value}",
                    RadioItem {
                        label: option.label.clone(),
                        value: option.value.clone(),
                        checked: value.as_deref() == Some(option.value.as_str()),
                        on_select: on_value_change,
                    }
                    if divider_after(index, len) {
                        Divider {}
                    }
                }
            }
        }
    }
}

#[component]
pub fn RadioItem(
    label: String,
    value: String,
    #[props(default)] checked: bool,
    on_select: Option<EventHandler<String>>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        primitive::RadioItem { value, checked, on_select, disabled, class: RADIO_ITEM_CLASS.to_string(),
            span { class: "mr-3 flex h-4 w-3.5 items-center justify-center",
                if checked {
                    span { class: "h-1.5 w-1.5 rounded-full bg-white" }
                }
            }
            span { "{label}" }
        }
    }
}
