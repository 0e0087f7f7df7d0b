//! Context menu demo page.
//!
//! A trigger area with a menu that exercises every part of the family:
//! titles, plain, captioned, image and destructive buttons, submenus with a
//! radio group and checkbox items, nested submenus and dividers.

use dioxus::prelude::*;

use crate::{
    activation::ActivationEvent,
    context_menu::{self, RadioOption},
};

const AVATAR: Asset = asset!("/assets/avatar.svg");

#[component]
pub fn Showcase() -> Element {
    let mut last_action: Signal<Option<String>> = use_signal(|| None);
    let mut sort: Signal<Option<String>> = use_signal(|| Some("name".to_string()));
    let mut wrap_lines = use_signal(|| true);
    let mut hidden_files = use_signal(|| false);

    let sort_options = vec![
        RadioOption::new("Name", "name"),
        RadioOption::new("Date modified", "modified"),
        RadioOption::new("Size", "size"),
    ];
    let mut record = move |action: &str| last_action.set(Some(action.to_string()));
    let sorted_by = sort().unwrap_or_default();

    rsx! {
        h1 { "Context menu" }
        context_menu::Menu {
            context_menu::Trigger { class: "trigger-area", "Right-click anywhere in this box" }
            context_menu::Content {
                context_menu::Title { "Document" }
                context_menu::Button {
                    text: "Open",
                    onclick: move |_: ActivationEvent| record("Open"),
                }
                context_menu::Button {
                    text: "Share with Ada",
                    caption: "Sends a read-only link",
                    image: AVATAR.to_string(),
                    onclick: move |_: ActivationEvent| record("Share"),
                }
                context_menu::Divider {}
                context_menu::Submenu {
                    context_menu::Subtrigger { text: "Sort by", chevron: true }
                    context_menu::Subcontent {
                        context_menu::RadioGroup {
                            options: sort_options,
                            value: sort(),
                            on_value_change: move |value: String| sort.set(Some(value)),
                        }
                    }
                }
                context_menu::Submenu {
                    context_menu::Subtrigger { text: "View", chevron: true }
                    context_menu::Subcontent {
                        context_menu::Checkbox {
                            label: "Wrap lines",
                            checked: wrap_lines(),
                            set_checked: move |checked: bool| wrap_lines.set(checked),
                        }
                        context_menu::Checkbox {
                            label: "Hidden files",
                            checked: hidden_files(),
                            set_checked: move |checked: bool| hidden_files.set(checked),
                        }
                        context_menu::Divider {}
                        context_menu::Submenu {
                            context_menu::Subtrigger { text: "Zoom", chevron: true }
                            context_menu::Subcontent {
                                context_menu::Button {
                                    text: "Zoom in",
                                    onclick: move |_: ActivationEvent| record("Zoom in"),
                                }
                                context_menu::Button {
                                    text: "Zoom out",
                                    onclick: move |_: ActivationEvent| record("Zoom out"),
                                }
                            }
                        }
                    }
                }
                context_menu::Divider {}
                context_menu::Button {
                    text: "Delete",
                    destructive: true,
                    onclick: move |_: ActivationEvent| record("Delete"),
                }
            }
        }
        p {
            if let Some(action) = last_action() {
                "Last action: {action}"
            } else {
                "No action yet"
            }
        }
        p { "Sorted by {sorted_by}, wrap lines: {wrap_lines}, hidden files: {hidden_files}" }
    }
}
