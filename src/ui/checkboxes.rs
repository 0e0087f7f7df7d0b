use dioxus::prelude::*;

use crate::checkbox::{CheckedChange, Checkbox};

/// A "select all" checkbox that is indeterminate while only some of its
/// children are checked.
#[component]
pub fn Checkboxes() -> Element {
    let mut fruits: Signal<Vec<(String, bool)>> = use_signal(|| {
        vec![
            ("Apples".to_string(), true),
            ("Pears".to_string(), false),
            ("Plums".to_string(), false),
        ]
    });
    let all = fruits.read().iter().all(|(_, checked)| *checked);
    let some = fruits.read().iter().any(|(_, checked)| *checked);

    rsx! {
        h1 { "Checkboxes" }
        div { class: "checkbox-row",
            Checkbox {
                checked: all,
                indeterminate: some && !all,
                set_checked: move |change: CheckedChange| {
                    for fruit in fruits.write().iter_mut() {
                        fruit.1 = change.checked;
                    }
                },
            }
            "All fruit"
        }
        for (index, (name, checked)) in fruits().into_iter().enumerate() {
            div { key: "{name}", class: "checkbox-row nested",
                Checkbox {
                    checked,
                    set_checked: move |change: CheckedChange| {
                        fruits.write()[index].1 = change.checked;
                    },
                }
                "{name}"
            }
        }
        div { class: "checkbox-row",
            Checkbox { checked: true }
            "Read-only"
        }
    }
}
