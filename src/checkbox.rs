//! Tri-state checkbox.
//!
//! The control holds no state. Its visual state is derived from the `checked`
//! and `indeterminate` props on every render, and activating it only calls the
//! setters it was given.

use dioxus::{logger::tracing::trace, prelude::*};

use crate::{
    activation::{is_activation_key, ActivationEvent},
    class_names::ClassList,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    /// An explicit `indeterminate: Some(true)` wins over `checked`.
    pub fn from_props(checked: bool, indeterminate: Option<bool>) -> Self {
        match (indeterminate, checked) {
            (Some(true), _) => CheckState::Indeterminate,
            (_, true) => CheckState::Checked,
            (_, false) => CheckState::Unchecked,
        }
    }

    /// Value of the `aria-checked` attribute.
    pub fn aria_checked(self) -> &'static str {
        match self {
            CheckState::Unchecked => "false",
            CheckState::Checked => "true",
            CheckState::Indeterminate => "mixed",
        }
    }

    pub fn is_filled(self) -> bool {
        self != CheckState::Unchecked
    }

    pub fn transition(self) -> CheckTransition {
        match self {
            CheckState::Indeterminate => CheckTransition {
                checked: false,
                clear_indeterminate: true,
            },
            CheckState::Checked => CheckTransition {
                checked: false,
                clear_indeterminate: false,
            },
            CheckState::Unchecked => CheckTransition {
                checked: true,
                clear_indeterminate: false,
            },
        }
    }
}

/// What one activation asks the owner of the state to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTransition {
    pub checked: bool,
    pub clear_indeterminate: bool,
}

impl CheckTransition {
    /// Invokes whichever setters are present. Both fire on the same
    /// activation when leaving the indeterminate state.
    pub fn dispatch<E>(
        self,
        event: E,
        set_checked: Option<impl FnOnce(bool, E)>,
        set_indeterminate: Option<impl FnOnce(bool)>,
    ) {
        if let Some(set_checked) = set_checked {
            set_checked(self.checked, event);
        }
        if self.clear_indeterminate {
            if let Some(set_indeterminate) = set_indeterminate {
                set_indeterminate(false);
            }
        }
    }
}

/// Payload of [`Checkbox`]'s `set_checked` handler.
#[derive(Debug, Clone)]
pub struct CheckedChange {
    pub checked: bool,
    pub event: ActivationEvent,
}

/// A tri-state checkbox.
///
/// Without `set_checked` the box is read-only for checked/unchecked changes.
/// `set_indeterminate` is only called when leaving the indeterminate state.
#[component]
pub fn Checkbox(
    checked: bool,
    set_checked: Option<EventHandler<CheckedChange>>,
    indeterminate: Option<bool>,
    set_indeterminate: Option<EventHandler<bool>>,
) -> Element {
    let state = CheckState::from_props(checked, indeterminate);
    let activate = move |event: ActivationEvent| {
        let transition = state.transition();
        trace!(?state, ?transition, ?event, "checkbox activated");
        transition.dispatch(
            event,
            set_checked.map(|h| move |checked, event| h.call(CheckedChange { checked, event })),
            set_indeterminate.map(|h| move |v| h.call(v)),
        );
    };
    let class = ClassList::new(
        "group relative h-[18px] w-[18px] select-none rounded-[4px] border focus:outline-none",
    )
    .push_if(!state.is_filled(), "border-neutral-500")
    .push_if(state.is_filled(), "border-primary-900 bg-primary-600")
    .build();

    rsx! {
        div {
            role: "checkbox",
            tabindex: 0,
            "aria-checked": state.aria_checked(),
            class,
            onclick: move |e: MouseEvent| activate(ActivationEvent::Pointer(e)),
            onkeydown: move |e: KeyboardEvent| {
                if is_activation_key(e.code()) {
                    e.prevent_default();
                    activate(ActivationEvent::Keyboard(e));
                }
            },
            div { class: "relative h-full",
                match state {
                    CheckState::Checked => rsx! {
                        svg {
                            class: "absolute inset-0 h-full w-full",
                            view_box: "0 0 18 18",
                            fill: "none",
                            path {
                                d: "M4.5 9.5l3 3 6-7",
                                stroke: "white",
                                stroke_width: "1.75",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                            }
                        }
                    },
                    CheckState::Indeterminate => rsx! {
                        div { class: "absolute top-[7px] right-[3.5px] h-[1.5px] w-[9px] rounded bg-white" }
                    },
                    CheckState::Unchecked => rsx! {},
                }
            }
        }
    }
}
