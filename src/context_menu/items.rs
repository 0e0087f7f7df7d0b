use dioxus::prelude::*;

use super::primitive;
use crate::{
    activation::ActivationEvent,
    class_names::{take_class, ClassList},
};

const ITEM_CLASS: &str =
    "relative flex w-full px-3 hover:cursor-pointer hover:bg-neutral-800 focus:bg-neutral-800 focus:outline-none";

/// Non-interactive heading row.
#[component]
pub fn Title(#[props(default)] indent: bool, children: Element) -> Element {
    let class = ClassList::new("flex h-7 select-none items-center px-3 text-xs text-neutral-150")
        .push_if(indent, "pl-10")
        .build();
    rsx! {
        div { class, {children} }
    }
}

#[component]
pub fn Divider() -> Element {
    rsx! {
        primitive::Separator { class: "border-b-[0.5px] border-neutral-500" }
    }
}

/// Label and optional leading image shared by buttons and subtriggers.
#[component]
fn ItemLabel(text: String, image: Option<String>, destructive: bool, leading: bool) -> Element {
    let class = ClassList::new("flex items-center text-sm text-white")
        .push_if(leading, "leading-4")
        .push_if(destructive, "text-danger-100")
        .build();
    rsx! {
        span { class,
            if let Some(src) = image {
                img {
                    class: "mr-2 h-5 w-5 rounded-full",
                    src,
                    alt: "Context Menu Icon",
                }
            }
            span { "{text}" }
        }
    }
}

fn item_layout(caption: bool) -> ClassList {
    ClassList::new(ITEM_CLASS)
        .push_if(!caption, "flex h-8 items-center")
        .push_if(caption, "h-12 flex-col justify-center")
}

/// A menu entry. Single line without `caption`, two lines with one.
/// Activating it calls `onclick` and closes the menu.
#[component]
pub fn Button(
    text: String,
    image: Option<String>,
    caption: Option<String>,
    #[props(default)] destructive: bool,
    #[props(default)] indent: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<ActivationEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut attributes = attributes;
    let class = item_layout(caption.is_some())
        .push_if(indent, "pl-10")
        .push_if(disabled, "pointer-events-none opacity-50")
        .extend(take_class(&mut attributes))
        .build();

    rsx! {
        primitive::Item { on_select: onclick, disabled, class, attributes,
            ItemLabel { text, image, destructive, leading: true }
            if let Some(caption) = caption {
                span { class: "text-xs leading-4 text-neutral-150", "{caption}" }
            }
        }
    }
}

/// Button-like item that opens the enclosing [`Submenu`](super::Submenu).
/// Highlighted while its submenu is open.
#[component]
pub fn Subtrigger(
    text: String,
    image: Option<String>,
    caption: Option<String>,
    #[props(default)] destructive: bool,
    #[props(default)] chevron: bool,
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attributes = attributes;
    let class = item_layout(caption.is_some())
        .push("space-y-[0.5] data-[state=open]:bg-neutral-800")
        .push_if(disabled, "pointer-events-none opacity-50")
        .extend(take_class(&mut attributes))
        .build();

    rsx! {
        primitive::SubTrigger { disabled, class, attributes,
            ItemLabel { text, image, destructive, leading: false }
            if let Some(caption) = caption {
                span { class: "text-xs text-neutral-150", "{caption}" }
            }
            if chevron {
                svg {
                    class: "absolute right-2 top-1/2 h-3 w-3 -translate-y-1/2 text-neutral-150",
                    view_box: "0 0 12 12",
                    fill: "none",
                    path {
                        d: "M4.5 2.5L8 6l-3.5 3.5",
                        stroke: "currentColor",
                        stroke_width: "1.5",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                }
            }
            {children}
        }
    }
}
