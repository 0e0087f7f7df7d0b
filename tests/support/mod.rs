//! Drives a `VirtualDom` with synthetic events and keeps track of the elements
//! it creates, so tests can find a listener by one of its element's dynamic
//! attributes.
#![allow(dead_code)]

use std::{any::Any, cell::RefCell, collections::HashMap, rc::Rc};

use dioxus::{
    dioxus_core::{AttributeValue, ElementId, Mutation, Mutations},
    html::{
        geometry::{ClientPoint, Coordinates, ElementPoint, PagePoint, ScreenPoint},
        input_data::{MouseButton, MouseButtonSet},
        SerializedHtmlEventConverter,
    },
    prelude::*,
};
use serde_json::json;

/// Calls recorded by event handlers under test.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    pub fn push(&self, entry: impl ToString) {
        self.0.borrow_mut().push(entry.to_string());
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

pub struct Harness {
    dom: VirtualDom,
    attributes: HashMap<ElementId, Vec<(&'static str, String, usize)>>,
    writes: usize,
}

impl Harness {
    pub fn new<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new_with_props(root, props);
        let mutations = dom.rebuild_to_vec();
        let mut harness = Self {
            dom,
            attributes: HashMap::new(),
            writes: 0,
        };
        harness.apply(mutations);
        harness.settle();
        harness
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Runs effects, tasks and re-renders until the DOM stops changing.
    pub fn settle(&mut self) {
        for _ in 0..16 {
            let mutations = self.dom.render_immediate_to_vec();
            self.apply(mutations);
        }
    }

    fn apply(&mut self, mutations: Mutations) {
        for edit in mutations.edits {
            match edit {
                Mutation::LoadTemplate { id, .. }
                | Mutation::AssignId { id, .. }
                | Mutation::CreatePlaceholder { id }
                | Mutation::CreateTextNode { id, .. } => {
                    self.attributes.remove(&id);
                }
                Mutation::SetAttribute {
                    name,
                    value: AttributeValue::Text(value),
                    id,
                    ..
                } => {
                    self.writes += 1;
                    let attributes = self.attributes.entry(id).or_default();
                    attributes.retain(|(n, ..)| *n != name);
                    attributes.push((name, value, self.writes));
                }
                _ => {}
            }
        }
    }

    /// The most recently rendered element whose `name` attribute matches.
    pub fn find(&self, name: &str, matches: impl Fn(&str) -> bool) -> ElementId {
        self.attributes
            .iter()
            .flat_map(|(id, attributes)| {
                attributes
                    .iter()
                    .filter(|(n, value, _)| *n == name && matches(value))
                    .map(move |(.., written)| (*written, *id))
            })
            .max()
            .map(|(_, id)| id)
            .unwrap_or_else(|| panic!("no element with a matching {name} attribute"))
    }

    /// Dispatches a bubbling event at `target` and lets the DOM settle.
    pub fn fire(&mut self, target: ElementId, name: &str, data: impl Any) {
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::new(data))) as Rc<dyn Any>,
            true,
        );
        self.dom.runtime().handle_event(name, event, target);
        self.settle();
    }
}

pub fn click() -> SerializedMouseData {
    SerializedMouseData::default()
}

pub fn right_click_at(x: f64, y: f64) -> SerializedMouseData {
    SerializedMouseData::new(
        Some(MouseButton::Secondary),
        MouseButtonSet::empty(),
        Coordinates::new(
            ScreenPoint::new(x, y),
            ClientPoint::new(x, y),
            ElementPoint::new(0.0, 0.0),
            PagePoint::new(x, y),
        ),
        Modifiers::empty(),
    )
}

pub fn key(key: Key, code: Code) -> SerializedKeyboardData {
    SerializedKeyboardData::new(key, code, Location::Standard, false, Modifiers::empty(), false)
}

pub fn animation_end(name: &str) -> SerializedAnimationData {
    serde_json::from_value(json!({
        "animation_name": name,
        "pseudo_element": "",
        "elapsed_time": 0.0,
    }))
    .expect("animation event data")
}
