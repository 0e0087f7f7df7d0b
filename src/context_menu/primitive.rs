//! Unstyled context-menu primitive.
//!
//! Handles everything behavioural: open state and its change notification,
//! anchoring at the pointer, Escape and outside-pointer dismissal, arrow-key
//! focus movement, submenu disclosure, item selection and ARIA roles. The
//! themed components in the parent module only add classes and animation.

use std::{
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::anyhow;
use dioxus::{
    dioxus_core::Task,
    document::Eval,
    logger::tracing::{trace, warn},
    prelude::*,
};
use serde::Serialize;

use crate::activation::{is_activation_key, ActivationEvent};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Clone, Copy)]
struct RootScope {
    id: usize,
    open: Signal<bool>,
    anchor: Signal<(f64, f64)>,
    on_open_change: Callback<bool>,
}

impl RootScope {
    fn content_id(&self) -> String {
        format!("menukit-menu-{}", self.id)
    }

    fn trigger_marker(&self) -> String {
        self.id.to_string()
    }

    fn set_open(&self, open: bool) {
        let mut flag = self.open;
        if *flag.peek() == open {
            return;
        }
        flag.set(open);
        self.on_open_change.call(open);
    }

    fn open_at(&self, x: f64, y: f64) {
        let mut anchor = self.anchor;
        anchor.set((x, y));
        self.set_open(true);
    }
}

#[derive(Clone, Copy)]
struct SubScope {
    id: usize,
    open: Signal<bool>,
    on_open_change: Callback<bool>,
    trigger: Signal<Option<Rc<MountedData>>>,
}

impl SubScope {
    fn content_id(&self) -> String {
        format!("menukit-submenu-{}", self.id)
    }

    /// Submenus are controlled: the owner of `open` decides.
    fn set_open(&self, open: bool) {
        if *self.open.peek() == open {
            return;
        }
        self.on_open_change.call(open);
    }

    /// Closes the submenu and hands focus back to its trigger.
    fn close_to_trigger(&self) {
        self.set_open(false);
        let Some(trigger) = self.trigger.cloned() else {
            return;
        };
        spawn(async move {
            if let Err(e) = trigger.set_focus(true).await {
                warn!("Could not focus submenu trigger: {e:?}");
            }
        });
    }
}

/// Programmatic control of the enclosing menu. Changes made through it are
/// reported through `on_open_change` like any other.
#[derive(Clone, Copy)]
pub struct MenuHandle(RootScope);

impl MenuHandle {
    pub fn is_open(&self) -> bool {
        (self.0.open)()
    }

    pub fn open_at(&self, x: f64, y: f64) {
        self.0.open_at(x, y);
    }

    pub fn close(&self) {
        self.0.set_open(false);
    }
}

pub fn use_menu_handle() -> Option<MenuHandle> {
    try_use_context::<RootScope>().map(MenuHandle)
}

fn data_state(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

/// Root of a context menu. Keeps its own open state and reports every change
/// through `on_open_change`.
///
/// A non-modal menu leaves the rest of the page interactive: a pointer press
/// outside the content closes it without being swallowed. A modal one covers
/// the page with a transparent layer while open.
#[component]
pub fn Root(
    #[props(default)] modal: bool,
    #[props(default)] default_open: bool,
    on_open_change: EventHandler<bool>,
    children: Element,
) -> Element {
    let open = use_signal(|| default_open);
    let anchor = use_signal(|| (0.0, 0.0));
    let scope = use_context_provider(|| RootScope {
        id: next_id(),
        open,
        anchor,
        on_open_change,
    });

    let mut watch: Signal<Option<OutsidePointerWatch>> = use_signal(|| None);
    use_effect(move || {
        let is_open = open();
        if let Some(previous) = watch.write().take() {
            previous.stop();
        }
        if is_open && !modal {
            match OutsidePointerWatch::start(scope) {
                Ok(started) => watch.set(Some(started)),
                Err(e) => warn!("Could not watch for outside clicks: {e:?}"),
            }
        }
    });
    use_drop(move || {
        if let Ok(mut current) = watch.try_write() {
            if let Some(previous) = current.take() {
                previous.stop();
            }
        }
    });

    rsx! {
        if modal && open() {
            div {
                style: "position: fixed; inset: 0;",
                onpointerdown: move |_| scope.set_open(false),
                oncontextmenu: move |e: MouseEvent| {
                    e.prevent_default();
                    scope.set_open(false);
                },
            }
        }
        {children}
    }
}

/// Reports the first pointer press outside the content, then stays idle until
/// told to stop. The listener is removed either way.
const OUTSIDE_POINTER_JS: &str = r#"
const { content, trigger } = await dioxus.recv();
const detach = () => document.removeEventListener("pointerdown", onPointerDown, true);
const onPointerDown = (event) => {
    const menu = document.getElementById(content);
    if (menu && menu.contains(event.target)) {
        return;
    }
    // a right-click on the trigger moves the open menu instead of closing it
    if (event.button === 2 && event.target.closest(`[data-menukit-trigger="${trigger}"]`)) {
        return;
    }
    detach();
    dioxus.send(true);
};
document.addEventListener("pointerdown", onPointerDown, true);
await dioxus.recv();
detach();
"#;

#[derive(Serialize)]
struct WatchTargets {
    content: String,
    trigger: String,
}

/// A running outside-pointer listener and the task waiting on it.
#[derive(Clone, Copy)]
struct OutsidePointerWatch {
    eval: Eval,
    task: Task,
}

impl OutsidePointerWatch {
    fn start(scope: RootScope) -> anyhow::Result<Self> {
        let eval = document::eval(OUTSIDE_POINTER_JS);
        eval.send(WatchTargets {
            content: scope.content_id(),
            trigger: scope.trigger_marker(),
        })
        .map_err(|e| anyhow!("send failed: {e:?}"))?;
        let task = spawn(async move {
            let mut eval = eval;
            match eval.recv::<bool>().await {
                Ok(_) => {
                    trace!("pointer pressed outside the menu");
                    scope.set_open(false);
                }
                Err(e) => warn!("Outside click listener failed: {e:?}"),
            }
        });
        Ok(Self { eval, task })
    }

    /// Removes the listener if it is still registered.
    fn stop(self) {
        self.task.cancel();
        if let Err(e) = self.eval.send(false) {
            trace!("outside click listener already gone: {e:?}");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusMove {
    First,
    Last,
    Next,
    Previous,
}

impl FocusMove {
    fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowDown => Some(FocusMove::Next),
            Key::ArrowUp => Some(FocusMove::Previous),
            Key::Home => Some(FocusMove::First),
            Key::End => Some(FocusMove::Last),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            FocusMove::First => "first",
            FocusMove::Last => "last",
            FocusMove::Next => "next",
            FocusMove::Previous => "previous",
        }
    }
}

/// Moves focus among the items that belong directly to the menu `menu_id`.
fn move_focus(menu_id: &str, movement: FocusMove) {
    let id = serde_json::to_string(menu_id).unwrap_or_default();
    let movement = movement.as_str();
    let js = format!(
        r#"
const menu = document.getElementById({id});
if (menu) {{
    const items = Array.from(menu.querySelectorAll('[role^="menuitem"]'))
        .filter((el) => el.closest('[role="menu"]') === menu && el.getAttribute("aria-disabled") !== "true");
    if (items.length) {{
        const current = items.indexOf(document.activeElement);
        let next = 0;
        switch ("{movement}") {{
            case "last": next = items.length - 1; break;
            case "next": next = current < 0 ? 0 : (current + 1) % items.length; break;
            case "previous": next = current < 0 ? items.length - 1 : (current - 1 + items.length) % items.length; break;
        }}
        items[next].focus();
    }}
}}
"#
    );
    let eval = document::eval(&js);
    spawn(async move {
        if let Err(e) = eval.join::<serde_json::Value>().await {
            warn!("Could not move menu focus: {e:?}");
        }
    });
}

/// Area that opens the menu on right-click, the context-menu key or
/// Shift+F10.
#[component]
pub fn Trigger(
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let Some(scope) = try_use_context::<RootScope>() else {
        warn!("context_menu::Trigger rendered outside of a Menu");
        return rsx! {
            {children}
        };
    };
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    rsx! {
        div {
            "data-state": data_state((scope.open)()),
            "data-disabled": disabled.then_some("true"),
            "data-menukit-trigger": scope.trigger_marker(),
            onmounted: move |e: MountedEvent| mounted.set(Some(e.data())),
            oncontextmenu: move |e: MouseEvent| {
                if disabled {
                    return;
                }
                e.prevent_default();
                let point = e.client_coordinates();
                scope.open_at(point.x, point.y);
            },
            onkeydown: move |e: KeyboardEvent| {
                let by_key = e.key() == Key::ContextMenu
                    || (e.modifiers().shift() && e.code() == Code::F10);
                if disabled || !by_key {
                    return;
                }
                e.prevent_default();
                let Some(element) = mounted.cloned() else {
                    return;
                };
                spawn(async move {
                    match element.get_client_rect().await {
                        Ok(rect) => scope.open_at(rect.origin.x, rect.origin.y),
                        Err(e) => warn!("Could not measure menu trigger: {e:?}"),
                    }
                });
            },
            ..attributes,
            {children}
        }
    }
}

/// Renders children in place. Content is positioned `fixed`, which already
/// takes it out of the surrounding layout.
#[component]
pub fn Portal(children: Element) -> Element {
    rsx! {
        {children}
    }
}

/// Floating menu panel, positioned at the point the menu was opened from.
#[component]
pub fn Content(
    #[props(default)] class: String,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let Some(scope) = try_use_context::<RootScope>() else {
        warn!("context_menu::Content rendered outside of a Menu");
        return rsx! {};
    };
    let (x, y) = (scope.anchor)();
    let id = scope.content_id();
    let keys_id = id.clone();

    rsx! {
        div {
            id,
            class,
            role: "menu",
            "aria-orientation": "vertical",
            tabindex: -1,
            "data-state": data_state((scope.open)()),
            style: "position: fixed; left: {x}px; top: {y}px; z-index: 50; outline: none;",
            onmounted: move |e: MountedEvent| async move {
                if let Err(err) = e.set_focus(true).await {
                    warn!("Could not focus menu: {err:?}");
                }
            },
            oncontextmenu: move |e: MouseEvent| e.prevent_default(),
            onkeydown: move |e: KeyboardEvent| {
                let key = e.key();
                if key == Key::Escape || key == Key::Tab {
                    e.prevent_default();
                    scope.set_open(false);
                } else if let Some(movement) = FocusMove::from_key(&key) {
                    e.prevent_default();
                    move_focus(&keys_id, movement);
                }
            },
            ..attributes,
            {children}
        }
    }
}

/// A selectable menu item. Selecting it closes the whole menu unless
/// `close_on_select` is false.
#[component]
pub fn Item(
    on_select: Option<EventHandler<ActivationEvent>>,
    #[props(default)] disabled: bool,
    #[props(default = true)] close_on_select: bool,
    #[props(default)] stop_propagation: bool,
    #[props(default = "menuitem")] item_role: &'static str,
    aria_checked: Option<&'static str>,
    #[props(default)] class: String,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let scope = try_use_context::<RootScope>();
    let select = move |event: ActivationEvent| {
        if stop_propagation {
            event.stop_propagation();
        }
        if disabled {
            return;
        }
        trace!(?event, role = item_role, "menu item selected");
        if let Some(handler) = on_select {
            handler.call(event);
        }
        if close_on_select {
            if let Some(scope) = scope {
                scope.set_open(false);
            }
        }
    };

    rsx! {
        div {
            role: item_role,
            tabindex: -1,
            class,
            "aria-checked": aria_checked,
            "aria-disabled": disabled.then_some("true"),
            "data-disabled": disabled.then_some("true"),
            onclick: move |e: MouseEvent| select(ActivationEvent::Pointer(e)),
            onkeydown: move |e: KeyboardEvent| {
                if is_activation_key(e.code()) {
                    e.prevent_default();
                    select(ActivationEvent::Keyboard(e));
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn Separator(
    #[props(default)] class: String,
    #[props(default)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        div {
            role: "separator",
            "aria-orientation": "horizontal",
            class,
            ..attributes,
        }
    }
}

/// Nested menu. `open` is owned by the caller, who is told about requested
/// changes through `on_open_change`.
#[component]
pub fn Sub(open: Signal<bool>, on_open_change: EventHandler<bool>, children: Element) -> Element {
    let trigger = use_signal(|| None);
    let scope = use_context_provider(|| SubScope {
        id: next_id(),
        open,
        on_open_change,
        trigger,
    });

    rsx! {
        div {
            style: "position: relative;",
            onmouseleave: move |_| scope.set_open(false),
            {children}
        }
    }
}

/// Item that opens the enclosing [`Sub`] on hover, click, ArrowRight, Enter
/// or Space.
#[component]
pub fn SubTrigger(
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let Some(scope) = try_use_context::<SubScope>() else {
        warn!("context_menu::Subtrigger rendered outside of a Submenu");
        return rsx! {};
    };
    let open = (scope.open)();
    let mut trigger = scope.trigger;

    rsx! {
        div {
            role: "menuitem",
            tabindex: -1,
            class,
            "aria-haspopup": "menu",
            "aria-expanded": if open { "true" } else { "false" },
            "aria-controls": scope.content_id(),
            "aria-disabled": disabled.then_some("true"),
            "data-state": data_state(open),
            onmounted: move |e: MountedEvent| trigger.set(Some(e.data())),
            onmouseenter: move |_| {
                if !disabled {
                    scope.set_open(true);
                }
            },
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                if !disabled {
                    scope.set_open(true);
                }
            },
            onkeydown: move |e: KeyboardEvent| {
                if disabled {
                    return;
                }
                if e.key() == Key::ArrowRight || is_activation_key(e.code()) {
                    e.prevent_default();
                    e.stop_propagation();
                    scope.set_open(true);
                }
            },
            ..attributes,
            {children}
        }
    }
}

/// Panel of a [`Sub`], placed beside its trigger. The gap of `side_offset`
/// pixels is padding, so moving the pointer across it keeps the submenu open.
#[component]
pub fn SubContent(
    #[props(default)] side_offset: u32,
    #[props(default)] class: String,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let Some(scope) = try_use_context::<SubScope>() else {
        warn!("context_menu::Subcontent rendered outside of a Submenu");
        return rsx! {};
    };
    let id = scope.content_id();
    let keys_id = id.clone();

    rsx! {
        div {
            id,
            class,
            role: "menu",
            "aria-orientation": "vertical",
            tabindex: -1,
            "data-state": data_state((scope.open)()),
            style: "position: absolute; top: 0; left: 100%; padding-left: {side_offset}px; outline: none;",
            onmounted: move |e: MountedEvent| async move {
                if let Err(err) = e.set_focus(true).await {
                    warn!("Could not focus menu: {err:?}");
                }
            },
            onkeydown: move |e: KeyboardEvent| {
                let key = e.key();
                if key == Key::ArrowLeft {
                    e.prevent_default();
                    e.stop_propagation();
                    scope.close_to_trigger();
                } else if let Some(movement) = FocusMove::from_key(&key) {
                    e.prevent_default();
                    e.stop_propagation();
                    move_focus(&keys_id, movement);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn RadioGroup(#[props(default)] attributes: Vec<Attribute>, children: Element) -> Element {
    rsx! {
        div { role: "group", ..attributes, {children} }
    }
}

/// Radio item; reports its `value` when selected.
#[component]
pub fn RadioItem(
    value: String,
    checked: bool,
    on_select: Option<EventHandler<String>>,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        Item {
            item_role: "menuitemradio",
            aria_checked: Some(if checked { "true" } else { "false" }),
            disabled,
            class,
            on_select: move |_: ActivationEvent| {
                if let Some(handler) = on_select {
                    handler.call(value.clone());
                }
            },
            {children}
        }
    }
}

/// State reported by a [`CheckboxItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl CheckedState {
    pub fn from_flags(checked: bool, indeterminate: bool) -> Self {
        match (indeterminate, checked) {
            (true, _) => CheckedState::Indeterminate,
            (false, true) => CheckedState::Checked,
            (false, false) => CheckedState::Unchecked,
        }
    }

    /// State requested by selecting the item. An indeterminate item becomes
    /// checked.
    pub fn toggled(self) -> Self {
        match self {
            CheckedState::Checked => CheckedState::Unchecked,
            CheckedState::Unchecked | CheckedState::Indeterminate => CheckedState::Checked,
        }
    }

    pub fn aria_checked(self) -> &'static str {
        match self {
            CheckedState::Checked => "true",
            CheckedState::Unchecked => "false",
            CheckedState::Indeterminate => "mixed",
        }
    }
}

/// Checkbox item. Clicks do not propagate past it.
#[component]
pub fn CheckboxItem(
    checked: CheckedState,
    on_checked_change: EventHandler<CheckedState>,
    #[props(default)] disabled: bool,
    #[props(default = true)] close_on_select: bool,
    #[props(default)] class: String,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        Item {
            item_role: "menuitemcheckbox",
            aria_checked: checked.aria_checked(),
            disabled,
            close_on_select,
            stop_propagation: true,
            class,
            attributes,
            on_select: move |_: ActivationEvent| on_checked_change.call(checked.toggled()),
            {children}
        }
    }
}
