mod support;

use dioxus::prelude::*;
use menukit::{CheckedChange, Checkbox};
use support::{click, key, Harness, Log};

#[component]
fn Rendered(checked: bool, indeterminate: Option<bool>) -> Element {
    rsx! {
        Checkbox { checked, indeterminate, set_checked: move |_: CheckedChange| {} }
    }
}

fn render(checked: bool, indeterminate: Option<bool>) -> String {
    let mut dom = VirtualDom::new_with_props(Rendered, RenderedProps { checked, indeterminate });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn aria_checked_follows_checked() {
    for checked in [false, true] {
        for indeterminate in [None, Some(false)] {
            let html = render(checked, indeterminate);
            assert!(html.contains(r#"role="checkbox""#));
            assert!(
                html.contains(&format!(r#"aria-checked="{checked}""#)),
                "checked={checked} indeterminate={indeterminate:?}: {html}"
            );
        }
    }
}

#[test]
fn indeterminate_renders_mixed_with_a_bar() {
    for checked in [false, true] {
        let html = render(checked, Some(true));
        assert!(html.contains(r#"aria-checked="mixed""#));
        assert!(html.contains("w-[9px]"));
        assert!(!html.contains("<svg"));
    }
}

#[test]
fn glyph_matches_state() {
    let checked = render(true, None);
    assert!(checked.contains("<svg"));
    assert!(checked.contains("bg-primary-600"));

    let unchecked = render(false, None);
    assert!(!unchecked.contains("<svg"));
    assert!(!unchecked.contains("w-[9px]"));
    assert!(unchecked.contains("border-neutral-500"));
    assert!(!unchecked.contains("bg-primary-600"));
}

fn read_only() -> Element {
    rsx! {
        Checkbox { checked: true }
    }
}

#[test]
fn renders_without_setters() {
    let mut dom = VirtualDom::new(read_only);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"aria-checked="true""#));
    assert!(html.contains("tabindex=0"));
}

#[derive(Clone)]
struct Interactive {
    checked: bool,
    indeterminate: Option<bool>,
    log: Log,
}

fn interactive(props: Interactive) -> Element {
    let Interactive { checked, indeterminate, log } = props;
    let on_indeterminate = log.clone();
    rsx! {
        Checkbox {
            checked,
            indeterminate,
            set_checked: move |change: CheckedChange| log.push(format!("checked {}", change.checked)),
            set_indeterminate: move |value: bool| on_indeterminate.push(format!("indeterminate {value}")),
        }
    }
}

fn mount(checked: bool, indeterminate: Option<bool>) -> (Harness, Log) {
    let log = Log::default();
    let harness = Harness::new(
        interactive,
        Interactive {
            checked,
            indeterminate,
            log: log.clone(),
        },
    );
    (harness, log)
}

#[test]
fn click_leaves_indeterminate_through_both_setters() {
    let (mut dom, log) = mount(true, Some(true));
    let target = dom.find("aria-checked", |v| v == "mixed");
    dom.fire(target, "click", click());
    assert_eq!(log.take(), ["checked false", "indeterminate false"]);
}

#[test]
fn click_toggles_checked() {
    let (mut dom, log) = mount(false, None);
    let target = dom.find("aria-checked", |v| v == "false");
    dom.fire(target, "click", click());
    assert_eq!(log.take(), ["checked true"]);

    let (mut dom, log) = mount(true, Some(false));
    let target = dom.find("aria-checked", |v| v == "true");
    dom.fire(target, "click", click());
    assert_eq!(log.take(), ["checked false"]);
}

#[test]
fn activation_keys_toggle_and_others_do_nothing() {
    let (mut dom, log) = mount(false, None);
    let target = dom.find("aria-checked", |_| true);
    dom.fire(target, "keydown", key(Key::Enter, Code::Enter));
    dom.fire(target, "keydown", key(Key::Character(" ".into()), Code::Space));
    assert_eq!(log.take(), ["checked true", "checked true"]);

    dom.fire(target, "keydown", key(Key::Character("a".into()), Code::KeyA));
    dom.fire(target, "keydown", key(Key::Escape, Code::Escape));
    assert!(log.take().is_empty());
}
