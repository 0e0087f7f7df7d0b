//! Animated mount and unmount.
//!
//! [`AnimatedPresence`] keeps its children mounted while they are present and
//! while their exit animation runs. [`Motion`] is the element that animates;
//! it reports `animationend` back so the phase can settle.

use dioxus::{logger::tracing::trace, prelude::*};

pub const ENTER_ANIMATION: &str = "menu-motion-enter";
pub const EXIT_ANIMATION: &str = "menu-motion-exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Hidden => "hidden",
            Phase::Entering => "entering",
            Phase::Visible => "visible",
            Phase::Exiting => "exiting",
        }
    }
}

/// Mount state of an animated element. The latest requested target always
/// wins; an interrupted animation is simply replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    phase: Phase,
    animate: bool,
}

impl Presence {
    pub fn new(present: bool, animate: bool) -> Self {
        let phase = match (present, animate) {
            (false, _) => Phase::Hidden,
            (true, true) => Phase::Entering,
            (true, false) => Phase::Visible,
        };
        Self { phase, animate }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// The state the element is heading to.
    pub fn target(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Visible)
    }

    pub fn set_target(&mut self, present: bool) {
        if present == self.target() {
            return;
        }
        self.phase = match (present, self.animate) {
            (true, true) => Phase::Entering,
            (true, false) => Phase::Visible,
            (false, true) => Phase::Exiting,
            (false, false) => Phase::Hidden,
        };
    }

    /// Settles the phase when the matching animation finishes. Any other
    /// animation name leaves the phase alone.
    pub fn animation_finished(&mut self, name: &str) {
        self.phase = match (self.phase, name) {
            (Phase::Entering, ENTER_ANIMATION) => Phase::Visible,
            (Phase::Exiting, EXIT_ANIMATION) => Phase::Hidden,
            (phase, _) => phase,
        };
    }
}

#[derive(Clone, Copy)]
struct PresenceScope(Signal<Presence>);

/// Mounts `children` while `present` is true and until their [`Motion`]
/// element finishes its exit animation.
#[component]
pub fn AnimatedPresence(
    present: Signal<bool>,
    #[props(default = true)] animate: bool,
    children: Element,
) -> Element {
    let mut presence = use_signal(|| Presence::new(*present.peek(), animate));
    use_context_provider(|| PresenceScope(presence));
    use_effect(move || {
        let target = present();
        if presence.peek().target() != target {
            presence.write().set_target(target);
            trace!(phase = ?presence.peek().phase(), "presence target changed");
        }
    });

    if !presence.read().is_mounted() {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

/// The animated element of an [`AnimatedPresence`]: scales and fades between
/// `initial_scale` and full size over `duration_ms`.
#[component]
pub fn Motion(
    duration_ms: u32,
    initial_scale: f64,
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let Some(PresenceScope(mut presence)) = try_use_context::<PresenceScope>() else {
        return rsx! {
            div { class, style, {children} }
        };
    };
    let phase = presence.read().phase();
    rsx! {
        div {
            class: "menu-motion {class}",
            "data-phase": phase.as_str(),
            style: "animation-duration: {duration_ms}ms; --menu-initial-scale: {initial_scale}; {style}",
            onanimationend: move |e: AnimationEvent| {
                // a nested panel's animation belongs to its own presence
                e.stop_propagation();
                presence.write().animation_finished(&e.animation_name());
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_or_entering() {
        assert_eq!(Presence::new(false, true).phase(), Phase::Hidden);
        assert_eq!(Presence::new(true, true).phase(), Phase::Entering);
        assert_eq!(Presence::new(true, false).phase(), Phase::Visible);
        assert!(!Presence::new(false, true).is_mounted());
    }

    #[test]
    fn open_then_close() {
        let mut p = Presence::new(false, true);
        p.set_target(true);
        assert_eq!(p.phase(), Phase::Entering);
        assert!(p.is_mounted());
        p.animation_finished(ENTER_ANIMATION);
        assert_eq!(p.phase(), Phase::Visible);
        p.set_target(false);
        assert_eq!(p.phase(), Phase::Exiting);
        assert!(p.is_mounted());
        p.animation_finished(EXIT_ANIMATION);
        assert_eq!(p.phase(), Phase::Hidden);
        assert!(!p.is_mounted());
    }

    #[test]
    fn latest_target_wins() {
        let mut p = Presence::new(true, true);
        p.set_target(false);
        assert_eq!(p.phase(), Phase::Exiting);
        p.set_target(true);
        assert_eq!(p.phase(), Phase::Entering);
        // the cancelled exit never reports completion, the enter does
        p.animation_finished(ENTER_ANIMATION);
        assert_eq!(p.phase(), Phase::Visible);
    }

    #[test]
    fn mismatched_animation_names_are_ignored() {
        let mut p = Presence::new(true, true);
        p.animation_finished(EXIT_ANIMATION);
        p.animation_finished("spinner");
        assert_eq!(p.phase(), Phase::Entering);
        p.set_target(false);
        p.animation_finished(ENTER_ANIMATION);
        assert_eq!(p.phase(), Phase::Exiting);
    }

    #[test]
    fn repeated_targets_are_noops() {
        let mut p = Presence::new(true, true);
        p.animation_finished(ENTER_ANIMATION);
        p.set_target(true);
        assert_eq!(p.phase(), Phase::Visible);
        let mut q = Presence::new(false, true);
        q.set_target(false);
        assert_eq!(q.phase(), Phase::Hidden);
    }

    #[test]
    fn without_animation_changes_are_immediate() {
        let mut p = Presence::new(false, false);
        p.set_target(true);
        assert_eq!(p.phase(), Phase::Visible);
        p.set_target(false);
        assert_eq!(p.phase(), Phase::Hidden);
    }
}
