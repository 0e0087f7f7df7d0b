use std::fmt;

use dioxus::prelude::*;

/// The event that activated a control: a pointer click or a key press.
#[derive(Clone)]
pub enum ActivationEvent {
    Pointer(MouseEvent),
    Keyboard(KeyboardEvent),
}

impl ActivationEvent {
    pub fn stop_propagation(&self) {
        match self {
            ActivationEvent::Pointer(e) => e.stop_propagation(),
            ActivationEvent::Keyboard(e) => e.stop_propagation(),
        }
    }

    pub fn prevent_default(&self) {
        match self {
            ActivationEvent::Pointer(e) => e.prevent_default(),
            ActivationEvent::Keyboard(e) => e.prevent_default(),
        }
    }
}

impl fmt::Debug for ActivationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationEvent::Pointer(_) => f.write_str("Pointer"),
            ActivationEvent::Keyboard(e) => write!(f, "Keyboard({:?})", e.code()),
        }
    }
}

/// Keys that activate a focused control, like a click.
pub fn is_activation_key(code: Code) -> bool {
    matches!(code, Code::Space | Code::Enter | Code::NumpadEnter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_keys() {
        assert!(is_activation_key(Code::Space));
        assert!(is_activation_key(Code::Enter));
        assert!(is_activation_key(Code::NumpadEnter));
        assert!(!is_activation_key(Code::Escape));
        assert!(!is_activation_key(Code::KeyA));
    }
}
