//! Platform-agnostic keyboard event type.
//!
//! The selector view matches on this rather than on crossterm events
//! directly, so tests can build keys without a terminal.

pub use crossterm::event::KeyCode;

/// Key press with its modifiers flattened to booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Plain key with no modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    /// Check if no modifiers are pressed.
    pub fn no_modifiers(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }

    /// Check if this is a "back tab" (Shift+Tab).
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::BackTab) || (matches!(self.code, KeyCode::Tab) && self.shift)
    }
}

impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn test_from_crossterm_modifiers() {
        let key: AppKeyEvent =
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL | KeyModifiers::SHIFT).into();
        assert!(key.ctrl);
        assert!(key.shift);
        assert!(!key.alt);
        assert!(!key.no_modifiers());
    }

    #[test]
    fn test_back_tab() {
        let back: AppKeyEvent = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT).into();
        assert!(back.is_back_tab());
        assert!(!AppKeyEvent::plain(KeyCode::Tab).is_back_tab());
    }
}
