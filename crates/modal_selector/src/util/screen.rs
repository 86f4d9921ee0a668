//! Display size capability for mounting a selector.

use modal_selector_core::AvailableHeight;
use ratatui::layout::{Rect, Size};

/// Terminal size snapshot, taken once when a selector is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u16,
    pub height: u16,
}

impl AvailableHeight for ScreenSize {
    fn available_height(&self) -> u16 {
        self.height
    }
}

impl From<Size> for ScreenSize {
    fn from(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl From<Rect> for ScreenSize {
    fn from(rect: Rect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }
}
