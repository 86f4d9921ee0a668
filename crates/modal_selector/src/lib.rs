//! Terminal front end for the modal selector
//!
//! Draws the selector state machine from `modal_selector_core` with ratatui:
//! - Trigger rendering, with an optional custom replacement
//! - The overlay: capped scrollable option list plus a cancel action
//! - Height measurement reported back to the selector on render
//! - Keyboard mapping onto open/close/select/dismiss
//! - YAML item lists and file logging for the demo binary

pub mod app;
pub mod components;
pub mod data;
pub mod event;
pub mod logging;
pub mod util;

pub use app::{App, AppConfig};
pub use components::{Focus, SelectorEvent, SelectorView, Trigger, render_trigger};
pub use data::items::{LoadError, Payload, default_items, load_items, parse_items};
pub use event::AppKeyEvent;
pub use logging::init_logging;
pub use util::screen::ScreenSize;
pub use util::styles::SelectorStyles;
