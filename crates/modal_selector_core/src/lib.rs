//! Modal selector state machine
//!
//! A dropdown control whose trigger opens an overlay listing selectable
//! options, optionally grouped under non-selectable section headers.
//! This crate is toolkit-free and holds:
//! - The selection controller (`Selector`): open/closed state, current label, host callback
//! - The item model resolver (`resolve_rows`): sections vs. options
//! - The dynamic height estimator (`HeightEstimator`): measure one option, then settle
//! - The overlay composer (`Overlay`, `options_max_height`): capped scroll height
//!
//! Rendering is left to a collaborator that reports the first option's
//! height back through [`Selector::report_item_height`].
//!
//! ```ignore
//! let mut selector = Selector::mount(
//!     SelectorConfig::new().on_change(|fruit: &String| println!("{fruit}")),
//!     &terminal_height,
//! );
//! selector.open();
//! let overlay = selector.compose(&items);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod height;
pub mod item;
pub mod overlay;
pub mod selector;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use height::{HeightEstimator, Measurement};
pub use item::{Item, OptionRow, Row, resolve_rows};
pub use overlay::{AvailableHeight, Overlay, OverlayId, options_max_height};
pub use selector::{
    DEFAULT_CANCEL_TEXT, DEFAULT_INIT_VALUE, OnChange, SelectionState, Selector, SelectorConfig,
};
