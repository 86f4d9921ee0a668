//! Selector view and list helpers.

mod list_nav;
mod selector_view;

pub use list_nav::{calculate_centered_scroll, handle_list_navigation};
pub use selector_view::{Focus, SelectorEvent, SelectorView, Trigger, render_trigger};
