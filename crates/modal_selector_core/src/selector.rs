//! Selection controller: visibility, current label, and the host callback.

use std::fmt;

use crate::height::HeightEstimator;
use crate::item::{Item, OptionRow, resolve_rows};
use crate::overlay::{AvailableHeight, Overlay, OverlayId, options_max_height};

/// Trigger label shown until the host supplies one.
pub const DEFAULT_INIT_VALUE: &str = "Select me!";

/// Label of the cancel action when the host supplies none.
pub const DEFAULT_CANCEL_TEXT: &str = "cancel";

/// Host callback invoked with the payload of every confirmed selection.
pub type OnChange<P> = Box<dyn FnMut(&P)>;

/// Host-supplied inputs for mounting a [`Selector`].
pub struct SelectorConfig<P> {
    pub init_value: String,
    pub cancel_text: String,
    pub on_change: OnChange<P>,
}

impl<P> Default for SelectorConfig<P> {
    fn default() -> Self {
        Self {
            init_value: DEFAULT_INIT_VALUE.to_string(),
            cancel_text: DEFAULT_CANCEL_TEXT.to_string(),
            on_change: Box::new(|_| {}),
        }
    }
}

impl<P> SelectorConfig<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_value(mut self, value: impl Into<String>) -> Self {
        self.init_value = value.into();
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    pub fn on_change(mut self, on_change: impl FnMut(&P) + 'static) -> Self {
        self.on_change = Box::new(on_change);
        self
    }
}

impl<P> fmt::Debug for SelectorConfig<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorConfig")
            .field("init_value", &self.init_value)
            .field("cancel_text", &self.cancel_text)
            .finish_non_exhaustive()
    }
}

/// Snapshot of the selection state, for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub is_open: bool,
    pub selected_label: String,
    pub measured_item_height: u16,
    pub cancel_label: String,
}

/// The dropdown control.
///
/// Owns the selection state exclusively; every mutation goes through the
/// methods below. The item list is not owned and is passed on each render.
pub struct Selector<P> {
    is_open: bool,
    selected_label: String,
    /// Last initial-value input seen, for change detection.
    init_value: String,
    cancel_label: String,
    estimator: HeightEstimator,
    screen_height: u16,
    overlays_composed: u64,
    on_change: OnChange<P>,
}

impl<P> fmt::Debug for Selector<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("is_open", &self.is_open)
            .field("selected_label", &self.selected_label)
            .field("cancel_label", &self.cancel_label)
            .field("estimator", &self.estimator)
            .field("screen_height", &self.screen_height)
            .finish_non_exhaustive()
    }
}

impl<P> Selector<P> {
    /// Mount a closed, unmeasured selector.
    ///
    /// The display height is read here and never again.
    pub fn mount(config: SelectorConfig<P>, display: &impl AvailableHeight) -> Self {
        let screen_height = display.available_height();
        tracing::debug!(
            init_value = %config.init_value,
            screen_height,
            "selector mounted"
        );

        Self {
            is_open: false,
            selected_label: config.init_value.clone(),
            init_value: config.init_value,
            cancel_label: config.cancel_text,
            estimator: HeightEstimator::new(),
            screen_height,
            overlays_composed: 0,
            on_change: config.on_change,
        }
    }

    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        tracing::debug!("selector opened");
    }

    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        tracing::debug!("selector closed");
    }

    /// Host back/away gesture. Same path as [`Selector::close`].
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Confirm a choice: notify the host, adopt the label, then close.
    pub fn select(&mut self, option: OptionRow<'_, P>) {
        (self.on_change)(option.payload);
        self.selected_label = option.label.to_string();
        tracing::info!(key = option.key, label = option.label, "option selected");
        self.close();
    }

    /// Feed a new initial-value input from the host.
    ///
    /// A different value overwrites the selected label, open or not, even
    /// after a user selection. Returns whether the label was resynchronized.
    pub fn set_initial_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value == self.init_value {
            return false;
        }
        tracing::debug!(from = %self.init_value, to = %value, "initial value changed");
        self.selected_label = value.clone();
        self.init_value = value;
        true
    }

    /// Layout report for the first rendered option.
    ///
    /// Only the first non-zero report is kept; returns `true` when it was.
    /// Item-list changes do not reset this.
    pub fn report_item_height(&mut self, height: u16) -> bool {
        self.estimator.report(height)
    }

    /// Build the open-state presentation for the given items.
    pub fn compose<'a>(&mut self, items: &'a [Item<P>]) -> Overlay<'a, P> {
        let id = OverlayId(self.overlays_composed);
        self.overlays_composed += 1;

        Overlay {
            id,
            max_height: self.options_max_height(items.len()),
            rows: resolve_rows(items),
            cancel_label: self.cancel_label.clone(),
        }
    }

    /// Scroll-container cap for a list of `item_count` entries (sections included).
    pub fn options_max_height(&self, item_count: usize) -> u16 {
        options_max_height(self.estimator.height(), item_count, self.screen_height)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected_label(&self) -> &str {
        &self.selected_label
    }

    pub fn cancel_label(&self) -> &str {
        &self.cancel_label
    }

    pub fn measured_item_height(&self) -> u16 {
        self.estimator.height()
    }

    pub fn screen_height(&self) -> u16 {
        self.screen_height
    }

    pub fn state(&self) -> SelectionState {
        SelectionState {
            is_open: self.is_open,
            selected_label: self.selected_label.clone(),
            measured_item_height: self.estimator.height(),
            cancel_label: self.cancel_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(init: &str) -> Selector<u32> {
        Selector::mount(SelectorConfig::new().init_value(init), &100u16)
    }

    #[test]
    fn test_mount_defaults() {
        let selector: Selector<()> = Selector::mount(SelectorConfig::default(), &40u16);
        assert_eq!(
            selector.state(),
            SelectionState {
                is_open: false,
                selected_label: DEFAULT_INIT_VALUE.to_string(),
                measured_item_height: 0,
                cancel_label: DEFAULT_CANCEL_TEXT.to_string(),
            }
        );
        assert_eq!(selector.screen_height(), 40);
    }

    #[test]
    fn test_open_close_idempotent() {
        let mut selector = mount("x");
        selector.close();
        assert!(!selector.is_open());

        selector.open();
        selector.open();
        assert!(selector.is_open());

        selector.close();
        selector.close();
        assert!(!selector.is_open());
    }

    #[test]
    fn test_dismiss_closes() {
        let mut selector = mount("x");
        selector.open();
        selector.dismiss();
        assert!(!selector.is_open());
    }

    #[test]
    fn test_set_initial_value_same_is_noop() {
        let mut selector = mount("A");
        let items = vec![Item::option("b", "B", 1)];
        let rows = resolve_rows(&items);
        selector.select(rows[0].as_option().unwrap());

        assert!(!selector.set_initial_value("A"));
        assert_eq!(selector.selected_label(), "B");
    }

    #[test]
    fn test_set_initial_value_overrides_selection() {
        let mut selector = mount("A");
        let items = vec![Item::option("b", "B", 1)];
        let rows = resolve_rows(&items);
        selector.select(rows[0].as_option().unwrap());

        assert!(selector.set_initial_value("C"));
        assert_eq!(selector.selected_label(), "C");
    }

    #[test]
    fn test_compose_ids_are_instance_scoped() {
        let items = vec![Item::option("a", "A", 1)];
        let mut first = mount("x");
        let mut second = mount("y");

        assert_eq!(first.compose(&items).id, OverlayId(0));
        assert_eq!(first.compose(&items).id, OverlayId(1));
        assert_eq!(second.compose(&items).id, OverlayId(0));
    }

    #[test]
    fn test_compose_uses_measured_height() {
        let items = vec![
            Item::section("s", "S"),
            Item::option("a", "A", 1),
            Item::option("b", "B", 2),
        ];
        let mut selector = Selector::mount(SelectorConfig::new(), &100u16);

        assert_eq!(selector.compose(&items).max_height, 0);
        selector.report_item_height(20);
        assert_eq!(selector.compose(&items).max_height, 40);
    }
}
