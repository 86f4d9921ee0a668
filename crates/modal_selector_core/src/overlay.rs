//! Overlay composition and scroll-height bounding.

use crate::item::{OptionRow, Row};

/// Capability for reading the host display's available height.
///
/// Read once when a selector is mounted.
pub trait AvailableHeight {
    fn available_height(&self) -> u16;
}

impl AvailableHeight for u16 {
    fn available_height(&self) -> u16 {
        *self
    }
}

/// Identity of one composed overlay, scoped to its selector instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

impl std::fmt::Display for OverlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "overlay-{}", self.0)
    }
}

/// Bound the scroll container height.
///
/// The smaller of "every item visible" and "half the screen rounded down to
/// whole rows". Returns `0` while the item height is unmeasured.
pub fn options_max_height(measured_item_height: u16, item_count: usize, screen_height: u16) -> u16 {
    if measured_item_height == 0 {
        return 0;
    }

    let item = u64::from(measured_item_height);
    let all_items = item.saturating_mul(item_count as u64);
    // floor(screen / item * 0.5) == floor(screen / (2 * item)) for integers
    let half_screen = (u64::from(screen_height) / (2 * item)) * item;

    u16::try_from(all_items.min(half_screen)).unwrap_or(u16::MAX)
}

/// Open-state presentation: a capped scrollable list, then a cancel action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay<'a, P> {
    pub id: OverlayId,
    pub max_height: u16,
    pub rows: Vec<Row<'a, P>>,
    pub cancel_label: String,
}

impl<'a, P> Overlay<'a, P> {
    /// Selectable rows with their index into `rows`.
    pub fn options(&self) -> impl Iterator<Item = (usize, OptionRow<'a, P>)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| row.as_option().map(|option| (idx, option)))
    }

    pub fn option_count(&self) -> usize {
        self.options().count()
    }

    /// Index into `rows` of the first option, the one whose height is measured.
    pub fn first_option_index(&self) -> Option<usize> {
        self.options().next().map(|(idx, _)| idx)
    }

    /// Whole rows that fit in the capped container.
    pub fn visible_rows(&self, item_height: u16) -> usize {
        if item_height == 0 {
            return 0;
        }
        usize::from(self.max_height / item_height)
    }
}
