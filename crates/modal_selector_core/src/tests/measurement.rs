//! Tests for measure-on-first-paint-then-settle sizing
//!
//! These tests verify:
//! - The first composed overlay is zero-height
//! - One report settles the height; later reports are ignored
//! - The cached height survives close/open and item-list changes

use crate::item::Item;
use crate::selector::{Selector, SelectorConfig};

fn letters(count: usize) -> Vec<Item<usize>> {
    (0..count)
        .map(|i| Item::option(format!("k{i}"), format!("Item {i}"), i))
        .collect()
}

#[test]
fn test_first_paint_is_zero_height() {
    let items = letters(3);
    let mut selector = Selector::mount(SelectorConfig::new(), &100u16);
    selector.open();

    let first = selector.compose(&items);
    assert_eq!(first.max_height, 0);
    assert_eq!(first.rows.len(), 3);

    assert!(selector.report_item_height(20));
    let settled = selector.compose(&items);
    assert_eq!(settled.max_height, 40);
}

#[test]
fn test_repeated_reports_are_ignored() {
    let mut selector: Selector<usize> = Selector::mount(SelectorConfig::new(), &100u16);

    assert!(selector.report_item_height(2));
    for height in [1, 2, 3, 50] {
        assert!(!selector.report_item_height(height));
    }
    assert_eq!(selector.measured_item_height(), 2);
}

#[test]
fn test_height_survives_close_and_open() {
    let items = letters(4);
    let mut selector = Selector::mount(SelectorConfig::new(), &24u16);
    selector.open();
    selector.report_item_height(1);
    selector.close();
    selector.open();

    assert_eq!(selector.measured_item_height(), 1);
    assert_eq!(selector.compose(&items).max_height, 4);
}

#[test]
fn test_height_kept_across_item_lists() {
    let mut selector = Selector::mount(SelectorConfig::new(), &24u16);
    selector.report_item_height(3);

    let short = letters(2);
    assert_eq!(selector.compose(&short).max_height, 6);

    let long = letters(50);
    assert_eq!(selector.measured_item_height(), 3);
    // floor(24 / 3 * 0.5) = 4 rows of 3
    assert_eq!(selector.compose(&long).max_height, 12);
}

#[test]
fn test_pending_measurement_applies_after_reopen() {
    let items = letters(3);
    let mut selector = Selector::mount(SelectorConfig::new(), &100u16);
    selector.open();
    let _ = selector.compose(&items);
    selector.close();

    selector.report_item_height(20);
    selector.open();

    assert_eq!(selector.compose(&items).max_height, 40);
}
