//! Item model: the host-supplied entries and their classified rows.

use serde::{Deserialize, Serialize};

/// One entry of the externally supplied list.
///
/// `section` marks a non-selectable header. The payload is opaque to the
/// selector and handed back unchanged through the selection callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de> + Default"))]
pub struct Item<P> {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub section: bool,
    #[serde(default)]
    pub payload: P,
}

impl<P> Item<P> {
    /// Create a selectable option.
    pub fn option(key: impl Into<String>, label: impl Into<String>, payload: P) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            section: false,
            payload,
        }
    }

    /// Create a section header.
    pub fn section(key: impl Into<String>, label: impl Into<String>) -> Self
    where
        P: Default,
    {
        Self {
            key: key.into(),
            label: label.into(),
            section: true,
            payload: P::default(),
        }
    }
}

/// A selectable row borrowed from an [`Item`].
///
/// This is the only thing [`crate::Selector::select`] accepts, so a header can
/// never be selected.
#[derive(Debug, PartialEq, Eq)]
pub struct OptionRow<'a, P> {
    pub key: &'a str,
    pub label: &'a str,
    pub payload: &'a P,
}

impl<P> Clone for OptionRow<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for OptionRow<'_, P> {}

/// Presentational node produced for each item.
#[derive(Debug, PartialEq, Eq)]
pub enum Row<'a, P> {
    /// Non-interactive section header (label only).
    Header { key: &'a str, label: &'a str },
    /// Interactive option bound to `select`.
    Option(OptionRow<'a, P>),
}

impl<P> Clone for Row<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Row<'_, P> {}

impl<'a, P> Row<'a, P> {
    pub fn key(&self) -> &'a str {
        match self {
            Row::Header { key, .. } => *key,
            Row::Option(option) => option.key,
        }
    }

    pub fn label(&self) -> &'a str {
        match self {
            Row::Header { label, .. } => *label,
            Row::Option(option) => option.label,
        }
    }

    pub fn as_option(&self) -> Option<OptionRow<'a, P>> {
        match self {
            Row::Header { .. } => None,
            Row::Option(option) => Some(*option),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Row::Header { .. })
    }
}

/// Classify every item as a header or an option.
///
/// Order is preserved exactly. Nothing is sorted, deduplicated or filtered;
/// duplicate keys are the host's problem.
pub fn resolve_rows<P>(items: &[Item<P>]) -> Vec<Row<'_, P>> {
    items
        .iter()
        .map(|item| {
            if item.section {
                Row::Header {
                    key: &item.key,
                    label: &item.label,
                }
            } else {
                Row::Option(OptionRow {
                    key: &item.key,
                    label: &item.label,
                    payload: &item.payload,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Item<u32>> {
        vec![
            Item::section("fruits", "Fruits"),
            Item::option("apple", "Apple", 1),
            Item::option("banana", "Banana", 2),
            Item::section("veg", "Vegetables"),
            Item::option("leek", "Leek", 3),
        ]
    }

    #[test]
    fn test_resolve_rows_preserves_order() {
        let items = sample();
        let rows = resolve_rows(&items);

        let keys: Vec<&str> = rows.iter().map(Row::key).collect();
        assert_eq!(keys, vec!["fruits", "apple", "banana", "veg", "leek"]);
    }

    #[test]
    fn test_resolve_rows_is_total() {
        let items = sample();
        let rows = resolve_rows(&items);

        let headers = rows.iter().filter(|r| r.is_header()).count();
        let options = rows.iter().filter_map(Row::as_option).count();
        assert_eq!(headers, 2);
        assert_eq!(options, 3);
        assert_eq!(headers + options, items.len());
    }

    #[test]
    fn test_option_row_carries_payload() {
        let items = sample();
        let rows = resolve_rows(&items);

        let banana = rows[2].as_option().unwrap();
        assert_eq!(banana.label, "Banana");
        assert_eq!(*banana.payload, 2);
        assert!(rows[0].as_option().is_none());
    }

    #[test]
    fn test_resolve_rows_keeps_duplicates() {
        let items = vec![
            Item::option("a", "Same", 1u32),
            Item::option("a", "Same", 1u32),
        ];
        assert_eq!(resolve_rows(&items).len(), 2);
    }

    #[test]
    fn test_resolve_rows_empty() {
        let items: Vec<Item<()>> = Vec::new();
        assert!(resolve_rows(&items).is_empty());
    }
}
