//! Item list loading.
//!
//! Lists are YAML sequences of items:
//!
//! ```yaml
//! - key: fruits
//!   label: Fruits
//!   section: true
//! - key: apple
//!   label: Apple
//!   payload: fruit/apple
//! ```

use std::collections::HashSet;
use std::path::Path;

use modal_selector_core::Item;

/// Payload carried by items loaded from YAML
pub type Payload = String;

/// Error types for item list loading
#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Parse(String),
    DuplicateKey(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
            LoadError::DuplicateKey(key) => write!(f, "Duplicate item key: {}", key),
        }
    }
}

impl std::error::Error for LoadError {}

/// Parse an item list from YAML, rejecting duplicate keys.
pub fn parse_items(yaml: &str) -> Result<Vec<Item<Payload>>, LoadError> {
    let items: Vec<Item<Payload>> =
        serde_saphyr::from_str(yaml).map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.key.as_str()) {
            return Err(LoadError::DuplicateKey(item.key.clone()));
        }
    }

    Ok(items)
}

/// Load an item list from a YAML file.
pub fn load_items(path: &Path) -> Result<Vec<Item<Payload>>, LoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let items = parse_items(&content)?;
    tracing::debug!(path = %path.display(), count = items.len(), "item list loaded");
    Ok(items)
}

/// Built-in list used when no file is given.
pub fn default_items() -> Vec<Item<Payload>> {
    vec![
        Item::section("fruits", "Fruits"),
        Item::option("apple", "Apple", "fruit/apple".to_string()),
        Item::option("banana", "Banana", "fruit/banana".to_string()),
        Item::option("cherry", "Cherry", "fruit/cherry".to_string()),
        Item::option("mango", "Mango", "fruit/mango".to_string()),
        Item::section("vegetables", "Vegetables"),
        Item::option("carrot", "Carrot", "veg/carrot".to_string()),
        Item::option("leek", "Leek", "veg/leek".to_string()),
        Item::option("pepper", "Pepper", "veg/pepper".to_string()),
        Item::option("spinach", "Spinach", "veg/spinach".to_string()),
        Item::option("squash", "Squash", "veg/squash".to_string()),
    ]
}
