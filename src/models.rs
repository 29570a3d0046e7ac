//! Frontend Models
//!
//! Data structures rendered by the list.

use serde::{Deserialize, Serialize};

/// Item identifier, unique within a page session
pub type ItemId = u32;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(7, "Buy milk");
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item::new(1, "X");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"title":"X","completed":false}"#);
    }
}
