//! Item domain model.
//!
//! An `Item` is one named record served by the remote endpoint. The endpoint
//! may send more fields per record; only `id` and `name` survive
//! deserialization.

use serde::{Deserialize, Serialize};

/// A named item shown in the list.
///
/// Items are immutable once stored: the store replaces the whole list on
/// every successful fetch instead of editing records in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Identifier assigned by the endpoint. Expected to be unique.
    pub id: i64,
    /// Display name, matched against the search term.
    pub name: String,
}

impl Item {
    /// Creates an item from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use item_pager::Item;
    ///
    /// let item = Item::new(1, "Bus");
    /// assert_eq!(item.id, 1);
    /// assert_eq!(item.name, "Bus");
    /// ```
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_drops_unknown_fields() {
        let raw = r#"{"id": 7, "name": "Scooty", "email": "x@y.z", "address": {"city": "Pune"}}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item, Item::new(7, "Scooty"));
    }

    #[test]
    fn deserialize_requires_name() {
        let raw = r#"{"id": 7}"#;
        assert!(serde_json::from_str::<Item>(raw).is_err());
    }
}
