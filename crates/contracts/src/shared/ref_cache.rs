//! Application-lifetime lookup cache.
//!
//! Entries never expire; callers clear a key after mutating the resource
//! behind it or when the user asks for a refresh.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub const ACTIVE_PRODUCTS: &str = "products:active";
pub const ACTIVE_CUSTOMERS: &str = "customers:active";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefCache {
    entries: HashMap<String, Value>,
}

impl RefCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// A payload that no longer decodes as `T` counts as a miss.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn set(&mut self, key: &str, payload: Value) {
        self.entries.insert(key.to_string(), payload);
    }

    /// Typed [`RefCache::set`]; values that fail to serialize are not stored.
    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) -> bool {
        match serde_json::to_value(value) {
            Ok(v) => {
                self.set(key, v);
                true
            }
            Err(_) => false,
        }
    }

    pub fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Lookup {
        id: i64,
        name: String,
    }

    #[test]
    fn cleared_key_is_gone() {
        let mut cache = RefCache::new();
        cache.set(ACTIVE_PRODUCTS, json!([{"id": 1, "name": "Rod"}]));
        assert!(cache.get(ACTIVE_PRODUCTS).is_some());
        cache.clear(ACTIVE_PRODUCTS);
        assert!(cache.get(ACTIVE_PRODUCTS).is_none());
    }

    #[test]
    fn typed_roundtrip_and_bad_payload() {
        let mut cache = RefCache::new();
        assert!(cache.put(ACTIVE_CUSTOMERS, &vec![Lookup { id: 7, name: "Asha".into() }]));
        let list: Vec<Lookup> = cache.get_as(ACTIVE_CUSTOMERS).unwrap();
        assert_eq!(list[0].id, 7);

        cache.set(ACTIVE_CUSTOMERS, json!("stale shape"));
        assert!(cache.get_as::<Vec<Lookup>>(ACTIVE_CUSTOMERS).is_none());
    }

    #[test]
    fn clear_all_empties_everything() {
        let mut cache = RefCache::new();
        cache.set(ACTIVE_PRODUCTS, json!([]));
        cache.set(ACTIVE_CUSTOMERS, json!([]));
        cache.clear_all();
        assert!(!cache.contains(ACTIVE_PRODUCTS));
        assert!(!cache.contains(ACTIVE_CUSTOMERS));
    }
}
