//! Route keyword table.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{DragomanError, Result};

/// Built-in storefront route table. Keys are lowercase phrases; several keys
/// are aliases pointing at the same path.
const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("home", "/"),
    ("homepage", "/"),
    ("products", "/materials"),
    ("all products", "/materials"),
    ("materials", "/materials"),
    ("cart", "/customer/cart"),
    ("my cart", "/customer/cart"),
    ("basket", "/customer/cart"),
    ("orders", "/customer/orders"),
    ("my orders", "/customer/orders"),
    ("order history", "/customer/orders"),
    ("order tracking", "/customer/order-tracking"),
    ("track order", "/customer/order-tracking"),
    ("profile", "/customer/profile"),
    ("my profile", "/customer/profile"),
    ("account", "/customer/profile"),
    ("settings", "/customer/settings"),
    ("wishlist", "/customer/wishlist"),
    ("checkout", "/customer/checkout"),
    ("payments", "/customer/payments"),
    ("addresses", "/customer/addresses"),
    ("notifications", "/customer/notifications"),
    ("support", "/customer/support"),
    ("help center", "/customer/support"),
    ("suppliers", "/suppliers"),
    ("dashboard", "/supplier-dashboard"),
    ("supplier dashboard", "/supplier-dashboard"),
    ("categories", "/customer/categories"),
];

/// One route keyword and the path it navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Lowercase phrase the user may say.
    pub key: String,
    /// Path handed to the caller's router.
    pub path: String,
}

impl RouteEntry {
    /// Create a new route entry.
    pub fn new<K: Into<String>, P: Into<String>>(key: K, path: P) -> Self {
        RouteEntry {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// Ordered route keyword table with exact-key lookup.
///
/// Iteration order is the order entries were supplied in; the navigation
/// rule depends on it for deterministic first-hit matching. Keys are unique
/// within the table, while multiple keys may map to the same path.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: AHashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from the given entries.
    ///
    /// Keys are trimmed and lowercased. Fails on empty or duplicate keys.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut normalized = Vec::with_capacity(entries.len());
        let mut index = AHashMap::with_capacity(entries.len());

        for entry in entries {
            let key = entry.key.trim().to_lowercase();
            if key.is_empty() {
                return Err(DragomanError::vocabulary("route key must not be empty"));
            }
            if index.contains_key(&key) {
                return Err(DragomanError::vocabulary(format!(
                    "duplicate route key: {key}"
                )));
            }
            index.insert(key.clone(), normalized.len());
            normalized.push(RouteEntry {
                key,
                path: entry.path,
            });
        }

        Ok(RouteTable {
            entries: normalized,
            index,
        })
    }

    /// The built-in storefront route table.
    pub fn builtin() -> Self {
        let entries: Vec<RouteEntry> = DEFAULT_ROUTES
            .iter()
            .map(|(key, path)| RouteEntry::new(*key, *path))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.key.clone(), i))
            .collect();
        RouteTable { entries, index }
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Look up an entry by exact key.
    pub fn exact(&self, key: &str) -> Option<&RouteEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in table order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = RouteTable::builtin();
        assert!(table.len() >= 20);
        // Built-in keys must be unique
        assert!(RouteTable::new(table.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_exact_lookup() {
        let table = RouteTable::builtin();
        assert_eq!(table.exact("cart").unwrap().path, "/customer/cart");
        assert_eq!(table.exact("my cart").unwrap().path, "/customer/cart");
        assert_eq!(table.exact("cement"), None);
    }

    #[test]
    fn test_keys_are_normalized() {
        let table = RouteTable::new(vec![RouteEntry::new("  My Cart ", "/customer/cart")]).unwrap();
        assert!(table.exact("my cart").is_some());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let entries = vec![
            RouteEntry::new("cart", "/customer/cart"),
            RouteEntry::new("Cart", "/elsewhere"),
        ];
        assert!(RouteTable::new(entries).is_err());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(RouteTable::new(vec![RouteEntry::new("  ", "/x")]).is_err());
    }

    #[test]
    fn test_iteration_preserves_order() {
        let table = RouteTable::builtin();
        let first = table.iter().next().unwrap();
        assert_eq!(first.key, "home");
    }
}
