#![forbid(unsafe_code)]

//! String-keyed, heterogeneously-typed metadata mapping.
//!
//! This is the exchange format between the event model and the logging
//! collaborator. Lookups are schema-on-read: a typed accessor returns
//! `None` when the key is absent *or* holds a value of a different type,
//! and callers treat absence as "not this event", never as an error.

use ahash::AHashMap;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Str(String),
    Bool(bool),
    U64(u64),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

/// String-keyed metadata mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    entries: AHashMap<String, MetadataValue>,
}

impl Metadata {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Typed lookup: `Some` only if the key holds a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(MetadataValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    /// Typed lookup: `Some` only if the key holds a bool.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(MetadataValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Typed lookup: `Some` only if the key holds a u64.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        match self.entries.get(key) {
            Some(MetadataValue::U64(value)) => Some(*value),
            _ => None,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_lookup_matches_stored_type() {
        let mut metadata = Metadata::new();
        metadata.insert("name", "toast");
        metadata.insert("animated", true);
        metadata.insert("count", 3u64);

        assert_eq!(metadata.get_str("name"), Some("toast"));
        assert_eq!(metadata.get_bool("animated"), Some(true));
        assert_eq!(metadata.get_u64("count"), Some(3));
    }

    #[test]
    fn mistyped_lookup_is_none() {
        let mut metadata = Metadata::new();
        metadata.insert("animated", true);

        assert_eq!(metadata.get_str("animated"), None);
        assert_eq!(metadata.get_u64("animated"), None);
        assert_eq!(metadata.get_bool("missing"), None);
    }

    #[test]
    fn insert_replaces_value_and_type() {
        let mut metadata = Metadata::new();
        metadata.insert("key", 1u64);
        metadata.insert("key", "one");

        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get_u64("key"), None);
        assert_eq!(metadata.get_str("key"), Some("one"));
    }
}
