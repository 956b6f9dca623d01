use feruca::Collator;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Key shared by every resource-like module type
pub const RESOURCES_KEY: &str = "resources";

/// Display label per module type key, in first-seen order until sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeLabels(IndexMap<String, String>);

impl TypeLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Record a label unless the key already has one. First one wins.
    pub fn record(&mut self, key: impl Into<String>, label: impl Into<String>) -> bool {
        match self.0.entry(key.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(label.into());
                true
            }
        }
    }

    /// Reorder entries by collated label order
    pub fn sort_collated(&mut self) {
        let mut collator = Collator::default();
        self.0.sort_by(|_, a, _, b| collator.collate(a.as_str(), b.as_str()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Unicode Collation Algorithm order (CLDR root), with a final code point
/// tie break so only identical strings compare equal
pub fn collate(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
