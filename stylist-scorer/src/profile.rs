//! Tag frequency profiles built from a user's swipe history.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use stylist_core::{Attribute, TaggedItem};

/// Count of how often each `(attribute, value)` pair appears across a set of
/// items.
///
/// Values are compared exactly; `"Casual"` and `"casual"` are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagProfile {
    counts: HashMap<Attribute, HashMap<String, u32>>,
}

impl TagProfile {
    /// Tally every tag of every item.
    #[must_use]
    pub fn from_items(items: &[TaggedItem]) -> Self {
        let mut profile = Self::default();
        for item in items {
            for (attribute, value) in &item.tags {
                let count = profile
                    .counts
                    .entry(attribute.clone())
                    .or_default()
                    .entry(value.clone())
                    .or_default();
                *count = count.saturating_add(1);
            }
        }
        profile
    }

    /// Number of items carrying `value` for `attribute`.
    #[must_use]
    pub fn count(&self, attribute: &Attribute, value: &str) -> u32 {
        self.counts
            .get(attribute)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0)
    }

    /// Report whether no tags were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
