//! Test-only, in-memory collaborators and item builders used by unit and
//! behaviour tests.

use std::{collections::HashMap, sync::Mutex};

use crate::{
    Attribute, InventoryError, InventorySource, ItemId, PreferenceRecord, PreferenceStore,
    PreferenceStoreError, TaggedItem, Tags, UserId, Verdict,
};

/// Build a tagged item from string pairs.
///
/// Attribute names go through the usual normalisation, so `"Style"` and
/// `"style"` are equivalent.
///
/// # Panics
/// Panics when `id` is blank; this helper is meant for fixtures only.
pub fn item(id: &str, tags: &[(&str, &str)]) -> TaggedItem {
    let parsed: Tags = tags
        .iter()
        .map(|&(name, value)| (Attribute::from(name), value.to_owned()))
        .collect();
    TaggedItem::new(
        ItemId::new(id).expect("fixture ids must not be blank"),
        format!("https://images.example/{id}.jpeg"),
        parsed,
    )
}

/// In-memory `InventorySource` returning a fixed snapshot.
#[derive(Debug, Default, Clone)]
pub struct MemoryInventory {
    items: Vec<TaggedItem>,
}

impl MemoryInventory {
    /// Create a source from a collection of items.
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = TaggedItem>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

impl InventorySource for MemoryInventory {
    fn snapshot(&self) -> Result<Vec<TaggedItem>, InventoryError> {
        Ok(self.items.clone())
    }
}

/// In-memory `PreferenceStore` keyed by user id.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    documents: Mutex<HashMap<UserId, PreferenceRecord>>,
}

impl MemoryPreferenceStore {
    /// Create a store seeded with a single user's document.
    pub fn with_record(user: UserId, record: PreferenceRecord) -> Self {
        Self {
            documents: Mutex::new(HashMap::from([(user, record)])),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, user: &UserId) -> Result<Option<PreferenceRecord>, PreferenceStoreError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| PreferenceStoreError::Poisoned)?;
        Ok(documents.get(user).cloned())
    }

    fn save(&self, user: &UserId, record: &PreferenceRecord) -> Result<(), PreferenceStoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| PreferenceStoreError::Poisoned)?;
        documents.insert(user.clone(), record.clone());
        Ok(())
    }

    fn record_swipe(
        &self,
        user: &UserId,
        item: ItemId,
        verdict: Verdict,
    ) -> Result<PreferenceRecord, PreferenceStoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| PreferenceStoreError::Poisoned)?;
        let record = documents.entry(user.clone()).or_default();
        record.record(item, verdict);
        Ok(record.clone())
    }
}
