//! Test helpers for writing inventories and stubbing collaborators.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use stylist_core::{
    InventorySource, ItemId, PreferenceRecord, PreferenceStore, PreferenceStoreError, UserId,
    Verdict,
    test_support::MemoryPreferenceStore,
};
use tempfile::TempDir;

use crate::{
    CliError,
    sources::{CollaboratorBuilder, JsonInventoryFile},
};

/// Four tagged outfits in the shape of the hosted inventory collection.
pub(super) const INVENTORY_JSON: &str = r#"[
    {"id": "101", "imageUrl": "https://images.example/101.jpeg", "pexels_id": 101,
     "tags": {"style": "Casual", "occasion": "Work", "color": "Beige"}},
    {"id": "102", "imageUrl": "https://images.example/102.jpeg", "pexels_id": 102,
     "tags": {"style": "Casual", "occasion": "Party", "color": "Red"}},
    {"id": "103", "imageUrl": "https://images.example/103.jpeg", "pexels_id": 103,
     "tags": {"style": "Formal", "occasion": "Work", "color": "Black"}},
    {"id": "104", "imageUrl": "https://images.example/104.jpeg", "pexels_id": 104,
     "tags": {"style": "Boho", "occasion": "Weekend", "color": "Red"}}
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write file");
}

/// Temporary directory holding command inputs.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn inventory(&self) -> Utf8PathBuf {
        self.write("inventory.json", INVENTORY_JSON)
    }
}

pub(super) fn user(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

/// Cloneable handle onto one in-memory store, so tests can inspect what a
/// command saved.
#[derive(Debug, Clone, Default)]
pub(super) struct SharedStore(Arc<MemoryPreferenceStore>);

impl SharedStore {
    pub(super) fn with_record(user: UserId, record: PreferenceRecord) -> Self {
        Self(Arc::new(MemoryPreferenceStore::with_record(user, record)))
    }
}

impl PreferenceStore for SharedStore {
    fn load(&self, user: &UserId) -> Result<Option<PreferenceRecord>, PreferenceStoreError> {
        self.0.load(user)
    }

    fn save(&self, user: &UserId, record: &PreferenceRecord) -> Result<(), PreferenceStoreError> {
        self.0.save(user, record)
    }

    fn record_swipe(
        &self,
        user: &UserId,
        item: ItemId,
        verdict: Verdict,
    ) -> Result<PreferenceRecord, PreferenceStoreError> {
        self.0.record_swipe(user, item, verdict)
    }
}

/// Reads inventories from disk and hands out a shared in-memory store.
#[derive(Debug, Default)]
pub(super) struct StubCollaborators {
    pub(super) store: SharedStore,
}

impl CollaboratorBuilder for StubCollaborators {
    fn inventory(&self, path: &Utf8Path) -> Box<dyn InventorySource> {
        Box::new(JsonInventoryFile::new(path))
    }

    fn preference_store(&self, _database: &Utf8Path) -> Result<Box<dyn PreferenceStore>, CliError> {
        Ok(Box::new(self.store.clone()))
    }
}

pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}
