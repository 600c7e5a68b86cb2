//! Collaborator boundaries: inventory snapshots and preference storage.
//!
//! The recommender never talks to storage. Callers fetch an inventory
//! snapshot through [`InventorySource`] and a user's swipe history through
//! [`PreferenceStore`], then hand plain slices to a
//! [`Recommender`](crate::Recommender).

use std::io::Read;

use thiserror::Error;

use crate::{InvalidInput, ItemId, ItemRecord, PreferenceRecord, TaggedItem, UserId, Verdict};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::SqlitePreferenceStore;

/// Errors raised while loading an inventory snapshot.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Reading the snapshot failed.
    #[error("failed to read inventory snapshot: {source}")]
    Io {
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot was not a JSON array of inventory records.
    #[error("failed to decode inventory snapshot: {source}")]
    Decode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record failed boundary validation.
    #[error("inventory record {index} is invalid: {source}")]
    InvalidItem {
        /// Zero-based position of the record in the snapshot.
        index: usize,
        /// Validation failure.
        #[source]
        source: InvalidInput,
    },
}

/// Supply an immutable snapshot of the candidate inventory.
pub trait InventorySource: Send + Sync {
    /// Return every candidate item, in a stable order.
    ///
    /// # Errors
    /// Returns [`InventoryError`] when the snapshot cannot be produced.
    fn snapshot(&self) -> Result<Vec<TaggedItem>, InventoryError>;
}

/// Decode a JSON array of inventory records and validate every entry.
///
/// # Errors
/// Returns [`InventoryError::Decode`] for malformed JSON and
/// [`InventoryError::InvalidItem`] for the first record that fails
/// validation.
///
/// # Examples
/// ```
/// use stylist_core::{Attribute, decode_inventory};
///
/// let json = r#"[{"id": "1", "imageUrl": "a.jpg", "tags": {"style": "Casual"}}]"#;
/// let items = decode_inventory(json.as_bytes())?;
/// assert_eq!(items[0].tag(&Attribute::Style), Some("Casual"));
/// # Ok::<(), stylist_core::InventoryError>(())
/// ```
pub fn decode_inventory<R: Read>(reader: R) -> Result<Vec<TaggedItem>, InventoryError> {
    let records: Vec<ItemRecord> =
        serde_json::from_reader(reader).map_err(|source| InventoryError::Decode { source })?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            TaggedItem::try_from(record).map_err(|source| InventoryError::InvalidItem { index, source })
        })
        .collect()
}

/// Errors raised by [`PreferenceStore`] implementations.
#[derive(Debug, Error)]
pub enum PreferenceStoreError {
    /// Opening the `SQLite` database failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to open preference database at {path}: {source}")]
    OpenDatabase {
        /// Location of the database on disk.
        path: std::path::PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A database statement failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Encoding a preference document failed.
    #[error("failed to encode preferences for user {user_id}: {source}")]
    Encode {
        /// Owner of the document.
        user_id: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A stored preference document could not be decoded.
    #[error("failed to decode preferences for user {user_id}: {source}")]
    Decode {
        /// Owner of the document.
        user_id: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Another thread panicked while holding the store lock.
    #[error("preference store lock was poisoned")]
    Poisoned,
}

/// Load and persist per-user preference documents.
pub trait PreferenceStore: Send + Sync {
    /// Return the stored document for `user`, if one exists.
    ///
    /// # Errors
    /// Returns [`PreferenceStoreError`] when the backend fails.
    fn load(&self, user: &UserId) -> Result<Option<PreferenceRecord>, PreferenceStoreError>;

    /// Replace the stored document for `user`.
    ///
    /// # Errors
    /// Returns [`PreferenceStoreError`] when the backend fails.
    fn save(&self, user: &UserId, record: &PreferenceRecord) -> Result<(), PreferenceStoreError>;

    /// Apply one swipe to the user's document and persist the result.
    ///
    /// The read, update and write must happen atomically: concurrent swipes
    /// for the same user may not overwrite one another.
    ///
    /// # Errors
    /// Returns [`PreferenceStoreError`] when the backend fails.
    fn record_swipe(
        &self,
        user: &UserId,
        item: ItemId,
        verdict: Verdict,
    ) -> Result<PreferenceRecord, PreferenceStoreError>;
}
