//! `SQLite`-backed preference store.
//!
//! Each user owns one JSON preference document, mirroring the per-user
//! documents kept by the hosted backend.

use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use rusqlite::{Connection, OptionalExtension, TransactionBehavior};

use super::{PreferenceStore, PreferenceStoreError};
use crate::{ItemId, PreferenceRecord, UserId, Verdict};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS user_preferences (
        user_id TEXT PRIMARY KEY,
        document TEXT NOT NULL
    )";
const SELECT_SQL: &str = "SELECT document FROM user_preferences WHERE user_id = ?1";
const UPSERT_SQL: &str = "INSERT INTO user_preferences (user_id, document) VALUES (?1, ?2)
     ON CONFLICT(user_id) DO UPDATE SET document = excluded.document";
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Preference store persisting documents in a local `SQLite` file.
///
/// # Examples
/// ```no_run
/// use stylist_core::{ItemId, PreferenceStore, SqlitePreferenceStore, UserId, Verdict};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = SqlitePreferenceStore::open("preferences.db")?;
/// let user = UserId::new("uid-1")?;
/// store.record_swipe(&user, ItemId::new("2379005")?, Verdict::Like)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SqlitePreferenceStore {
    connection: Mutex<Connection>,
}

impl SqlitePreferenceStore {
    /// Open (creating if needed) the database at `path`.
    ///
    /// # Errors
    /// Returns [`PreferenceStoreError::OpenDatabase`] when the file cannot be
    /// opened and [`PreferenceStoreError::Query`] when the table cannot be
    /// created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceStoreError> {
        let path_ref = path.as_ref();
        let connection =
            Connection::open(path_ref).map_err(|source| PreferenceStoreError::OpenDatabase {
                path: path_ref.to_path_buf(),
                source,
            })?;
        Self::with_connection(connection)
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    /// Returns [`PreferenceStoreError`] when `SQLite` cannot initialise.
    pub fn in_memory() -> Result<Self, PreferenceStoreError> {
        let connection =
            Connection::open_in_memory().map_err(|source| PreferenceStoreError::OpenDatabase {
                path: ":memory:".into(),
                source,
            })?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self, PreferenceStoreError> {
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .map_err(|source| PreferenceStoreError::Query {
                operation: "configure the busy timeout",
                source,
            })?;
        connection
            .execute(CREATE_TABLE_SQL, [])
            .map_err(|source| PreferenceStoreError::Query {
                operation: "create the user_preferences table",
                source,
            })?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, PreferenceStoreError> {
        self.connection
            .lock()
            .map_err(|_| PreferenceStoreError::Poisoned)
    }
}

fn select_document(
    connection: &Connection,
    user: &UserId,
) -> Result<Option<PreferenceRecord>, PreferenceStoreError> {
    let document: Option<String> = connection
        .query_row(SELECT_SQL, [user.as_str()], |row| row.get(0))
        .optional()
        .map_err(|source| PreferenceStoreError::Query {
            operation: "load a preference document",
            source,
        })?;
    document
        .map(|json| {
            serde_json::from_str(&json).map_err(|source| PreferenceStoreError::Decode {
                user_id: user.to_string(),
                source,
            })
        })
        .transpose()
}

fn upsert_document(
    connection: &Connection,
    user: &UserId,
    record: &PreferenceRecord,
) -> Result<(), PreferenceStoreError> {
    let document = serde_json::to_string(record).map_err(|source| PreferenceStoreError::Encode {
        user_id: user.to_string(),
        source,
    })?;
    connection
        .execute(UPSERT_SQL, (user.as_str(), document.as_str()))
        .map_err(|source| PreferenceStoreError::Query {
            operation: "save a preference document",
            source,
        })?;
    Ok(())
}

impl PreferenceStore for SqlitePreferenceStore {
    fn load(&self, user: &UserId) -> Result<Option<PreferenceRecord>, PreferenceStoreError> {
        let connection = self.lock()?;
        select_document(&connection, user)
    }

    fn save(&self, user: &UserId, record: &PreferenceRecord) -> Result<(), PreferenceStoreError> {
        let connection = self.lock()?;
        upsert_document(&connection, user, record)
    }

    /// Read, update and write the document inside one `BEGIN IMMEDIATE`
    /// transaction, so concurrent swipes through this handle or any other
    /// connection to the same file are serialised.
    fn record_swipe(
        &self,
        user: &UserId,
        item: ItemId,
        verdict: Verdict,
    ) -> Result<PreferenceRecord, PreferenceStoreError> {
        let mut connection = self.lock()?;
        let transaction = connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|source| PreferenceStoreError::Query {
                operation: "begin a swipe transaction",
                source,
            })?;
        let mut record = select_document(&transaction, user)?.unwrap_or_default();
        record.record(item, verdict);
        upsert_document(&transaction, user, &record)?;
        transaction
            .commit()
            .map_err(|source| PreferenceStoreError::Query {
                operation: "commit a swipe transaction",
                source,
            })?;
        Ok(record)
    }
}
