//! File-backed collaborators and shared I/O helpers for the commands.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use serde::Serialize;
use stylist_core::{
    InventoryError, InventorySource, PreferenceRecord, PreferenceStore, TaggedItem,
    decode_inventory,
};
use stylist_fs::{open_utf8_file, read_utf8_file};

use crate::CliError;

/// Inventory snapshot stored on disk as a JSON array of item records.
#[derive(Debug, Clone)]
pub(crate) struct JsonInventoryFile {
    path: Utf8PathBuf,
}

impl JsonInventoryFile {
    pub(crate) fn new(path: &Utf8Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl InventorySource for JsonInventoryFile {
    fn snapshot(&self) -> Result<Vec<TaggedItem>, InventoryError> {
        let file = open_utf8_file(&self.path).map_err(|source| InventoryError::Io { source })?;
        decode_inventory(BufReader::new(file))
    }
}

/// Builds the inventory source and preference store for one invocation.
pub(crate) trait CollaboratorBuilder {
    fn inventory(&self, path: &Utf8Path) -> Box<dyn InventorySource>;
    fn preference_store(&self, database: &Utf8Path) -> Result<Box<dyn PreferenceStore>, CliError>;
}

pub(crate) struct DefaultCollaborators;

impl CollaboratorBuilder for DefaultCollaborators {
    fn inventory(&self, path: &Utf8Path) -> Box<dyn InventorySource> {
        Box::new(JsonInventoryFile::new(path))
    }

    #[cfg(feature = "store-sqlite")]
    fn preference_store(&self, database: &Utf8Path) -> Result<Box<dyn PreferenceStore>, CliError> {
        stylist_fs::ensure_parent_dir(database).map_err(|source| {
            CliError::CreateStoreDirectory {
                path: database.to_path_buf(),
                source,
            }
        })?;
        let store = stylist_core::SqlitePreferenceStore::open(database.as_std_path())?;
        Ok(Box::new(store))
    }

    #[cfg(not(feature = "store-sqlite"))]
    fn preference_store(&self, _database: &Utf8Path) -> Result<Box<dyn PreferenceStore>, CliError> {
        Err(CliError::MissingFeature {
            feature: "store-sqlite",
            action: "opening a preference database",
        })
    }
}

/// Take an inventory snapshot through `builder`.
pub(crate) fn load_inventory(
    builder: &dyn CollaboratorBuilder,
    path: &Utf8Path,
) -> Result<Vec<TaggedItem>, CliError> {
    let items = builder
        .inventory(path)
        .snapshot()
        .map_err(|source| CliError::LoadInventory {
            path: path.to_path_buf(),
            source,
        })?;
    info!("loaded {} inventory items from {path}", items.len());
    Ok(items)
}

/// Load a `{ likedItemIds, dislikedItemIds }` preference document.
pub(crate) fn load_preference_document(path: &Utf8Path) -> Result<PreferenceRecord, CliError> {
    let json = read_utf8_file(path).map_err(|source| CliError::OpenPreferences {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| CliError::ParsePreferences {
        path: path.to_path_buf(),
        source,
    })
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match stylist_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
