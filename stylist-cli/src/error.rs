//! Error types emitted by the stylist CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use stylist_core::{InvalidInput, InventoryError, PreferenceError, PreferenceStoreError};
use stylist_scorer::ScorerConfigError;
use thiserror::Error;

/// Errors emitted by the stylist CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Two options that select the same input were both set.
    #[error("--{first} and --{second} cannot be used together")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The user or verdict given on the command line was rejected.
    #[error(transparent)]
    InvalidPreference(#[from] PreferenceError),
    /// The item id given on the command line was rejected.
    #[error(transparent)]
    InvalidItem(#[from] InvalidInput),
    /// The scorer configuration was rejected.
    #[error(transparent)]
    InvalidScorerConfig(#[from] ScorerConfigError),
    /// Loading the inventory snapshot failed.
    #[error("failed to load inventory from {path:?}: {source}")]
    LoadInventory {
        path: Utf8PathBuf,
        #[source]
        source: InventoryError,
    },
    /// The swiped item is not part of the inventory.
    #[error("item {item_id} is not in the inventory at {path:?}")]
    UnknownItem { item_id: String, path: Utf8PathBuf },
    /// Opening the preference document failed.
    #[error("failed to open preference document at {path:?}: {source}")]
    OpenPreferences {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The preference document JSON could not be decoded.
    #[error("failed to parse preference document at {path:?}: {source}")]
    ParsePreferences {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Creating the directory for the preference database failed.
    #[error("failed to create directory for preference database {path:?}: {source}")]
    CreateStoreDirectory {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The preference store failed.
    #[error(transparent)]
    PreferenceStore(#[from] PreferenceStoreError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
