//! Swipe command implementation for the stylist CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use stylist_core::{ItemId, PreferenceRecord, UserId, Verdict};

use crate::{
    ARG_INVENTORY, ARG_ITEM, ARG_PREFERENCES_DB, ARG_USER, ARG_VERDICT, CliError,
    DEFAULT_PREFERENCES_DB, ENV_SWIPE_INVENTORY, ENV_SWIPE_ITEM, ENV_SWIPE_USER,
    ENV_SWIPE_VERDICT,
    sources::{
        CollaboratorBuilder, DefaultCollaborators, load_inventory, require_existing, write_json,
    },
};

/// CLI arguments for the `swipe` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "swipe",
    long_about = "Record a quiz swipe for an inventory item. A like moves the \
                 item to the user's liked list and a dislike to the disliked \
                 list; the latest swipe on an item wins. The updated \
                 preference document is printed as JSON.",
    about = "Record a like or dislike for an inventory item"
)]
#[ortho_config(prefix = "STYLIST")]
pub(crate) struct SwipeArgs {
    /// Path to the inventory JSON snapshot.
    #[arg(long = ARG_INVENTORY, value_name = "path")]
    #[serde(default)]
    pub(crate) inventory: Option<Utf8PathBuf>,
    /// User who swiped.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Swiped item id.
    #[arg(long = ARG_ITEM, value_name = "id")]
    #[serde(default)]
    pub(crate) item: Option<String>,
    /// `like` (right) or `dislike` (left).
    #[arg(long = ARG_VERDICT, value_name = "verdict")]
    #[serde(default)]
    pub(crate) verdict: Option<Verdict>,
    /// Path to the SQLite preference database.
    #[arg(long = ARG_PREFERENCES_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences_db: Option<Utf8PathBuf>,
}

impl SwipeArgs {
    pub(crate) fn into_config(self) -> Result<SwipeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SwipeConfig::try_from(merged)
    }
}

/// Resolved `swipe` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SwipeConfig {
    pub(crate) inventory: Utf8PathBuf,
    pub(crate) user: UserId,
    pub(crate) item: ItemId,
    pub(crate) verdict: Verdict,
    pub(crate) preferences_db: Utf8PathBuf,
}

impl TryFrom<SwipeArgs> for SwipeConfig {
    type Error = CliError;

    fn try_from(args: SwipeArgs) -> Result<Self, Self::Error> {
        let inventory = args.inventory.ok_or(CliError::MissingArgument {
            field: ARG_INVENTORY,
            env: ENV_SWIPE_INVENTORY,
        })?;
        let user = args.user.ok_or(CliError::MissingArgument {
            field: ARG_USER,
            env: ENV_SWIPE_USER,
        })?;
        let item = args.item.ok_or(CliError::MissingArgument {
            field: ARG_ITEM,
            env: ENV_SWIPE_ITEM,
        })?;
        let verdict = args.verdict.ok_or(CliError::MissingArgument {
            field: ARG_VERDICT,
            env: ENV_SWIPE_VERDICT,
        })?;
        Ok(Self {
            inventory,
            user: UserId::new(user)?,
            item: ItemId::new(item)?,
            verdict,
            preferences_db: args
                .preferences_db
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PREFERENCES_DB)),
        })
    }
}

pub(super) fn run_swipe(args: SwipeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_swipe_with(args, &DefaultCollaborators, &mut stdout)
}

pub(super) fn run_swipe_with(
    args: SwipeArgs,
    builder: &dyn CollaboratorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let record = execute_swipe(args, builder)?;
    write_json(writer, &record)
}

fn execute_swipe(
    args: SwipeArgs,
    builder: &dyn CollaboratorBuilder,
) -> Result<PreferenceRecord, CliError> {
    let config = args.into_config()?;
    require_existing(&config.inventory, ARG_INVENTORY)?;
    let inventory = load_inventory(builder, &config.inventory)?;
    if !inventory.iter().any(|item| item.id == config.item) {
        return Err(CliError::UnknownItem {
            item_id: config.item.to_string(),
            path: config.inventory,
        });
    }

    let store = builder.preference_store(&config.preferences_db)?;
    let record = store.record_swipe(&config.user, config.item.clone(), config.verdict)?;
    info!(
        "recorded {} on item {} for user {}",
        config.verdict, config.item, config.user
    );
    Ok(record)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SwipeConfig, CliError> {
    let merged = SwipeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SwipeConfig::try_from(merged)
}
