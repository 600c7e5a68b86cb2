//! Recommend command implementation for the stylist CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use stylist_core::{PreferenceRecord, Recommender, ScoredRecommendation, UserId};
use stylist_scorer::{DEFAULT_LIMIT, ScorerConfig, TagWeightedRecommender, WeightPreset};

use crate::{
    ARG_DISLIKE_PENALTY, ARG_INVENTORY, ARG_LIMIT, ARG_PREFERENCES, ARG_PREFERENCES_DB, ARG_USER,
    ARG_WEIGHTS, CliError, DEFAULT_PREFERENCES_DB, ENV_RECOMMEND_INVENTORY,
    sources::{
        CollaboratorBuilder, DefaultCollaborators, load_inventory, load_preference_document,
        require_existing, write_json,
    },
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank an inventory snapshot for one user. Preferences come \
                 from a JSON preference document or from the preference \
                 database by user id; without either, the first items of the \
                 inventory are returned as a cold-start selection.",
    about = "Rank inventory items for a user"
)]
#[ortho_config(prefix = "STYLIST")]
pub(crate) struct RecommendArgs {
    /// Path to the inventory JSON snapshot.
    #[arg(long = ARG_INVENTORY, value_name = "path")]
    #[serde(default)]
    pub(crate) inventory: Option<Utf8PathBuf>,
    /// Path to a `{ likedItemIds, dislikedItemIds }` preference document.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Load preferences for this user from the preference database.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Path to the SQLite preference database.
    #[arg(long = ARG_PREFERENCES_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences_db: Option<Utf8PathBuf>,
    /// Attribute weight preset (`garment` or `material`).
    #[arg(long = ARG_WEIGHTS, value_name = "preset")]
    #[serde(default)]
    pub(crate) weights: Option<WeightPreset>,
    /// Subtract points for tags shared with disliked items.
    #[arg(long = ARG_DISLIKE_PENALTY, value_name = "bool")]
    #[serde(default)]
    pub(crate) dislike_penalty: Option<bool>,
    /// Maximum number of recommendations to print.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Where the user's swipe history comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PreferenceSource {
    /// No history; the user gets a cold-start selection.
    Empty,
    /// A JSON preference document on disk.
    Document(Utf8PathBuf),
    /// The stored document for `user` in the preference database.
    Store { database: Utf8PathBuf, user: UserId },
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) inventory: Utf8PathBuf,
    pub(crate) preferences: PreferenceSource,
    pub(crate) scorer: ScorerConfig,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.inventory, ARG_INVENTORY)?;
        if let PreferenceSource::Document(path) = &self.preferences {
            require_existing(path, ARG_PREFERENCES)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let inventory = args.inventory.ok_or(CliError::MissingArgument {
            field: ARG_INVENTORY,
            env: ENV_RECOMMEND_INVENTORY,
        })?;

        let preferences = match (args.preferences, args.user) {
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_PREFERENCES,
                    second: ARG_USER,
                });
            }
            (Some(path), None) => PreferenceSource::Document(path),
            (None, Some(user)) => PreferenceSource::Store {
                database: args
                    .preferences_db
                    .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PREFERENCES_DB)),
                user: UserId::new(user)?,
            },
            (None, None) => PreferenceSource::Empty,
        };

        let scorer = ScorerConfig::with_preset(args.weights.unwrap_or_default())
            .with_dislike_penalty(args.dislike_penalty.unwrap_or(true))
            .with_limit(args.limit.unwrap_or(DEFAULT_LIMIT))
            .validate()?;

        Ok(Self {
            inventory,
            preferences,
            scorer,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &DefaultCollaborators, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn CollaboratorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendations = execute_recommend(args, builder)?;
    write_json(writer, &recommendations)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn CollaboratorBuilder,
) -> Result<Vec<ScoredRecommendation>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let inventory = load_inventory(builder, &config.inventory)?;
    let record = load_record(&config.preferences, builder)?;
    let preferences = record.resolve(&inventory);
    if preferences.is_cold_start() {
        info!("no liked items found; serving a cold-start selection");
    }
    let recommender = TagWeightedRecommender::new(config.scorer)?;
    Ok(recommender.recommend_for(&preferences, &inventory))
}

fn load_record(
    source: &PreferenceSource,
    builder: &dyn CollaboratorBuilder,
) -> Result<PreferenceRecord, CliError> {
    match source {
        PreferenceSource::Empty => Ok(PreferenceRecord::default()),
        PreferenceSource::Document(path) => load_preference_document(path),
        PreferenceSource::Store { database, user } => load_stored_record(builder, database, user),
    }
}

fn load_stored_record(
    builder: &dyn CollaboratorBuilder,
    database: &Utf8Path,
    user: &UserId,
) -> Result<PreferenceRecord, CliError> {
    let store = builder.preference_store(database)?;
    let record = store.load(user)?;
    if record.is_none() {
        info!("no stored preferences for user {user}");
    }
    Ok(record.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
