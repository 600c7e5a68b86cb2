//! Command-line interface for ranking outfits and recording quiz swipes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;
mod sources;
mod swipe;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use swipe::{SwipeArgs, run_swipe};

pub(crate) const ARG_INVENTORY: &str = "inventory";
pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_USER: &str = "user";
pub(crate) const ARG_PREFERENCES_DB: &str = "preferences-db";
pub(crate) const ARG_WEIGHTS: &str = "weights";
pub(crate) const ARG_DISLIKE_PENALTY: &str = "dislike-penalty";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_ITEM: &str = "item";
pub(crate) const ARG_VERDICT: &str = "verdict";
pub(crate) const ENV_RECOMMEND_INVENTORY: &str = "STYLIST_CMDS_RECOMMEND_INVENTORY";
pub(crate) const ENV_SWIPE_INVENTORY: &str = "STYLIST_CMDS_SWIPE_INVENTORY";
pub(crate) const ENV_SWIPE_USER: &str = "STYLIST_CMDS_SWIPE_USER";
pub(crate) const ENV_SWIPE_ITEM: &str = "STYLIST_CMDS_SWIPE_ITEM";
pub(crate) const ENV_SWIPE_VERDICT: &str = "STYLIST_CMDS_SWIPE_VERDICT";

/// Database used when `--preferences-db` is not given.
pub(crate) const DEFAULT_PREFERENCES_DB: &str = "preferences.db";

/// Run the stylist CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration loading, input
/// validation or the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Swipe(args) => run_swipe(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "stylist",
    about = "Outfit recommendations from style quiz swipes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank inventory items for a user.
    Recommend(RecommendArgs),
    /// Record a like or dislike for an inventory item.
    Swipe(SwipeArgs),
}

#[cfg(test)]
mod tests;
