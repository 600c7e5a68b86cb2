//! Tag-weighted outfit recommendations.
//!
//! [`TagWeightedRecommender`] implements the
//! [`Recommender`](stylist_core::Recommender) trait. It builds frequency
//! profiles of the tags on a user's liked and disliked items, scores each
//! inventory item by weighted overlap with those profiles and returns the
//! best matches with a short reason quoting the styles or occasions that
//! drove the score.
//!
//! Users without any liked items receive the first items of the inventory as
//! a cold-start selection. Items the user already swiped on are scored with
//! [`Score::Excluded`](stylist_core::Score::Excluded) and sink to the bottom.
//!
//! # Examples
//!
//! ```
//! use stylist_core::test_support::item;
//! use stylist_scorer::recommend;
//!
//! let inventory = vec![
//!     item("a", &[("style", "Casual"), ("occasion", "Work")]),
//!     item("b", &[("style", "Casual"), ("occasion", "Party")]),
//! ];
//! let liked = vec![item("x", &[("style", "Casual"), ("occasion", "Work")])];
//!
//! let ranked = recommend(&liked, &[], &inventory);
//! assert_eq!(ranked[0].reason, "Because you like Casual & Work items.");
//! assert_eq!(ranked[1].reason, "Because you like Casual items.");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use stylist_core::{Recommender, ScoredRecommendation, TaggedItem};

mod error;
mod profile;
mod reason;
mod recommender;
mod types;

pub use error::ScorerConfigError;
pub use profile::TagProfile;
pub use reason::FALLBACK_REASON;
pub use recommender::TagWeightedRecommender;
pub use types::{
    AttributeWeights, DEFAULT_ATTRIBUTE_WEIGHT, DEFAULT_LIMIT, ScorerConfig, WeightPreset,
};

/// Rank `inventory` with the default configuration.
///
/// Uses the garment weight table with the dislike penalty enabled and returns
/// at most [`DEFAULT_LIMIT`] recommendations.
#[must_use]
pub fn recommend(
    liked: &[TaggedItem],
    disliked: &[TaggedItem],
    inventory: &[TaggedItem],
) -> Vec<ScoredRecommendation> {
    TagWeightedRecommender::default().recommend(liked, disliked, inventory)
}

#[cfg(test)]
mod tests;
