//! Rank inventory items for a user.
//!
//! The `Recommender` trait turns a user's liked and disliked items plus an
//! inventory snapshot into an ordered, bounded list of
//! [`ScoredRecommendation`]s.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::{PreferenceSets, TaggedItem};

/// Reason attached to every cold-start recommendation.
pub const COLD_START_REASON: &str = "Some popular styles to start!";

/// Relevance of a candidate item.
///
/// `Excluded` marks items the user has already liked or disliked. It orders
/// below every attainable value and converts to negative infinity.
///
/// # Examples
/// ```
/// use stylist_core::Score;
///
/// assert!(Score::Excluded < Score::Value(i64::MIN));
/// assert_eq!(Score::Excluded.as_f64(), f64::NEG_INFINITY);
/// assert_eq!(Score::Value(9).as_f64(), 9.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// Exclusion sentinel for already-seen items.
    Excluded,
    /// Weighted tag score.
    Value(i64),
}

impl Score {
    /// Score of an item with no signal.
    pub const ZERO: Self = Self::Value(0);

    /// Return the finite value, or `None` for excluded items.
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Excluded => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Report whether this is the exclusion sentinel.
    pub const fn is_excluded(self) -> bool {
        matches!(self, Self::Excluded)
    }

    /// Convert to a float, mapping the sentinel to negative infinity.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Excluded => f64::NEG_INFINITY,
            Self::Value(value) => value as f64,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excluded => f.write_str("-inf"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

/// JSON cannot carry infinities, so the sentinel serialises as `null`.
impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Excluded => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_i64(*value),
        }
    }
}

/// A candidate item with its score and a human-readable justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredRecommendation {
    /// The recommended item.
    #[serde(flatten)]
    pub item: TaggedItem,
    /// Ranking score.
    pub score: Score,
    /// Short explanation; always non-empty.
    pub reason: String,
}

impl ScoredRecommendation {
    /// Wrap an item as a cold-start suggestion.
    pub fn cold_start(item: TaggedItem) -> Self {
        Self {
            item,
            score: Score::ZERO,
            reason: COLD_START_REASON.to_owned(),
        }
    }
}

/// Produce ranked recommendations from preferences and an inventory.
///
/// Implementations must be pure: identical inputs yield identical outputs and
/// the inputs are never modified. They must be `Send + Sync` so one instance
/// can serve concurrent callers.
///
/// # Examples
///
/// ```rust
/// use stylist_core::{Recommender, ScoredRecommendation, TaggedItem};
///
/// struct FirstComeRecommender;
///
/// impl Recommender for FirstComeRecommender {
///     fn recommend(
///         &self,
///         _liked: &[TaggedItem],
///         _disliked: &[TaggedItem],
///         inventory: &[TaggedItem],
///     ) -> Vec<ScoredRecommendation> {
///         inventory
///             .iter()
///             .take(10)
///             .cloned()
///             .map(ScoredRecommendation::cold_start)
///             .collect()
///     }
/// }
///
/// assert!(FirstComeRecommender.recommend(&[], &[], &[]).is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Rank `inventory` for a user with the given liked and disliked items.
    fn recommend(
        &self,
        liked: &[TaggedItem],
        disliked: &[TaggedItem],
        inventory: &[TaggedItem],
    ) -> Vec<ScoredRecommendation>;

    /// Rank `inventory` using validated [`PreferenceSets`].
    fn recommend_for(
        &self,
        preferences: &PreferenceSets,
        inventory: &[TaggedItem],
    ) -> Vec<ScoredRecommendation> {
        self.recommend(preferences.liked(), preferences.disliked(), inventory)
    }
}
