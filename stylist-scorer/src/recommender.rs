//! Tag-weighted recommendation ranking.
//!
//! Candidates earn points for every tag they share with the user's liked
//! items, scaled by the attribute weight, and optionally lose points for tags
//! shared with disliked items. Items the user has already swiped on receive
//! [`Score::Excluded`] so they sink below every other candidate.
#![forbid(unsafe_code)]

use std::collections::HashSet;

use log::debug;
use stylist_core::{ItemId, Recommender, Score, ScoredRecommendation, TaggedItem};

use crate::{
    ScorerConfig, ScorerConfigError, WeightPreset,
    profile::TagProfile,
    reason::MatchTracker,
};

/// Rank inventory items by weighted overlap with the user's swipe history.
///
/// # Examples
/// ```
/// use stylist_core::{Recommender, Score};
/// use stylist_core::test_support::item;
/// use stylist_scorer::TagWeightedRecommender;
///
/// let inventory = vec![
///     item("a", &[("style", "Casual"), ("occasion", "Work")]),
///     item("b", &[("style", "Formal")]),
/// ];
/// let liked = vec![item("x", &[("style", "Casual")])];
///
/// let ranked = TagWeightedRecommender::default().recommend(&liked, &[], &inventory);
/// assert_eq!(ranked[0].item.id.as_str(), "a");
/// assert_eq!(ranked[0].score, Score::Value(5));
/// assert_eq!(ranked[0].reason, "Because you like Casual items.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagWeightedRecommender {
    config: ScorerConfig,
}

impl TagWeightedRecommender {
    /// Build a recommender from a validated configuration.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError`] when `config` fails validation.
    pub fn new(config: ScorerConfig) -> Result<Self, ScorerConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Build a recommender using the default configuration with `preset`
    /// weights.
    #[must_use]
    pub fn with_preset(preset: WeightPreset) -> Self {
        Self {
            config: ScorerConfig::with_preset(preset),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    fn cold_start(&self, inventory: &[TaggedItem]) -> Vec<ScoredRecommendation> {
        debug!(
            "no liked items; returning the first {} of {} inventory items",
            self.config.limit.min(inventory.len()),
            inventory.len()
        );
        inventory
            .iter()
            .take(self.config.limit)
            .cloned()
            .map(ScoredRecommendation::cold_start)
            .collect()
    }

    fn score_item(
        &self,
        item: &TaggedItem,
        liked: &TagProfile,
        disliked: Option<&TagProfile>,
        seen: &HashSet<&ItemId>,
    ) -> ScoredRecommendation {
        let mut total = 0_i64;
        let mut matches = MatchTracker::default();
        for (attribute, value) in &item.tags {
            let weight = i64::from(self.config.weights.weight(attribute));
            let liked_count = i64::from(liked.count(attribute, value));
            let disliked_count =
                disliked.map_or(0, |profile| i64::from(profile.count(attribute, value)));
            let contribution = liked_count
                .saturating_sub(disliked_count)
                .saturating_mul(weight);
            total = total.saturating_add(contribution);
            if contribution > 0 && self.config.reason_attributes.contains(attribute) {
                matches.push(value, contribution);
            }
        }
        let score = if seen.contains(&item.id) {
            Score::Excluded
        } else {
            Score::Value(total)
        };
        ScoredRecommendation {
            item: item.clone(),
            score,
            reason: matches.into_reason(),
        }
    }
}

impl Recommender for TagWeightedRecommender {
    fn recommend(
        &self,
        liked: &[TaggedItem],
        disliked: &[TaggedItem],
        inventory: &[TaggedItem],
    ) -> Vec<ScoredRecommendation> {
        if liked.is_empty() {
            return self.cold_start(inventory);
        }

        let liked_profile = TagProfile::from_items(liked);
        let disliked_profile = self
            .config
            .dislike_penalty
            .then(|| TagProfile::from_items(disliked));
        let seen: HashSet<&ItemId> = liked
            .iter()
            .chain(disliked)
            .map(|item| &item.id)
            .collect();
        debug!(
            "scoring {} candidates against {} liked and {} disliked items",
            inventory.len(),
            liked.len(),
            disliked.len()
        );

        let mut ranked: Vec<ScoredRecommendation> = inventory
            .iter()
            .map(|item| self.score_item(item, &liked_profile, disliked_profile.as_ref(), &seen))
            .collect();
        // `sort_by` is stable, so equal scores keep inventory order.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.config.limit);
        ranked
    }
}
