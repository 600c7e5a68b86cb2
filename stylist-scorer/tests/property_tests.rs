//! Property-based tests for tag-weighted recommendations.
//!
//! # Invariants tested
//!
//! - **Determinism:** identical inputs produce identical rankings.
//! - **Bounded output:** never more than the limit or the inventory size.
//! - **Exclusion:** swiped items never surface while at least eleven unseen
//!   candidates remain.
//! - **Monotonicity:** liking another item that shares a tag never lowers a
//!   candidate's score.
//! - **Stable ties:** equal scores keep inventory order.

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use std::collections::HashMap;

use proptest::prelude::*;
use stylist_core::{ItemId, Recommender, Score, TaggedItem, test_support::item};
use stylist_scorer::{DEFAULT_LIMIT, ScorerConfig, TagWeightedRecommender, recommend};

const STYLES: [&str; 4] = ["Casual", "Formal", "Street", "Boho"];
const OCCASIONS: [&str; 3] = ["Work", "Party", "Weekend"];
const COLORS: [&str; 3] = ["Red", "Black", "Beige"];

/// Generate `len` items with ids `{prefix}-{n}` and random tag values.
fn items_strategy(
    prefix: &'static str,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<TaggedItem>> {
    let tags = (
        prop::sample::select(STYLES.to_vec()),
        prop::sample::select(OCCASIONS.to_vec()),
        prop::sample::select(COLORS.to_vec()),
    );
    prop::collection::vec(tags, len).prop_map(move |picks| {
        picks
            .into_iter()
            .enumerate()
            .map(|(n, (style, occasion, color))| {
                item(
                    &format!("{prefix}-{n}"),
                    &[("style", style), ("occasion", occasion), ("color", color)],
                )
            })
            .collect()
    })
}

fn unbounded() -> TagWeightedRecommender {
    TagWeightedRecommender::new(ScorerConfig::default().with_limit(usize::MAX))
        .expect("valid config")
}

fn score_of(ranked: &[stylist_core::ScoredRecommendation], id: &ItemId) -> Score {
    ranked
        .iter()
        .find(|rec| &rec.item.id == id)
        .map(|rec| rec.score)
        .expect("candidate should be ranked")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: recommending twice over the same snapshot gives the same
    /// list.
    #[test]
    fn rankings_are_deterministic(
        liked in items_strategy("liked", 0..4),
        disliked in items_strategy("disliked", 0..4),
        inventory in items_strategy("item", 0..30),
    ) {
        let first = recommend(&liked, &disliked, &inventory);
        let second = recommend(&liked, &disliked, &inventory);
        prop_assert_eq!(first, second);
    }

    /// Property: output never exceeds the limit or the inventory size.
    #[test]
    fn output_is_bounded(
        liked in items_strategy("liked", 0..4),
        inventory in items_strategy("item", 0..30),
    ) {
        let ranked = recommend(&liked, &[], &inventory);
        prop_assert!(ranked.len() <= DEFAULT_LIMIT);
        prop_assert!(ranked.len() <= inventory.len());
    }

    /// Property: swiped items stay out of the top list when enough unseen
    /// candidates exist.
    #[test]
    fn swiped_items_are_excluded(
        seen in items_strategy("seen", 1..6),
        others in items_strategy("item", 11..30),
    ) {
        let (liked, disliked) = seen.split_at(1);
        let mut inventory = seen.clone();
        inventory.extend(others);

        let ranked = recommend(liked, disliked, &inventory);

        prop_assert_eq!(ranked.len(), DEFAULT_LIMIT);
        for rec in &ranked {
            prop_assert!(!seen.iter().any(|item| item.id == rec.item.id));
            prop_assert!(!rec.score.is_excluded());
        }
    }

    /// Property: liking one more item that shares a candidate's tags never
    /// lowers that candidate's score.
    #[test]
    fn extra_likes_never_lower_scores(
        liked in items_strategy("liked", 1..4),
        disliked in items_strategy("disliked", 0..4),
        inventory in items_strategy("item", 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let candidate = pick.get(&inventory);
        let extra = TaggedItem::new(
            ItemId::new("extra").expect("valid id"),
            "https://images.example/extra.jpeg",
            candidate.tags.clone(),
        );
        let mut more_liked = liked.clone();
        more_liked.push(extra);
        let recommender = unbounded();

        let before = recommender.recommend(&liked, &disliked, &inventory);
        let after = recommender.recommend(&more_liked, &disliked, &inventory);

        prop_assert!(score_of(&after, &candidate.id) >= score_of(&before, &candidate.id));
    }

    /// Property: candidates with equal scores appear in inventory order.
    #[test]
    fn ties_keep_inventory_order(
        liked in items_strategy("liked", 1..4),
        inventory in items_strategy("item", 0..30),
    ) {
        let positions: HashMap<&ItemId, usize> = inventory
            .iter()
            .enumerate()
            .map(|(position, item)| (&item.id, position))
            .collect();

        let ranked = unbounded().recommend(&liked, &[], &inventory);

        for pair in ranked.windows(2) {
            if let [earlier, later] = pair {
                prop_assert!(earlier.score >= later.score);
                if earlier.score == later.score {
                    prop_assert!(positions.get(&earlier.item.id) < positions.get(&later.item.id));
                }
            }
        }
    }
}
