//! Unit coverage for tag-weighted scoring.
#![forbid(unsafe_code)]

use rstest::{fixture, rstest};
use stylist_core::{
    Attribute, COLD_START_REASON, Recommender, Score, ScoredRecommendation, TaggedItem,
    test_support::item,
};

use crate::{
    AttributeWeights, FALLBACK_REASON, ScorerConfig, ScorerConfigError, TagProfile,
    TagWeightedRecommender, WeightPreset, recommend,
};

#[fixture]
fn inventory() -> Vec<TaggedItem> {
    vec![
        item("a", &[("style", "Casual"), ("occasion", "Work")]),
        item("b", &[("style", "Casual"), ("occasion", "Party")]),
        item("c", &[("style", "Formal"), ("occasion", "Work")]),
    ]
}

fn numbered(count: usize) -> Vec<TaggedItem> {
    (0..count)
        .map(|n| item(&format!("item-{n}"), &[("style", "Casual")]))
        .collect()
}

fn ids(ranked: &[ScoredRecommendation]) -> Vec<&str> {
    ranked.iter().map(|rec| rec.item.id.as_str()).collect()
}

fn scores(ranked: &[ScoredRecommendation]) -> Vec<Score> {
    ranked.iter().map(|rec| rec.score).collect()
}

#[rstest]
fn scores_weighted_matches(inventory: Vec<TaggedItem>) {
    let liked = vec![item("x", &[("style", "Casual"), ("occasion", "Work")])];

    let ranked = recommend(&liked, &[], &inventory);

    assert_eq!(ids(&ranked), vec!["a", "b", "c"]);
    assert_eq!(
        scores(&ranked),
        vec![Score::Value(9), Score::Value(5), Score::Value(4)]
    );
}

#[rstest]
fn dislikes_subtract_weighted_counts(inventory: Vec<TaggedItem>) {
    let liked = vec![item("x", &[("style", "Casual"), ("occasion", "Work")])];
    let disliked = vec![item("y", &[("style", "Formal"), ("occasion", "Work")])];

    let ranked = recommend(&liked, &disliked, &inventory);

    assert_eq!(ids(&ranked), vec!["a", "b", "c"]);
    assert_eq!(
        scores(&ranked),
        vec![Score::Value(5), Score::Value(5), Score::Value(-5)]
    );
}

#[rstest]
fn penalty_can_be_disabled(inventory: Vec<TaggedItem>) {
    let liked = vec![item("x", &[("style", "Casual"), ("occasion", "Work")])];
    let disliked = vec![item("y", &[("style", "Formal"), ("occasion", "Work")])];
    let recommender =
        TagWeightedRecommender::new(ScorerConfig::default().with_dislike_penalty(false))
            .expect("valid config");

    let ranked = recommender.recommend(&liked, &disliked, &inventory);

    assert_eq!(
        scores(&ranked),
        vec![Score::Value(9), Score::Value(5), Score::Value(4)]
    );
}

#[rstest]
fn disliked_only_items_score_below_zero() {
    let liked = vec![item("x", &[("style", "Casual")])];
    let disliked = vec![item("y", &[("style", "Formal")])];
    let inventory = vec![item("c", &[("style", "Formal")])];

    let ranked = recommend(&liked, &disliked, &inventory);

    assert_eq!(scores(&ranked), vec![Score::Value(-5)]);
    assert_eq!(ranked.first().map(|rec| rec.reason.as_str()), Some(FALLBACK_REASON));
}

#[rstest]
fn cold_start_returns_the_first_ten_in_order() {
    let inventory = numbered(12);
    let disliked = vec![item("item-0", &[("style", "Casual")])];

    let ranked = recommend(&[], &disliked, &inventory);

    let expected: Vec<String> = (0..10).map(|n| format!("item-{n}")).collect();
    assert_eq!(ids(&ranked), expected);
    assert!(
        ranked
            .iter()
            .all(|rec| rec.reason == COLD_START_REASON && rec.score == Score::ZERO)
    );
}

#[rstest]
#[case::empty(0)]
#[case::short(3)]
#[case::exact(10)]
fn cold_start_is_bounded_by_inventory(#[case] size: usize) {
    let ranked = recommend(&[], &[], &numbered(size));
    assert_eq!(ranked.len(), size);
}

#[rstest]
fn empty_inventory_yields_nothing() {
    let liked = vec![item("x", &[("style", "Casual")])];
    assert!(recommend(&liked, &[], &[]).is_empty());
}

#[rstest]
fn items_without_tags_score_zero() {
    let liked = vec![item("x", &[("style", "Casual")])];
    let inventory = vec![item("bare", &[])];

    let ranked = recommend(&liked, &[], &inventory);

    assert_eq!(scores(&ranked), vec![Score::ZERO]);
    assert_eq!(ranked.first().map(|rec| rec.reason.as_str()), Some(FALLBACK_REASON));
}

#[rstest]
fn seen_items_sink_below_every_candidate() {
    let liked = vec![item("a", &[("style", "Casual")])];
    let disliked = vec![item("b", &[("style", "Formal")])];
    let inventory = vec![
        item("a", &[("style", "Casual")]),
        item("b", &[("style", "Formal")]),
        item("c", &[("style", "Formal")]),
    ];

    let ranked = recommend(&liked, &disliked, &inventory);

    assert_eq!(ids(&ranked), vec!["c", "a", "b"]);
    assert_eq!(
        scores(&ranked),
        vec![Score::Value(-5), Score::Excluded, Score::Excluded]
    );
}

#[rstest]
fn seen_items_fall_out_of_large_inventories() {
    let mut inventory = vec![item("seen", &[("style", "Casual")])];
    inventory.extend(numbered(11));
    let liked = vec![item("seen", &[("style", "Casual")])];

    let ranked = recommend(&liked, &[], &inventory);

    assert_eq!(ranked.len(), 10);
    assert!(ranked.iter().all(|rec| rec.item.id.as_str() != "seen"));
}

#[rstest]
fn ties_keep_inventory_order() {
    let liked = vec![item("x", &[("style", "Casual")])];
    let inventory = numbered(5);

    let ranked = recommend(&liked, &[], &inventory);

    assert_eq!(
        ids(&ranked),
        vec!["item-0", "item-1", "item-2", "item-3", "item-4"]
    );
}

#[rstest]
fn reasons_quote_only_style_and_occasion() {
    let liked = vec![item("x", &[("color", "Red"), ("garment_type", "Dress")])];
    let inventory = vec![item("a", &[("color", "Red"), ("garment_type", "Dress")])];

    let ranked = recommend(&liked, &[], &inventory);

    assert_eq!(scores(&ranked), vec![Score::Value(4)]);
    assert_eq!(ranked.first().map(|rec| rec.reason.as_str()), Some(FALLBACK_REASON));
}

#[rstest]
fn material_preset_weights_materials() {
    let liked = vec![item("x", &[("material", "Linen"), ("fitting", "Relaxed")])];
    let inventory = vec![item("a", &[("material", "Linen"), ("fitting", "Relaxed")])];

    let ranked =
        TagWeightedRecommender::with_preset(WeightPreset::Material).recommend(&liked, &[], &inventory);

    assert_eq!(scores(&ranked), vec![Score::Value(5)]);
}

#[rstest]
fn unknown_attributes_use_the_default_weight() {
    let weights = AttributeWeights::new(7).with_weight(Attribute::Style, 2);
    let recommender = TagWeightedRecommender::new(ScorerConfig {
        weights,
        ..ScorerConfig::default()
    })
    .expect("valid config");
    let liked = vec![item("x", &[("style", "Casual"), ("pattern", "Striped")])];
    let inventory = vec![item("a", &[("style", "Casual"), ("pattern", "Striped")])];

    let ranked = recommender.recommend(&liked, &[], &inventory);

    assert_eq!(scores(&ranked), vec![Score::Value(9)]);
}

#[rstest]
fn limit_bounds_output() {
    let recommender =
        TagWeightedRecommender::new(ScorerConfig::default().with_limit(2)).expect("valid config");
    let liked = vec![item("x", &[("style", "Casual")])];

    assert_eq!(recommender.recommend(&liked, &[], &numbered(5)).len(), 2);
    assert_eq!(recommender.recommend(&[], &[], &numbered(5)).len(), 2);
}

#[rstest]
fn zero_limit_is_rejected() {
    let err = TagWeightedRecommender::new(ScorerConfig::default().with_limit(0))
        .expect_err("zero limit");
    assert_eq!(err, ScorerConfigError::ZeroLimit);
}

#[rstest]
#[case("garment", WeightPreset::Garment)]
#[case(" Material ", WeightPreset::Material)]
fn parses_presets(#[case] raw: &str, #[case] expected: WeightPreset) {
    assert_eq!(raw.parse::<WeightPreset>(), Ok(expected));
}

#[rstest]
fn rejects_unknown_presets() {
    assert_eq!(
        "denim".parse::<WeightPreset>(),
        Err(ScorerConfigError::UnknownPreset("denim".to_owned()))
    );
}

#[rstest]
fn profiles_count_exact_values() {
    let profile = TagProfile::from_items(&[
        item("x", &[("style", "Casual")]),
        item("y", &[("style", "Casual"), ("color", "Red")]),
    ]);

    assert_eq!(profile.count(&Attribute::Style, "Casual"), 2);
    assert_eq!(profile.count(&Attribute::Style, "casual"), 0);
    assert_eq!(profile.count(&Attribute::Color, "Red"), 1);
    assert!(TagProfile::from_items(&[]).is_empty());
}
