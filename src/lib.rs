//! Facade crate for the stylist outfit recommendation engine.
//!
//! This crate re-exports the core domain types and the tag-weighted
//! recommender, with the `SQLite` preference store behind a feature flag.
//!
//! # Examples
//!
//! ```
//! use stylist_engine::{PreferenceRecord, Recommender, TagWeightedRecommender, decode_inventory};
//!
//! let inventory = decode_inventory(
//!     r#"[
//!         {"id": "1", "imageUrl": "a.jpeg", "tags": {"style": "Casual", "occasion": "Work"}},
//!         {"id": "2", "imageUrl": "b.jpeg", "tags": {"style": "Casual", "occasion": "Party"}},
//!         {"id": "3", "imageUrl": "c.jpeg", "tags": {"style": "Formal", "occasion": "Work"}}
//!     ]"#
//!     .as_bytes(),
//! )?;
//! let record: PreferenceRecord =
//!     serde_json::from_str(r#"{"likedItemIds": ["1"], "dislikedItemIds": []}"#)?;
//!
//! let ranked = TagWeightedRecommender::default().recommend_for(&record.resolve(&inventory), &inventory);
//! let ids: Vec<&str> = ranked.iter().map(|rec| rec.item.id.as_str()).collect();
//! assert_eq!(ids, ["2", "3", "1"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use stylist_core::{
    Attribute, COLD_START_REASON, InvalidInput, InventoryError, InventorySource, ItemId,
    PreferenceError, PreferenceRecord, PreferenceSets, PreferenceStore, PreferenceStoreError,
    Recommender, Score, ScoredRecommendation, TaggedItem, Tags, UserId, Verdict,
    decode_inventory,
};

#[cfg(feature = "store-sqlite")]
pub use stylist_core::SqlitePreferenceStore;

pub use stylist_scorer::{
    AttributeWeights, FALLBACK_REASON, ScorerConfig, ScorerConfigError, TagWeightedRecommender,
    WeightPreset, recommend,
};
