//! Core domain types for the Stylist recommendation engine.
//!
//! The crate models tagged inventory items, a user's liked and disliked
//! items, and the [`Recommender`] contract that ranks an inventory for a user.
//! Raw inventory documents are validated at the boundary (see
//! [`ItemRecord`]) so recommenders only ever see well-formed items.
//!
//! Storage is kept behind the [`InventorySource`] and [`PreferenceStore`]
//! traits. A `SQLite` preference store is available with the `store-sqlite`
//! feature; in-memory doubles live in [`test_support`] behind the
//! `test-support` feature.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attribute;
mod error;
mod item;
mod preferences;
mod recommend;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attribute::Attribute;
pub use error::{InvalidInput, PreferenceError};
pub use item::{ItemId, ItemRecord, TaggedItem, Tags};
pub use preferences::{PreferenceRecord, PreferenceSets, UserId, Verdict};
pub use recommend::{COLD_START_REASON, Recommender, Score, ScoredRecommendation};
pub use store::{
    InventoryError, InventorySource, PreferenceStore, PreferenceStoreError, decode_inventory,
};

#[cfg(feature = "store-sqlite")]
pub use store::SqlitePreferenceStore;
