//! Validation errors raised at the boundary of the domain model.

use thiserror::Error;

/// A record that cannot be turned into a [`TaggedItem`](crate::TaggedItem).
///
/// Raised before scoring; the recommender only ever sees validated items.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// The record carried no `id`.
    #[error("item is missing an id")]
    MissingId,
    /// The `id` was empty or whitespace.
    #[error("item id must not be blank")]
    BlankId,
    /// A tag used an empty attribute name.
    #[error("item {item_id} has a tag with a blank attribute name")]
    BlankAttribute {
        /// Identifier of the offending item.
        item_id: String,
    },
    /// Two raw tag names normalised to the same attribute.
    #[error("item {item_id} carries more than one `{attribute}` tag")]
    DuplicateAttribute {
        /// Identifier of the offending item.
        item_id: String,
        /// Canonical name of the repeated attribute.
        attribute: String,
    },
    /// A tag value was not a string.
    #[error("tag `{attribute}` on item {item_id} must be a string, found {found}")]
    NonStringTagValue {
        /// Identifier of the offending item.
        item_id: String,
        /// Attribute name as it appeared in the record.
        attribute: String,
        /// JSON type of the rejected value.
        found: &'static str,
    },
}

/// Errors raised when assembling preference sets or records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferenceError {
    /// The same item appeared twice within one list.
    #[error("item {item_id} appears more than once in the {list} list")]
    DuplicateItem {
        /// Identifier of the repeated item.
        item_id: String,
        /// Which list held the duplicate (`liked` or `disliked`).
        list: &'static str,
    },
    /// The same item was both liked and disliked.
    #[error("item {item_id} is both liked and disliked")]
    ConflictingVerdict {
        /// Identifier of the conflicting item.
        item_id: String,
    },
    /// A user identifier was empty or whitespace.
    #[error("user id must not be blank")]
    BlankUser,
    /// A verdict string was not recognised.
    #[error("unknown verdict '{0}' (expected like or dislike)")]
    UnknownVerdict(String),
}
