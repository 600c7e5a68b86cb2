//! Liked and disliked items for a single user.
//!
//! Two shapes are provided:
//! - [`PreferenceRecord`] is the persisted document: ordered id lists keyed by
//!   user. Swipes are applied to it with [`PreferenceRecord::record`].
//! - [`PreferenceSets`] holds the resolved items handed to a recommender. Its
//!   constructor enforces that no id repeats within a list and that no id is
//!   both liked and disliked.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{ItemId, PreferenceError, TaggedItem};

/// Outcome of a single quiz swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Swiped right.
    Like,
    /// Swiped left.
    Dislike,
}

impl Verdict {
    /// Return the verdict as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" | "right" => Ok(Self::Like),
            "dislike" | "left" => Ok(Self::Dislike),
            _ => Err(PreferenceError::UnknownVerdict(s.to_owned())),
        }
    }
}

/// Opaque, non-blank identifier of an end user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// Validate and wrap a user identifier.
    ///
    /// # Errors
    /// Returns [`PreferenceError::BlankUser`] for empty or whitespace input.
    pub fn new(raw: impl Into<String>) -> Result<Self, PreferenceError> {
        let id = raw.into();
        if id.trim().is_empty() {
            return Err(PreferenceError::BlankUser);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persisted preference document for one user.
///
/// Serialises as `{"likedItemIds": [...], "dislikedItemIds": [...]}`.
///
/// # Examples
/// ```
/// use stylist_core::{ItemId, PreferenceRecord, Verdict};
///
/// # fn main() -> Result<(), stylist_core::InvalidInput> {
/// let mut record = PreferenceRecord::default();
/// record.record(ItemId::new("a")?, Verdict::Like);
/// record.record(ItemId::new("a")?, Verdict::Dislike);
/// assert!(record.liked_item_ids.is_empty());
/// assert_eq!(record.disliked_item_ids, vec![ItemId::new("a")?]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    /// Ids swiped right, oldest first.
    #[serde(default)]
    pub liked_item_ids: Vec<ItemId>,
    /// Ids swiped left, oldest first.
    #[serde(default)]
    pub disliked_item_ids: Vec<ItemId>,
}

impl PreferenceRecord {
    /// Apply a swipe.
    ///
    /// The latest verdict wins: an id already in the opposite list moves
    /// across, and repeating a verdict leaves the record unchanged.
    pub fn record(&mut self, id: ItemId, verdict: Verdict) {
        let (target, other) = match verdict {
            Verdict::Like => (&mut self.liked_item_ids, &mut self.disliked_item_ids),
            Verdict::Dislike => (&mut self.disliked_item_ids, &mut self.liked_item_ids),
        };
        other.retain(|existing| existing != &id);
        if !target.contains(&id) {
            target.push(id);
        }
    }

    /// Map stored ids back onto items from an inventory snapshot.
    ///
    /// Ids that are no longer in the inventory are dropped. Repeated ids keep
    /// their first position. An id stored in both lists is treated as liked.
    pub fn resolve(&self, inventory: &[TaggedItem]) -> PreferenceSets {
        let by_id: HashMap<&ItemId, &TaggedItem> =
            inventory.iter().map(|item| (&item.id, item)).collect();
        let mut seen = HashSet::new();
        let liked = resolve_ids(&self.liked_item_ids, &by_id, &mut seen, "liked");
        let disliked = resolve_ids(&self.disliked_item_ids, &by_id, &mut seen, "disliked");
        PreferenceSets { liked, disliked }
    }
}

fn resolve_ids<'a>(
    ids: &'a [ItemId],
    by_id: &HashMap<&ItemId, &TaggedItem>,
    seen: &mut HashSet<&'a ItemId>,
    list: &str,
) -> Vec<TaggedItem> {
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(item) = by_id.get(id) else {
            warn!("Dropped {list} item {id}: not present in the inventory snapshot");
            continue;
        };
        if !seen.insert(id) {
            warn!("Dropped repeated {list} item {id}");
            continue;
        }
        resolved.push((*item).clone());
    }
    resolved
}

/// Validated liked and disliked items, ready for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSets {
    liked: Vec<TaggedItem>,
    disliked: Vec<TaggedItem>,
}

impl PreferenceSets {
    /// Validate and construct preference sets.
    ///
    /// # Errors
    /// Returns [`PreferenceError::DuplicateItem`] when an id repeats within a
    /// list and [`PreferenceError::ConflictingVerdict`] when an id appears in
    /// both lists.
    pub fn new(
        liked: Vec<TaggedItem>,
        disliked: Vec<TaggedItem>,
    ) -> Result<Self, PreferenceError> {
        let liked_ids = unique_ids(&liked, "liked")?;
        let disliked_ids = unique_ids(&disliked, "disliked")?;
        if let Some(conflict) = liked_ids.intersection(&disliked_ids).min() {
            return Err(PreferenceError::ConflictingVerdict {
                item_id: conflict.to_string(),
            });
        }
        Ok(Self { liked, disliked })
    }

    /// Items the user liked, oldest first.
    pub fn liked(&self) -> &[TaggedItem] {
        &self.liked
    }

    /// Items the user disliked, oldest first.
    pub fn disliked(&self) -> &[TaggedItem] {
        &self.disliked
    }

    /// Report whether the user has no likes yet.
    pub fn is_cold_start(&self) -> bool {
        self.liked.is_empty()
    }

    /// Report whether the item was liked or disliked.
    pub fn has_seen(&self, id: &ItemId) -> bool {
        self.liked
            .iter()
            .chain(&self.disliked)
            .any(|item| &item.id == id)
    }
}

impl From<&PreferenceSets> for PreferenceRecord {
    fn from(sets: &PreferenceSets) -> Self {
        Self {
            liked_item_ids: sets.liked.iter().map(|item| item.id.clone()).collect(),
            disliked_item_ids: sets.disliked.iter().map(|item| item.id.clone()).collect(),
        }
    }
}

fn unique_ids<'a>(
    items: &'a [TaggedItem],
    list: &'static str,
) -> Result<HashSet<&'a ItemId>, PreferenceError> {
    let mut ids = HashSet::with_capacity(items.len());
    for item in items {
        if !ids.insert(&item.id) {
            return Err(PreferenceError::DuplicateItem {
                item_id: item.id.to_string(),
                list,
            });
        }
    }
    Ok(ids)
}
