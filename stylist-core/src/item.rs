//! Tagged inventory items and their boundary representation.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Attribute, InvalidInput};

/// Attribute/value pairs describing an item.
///
/// Each attribute carries a single value. Iteration follows [`Attribute`]
/// order, so `style` and `occasion` come first.
pub type Tags = BTreeMap<Attribute, String>;

/// Opaque, non-blank identifier of an inventory item.
///
/// # Examples
/// ```
/// use stylist_core::ItemId;
///
/// let id = ItemId::new("2379005")?;
/// assert_eq!(id.as_str(), "2379005");
/// assert!(ItemId::new("  ").is_err());
/// # Ok::<(), stylist_core::InvalidInput>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Validate and wrap an identifier.
    ///
    /// # Errors
    /// Returns [`InvalidInput::BlankId`] when `raw` is empty or whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidInput> {
        let id = raw.into();
        if id.trim().is_empty() {
            return Err(InvalidInput::BlankId);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = InvalidInput;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One inventory entry: an outfit image with categorical tags.
///
/// # Examples
/// ```
/// use stylist_core::{Attribute, ItemId, TaggedItem, Tags};
///
/// # fn main() -> Result<(), stylist_core::InvalidInput> {
/// let tags = Tags::from([(Attribute::Style, "Casual".to_owned())]);
/// let item = TaggedItem::new(ItemId::new("a")?, "https://img/a.jpg", tags);
/// assert_eq!(item.tag(&Attribute::Style), Some("Casual"));
/// assert!(item.tag(&Attribute::Color).is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", rename_all = "camelCase")]
pub struct TaggedItem {
    /// Stable identifier.
    pub id: ItemId,
    /// Image reference; never interpreted by the engine.
    pub image_url: String,
    /// Categorical attributes.
    pub tags: Tags,
}

impl TaggedItem {
    /// Construct an item from validated parts.
    pub fn new(id: ItemId, image_url: impl Into<String>, tags: Tags) -> Self {
        Self {
            id,
            image_url: image_url.into(),
            tags,
        }
    }

    /// Construct an item without tags.
    pub fn with_empty_tags(id: ItemId, image_url: impl Into<String>) -> Self {
        Self::new(id, image_url, Tags::new())
    }

    /// Return the value recorded for `attribute`, if any.
    pub fn tag(&self, attribute: &Attribute) -> Option<&str> {
        self.tags.get(attribute).map(String::as_str)
    }
}

/// Inventory record as stored by the document database.
///
/// Fields the engine does not use (such as `pexels_id`) are ignored. Converting
/// into a [`TaggedItem`] performs all boundary validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Document identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Image reference.
    #[serde(default)]
    pub image_url: String,
    /// Raw tag object as produced by the tagging pipeline.
    #[serde(default)]
    pub tags: Map<String, Value>,
}

impl TryFrom<ItemRecord> for TaggedItem {
    type Error = InvalidInput;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let raw_id = record.id.ok_or(InvalidInput::MissingId)?;
        let id = ItemId::new(raw_id)?;
        let mut tags = Tags::new();
        for (name, value) in record.tags {
            if name.trim().is_empty() {
                return Err(InvalidInput::BlankAttribute {
                    item_id: id.to_string(),
                });
            }
            let text = match value {
                Value::String(text) => text,
                other => {
                    return Err(InvalidInput::NonStringTagValue {
                        item_id: id.to_string(),
                        attribute: name,
                        found: json_type(&other),
                    });
                }
            };
            let attribute = Attribute::from(name);
            if tags.contains_key(&attribute) {
                return Err(InvalidInput::DuplicateAttribute {
                    item_id: id.to_string(),
                    attribute: attribute.to_string(),
                });
            }
            tags.insert(attribute, text);
        }
        Ok(Self::new(id, record.image_url, tags))
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
