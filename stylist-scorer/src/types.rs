//! Public configuration types for tag-weighted scoring.
#![forbid(unsafe_code)]

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use stylist_core::Attribute;

use crate::ScorerConfigError;

/// Number of recommendations returned when no limit is configured.
pub const DEFAULT_LIMIT: usize = 10;

/// Weight applied to attributes absent from the weight table.
pub const DEFAULT_ATTRIBUTE_WEIGHT: u32 = 1;

/// Per-attribute multipliers applied to tag matches.
///
/// Lookups are constant time; attributes missing from the table fall back to
/// the default weight.
///
/// # Examples
/// ```
/// use stylist_core::Attribute;
/// use stylist_scorer::AttributeWeights;
///
/// let weights = AttributeWeights::garment();
/// assert_eq!(weights.weight(&Attribute::Style), 5);
/// assert_eq!(weights.weight(&Attribute::Other("pattern".to_owned())), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeWeights {
    table: HashMap<Attribute, u32>,
    default_weight: u32,
}

impl AttributeWeights {
    /// Create an empty table where every attribute weighs `default_weight`.
    #[must_use]
    pub fn new(default_weight: u32) -> Self {
        Self {
            table: HashMap::new(),
            default_weight,
        }
    }

    /// Set the weight for `attribute`, replacing any previous entry.
    pub fn set_weight(&mut self, attribute: Attribute, weight: u32) {
        self.table.insert(attribute, weight);
    }

    /// Add a weight while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_weight(mut self, attribute: Attribute, weight: u32) -> Self {
        self.set_weight(attribute, weight);
        self
    }

    /// Return the weight applied to `attribute`.
    #[must_use]
    pub fn weight(&self, attribute: &Attribute) -> u32 {
        self.table
            .get(attribute)
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Table favouring style, then occasion, garment type, fitting and colour.
    #[must_use]
    pub fn garment() -> Self {
        Self::new(DEFAULT_ATTRIBUTE_WEIGHT)
            .with_weight(Attribute::Style, 5)
            .with_weight(Attribute::Occasion, 4)
            .with_weight(Attribute::GarmentType, 3)
            .with_weight(Attribute::Fitting, 2)
            .with_weight(Attribute::Color, 1)
    }

    /// Table for catalogues tagged with materials instead of garment types.
    #[must_use]
    pub fn material() -> Self {
        Self::new(DEFAULT_ATTRIBUTE_WEIGHT)
            .with_weight(Attribute::Style, 5)
            .with_weight(Attribute::Occasion, 4)
            .with_weight(Attribute::Fitting, 3)
            .with_weight(Attribute::Material, 2)
            .with_weight(Attribute::Color, 1)
    }
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self::garment()
    }
}

/// Named weight tables selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPreset {
    /// See [`AttributeWeights::garment`].
    #[default]
    Garment,
    /// See [`AttributeWeights::material`].
    Material,
}

impl WeightPreset {
    /// Canonical lowercase name of the preset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Garment => "garment",
            Self::Material => "material",
        }
    }

    /// Build the weight table this preset names.
    #[must_use]
    pub fn weights(self) -> AttributeWeights {
        match self {
            Self::Garment => AttributeWeights::garment(),
            Self::Material => AttributeWeights::material(),
        }
    }
}

impl fmt::Display for WeightPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightPreset {
    type Err = ScorerConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "garment" => Ok(Self::Garment),
            "material" => Ok(Self::Material),
            _ => Err(ScorerConfigError::UnknownPreset(s.to_owned())),
        }
    }
}

/// Tunables for [`TagWeightedRecommender`](crate::TagWeightedRecommender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerConfig {
    /// Attribute weight table.
    pub weights: AttributeWeights,
    /// Subtract disliked-tag frequencies from each contribution.
    pub dislike_penalty: bool,
    /// Maximum number of recommendations returned.
    pub limit: usize,
    /// Attributes whose matches may be quoted in a reason.
    pub reason_attributes: Vec<Attribute>,
}

impl ScorerConfig {
    /// Default configuration with the weight table of `preset`.
    #[must_use]
    pub fn with_preset(preset: WeightPreset) -> Self {
        Self {
            weights: preset.weights(),
            ..Self::default()
        }
    }

    /// Toggle the dislike penalty.
    #[must_use]
    pub const fn with_dislike_penalty(mut self, enabled: bool) -> Self {
        self.dislike_penalty = enabled;
        self
    }

    /// Override the recommendation limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Check the configuration and return it unchanged when usable.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::ZeroLimit`] when `limit` is zero.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        if self.limit == 0 {
            return Err(ScorerConfigError::ZeroLimit);
        }
        Ok(self)
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: AttributeWeights::garment(),
            dislike_penalty: true,
            limit: DEFAULT_LIMIT,
            reason_attributes: vec![Attribute::Style, Attribute::Occasion],
        }
    }
}
