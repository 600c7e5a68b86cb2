//! Attribute names carried by tagged inventory items.
//!
//! The known variants cover the tags emitted by the inventory tagging
//! pipeline. Any other name is kept as [`Attribute::Other`] so inventory
//! sources with extra attributes can still be scored with the default weight.
//!
//! Names are normalised on the way in: surrounding whitespace is trimmed, the
//! name is lowercased, and spaces or hyphens become underscores.
//!
//! # Examples
//! ```
//! use stylist_core::Attribute;
//!
//! assert_eq!(Attribute::Style.as_str(), "style");
//! assert_eq!("Garment Type".parse::<Attribute>(), Ok(Attribute::GarmentType));
//! assert_eq!(Attribute::from("pattern"), Attribute::Other("pattern".into()));
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A categorical attribute name such as `style` or `color`.
///
/// The declaration order doubles as the iteration order of [`crate::Tags`], so
/// the highest-priority attributes are visited first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Attribute {
    /// Overall look, e.g. `Casual` or `Bohemian`.
    Style,
    /// Where the outfit is worn, e.g. `Work` or `Party`.
    Occasion,
    /// Kind of garment, e.g. `Dress` or `Suit`.
    GarmentType,
    /// Cut of the garment, e.g. `Slim Fit`.
    Fitting,
    /// Dominant fabric.
    Material,
    /// Dominant colour or pattern.
    Color,
    /// Any attribute outside the known set, stored normalised.
    Other(String),
}

impl Attribute {
    /// Return the canonical snake-case name.
    ///
    /// # Examples
    /// ```
    /// use stylist_core::Attribute;
    ///
    /// assert_eq!(Attribute::GarmentType.as_str(), "garment_type");
    /// assert_eq!(Attribute::Other("pattern".into()).as_str(), "pattern");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Self::Style => "style",
            Self::Occasion => "occasion",
            Self::GarmentType => "garment_type",
            Self::Fitting => "fitting",
            Self::Material => "material",
            Self::Color => "color",
            Self::Other(name) => name.as_str(),
        }
    }
}

fn normalise(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

impl From<&str> for Attribute {
    fn from(raw: &str) -> Self {
        let name = normalise(raw);
        match name.as_str() {
            "style" => Self::Style,
            "occasion" => Self::Occasion,
            "garment_type" | "garment" => Self::GarmentType,
            "fitting" | "fit" => Self::Fitting,
            "material" | "fabric" => Self::Material,
            "color" | "colour" => Self::Color,
            _ => Self::Other(name),
        }
    }
}

impl From<String> for Attribute {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Attribute> for String {
    fn from(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("attribute name must not be blank".to_owned());
        }
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("style", Attribute::Style)]
    #[case(" Occasion ", Attribute::Occasion)]
    #[case("garment-type", Attribute::GarmentType)]
    #[case("Garment Type", Attribute::GarmentType)]
    #[case("colour", Attribute::Color)]
    #[case("fabric", Attribute::Material)]
    #[case("Pattern", Attribute::Other("pattern".into()))]
    fn parses_known_names_and_aliases(#[case] raw: &str, #[case] expected: Attribute) {
        assert_eq!(raw.parse::<Attribute>(), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_blank_names() {
        let err = "   ".parse::<Attribute>().unwrap_err();
        assert!(err.contains("blank"));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Attribute::Fitting.to_string(), Attribute::Fitting.as_str());
    }

    #[rstest]
    fn priority_attributes_sort_first() {
        let mut names = vec![
            Attribute::Other("pattern".into()),
            Attribute::Color,
            Attribute::Occasion,
            Attribute::Style,
        ];
        names.sort();
        assert_eq!(
            names,
            vec![
                Attribute::Style,
                Attribute::Occasion,
                Attribute::Color,
                Attribute::Other("pattern".into()),
            ]
        );
    }

    #[rstest]
    fn serde_round_trips_through_strings() {
        let json = serde_json::to_string(&Attribute::GarmentType).expect("serialise");
        assert_eq!(json, "\"garment_type\"");
        let parsed: Attribute = serde_json::from_str("\"Colour\"").expect("deserialise");
        assert_eq!(parsed, Attribute::Color);
    }
}
