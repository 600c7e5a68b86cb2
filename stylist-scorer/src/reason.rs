//! Human-readable justifications for recommendations.
#![forbid(unsafe_code)]

/// Reason used when no quoted attribute contributed positively.
pub const FALLBACK_REASON: &str = "A popular style you might like";

#[derive(Debug)]
struct Match<'a> {
    value: &'a str,
    contribution: i64,
}

/// Collect matched tag values in order of first occurrence.
///
/// A value seen under several attributes is recorded once with the summed
/// contribution.
#[derive(Debug, Default)]
pub(crate) struct MatchTracker<'a> {
    matches: Vec<Match<'a>>,
}

impl<'a> MatchTracker<'a> {
    /// Record `value` with its positive contribution.
    pub(crate) fn push(&mut self, value: &'a str, contribution: i64) {
        if let Some(existing) = self.matches.iter_mut().find(|m| m.value == value) {
            existing.contribution = existing.contribution.saturating_add(contribution);
            return;
        }
        self.matches.push(Match {
            value,
            contribution,
        });
    }

    /// Render the reason text.
    pub(crate) fn into_reason(self) -> String {
        let mut ranked = self.matches;
        if ranked.len() > 2 {
            // Stable: equal contributions keep first-occurrence order.
            ranked.sort_by(|a, b| b.contribution.cmp(&a.contribution));
        }
        match ranked.as_slice() {
            [] => FALLBACK_REASON.to_owned(),
            [only] => format!("Because you like {} items.", only.value),
            [first, second] => {
                format!("Because you like {} & {} items.", first.value, second.value)
            }
            [first, second, ..] => {
                format!("Because you love {} & {} looks.", first.value, second.value)
            }
        }
    }
}
