use crate::canon::country::{CANONICAL_COUNTRY_TABLE, PARTIAL_MATCH_TABLE};
use once_cell::sync::Lazy;
use regex::Regex;
use unidecode::unidecode;

static QUALIFIER_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("hard-coded pattern"));

/// Resolves raw country-name spellings onto the map layer's canonical keys.
///
/// The tables are injected at construction and never mutated, so one
/// instance can be shared across threads freely.
pub struct NameCanonicalizer {
    canonical: &'static [(&'static str, &'static str)],
    lowered: Vec<(String, &'static str)>,
    partial: &'static [(&'static str, &'static str)],
}

impl NameCanonicalizer {
    pub fn new() -> Self {
        Self::with_tables(CANONICAL_COUNTRY_TABLE, PARTIAL_MATCH_TABLE)
    }

    pub fn with_tables(
        canonical: &'static [(&'static str, &'static str)],
        partial: &'static [(&'static str, &'static str)],
    ) -> Self {
        // Lowered keys are fixed by the table, so fold them once here
        // instead of on every case-insensitive scan.
        let lowered = canonical
            .iter()
            .map(|(raw, key)| (raw.to_lowercase(), *key))
            .collect();

        Self {
            canonical,
            lowered,
            partial,
        }
    }

    /// Maps a raw dataset spelling to a canonical map key. Total: inputs
    /// with no table entry come back as their cleaned selves, and callers
    /// must tolerate such unmapped keys.
    ///
    /// Lookup order is strict and never backtracks: exact, then
    /// case-insensitive exact, then first partial pattern in declaration
    /// order, then the cleaned input as fallback.
    pub fn canonicalize(&self, raw: &str) -> String {
        let cleaned = clean_name(raw);
        if let Some((_, key)) = self.canonical.iter().find(|(variant, _)| *variant == cleaned) {
            return (*key).to_string();
        }

        let folded = cleaned.to_lowercase();
        if let Some((_, key)) = self.lowered.iter().find(|(variant, _)| *variant == folded) {
            return (*key).to_string();
        }

        for (pattern, key) in self.partial {
            if folded.contains(pattern) {
                return (*key).to_string();
            }
        }

        tracing::debug!("No canonical mapping for {:?}", cleaned);
        cleaned
    }
}

impl Default for NameCanonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips a trailing parenthetical qualifier ("United States (Alaska)" ->
/// "United States"), trims whitespace, and folds to ASCII. This is both the
/// fallback return value of canonicalization and the input to every lookup.
pub fn clean_name(raw: &str) -> String {
    let stripped = QUALIFIER_SUFFIX.replace(raw, "");
    unidecode(stripped.trim())
}
