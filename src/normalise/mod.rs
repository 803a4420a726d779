//! Token normalisation.
//!
//! Raw tokens pass through a fixed pipeline before they are counted: abbreviation expansion,
//! character filtering, numeric filtering and stemming. A token the filtering stages leave
//! empty produces no count-key at all. The stages run in that order and each stage assumes the
//! previous stage's output shape.

pub mod abbreviation;
pub mod filter;
pub mod stem;

use errors::*;

use self::abbreviation::AbbreviationRules;

/// `Normaliser` converts raw tokens into canonical count-keys.
///
/// Normalisation is a pure function of the token: the rule tables are fixed, so the same token
/// always yields the same key no matter which worker processes it or how often the record is
/// retried. The compiled rule table held here is scratch state only and never carries values
/// between calls.
pub struct Normaliser {
    abbreviation_rules: AbbreviationRules,
}

impl Normaliser {
    pub fn new() -> Result<Normaliser> {
        let abbreviation_rules = AbbreviationRules::compile().chain_err(
            || "Error compiling abbreviation rules.",
        )?;
        Ok(Normaliser { abbreviation_rules })
    }

    /// Normalises a single token into its canonical count-key.
    ///
    /// Returns `None` for tokens that filter down to nothing (punctuation runs, purely numeric
    /// tokens); these contribute no count. Malformed tokens are never an error.
    pub fn normalise(&self, token: &str) -> Option<String> {
        let expanded = self.abbreviation_rules.expand(token);
        let filtered = filter::strip_symbols(&expanded);
        if filtered.is_empty() || filter::is_numeric(&filtered) {
            return None;
        }
        Some(stem::stem(&filtered))
    }
}
