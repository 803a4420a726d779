//! Contraction and abbreviation expansion.
//!
//! The first normalisation stage rewrites contracted forms to their expanded head word, so that
//! "don't" counts towards "do" rather than surviving as the unstemmable "dont". The rules are a
//! prioritized (pattern, replacement) list evaluated top to bottom; the first matching rule wins
//! and unmatched tokens pass through unchanged.
//!
//! Expansion keeps to a single-token contract: a contraction canonicalises to exactly one word,
//! with the clitic dropped. Both the ASCII apostrophe and U+2019 are recognised.

use regex::Regex;

use errors::*;

/// The fixed rule table. Irregular whole-token contractions come first; the clitic-suffix rules
/// below them only fire when no irregular matched.
const RULES: &[(&str, &str)] = &[
    (r"^(?i)won['’]t$", "will"),
    (r"^(?i)can['’]t$", "can"),
    (r"^(?i)shan['’]t$", "shall"),
    (r"^(?i)ain['’]t$", "is"),
    (r"^(?i)let['’]s$", "let"),
    (r"(?i)n['’]t$", ""),
    (r"(?i)['’]ll$", ""),
    (r"(?i)['’]re$", ""),
    (r"(?i)['’]ve$", ""),
    (r"(?i)['’]m$", ""),
    (r"(?i)['’]d$", ""),
    (r"(?i)['’]s$", ""),
];

/// A compiled, prioritized contraction rule table.
pub struct AbbreviationRules {
    rules: Vec<(Regex, &'static str)>,
}

impl AbbreviationRules {
    /// Compiles the fixed rule table.
    pub fn compile() -> Result<AbbreviationRules> {
        let mut rules = Vec::with_capacity(RULES.len());
        for &(pattern, replacement) in RULES {
            let regex = Regex::new(pattern).chain_err(|| {
                format!("Error compiling abbreviation pattern {:?}.", pattern)
            })?;
            rules.push((regex, replacement));
        }
        Ok(AbbreviationRules { rules })
    }

    /// Rewrites `token` using the first matching rule, or returns it unchanged.
    pub fn expand(&self, token: &str) -> String {
        for &(ref regex, replacement) in &self.rules {
            if regex.is_match(token) {
                return regex.replace(token, replacement).into_owned();
            }
        }
        token.to_owned()
    }
}
