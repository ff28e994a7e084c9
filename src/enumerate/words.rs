//! Built-in word sets for template generation
//!
//! Any of the four lists can be replaced from a JSON file, e.g.
//! `{"prefixes": ["Qq", "Root"], "symbols": ["!", "?"]}`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, WordlistError};
use crate::validation_error;

/// Letter-pair prefixes plus a few common account names
pub const PREFIXES: &[&str] = &[
    "Aa", "Bb", "Cc", "Dd", "Ee", "Ff", "Gg", "Hh", "Ii", "Jj",
    "Kk", "Ll", "Mm", "Nn", "Oo", "Pp", "Qq", "Rr", "Ss", "Tt",
    "Uu", "Vv", "Ww", "Xx", "Yy", "Zz",
    "Admin",
];

/// Numeric sequences people actually type
pub const NUMBER_SEQUENCES: &[&str] = &[
    "11111", "123123", "321321", "112233", "11223344", "1122334455",
    "112233445566", "12345", "123456", "1234567", "12345678", "123456789",
    "135531", "13579", "221133", "22222", "223311", "24680", "332211",
    "332211332211", "33333", "44444", "54321", "55555", "654321",
    "667788", "987654321", "102030",
];

/// Single symbols
pub const SYMBOLS: &[&str] = &["!", "@", "#"];

/// Curated two-symbol combinations
pub const SYMBOL_PAIRS: &[&str] = &["!!", "@@", "##", "@#", "#@"];

fn default_prefixes() -> Vec<String> {
    to_owned(PREFIXES)
}

fn default_numbers() -> Vec<String> {
    to_owned(NUMBER_SEQUENCES)
}

fn default_symbols() -> Vec<String> {
    to_owned(SYMBOLS)
}

fn default_symbol_pairs() -> Vec<String> {
    to_owned(SYMBOL_PAIRS)
}

fn to_owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The four lists substituted into masks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSets {
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
    #[serde(default = "default_numbers")]
    pub numbers: Vec<String>,
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    #[serde(default = "default_symbol_pairs")]
    pub symbol_pairs: Vec<String>,
}

impl Default for WordSets {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            numbers: default_numbers(),
            symbols: default_symbols(),
            symbol_pairs: default_symbol_pairs(),
        }
    }
}

impl WordSets {
    /// Load word sets from a JSON file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordlistError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let sets: Self = serde_json::from_str(&content).map_err(|e| {
            WordlistError::parse(e.to_string(), Some(content.clone()))
        })?;

        sets.validate()?;
        tracing::debug!(
            path = %path.display(),
            prefixes = sets.prefixes.len(),
            numbers = sets.numbers.len(),
            symbols = sets.symbols.len(),
            symbol_pairs = sets.symbol_pairs.len(),
            "Loaded word sets"
        );
        Ok(sets)
    }

    /// Check the shape of every list
    pub fn validate(&self) -> Result<()> {
        if self.prefixes.is_empty() {
            return Err(validation_error!("at least one prefix is required"));
        }
        if self.numbers.is_empty() {
            return Err(validation_error!("at least one number sequence is required"));
        }
        if let Some(n) = self
            .numbers
            .iter()
            .find(|n| n.is_empty() || !n.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(validation_error!("number sequence '{}' must be ASCII digits", n));
        }
        if let Some(s) = self.symbols.iter().find(|s| s.chars().count() != 1) {
            return Err(validation_error!("symbol '{}' must be a single character", s));
        }
        if let Some(p) = self.symbol_pairs.iter().find(|p| p.chars().count() != 2) {
            return Err(validation_error!("symbol pair '{}' must be exactly two characters", p));
        }
        Ok(())
    }
}
