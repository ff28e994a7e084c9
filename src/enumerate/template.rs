//! Template (mask) based candidate generator

use std::collections::BTreeSet;
use std::str::FromStr;

use super::words::WordSets;
use crate::error::{Result, WordlistError};
use crate::types::SymbolExpansion;
use crate::validation_error;

/// Placeholder category within a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Letter pair or name (`?L`)
    Prefix,
    /// Numeric sequence (`?N`)
    Number,
    /// One symbol (`?S`)
    Symbol,
    /// Two adjacent symbols (`?S?S`)
    SymbolPair,
}

impl Token {
    pub fn label(&self) -> &'static str {
        match self {
            Token::Prefix => "?L",
            Token::Number => "?N",
            Token::Symbol => "?S",
            Token::SymbolPair => "?S?S",
        }
    }

    /// Number of symbol placeholders this token covers
    pub fn symbol_slots(&self) -> usize {
        match self {
            Token::Prefix | Token::Number => 0,
            Token::Symbol => 1,
            Token::SymbolPair => 2,
        }
    }
}

/// Closed set of masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mask {
    /// `?L?N`, e.g. `Aa12345`
    PrefixNumber,
    /// `?L?S?N`, e.g. `Aa!12345`
    PrefixSymbolNumber,
    /// `?L?S?S?N`, e.g. `Aa@#12345`
    PrefixSymbolPairNumber,
    /// `?L?N?S`, e.g. `Aa12345!`
    PrefixNumberSymbol,
    /// `?L?N?S?S`, e.g. `Aa12345!!`
    PrefixNumberSymbolPair,
}

impl Mask {
    pub const ALL: [Mask; 5] = [
        Mask::PrefixNumber,
        Mask::PrefixSymbolNumber,
        Mask::PrefixSymbolPairNumber,
        Mask::PrefixNumberSymbol,
        Mask::PrefixNumberSymbolPair,
    ];

    /// Token sequence, left to right
    pub fn tokens(&self) -> &'static [Token] {
        match self {
            Mask::PrefixNumber => &[Token::Prefix, Token::Number],
            Mask::PrefixSymbolNumber => &[Token::Prefix, Token::Symbol, Token::Number],
            Mask::PrefixSymbolPairNumber => &[Token::Prefix, Token::SymbolPair, Token::Number],
            Mask::PrefixNumberSymbol => &[Token::Prefix, Token::Number, Token::Symbol],
            Mask::PrefixNumberSymbolPair => &[Token::Prefix, Token::Number, Token::SymbolPair],
        }
    }

    pub fn symbol_slots(&self) -> usize {
        self.tokens().iter().map(Token::symbol_slots).sum()
    }

    /// Hashcat-style label such as `?L?S?N`
    pub fn label(&self) -> String {
        self.tokens().iter().map(Token::label).collect()
    }

    /// Kebab-case name such as `prefix-symbol-number`
    pub fn name(&self) -> &'static str {
        match self {
            Mask::PrefixNumber => "prefix-number",
            Mask::PrefixSymbolNumber => "prefix-symbol-number",
            Mask::PrefixSymbolPairNumber => "prefix-symbol-pair-number",
            Mask::PrefixNumberSymbol => "prefix-number-symbol",
            Mask::PrefixNumberSymbolPair => "prefix-number-symbol-pair",
        }
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Mask {
    type Err = WordlistError;

    /// Accepts either the label (`?L?S?N`) or the kebab-case name
    /// (`prefix-symbol-number`), ignoring ASCII case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Mask::ALL
            .iter()
            .copied()
            .find(|m| {
                m.label().eq_ignore_ascii_case(wanted) || m.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| validation_error!("unknown mask '{}'", s))
    }
}

/// Expands masks against word sets into a sorted, deduplicated wordlist
pub struct TemplateGenerator {
    sets: WordSets,
    masks: Vec<Mask>,
    expansion: SymbolExpansion,
}

impl TemplateGenerator {
    pub fn new(sets: WordSets, masks: Vec<Mask>, expansion: SymbolExpansion) -> Result<Self> {
        sets.validate()?;
        if masks.is_empty() {
            return Err(validation_error!("at least one mask is required"));
        }
        let mut masks = masks;
        masks.sort();
        masks.dedup();
        Ok(Self {
            sets,
            masks,
            expansion,
        })
    }

    /// Built-in word sets, every mask, listed symbol pairs
    pub fn with_defaults() -> Self {
        Self {
            sets: WordSets::default(),
            masks: Mask::ALL.to_vec(),
            expansion: SymbolExpansion::Listed,
        }
    }

    // Values a token may take under the configured expansion
    fn values(&self, token: Token) -> Vec<String> {
        match token {
            Token::Prefix => self.sets.prefixes.clone(),
            Token::Number => self.sets.numbers.clone(),
            Token::Symbol => self.sets.symbols.clone(),
            Token::SymbolPair => match self.expansion {
                SymbolExpansion::Listed => self.sets.symbol_pairs.clone(),
                SymbolExpansion::Product => cartesian(&[
                    self.sets.symbols.clone(),
                    self.sets.symbols.clone(),
                ]),
            },
        }
    }

    fn slots(&self, mask: Mask) -> Vec<Vec<String>> {
        mask.tokens().iter().map(|t| self.values(*t)).collect()
    }

    /// All candidates of one mask, in substitution order (may repeat)
    pub fn expand(&self, mask: Mask) -> Vec<String> {
        cartesian(&self.slots(mask))
    }

    /// Upper bound on the candidate count before deduplication
    pub fn estimated_size(&self) -> usize {
        self.masks
            .iter()
            .map(|m| self.slots(*m).iter().map(Vec::len).product::<usize>())
            .sum()
    }

    /// Union of every mask, deduplicated and sorted ascending
    pub fn generate(&self) -> Vec<String> {
        let mut wordlist = BTreeSet::new();
        for mask in &self.masks {
            let expanded = self.expand(*mask);
            tracing::debug!(mask = %mask, candidates = expanded.len(), "Expanded mask");
            wordlist.extend(expanded);
        }
        tracing::info!(
            masks = self.masks.len(),
            expansion = %self.expansion,
            estimated = self.estimated_size(),
            unique = wordlist.len(),
            "Template generation finished"
        );
        wordlist.into_iter().collect()
    }

    /// First mask that can produce `candidate`, if any
    pub fn classify(&self, candidate: &str) -> Option<Mask> {
        self.masks
            .iter()
            .copied()
            .find(|m| matches_slots(candidate, &self.slots(*m)))
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// Left-to-right product of the slot value lists
fn cartesian(slots: &[Vec<String>]) -> Vec<String> {
    slots.iter().fold(vec![String::new()], |acc, values| {
        acc.iter()
            .flat_map(|head| values.iter().map(move |v| format!("{}{}", head, v)))
            .collect()
    })
}

fn matches_slots(rest: &str, slots: &[Vec<String>]) -> bool {
    match slots.split_first() {
        None => rest.is_empty(),
        Some((values, tail)) => values.iter().any(|v| {
            rest.strip_prefix(v.as_str())
                .is_some_and(|after| matches_slots(after, tail))
        }),
    }
}
