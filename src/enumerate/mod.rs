//! Candidate enumeration
//!
//! Brute force: every string of a fixed length over an alphabet
//! Template: prefix, number and symbol tokens substituted into fixed masks

pub mod brute;
pub mod template;
pub mod words;

pub use brute::BruteForceGenerator;
pub use template::{Mask, TemplateGenerator, Token};
pub use words::WordSets;

use num_bigint::BigUint;
use std::str::FromStr;

use crate::error::{Result, WordlistError};
use crate::validation_error;

const UPPER: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const LOWER: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const SPECIALS: &[char] = &['!', '@', '#', '$', '%'];

/// Character set for brute-force generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// A-Z, a-z, 0-9 and `!@#$%` (67 chars)
    #[default]
    Full,
    /// A-Z then a-z
    Letters,
    /// a-z
    Lower,
    /// A-Z
    Upper,
    /// 0-9
    Digits,
    /// A-Z, a-z, 0-9
    Alphanumeric,
}

impl Charset {
    pub fn chars(&self) -> Vec<char> {
        let parts: &[&[char]] = match self {
            Charset::Full => &[UPPER, LOWER, DIGITS, SPECIALS],
            Charset::Letters => &[UPPER, LOWER],
            Charset::Lower => &[LOWER],
            Charset::Upper => &[UPPER],
            Charset::Digits => &[DIGITS],
            Charset::Alphanumeric => &[UPPER, LOWER, DIGITS],
        };
        parts.concat()
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Charset::Full => write!(f, "full"),
            Charset::Letters => write!(f, "letters"),
            Charset::Lower => write!(f, "lower"),
            Charset::Upper => write!(f, "upper"),
            Charset::Digits => write!(f, "digits"),
            Charset::Alphanumeric => write!(f, "alphanumeric"),
        }
    }
}

impl FromStr for Charset {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Charset::Full),
            "letters" => Ok(Charset::Letters),
            "lower" | "lowercase" => Ok(Charset::Lower),
            "upper" | "uppercase" => Ok(Charset::Upper),
            "digits" => Ok(Charset::Digits),
            "alphanumeric" | "alnum" => Ok(Charset::Alphanumeric),
            other => Err(validation_error!("unknown charset '{}'", other)),
        }
    }
}

/// Ordered set of distinct characters; enumeration order follows this order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build a custom alphabet, rejecting empty input and repeated characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(validation_error!("alphabet must contain at least one character"));
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(validation_error!("alphabet repeats character '{}'", c));
            }
        }
        Ok(Self { chars })
    }

    /// Custom alphabet when given, preset otherwise
    pub fn resolve(charset: Charset, custom: Option<&str>) -> Result<Self> {
        match custom {
            Some(s) => Self::new(s.chars()),
            None => Ok(Self::from(charset)),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// k^length, `None` when it does not fit in a u128
    pub fn total_combinations(&self, length: usize) -> Option<u128> {
        let exp = u32::try_from(length).ok()?;
        (self.chars.len() as u128).checked_pow(exp)
    }

    /// k^length without overflow, for reporting totals past u128
    pub fn exact_combinations(&self, length: usize) -> BigUint {
        let exp = u32::try_from(length).unwrap_or(u32::MAX);
        BigUint::from(self.chars.len() as u64).pow(exp)
    }
}

impl From<Charset> for Alphabet {
    fn from(charset: Charset) -> Self {
        Self {
            chars: charset.chars(),
        }
    }
}
