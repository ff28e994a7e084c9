//! Core types and structures for wordlist-forge

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::enumerate::template::Mask;
use crate::enumerate::Charset;
use crate::error::WordlistError;
use crate::validation_error;

/// Default number of candidates written between flushes
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Default output path of the template tool
pub const DEFAULT_TEMPLATE_OUTPUT: &str = "wordlist.txt";

/// Number of sorted entries shown after a template run
pub const DEFAULT_PREVIEW: usize = 10;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One candidate per `\n`-terminated line
    Plain,
    /// One candidate per CSV row
    Csv,
}

impl OutputFormat {
    /// Pick the format from the file extension (`.csv`, any case, means CSV)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Plain,
        }
    }

    /// Human-readable mode line
    pub fn describe(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "Plain Text (Newline Separated)",
            OutputFormat::Csv => "CSV (Comma Separated)",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// How symbol-pair slots of a mask are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolExpansion {
    /// Pair slots take values from the curated symbol-pair list
    #[default]
    Listed,
    /// Every symbol placeholder takes every single symbol
    Product,
}

impl std::fmt::Display for SymbolExpansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolExpansion::Listed => write!(f, "listed"),
            SymbolExpansion::Product => write!(f, "product"),
        }
    }
}

impl FromStr for SymbolExpansion {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "listed" => Ok(SymbolExpansion::Listed),
            "product" => Ok(SymbolExpansion::Product),
            other => Err(validation_error!("unknown symbol expansion '{}'", other)),
        }
    }
}

/// Configuration for a brute-force run
#[derive(Debug, Clone)]
pub struct BruteForceConfig {
    /// Candidate length
    pub length: usize,
    /// Preset character set
    pub charset: Charset,
    /// Custom alphabet, overrides `charset` when set
    pub alphabet: Option<String>,
    /// Destination file
    pub output: PathBuf,
    /// Candidates per write batch
    pub batch_size: usize,
    /// First index to emit (resume); output is appended when non-zero
    pub start_index: u128,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            length: 1,
            charset: Charset::Full,
            alphabet: None,
            output: PathBuf::from("passwords.txt"),
            batch_size: DEFAULT_BATCH_SIZE,
            start_index: 0,
        }
    }
}

/// Configuration for a template run
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    /// Destination file, format sniffed from its extension
    pub output: PathBuf,
    /// Optional JSON word set file
    pub wordsets: Option<PathBuf>,
    /// Masks to expand
    pub masks: Vec<Mask>,
    /// Symbol slot semantics
    pub expansion: SymbolExpansion,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_TEMPLATE_OUTPUT),
            wordsets: None,
            masks: Mask::ALL.to_vec(),
            expansion: SymbolExpansion::Listed,
        }
    }
}
