//! Wordlist Forge - candidate password wordlist generation
//!
//! A small CLI toolkit that enumerates password candidates for security
//! testing, either by brute force over an alphabet or by expanding masks.

pub mod enumerate;
pub mod error;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WordlistError};
pub use types::{
    BruteForceConfig, OutputFormat, SymbolExpansion, TemplateConfig,
    DEFAULT_BATCH_SIZE, DEFAULT_PREVIEW, DEFAULT_TEMPLATE_OUTPUT,
};

// Re-export main functionality
pub use enumerate::{Alphabet, BruteForceGenerator, Charset, Mask, TemplateGenerator, WordSets};
pub use output::{
    format_count, format_exact_count, save_wordlist, stream_to_file, CandidateWriter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

/// Build the brute-force generator described by a config
///
/// Validates length and alphabet before anything touches the filesystem.
pub fn brute_force_generator(config: &BruteForceConfig) -> Result<BruteForceGenerator> {
    let alphabet = Alphabet::resolve(config.charset, config.alphabet.as_deref())?;
    let mut generator = BruteForceGenerator::new(alphabet, config.length)?;
    if config.start_index > 0 {
        generator.set_index(config.start_index);
    }
    Ok(generator)
}

/// Build the template generator described by a config
pub fn template_generator(config: &TemplateConfig) -> Result<TemplateGenerator> {
    let sets = match &config.wordsets {
        Some(path) => WordSets::load(path)?,
        None => WordSets::default(),
    };
    TemplateGenerator::new(sets, config.masks.clone(), config.expansion)
}
