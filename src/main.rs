//! Wordlist Forge - candidate password wordlist generation
//!
//! `brute` writes every string of a given length over an alphabet.
//! `template` expands prefix/number/symbol masks into a sorted wordlist.

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;

use wordlist_forge::{
    brute_force_generator, format_count, format_exact_count, save_wordlist, stream_to_file,
    template_generator, BruteForceConfig, Charset, Mask, OutputFormat, Result, SymbolExpansion,
    TemplateConfig, WordlistError, DEFAULT_BATCH_SIZE, DEFAULT_PREVIEW, DEFAULT_TEMPLATE_OUTPUT,
};

/// Password wordlist generator for security testing
#[derive(Parser, Debug)]
#[command(name = "wordlist-forge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate every possible password of a given length
    Brute(BruteArgs),
    /// Generate a wordlist from prefix, number and symbol masks
    Template(TemplateArgs),
}

#[derive(Args, Debug)]
struct BruteArgs {
    /// Length of the passwords to enumerate
    #[arg(short, long, allow_negative_numbers = true)]
    length: i64,

    /// Write all generated passwords to FILE
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Preset character set (full, letters, lower, upper, digits, alphanumeric)
    #[arg(short, long, default_value = "full")]
    charset: Charset,

    /// Custom alphabet, overrides --charset
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Candidates written between flushes
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Resume from this index, appending to FILE
    #[arg(long, default_value_t = 0)]
    start_index: u128,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct TemplateArgs {
    /// Output filename (e.g. wordlist.csv or wordlist.txt)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TEMPLATE_OUTPUT)]
    output: PathBuf,

    /// JSON file overriding prefixes, numbers, symbols or symbol_pairs
    #[arg(short, long, value_name = "FILE")]
    wordsets: Option<PathBuf>,

    /// How symbol-pair slots are filled (listed, product)
    #[arg(short, long, default_value = "listed")]
    expansion: SymbolExpansion,

    /// Restrict to these masks, e.g. -m '?L?N' -m '?L?S?N' (default: all)
    #[arg(short, long = "mask", value_name = "MASK")]
    masks: Vec<Mask>,

    /// Number of sorted entries to preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW)]
    preview: usize,
}

fn main() {
    let cli = Cli::parse();

    // Initialize the library
    if let Err(e) = wordlist_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Brute(args) => run_brute(args),
        Commands::Template(args) => run_template(args),
    };

    if let Err(e) = outcome {
        tracing::debug!(error = ?e, user_error = e.is_user_error(), "Run failed");
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Brute-force workflow
fn run_brute(args: BruteArgs) -> Result<()> {
    let length = usize::try_from(args.length)
        .ok()
        .filter(|&l| l > 0)
        .ok_or_else(|| WordlistError::validation("--length must be a positive integer"))?;

    let config = BruteForceConfig {
        length,
        charset: args.charset,
        alphabet: args.alphabet,
        output: args.output,
        batch_size: args.batch_size,
        start_index: args.start_index,
    };

    let mut generator = brute_force_generator(&config)?;

    let total = format_exact_count(&generator.exact_total());
    println!("Enumerating {} combinations of length {}…", total, length);
    if config.start_index > 0 {
        println!("Resuming at index {}", format_count(config.start_index));
    }

    let progress = if args.quiet {
        None
    } else {
        generator
            .remaining()
            .and_then(|r| u64::try_from(r).ok())
            .map(progress_bar)
    };

    let written = stream_to_file(
        &mut generator,
        &config.output,
        OutputFormat::Plain,
        config.batch_size,
        progress.as_ref(),
    );

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }
    let written = written?;

    tracing::info!(written, "Brute-force run complete");
    println!("Done. All combinations saved to '{}'", config.output.display());
    Ok(())
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Template workflow
fn run_template(args: TemplateArgs) -> Result<()> {
    let config = TemplateConfig {
        output: args.output,
        wordsets: args.wordsets,
        masks: if args.masks.is_empty() {
            Mask::ALL.to_vec()
        } else {
            args.masks
        },
        expansion: args.expansion,
    };

    println!("Generating wordlist...");
    let generator = template_generator(&config)?;
    let wordlist = generator.generate();

    let (format, written) = save_wordlist(&wordlist, &config.output)?;
    println!("Mode: {}", format.describe());
    println!("Successfully saved to '{}'", config.output.display());
    println!("Total entries: {}", written);

    if args.preview > 0 {
        println!();
        println!("Sample entries (first {}):", args.preview);
        for (i, word) in wordlist.iter().take(args.preview).enumerate() {
            println!("{}: {}", i + 1, word);
        }
    }

    Ok(())
}
