//! Wordlist file output
//!
//! Brute-force runs stream batches through a buffered writer and flush after
//! every batch. Template runs write an already sorted list in one pass.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use indicatif::ProgressBar;
use num_bigint::BigUint;

use crate::enumerate::BruteForceGenerator;
use crate::error::{Result, WordlistError};
use crate::types::OutputFormat;

enum Sink {
    Plain(BufWriter<File>),
    Csv(csv::Writer<File>),
}

/// Writes candidates one per line or one per CSV row
pub struct CandidateWriter {
    sink: Sink,
    path: String,
    written: u64,
}

impl CandidateWriter {
    /// Create (truncate) the destination file
    pub fn create(path: &Path, format: OutputFormat) -> Result<Self> {
        Self::open(path, format, false)
    }

    /// Open the destination file for appending, creating it if missing
    pub fn append(path: &Path, format: OutputFormat) -> Result<Self> {
        Self::open(path, format, true)
    }

    fn open(path: &Path, format: OutputFormat, append: bool) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(path).map_err(|e| {
            WordlistError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let sink = match format {
            OutputFormat::Plain => Sink::Plain(BufWriter::new(file)),
            OutputFormat::Csv => Sink::Csv(
                csv::WriterBuilder::new()
                    .terminator(csv::Terminator::CRLF)
                    .from_writer(file),
            ),
        };

        Ok(Self {
            sink,
            path: path.to_string_lossy().to_string(),
            written: 0,
        })
    }

    pub fn write_candidate(&mut self, candidate: &str) -> Result<()> {
        let res = match &mut self.sink {
            Sink::Plain(w) => writeln!(w, "{}", candidate).map_err(WordlistError::from),
            Sink::Csv(w) => w.write_record([candidate]).map_err(WordlistError::from),
        };
        res.map_err(|e| self.tag(e))?;
        self.written += 1;
        Ok(())
    }

    pub fn write_all<S: AsRef<str>>(&mut self, candidates: &[S]) -> Result<()> {
        for c in candidates {
            self.write_candidate(c.as_ref())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        let res = match &mut self.sink {
            Sink::Plain(w) => w.flush(),
            Sink::Csv(w) => w.flush(),
        };
        res.map_err(|e| self.tag(e.into()))
    }

    /// Flush and close, returning the number of candidates written
    pub fn finish(mut self) -> Result<u64> {
        self.flush()?;
        Ok(self.written)
    }

    fn tag(&self, err: WordlistError) -> WordlistError {
        err.with_path(Path::new(&self.path))
    }
}

/// Stream a brute-force generator to a file in fixed-size batches
///
/// Only one batch is held in memory at a time. A write failure aborts the
/// run and leaves whatever was already flushed on disk.
pub fn stream_to_file(
    generator: &mut BruteForceGenerator,
    path: &Path,
    format: OutputFormat,
    batch_size: usize,
    progress: Option<&ProgressBar>,
) -> Result<u64> {
    let batch_size = batch_size.max(1);
    let mut writer = if generator.current_index() > 0 {
        CandidateWriter::append(path, format)?
    } else {
        CandidateWriter::create(path, format)?
    };

    tracing::info!(
        path = %path.display(),
        start = %generator.current_index(),
        batch_size,
        "Streaming brute-force candidates"
    );

    while !generator.is_exhausted() {
        let batch = generator.next_batch(batch_size);
        if batch.is_empty() {
            break;
        }
        writer.write_all(&batch)?;
        writer.flush()?;
        if let Some(pb) = progress {
            pb.inc(batch.len() as u64);
        }
        tracing::debug!(
            index = %generator.current_index(),
            percent = generator.progress_percent(),
            "Batch flushed"
        );
    }

    writer.finish()
}

/// Write an in-memory wordlist in the format implied by the path
pub fn save_wordlist<S: AsRef<str>>(candidates: &[S], path: &Path) -> Result<(OutputFormat, u64)> {
    let format = OutputFormat::from_path(path);
    let mut writer = CandidateWriter::create(path, format)?;
    writer.write_all(candidates)?;
    let written = writer.finish()?;
    tracing::info!(path = %path.display(), format = %format, written, "Wordlist saved");
    Ok((format, written))
}

/// Format a count with thousands separators, e.g. `1,234,567`
pub fn format_count(n: u128) -> String {
    group_digits(&n.to_string())
}

/// Same as [`format_count`] for totals that do not fit in a u128
pub fn format_exact_count(n: &BigUint) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
