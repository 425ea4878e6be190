// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod report;
pub mod stats;
pub mod trim;

use crate::config::Config;
use crate::error::Result;
use crate::stats::Report;

/// Run the report engine for the configured book.
///
/// Reads the whole file into memory, optionally strips Project Gutenberg
/// boilerplate, then counts words and character frequencies and assembles
/// the sorted, class-filtered report entries.
///
/// # Errors
///
/// Returns an error when validation fails or the book cannot be read.
/// Counting and report assembly themselves cannot fail.
pub fn run(config: &Config) -> Result<Report> {
    config.validate()?;

    let raw = filesystem::read_book(&config.book_path)?;
    let text = if config.trim {
        trim::trim_gutenberg(&raw)
    } else {
        raw
    };

    let words = stats::word_count(&text);
    let frequencies = stats::character_frequency(&text);
    let entries = report::build_entries(frequencies, config);

    Ok(Report {
        book_path: config.book_path.clone(),
        words,
        entries,
    })
}
