use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::{CharClass, ReportFormat, SortMode};
use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "bookbot",
    version = crate::VERSION,
    about = "Word count and character frequency reports for plaintext eBooks",
    long_about = "Generates a report on the eBook text whose path is specified, \
                  showing the number of words and the frequency of recurrence for \
                  different characters. Designed to be used with a plaintext eBook \
                  from Project Gutenberg (gutenberg.org)."
)]
pub struct Args {
    /// Which characters to include in the report
    #[arg(short = 'c', long = "char_type", value_enum, default_value = "alpha")]
    pub char_type: CharClass,

    /// How to sort the results
    #[arg(short, long, value_enum, default_value = "num")]
    pub sort: SortMode,

    /// Display the results in reverse (ascending order if sorting by
    /// recurrence count, descending order if sorting by code point)
    #[arg(short, long)]
    pub reverse: bool,

    /// Remove the header and footer added by Project Gutenberg, as well as
    /// any whitespace from the beginning and end of the file
    #[arg(short, long)]
    pub trim: bool,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Only show the first N report entries
    #[arg(long, value_parser = parsers::parse_positive_usize)]
    pub top: Option<usize>,

    /// Path to a plaintext (.txt) eBook
    #[arg(value_hint = ValueHint::FilePath)]
    pub book_path: PathBuf,
}
