// crates/cli/src/presentation.rs
use crate::error::Result;
use bookbot_engine::config::Config;
use bookbot_engine::options::ReportFormat;
use bookbot_engine::stats::Report;
use std::fmt::Write;

/// Print the finished report to stdout in the configured format.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn print_report(report: &Report, config: &Config) -> Result<()> {
    match config.format {
        ReportFormat::Text => print!("{}", render_text(report)),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Render the classic text report.
#[must_use]
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Begin report of {} ---", report.book_path.display());
    let _ = writeln!(out, "{} words found in the document", report.words);
    let _ = writeln!(out);

    for entry in &report.entries {
        let _ = writeln!(
            out,
            "The '{}' character was found {} times",
            entry.character, entry.count
        );
    }

    let _ = writeln!(out, "--- End report ---");
    out
}
