//! Result formatting and display
//!
//! - `config` - Output configuration types
//! - `text` - `path:line: text` formatter, colored via termcolor
//! - `json` - JSON output

mod config;
mod json;
mod text;

use std::io;

use termcolor::{ColorChoice, StandardStream};
use tracing::debug;

use crate::walker::FileResult;

pub use config::{OutputConfig, OutputFormat};
pub use json::{JsonEntry, print_json, to_json};
pub use text::{TextFormatter, write_language_table};

/// Print extraction results to stdout, applying the configured filter.
///
/// In text mode failed files are reported on stderr as `gleaner: <error>`;
/// in JSON mode they become `{path, error}` entries. Returns the number of
/// files that failed.
pub fn print_results(results: Vec<FileResult>, config: &OutputConfig) -> io::Result<usize> {
    let failures = results.iter().filter(|r| r.is_err()).count();
    let results: Vec<FileResult> = results
        .into_iter()
        .map(|r| r.map(|file| config.filter.apply(file)))
        .collect();
    debug!(files = results.len(), failures, "printing results");

    match config.format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Text => {
            let choice = if config.use_color {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            };
            let mut formatter = TextFormatter::new(StandardStream::stdout(choice), config.use_color);
            for result in &results {
                match result {
                    Ok(file) => formatter.write_file(file)?,
                    Err(e) => {
                        formatter.flush()?;
                        eprintln!("gleaner: {}", e);
                    }
                }
            }
            if config.summary {
                formatter.write_summary()?;
            }
        }
    }
    Ok(failures)
}
