//! length-report: check a text file against a fixed character budget
//!
//! Reads `bot-description-400.txt`, counts its characters after trimming
//! surrounding whitespace, and reports how far it is from 400 characters.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Command-line definition shared by the binaries
pub mod cli;

/// Reading and cleaning up the input file
pub mod content;

/// Length measurement and report rendering
pub mod report;

pub use content::read_content;
pub use report::{Adjustment, Report};

/// The file checked on every run, relative to the working directory.
pub const INPUT_FILE: &str = "bot-description-400.txt";

/// Number of characters the content is expected to have.
pub const TARGET_LENGTH: usize = 400;

/// Read `INPUT_FILE` from `dir` and write the full report to `out`.
///
/// Nothing is written to `out` unless the file was read successfully.
pub fn run_in<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    let content = read_content(&dir.join(INPUT_FILE))?;
    let report = Report::measure(&content);
    report
        .write_to(out, &content)
        .context("failed to write report to output")
}
