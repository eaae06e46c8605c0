//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

pub mod analyze;
pub mod demo;
pub mod engagement;
pub mod flashcards;
pub mod info;
pub mod keywords;
pub mod questions;
pub mod readability;
pub mod schema;
pub mod styles;
pub mod subject;

/// Path argument that stands for standard input.
pub const STDIN_MARKER: &str = "-";

/// The input file argument shared by every text command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// File to analyze (`-` reads standard input).
    pub file: Utf8PathBuf,
}

impl InputArgs {
    /// Read the input, enforcing the size limit.
    pub fn read(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        read_input_file(&self.file, max_bytes)
    }

    /// Name used in output and error messages.
    pub fn label(&self) -> &str {
        if self.is_stdin() {
            "<stdin>"
        } else {
            self.file.as_str()
        }
    }

    fn is_stdin(&self) -> bool {
        self.file.as_str() == STDIN_MARKER
    }
}

/// Read a file (or stdin for `-`) and validate its size against the
/// configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_MARKER {
        return read_limited(std::io::stdin().lock(), "<stdin>", max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a stream whose size is unknown up front, stopping one byte past the
/// limit.
fn read_limited<R: Read>(reader: R, label: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    let read = match max_bytes {
        Some(max) => reader.take((max as u64).saturating_add(1)).read_to_end(&mut bytes),
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut bytes)
        }
    };
    read.with_context(|| format!("failed to read {label}"))?;
    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: {label} exceeds {max} bytes");
    }
    String::from_utf8(bytes).with_context(|| format!("{label} is not valid UTF-8"))
}

/// Fail when `value` is below a configured minimum.
pub fn check_min<T>(label: &str, metric: &str, value: T, min: Option<T>) -> anyhow::Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if let Some(min) = min
        && value < min
    {
        anyhow::bail!("{label} {metric} score {value} is below minimum {min}");
    }
    Ok(())
}

/// Color a 0–100 score by the easy/medium readability bands.
pub fn paint_score(score: f64, rendered: &str) -> String {
    use owo_colors::OwoColorize;
    use study_lens_core::readability::{EASY_THRESHOLD, MEDIUM_THRESHOLD};

    if score >= EASY_THRESHOLD {
        rendered.green().to_string()
    } else if score >= MEDIUM_THRESHOLD {
        rendered.yellow().to_string()
    } else {
        rendered.red().to_string()
    }
}
