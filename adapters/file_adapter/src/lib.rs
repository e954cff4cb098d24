use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use timings_core::error::ExtractError;
use timings_core::ports::{LineSource, Result};
use tracing::debug;

/// Reads the whole input file into memory, one entry per line
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    /// Creates a new FileLineSource for the given input path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ExtractError::NotFound {
                path: self.path.display().to_string(),
            },
            _ => ExtractError::from(err),
        })?;

        let lines = split_lines(&content);
        debug!(path = %self.path.display(), lines = lines.len(), "input read");
        Ok(lines)
    }
}

/// Splits on `\r\n`, `\n` and a lone `\r`, dropping the terminators
fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_owned)
        .collect()
}
