pub mod output;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::errors::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| Error::io("<stdin>", e))?;
    Ok(buffer)
}

/// Read a text file, treating `-` as stdin.
pub fn read_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        read_stdin()
    } else {
        read_file(path)
    }
}

/// Non-empty, trimmed lines of a batch file, one feedback entry each.
pub fn batch_entries(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
