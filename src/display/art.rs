//! ASCII art templates and their width bookkeeping

use super::placeholder::PlaceholderRegistry;
use crate::error::Result;
use crate::utils::file::read_file_safe;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

pub fn get_default_ascii(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "linux" => Some(include_str!("../../ascii/linux.txt")),
        "darwin" => Some(include_str!("../../ascii/darwin.txt")),
        "windows" => Some(include_str!("../../ascii/windows.txt")),
        _ => None,
    }
}

/// Columns a padding primitive would count for `text`: display width for
/// printable characters, one column for each control character.
pub fn text_width(text: &str) -> usize {
    text.chars()
        .map(|c| {
            if c.is_control() {
                1
            } else {
                UnicodeWidthChar::width(c).unwrap_or(0)
            }
        })
        .sum()
}

/// Where the art comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtSource {
    File(PathBuf),
    Builtin(String),
}

/// Art lines with placeholders still embedded, plus their widths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtDocument {
    pub lines: Vec<String>,
    /// Widest line once placeholders are stripped; drives the layout
    pub max_clean_len: usize,
    pub max_original_len: usize,
}

impl ArtDocument {
    pub fn load(source: &ArtSource, registry: &PlaceholderRegistry) -> Result<Self> {
        match source {
            ArtSource::File(path) => Self::from_file(path, registry),
            ArtSource::Builtin(name) => Ok(Self::builtin(name, registry)),
        }
    }

    pub fn from_file(path: &Path, registry: &PlaceholderRegistry) -> Result<Self> {
        let text = read_file_safe(path)?;
        Ok(Self::parse(&text, registry))
    }

    /// Built-in template, empty when `name` is not one
    pub fn builtin(name: &str, registry: &PlaceholderRegistry) -> Self {
        match get_default_ascii(name) {
            Some(text) => Self::parse(text, registry),
            None => {
                log::warn!("no built-in ascii art named '{}'", name);
                Self::default()
            }
        }
    }

    /// One document line per input line, kept verbatim
    pub fn parse(text: &str, registry: &PlaceholderRegistry) -> Self {
        let mut document = Self::default();

        for line in text.lines() {
            document.max_original_len = document.max_original_len.max(text_width(line));
            document.max_clean_len = document
                .max_clean_len
                .max(text_width(&registry.strip(line)));
            document.lines.push(line.to_string());
        }

        document
    }
}
