//! Side-by-side layout of art and fact lines

use super::art::{text_width, ArtDocument};
use super::placeholder::PlaceholderRegistry;
use crate::error::Result;
use std::io::Write;

/// Blank columns between the widest art line and the fact column
pub const COLUMN_GAP: usize = 5;

pub struct Compositor<'a> {
    registry: &'a PlaceholderRegistry,
}

impl<'a> Compositor<'a> {
    pub fn new(registry: &'a PlaceholderRegistry) -> Self {
        Self { registry }
    }

    /// Build the printed rows, one per index of the longer column.
    ///
    /// Art lines are substituted in place, so a document is meant to be
    /// composed once. Each art line is padded to
    /// `max_clean_len + pattern_width + COLUMN_GAP` raw columns: adding the
    /// token weight back makes the visible art end at the same column on
    /// every row however many escapes it carries.
    pub fn compose(&self, art: &mut ArtDocument, facts: &[String]) -> Vec<String> {
        let rows = art.lines.len().max(facts.len());
        let mut output = Vec::with_capacity(rows);

        for i in 0..rows {
            let (art_line, pattern_width) = match art.lines.get_mut(i) {
                Some(line) => {
                    let pattern_width = self.registry.pattern_width(line);
                    *line = self.registry.substitute(line);
                    (line.as_str(), pattern_width)
                }
                None => ("", 0),
            };
            let fact_line = facts.get(i).map(String::as_str).unwrap_or("");

            let width = art.max_clean_len + pattern_width + COLUMN_GAP;
            output.push(format!("{} {}", pad_right(art_line, width), fact_line));
        }

        output
    }

    pub fn render<W: Write>(&self, art: &mut ArtDocument, facts: &[String], out: &mut W) -> Result<()> {
        for row in self.compose(art, facts) {
            writeln!(out, "{}", row)?;
        }
        out.flush()?;
        Ok(())
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text_width(text));
    format!("{}{}", text, " ".repeat(padding))
}
