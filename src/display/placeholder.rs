//! Color placeholder tokens and their terminal escape sequences

use crate::error::{FetchError, Result};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// Token that switches colors back off
pub const RESET_TOKEN: &str = "${c0}";

// Padding correction per token occurrence. Fixed by the template format, not
// by the length of whatever escape the token currently resolves to.
const RESET_WEIGHT: usize = 4;
const COLOR_WEIGHT: usize = 7;

/// Names accepted by `ascii_color` and the config file
pub const PALETTE_NAMES: [&str; 8] = [
    "reset", "red", "green", "cyan", "yellow", "purple", "blue", "white",
];

/// Escape sequence for a palette color name
pub fn palette_color(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "reset" => Some("\x1b[0m"),
        "red" => Some("\x1b[1;31m"),
        "green" => Some("\x1b[1;32m"),
        "cyan" => Some("\x1b[1;33m"),
        "yellow" => Some("\x1b[1;34m"),
        "purple" => Some("\x1b[1;35m"),
        "blue" => Some("\x1b[1;36m"),
        "white" => Some("\x1b[1;37m"),
        _ => None,
    }
}

/// `${cN}` for a color slot
pub fn color_token(slot: usize) -> String {
    format!("${{c{}}}", slot)
}

fn token_weight(token: &str) -> usize {
    if token == RESET_TOKEN {
        RESET_WEIGHT
    } else {
        COLOR_WEIGHT
    }
}

/// Token -> escape mapping shared by the art parser and the compositor.
///
/// Reads and remaps go through an `RwLock`, so one registry can be shared
/// across threads.
#[derive(Debug)]
pub struct PlaceholderRegistry {
    entries: RwLock<BTreeMap<String, String>>,
}

impl Default for PlaceholderRegistry {
    fn default() -> Self {
        let defaults = [
            ("reset", 0),
            ("red", 1),
            ("green", 2),
            ("yellow", 3),
            ("blue", 4),
            ("purple", 5),
            ("cyan", 6),
            ("white", 7),
        ];

        let entries = defaults
            .iter()
            .filter_map(|&(name, slot)| {
                palette_color(name).map(|escape| (color_token(slot), escape.to_string()))
            })
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, token: &str) -> Option<String> {
        self.read_entries(|entries| entries.get(token).cloned())
    }

    /// Escape sequence behind the reset token
    pub fn reset(&self) -> String {
        self.resolve(RESET_TOKEN)
            .unwrap_or_else(|| "\x1b[0m".to_string())
    }

    /// Point `token` at a palette color, registering the token if it is new
    pub fn remap(&self, token: &str, color: &str) -> Result<()> {
        let escape = palette_color(color).ok_or_else(|| {
            FetchError::Config(format!(
                "unknown color '{}' (available: {})",
                color,
                PALETTE_NAMES.join(", ")
            ))
        })?;

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(token.to_string(), escape.to_string());
        Ok(())
    }

    /// Assign `${c1}`, `${c2}`, ... to `colors` in order.
    ///
    /// Unknown names are skipped and reported together once the known ones
    /// have been applied.
    pub fn remap_positional<S: AsRef<str>>(&self, colors: &[S]) -> Result<()> {
        let mut unknown = Vec::new();
        for (index, color) in colors.iter().enumerate() {
            let color = color.as_ref();
            if self.remap(&color_token(index + 1), color).is_err() {
                unknown.push(color.to_string());
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(FetchError::Config(format!(
                "unknown color(s) {} (available: {})",
                unknown.join(", "),
                PALETTE_NAMES.join(", ")
            )))
        }
    }

    /// Padding correction for the tokens present in `line`
    pub fn pattern_width(&self, line: &str) -> usize {
        self.read_entries(|entries| {
            entries
                .keys()
                .map(|token| line.matches(token.as_str()).count() * token_weight(token))
                .sum()
        })
    }

    /// `line` with every token removed
    pub fn strip(&self, line: &str) -> String {
        self.read_entries(|entries| {
            entries
                .keys()
                .fold(line.to_string(), |acc, token| acc.replace(token.as_str(), ""))
        })
    }

    /// `line` with every token replaced by its escape sequence
    pub fn substitute(&self, line: &str) -> String {
        self.read_entries(|entries| {
            entries
                .iter()
                .fold(line.to_string(), |acc, (token, escape)| {
                    acc.replace(token.as_str(), escape)
                })
        })
    }

    fn read_entries<T>(&self, f: impl FnOnce(&BTreeMap<String, String>) -> T) -> T {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        f(&entries)
    }
}
