//! System-wide information structures

use std::fmt;

/// Platforms with their own built-in art and probe command lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl Platform {
    /// Platform of the running binary
    pub fn detect() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "linux" => Platform::Linux,
            "darwin" | "macos" => Platform::Darwin,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    /// Identifier used to name the built-in art templates
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
            Platform::Windows => "windows",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results of the in-process stat reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostStats {
    pub user: String,
    pub terminal: String,
    pub hostname: String,
    pub uptime_seconds: u64,
    pub os_name: String,
    pub kernel_version: String,
    pub cpu_model: String,
    pub memory_used: u64,
    pub memory_total: u64,
    pub disk_used: u64,
    pub disk_total: u64,
}

/// Results of the external-command probes, empty when a probe failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeValues {
    pub packages: String,
    pub resolution: String,
    pub gpu: String,
    pub shell: String,
    pub theme: String,
    pub icons: String,
}

/// One labelled line of the fact column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

impl Fact {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Complete, formatted system information for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    pub identity: String,
    pub separator: String,
    pub facts: Vec<Fact>,
}

impl SystemSnapshot {
    /// Render the fact column: identity, separator, then `label<reset>: value`
    pub fn lines(&self, reset: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.facts.len() + 2);
        lines.push(self.identity.clone());
        lines.push(self.separator.clone());
        lines.extend(
            self.facts
                .iter()
                .map(|fact| format!("{}{}: {}", fact.label, reset, fact.value)),
        );
        lines
    }
}

/// Drop every line containing one of `terms`, case-insensitively.
///
/// Each term makes one left-to-right pass. After a removal the scan moves on
/// to the next index, so the line that slid into the removed slot is not
/// checked against the same term.
pub fn apply_disable_filter(lines: &mut Vec<String>, terms: &[String]) {
    for term in terms {
        let term = term.to_lowercase();
        let mut index = 0;
        while index < lines.len() {
            if lines[index].to_lowercase().contains(&term) {
                lines.remove(index);
            }
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_platform_from_name() {
        assert_eq!(Platform::from_name("linux"), Platform::Linux);
        assert_eq!(Platform::from_name("macos"), Platform::Darwin);
        assert_eq!(Platform::from_name("Darwin"), Platform::Darwin);
        assert_eq!(Platform::from_name("windows"), Platform::Windows);
        assert_eq!(Platform::from_name("freebsd"), Platform::Other);
        assert_eq!(Platform::Darwin.to_string(), "darwin");
    }

    #[test]
    fn test_snapshot_lines_format() {
        let snapshot = SystemSnapshot {
            identity: "alice@box".to_string(),
            separator: "---".to_string(),
            facts: vec![Fact::new("OS", "Arch Linux"), Fact::new("GPU", "")],
        };
        assert_eq!(
            snapshot.lines("<r>"),
            strings(&["alice@box", "---", "OS<r>: Arch Linux", "GPU<r>: "])
        );
    }

    #[test]
    fn test_disable_single_term_keeps_order() {
        let mut lines = strings(&["alice@box", "OS: Linux", "CPU: Ryzen", "GPU: Radeon", "Memory: 1MB"]);
        apply_disable_filter(&mut lines, &["cpu".to_string()]);
        assert_eq!(lines, strings(&["alice@box", "OS: Linux", "GPU: Radeon", "Memory: 1MB"]));
    }

    #[test]
    fn test_disable_is_case_insensitive() {
        let mut lines = strings(&["CPU: Ryzen", "Kernel: 6.1"]);
        apply_disable_filter(&mut lines, &["Cpu".to_string()]);
        assert_eq!(lines, strings(&["Kernel: 6.1"]));
    }

    #[test]
    fn test_disable_skips_line_shifted_into_removed_slot() {
        let mut lines = strings(&["cpu one", "cpu two", "other", "cpu three"]);
        apply_disable_filter(&mut lines, &["cpu".to_string()]);
        // "cpu two" slides into index 0 after the first removal and is never checked
        assert_eq!(lines, strings(&["cpu two", "other"]));
    }

    #[test]
    fn test_disable_overlapping_terms() {
        let mut lines = strings(&["Theme: Adwaita", "Icons: Adwaita", "Memory: 1MB", "Shell: zsh"]);
        apply_disable_filter(
            &mut lines,
            &["adwaita".to_string(), "icons".to_string(), "mem".to_string(), "memory".to_string()],
        );
        // "adwaita" removes Theme, skips Icons; "icons" then removes it on its own pass
        assert_eq!(lines, strings(&["Shell: zsh"]));
    }

    #[test]
    fn test_disable_no_terms_is_noop() {
        let mut lines = strings(&["a", "b"]);
        apply_disable_filter(&mut lines, &[]);
        assert_eq!(lines, strings(&["a", "b"]));
    }
}
