//! String parsing and formatting utilities

const MIB: u64 = 1024 * 1024;

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a `/proc/meminfo` style line (`MemTotal:  16314436 kB`) into bytes
pub fn meminfo_bytes(line: &str) -> Option<u64> {
    let value = line.split(':').nth(1)?;
    let kb: u64 = value.trim().trim_end_matches("kB").trim().parse().ok()?;
    Some(kb * 1024)
}

/// Format uptime from seconds as days, hours and minutes
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let mins = (seconds % 3600) / 60;

    if days > 0 {
        format!("{} days, {} hours, {} mins", days, hours, mins)
    } else if hours > 0 {
        format!("{} hours, {} mins", hours, mins)
    } else {
        format!("{} mins", mins)
    }
}

/// Format used/total memory in whole MiB
pub fn format_memory(used_bytes: u64, total_bytes: u64) -> String {
    format!("{}MB / {}MB", used_bytes / MIB, total_bytes / MIB)
}

/// Format used/total disk space with a usage percentage
pub fn format_disk(used_bytes: u64, total_bytes: u64) -> String {
    let format_size = |bytes: u64| {
        if bytes >= 1_000_000_000_000 {
            format!("{:.1}T", bytes as f64 / 1_000_000_000_000.0)
        } else if bytes >= 1_000_000_000 {
            format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
        } else if bytes >= 1_000_000 {
            format!("{:.1}M", bytes as f64 / 1_000_000.0)
        } else {
            format!("{}K", bytes / 1024)
        }
    };

    let percent = if total_bytes > 0 {
        ((used_bytes as f64 / total_bytes as f64) * 100.0) as u64
    } else {
        0
    };

    format!(
        "{} / {} ({}%)",
        format_size(used_bytes),
        format_size(total_bytes),
        percent
    )
}

/// Collapse multi-line command output into one comma separated line
pub fn join_lines(output: &str) -> String {
    output
        .trim_matches('\n')
        .split('\n')
        .collect::<Vec<_>>()
        .join(", ")
}
