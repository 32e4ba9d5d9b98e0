//! Host identity collection (user, hostname, uptime, OS, kernel)

use crate::error::{FetchError, Result};
use crate::utils::file::{read_file_safe, read_first_line};

/// Hostname, uptime and OS naming for the identity and Host/OS/Kernel lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub hostname: String,
    pub uptime_seconds: u64,
    pub os_name: String,
    pub kernel_version: String,
}

pub fn collect_host_identity() -> Result<HostIdentity> {
    let hostname = get_hostname()?;
    let uptime_seconds = read_uptime()?;
    let os_name = read_os_release()?;
    let kernel_version = read_kernel_version()?;

    Ok(HostIdentity {
        hostname,
        uptime_seconds,
        os_name,
        kernel_version,
    })
}

pub fn get_username() -> String {
    std::env::var("USER").unwrap_or_else(|_| "Unknown".to_string())
}

pub fn get_terminal() -> String {
    std::env::var("TERM_PROGRAM")
        .or_else(|_| std::env::var("TERM"))
        .unwrap_or_else(|_| "Unknown".to_string())
}

fn get_hostname() -> Result<String> {
    read_first_line("/proc/sys/kernel/hostname")
}

fn read_uptime() -> Result<u64> {
    // /proc/uptime is a single line: "<uptime> <idle>"
    let uptime_str = read_first_line("/proc/uptime")?;
    let secs: f64 = uptime_str
        .split_whitespace()
        .next()
        .unwrap_or("0")
        .parse()
        .map_err(|_| FetchError::Parse(format!("Invalid uptime: {}", uptime_str)))?;
    Ok(secs as u64)
}

fn read_kernel_version() -> Result<String> {
    let version_info = read_first_line("/proc/version")?;
    version_info
        .split_whitespace()
        .nth(2)
        .map(|v| v.to_string())
        .ok_or_else(|| FetchError::Detection("Kernel version not found".to_string()))
}

fn read_os_release() -> Result<String> {
    let content = read_file_safe("/etc/os-release")?;
    parse_os_release(&content)
}

fn parse_os_release(content: &str) -> Result<String> {
    let mut pretty_name = None;
    let mut name = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"').to_string();
        match key.trim() {
            "PRETTY_NAME" => pretty_name = Some(value),
            "NAME" => name = Some(value),
            _ => {}
        }
    }

    pretty_name
        .or(name)
        .ok_or_else(|| FetchError::Detection("OS name not found".to_string()))
}
