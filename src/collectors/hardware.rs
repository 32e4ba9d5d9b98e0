//! Hardware information collection (CPU, Memory, Disk)

use crate::error::{FetchError, Result};
use crate::utils::file::read_file_safe;
use crate::utils::parsing::{extract_after_colon, meminfo_bytes};

pub fn read_cpu_model() -> Result<String> {
    let cpuinfo = read_file_safe("/proc/cpuinfo")?;
    parse_cpu_model(&cpuinfo)
}

fn parse_cpu_model(cpuinfo: &str) -> Result<String> {
    // x86 reports "model name", most ARM boards only "Hardware"
    ["model name", "Hardware"]
        .iter()
        .find_map(|key| {
            cpuinfo
                .lines()
                .find(|line| line.starts_with(key))
                .and_then(extract_after_colon)
        })
        .ok_or_else(|| FetchError::Detection("CPU info not found".to_string()))
}

/// Used and total memory in bytes
pub fn read_memory() -> Result<(u64, u64)> {
    let meminfo = read_file_safe("/proc/meminfo")?;
    parse_memory(&meminfo)
}

fn parse_memory(meminfo: &str) -> Result<(u64, u64)> {
    let mut total = None;
    let mut available = None;

    for line in meminfo.lines() {
        if total.is_none() && line.starts_with("MemTotal") {
            total = meminfo_bytes(line);
        } else if available.is_none() && line.starts_with("MemAvailable") {
            available = meminfo_bytes(line);
        }

        if total.is_some() && available.is_some() {
            break;
        }
    }

    match (total, available) {
        (Some(total), Some(available)) => Ok((total.saturating_sub(available), total)),
        _ => Err(FetchError::Detection(
            "Memory totals not found".to_string(),
        )),
    }
}

/// Used and total bytes of the filesystem holding `path`
#[cfg(unix)]
pub fn read_disk_usage(path: &str) -> Result<(u64, u64)> {
    use std::ffi::CString;

    let path = CString::new(path).map_err(|_| FetchError::Parse("Invalid path".to_string()))?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };

    if unsafe { libc::statvfs(path.as_ptr(), &mut stat) } != 0 {
        return Err(FetchError::from(std::io::Error::last_os_error()));
    }

    #[allow(clippy::unnecessary_cast)]
    let (blocks, available, fragment) = (stat.f_blocks as u64, stat.f_bavail as u64, stat.f_frsize as u64);
    let total_bytes = blocks.wrapping_mul(fragment);
    let available_bytes = available.wrapping_mul(fragment);

    Ok((total_bytes.saturating_sub(available_bytes), total_bytes))
}

#[cfg(not(unix))]
pub fn read_disk_usage(_path: &str) -> Result<(u64, u64)> {
    Err(FetchError::Detection(
        "Disk usage is not supported on this platform".to_string(),
    ))
}
