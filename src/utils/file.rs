//! File reading utilities

use crate::error::{FetchError, Result};
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(FetchError::from)
}

/// Read first line of a file, trimmed
/// Meant for single-line files like /proc/sys/kernel/hostname
#[cfg(unix)]
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| FetchError::Parse("Invalid path".to_string()))?;

    // One read() is enough for the small pseudo-files this is used on
    let mut buffer = [0u8; 256];
    let bytes_read = unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            return Err(FetchError::from(std::io::Error::last_os_error()));
        }
        let n = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);
        n
    };

    if bytes_read < 0 {
        return Err(FetchError::from(std::io::Error::last_os_error()));
    }

    let content = std::str::from_utf8(&buffer[..bytes_read as usize])
        .map_err(|_| FetchError::Parse("Invalid UTF-8".to_string()))?;
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}

#[cfg(not(unix))]
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = read_file_safe(path)?;
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}
