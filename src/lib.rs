//! minifetch library
//!
//! Prints an ASCII-art logo next to a list of system facts. Facts come from
//! procfs reads and from external commands run concurrently; the art is
//! colored through `${cN}` placeholders and padded so the fact column lines up.

pub mod cli;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod utils;

pub use data::{HostStats, Platform, SystemSnapshot};
pub use error::{FetchError, Result};
