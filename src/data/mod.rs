//! Data structures shared by the collectors and the display layer

pub mod system;

pub use system::{apply_disable_filter, Fact, HostStats, Platform, ProbeValues, SystemSnapshot};
