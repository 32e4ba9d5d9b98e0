//! Fact collection: in-process stat reads plus concurrent external probes

pub mod hardware;
pub mod probes;
pub mod system;

use crate::data::{Fact, HostStats, Platform, ProbeValues, SystemSnapshot};
use crate::error::{FetchError, Result};
use crate::utils::command::CommandRunner;
use crate::utils::parsing::{format_disk, format_memory, format_uptime};
use probes::{run_probe, ProbeKind};
use std::sync::OnceLock;
use std::time::Instant;

const SEPARATOR_WIDTH: usize = 35;

/// Source of the synchronous, fatal-on-error facts
pub trait StatSource: Sync {
    fn host_stats(&self) -> Result<HostStats>;
}

/// Reads the running machine's stats from procfs
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcStats;

impl StatSource for ProcStats {
    fn host_stats(&self) -> Result<HostStats> {
        collect_host_stats()
    }
}

#[cfg(target_os = "linux")]
pub fn collect_host_stats() -> Result<HostStats> {
    let identity = system::collect_host_identity()?;
    let cpu_model = hardware::read_cpu_model()?;
    let (memory_used, memory_total) = hardware::read_memory()?;
    let (disk_used, disk_total) = hardware::read_disk_usage("/")?;

    Ok(HostStats {
        user: system::get_username(),
        terminal: system::get_terminal(),
        hostname: identity.hostname,
        uptime_seconds: identity.uptime_seconds,
        os_name: identity.os_name,
        kernel_version: identity.kernel_version,
        cpu_model,
        memory_used,
        memory_total,
        disk_used,
        disk_total,
    })
}

#[cfg(not(target_os = "linux"))]
pub fn collect_host_stats() -> Result<HostStats> {
    Err(FetchError::Detection(format!(
        "system statistics are not available on {}",
        std::env::consts::OS
    )))
}

/// Optional lines appended after Memory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectOptions {
    pub show_terminal: bool,
    pub show_disk: bool,
}

/// Gather every fact for one render pass.
///
/// All external probes start at once on a pool with one worker per probe,
/// each filling its own slot. The stat reads run on the calling thread in the
/// meantime, and the scope join waits for every probe before assembly. There is
/// no timeout: a hung command hangs the collection.
pub fn collect_snapshot(
    platform: Platform,
    stats: &dyn StatSource,
    runner: &dyn CommandRunner,
    options: CollectOptions,
) -> Result<SystemSnapshot> {
    let started = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ProbeKind::ALL.len())
        .thread_name(|i| format!("minifetch-probe-{}", i))
        .build()
        .map_err(|e| FetchError::Detection(format!("could not start probe workers: {}", e)))?;

    let slots: Vec<(ProbeKind, OnceLock<String>)> = ProbeKind::ALL
        .iter()
        .map(|&kind| (kind, OnceLock::new()))
        .collect();

    let host = pool.in_place_scope(|scope| {
        for (kind, slot) in &slots {
            scope.spawn(move |_| {
                let _ = slot.set(run_probe(*kind, platform, runner));
            });
        }
        stats.host_stats()
    });

    // Every slot is filled once the scope has returned
    let mut probes = ProbeValues::default();
    for (kind, slot) in slots {
        let value = slot.into_inner().unwrap_or_default();
        match kind {
            ProbeKind::Packages => probes.packages = value,
            ProbeKind::Resolution => probes.resolution = value,
            ProbeKind::Gpu => probes.gpu = value,
            ProbeKind::Shell => probes.shell = value,
            ProbeKind::Theme => probes.theme = value,
            ProbeKind::Icons => probes.icons = value,
        }
    }

    let host = host?;
    log::debug!("collected system facts in {:?}", started.elapsed());

    Ok(build_snapshot(&host, &probes, options))
}

/// Arrange collected values in display order
pub fn build_snapshot(host: &HostStats, probes: &ProbeValues, options: CollectOptions) -> SystemSnapshot {
    let mut facts = vec![
        Fact::new("OS", host.os_name.as_str()),
        Fact::new("Host", host.hostname.as_str()),
        Fact::new("Kernel", host.kernel_version.as_str()),
        Fact::new("Uptime", format_uptime(host.uptime_seconds)),
        Fact::new("Packages", probes.packages.as_str()),
        Fact::new("Shell", probes.shell.as_str()),
        Fact::new("Resolution", probes.resolution.as_str()),
        Fact::new("Theme", probes.theme.as_str()),
        Fact::new("Icons", probes.icons.as_str()),
        Fact::new("CPU", host.cpu_model.as_str()),
        Fact::new("GPU", probes.gpu.as_str()),
        Fact::new("Memory", format_memory(host.memory_used, host.memory_total)),
    ];

    if options.show_terminal {
        facts.push(Fact::new("Terminal", host.terminal.as_str()));
    }
    if options.show_disk {
        facts.push(Fact::new("Disk", format_disk(host.disk_used, host.disk_total)));
    }

    SystemSnapshot {
        identity: format!("{}@{}", host.user, host.hostname),
        separator: "-".repeat(SEPARATOR_WIDTH),
        facts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Condvar, Mutex};
    use std::time::Duration;

    struct FixedStats(HostStats);

    impl StatSource for FixedStats {
        fn host_stats(&self) -> Result<HostStats> {
            Ok(self.0.clone())
        }
    }

    struct BrokenStats;

    impl StatSource for BrokenStats {
        fn host_stats(&self) -> Result<HostStats> {
            Err(FetchError::Detection("CPU info not found".to_string()))
        }
    }

    /// Answers each probe by matching a fragment of its script
    struct CannedRunner {
        answers: Vec<(&'static str, Option<&'static str>)>,
    }

    impl CommandRunner for CannedRunner {
        fn run(&self, _program: &str, args: &[&str]) -> Result<String> {
            let script = args.last().copied().unwrap_or_default();
            match self.answers.iter().find(|(fragment, _)| script.contains(fragment)) {
                Some((_, Some(output))) => Ok(output.to_string()),
                _ => Err(FetchError::Detection(format!("no answer for {}", script))),
            }
        }
    }

    /// Every call blocks until all expected calls are in flight at once
    struct Rendezvous {
        expected: usize,
        arrived: Mutex<usize>,
        all_here: Condvar,
    }

    impl CommandRunner for Rendezvous {
        fn run(&self, _program: &str, _args: &[&str]) -> Result<String> {
            let mut arrived = self.arrived.lock().unwrap();
            *arrived += 1;
            self.all_here.notify_all();
            let (arrived, timeout) = self
                .all_here
                .wait_timeout_while(arrived, Duration::from_secs(10), |n| *n < self.expected)
                .unwrap();
            if timeout.timed_out() {
                return Err(FetchError::Detection(format!("only {} probes running", *arrived)));
            }
            Ok("ok".to_string())
        }
    }

    fn host() -> HostStats {
        HostStats {
            user: "alice".to_string(),
            terminal: "kitty".to_string(),
            hostname: "box".to_string(),
            uptime_seconds: 3 * 3600 + 15 * 60,
            os_name: "Arch Linux".to_string(),
            kernel_version: "6.9.1-arch1-1".to_string(),
            cpu_model: "AMD Ryzen 7 5800X".to_string(),
            memory_used: 2048 * 1024 * 1024,
            memory_total: 16384 * 1024 * 1024,
            disk_used: 50_000_000_000,
            disk_total: 100_000_000_000,
        }
    }

    fn full_runner() -> CannedRunner {
        CannedRunner {
            answers: vec![
                ("dpkg", Some("1834\n")),
                ("xrandr", Some("1920x1080\n")),
                ("lspci", Some(" NVIDIA GeForce RTX 3080\n")),
                ("$SHELL", Some("/bin/zsh\n")),
                ("gtk-theme", Some("'Adwaita'\n")),
                ("icon-theme", Some("'Papirus'\n")),
            ],
        }
    }

    #[test]
    fn test_snapshot_follows_display_order() {
        let snapshot = collect_snapshot(
            Platform::Linux,
            &FixedStats(host()),
            &full_runner(),
            CollectOptions::default(),
        )
        .unwrap();

        assert_eq!(
            snapshot.lines("<r>"),
            vec![
                "alice@box",
                "-----------------------------------",
                "OS<r>: Arch Linux",
                "Host<r>: box",
                "Kernel<r>: 6.9.1-arch1-1",
                "Uptime<r>: 3 hours, 15 mins",
                "Packages<r>: 1834",
                "Shell<r>: /bin/zsh",
                "Resolution<r>: 1920x1080",
                "Theme<r>: 'Adwaita'",
                "Icons<r>: 'Papirus'",
                "CPU<r>: AMD Ryzen 7 5800X",
                "GPU<r>: NVIDIA GeForce RTX 3080",
                "Memory<r>: 2048MB / 16384MB",
            ]
        );
    }

    #[test]
    fn test_failed_probe_leaves_empty_slot() {
        let mut runner = full_runner();
        runner.answers.retain(|(fragment, _)| *fragment != "lspci");
        runner.answers.insert(0, ("gtk-theme", None));

        let snapshot = collect_snapshot(
            Platform::Linux,
            &FixedStats(host()),
            &runner,
            CollectOptions::default(),
        )
        .unwrap();

        let value = |label: &str| {
            snapshot
                .facts
                .iter()
                .find(|fact| fact.label == label)
                .map(|fact| fact.value.clone())
                .unwrap()
        };
        assert_eq!(value("GPU"), "");
        assert_eq!(value("Theme"), "");
        assert_eq!(value("Shell"), "/bin/zsh");
        assert_eq!(value("Icons"), "'Papirus'");
        assert_eq!(snapshot.facts.len(), 12);
    }

    #[test]
    fn test_probes_run_concurrently() {
        let runner = Rendezvous {
            expected: ProbeKind::ALL.len(),
            arrived: Mutex::new(0),
            all_here: Condvar::new(),
        };

        let snapshot = collect_snapshot(
            Platform::Linux,
            &FixedStats(host()),
            &runner,
            CollectOptions::default(),
        )
        .unwrap();

        // Sequential probes would time out and come back empty
        for label in ["Packages", "Shell", "Resolution", "Theme", "Icons", "GPU"] {
            let fact = snapshot.facts.iter().find(|fact| fact.label == label).unwrap();
            assert_eq!(fact.value, "ok", "{} did not run alongside its siblings", label);
        }
    }

    #[test]
    fn test_stat_failure_is_fatal() {
        let result = collect_snapshot(
            Platform::Linux,
            &BrokenStats,
            &full_runner(),
            CollectOptions::default(),
        );
        assert!(matches!(result, Err(FetchError::Detection(_))));
    }

    #[test]
    fn test_optional_lines_after_memory() {
        let options = CollectOptions {
            show_terminal: true,
            show_disk: true,
        };
        let snapshot = build_snapshot(&host(), &ProbeValues::default(), options);
        let labels: Vec<_> = snapshot.facts.iter().map(|fact| fact.label).collect();

        assert_eq!(&labels[labels.len() - 3..], &["Memory", "Terminal", "Disk"]);
        assert_eq!(snapshot.facts[13].value, "50.0G / 100.0G (50%)");
    }

    #[test]
    fn test_platform_without_commands_collects_empty_probes() {
        let snapshot = collect_snapshot(
            Platform::Other,
            &FixedStats(host()),
            &full_runner(),
            CollectOptions::default(),
        )
        .unwrap();
        assert!(snapshot.facts.iter().any(|fact| fact.label == "CPU" && fact.value == "AMD Ryzen 7 5800X"));
        assert!(snapshot.facts.iter().all(|fact| fact.label != "Packages" || fact.value.is_empty()));
    }
}
