//! External-command probes and their per-platform command lines

use crate::data::Platform;
use crate::utils::command::CommandRunner;
use crate::utils::parsing::join_lines;
use std::fmt;

/// Facts gathered by spawning an OS utility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Packages,
    Resolution,
    Gpu,
    Shell,
    Theme,
    Icons,
}

impl ProbeKind {
    pub const ALL: [ProbeKind; 6] = [
        ProbeKind::Packages,
        ProbeKind::Resolution,
        ProbeKind::Gpu,
        ProbeKind::Shell,
        ProbeKind::Theme,
        ProbeKind::Icons,
    ];
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeKind::Packages => "packages",
            ProbeKind::Resolution => "resolution",
            ProbeKind::Gpu => "gpu",
            ProbeKind::Shell => "shell",
            ProbeKind::Theme => "theme",
            ProbeKind::Icons => "icons",
        };
        f.write_str(name)
    }
}

/// How raw command output becomes a single fact value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRule {
    Trim,
    JoinLines,
}

impl OutputRule {
    pub fn apply(&self, output: &str) -> String {
        match self {
            OutputRule::Trim => output.trim().to_string(),
            OutputRule::JoinLines => join_lines(output),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeCommand {
    pub program: &'static str,
    pub args: [&'static str; 2],
    pub rule: OutputRule,
}

const fn sh(script: &'static str, rule: OutputRule) -> ProbeCommand {
    ProbeCommand {
        program: "sh",
        args: ["-c", script],
        rule,
    }
}

const fn powershell(script: &'static str, rule: OutputRule) -> ProbeCommand {
    ProbeCommand {
        program: "powershell",
        args: ["-Command", script],
        rule,
    }
}

/// Command line for `kind` on `platform`, `None` where the platform has no source
pub fn command_for(kind: ProbeKind, platform: Platform) -> Option<ProbeCommand> {
    use OutputRule::*;
    use Platform::*;
    use ProbeKind::*;

    let command = match (kind, platform) {
        (Packages, Linux) => sh("dpkg --list | grep '^ii' | wc -l", Trim),
        (Packages, Darwin) => sh("brew list | wc -l", Trim),
        (Packages, Windows) => powershell(
            "Get-Package | Measure-Object | Select-Object -ExpandProperty Count",
            Trim,
        ),

        (Resolution, Linux) => sh("xrandr | grep '*' | awk '{print $1}'", JoinLines),
        (Resolution, Darwin) => sh("system_profiler SPDisplaysDataType | grep Resolution", JoinLines),
        (Resolution, Windows) => powershell(
            "Get-WmiObject -Class Win32_VideoController | Select-Object -ExpandProperty VideoModeDescription",
            JoinLines,
        ),

        (Gpu, Linux) => sh("lspci | grep -i 'vga\\|3d\\|2d' | awk -F: '{print $3}'", Trim),
        (Gpu, Darwin) => sh("system_profiler SPDisplaysDataType | grep 'Chipset Model:'", Trim),
        (Gpu, Windows) => powershell(
            "Get-WmiObject -Class Win32_VideoController | Select-Object -ExpandProperty Name",
            Trim,
        ),

        (Shell, Linux | Darwin) => sh("echo $SHELL", Trim),
        (Shell, Windows) => powershell(
            "[System.Environment]::GetEnvironmentVariable('ComSpec')",
            Trim,
        ),

        (Theme, Linux) => sh("gsettings get org.gnome.desktop.interface gtk-theme", Trim),
        (Theme, Darwin) => sh("defaults read -g AppleInterfaceStyle", Trim),
        (Theme, Windows) => powershell(
            "(Get-ItemProperty -Path HKCU:\\Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize).AppsUseLightThemes",
            Trim,
        ),

        (Icons, Linux) => sh("gsettings get org.gnome.desktop.interface icon-theme", Trim),

        _ => return None,
    };
    Some(command)
}

/// Run one probe. Every failure degrades to an empty value.
pub fn run_probe(kind: ProbeKind, platform: Platform, runner: &dyn CommandRunner) -> String {
    let Some(command) = command_for(kind, platform) else {
        log::debug!("probe {} has no command on {}", kind, platform);
        return String::new();
    };

    match runner.run(command.program, &command.args) {
        Ok(output) => command.rule.apply(&output),
        Err(err) => {
            log::debug!("probe {} unavailable: {}", kind, err);
            String::new()
        }
    }
}
