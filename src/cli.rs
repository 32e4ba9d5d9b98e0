//! Sub-command dispatch and the render pass

use crate::collectors::{collect_snapshot, CollectOptions, StatSource};
use crate::config::{expand_path, Config};
use crate::data::{apply_disable_filter, Platform};
use crate::display::{ArtDocument, ArtSource, Compositor, PlaceholderRegistry};
use crate::error::Result;
use crate::utils::command::CommandRunner;
use std::io::Write;

/// What the first positional argument asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Default,
    List,
    Source(String),
    Disable(Vec<String>),
    AsciiDistro(String),
    AsciiColor(Vec<String>),
}

impl Command {
    /// Parse arguments without the program name. Unknown sub-commands, and
    /// known ones missing their argument, fall back to the default render.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some((name, rest)) = args.split_first() else {
            return Command::Default;
        };
        let rest: Vec<String> = rest.iter().map(|s| s.as_ref().to_string()).collect();

        match (name.as_ref(), rest.first()) {
            ("list", _) => Command::List,
            ("source", Some(path)) => Command::Source(path.clone()),
            ("disable", _) => Command::Disable(rest),
            ("ascii_distro", Some(distro)) => Command::AsciiDistro(distro.clone()),
            ("ascii_color", Some(_)) => Command::AsciiColor(rest),
            _ => Command::Default,
        }
    }
}

/// Everything a render pass needs once the command and config are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub art: ArtSource,
    pub disable: Vec<String>,
    pub colors: Vec<String>,
    pub options: CollectOptions,
}

impl RenderPlan {
    pub fn new(command: &Command, config: &Config, platform: Platform) -> Self {
        let display = &config.display;

        let art = match command {
            Command::Source(path) => ArtSource::File(expand_path(path)),
            Command::AsciiDistro(name) => ArtSource::Builtin(name.clone()),
            _ => match (display.expanded_ascii_path(), &display.ascii_distro) {
                (Some(path), _) => ArtSource::File(path),
                (None, Some(name)) => ArtSource::Builtin(name.clone()),
                (None, None) => ArtSource::Builtin(platform.as_str().to_string()),
            },
        };

        let mut disable = display.disable.clone();
        if let Command::Disable(terms) = command {
            disable.extend(terms.iter().cloned());
        }

        // Command colors take over the configured ones slot by slot
        let mut colors = display.ascii_colors.clone();
        if let Command::AsciiColor(names) = command {
            colors = names.clone();
            if names.len() < display.ascii_colors.len() {
                colors.extend(display.ascii_colors[names.len()..].iter().cloned());
            }
        }

        Self {
            art,
            disable,
            colors,
            options: CollectOptions {
                show_terminal: display.show_terminal,
                show_disk: display.show_disk,
            },
        }
    }
}

/// Collect, lay out and write one banner
pub fn run<W: Write>(
    plan: &RenderPlan,
    platform: Platform,
    stats: &dyn StatSource,
    runner: &dyn CommandRunner,
    out: &mut W,
) -> Result<()> {
    let registry = PlaceholderRegistry::new();
    if let Err(err) = registry.remap_positional(&plan.colors) {
        log::warn!("{}", err);
    }

    let snapshot = collect_snapshot(platform, stats, runner, plan.options)?;
    let mut art = ArtDocument::load(&plan.art, &registry)?;

    let mut lines = snapshot.lines(&registry.reset());
    apply_disable_filter(&mut lines, &plan.disable);

    Compositor::new(&registry).render(&mut art, &lines, out)
}
