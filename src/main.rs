use minifetch::cli::{self, Command, RenderPlan};
use minifetch::collectors::ProcStats;
use minifetch::config::load_config;
use minifetch::utils::command::SystemRunner;
use minifetch::Platform;
use std::io;
use std::process;

fn main() {
    init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = try_main(&args) {
        eprintln!("minifetch: {}", err);
        process::exit(1);
    }
}

fn try_main(args: &[String]) -> minifetch::Result<()> {
    let config = load_config()?;
    let platform = Platform::detect();
    let command = Command::parse(args);
    log::debug!("running {:?} on {}", command, platform);

    let plan = RenderPlan::new(&command, &config, platform);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&plan, platform, &ProcStats, &SystemRunner, &mut out)
}

/// Logs go to stderr, filtered by MINIFETCH_LOG (default: warn)
fn init_logger() {
    let env = env_logger::Env::new().filter_or("MINIFETCH_LOG", "warn");
    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
    {
        eprintln!("minifetch: could not initialize logging: {}", e);
    }
}
