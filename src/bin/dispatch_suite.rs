use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;
use value_dispatch::{suite, DispatchConfig, Dispatcher};

/// Exit status when the config cannot be loaded.
const CONFIG_ERROR: u8 = 2;

/// Loads the config at `path` (or the defaults), runs the suite and prints
/// the report. Returns the process exit status.
fn run(path: Option<&Path>, color: bool) -> u8 {
    let config = match path {
        Some(path) => match DispatchConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} {}", "error:".bold().red(), err);
                return CONFIG_ERROR;
            }
        },
        None => DispatchConfig::default(),
    };

    tracing::info!(?config, "starting suite");
    let report = suite::run(&Dispatcher::new(config));
    print!("{}", report.render(color));

    report.exit_code()
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let color = io::stdout().is_terminal();

    ExitCode::from(run(path.as_deref(), color))
}
