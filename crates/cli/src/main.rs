// # -----------------------------
// # crates/cli/src/main.rs
// # -----------------------------
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

use bugtrack_cli::core::{run_menu, BugTrackError, Console, ReportStore};
use bugtrack_common::{load_config, LoadedConfig};

#[derive(Parser, Debug)]
#[command(
    name = "bugtrack",
    version = version(),
    about = "Track bugs as plain-text reports",
    long_about = "Interactive bug tracker. Each bug is a .txt report; status changes are \
                  appended to the report, never rewritten."
)]
struct Cli {
    /// Directory report names are resolved against (default: current directory)
    #[arg(long = "dir", value_name = "PATH")]
    dir: Option<PathBuf>,
    /// Configuration file (default: bugtrack.toml if present, or $BUGTRACK_CONFIG)
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error, off). Overrides RUST_LOG if set.
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
}

static VERSION: Lazy<String> =
    Lazy::new(|| bugtrack_build_info::version_line(env!("CARGO_PKG_VERSION")));

fn version() -> &'static str {
    VERSION.as_str()
}

fn init_logging(log_level: Option<&str>, configured: Option<&str>) {
    // CLI arg overrides RUST_LOG, which overrides the config file
    let filter = if let Some(level) = log_level {
        match level.to_lowercase().as_str() {
            "off" => EnvFilter::new("off"),
            "error" => EnvFilter::new("error"),
            "warn" | "warning" => EnvFilter::new("warn"),
            "info" => EnvFilter::new("info"),
            "debug" => EnvFilter::new("debug"),
            "trace" => EnvFilter::new("trace"),
            _ => {
                eprintln!("Warning: Invalid log level '{}', using 'info'", level);
                EnvFilter::new("info")
            }
        }
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            configured
                .and_then(|directive| EnvFilter::try_new(directive).ok())
                .unwrap_or_else(|| EnvFilter::new("warn"))
        })
    };

    // stdout carries the menu and report text, so logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load(cli: &Cli) -> Result<LoadedConfig> {
    load_config(cli.config.as_deref(), cli.dir.as_deref()).map_err(|err| {
        let err = BugTrackError::Config {
            path: cli.config.clone(),
            reason: format!("{err:#}"),
        };
        for hint in err.recovery_hints() {
            eprintln!("hint: {hint}");
        }
        anyhow::Error::new(err)
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = load(&cli).context("load config")?;
    init_logging(
        cli.log_level.as_deref(),
        loaded.config.logging.level.as_deref(),
    );

    tracing::debug!("bugtrack starting, version {}", version());
    tracing::debug!(
        config = ?loaded.path,
        reports_dir = %loaded.config.store.reports_dir.display(),
        source = ?loaded.reports_dir_source,
        "configuration resolved"
    );

    let store = ReportStore::new(loaded.config.store.reports_dir);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    run_menu(&mut console, &store).context("terminal I/O failed")?;
    Ok(())
}
