#![forbid(unsafe_code)]
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use package_json::inspect::inspect;
use package_json::summary::SummaryOptions;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::{Level, debug, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: package-json [path]";

#[derive(Parser)]
#[command(name = "package-json", version, disable_help_flag = true)]
struct Cli {
    /// Directory to start searching from; defaults to the current directory
    path: Option<PathBuf>,
    /// Process the current working directory or the given path
    #[arg(short = 'c')]
    current: bool,
    /// Also show repository, keywords, files and dependencies
    #[arg(short, long)]
    all: bool,
    /// Log lookup details to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Print usage and exit
    #[arg(short = 'h', long = "help")]
    help: bool,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }
    init_tracing(cli.verbose)?;

    // an unreadable cwd leaves an empty path, which resolves to "not found"
    let start = match cli.path {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => env::current_dir().unwrap_or_else(|e| {
            warn!("cannot determine current directory: {e}");
            PathBuf::new()
        }),
    };
    debug!(start = %start.display(), current = cli.current, "starting lookup");

    let opts = SummaryOptions { extended: cli.all };
    inspect(&start, opts, &mut io::stdout().lock()).context("Failed to write summary")?;

    Ok(())
}
