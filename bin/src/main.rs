//! cdfetch CLI - Download the ChromeDriver build that matches your Chrome.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cdfetch_lib::prelude::*;
use std::path::PathBuf;

mod commands;
mod config;
mod display;
mod logging;
mod resolve;

#[derive(Parser)]
#[command(name = "cdfetch")]
#[command(about = "Download the ChromeDriver build that matches your Chrome", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the major version of the installed browser
    Detect {
        /// Browser binary to query instead of the default install location
        #[arg(short, long)]
        browser: Option<PathBuf>,

        /// Platform whose default install locations are searched
        #[arg(short, long)]
        platform: Option<Platform>,
    },

    /// List drivers matching the browser version
    List(TargetArgs),

    /// Pick a matching driver and download it (default)
    Download(DownloadArgs),
}

/// Which drivers to look for.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct TargetArgs {
    /// Browser major version (skips detection)
    #[arg(short, long)]
    pub(crate) major: Option<MajorVersion>,

    /// Driver platform (mac, linux, win). Defaults to the host platform.
    #[arg(short, long)]
    pub(crate) platform: Option<Platform>,

    /// Browser binary to query for its version
    #[arg(short, long)]
    pub(crate) browser: Option<PathBuf>,
}

/// Options for the download command.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct DownloadArgs {
    #[command(flatten)]
    pub(crate) target: TargetArgs,

    /// Output file path. Defaults to the driver's file name in the output directory.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Download the newest matching driver without prompting
    #[arg(short, long)]
    pub(crate) yes: bool,

    /// Delete the partial .tmp file if the download fails
    #[arg(long)]
    pub(crate) remove_partial: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = config::load(cli.config.as_deref())?;

    // Running without a command performs an interactive download
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Download(DownloadArgs::default()));

    match command {
        Commands::Detect { browser, platform } => {
            commands::detect::detect(browser.as_deref(), platform, &config)
        }
        Commands::List(target) => commands::list::list(&target, &config).await,
        Commands::Download(args) => commands::download::download(&args, &config, cli.quiet).await,
    }
}
