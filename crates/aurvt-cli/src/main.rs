//! aurvt CLI - checks PKGBUILDs against their latest GitHub release
//!
//! Usage:
//! - `aurvt <package-dir>` compares `<package-dir>/PKGBUILD` with upstream
//! - `aurvt version` prints build metadata

mod commands;
mod config;
mod output;

use anyhow::Result;
use aurvt_core::BuildInfo;
use aurvt_github::DEFAULT_API_URL;
use aurvt_recipe::ignore::IGNORE_FILE_NAME;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{cmd_check, cmd_version};
use config::CheckConfig;

#[derive(Parser)]
#[command(name = "aurvt")]
#[command(about = "Check for newer versions of AUR packages on GitHub", long_about = None)]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    /// Package directory containing a PKGBUILD
    #[arg(required = true)]
    package_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Ignore list, one package directory name per line
    #[arg(long, global = true, default_value = IGNORE_FILE_NAME)]
    ignore_file: PathBuf,

    /// GitHub API base URL
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    let build = BuildInfo::new(
        env!("CARGO_PKG_VERSION"),
        option_env!("AURVT_COMMIT"),
        option_env!("AURVT_BUILD_DATE"),
    );

    match cli.command {
        Some(Commands::Version) => cmd_version(&build),
        None => {
            let Some(package_dir) = cli.package_dir else {
                anyhow::bail!("a package directory is required");
            };
            let config = CheckConfig {
                package_dir,
                ignore_file: cli.ignore_file,
                api_url: cli.api_url,
                user_agent: format!("aurvt/{}", build.version),
            };
            cmd_check(&config)?;
        }
    }

    Ok(())
}
