//! notify-slack-config
//!
//! Resolves notify-slack settings from the command line, a TOML file and the
//! environment, and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use notify_slack_config::cli::show::{ShowArgs, run_show};
use notify_slack_config::cli::{Cli, Command};
use notify_slack_config::config::{ConfigResolver, ProcessEnv, SearchPaths};
use std::fs::OpenOptions;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)
                .with_context(|| format!("failed to open log file {}", filename))?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let paths = SearchPaths::discover();
    if paths.home_dir.is_none() {
        warn!("Home directory unavailable, searching only {}", paths.system_file.display());
    }

    if let Some(Command::Path) = cli.command {
        return match paths.resolve(cli.config.as_deref()) {
            Some(file) => {
                debug!(source = %file.source, "Resolved configuration file");
                println!("{}", file.path.display());
                Ok(())
            }
            None => {
                info!("No configuration file found");
                std::process::exit(1);
            }
        };
    }

    let mut resolver = ConfigResolver::with_paths(paths, cli.overrides.initial_config());
    let file = resolver
        .resolve(cli.config.as_deref(), &ProcessEnv)
        .context("failed to resolve notify-slack settings")?;

    match file {
        Some(ref file) => info!(
            path = %file.path.display(),
            source = %file.source,
            "Loaded configuration file"
        ),
        None => debug!("No configuration file found, using environment only"),
    }

    let mut config = resolver.into_config();
    cli.overrides.finish(&mut config);

    if config.slack_url.is_none() && config.token.is_none() {
        warn!("Neither a webhook URL nor a token is configured");
    }

    let default_args = ShowArgs::default();
    let args = match cli.command {
        Some(Command::Show(ref args)) => args,
        _ => &default_args,
    };
    run_show(args, &config, file.as_ref(), &mut std::io::stdout().lock())
}
