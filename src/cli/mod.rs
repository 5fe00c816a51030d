//! CLI command definitions for notify-slack-config
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod show;

use crate::config::Config;
use crate::duration::parse_duration;
use clap::{Args, Parser, Subcommand};
use show::ShowArgs;
use std::path::PathBuf;
use std::time::Duration;

/// Resolve and inspect notify-slack settings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (skips the default search)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved settings (default if no subcommand given)
    Show(ShowArgs),

    /// Print the configuration file that would be loaded
    Path,
}

/// Settings given on the command line.
///
/// String values are set before any source is loaded, so they take
/// precedence. The interval is applied after loading for the same effect.
#[derive(Args, Debug, Default, Clone)]
pub struct OverrideArgs {
    /// Incoming-webhook URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Slack API token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Target channel
    #[arg(long, global = true)]
    pub channel: Option<String>,

    /// Target channel for snippet uploads
    #[arg(long, global = true)]
    pub snippet_channel: Option<String>,

    /// Display name for posted messages
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Display icon for posted messages
    #[arg(long, global = true)]
    pub icon_emoji: Option<String>,

    /// Polling interval, e.g. 2s or 1h30m
    #[arg(long, global = true, value_parser = parse_duration)]
    pub interval: Option<Duration>,
}

impl OverrideArgs {
    /// Build the starting record from the string overrides.
    pub fn initial_config(&self) -> Config {
        let mut config = Config::new();
        config.slack_url = non_empty(&self.url);
        config.token = non_empty(&self.token);
        config.channel = non_empty(&self.channel);
        config.snippet_channel = non_empty(&self.snippet_channel);
        config.username = non_empty(&self.username);
        config.icon_emoji = non_empty(&self.icon_emoji);
        config
    }

    /// Apply overrides that must win over every loaded source.
    pub fn finish(&self, config: &mut Config) {
        if let Some(interval) = self.interval {
            config.interval = interval;
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["notify-slack-config"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.log, "2");
        assert!(cli.command.is_none());
        assert!(cli.overrides.initial_config().is_empty());
    }

    #[test]
    fn test_overrides_build_initial_config() {
        let cli = Cli::try_parse_from([
            "notify-slack-config",
            "--channel",
            "#ops",
            "--username",
            "",
            "--interval",
            "1h30m",
            "show",
        ])
        .unwrap();

        let mut config = cli.overrides.initial_config();
        assert_eq!(config.channel.as_deref(), Some("#ops"));
        assert_eq!(config.username, None);
        assert_eq!(config.interval, Duration::ZERO);

        cli.overrides.finish(&mut config);
        assert_eq!(config.interval, Duration::from_secs(5400));
        assert!(matches!(cli.command, Some(Command::Show(_))));
    }

    #[test]
    fn test_rejects_bad_interval() {
        let result = Cli::try_parse_from(["notify-slack-config", "--interval", "xyz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_path_subcommand_with_config() {
        let cli =
            Cli::try_parse_from(["notify-slack-config", "path", "-c", "/tmp/ns.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Path)));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ns.toml")));
    }
}
