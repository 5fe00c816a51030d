//! Settings resolution from a TOML file and the environment.
//!
//! Each loader fills only string fields that are still unset, so whichever
//! source is applied first wins. The interval is the exception: any source
//! that supplies one overwrites the current value.

use super::document::SlackTable;
use super::env::{EnvSource, INTERVAL_VAR};
use super::files::{ResolvedFile, SearchPaths};
use super::types::{Config, Field};
use crate::duration::parse_duration;
use crate::error::{ConfigError, DurationError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Key in the `[slack]` table holding the interval.
const INTERVAL_KEY: &str = "interval";

/// Populates a [`Config`] from its sources.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Locations searched by [`ConfigResolver::resolve_file_path`]
    pub paths: SearchPaths,
    config: Config,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Start from an empty record, searching the default locations.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Start from a record whose set fields take precedence over every source.
    pub fn with_config(config: Config) -> Self {
        Self::with_paths(SearchPaths::discover(), config)
    }

    /// Start from `config`, searching explicit locations.
    pub fn with_paths(paths: SearchPaths, config: Config) -> Self {
        Self { paths, config }
    }

    /// Fill unset fields from environment variables.
    ///
    /// `NOTIFY_SLACK_INTERVAL`, when non-empty, replaces the interval. A
    /// malformed or non-UTF-8 interval fails the call before any field is
    /// touched. Non-UTF-8 values of the string variables read as unset.
    pub fn load_from_env(&mut self, env: &impl EnvSource) -> Result<()> {
        let interval = match env.var_os(INTERVAL_VAR) {
            Some(raw) if !raw.is_empty() => match raw.into_string() {
                Ok(raw) => Some(parse_interval(INTERVAL_VAR, &raw)?),
                Err(raw) => {
                    return Err(ConfigError::invalid_duration(
                        INTERVAL_VAR,
                        raw.to_string_lossy(),
                        DurationError::NotUnicode,
                    ));
                }
            },
            _ => None,
        };

        for field in Field::ALL {
            self.config.fill(field, env.var(field.env_var()).as_deref());
        }

        if let Some(interval) = interval {
            self.config.interval = interval;
        }
        Ok(())
    }

    /// Fill unset fields from the `[slack]` table of a TOML file.
    ///
    /// A present `interval` key replaces the interval. Keys holding
    /// non-string values are skipped.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let table = SlackTable::parse(&content).map_err(|kind| ConfigError::parse(path, kind))?;
        self.apply_table(&table, &format!("{} in {}", INTERVAL_KEY, path.display()))
    }

    /// Fill unset fields from an already-parsed `[slack]` table.
    ///
    /// `origin` names the table's source in interval errors.
    pub fn apply_table(&mut self, table: &SlackTable, origin: &str) -> Result<()> {
        let interval = table
            .string(INTERVAL_KEY)
            .map(|raw| parse_interval(origin, raw))
            .transpose()?;

        for field in Field::ALL {
            self.config.fill(field, table.string(field.toml_key()));
        }

        if let Some(interval) = interval {
            self.config.interval = interval;
        }
        Ok(())
    }

    /// Path of the configuration file to load, if any.
    ///
    /// A non-empty `explicit` path is returned unchanged without checking
    /// that it exists.
    pub fn resolve_file_path(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        self.paths.resolve(explicit).map(|file| file.path)
    }

    /// Run the full resolution: locate a file, load it if found, then fill
    /// what is still unset from `env`.
    ///
    /// Returns the file that was loaded.
    pub fn resolve(
        &mut self,
        explicit: Option<&Path>,
        env: &impl EnvSource,
    ) -> Result<Option<ResolvedFile>> {
        let file = self.paths.resolve(explicit);
        if let Some(ref file) = file {
            self.load_from_file(&file.path)?;
        }
        self.load_from_env(env)?;
        Ok(file)
    }

    /// Get the settings resolved so far.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable access to the settings.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Consume the resolver and return the settings.
    pub fn into_config(self) -> Config {
        self.config
    }
}

fn parse_interval(origin: &str, raw: &str) -> Result<Duration> {
    parse_duration(raw).map_err(|source| ConfigError::invalid_duration(origin, raw, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnv;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn resolver() -> ConfigResolver {
        ConfigResolver::with_paths(
            SearchPaths::with_dirs(None, "/nonexistent/notify_slack.toml"),
            Config::default(),
        )
    }

    fn full_env() -> MapEnv {
        MapEnv::new()
            .with("NOTIFY_SLACK_WEBHOOK_URL", "https://hooks.slack.com/aaaaa")
            .with("NOTIFY_SLACK_TOKEN", "xoxp-token")
            .with("NOTIFY_SLACK_CHANNEL", "#test")
            .with("NOTIFY_SLACK_SNIPPET_CHANNEL", "#general")
            .with("NOTIFY_SLACK_USERNAME", "deploy!")
            .with("NOTIFY_SLACK_ICON_EMOJI", ":rocket:")
            .with("NOTIFY_SLACK_INTERVAL", "2s")
    }

    #[test]
    fn test_load_from_env_fills_empty_record() {
        let mut resolver = resolver();
        resolver.load_from_env(&full_env()).unwrap();

        let config = resolver.config();
        assert_eq!(
            config.slack_url.as_deref(),
            Some("https://hooks.slack.com/aaaaa")
        );
        assert_eq!(config.token.as_deref(), Some("xoxp-token"));
        assert_eq!(config.channel.as_deref(), Some("#test"));
        assert_eq!(config.snippet_channel.as_deref(), Some("#general"));
        assert_eq!(config.username.as_deref(), Some("deploy!"));
        assert_eq!(config.icon_emoji.as_deref(), Some(":rocket:"));
        assert_eq!(config.interval, Duration::from_secs(2));
        assert_eq!(config.primary_channel, None);
    }

    #[test]
    fn test_load_from_env_keeps_set_fields() {
        let mut resolver = ConfigResolver::with_paths(
            SearchPaths::with_dirs(None, "/nonexistent"),
            Config::new().with_channel("#preset").with_username("me"),
        );
        resolver.load_from_env(&full_env()).unwrap();

        assert_eq!(resolver.config().channel.as_deref(), Some("#preset"));
        assert_eq!(resolver.config().username.as_deref(), Some("me"));
        assert_eq!(resolver.config().token.as_deref(), Some("xoxp-token"));
    }

    #[test]
    fn test_load_from_env_empty_values_are_unset() {
        let mut resolver = resolver();
        let env = MapEnv::new()
            .with("NOTIFY_SLACK_CHANNEL", "")
            .with("NOTIFY_SLACK_INTERVAL", "");
        resolver.config_mut().interval = Duration::from_secs(5);
        resolver.load_from_env(&env).unwrap();

        assert_eq!(resolver.config().channel, None);
        assert_eq!(resolver.config().interval, Duration::from_secs(5));
    }

    #[test]
    fn test_load_from_env_invalid_interval() {
        let mut resolver = resolver();
        let env = full_env().with("NOTIFY_SLACK_INTERVAL", "xyz");
        let err = resolver.load_from_env(&env).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidDuration);
        match err {
            ConfigError::InvalidDuration { origin, value, .. } => {
                assert_eq!(origin, "NOTIFY_SLACK_INTERVAL");
                assert_eq!(value, "xyz");
            }
            other => panic!("unexpected error: {other}"),
        }
        // Nothing applied from a failed load.
        assert!(resolver.config().is_empty());
    }

    #[test]
    fn test_load_from_env_rejects_whitespace_in_interval() {
        for raw in [" 2s", "2s\n", "1h 30m"] {
            let mut resolver = resolver();
            let env = full_env().with("NOTIFY_SLACK_INTERVAL", raw);
            let err = resolver.load_from_env(&env).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidDuration, "{raw:?} was accepted");
            assert!(resolver.config().is_empty());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_load_from_env_non_unicode_interval() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        struct RawEnv;

        impl EnvSource for RawEnv {
            fn var(&self, _key: &str) -> Option<String> {
                None
            }

            fn var_os(&self, key: &str) -> Option<OsString> {
                (key == INTERVAL_VAR).then(|| OsString::from_vec(vec![b'2', 0xff, b's']))
            }
        }

        let mut resolver = resolver();
        let err = resolver.load_from_env(&RawEnv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDuration);
        assert!(matches!(
            err,
            ConfigError::InvalidDuration {
                source: DurationError::NotUnicode,
                ..
            }
        ));
    }

    #[test]
    fn test_apply_table_skips_non_strings() {
        let mut resolver = resolver();
        let table = SlackTable::parse(
            r##"
[slack]
channel = 1
username = "bot"
"##,
        )
        .unwrap();
        resolver.apply_table(&table, "test").unwrap();

        assert_eq!(resolver.config().channel, None);
        assert_eq!(resolver.config().username.as_deref(), Some("bot"));
    }

    #[test]
    fn test_non_string_interval_is_ignored() {
        let mut resolver = resolver();
        let table = SlackTable::parse("[slack]\ninterval = 2\n").unwrap();
        resolver.apply_table(&table, "test").unwrap();
        assert_eq!(resolver.config().interval, Duration::ZERO);
    }

    #[test]
    fn test_empty_file_interval_is_invalid() {
        let mut resolver = resolver();
        let table = SlackTable::parse("[slack]\ninterval = \"\"\nchannel = \"#x\"\n").unwrap();
        let err = resolver.apply_table(&table, "test").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDuration);
        assert_eq!(resolver.config().channel, None);
    }

    #[test]
    fn test_load_from_file_missing_file() {
        let temp = TempDir::new().unwrap();
        let mut resolver = resolver();
        let err = resolver
            .load_from_file(temp.path().join("absent.toml"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_load_from_file_interval_error_names_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("c.toml");
        std::fs::write(&path, "[slack]\ninterval = \"soon\"\n").unwrap();

        let mut resolver = resolver();
        let err = resolver.load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDuration);
        assert!(err.to_string().contains("c.toml"));
        assert!(err.to_string().contains("\"soon\""));
    }

    #[test]
    fn test_resolve_file_then_env() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().to_path_buf();
        std::fs::write(
            home.join(".notify_slack.toml"),
            "[slack]\nchannel = \"#from-file\"\ninterval = \"1s\"\n",
        )
        .unwrap();

        let mut resolver = ConfigResolver::with_paths(
            SearchPaths::with_dirs(Some(home.clone()), temp.path().join("system.toml")),
            Config::default(),
        );
        let file = resolver.resolve(None, &full_env()).unwrap().unwrap();
        assert_eq!(file.path, home.join(".notify_slack.toml"));

        let config = resolver.into_config();
        assert_eq!(config.channel.as_deref(), Some("#from-file"));
        assert_eq!(config.token.as_deref(), Some("xoxp-token"));
        // Environment ran last, so its interval stands.
        assert_eq!(config.interval, Duration::from_secs(2));
    }

    #[test]
    fn test_resolve_without_file_uses_env_only() {
        let mut resolver = resolver();
        let file = resolver.resolve(None, &full_env()).unwrap();
        assert!(file.is_none());
        assert_eq!(resolver.config().channel.as_deref(), Some("#test"));
    }
}
