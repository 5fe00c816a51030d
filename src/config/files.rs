//! Configuration file discovery.
//!
//! When no path is given explicitly, candidates are probed in this order and
//! the first existing one wins:
//! 1. `~/.notify_slack.toml`
//! 2. `~/etc/notify_slack.toml`
//! 3. `/etc/notify_slack.toml`

use std::path::{Path, PathBuf};

/// File name looked up directly in the home directory.
pub const HOME_DOTFILE: &str = ".notify_slack.toml";

/// File name looked up in `etc/` directories.
pub const ETC_FILE: &str = "notify_slack.toml";

/// System-wide configuration file.
pub const SYSTEM_FILE: &str = "/etc/notify_slack.toml";

/// Where a configuration file path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    /// Supplied by the caller; never checked for existence
    Explicit,
    /// `~/.notify_slack.toml`
    HomeDotfile,
    /// `~/etc/notify_slack.toml`
    HomeEtc,
    /// `/etc/notify_slack.toml`
    System,
}

impl std::fmt::Display for FileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSource::Explicit => write!(f, "explicit"),
            FileSource::HomeDotfile => write!(f, "home dotfile"),
            FileSource::HomeEtc => write!(f, "home etc"),
            FileSource::System => write!(f, "system"),
        }
    }
}

/// A configuration file path with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub source: FileSource,
}

/// Locations searched for a configuration file.
#[derive(Debug, Clone)]
pub struct SearchPaths {
    /// User home directory; `None` when it cannot be determined
    pub home_dir: Option<PathBuf>,
    /// System-wide file, normally [`SYSTEM_FILE`]
    pub system_file: PathBuf,
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl SearchPaths {
    /// Search the current user's home directory and the system file.
    pub fn discover() -> Self {
        Self {
            home_dir: dirs::home_dir(),
            system_file: PathBuf::from(SYSTEM_FILE),
        }
    }

    /// Search an explicit home directory (or none) and system file.
    pub fn with_dirs(home_dir: Option<PathBuf>, system_file: impl Into<PathBuf>) -> Self {
        Self {
            home_dir,
            system_file: system_file.into(),
        }
    }

    /// All candidates in probe order, whether or not they exist.
    pub fn candidates(&self) -> Vec<ResolvedFile> {
        let mut candidates = Vec::with_capacity(3);
        if let Some(ref home) = self.home_dir {
            candidates.push(ResolvedFile {
                path: home.join(HOME_DOTFILE),
                source: FileSource::HomeDotfile,
            });
            candidates.push(ResolvedFile {
                path: home.join("etc").join(ETC_FILE),
                source: FileSource::HomeEtc,
            });
        }
        candidates.push(ResolvedFile {
            path: self.system_file.clone(),
            source: FileSource::System,
        });
        candidates
    }

    /// Pick the configuration file to load.
    ///
    /// A non-empty `explicit` path is returned as-is. Otherwise the first
    /// existing candidate is returned, or `None` if there is none.
    pub fn resolve(&self, explicit: Option<&Path>) -> Option<ResolvedFile> {
        if let Some(path) = explicit
            && !path.as_os_str().is_empty()
        {
            return Some(ResolvedFile {
                path: path.to_path_buf(),
                source: FileSource::Explicit,
            });
        }

        self.candidates()
            .into_iter()
            .find(|candidate| candidate.path.exists())
    }
}
