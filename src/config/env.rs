//! Environment lookup used by [`ConfigResolver::load_from_env`].
//!
//! [`ConfigResolver::load_from_env`]: super::ConfigResolver::load_from_env

use std::collections::HashMap;
use std::ffi::OsString;

/// Environment variable holding the polling interval.
pub const INTERVAL_VAR: &str = "NOTIFY_SLACK_INTERVAL";

/// A source of environment-style key/value pairs.
pub trait EnvSource {
    /// Look up `key`. Unset and non-UTF-8 values are both `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up `key` without requiring UTF-8.
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.var(key).map(OsString::from)
    }
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}
