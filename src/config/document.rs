//! Typed view of the `[slack]` table in a configuration file.
//!
//! Keys keep only the distinction the loaders care about: a string value, or
//! anything else. Non-string values read as absent.

use crate::error::ParseErrorKind;
use std::collections::BTreeMap;

/// Name of the table holding notifier settings.
pub const SLACK_SECTION: &str = "slack";

/// A value found under a key of the `[slack]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    /// Integers, booleans, arrays, tables and so on.
    Other,
}

impl From<&toml::Value> for FieldValue {
    fn from(value: &toml::Value) -> Self {
        match value {
            toml::Value::String(s) => FieldValue::String(s.clone()),
            _ => FieldValue::Other,
        }
    }
}

/// The `[slack]` table of a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackTable {
    entries: BTreeMap<String, FieldValue>,
}

impl SlackTable {
    /// Parse a TOML document and extract its `[slack]` table.
    pub fn parse(content: &str) -> Result<Self, ParseErrorKind> {
        let document: toml::Table = toml::from_str(content)?;
        match document.get(SLACK_SECTION) {
            Some(toml::Value::Table(table)) => Ok(Self::from_table(table)),
            _ => Err(ParseErrorKind::MissingSection(SLACK_SECTION)),
        }
    }

    pub fn from_table(table: &toml::Table) -> Self {
        Self {
            entries: table
                .iter()
                .map(|(key, value)| (key.clone(), FieldValue::from(value)))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// The string under `key`, or `None` if missing or not a string.
    pub fn string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(FieldValue::String(s)) => Some(s.as_str()),
            Some(FieldValue::Other) | None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
