//! The settings record and the fields the loaders populate.

use serde::Serialize;
use std::time::Duration;

/// Resolved notifier settings.
///
/// String fields are `None` until some source sets them. Once set, later loads
/// leave them alone, so the first source applied wins. `interval` has no such
/// guard: every source that supplies it overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Slack incoming-webhook endpoint.
    pub slack_url: Option<String>,
    /// Slack API token.
    pub token: Option<String>,
    /// Default channel. Not read from any source; set by callers only.
    pub primary_channel: Option<String>,
    /// Target channel override.
    pub channel: Option<String>,
    /// Target channel for snippet uploads.
    pub snippet_channel: Option<String>,
    /// Display name for posted messages.
    pub username: Option<String>,
    /// Display icon for posted messages.
    pub icon_emoji: Option<String>,
    /// Time between repeated posts.
    #[serde(serialize_with = "crate::duration::serialize")]
    pub interval: Duration,
}

impl Config {
    /// Create an empty settings record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slack_url(mut self, url: impl Into<String>) -> Self {
        self.slack_url = Some(url.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_primary_channel(mut self, channel: impl Into<String>) -> Self {
        self.primary_channel = Some(channel.into());
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_snippet_channel(mut self, channel: impl Into<String>) -> Self {
        self.snippet_channel = Some(channel.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(icon_emoji.into());
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// True when no field has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Get the value of a loadable field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::SlackUrl => self.slack_url.as_deref(),
            Field::Token => self.token.as_deref(),
            Field::Channel => self.channel.as_deref(),
            Field::SnippetChannel => self.snippet_channel.as_deref(),
            Field::Username => self.username.as_deref(),
            Field::IconEmoji => self.icon_emoji.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::SlackUrl => &mut self.slack_url,
            Field::Token => &mut self.token,
            Field::Channel => &mut self.channel,
            Field::SnippetChannel => &mut self.snippet_channel,
            Field::Username => &mut self.username,
            Field::IconEmoji => &mut self.icon_emoji,
        }
    }

    /// Set `field` unless it already holds a value.
    ///
    /// Empty strings count as absent and never populate a field. Returns
    /// whether the value was taken.
    pub(crate) fn fill(&mut self, field: Field, value: Option<&str>) -> bool {
        let slot = self.slot_mut(field);
        match value {
            Some(value) if slot.is_none() && !value.is_empty() => {
                *slot = Some(value.to_string());
                true
            }
            _ => false,
        }
    }
}

/// String fields that the file and environment loaders can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SlackUrl,
    Token,
    Channel,
    SnippetChannel,
    Username,
    IconEmoji,
}

impl Field {
    /// All loadable fields, in load order.
    pub const ALL: [Field; 6] = [
        Field::SlackUrl,
        Field::Token,
        Field::Channel,
        Field::SnippetChannel,
        Field::Username,
        Field::IconEmoji,
    ];

    /// Environment variable consulted for this field.
    pub fn env_var(self) -> &'static str {
        match self {
            Field::SlackUrl => "NOTIFY_SLACK_WEBHOOK_URL",
            Field::Token => "NOTIFY_SLACK_TOKEN",
            Field::Channel => "NOTIFY_SLACK_CHANNEL",
            Field::SnippetChannel => "NOTIFY_SLACK_SNIPPET_CHANNEL",
            Field::Username => "NOTIFY_SLACK_USERNAME",
            Field::IconEmoji => "NOTIFY_SLACK_ICON_EMOJI",
        }
    }

    /// Key looked up in the `[slack]` table for this field.
    pub fn toml_key(self) -> &'static str {
        match self {
            Field::SlackUrl => "url",
            Field::Token => "token",
            Field::Channel => "channel",
            Field::SnippetChannel => "snippet_channel",
            Field::Username => "username",
            Field::IconEmoji => "icon_emoji",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.toml_key())
    }
}
