//! Notifier settings resolution.
//!
//! Settings come from two sources, applied in the caller's order:
//! 1. **File** - the `[slack]` table of a TOML file
//! 2. **Environment** - `NOTIFY_SLACK_*` variables
//!
//! ## Precedence
//! - String fields: first writer wins. A field set by the caller or an earlier
//!   source is never overwritten.
//! - Interval: last writer wins. Every source that supplies it overwrites it.
//!
//! ## Environment Variables
//! - `NOTIFY_SLACK_WEBHOOK_URL` - Incoming-webhook URL
//! - `NOTIFY_SLACK_TOKEN` - API token
//! - `NOTIFY_SLACK_CHANNEL` - Target channel
//! - `NOTIFY_SLACK_SNIPPET_CHANNEL` - Channel for snippet uploads
//! - `NOTIFY_SLACK_USERNAME` - Display name
//! - `NOTIFY_SLACK_ICON_EMOJI` - Display icon
//! - `NOTIFY_SLACK_INTERVAL` - Polling interval, e.g. `2s` or `1h30m`

mod document;
mod env;
mod files;
mod loader;
mod types;

pub use document::{FieldValue, SLACK_SECTION, SlackTable};
pub use env::{EnvSource, INTERVAL_VAR, MapEnv, ProcessEnv};
pub use files::{ETC_FILE, FileSource, HOME_DOTFILE, ResolvedFile, SYSTEM_FILE, SearchPaths};
pub use loader::ConfigResolver;
pub use types::{Config, Field};
