//! Show subcommand: print the resolved settings.

use crate::config::{Config, ResolvedFile};
use crate::duration::format_duration;
use anyhow::Result;
use clap::Args;
use serde_json::{Value, json};
use std::io::Write;

/// Arguments for the show subcommand
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Output format: text (default) or json
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    pub format: ShowFormat,

    /// Print the token in full instead of masking it
    #[arg(long)]
    pub show_secrets: bool,
}

/// Output format for resolved settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ShowFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ShowFormat::Text),
            "json" => Ok(ShowFormat::Json),
            _ => Err(format!("Invalid format '{}'. Valid options: text, json", s)),
        }
    }
}

/// Hide everything after the token's type prefix, e.g. `xoxp-****`.
pub fn mask_token(token: &str) -> String {
    match token.find('-') {
        Some(idx) => format!("{}****", &token[..=idx]),
        None => "****".to_string(),
    }
}

/// Render settings as aligned `key: value` lines.
pub fn render_text(config: &Config, file: Option<&ResolvedFile>, show_secrets: bool) -> String {
    let token = config.token.as_deref().map(|t| {
        if show_secrets {
            t.to_string()
        } else {
            mask_token(t)
        }
    });
    let file = file
        .map(|f| format!("{} ({})", f.path.display(), f.source))
        .unwrap_or_else(|| "(none)".to_string());

    let rows: [(&str, Option<String>); 8] = [
        ("url", config.slack_url.clone()),
        ("token", token),
        ("primary_channel", config.primary_channel.clone()),
        ("channel", config.channel.clone()),
        ("snippet_channel", config.snippet_channel.clone()),
        ("username", config.username.clone()),
        ("icon_emoji", config.icon_emoji.clone()),
        ("interval", Some(format_duration(config.interval))),
    ];

    let mut out = format!("{:<16} {}\n", "file:", file);
    for (key, value) in rows {
        let value = value.unwrap_or_else(|| "(unset)".to_string());
        out.push_str(&format!("{:<16} {}\n", format!("{key}:"), value));
    }
    out
}

/// Render settings as a JSON object.
pub fn render_json(
    config: &Config,
    file: Option<&ResolvedFile>,
    show_secrets: bool,
) -> Result<Value> {
    let mut value = serde_json::to_value(config)?;
    if !show_secrets && let Some(token) = config.token.as_deref() {
        value["token"] = json!(mask_token(token));
    }
    value["file"] = match file {
        Some(f) => json!({
            "path": f.path.display().to_string(),
            "source": f.source.to_string(),
        }),
        None => Value::Null,
    };
    Ok(value)
}

/// Run the show command.
pub fn run_show(
    args: &ShowArgs,
    config: &Config,
    file: Option<&ResolvedFile>,
    out: &mut impl Write,
) -> Result<()> {
    match args.format {
        ShowFormat::Text => {
            out.write_all(render_text(config, file, args.show_secrets).as_bytes())?;
        }
        ShowFormat::Json => {
            let value = render_json(config, file, args.show_secrets)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}
