//! notify-slack configuration library
//!
//! Resolves webhook, token, channel and display settings for the notifier
//! from a TOML file and the process environment.

pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
