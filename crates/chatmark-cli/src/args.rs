use std::{path::PathBuf, str::FromStr};

use chatmark_engine::ClockTime;
use clap::{ArgGroup, Parser, ValueHint};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Html,
    Json,
    Preview,
}

#[derive(Debug, Parser)]
#[command(name = "chatmark-cli", version)]
#[command(about = "Render chat markup as HTML, JSON or a terminal preview", long_about = None)]
#[command(group(ArgGroup::new("mode").args(["html", "json", "preview"])))]
pub struct Args {
    /// Print the thread as chat-bubble HTML (default)
    #[arg(long)]
    html: bool,

    /// Print the parsed thread as JSON
    #[arg(long)]
    json: bool,

    /// Open an interactive terminal preview
    #[arg(long)]
    preview: bool,

    /// Default time for messages without a valid [time:…] tag
    #[arg(long, value_name = "HH:MM", value_parser = ClockTime::from_str)]
    pub at: Option<ClockTime>,

    /// Write the current settings, with FILE as the input path, to the config
    /// file and exit
    #[arg(long, conflicts_with = "mode")]
    pub save_config: bool,

    /// Chat file to read; falls back to the configured input path, then stdin
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

impl Args {
    pub fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.preview {
            OutputMode::Preview
        } else {
            OutputMode::Html
        }
    }
}
