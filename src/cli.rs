#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "croissy-weather",
    version,
    about = "Terminal weather dashboard for Croissy-sur-Seine"
)]
pub struct Cli {
    /// Target FPS for the loading animation (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Override the forecast API endpoint
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the forecast to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(url) = &self.forecast_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            anyhow::bail!("--forecast-url must be an http(s) URL, got {url}");
        }
        Ok(())
    }
}
