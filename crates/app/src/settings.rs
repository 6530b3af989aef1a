//! Settings for the command line front end.
//!
//! Sources, lowest priority first: `config/pozo.toml` (or `--config`),
//! `POZO_*` environment variables, command line flags.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/pozo";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub level: String,
    pub format: OutputFormat,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: OutputFormat::Text,
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pozo")]
#[command(about = "Split a shared pool evenly and list who owes whom")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// CSV file with a `name,contribution` header.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    /// Add a participant, e.g. `--add Ana=12.50`. Repeatable.
    #[arg(long = "add", value_name = "NAME=AMOUNT")]
    pub add: Vec<String>,
    /// Override output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
    /// Override the currency symbol used in text output.
    #[arg(long)]
    pub currency_symbol: Option<String>,
}

pub fn load(args: &Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let builder = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(args.config.is_some()))
        .add_source(config::Environment::with_prefix("POZO"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(format) = args.format {
        settings.format = format;
    }
    if let Some(level) = &args.log_level {
        settings.level = level.clone();
    }
    if let Some(symbol) = &args.currency_symbol {
        settings.currency_symbol = symbol.clone();
    }

    Ok(settings)
}
