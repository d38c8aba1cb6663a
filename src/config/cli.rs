use crate::config::toml_config::CenterConfig;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "help-desk")]
#[command(about = "In-memory customer service request desk")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Promote customers whose request count exceeds this value
    #[arg(long)]
    pub frequent_threshold: Option<u32>,

    /// How reports are printed
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not wait for Enter after each action
    #[arg(long)]
    pub no_pause: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Loads the config file, if any, then applies command-line overrides.
    pub fn resolve(&self) -> Result<CenterConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                CenterConfig::from_file(path)?
            }
            None => CenterConfig::default(),
        };

        if let Some(threshold) = self.frequent_threshold {
            config.center.frequent_threshold = threshold;
            tracing::debug!("🔧 Frequent threshold overridden to: {}", threshold);
        }
        if let Some(format) = self.format {
            config.display.format = format;
        }
        if self.no_pause {
            config.display.pause = false;
        }

        Ok(config)
    }
}
