use crate::core::center::DEFAULT_FREQUENT_THRESHOLD;
use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CENTER_NAME: &str = "Customer Service";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterConfig {
    pub center: CenterSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterSection {
    pub name: String,
    pub frequent_threshold: u32,
}

impl Default for CenterSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_CENTER_NAME.to_string(),
            frequent_threshold: DEFAULT_FREQUENT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub format: OutputFormat,
    /// Wait for Enter after each menu action.
    pub pause: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pause: true,
        }
    }
}

impl CenterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for CenterConfig {
    fn center_name(&self) -> &str {
        &self.center.name
    }

    fn frequent_threshold(&self) -> u32 {
        self.center.frequent_threshold
    }

    fn output_format(&self) -> OutputFormat {
        self.display.format
    }

    fn pause_after_action(&self) -> bool {
        self.display.pause
    }
}

impl Validate for CenterConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("center.name", &self.center.name)?;
        validate_positive_number("center.frequent_threshold", self.center.frequent_threshold, 1)?;
        Ok(())
    }
}
