use crate::error::{Error, Result};
use config::{Config, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};

/// Default minimum composite index for a fuzzy match.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelinkConfig {
    /// Candidates scoring strictly below this are never auto-linked.
    pub threshold: f64,
    /// Glob patterns pruned while enumerating candidates.
    pub ignore_patterns: Vec<String>,
    pub follow_links: bool,
}

impl Default for RelinkConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            ignore_patterns: Vec::new(),
            follow_links: false,
        }
    }
}

impl RelinkConfig {
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)
    }
}

pub fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold(threshold))
    }
}

/// Load configuration from an optional `Config.*` file and `RELINK_*`
/// environment variables, on top of the built-in defaults.
pub fn load_configuration() -> Result<RelinkConfig> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(
            Environment::with_prefix("RELINK")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("ignore_patterns"),
        )
        .build()?;
    let config = builder.try_deserialize::<RelinkConfig>()?;
    config.validate()?;
    Ok(config)
}
