use serde::Deserialize;
use std::path::PathBuf;

/// ================================
/// Global service-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    /// directory the JSON files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// ask the provider for unassigned numbers only and trust its filter
    #[serde(default)]
    pub unassigned_only: bool,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
    /// stdout when absent
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn new (level: String, format: LogFormat, file: Option<PathBuf>) -> Self {
        Self { level, format, file }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact, None)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[serde(alias = "text")]
    Compact,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
