use serde::{Deserialize, Serialize};

use crate::logger::{Severity, DEFAULT_ERROR_LEVEL, DEFAULT_LEVEL};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggerConfig,
}

/// Which formatter the logger starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Blank on terminals, decorated elsewhere.
    #[default]
    Auto,
    Blank,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_level")]
    pub level: Severity,

    #[serde(default = "default_error_level")]
    pub error_level: Severity,

    /// Log file used as the primary device. Stdout when unset.
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default)]
    pub format: FormatKind,

    /// strftime pattern for the decorated format.
    #[serde(default)]
    pub datetime_format: Option<String>,

    #[serde(default)]
    pub progname: Option<String>,
}

fn default_level() -> Severity {
    DEFAULT_LEVEL
}

fn default_error_level() -> Severity {
    DEFAULT_ERROR_LEVEL
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            error_level: default_error_level(),
            file: None,
            format: FormatKind::default(),
            datetime_format: None,
            progname: None,
        }
    }
}
