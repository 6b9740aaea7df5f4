use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("log write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("logger setup failed: {0}")]
    Log(#[from] LogError),
}
