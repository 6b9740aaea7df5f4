use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::logger::Severity;

use super::types::AppConfig;

pub const ENV_LOG_LEVEL: &str = "DUOLOG_LOG_LEVEL";
pub const ENV_ERROR_LEVEL: &str = "DUOLOG_ERROR_LEVEL";

/// `~/.duolog`, when a home directory is known.
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".duolog"))
}

pub fn load_default() -> Result<AppConfig, ConfigError> {
    // Priority 1: ~/.duolog/config.toml
    let user_config = get_data_dir()
        .map(|dir| dir.join("config.toml"))
        .filter(|p| p.exists());

    // Priority 2: ./duolog.toml
    let local_config = Path::new("duolog.toml");

    let mut cfg = match user_config {
        Some(path) => load_from(&path)?,
        None if local_config.exists() => load_from(local_config)?,
        None => AppConfig::default(),
    };

    apply_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse(&s)
}

pub fn parse(s: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str::<AppConfig>(s)?)
}

/// Applies level overrides read through `lookup`. Blank values are ignored.
pub fn apply_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(level) = lookup_level(&lookup, ENV_LOG_LEVEL)? {
        cfg.logging.level = level;
    }
    if let Some(level) = lookup_level(&lookup, ENV_ERROR_LEVEL)? {
        cfg.logging.error_level = level;
    }
    Ok(())
}

fn lookup_level<F>(lookup: &F, key: &'static str) -> Result<Option<Severity>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) if !v.trim().is_empty() => v
            .parse::<Severity>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
        _ => Ok(None),
    }
}
