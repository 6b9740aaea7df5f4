use duolog_core::error::{ConfigError, ExecError, LogError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Log(#[from] LogError),
    #[error("{0}")]
    Exec(#[from] ExecError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

// 0: success
// 11: config error (including an unopenable log file)
// 20: spawn / IO error
// 1: internal/uncategorized
// A checked command that fails keeps the child's exit code.
pub fn exit_code_for_error(e: &CliError) -> i32 {
    match e {
        CliError::Config(_) => 11,
        CliError::Log(LogError::Open { .. }) => 11,
        CliError::Log(LogError::Io(_)) => 20,
        CliError::Exec(ee) => match ee {
            ExecError::Failed { exit_code, .. } => exit_code.unwrap_or(1),
            ExecError::Spawn { .. } | ExecError::StreamIo { .. } | ExecError::Wait { .. } => 20,
            ExecError::Log(_) => 20,
            ExecError::EmptyCommand => 1,
        },
        CliError::Json(_) => 1,
        CliError::Io(_) => 20,
        CliError::Anyhow(_) => 1,
    }
}
