use thiserror::Error;

/// Errors from running external commands.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("spawn failed for '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("stream io error: {stream} {source}")]
    StreamIo {
        stream: &'static str,
        source: std::io::Error,
    },

    #[error("command '{command}' exited with {}", describe_exit(*exit_code))]
    Failed {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("waiting for '{command}' failed: {source}")]
    Wait {
        command: String,
        source: std::io::Error,
    },

    #[error("log write failed: {0}")]
    Log(#[from] super::LogError),

    #[error("empty command")]
    EmptyCommand,
}

impl ExecError {
    /// True when the program itself could not be located.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Spawn { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
