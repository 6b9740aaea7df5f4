//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `duolog_core::api` instead of reaching into internal modules.

pub use crate::config::{load_default, load_from, AppConfig, FormatKind, LoggerConfig};
pub use crate::error::{ConfigError, ExecError, LogError};
pub use crate::exec::{
    CaptureStrategy, Command, CommandOutput, ExecutionStrategy, Shell, NOT_FOUND_EXIT_CODE,
};
pub use crate::logger::{
    CliLogger, CliLoggerLayer, FileDevice, FormatArgs, Formatter, LogDevice, MemoryDevice,
    Severity, StderrDevice, StdoutDevice,
};
