//! Leveled logging for command-line programs: severities, formatters,
//! devices, single sinks and the dual-sink [`CliLogger`].

mod cli_logger;
mod device;
pub mod format;
mod layer;
mod record;
mod severity;
mod sink;

pub use cli_logger::{CliLogger, DEFAULT_ERROR_LEVEL, DEFAULT_LEVEL};
pub use device::{FileDevice, LogDevice, MemoryDevice, StderrDevice, StdoutDevice};
pub use format::{FormatArgs, Formatter};
pub use layer::CliLoggerLayer;
pub use record::LogRecord;
pub use severity::{ParseSeverityError, Severity};
pub use sink::Sink;
