#[allow(clippy::module_inception)]
pub mod error;
pub mod exec;

pub use error::{ConfigError, LogError};
pub use exec::ExecError;
