//! Running external commands and capturing what they print.

mod capture;
mod shell;
mod traits;
mod types;

pub use capture::CaptureStrategy;
pub use shell::{Shell, NOT_FOUND_EXIT_CODE};
pub use traits::ExecutionStrategy;
pub use types::{chomp, Command, CommandOutput, Program};
