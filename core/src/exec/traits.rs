use async_trait::async_trait;

use crate::error::ExecError;

use super::types::{Command, CommandOutput};

/// How external commands get run.
#[async_trait]
pub trait ExecutionStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Runs `command` to completion and captures both output streams.
    async fn run_command(&self, command: &Command) -> Result<CommandOutput, ExecError>;

    /// Whether `err` means the program does not exist.
    fn is_command_not_found(&self, err: &ExecError) -> bool {
        err.is_not_found()
    }
}
