use std::sync::Arc;

use crate::error::ExecError;
use crate::logger::CliLogger;

use super::types::{Command, CommandOutput};
use super::{CaptureStrategy, ExecutionStrategy};

/// Exit code reported when the program could not be found.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Runs commands through an [`ExecutionStrategy`] and reports what happened
/// on a [`CliLogger`].
#[derive(Clone)]
pub struct Shell {
    strategy: Arc<dyn ExecutionStrategy>,
    logger: Arc<CliLogger>,
}

impl Shell {
    pub fn new(logger: Arc<CliLogger>) -> Self {
        Self::with_strategy(Arc::new(CaptureStrategy::new()), logger)
    }

    pub fn with_strategy(strategy: Arc<dyn ExecutionStrategy>, logger: Arc<CliLogger>) -> Self {
        Self { strategy, logger }
    }

    pub fn logger(&self) -> &Arc<CliLogger> {
        &self.logger
    }

    /// Runs `command` and returns its exit code, `-1` when it was killed by
    /// a signal and [`NOT_FOUND_EXIT_CODE`] when the program is missing.
    pub async fn sh(&self, command: impl Into<Command>) -> Result<i32, ExecError> {
        let output = self.sh_output(command).await?;
        Ok(output.exit_code.unwrap_or(-1))
    }

    /// Like [`Shell::sh`] but any non-zero exit is an error.
    pub async fn sh_checked(&self, command: impl Into<Command>) -> Result<CommandOutput, ExecError> {
        let command = command.into();
        let output = self.sh_output(command.clone()).await?;
        if !output.success() {
            return Err(ExecError::Failed {
                command: command.to_string(),
                exit_code: output.exit_code,
            });
        }
        Ok(output)
    }

    /// Runs and logs `command`, returning everything it captured.
    pub async fn sh_output(&self, command: impl Into<Command>) -> Result<CommandOutput, ExecError> {
        let command = command.into();
        let shown = command.to_string();
        self.logger.debug(format!("Executing '{shown}'"))?;

        let output = match self.strategy.run_command(&command).await {
            Ok(output) => output,
            Err(err) if self.strategy.is_command_not_found(&err) => {
                self.logger.error(format!("Error running '{shown}': {err}"))?;
                return Ok(CommandOutput {
                    stdout: String::new(),
                    stderr: err.to_string(),
                    exit_code: Some(NOT_FOUND_EXIT_CODE),
                });
            }
            Err(err) => return Err(err),
        };

        if !output.stdout.trim().is_empty() {
            self.logger
                .debug(format!("Output of '{shown}': {}", output.stdout))?;
        }
        if !output.stderr.trim().is_empty() {
            let line = format!("Error output of '{shown}': {}", output.stderr);
            if output.success() {
                self.logger.info(line)?;
            } else {
                self.logger.warn(line)?;
            }
        }
        Ok(output)
    }
}
