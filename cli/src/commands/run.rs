use std::io::Write;
use std::sync::Arc;

use duolog_core::exec::{CaptureStrategy, Command, ExecutionStrategy, Shell};
use duolog_core::logger::{CliLogger, Severity};

use super::cli::RunArgs;
use crate::error::CliError;

pub fn build_command(args: &RunArgs) -> Command {
    if args.shell {
        Command::shell(args.command.join(" "))
    } else {
        Command::argv(args.command.iter().cloned())
    }
}

/// `--json` output goes to `out`; everything else goes through `logger`.
pub async fn run<W>(args: RunArgs, logger: Arc<CliLogger>, out: &mut W) -> Result<i32, CliError>
where
    W: Write,
{
    let command = build_command(&args);

    if args.json {
        let output = CaptureStrategy::new().run_command(&command).await?;
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(output.exit_code.unwrap_or(-1));
    }

    let shell = Shell::new(logger.clone());
    let output = if args.checked {
        shell.sh_checked(command).await?
    } else {
        shell.sh_output(command).await?
    };
    // At debug level the shell already logged stdout.
    if !output.stdout.is_empty() && logger.level() > Severity::Debug {
        logger.info(output.stdout.as_str())?;
    }
    Ok(output.exit_code.unwrap_or(-1))
}
