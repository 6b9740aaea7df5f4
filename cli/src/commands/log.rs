use duolog_core::logger::CliLogger;

use super::cli::LogArgs;
use crate::error::CliError;

pub fn run(args: &LogArgs, logger: &CliLogger) -> Result<i32, CliError> {
    logger.log(args.level, args.message.join(" "))?;
    Ok(0)
}
