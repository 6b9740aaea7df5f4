use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use duolog_core::config::{FormatKind, LoggerConfig};
use duolog_core::logger::Severity;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Auto,
    Blank,
    Default,
}

impl From<FormatArg> for FormatKind {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Auto => FormatKind::Auto,
            FormatArg::Blank => FormatKind::Blank,
            FormatArg::Default => FormatKind::Default,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "duolog", version, about = "Terminal-aware logging and command capture")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file; defaults to ~/.duolog/config.toml, then ./duolog.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimum severity for the primary device.
    #[arg(long, global = true)]
    pub log_level: Option<Severity>,

    /// Minimum severity for stderr.
    #[arg(long, global = true)]
    pub error_level: Option<Severity>,

    /// Write the primary stream to this file instead of stdout.
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,
}

impl Args {
    /// Command-line flags win over the config file.
    pub fn apply_to(&self, cfg: &mut LoggerConfig) {
        if let Some(level) = self.log_level {
            cfg.level = level;
        }
        if let Some(level) = self.error_level {
            cfg.error_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.file = Some(file.clone());
        }
        if let Some(format) = self.format {
            cfg.format = format.into();
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct LogArgs {
    #[arg(long, default_value = "info")]
    pub level: Severity,

    #[arg(required = true)]
    pub message: Vec<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RunArgs {
    /// Fail when the command exits non-zero.
    #[arg(long)]
    pub checked: bool,

    /// Print the captured stdout/stderr/exit code as JSON instead of logging.
    #[arg(long)]
    pub json: bool,

    /// Join the arguments and run them through the platform shell.
    #[arg(long)]
    pub shell: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a message through the dual-sink logger.
    Log(LogArgs),
    /// Run a command and log what it printed.
    Run(RunArgs),
}
