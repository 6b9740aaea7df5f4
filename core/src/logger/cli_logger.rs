use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::{FormatKind, LoggerConfig};
use crate::error::LogError;

use super::{
    FileDevice, Formatter, LogDevice, LogRecord, Severity, Sink, StderrDevice, StdoutDevice,
};

pub const DEFAULT_LEVEL: Severity = Severity::Info;
pub const DEFAULT_ERROR_LEVEL: Severity = Severity::Warn;

/// Logger for user-facing CLI output.
///
/// Ordinary messages go to a primary device (stdout by default) and
/// error-type messages to a secondary device (stderr by default). When both
/// devices are terminals each message shows up exactly once: anything at or
/// above the error level goes only to the secondary device. When either device
/// is a file or a pipe, the primary device keeps a full record and the
/// secondary device mirrors everything at or above the error level.
///
/// ```no_run
/// use duolog_core::logger::{CliLogger, Severity};
///
/// let logger = CliLogger::new();
/// logger.info("starting up")?;      // stdout
/// logger.warn("careful!")?;         // stderr
///
/// logger.set_error_level(Severity::Error);
/// logger.warn("careful!")?;         // now stdout
/// # Ok::<(), duolog_core::error::LogError>(())
/// ```
#[derive(Debug)]
pub struct CliLogger {
    primary: Mutex<Sink>,
    secondary: Mutex<Sink>,
    split: bool,
}

fn lock(sink: &Mutex<Sink>) -> MutexGuard<'_, Sink> {
    sink.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CliLogger {
    /// Binds to the process stdout and stderr.
    pub fn new() -> Self {
        Self::with_devices(Box::new(StdoutDevice::new()), Box::new(StderrDevice::new()))
    }

    pub fn with_devices(primary: Box<dyn LogDevice>, secondary: Box<dyn LogDevice>) -> Self {
        let mut primary = Sink::new(primary, DEFAULT_LEVEL);
        let mut secondary = Sink::new(secondary, DEFAULT_ERROR_LEVEL);
        let split = primary.is_terminal() && secondary.is_terminal();

        if primary.is_terminal() {
            primary.set_formatter(Some(Formatter::blank()));
        }
        if secondary.is_terminal() {
            secondary.set_formatter(Some(Formatter::blank()));
        }

        tracing::debug!(
            split,
            primary_tty = primary.is_terminal(),
            secondary_tty = secondary.is_terminal(),
            "cli logger ready"
        );

        Self {
            primary: Mutex::new(primary),
            secondary: Mutex::new(secondary),
            split,
        }
    }

    /// Builds a logger from config: the primary device is `cfg.file` when
    /// set, stdout otherwise. The secondary device is always stderr.
    pub fn from_config(cfg: &LoggerConfig) -> Result<Self, LogError> {
        let primary: Box<dyn LogDevice> = match cfg.file.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => Box::new(FileDevice::open(path)?),
            _ => Box::new(StdoutDevice::new()),
        };
        Ok(Self::configured(primary, Box::new(StderrDevice::new()), cfg))
    }

    /// Applies `cfg` to explicit devices; `cfg.file` is ignored.
    pub fn configured(
        primary: Box<dyn LogDevice>,
        secondary: Box<dyn LogDevice>,
        cfg: &LoggerConfig,
    ) -> Self {
        let logger = Self::with_devices(primary, secondary);
        logger.set_level(cfg.level);
        logger.set_error_level(cfg.error_level);
        match cfg.format {
            FormatKind::Auto => {}
            FormatKind::Blank => logger.set_formatter(Formatter::blank()),
            FormatKind::Default => logger.set_formatter(None::<Formatter>),
        }
        if cfg.datetime_format.is_some() {
            logger.set_datetime_format(cfg.datetime_format.as_deref());
        }
        if cfg.progname.is_some() {
            logger.set_progname(cfg.progname.as_deref());
        }
        logger
    }

    /// Fixed at construction: true only when both devices are terminals.
    pub fn is_split(&self) -> bool {
        self.split
    }

    pub fn add(
        &self,
        severity: Severity,
        message: impl Into<String>,
        progname: Option<&str>,
    ) -> Result<(), LogError> {
        let record = LogRecord::new(severity, message, progname.map(str::to_string));
        self.dispatch(&record)
    }

    pub fn log(&self, severity: Severity, message: impl Into<String>) -> Result<(), LogError> {
        self.add(severity, message, None)
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(Severity::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(Severity::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(Severity::Warn, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(Severity::Error, message)
    }

    pub fn fatal(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(Severity::Fatal, message)
    }

    fn dispatch(&self, record: &LogRecord) -> Result<(), LogError> {
        // The secondary guard is held for the whole call so the error level
        // cannot change between routing and delivery. Lock order is always
        // secondary, then primary.
        let mut secondary = lock(&self.secondary);
        // In split mode the error level, not the primary level, decides
        // whether the primary device sees the record.
        if !self.split || record.severity() < secondary.threshold() {
            lock(&self.primary).log(record)?;
        }
        secondary.log(record)
    }

    /// Whether a record at `severity` would reach either device.
    pub fn enabled(&self, severity: Severity) -> bool {
        let secondary = lock(&self.secondary).accepts(severity);
        secondary || lock(&self.primary).accepts(severity)
    }

    pub fn level(&self) -> Severity {
        lock(&self.primary).threshold()
    }

    /// Primary device only; the error level is left alone.
    pub fn set_level(&self, level: Severity) {
        lock(&self.primary).set_threshold(level);
    }

    pub fn error_level(&self) -> Severity {
        lock(&self.secondary).threshold()
    }

    pub fn set_error_level(&self, level: Severity) {
        lock(&self.secondary).set_threshold(level);
    }

    /// Applies to both devices. Call [`CliLogger::set_error_formatter`]
    /// afterwards to give the secondary device its own format. `None`
    /// restores the decorated format.
    pub fn set_formatter(&self, formatter: impl Into<Option<Formatter>>) {
        let formatter = formatter.into();
        lock(&self.primary).set_formatter(formatter.clone());
        lock(&self.secondary).set_formatter(formatter);
    }

    pub fn set_error_formatter(&self, formatter: impl Into<Option<Formatter>>) {
        lock(&self.secondary).set_formatter(formatter.into());
    }

    /// Applies to both devices.
    pub fn set_datetime_format(&self, datetime_format: Option<&str>) {
        let datetime_format = datetime_format.map(str::to_string);
        lock(&self.primary).set_datetime_format(datetime_format.clone());
        lock(&self.secondary).set_datetime_format(datetime_format);
    }

    /// Applies to both devices.
    pub fn set_progname(&self, progname: Option<&str>) {
        let progname = progname.map(str::to_string);
        lock(&self.primary).set_progname(progname.clone());
        lock(&self.secondary).set_progname(progname);
    }
}

impl Default for CliLogger {
    fn default() -> Self {
        Self::new()
    }
}
