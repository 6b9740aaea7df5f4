use std::fmt;

use crate::error::LogError;

use super::format::{default_format, DEFAULT_DATETIME_FORMAT};
use super::{FormatArgs, Formatter, LogDevice, LogRecord, Severity};

/// A single leveled channel: threshold, formatter and the device it owns.
pub struct Sink {
    device: Box<dyn LogDevice>,
    threshold: Severity,
    formatter: Option<Formatter>,
    datetime_format: Option<String>,
    progname: Option<String>,
}

impl Sink {
    /// No explicit formatter, so records get the decorated format.
    pub fn new(device: Box<dyn LogDevice>, threshold: Severity) -> Self {
        Self {
            device,
            threshold,
            formatter: None,
            datetime_format: None,
            progname: None,
        }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// `None` restores the decorated format.
    pub fn set_formatter(&mut self, formatter: Option<Formatter>) {
        self.formatter = formatter;
    }

    /// Only read by the decorated format; a custom formatter ignores it.
    pub fn set_datetime_format(&mut self, datetime_format: Option<String>) {
        self.datetime_format = datetime_format;
    }

    pub fn set_progname(&mut self, progname: Option<String>) {
        self.progname = progname;
    }

    pub fn is_terminal(&self) -> bool {
        self.device.is_terminal()
    }

    pub fn accepts(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    pub fn render(&self, record: &LogRecord) -> String {
        let args = FormatArgs::from_record(record, self.progname.as_deref());
        match &self.formatter {
            Some(f) => f.render(&args),
            None => default_format(
                &args,
                self.datetime_format
                    .as_deref()
                    .unwrap_or(DEFAULT_DATETIME_FORMAT),
            ),
        }
    }

    /// Below-threshold records are dropped without touching the device.
    pub fn log(&mut self, record: &LogRecord) -> Result<(), LogError> {
        if !self.accepts(record.severity()) {
            return Ok(());
        }
        let line = self.render(record);
        self.device.write_all(line.as_bytes())?;
        self.device.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("threshold", &self.threshold)
            .field("terminal", &self.device.is_terminal())
            .field("formatter", &self.formatter)
            .field("datetime_format", &self.datetime_format)
            .field("progname", &self.progname)
            .finish()
    }
}
