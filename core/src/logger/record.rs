use chrono::{DateTime, Local};

use super::Severity;

/// One log call. Built per call and dropped once the sinks have seen it.
#[derive(Debug, Clone)]
pub struct LogRecord {
    severity: Severity,
    message: String,
    progname: Option<String>,
    timestamp: DateTime<Local>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>, progname: Option<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            progname,
            timestamp: Local::now(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn progname(&self) -> Option<&str> {
        self.progname.as_deref()
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }
}
