use std::fmt::{self, Write as _};
use std::sync::Arc;

use chrono::{DateTime, Local};

use super::{LogRecord, Severity};

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Borrowed view of a record handed to a [`Formatter`].
#[derive(Debug, Clone, Copy)]
pub struct FormatArgs<'a> {
    pub severity: Severity,
    pub timestamp: &'a DateTime<Local>,
    pub progname: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> FormatArgs<'a> {
    pub fn from_record(record: &'a LogRecord, progname: Option<&'a str>) -> Self {
        // A per-call progname wins over the sink default.
        let progname = record.progname().or(progname);
        Self {
            severity: record.severity(),
            timestamp: record.timestamp(),
            progname,
            message: record.message(),
        }
    }
}

type FormatFn = dyn Fn(&FormatArgs<'_>) -> String + Send + Sync;

/// Renders a record into the exact bytes a sink writes, newline included.
#[derive(Clone)]
pub struct Formatter {
    inner: Arc<FormatFn>,
}

impl Formatter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&FormatArgs<'_>) -> String + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Message and newline, nothing else.
    pub fn blank() -> Self {
        Self::new(blank_format)
    }

    pub fn render(&self, args: &FormatArgs<'_>) -> String {
        (self.inner)(args)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter").finish_non_exhaustive()
    }
}

pub fn blank_format(args: &FormatArgs<'_>) -> String {
    let mut out = String::with_capacity(args.message.len() + 1);
    out.push_str(args.message);
    out.push('\n');
    out
}

/// `I, [2024-05-01T09:30:00.000123 #4242]  INFO -- app: message`
pub fn default_format(args: &FormatArgs<'_>, datetime_format: &str) -> String {
    let datetime = format_datetime(args.timestamp, datetime_format);
    format!(
        "{}, [{} #{}] {:>5} -- {}: {}\n",
        args.severity.initial(),
        datetime,
        std::process::id(),
        args.severity,
        args.progname.unwrap_or(""),
        args.message
    )
}

/// Falls back to [`DEFAULT_DATETIME_FORMAT`] when `datetime_format` is not a
/// valid strftime pattern.
pub fn format_datetime(ts: &DateTime<Local>, datetime_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", ts.format(datetime_format)).is_ok() {
        return out;
    }
    out.clear();
    let _ = write!(out, "{}", ts.format(DEFAULT_DATETIME_FORMAT));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn blank_is_message_and_newline() {
        let ts = at_noon();
        let args = FormatArgs {
            severity: Severity::Error,
            timestamp: &ts,
            progname: Some("app"),
            message: "boom",
        };
        assert_eq!(blank_format(&args), "boom\n");
    }

    #[test]
    fn default_format_carries_severity_time_and_progname() {
        let ts = at_noon();
        let args = FormatArgs {
            severity: Severity::Warn,
            timestamp: &ts,
            progname: Some("app"),
            message: "careful",
        };
        let line = default_format(&args, "%Y-%m-%d %H:%M:%S");
        let expected = format!(
            "W, [2024-05-01 12:00:00 #{}]  WARN -- app: careful\n",
            std::process::id()
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn invalid_datetime_format_falls_back() {
        let ts = at_noon();
        let rendered = format_datetime(&ts, "%Q%");
        assert!(rendered.starts_with("2024-05-01T12:00:00."));
    }
}
