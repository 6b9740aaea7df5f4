use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::{CliLogger, Severity};

/// Routes `tracing` events through a [`CliLogger`], using the event target
/// as the progname.
#[derive(Debug, Clone)]
pub struct CliLoggerLayer {
    logger: Arc<CliLogger>,
}

impl CliLoggerLayer {
    pub fn new(logger: Arc<CliLogger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<CliLogger> {
        &self.logger
    }
}

impl<S> Layer<S> for CliLoggerLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let severity = Severity::from(*meta.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        // A layer has nowhere to report a failed write.
        let _ = self
            .logger
            .add(severity, visitor.finish(), Some(meta.target()));
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.message.is_empty() {
            return self.fields.trim_start().to_string();
        }
        let mut out = self.message;
        out.push_str(&self.fields);
        out
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{Formatter, MemoryDevice};
    use pretty_assertions::assert_eq;
    use tracing_subscriber::layer::SubscriberExt;

    fn captured() -> (Arc<CliLogger>, MemoryDevice, MemoryDevice) {
        let out = MemoryDevice::new();
        let err = MemoryDevice::new();
        let logger = CliLogger::with_devices(Box::new(out.clone()), Box::new(err.clone()));
        logger.set_formatter(Formatter::new(|args| {
            format!(
                "{} {} {}\n",
                args.severity,
                args.progname.unwrap_or("-"),
                args.message
            )
        }));
        (Arc::new(logger), out, err)
    }

    #[test]
    fn events_are_delivered_with_target_and_fields() {
        let (logger, out, err) = captured();
        let subscriber = tracing_subscriber::registry().with(CliLoggerLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "app", "not shown");
            tracing::info!(target: "app", "started");
            tracing::warn!(target: "app::disk", free_mb = 12, "disk low");
        });

        assert_eq!(
            out.contents(),
            "INFO app started\nWARN app::disk disk low free_mb=12\n"
        );
        assert_eq!(err.contents(), "WARN app::disk disk low free_mb=12\n");
    }

    #[test]
    fn event_without_message_keeps_fields() {
        let (logger, out, _err) = captured();
        let subscriber = tracing_subscriber::registry().with(CliLoggerLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "app", user = "ana", retries = 2);
        });

        assert_eq!(out.contents(), "INFO app user=ana retries=2\n");
    }
}
