mod common;

use duolog_core::error::LogError;
use duolog_core::logger::{CliLogger, FileDevice, Formatter, MemoryDevice, Severity};
use pretty_assertions::assert_eq;

use common::{logger, BrokenPipe};

#[test]
fn split_mode_sends_low_severities_to_primary_only() {
    let (logger, dev) = logger(true, true);
    logger.set_level(Severity::Debug);

    for severity in [Severity::Debug, Severity::Info] {
        logger.log(severity, "m").unwrap();
        assert_eq!(dev.out.take(), "m\n", "{severity}");
        assert!(dev.err.is_empty(), "{severity}");
    }
}

#[test]
fn split_mode_sends_high_severities_to_secondary_only() {
    let (logger, dev) = logger(true, true);

    for severity in [Severity::Warn, Severity::Error, Severity::Fatal] {
        logger.log(severity, "m").unwrap();
        assert!(dev.out.is_empty(), "{severity}");
        assert_eq!(dev.err.take(), "m\n", "{severity}");
    }
}

#[test]
fn split_mode_routing_ignores_primary_level() {
    let (logger, dev) = logger(true, true);
    logger.set_level(Severity::Fatal);
    logger.info("dropped").unwrap();
    logger.error("boom").unwrap();

    assert!(dev.out.is_empty());
    assert_eq!(dev.err.contents(), "boom\n");
}

#[test]
fn mirror_mode_evaluates_each_threshold_independently() {
    for (out_tty, err_tty) in [(false, false), (true, false), (false, true)] {
        let (logger, dev) = logger(out_tty, err_tty);
        assert!(!logger.is_split());
        logger.set_formatter(Formatter::blank());
        logger.set_level(Severity::Error);
        logger.set_error_level(Severity::Info);

        // Neither
        logger.debug("a").unwrap();
        // Secondary only
        logger.info("b").unwrap();
        logger.warn("c").unwrap();
        // Both
        logger.error("d").unwrap();

        assert_eq!(dev.out.contents(), "d\n");
        assert_eq!(dev.err.contents(), "b\nc\nd\n");
    }
}

#[test]
fn mirror_mode_primary_only_below_error_level() {
    let (logger, dev) = logger(false, false);
    logger.set_formatter(Formatter::blank());
    logger.info("x").unwrap();

    assert_eq!(dev.out.contents(), "x\n");
    assert!(dev.err.is_empty());
}

#[test]
fn default_thresholds_on_terminals() {
    let (logger, dev) = logger(true, true);
    logger.info("x").unwrap();
    assert_eq!(dev.out.take(), "x\n");
    assert!(dev.err.is_empty());

    logger.warn("x").unwrap();
    assert!(dev.out.is_empty());
    assert_eq!(dev.err.take(), "x\n");
}

#[test]
fn default_thresholds_off_terminals_duplicate_warnings() {
    let (logger, dev) = logger(false, false);
    logger.warn("x").unwrap();

    assert!(dev.out.contents().contains(" WARN -- : x\n"));
    assert!(dev.err.contents().contains(" WARN -- : x\n"));
}

#[test]
fn formatter_propagates_but_error_formatter_does_not() {
    let (logger, dev) = logger(false, false);
    logger.set_formatter(Formatter::new(|args| format!("F:{}\n", args.message)));
    logger.error("one").unwrap();
    assert_eq!(dev.out.take(), "F:one\n");
    assert_eq!(dev.err.take(), "F:one\n");

    logger.set_error_formatter(Formatter::new(|args| format!("G:{}\n", args.message)));
    logger.error("two").unwrap();
    assert_eq!(dev.out.take(), "F:two\n");
    assert_eq!(dev.err.take(), "G:two\n");
}

#[test]
fn later_formatter_overrides_error_formatter() {
    let (logger, dev) = logger(false, false);
    logger.set_error_formatter(Formatter::new(|args| format!("G:{}\n", args.message)));
    logger.set_formatter(Formatter::new(|args| format!("F:{}\n", args.message)));
    logger.error("x").unwrap();

    assert_eq!(dev.err.contents(), "F:x\n");
}

#[test]
fn datetime_format_propagates_to_secondary() {
    let (logger, dev) = logger(false, false);
    logger.set_datetime_format(Some("<%Y>"));
    logger.error("x").unwrap();

    assert!(dev.out.contents().contains(" [<"));
    assert!(dev.err.contents().contains(" [<"));
}

#[test]
fn terminal_pair_error_goes_to_stderr_only() {
    let (logger, dev) = logger(true, true);
    assert!(logger.is_split());
    logger.error("boom").unwrap();

    assert_eq!(dev.err.contents(), "boom\n");
    assert!(dev.out.is_empty());
}

#[test]
fn file_primary_with_terminal_stderr_mirrors_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let err = MemoryDevice::terminal();
    let logger = CliLogger::with_devices(
        Box::new(FileDevice::open(&path).unwrap()),
        Box::new(err.clone()),
    );
    assert!(!logger.is_split());

    logger.warn("careful").unwrap();

    let file = std::fs::read_to_string(&path).unwrap();
    assert!(file.starts_with("W, ["), "{file}");
    assert!(
        file.ends_with(&format!(" #{}]  WARN -- : careful\n", std::process::id())),
        "{file}"
    );
    assert_eq!(err.contents(), "careful\n");
}

#[test]
fn setters_are_idempotent() {
    let once = logger(false, false);
    let twice = logger(false, false);
    let f = Formatter::new(|args| format!("{}|{}\n", args.severity, args.message));

    once.0.set_formatter(f.clone());
    once.0.set_error_level(Severity::Error);
    once.0.set_level(Severity::Debug);

    for _ in 0..2 {
        twice.0.set_formatter(f.clone());
        twice.0.set_error_level(Severity::Error);
        twice.0.set_level(Severity::Debug);
    }

    for (logger, _) in [&once, &twice] {
        for severity in Severity::ALL {
            logger.log(severity, "m").unwrap();
        }
    }

    assert_eq!(once.1.out.contents(), twice.1.out.contents());
    assert_eq!(once.1.err.contents(), twice.1.err.contents());
}

#[test]
fn write_failures_propagate() {
    let logger = CliLogger::with_devices(
        Box::new(BrokenPipe { terminal: false }),
        Box::new(MemoryDevice::new()),
    );
    let err = logger.info("lost").unwrap_err();
    assert!(matches!(err, LogError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe));
}

#[test]
fn below_threshold_never_touches_a_broken_device() {
    let logger = CliLogger::with_devices(
        Box::new(MemoryDevice::new()),
        Box::new(BrokenPipe { terminal: false }),
    );
    logger.info("fine").unwrap();
    assert!(logger.warn("lost").is_err());
}

#[test]
fn per_call_progname_is_rendered() {
    let (logger, dev) = logger(false, false);
    logger.add(Severity::Info, "syncing", Some("worker")).unwrap();

    assert!(dev.out.contents().ends_with("INFO -- worker: syncing\n"));
}
