#![allow(dead_code)]

use std::io::{self, Write};

use duolog_core::logger::{CliLogger, LogDevice, MemoryDevice};

pub struct Devices {
    pub out: MemoryDevice,
    pub err: MemoryDevice,
}

/// Logger over two in-memory devices with the given terminal flags.
pub fn logger(out_tty: bool, err_tty: bool) -> (CliLogger, Devices) {
    let out = device(out_tty);
    let err = device(err_tty);
    let logger = CliLogger::with_devices(Box::new(out.clone()), Box::new(err.clone()));
    (logger, Devices { out, err })
}

fn device(tty: bool) -> MemoryDevice {
    if tty {
        MemoryDevice::terminal()
    } else {
        MemoryDevice::new()
    }
}

/// A device whose writes always fail, like a closed pipe.
pub struct BrokenPipe {
    pub terminal: bool,
}

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogDevice for BrokenPipe {
    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
