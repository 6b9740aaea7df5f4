use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::LogError;

/// A byte stream a sink writes rendered lines into.
pub trait LogDevice: Write + Send {
    /// Whether the stream is an interactive terminal.
    fn is_terminal(&self) -> bool;
}

#[derive(Debug)]
pub struct StdoutDevice {
    out: io::Stdout,
}

impl StdoutDevice {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.out.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.lock().flush()
    }
}

impl LogDevice for StdoutDevice {
    fn is_terminal(&self) -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

#[derive(Debug)]
pub struct StderrDevice {
    err: io::Stderr,
}

impl StderrDevice {
    pub fn new() -> Self {
        Self { err: io::stderr() }
    }
}

impl Default for StderrDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StderrDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.err.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.err.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.err.lock().flush()
    }
}

impl LogDevice for StderrDevice {
    fn is_terminal(&self) -> bool {
        atty::is(atty::Stream::Stderr)
    }
}

/// Append-mode log file.
#[derive(Debug)]
pub struct FileDevice {
    path: PathBuf,
    file: File,
}

impl FileDevice {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl LogDevice for FileDevice {
    fn is_terminal(&self) -> bool {
        self.file.is_terminal()
    }
}

/// Shared in-memory buffer. Clones write into the same bytes, so a caller can
/// hand one clone to a logger and read the other back.
#[derive(Debug, Clone, Default)]
pub struct MemoryDevice {
    buf: Arc<Mutex<Vec<u8>>>,
    terminal: bool,
}

impl MemoryDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer that reports itself as an interactive terminal.
    pub fn terminal() -> Self {
        Self {
            buf: Arc::default(),
            terminal: true,
        }
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn take(&self) -> String {
        let mut buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        let out = String::from_utf8_lossy(&buf).into_owned();
        buf.clear();
        out
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }
}

impl Write for MemoryDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogDevice for MemoryDevice {
    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
