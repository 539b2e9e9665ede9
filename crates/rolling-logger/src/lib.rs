//! Rolling Logger
//!
//! `tracing` subscriber that writes to stderr and to a log file holding only
//! the most recent lines. `log` records are captured as well.
//!
//! The file is backed by an in-memory circular buffer of `capacity` lines.
//! New lines are appended to the file; once `capacity` lines have been
//! appended since the last rewrite, the file is rewritten from the buffer, so
//! it never grows past twice the capacity.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Lines kept by [`init_logger`]
pub const DEFAULT_CAPACITY: usize = 2000;

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

struct Ring {
    path: PathBuf,
    lines: VecDeque<String>,
    capacity: usize,
    pending: Vec<u8>,
    appended: usize,
}

impl Ring {
    fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    fn rewrite(&mut self) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        for line in &self.lines {
            writeln!(file, "{}", line)?;
        }
        self.appended = 0;
        Ok(())
    }

    fn append(&mut self, line: String) -> io::Result<()> {
        if self.appended >= self.capacity {
            self.push(line);
            return self.rewrite();
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        self.push(line);
        self.appended += 1;
        Ok(())
    }
}

/// Log file capped to the most recent lines.
///
/// Cheap to clone; clones share the same buffer.
#[derive(Clone)]
pub struct RollingFile {
    inner: Arc<Mutex<Ring>>,
}

impl RollingFile {
    /// Open `path`, keeping the tail of any existing content.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> io::Result<Self> {
        let mut ring = Ring {
            path: path.into(),
            lines: VecDeque::new(),
            capacity: capacity.max(1),
            pending: Vec::new(),
            appended: 0,
        };

        if ring.path.exists() {
            for line in BufReader::new(File::open(&ring.path)?).lines() {
                ring.push(line?);
            }
        }
        ring.rewrite()?;

        Ok(Self {
            inner: Arc::new(Mutex::new(ring)),
        })
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(ring) => ring.lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().lines.iter().cloned().collect(),
        }
    }

    pub fn path(&self) -> PathBuf {
        match self.inner.lock() {
            Ok(ring) => ring.path.clone(),
            Err(poisoned) => poisoned.into_inner().path.clone(),
        }
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut ring = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("rolling log lock poisoned"))?;

        ring.pending.extend_from_slice(buf);
        while let Some(pos) = ring.pending.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = ring.pending.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw[..raw.len() - 1]).into_owned();
            ring.append(line)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Directives used when `RUST_LOG` is unset or unparsable
const DEFAULT_DIRECTIVES: &str = "info";

/// Filter from `RUST_LOG` directives (`info`, `todo_app_lib=debug`, ...)
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber, logging to `<log_dir>/<app_name>.log`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<RollingFile, String> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir).map_err(|e| format!("Failed to create log dir: {}", e))?;

    let file = RollingFile::open(log_dir.join(format!("{}.log", app_name)), DEFAULT_CAPACITY)
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime)
                .with_writer(io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime)
                .with_ansi(false)
                .with_writer(file.clone()),
        )
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    log::info!("{} logging to {}", app_name, file.path().display());
    Ok(file)
}
