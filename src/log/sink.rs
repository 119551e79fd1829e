//! Output sinks.
//!
//! A sink receives fully rendered [`LogLine`]s. It never reports failure back
//! to the emitter; write errors are dropped.

use std::io::{self, Write};

use crossbeam_queue::SegQueue;

use super::level::LogLevel;
use super::line::LogLine;
use crate::sync::mutex::Mutex;

/// Standard stream a line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// Route a level to its standard stream.
///
/// Error-class levels go to stderr, everything else to stdout.
#[inline]
pub const fn route(level: LogLevel) -> Destination {
    if level.is_error_class() {
        Destination::Stderr
    } else {
        Destination::Stdout
    }
}

/// Receiver for rendered log lines.
pub trait LogSink: Send + Sync {
    /// Write one rendered line.
    fn write_line(&self, level: LogLevel, line: &LogLine);
}

impl<S: LogSink + ?Sized> LogSink for std::sync::Arc<S> {
    fn write_line(&self, level: LogLevel, line: &LogLine) {
        (**self).write_line(level, line)
    }
}

/// Writes to stdout or stderr according to [`route`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, level: LogLevel, line: &LogLine) {
        match route(level) {
            Destination::Stderr => write_to(&mut io::stderr().lock(), line),
            Destination::Stdout => write_to(&mut io::stdout().lock(), line),
        }
    }
}

fn write_to(out: &mut impl Write, line: &LogLine) {
    let _ = out.write_all(line.as_bytes());
    let _ = out.write_all(b"\n");
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    #[inline]
    fn write_line(&self, _level: LogLevel, _line: &LogLine) {}
}

/// Serializes lines into any writer, one `\n`-terminated line at a time.
///
/// Levels are not routed; everything goes to the one writer. The writer must
/// not log non-fatal lines itself: the lock is already held. Fatal lines
/// raised inside the writer bypass this sink.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Return the inner writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, _level: LogLevel, line: &LogLine) {
        let mut writer = self.writer.lock();
        write_to(&mut *writer, line);
        let _ = writer.flush();
    }
}

/// A line recorded by [`CaptureSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    /// Severity the line was emitted at.
    pub level: LogLevel,
    /// Stream the console sink would have used.
    pub destination: Destination,
    /// Rendered text, tag included.
    pub text: String,
}

/// Records lines in memory instead of writing them.
///
/// Backed by a lock-free queue, so concurrent emitters never block each other.
#[derive(Default)]
pub struct CaptureSink {
    lines: SegQueue<CapturedLine>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every captured line, oldest first.
    pub fn take(&self) -> Vec<CapturedLine> {
        std::iter::from_fn(|| self.lines.pop()).collect()
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, level: LogLevel, line: &LogLine) {
        self.lines.push(CapturedLine {
            level,
            destination: route(level),
            text: line.as_str().to_owned(),
        });
    }
}

/// Forwards lines to the `log` facade under the `vassert` target.
///
/// `log` has no fatal level; fatal lines go out as errors.
#[cfg(feature = "log")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

#[cfg(feature = "log")]
impl LogCrateSink {
    /// Map a severity to the closest `log` level.
    pub fn map_level(level: LogLevel) -> ::log::Level {
        match level {
            LogLevel::Fatal | LogLevel::Error => ::log::Level::Error,
            LogLevel::Warn => ::log::Level::Warn,
            LogLevel::Info => ::log::Level::Info,
            LogLevel::Debug => ::log::Level::Debug,
            LogLevel::Trace => ::log::Level::Trace,
        }
    }
}

#[cfg(feature = "log")]
impl LogSink for LogCrateSink {
    fn write_line(&self, level: LogLevel, line: &LogLine) {
        ::log::log!(target: "vassert", Self::map_level(level), "{}", line.as_str());
    }
}
