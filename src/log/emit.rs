//! Log emission.
//!
//! [`emit`] renders a line and hands it to the active sink. The active sink is
//! the current thread's override if a [`SinkGuard`] is alive, else the
//! process-wide default, else the platform sink.
//!
//! A fatal line emitted while this thread is already inside a sink's
//! `write_line` goes straight to the platform sink. The outer write may hold
//! a lock the active sink needs, and a fatal line must always get out.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::{Arc, OnceLock};

use super::config::enabled;
use super::level::LogLevel;
use super::line::LogLine;
use super::sink::LogSink;

/// Process-wide sink, installed at most once.
static DEFAULT_SINK: OnceLock<Arc<dyn LogSink>> = OnceLock::new();

thread_local! {
    /// Per-thread override, managed by `SinkGuard`.
    static THREAD_SINK: RefCell<Option<Arc<dyn LogSink>>> = RefCell::new(None);

    /// Set while this thread is inside `LogSink::write_line`.
    static IN_SINK: Cell<bool> = const { Cell::new(false) };
}

#[cfg(target_os = "android")]
static PLATFORM_SINK: super::android::AndroidSink = super::android::AndroidSink;

#[cfg(not(target_os = "android"))]
static PLATFORM_SINK: super::sink::ConsoleSink = super::sink::ConsoleSink;

/// Install the process-wide sink.
///
/// Returns `false` if a sink was already installed; the first one stays.
pub fn set_default_sink(sink: Arc<dyn LogSink>) -> bool {
    DEFAULT_SINK.set(sink).is_ok()
}

/// Render and emit a line at `level`.
///
/// Never fails. Lines longer than [`MAX_MESSAGE_LEN`](super::MAX_MESSAGE_LEN)
/// are truncated.
pub fn emit(level: LogLevel, args: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    let line = LogLine::render(level, args);
    dispatch(level, &line);
}

/// Hand an already rendered line to the active sink.
pub fn dispatch(level: LogLevel, line: &LogLine) {
    let entry = SinkEntry::enter();
    if entry.nested && level == LogLevel::Fatal {
        PLATFORM_SINK.write_line(level, line);
        return;
    }

    // Clone out and release the borrow before writing, so a sink that logs
    // from inside `write_line` doesn't hit a `RefCell` conflict.
    let local = THREAD_SINK
        .try_with(|slot| slot.borrow().clone())
        .ok()
        .flatten();

    if let Some(sink) = local {
        sink.write_line(level, line);
    } else if let Some(sink) = DEFAULT_SINK.get() {
        sink.write_line(level, line);
    } else {
        PLATFORM_SINK.write_line(level, line);
    }
}

/// Marks this thread as writing to a sink until dropped.
struct SinkEntry {
    nested: bool,
}

impl SinkEntry {
    fn enter() -> Self {
        let nested = IN_SINK.try_with(|flag| flag.replace(true)).unwrap_or(false);
        Self { nested }
    }
}

impl Drop for SinkEntry {
    fn drop(&mut self) {
        if !self.nested {
            let _ = IN_SINK.try_with(|flag| flag.set(false));
        }
    }
}

/// RAII guard that redirects this thread's output to a sink.
///
/// Guards nest; dropping one restores whatever override was active before it.
/// Other threads are unaffected.
///
/// ```rust
/// use std::sync::Arc;
/// use vassert::log::{CaptureSink, SinkGuard};
///
/// let capture = Arc::new(CaptureSink::new());
/// {
///     let _guard = SinkGuard::install(capture.clone());
///     vassert::vinfo!("captured");
/// }
/// assert_eq!(capture.take()[0].text, "[INFO] captured");
/// ```
pub struct SinkGuard {
    previous: Option<Arc<dyn LogSink>>,
    // Restoring on another thread would clobber that thread's override.
    _not_send: std::marker::PhantomData<*const ()>,
}

impl SinkGuard {
    /// Redirect this thread's output to `sink` until the guard drops.
    pub fn install(sink: Arc<dyn LogSink>) -> Self {
        let previous = THREAD_SINK.with(|slot| slot.replace(Some(sink)));
        Self {
            previous,
            _not_send: std::marker::PhantomData,
        }
    }
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        let _ = THREAD_SINK.try_with(|slot| {
            *slot.borrow_mut() = previous;
        });
    }
}
