//! Assertion engine.
//!
//! Three macro families share one failure path:
//!
//! | Macro            | Active in      | On failure                  |
//! |------------------|----------------|-----------------------------|
//! | `vpanic!`        | every build    | fatal line, then terminate  |
//! | `vassert!`       | debug builds   | fatal line, then terminate  |
//! | `vassert_warn!`  | debug builds   | warn line, keep running     |
//!
//! "Debug build" means `debug_assertions` is on in the crate that *calls* the
//! macro. In other builds the debug-only macros compile to nothing and the
//! condition is never evaluated, so conditions must not have side effects.
//!
//! ## Usage
//!
//! ```rust
//! use vassert::{vassert, vassert_warn, vpanic};
//!
//! fn upload(len: usize, capacity: usize) {
//!     vpanic!(capacity > 0);
//!     vassert!(len <= capacity, "len {} exceeds capacity {}", len, capacity);
//!     vassert_warn!(len > 0, "empty upload");
//! }
//!
//! upload(4, 16);
//! ```

pub mod failure;
pub mod outcome;
pub mod site;
pub mod terminate;

pub use failure::FailureRecord;
pub use outcome::{evaluate, AssertClass, AssertOutcome};
pub use site::CallSite;
pub use terminate::terminate;

use crate::log::{self, LogLevel, LogLine};

/// Log a failed outcome and terminate if it is fatal.
///
/// `Passed` is a no-op. Failure lines bypass the level ceiling.
#[cold]
#[inline(never)]
pub fn report(outcome: AssertOutcome, record: &FailureRecord<'_>) {
    if let Some(level) = outcome.level() {
        write_failure(level, record);
        if outcome.is_fatal() {
            halt();
        }
    }
}

/// Log a failure at warn level and return.
#[cold]
#[inline(never)]
pub fn warn(record: &FailureRecord<'_>) {
    write_failure(LogLevel::Warn, record);
}

/// Log a failure at fatal level and terminate the process.
#[cold]
#[inline(never)]
pub fn fail(record: &FailureRecord<'_>) -> ! {
    write_failure(LogLevel::Fatal, record);
    halt()
}

fn write_failure(level: LogLevel, record: &FailureRecord<'_>) {
    let line = LogLine::render(level, format_args!("{}", record));
    log::dispatch(level, &line);
}

fn halt() -> ! {
    // Anything still buffered on stdout would be lost on abort.
    let _ = std::io::Write::flush(&mut std::io::stdout());

    #[cfg(feature = "debug")]
    crate::debug::backtrace::write_fatal_backtrace();

    terminate()
}
