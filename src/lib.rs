//! # vassert
//!
//! Debug-gated assertions, release panic checks and a bounded leveled log
//! sink for game engines.
//!
//! ## Features
//!
//! - `vpanic!`: checked in every build, fatal on failure
//! - `vassert!`: debug builds only, fatal on failure, zero cost in release
//! - `vassert_warn!`: debug builds only, logs a warning and continues
//! - `vassert_static!`: compile-time assertions
//! - Leveled logging (`vlog!`, `verror!`, `vinfo!`, ...) into a fixed 1 KiB
//!   line buffer that truncates instead of allocating or overflowing
//! - Severity routing: fatal/error to stderr, the rest to stdout, logcat on Android
//! - `gpu_check!`: report graphics API errors after a call (debug builds only)
//!
//! ## Cargo features
//!
//! | Feature       | Effect                                                   |
//! |---------------|----------------------------------------------------------|
//! | `fast-trap`   | Fatal failures execute a trap instruction instead of `abort()` |
//! | `debug`       | Print a backtrace after a fatal failure                  |
//! | `log`         | [`LogCrateSink`](crate::log::LogCrateSink) forwards to the `log` facade |
//! | `parking_lot` | `parking_lot` mutex in [`WriterSink`]                    |
//! | `gpu-vulkan`  | `vk_check!` for `ash` results                            |
//!
//! ## Quick Start
//!
//! ```rust
//! use vassert::{vassert, vassert_warn, vinfo, vpanic};
//!
//! vassert::log::init_from_env();
//!
//! let frame_budget_ms = 16.6;
//! vpanic!(frame_budget_ms > 0.0);
//! vassert!(frame_budget_ms < 100.0, "budget {} ms is unreasonable", frame_budget_ms);
//! vassert_warn!(frame_budget_ms <= 16.7, "missing 60 Hz");
//! vinfo!("frame budget {} ms", frame_budget_ms);
//! ```
//!
//! ## Output format
//!
//! ```text
//! [FATAL] src/world.rs:88: game::world::step: entity.alive() failed: despawned twice
//! [WARN] src/audio.rs:12: game::audio::mix: voices < 64 failed
//! [ERROR] graphics error 0x0502 at src/draw.rs:40: game::draw::flush: gl::DrawArrays(..)
//! ```

pub mod assert;
pub mod gpu;
pub mod log;

mod macros;
mod sync;

#[cfg(feature = "debug")]
mod debug;

// Re-export core types at crate root for convenience
pub use crate::assert::{AssertClass, AssertOutcome, CallSite, FailureRecord};
pub use crate::gpu::{DummyErrorSource, GraphicsErrorSource, RawErrorSource};
pub use crate::log::{
    CaptureSink, ConsoleSink, Destination, LogConfig, LogLevel, LogLine, LogSink, NullSink,
    SinkGuard, WriterSink, MAX_MESSAGE_LEN,
};
