//! Leveled log sink.
//!
//! Every line is rendered into a fixed [`LogLine`] buffer as
//! `<level tag><message>` and handed to a [`LogSink`]. On desktop targets the
//! default sink writes error-class levels (`Fatal`, `Error`) to stderr and
//! everything else to stdout. On Android the default sink writes to logcat.
//!
//! ## Usage
//!
//! ```rust
//! use vassert::log::LogLevel;
//! use vassert::{vinfo, vlog, vwarn};
//!
//! vinfo!("loaded {} textures", 12);
//! vwarn!("frame took {:.1} ms", 18.4);
//! vlog!(LogLevel::Debug, "raw level");
//! ```
//!
//! ## Configuration
//!
//! | Variable        | Meaning                                    |
//! |-----------------|--------------------------------------------|
//! | `VASSERT_LOG`   | Least severe level emitted (`warn`, `3`..) |
//!
//! Call [`init_from_env`] once at startup to apply them.

pub mod config;
pub mod emit;
pub mod level;
pub mod line;
pub mod sink;

#[cfg(target_os = "android")]
pub mod android;

pub use config::{enabled, init_from_env, max_level, set_max_level, tag, LogConfig};
pub use emit::{dispatch, emit, set_default_sink, SinkGuard};
pub use level::{LogLevel, ParseLevelError};
pub use line::{LogLine, MAX_MESSAGE_LEN};
pub use sink::{route, CaptureSink, CapturedLine, ConsoleSink, Destination, LogSink, NullSink, WriterSink};

#[cfg(feature = "log")]
pub use sink::LogCrateSink;

#[cfg(target_os = "android")]
pub use android::AndroidSink;
