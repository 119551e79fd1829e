//! Process-wide log settings.
//!
//! The only filtering is a static level ceiling. Fatal lines and assertion
//! failures ignore it.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use super::level::LogLevel;

/// Tag used by platform log facilities when none is configured.
pub const DEFAULT_TAG: &str = "vassert";

/// Least severe level that is still emitted.
static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Trace as u8);

/// Platform log tag, set at most once.
static TAG: OnceLock<&'static str> = OnceLock::new();

/// Set the least severe level that is still emitted.
pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Get the least severe level that is still emitted.
pub fn max_level() -> LogLevel {
    LogLevel::try_from(MAX_LEVEL.load(Ordering::Relaxed)).unwrap_or(LogLevel::Trace)
}

/// Whether a line at `level` would be emitted.
#[inline]
pub fn enabled(level: LogLevel) -> bool {
    level == LogLevel::Fatal || level <= max_level()
}

/// The platform log tag.
pub fn tag() -> &'static str {
    TAG.get().copied().unwrap_or(DEFAULT_TAG)
}

/// Log configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Least severe level still emitted (default: `Trace`)
    pub max_level: LogLevel,

    /// Tag for platform log facilities (default: "vassert")
    pub tag: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_level: LogLevel::Trace,
            tag: DEFAULT_TAG,
        }
    }
}

impl LogConfig {
    /// Build a config from the environment.
    ///
    /// - `VASSERT_LOG`: level name (`fatal`..`trace`) or number (`0`..`5`)
    ///
    /// An unparseable value keeps the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_level = std::env::var("VASSERT_LOG")
            .ok()
            .and_then(|v| v.parse::<LogLevel>().ok())
            .unwrap_or(defaults.max_level);

        Self {
            max_level,
            ..defaults
        }
    }

    /// Builder pattern: set the level ceiling.
    pub fn with_max_level(mut self, level: LogLevel) -> Self {
        self.max_level = level;
        self
    }

    /// Builder pattern: set the platform log tag.
    ///
    /// Only the first [`apply`](Self::apply) in the process sets the tag;
    /// later ones leave it unchanged.
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    /// Store this config in the process-wide settings.
    ///
    /// The tag can only be set once; later calls keep the first tag.
    pub fn apply(&self) {
        set_max_level(self.max_level);
        let _ = TAG.set(self.tag);
    }
}

/// Apply [`LogConfig::from_env`].
pub fn init_from_env() {
    LogConfig::from_env().apply();
}
