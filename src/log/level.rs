//! Severity levels.
//!
//! Ordered from most to least severe, so `Fatal < Trace`.

use std::fmt;
use std::str::FromStr;

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Unrecoverable; emitted right before the process is terminated.
    Fatal = 0,
    /// A definite problem.
    Error = 1,
    /// Suspicious but non-fatal.
    Warn = 2,
    /// General information.
    Info = 3,
    /// Developer detail.
    Debug = 4,
    /// Very verbose tracing output.
    Trace = 5,
}

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// The tag written in front of every line at this level.
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Fatal => "[FATAL] ",
            LogLevel::Error => "[ERROR] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Info => "[INFO] ",
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Trace => "[TRACE] ",
        }
    }

    /// Lowercase level name.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// True for the two most severe levels.
    #[inline]
    pub const fn is_error_class(self) -> bool {
        (self as u8) < (LogLevel::Warn as u8)
    }

    /// Android `liblog` priority for this level.
    pub const fn android_priority(self) -> i32 {
        match self {
            LogLevel::Fatal => 7,
            LogLevel::Error => 6,
            LogLevel::Warn => 5,
            LogLevel::Info => 4,
            LogLevel::Debug => 3,
            LogLevel::Trace => 2,
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ParseLevelError;

    fn try_from(val: u8) -> Result<Self, ParseLevelError> {
        LogLevel::ALL
            .get(val as usize)
            .copied()
            .ok_or(ParseLevelError::OutOfRange(val))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return LogLevel::try_from(n);
        }
        LogLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("warning").then_some(LogLevel::Warn))
            .ok_or_else(|| ParseLevelError::Unknown(s.to_string()))
    }
}

/// Error returned when a level name or number can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLevelError {
    /// Not one of the level names.
    Unknown(String),
    /// Numeric level outside `0..=5`.
    OutOfRange(u8),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseLevelError::Unknown(s) => write!(f, "unknown log level '{}'", s),
            ParseLevelError::OutOfRange(n) => write!(f, "log level {} out of range 0..=5", n),
        }
    }
}

impl std::error::Error for ParseLevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Fatal < LogLevel::Error);
        assert!(LogLevel::Warn < LogLevel::Trace);
        let mut sorted = LogLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, LogLevel::ALL);
    }

    #[test]
    fn test_error_class() {
        let error_class: Vec<_> = LogLevel::ALL
            .iter()
            .copied()
            .filter(|l| l.is_error_class())
            .collect();
        assert_eq!(error_class, vec![LogLevel::Fatal, LogLevel::Error]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(" trace ".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert_eq!("1".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert_eq!("9".parse::<LogLevel>(), Err(ParseLevelError::OutOfRange(9)));
        assert!(matches!("loud".parse::<LogLevel>(), Err(ParseLevelError::Unknown(_))));
    }

    #[test]
    fn test_tags_distinct() {
        for (i, a) in LogLevel::ALL.iter().enumerate() {
            for b in &LogLevel::ALL[i + 1..] {
                assert_ne!(a.tag(), b.tag());
            }
        }
    }
}
