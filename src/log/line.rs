//! Bounded line buffer.
//!
//! A [`LogLine`] is rendered on the stack and never grows. Content that does
//! not fit is dropped without an error or marker.

use std::fmt;

use super::level::LogLevel;

/// Maximum bytes in a rendered line, level tag included.
pub const MAX_MESSAGE_LEN: usize = 1024;

/// A fixed-capacity rendered log line.
#[derive(Clone)]
pub struct LogLine {
    buf: [u8; MAX_MESSAGE_LEN],
    len: usize,
    truncated: bool,
}

impl LogLine {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self {
            buf: [0; MAX_MESSAGE_LEN],
            len: 0,
            truncated: false,
        }
    }

    /// Render `level`'s tag followed by `args`.
    pub fn render(level: LogLevel, args: fmt::Arguments<'_>) -> Self {
        let mut line = Self::new();
        line.push_str(level.tag());
        // Our `write_str` never fails, so the only error source is a
        // user Display impl. Keep whatever was written before it.
        let _ = fmt::write(&mut line, args);
        line
    }

    /// Append as much of `s` as fits.
    pub fn push_str(&mut self, s: &str) {
        let room = MAX_MESSAGE_LEN - self.len;
        let n = s.len().min(room);
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        if n < s.len() {
            self.truncated = true;
        }
    }

    /// Rendered bytes. May end in the middle of a multi-byte char if truncated.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Longest valid UTF-8 prefix of the rendered bytes.
    pub fn as_str(&self) -> &str {
        let bytes = self.as_bytes();
        match std::str::from_utf8(bytes) {
            Ok(s) => s,
            // valid_up_to() is always a char boundary
            Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Rendered length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any content was dropped to stay within [`MAX_MESSAGE_LEN`].
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Default for LogLine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for LogLine {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogLine")
            .field("text", &self.as_str())
            .field("len", &self.len)
            .field("truncated", &self.truncated)
            .finish()
    }
}
