//! Android `liblog` backend.
//!
//! Only compiled for `target_os = "android"`. Lines bypass stdout/stderr
//! entirely and go to logcat under the configured tag.

use std::ffi::CString;
use std::os::raw::{c_char, c_int};

use super::config;
use super::level::LogLevel;
use super::line::LogLine;
use super::sink::LogSink;

#[link(name = "log")]
extern "C" {
    fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
}

/// Writes to logcat with a level-to-priority mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct AndroidSink;

impl LogSink for AndroidSink {
    fn write_line(&self, level: LogLevel, line: &LogLine) {
        // Interior NULs would cut the line short in C; drop them.
        let text: Vec<u8> = line.as_bytes().iter().copied().filter(|&b| b != 0).collect();
        let tag: Vec<u8> = config::tag().bytes().filter(|&b| b != 0).collect();

        let (Ok(text), Ok(tag)) = (CString::new(text), CString::new(tag)) else {
            return;
        };

        // SAFETY: both pointers are valid NUL-terminated strings that outlive
        // the call; liblog copies them before returning.
        unsafe {
            __android_log_write(level.android_priority(), tag.as_ptr(), text.as_ptr());
        }
    }
}
