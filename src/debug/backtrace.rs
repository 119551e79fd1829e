//! Backtrace capture for fatal assertion failures.
//!
//! The backtrace goes straight to stderr, after the fatal line and before
//! the process halts. It is never routed through a sink: it can be far
//! longer than a bounded log line.

use std::io::Write;

/// Frames from the assertion machinery itself, skipped in the report.
const INTERNAL_PREFIXES: &[&str] = &["backtrace::", "vassert::debug::", "vassert::assert::"];

/// Capture the current stack, formatted one frame per line.
pub(crate) fn capture() -> String {
    let bt = ::backtrace::Backtrace::new();
    let mut out = String::new();
    let mut index = 0usize;

    for frame in bt.frames() {
        for symbol in frame.symbols() {
            let name = symbol
                .name()
                .map(|n| format!("{:#}", n))
                .unwrap_or_else(|| "<unknown>".to_string());
            if INTERNAL_PREFIXES.iter().any(|p| name.starts_with(p)) {
                continue;
            }

            out.push_str(&format!("  {:>3}: {}\n", index, name));
            if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
                out.push_str(&format!("             at {}:{}\n", file.display(), line));
            }
            index += 1;
        }
    }
    out
}

/// Write a backtrace of the failing thread to stderr.
pub(crate) fn write_fatal_backtrace() {
    let trace = capture();
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "stack backtrace:");
    let _ = stderr.write_all(trace.as_bytes());
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_skips_internal_frames() {
        let trace = capture();
        assert!(!trace.contains("vassert::debug::backtrace::capture"));
    }
}
