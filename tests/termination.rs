//! Child-process tests.
//!
//! A fatal assertion ends the process, and console routing is only visible
//! from outside it. Each case re-runs this test binary as a child filtered to
//! that one test, with `CHILD_ENV` naming it. The parent checks the exit
//! status and the child's stdout and stderr.

use std::env;
use std::io::{self, Write};
use std::process::{Command, Output};
use std::sync::Arc;

use vassert::log::{LogLevel, SinkGuard, WriterSink};
use vassert::{vassert, vlog, vpanic};

const CHILD_ENV: &str = "VASSERT_TERMINATION_CHILD";

fn is_child(test_name: &str) -> bool {
    env::var(CHILD_ENV).map(|v| v == test_name).unwrap_or(false)
}

fn run_child(test_name: &str) -> Output {
    Command::new(env::current_exe().expect("test binary path"))
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name)
        .env_remove("VASSERT_LOG")
        .output()
        .expect("failed to spawn child test process")
}

fn assert_terminated_with(output: &Output, needle: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !output.status.success(),
        "child exited normally: {:?}\nstderr:\n{}",
        output.status,
        stderr
    );
    let fatal: Vec<_> = stderr.lines().filter(|l| l.starts_with("[FATAL] ")).collect();
    assert_eq!(fatal.len(), 1, "stderr:\n{}", stderr);
    assert!(fatal[0].contains(needle), "stderr:\n{}", stderr);
}

#[test]
fn vpanic_terminates() {
    if is_child("vpanic_terminates") {
        vpanic!(1 == 2);
        return;
    }

    let output = run_child("vpanic_terminates");
    assert_terminated_with(&output, "1 == 2 failed");
    assert_terminated_with(&output, "termination.rs:");
    assert_terminated_with(&output, "termination::vpanic_terminates");
}

#[test]
fn vpanic_with_message_terminates() {
    if is_child("vpanic_with_message_terminates") {
        let slot = 9;
        vpanic!(slot < 4, "slot {} out of range", slot);
        return;
    }

    let output = run_child("vpanic_with_message_terminates");
    assert_terminated_with(&output, "slot < 4 failed: slot 9 out of range");
}

#[test]
fn vpanic_cannot_be_caught() {
    if is_child("vpanic_cannot_be_caught") {
        let _ = std::panic::catch_unwind(|| vpanic!(false, "caught?"));
        return;
    }

    let output = run_child("vpanic_cannot_be_caught");
    assert_terminated_with(&output, "false failed: caught?");
}

#[test]
fn stdout_is_flushed_before_termination() {
    if is_child("stdout_is_flushed_before_termination") {
        vassert::vinfo!("before the end");
        vpanic!(false);
        return;
    }

    let output = run_child("stdout_is_flushed_before_termination");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[INFO] before the end"), "stdout:\n{}", stdout);
}

/// Writer that refuses large writes with a fatal assertion.
struct BoundedWriter;

impl Write for BoundedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        vpanic!(buf.len() < 64, "write of {} bytes", buf.len());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn vpanic_inside_locked_sink_terminates() {
    if is_child("vpanic_inside_locked_sink_terminates") {
        let _guard = SinkGuard::install(Arc::new(WriterSink::new(BoundedWriter)));
        vassert::vinfo!("{}", "x".repeat(200));
        return;
    }

    let output = run_child("vpanic_inside_locked_sink_terminates");
    assert_terminated_with(&output, "buf.len() < 64 failed: write of 207 bytes");
}

#[test]
fn console_routes_by_severity() {
    if is_child("console_routes_by_severity") {
        for level in LogLevel::ALL {
            vlog!(level, "routed {}", level);
        }
        return;
    }

    let output = run_child("console_routes_by_severity");
    assert!(output.status.success(), "child failed: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    for level in LogLevel::ALL {
        let line = format!("{}routed {}", level.tag(), level);
        let (expected, other) = if level.is_error_class() {
            (&stderr, &stdout)
        } else {
            (&stdout, &stderr)
        };
        assert!(
            expected.contains(&line),
            "{:?} missing\nstdout:\n{}\nstderr:\n{}",
            line,
            stdout,
            stderr
        );
        assert!(!other.contains(&line), "{:?} on the wrong stream", line);
    }
}

#[cfg(debug_assertions)]
#[test]
fn vassert_terminates_in_debug() {
    if is_child("vassert_terminates_in_debug") {
        vassert!(1 == 2);
        return;
    }

    let output = run_child("vassert_terminates_in_debug");
    assert_terminated_with(&output, "1 == 2 failed");
}

#[cfg(debug_assertions)]
#[test]
fn vassert_with_message_terminates_in_debug() {
    if is_child("vassert_with_message_terminates_in_debug") {
        vassert!(Vec::<u8>::new().len() == 1, "empty buffer");
        return;
    }

    let output = run_child("vassert_with_message_terminates_in_debug");
    assert_terminated_with(&output, "failed: empty buffer");
}

#[cfg(not(debug_assertions))]
#[test]
fn vassert_is_noop_in_release() {
    // Runs in-process: if this terminated, the test binary would die.
    vassert!(false);
    vassert!(1 == 2, "never checked");
}
