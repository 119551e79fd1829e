//! Build script for vassert.
//!
//! Reports feature and target combinations worth knowing about. Silent for
//! the common case.

use std::env;

fn main() {
    // Re-run if features change
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_FAST_TRAP");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_DEBUG");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_LOG");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_GPU_VULKAN");

    let fast_trap = env::var("CARGO_FEATURE_FAST_TRAP").is_ok();
    let debug_enabled = env::var("CARGO_FEATURE_DEBUG").is_ok();

    // Get build profile
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let is_release = profile == "release";

    // =========================================================================
    // Termination mode
    // =========================================================================

    if fast_trap {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        if !matches!(arch.as_str(), "x86" | "x86_64" | "aarch64") {
            emit_warning(&format!("'fast-trap' has no trap instruction for {}", arch));
            emit_note("vpanic! will fall back to abort() on this target.");
        }
        if is_release {
            emit_info("'fast-trap' enabled in a release build");
            emit_note("Fatal failures exit with SIGILL/SIGTRAP instead of SIGABRT.");
        }
    }

    // =========================================================================
    // Debug features
    // =========================================================================

    if debug_enabled && is_release {
        emit_warning("'debug' feature enabled in release build!");
        emit_note("Every fatal failure captures and symbolizes a backtrace before exiting.");
    }

    // =========================================================================
    // Target checks
    // =========================================================================

    check_target();
}

// =============================================================================
// Diagnostic emission helpers
// =============================================================================

fn emit_info(msg: &str) {
    println!("cargo:warning=[vassert] {}", msg);
}

fn emit_note(msg: &str) {
    println!("cargo:warning=[vassert]    {}", msg);
}

fn emit_warning(msg: &str) {
    println!("cargo:warning=[vassert] warning: {}", msg);
}

// =============================================================================
// Environment checks
// =============================================================================

fn check_target() {
    let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if os == "android" {
        emit_info("Android target: log output goes to logcat (liblog)");
        emit_note("Filter with: adb logcat -s vassert");
    }

    if env::var("TARGET").map(|t| t.contains("wasm")).unwrap_or(false) {
        emit_warning("WebAssembly target detected");
        emit_note("abort() traps the wasm instance; stdout/stderr depend on the host.");
    }
}
