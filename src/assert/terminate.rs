//! Process termination for fatal failures.
//!
//! `fast-trap` selects a trap instruction, otherwise `abort()` is used. Neither
//! unwinds, so `catch_unwind` can't intercept a fatal assertion.

/// Halt the process immediately.
#[cfg(all(feature = "fast-trap", any(target_arch = "x86", target_arch = "x86_64")))]
#[cold]
#[inline(never)]
pub fn terminate() -> ! {
    // SAFETY: ud2 raises an invalid-opcode fault and never falls through.
    unsafe { core::arch::asm!("ud2", options(nomem, nostack, noreturn)) }
}

/// Halt the process immediately.
#[cfg(all(feature = "fast-trap", target_arch = "aarch64"))]
#[cold]
#[inline(never)]
pub fn terminate() -> ! {
    // SAFETY: brk raises a breakpoint exception and never falls through.
    unsafe { core::arch::asm!("brk #0xf000", options(nomem, nostack, noreturn)) }
}

/// Halt the process immediately.
#[cfg(not(all(
    feature = "fast-trap",
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
#[cold]
#[inline(never)]
pub fn terminate() -> ! {
    std::process::abort()
}
