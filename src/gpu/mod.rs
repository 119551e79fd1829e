//! Graphics-call checking.
//!
//! [`gpu_check!`](crate::gpu_check) runs a graphics call and, in debug
//! builds, polls the API's error state afterwards. A pending error becomes
//! one error-level log line. Nothing terminates. In release builds the poll
//! is compiled out and only the call remains.
//!
//! ## Backends
//! - Any `Fn() -> Option<u32>` or [`RawErrorSource`] (e.g. `glGetError`)
//! - [`DummyErrorSource`] for tests
//! - `vulkan`: `VkResult` checking via `ash` (enable `gpu-vulkan`)

pub mod traits;
pub use traits::{GraphicsErrorSource, RawErrorSource};

pub mod dummy;
pub use dummy::DummyErrorSource;

#[cfg(feature = "gpu-vulkan")]
pub mod vulkan;

use crate::assert::CallSite;
use crate::log::{self, LogLevel};

/// Log a graphics error for a call at `site`.
#[cold]
#[inline(never)]
pub fn report_error(code: u32, call: &str, site: CallSite) {
    log::emit(
        LogLevel::Error,
        format_args!("graphics error 0x{:04X} at {}: {}", code, site, call),
    );
}

/// Poll `source` once and report any pending error.
///
/// Returns the code that was reported.
#[inline]
pub fn check_source<S>(source: &S, call: &str, site: CallSite) -> Option<u32>
where
    S: GraphicsErrorSource + ?Sized,
{
    let code = source.poll_error()?;
    report_error(code, call, site);
    Some(code)
}
