//! Vulkan result checking.
//!
//! Vulkan has no sticky error state; each call returns a `VkResult`. The
//! [`vk_check!`](crate::vk_check) macro inspects that value instead of
//! polling a [`GraphicsErrorSource`](super::GraphicsErrorSource).

use ash::prelude::VkResult;
use ash::vk;

use crate::assert::CallSite;
use crate::log::{self, LogLevel};

/// Log a failed Vulkan call at error level.
#[cold]
#[inline(never)]
pub fn report_vk_error(result: vk::Result, call: &str, site: CallSite) {
    log::emit(
        LogLevel::Error,
        format_args!(
            "Vulkan error {:?} ({}) at {}: {}",
            result,
            result.as_raw(),
            site,
            call
        ),
    );
}

/// Pass `result` through, logging it first if it is an error.
#[inline]
pub fn check_result<T>(result: VkResult<T>, call: &str, site: CallSite) -> VkResult<T> {
    if let Err(err) = &result {
        report_vk_error(*err, call, site);
    }
    result
}
