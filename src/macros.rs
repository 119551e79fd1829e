//! Assertion and logging macros.
//!
//! The debug-only macros test `debug_assertions` inside their expansion, so
//! the calling crate's profile decides whether they are compiled in.

/// Path of the enclosing function, e.g. `my_crate::render::draw`.
///
/// Closure frames are stripped, so a call inside a closure reports the
/// function that contains it.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::assert::site::trim_function_name(__type_name_of(__f))
    }};
}

/// Capture the current file, line and function as a [`CallSite`](crate::assert::CallSite).
#[doc(hidden)]
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::assert::CallSite::new(::core::file!(), ::core::line!(), $crate::function_name!())
    };
}

// =============================================================================
// Logging
// =============================================================================

/// Emit a formatted line at the given level.
///
/// # Example
///
/// ```rust
/// use vassert::log::LogLevel;
///
/// vassert::vlog!(LogLevel::Info, "{} entities spawned", 12);
/// ```
#[macro_export]
macro_rules! vlog {
    ($level:expr, $($arg:tt)+) => {
        $crate::log::emit($level, ::core::format_args!($($arg)+))
    };
}

/// Emit at fatal level. Does not terminate; use [`vpanic!`] for that.
#[macro_export]
macro_rules! vfatal {
    ($($arg:tt)+) => { $crate::vlog!($crate::log::LogLevel::Fatal, $($arg)+) };
}

/// Emit at error level.
#[macro_export]
macro_rules! verror {
    ($($arg:tt)+) => { $crate::vlog!($crate::log::LogLevel::Error, $($arg)+) };
}

/// Emit at warn level.
#[macro_export]
macro_rules! vwarn {
    ($($arg:tt)+) => { $crate::vlog!($crate::log::LogLevel::Warn, $($arg)+) };
}

/// Emit at info level.
#[macro_export]
macro_rules! vinfo {
    ($($arg:tt)+) => { $crate::vlog!($crate::log::LogLevel::Info, $($arg)+) };
}

/// Emit at debug level.
#[macro_export]
macro_rules! vdebug {
    ($($arg:tt)+) => { $crate::vlog!($crate::log::LogLevel::Debug, $($arg)+) };
}

/// Emit at trace level.
#[macro_export]
macro_rules! vtrace {
    ($($arg:tt)+) => { $crate::vlog!($crate::log::LogLevel::Trace, $($arg)+) };
}

// =============================================================================
// Assertions
// =============================================================================

/// Shared expansion for the runtime assertion macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __vassert_check {
    ($class:ident, $cond:expr) => {{
        let outcome = $crate::assert::evaluate($cond, $crate::assert::AssertClass::$class);
        if outcome != $crate::assert::AssertOutcome::Passed {
            $crate::assert::report(
                outcome,
                &$crate::assert::FailureRecord::new(::core::stringify!($cond), $crate::call_site!()),
            );
        }
    }};
    ($class:ident, $cond:expr, $($arg:tt)+) => {{
        let outcome = $crate::assert::evaluate($cond, $crate::assert::AssertClass::$class);
        if outcome != $crate::assert::AssertOutcome::Passed {
            $crate::assert::report(
                outcome,
                &$crate::assert::FailureRecord::new(::core::stringify!($cond), $crate::call_site!())
                    .with_message(::core::format_args!($($arg)+)),
            );
        }
    }};
}

/// Type-check a condition and message without evaluating them.
#[doc(hidden)]
#[macro_export]
macro_rules! __vassert_skip {
    ($cond:expr) => {{
        let _ = || {
            let _: bool = $cond;
        };
    }};
    ($cond:expr, $($arg:tt)+) => {{
        let _ = || {
            let _: bool = $cond;
            let _ = ::core::format_args!($($arg)+);
        };
    }};
}

/// Check a condition in every build; log and terminate on failure.
///
/// Use for violations that mean state is corrupt and continuing is unsafe.
///
/// # Example
///
/// ```rust
/// let slots = [0u8; 4];
/// let index = 2;
/// vassert::vpanic!(index < slots.len());
/// vassert::vpanic!(index < slots.len(), "slot {} out of range", index);
/// ```
#[macro_export]
macro_rules! vpanic {
    ($cond:expr $(,)?) => {
        $crate::__vassert_check!(Panic, $cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__vassert_check!(Panic, $cond, $($arg)+)
    };
}

/// Like [`vpanic!`], but compiled out unless `debug_assertions` is on.
///
/// When compiled out the condition is not evaluated.
#[macro_export]
macro_rules! vassert {
    ($cond:expr $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            $crate::__vassert_check!(Assert, $cond);
        }
        #[cfg(not(debug_assertions))]
        {
            $crate::__vassert_skip!($cond);
        }
    }};
    ($cond:expr, $($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        {
            $crate::__vassert_check!(Assert, $cond, $($arg)+);
        }
        #[cfg(not(debug_assertions))]
        {
            $crate::__vassert_skip!($cond, $($arg)+);
        }
    }};
}

/// Debug-only check that logs a warning on failure and keeps running.
///
/// When compiled out the condition is not evaluated.
#[macro_export]
macro_rules! vassert_warn {
    ($cond:expr $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            $crate::__vassert_check!(Warn, $cond);
        }
        #[cfg(not(debug_assertions))]
        {
            $crate::__vassert_skip!($cond);
        }
    }};
    ($cond:expr, $($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        {
            $crate::__vassert_check!(Warn, $cond, $($arg)+);
        }
        #[cfg(not(debug_assertions))]
        {
            $crate::__vassert_skip!($cond, $($arg)+);
        }
    }};
}

/// Compile-time assertion.
///
/// # Example
///
/// ```rust
/// vassert::vassert_static!(core::mem::size_of::<u64>() == 8);
/// vassert::vassert_static!(u32::BITS == 32, "u32 must be 32 bits");
/// ```
#[macro_export]
macro_rules! vassert_static {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!($cond, "static assertion failed");
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = ::core::assert!($cond, $msg);
    };
}

// =============================================================================
// Graphics calls
// =============================================================================

/// Run a graphics call, then report any pending API error (debug builds only).
///
/// Evaluates to the call's value. Never terminates.
///
/// # Example
///
/// ```rust
/// use vassert::gpu::DummyErrorSource;
///
/// let errors = DummyErrorSource::new();
/// let value = vassert::gpu_check!(errors, 2 + 2);
/// assert_eq!(value, 4);
/// ```
#[macro_export]
macro_rules! gpu_check {
    ($source:expr, $call:expr $(,)?) => {{
        let result = $call;
        #[cfg(debug_assertions)]
        {
            let _ = $crate::gpu::check_source(&$source, ::core::stringify!($call), $crate::call_site!());
        }
        #[cfg(not(debug_assertions))]
        {
            let _ = || {
                let _ = &$source;
            };
        }
        result
    }};
}

/// Run a Vulkan call returning `VkResult`, logging an `Err` (debug builds only).
///
/// The result is passed through unchanged.
#[cfg(feature = "gpu-vulkan")]
#[macro_export]
macro_rules! vk_check {
    ($call:expr $(,)?) => {{
        let result = $call;
        #[cfg(debug_assertions)]
        let result = $crate::gpu::vulkan::check_result(result, ::core::stringify!($call), $crate::call_site!());
        result
    }};
}
