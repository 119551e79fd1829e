//! Debug utilities for fatal failures.
//!
//! Only compiled when the `debug` feature is enabled.

pub(crate) mod backtrace;
