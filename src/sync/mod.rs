//! Synchronization primitives.
//!
//! Only [`WriterSink`](crate::log::WriterSink) takes a lock; emission to the
//! console and platform sinks is lock-free.

pub(crate) mod mutex;
