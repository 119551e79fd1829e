//! Scripted error source for tests and headless runs.
//!
//! Doesn't need a graphics context; errors are queued by hand.

use crossbeam_queue::SegQueue;

use super::traits::GraphicsErrorSource;

/// An error source that returns queued codes one at a time.
#[derive(Default)]
pub struct DummyErrorSource {
    pending: SegQueue<u32>,
}

impl DummyErrorSource {
    /// Create a source with no pending errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an error for a later poll.
    pub fn push_error(&self, code: u32) {
        self.pending.push(code);
    }

    /// Number of errors not yet polled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl GraphicsErrorSource for DummyErrorSource {
    fn poll_error(&self) -> Option<u32> {
        self.pending.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_returned_once_in_order() {
        let source = DummyErrorSource::new();
        source.push_error(0x0500);
        source.push_error(0x0505);
        assert_eq!(source.pending(), 2);

        assert_eq!(source.poll_error(), Some(0x0500));
        assert_eq!(source.poll_error(), Some(0x0505));
        assert_eq!(source.poll_error(), None);
    }
}
