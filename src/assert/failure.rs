//! Failure records.
//!
//! Built only when a condition fails and dropped as soon as it is rendered.

use std::fmt;

use super::site::CallSite;

/// Description of a failed assertion.
#[derive(Debug, Clone, Copy)]
pub struct FailureRecord<'a> {
    /// Source text of the condition.
    pub expression: &'a str,
    /// Optional caller message.
    pub message: Option<fmt::Arguments<'a>>,
    /// Where the assertion was written.
    pub site: CallSite,
}

impl<'a> FailureRecord<'a> {
    /// A failure without a message.
    pub const fn new(expression: &'a str, site: CallSite) -> Self {
        Self {
            expression,
            message: None,
            site,
        }
    }

    /// Add a caller message.
    pub fn with_message(mut self, message: fmt::Arguments<'a>) -> Self {
        self.message = Some(message);
        self
    }
}

impl fmt::Display for FailureRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} failed", self.site, self.expression)?;
        if let Some(message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
