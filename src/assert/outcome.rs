//! Mapping from a checked condition to what happens next.

use crate::log::LogLevel;

/// Which family of assertion macro performed the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertClass {
    /// `vpanic!`: active in every build, fatal.
    Panic,
    /// `vassert!`: debug builds only, fatal.
    Assert,
    /// `vassert_warn!`: debug builds only, logs and continues.
    Warn,
}

/// Result of evaluating an assertion condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertOutcome {
    /// Condition held.
    Passed,
    /// Condition failed; log at fatal and terminate.
    FailedFatal,
    /// Condition failed; log at warn and continue.
    FailedWarn,
}

impl AssertOutcome {
    /// Level the failure is logged at, if any.
    pub const fn level(self) -> Option<LogLevel> {
        match self {
            AssertOutcome::Passed => None,
            AssertOutcome::FailedFatal => Some(LogLevel::Fatal),
            AssertOutcome::FailedWarn => Some(LogLevel::Warn),
        }
    }

    /// Whether this outcome ends the process.
    pub const fn is_fatal(self) -> bool {
        matches!(self, AssertOutcome::FailedFatal)
    }
}

/// Map a condition and assertion class to an outcome.
#[inline(always)]
pub const fn evaluate(passed: bool, class: AssertClass) -> AssertOutcome {
    if passed {
        return AssertOutcome::Passed;
    }
    match class {
        AssertClass::Panic | AssertClass::Assert => AssertOutcome::FailedFatal,
        AssertClass::Warn => AssertOutcome::FailedWarn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: [AssertClass; 3] = [AssertClass::Panic, AssertClass::Assert, AssertClass::Warn];

    #[test]
    fn test_passing_is_always_passed() {
        for class in CLASSES {
            assert_eq!(evaluate(true, class), AssertOutcome::Passed);
            assert_eq!(evaluate(true, class).level(), None);
        }
    }

    #[test]
    fn test_failure_mapping() {
        assert_eq!(evaluate(false, AssertClass::Panic), AssertOutcome::FailedFatal);
        assert_eq!(evaluate(false, AssertClass::Assert), AssertOutcome::FailedFatal);
        assert_eq!(evaluate(false, AssertClass::Warn), AssertOutcome::FailedWarn);

        assert_eq!(AssertOutcome::FailedFatal.level(), Some(LogLevel::Fatal));
        assert_eq!(AssertOutcome::FailedWarn.level(), Some(LogLevel::Warn));
        assert!(AssertOutcome::FailedFatal.is_fatal());
        assert!(!AssertOutcome::FailedWarn.is_fatal());
    }
}
