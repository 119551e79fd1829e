//! Call-site capture.

use std::fmt;

/// Source location of an assertion or checked call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Source file, as given by `file!()`.
    pub file: &'static str,
    /// Line number, as given by `line!()`.
    pub line: u32,
    /// Enclosing function path, as given by [`function_name!`](crate::function_name).
    pub function: &'static str,
}

impl CallSite {
    /// Create a call site.
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.function)
    }
}

/// Strip the helper item and any closure frames from a `type_name` path.
///
/// `crate::module::func::__f` becomes `crate::module::func`.
#[doc(hidden)]
pub fn trim_function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__f").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}
