//! Graphics error-state interface.

/// A graphics API's sticky error state, e.g. `glGetError`.
///
/// `poll_error` returns the pending error code and clears it, or `None` when
/// the API reports no error.
pub trait GraphicsErrorSource {
    /// Take the pending error code, if any.
    fn poll_error(&self) -> Option<u32>;
}

impl<F> GraphicsErrorSource for F
where
    F: Fn() -> Option<u32>,
{
    #[inline]
    fn poll_error(&self) -> Option<u32> {
        self()
    }
}

/// Adapter for APIs that return a raw code where `0` means "no error".
///
/// ```rust,ignore
/// let gl_errors = RawErrorSource(|| unsafe { gl::GetError() });
/// ```
pub struct RawErrorSource<F>(pub F);

impl<F> GraphicsErrorSource for RawErrorSource<F>
where
    F: Fn() -> u32,
{
    #[inline]
    fn poll_error(&self) -> Option<u32> {
        match (self.0)() {
            0 => None,
            code => Some(code),
        }
    }
}
