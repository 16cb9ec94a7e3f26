use thiserror::Error;

/// Errors reported by buffer operations.
///
/// Only two conditions are severe enough to surface as errors; everything
/// else (deleting past the end, moving past either bound) is an expected
/// no-op and is reported through `Ok` values instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Memory for a new cell could not be obtained. Recoverable: the
    /// buffer is untouched and the caller can reject the keystroke or
    /// retry later.
    #[error("could not allocate memory for a cell")]
    OutOfMemory,
    /// The operation was invoked on a destroyed buffer handle. The
    /// operation is a no-op; no freed memory is touched.
    #[error("buffer handle is destroyed")]
    InvalidBuffer,
}

/// Convenience alias for operations that can fail with a [`BufferError`].
pub type BufferResult<T> = Result<T, BufferError>;
