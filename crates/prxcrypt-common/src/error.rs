//! Error types for prxcrypt-common.

use thiserror::Error;

/// Common error type for prxcrypt operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// A region does not fit inside the buffer it was applied to.
    #[error("region {offset:#x}..{end:#x} is outside a buffer of {len:#x} bytes")]
    OutOfBounds { offset: usize, end: usize, len: usize },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
