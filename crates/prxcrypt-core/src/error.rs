//! Error types for module decryption.

use std::fmt;

use thiserror::Error;

use crate::engine::EngineError;
use crate::Variant;

/// Integer status codes returned by [`PrxDecrypter::decrypt_status`].
///
/// Positive values are recovered plaintext sizes; these are the failures.
///
/// [`PrxDecrypter::decrypt_status`]: crate::PrxDecrypter::decrypt_status
pub mod status {
    /// Tag not recognized, or a generic decoder failure.
    pub const FAILED: i32 = -1;
    /// Buffer shorter than the variant minimum.
    pub const BUFFER_TOO_SMALL: i32 = -2;
    /// Declared plaintext size does not fit behind the header.
    pub const SIZE_EXCEEDS_BUFFER: i32 = -4;
    /// Expanded key block scramble failed.
    pub const KEY_SCRAMBLE: i32 = -5;
    /// Header scramble failed.
    pub const HEADER_SCRAMBLE: i32 = -6;
    /// Digest command failed.
    pub const DIGEST: i32 = -7;
    /// Embedded digest does not match the computed one.
    pub const INTEGRITY: i32 = -8;
    /// Key data scramble failed.
    pub const KEY_UNWRAP: i32 = -9;
    /// Tag recognized but its engine code is unavailable.
    pub const MISSING_KEY: i32 = -10;
}

pub use status::MISSING_KEY;

/// Engine invocation that failed inside a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Scrambling a raw (Variant 1) or expanded (Variant 2) key.
    KeyScramble,
    /// Second-code pass over the signature block (Variant 1).
    ExtraMangle,
    /// Re-mangling the relocated header.
    HeaderMangle,
    /// SHA-1 over the reconstructed header (Variant 2).
    Digest,
    /// Scrambling the XORed key data (Variant 2).
    KeyUnwrap,
    /// Final payload decryption.
    Decrypt,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::KeyScramble => "key scramble",
            Self::ExtraMangle => "extra mangle",
            Self::HeaderMangle => "header mangle",
            Self::Digest => "digest",
            Self::KeyUnwrap => "key unwrap",
            Self::Decrypt => "decrypt",
        })
    }
}

/// Errors that can occur when decrypting a module.
#[derive(Debug, Error)]
pub enum Error {
    /// The tag is not in the catalog of the variant that looked it up.
    #[error("tag {tag:#010x} is not in the {variant} catalog")]
    UnknownTag { tag: u32, variant: Variant },

    /// The tag is known but the engine cannot service one of its codes.
    #[error("tag {tag:#010x} needs engine code {code:#04x}, which is unavailable")]
    MissingKey { tag: u32, code: u8 },

    /// Buffer shorter than required.
    #[error("buffer too small: needed {needed:#x} bytes, got {actual:#x}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Declared plaintext size larger than the payload area.
    #[error("declared size {declared:#x} exceeds the {available:#x} bytes after the header")]
    SizeExceedsBuffer { declared: u32, available: usize },

    /// The crypto engine failed.
    #[error("{variant} {step} failed: {source}")]
    Engine {
        variant: Variant,
        step: Step,
        #[source]
        source: EngineError,
    },

    /// The digest embedded in the module does not match.
    #[error("integrity check failed: expected {}, computed {}", hex(expected), hex(actual))]
    IntegrityMismatch { expected: [u8; 20], actual: [u8; 20] },

    /// Common library error.
    #[error("{0}")]
    Common(#[from] prxcrypt_common::Error),
}

impl Error {
    /// The integer status for this error.
    ///
    /// Variant 1 collapses every engine failure into [`status::FAILED`];
    /// Variant 2 reports a distinct code per step.
    pub fn status(&self) -> i32 {
        match self {
            Self::UnknownTag { .. } => status::FAILED,
            Self::MissingKey { .. } => status::MISSING_KEY,
            Self::BufferTooSmall { .. } => status::BUFFER_TOO_SMALL,
            Self::SizeExceedsBuffer { .. } => status::SIZE_EXCEEDS_BUFFER,
            Self::Engine {
                variant: Variant::V1,
                ..
            } => status::FAILED,
            Self::Engine {
                variant: Variant::V2,
                step,
                ..
            } => match step {
                Step::KeyScramble => status::KEY_SCRAMBLE,
                Step::HeaderMangle => status::HEADER_SCRAMBLE,
                Step::Digest => status::DIGEST,
                Step::KeyUnwrap => status::KEY_UNWRAP,
                Step::ExtraMangle | Step::Decrypt => status::FAILED,
            },
            Self::IntegrityMismatch { .. } => status::INTEGRITY,
            Self::Common(_) => status::FAILED,
        }
    }

    /// Wrap an engine failure at `step`, for use with `map_err`.
    pub(crate) fn engine(variant: Variant, step: Step) -> impl FnOnce(EngineError) -> Self {
        move |source| Self::Engine {
            variant,
            step,
            source,
        }
    }

    /// True for the terminal missing-key outcome.
    pub fn is_missing_key(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Result type for decryption operations.
pub type Result<T> = std::result::Result<T, Error>;
