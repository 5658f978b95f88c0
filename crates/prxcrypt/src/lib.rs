//! Prxcrypt - decryption of encrypted PSP PRX modules.
//!
//! This crate provides a unified interface to the prxcrypt crates.
//!
//! # Crates
//!
//! - [`prxcrypt_common`] - Fixed-offset regions, binary reading, XOR helpers
//! - [`prxcrypt_keys`] - Variant-1 and Variant-2 key catalogs, capability gate
//! - [`prxcrypt_core`] - Decoders, orchestrator, crypto engine interface
//!
//! # Example
//!
//! ```
//! use prxcrypt::prelude::*;
//!
//! // Which entries could never be reached by lookup?
//! assert_eq!(keys::v1::duplicate_tags(), vec![0x207BBF2F]);
//!
//! // Is a Variant-2 tag serviceable with the recovered codes?
//! let gate = KeyGate::default();
//! let record = keys::v2::lookup(0xD91609F0).unwrap();
//! assert!(gate.missing_code(record).is_none());
//! ```

// Re-export all sub-crates
pub use prxcrypt_common as common;
pub use prxcrypt_core as decoder;
pub use prxcrypt_keys as keys;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::keys;
    pub use prxcrypt_common::{BinaryReader, Region};
    pub use prxcrypt_core::{
        identify, status, Command, CryptoEngine, EngineError, Identification, PrxDecrypter,
        PrxHeader, Route, Variant, MISSING_KEY,
    };
    pub use prxcrypt_keys::{KeyGate, KeyRecord, TagInfo, TagInfo2};
}

// Re-export commonly used types at the crate root
pub use prxcrypt_core::{Error, PrxDecrypter, Result};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
