//! Decryption of encrypted PSP PRX modules.
//!
//! Encrypted modules identify their key by a 4-byte tag at offset `0xD0`. Two
//! schemes exist, each with its own key catalog (see [`prxcrypt_keys`]):
//!
//! - [`v1`] - 144-byte keys, one or two engine codes
//! - [`v2`] - 16-byte keys, SHA-1 checked header
//!
//! Neither scheme can be decrypted in software alone: the work is split
//! between this crate, which rebuilds the header layout the crypto engine
//! expects, and a [`CryptoEngine`] supplied by the caller that performs the
//! keyed operations. [`PrxDecrypter`] ties both variants together and is the
//! usual entry point.
//!
//! # Example
//!
//! ```no_run
//! use prxcrypt_core::{identify, CryptoEngine, KeyGate, PrxDecrypter};
//!
//! fn run<E: CryptoEngine>(engine: E, module: &[u8]) -> prxcrypt_core::Result<()> {
//!     let id = identify(&KeyGate::default(), module)?;
//!     println!("tag {:#010x} -> {:?}", id.tag, id.route.variant());
//!
//!     let mut decrypter = PrxDecrypter::new(engine);
//!     let mut output = vec![0u8; module.len()];
//!     match decrypter.decrypt_status(module, &mut output) {
//!         size if size > 0 => println!("{size} bytes"),
//!         status => println!("failed with {status}"),
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;

mod decrypter;
mod engine;
mod error;
pub mod header;
pub mod layout;
pub mod v1;
pub mod v2;

#[cfg(test)]
mod testing;

pub use decrypter::{identify, Identification, PrxDecrypter, Route};
pub use engine::{Command, CryptoEngine, EngineError, SCRAMBLE_HEADER_LEN};
pub use error::{status, Error, Result, Step, MISSING_KEY};
pub use header::PrxHeader;
pub use prxcrypt_keys::{KeyGate, KeyRecord, TagInfo, TagInfo2};

/// Encryption scheme of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Variant {
    V1,
    V2,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("variant 1"),
            Self::V2 => f.write_str("variant 2"),
        }
    }
}
