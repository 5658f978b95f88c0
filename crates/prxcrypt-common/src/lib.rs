//! Common utilities for prxcrypt.
//!
//! This crate provides the byte-level building blocks shared by the other
//! prxcrypt crates:
//!
//! - [`Region`] - A named `offset + length` window into a fixed-layout buffer
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`xor`] - XOR helpers with an explicit iteration order

mod error;
mod reader;
mod region;

pub mod xor;

pub use error::{Error, Result};
pub use reader::BinaryReader;
pub use region::Region;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
