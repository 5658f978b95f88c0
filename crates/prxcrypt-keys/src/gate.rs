//! Engine capability gate.
//!
//! The crypto engine selects an internal key slot by a one-byte code. Only a
//! subset of those slots have recovered keys; a module whose catalog entry
//! needs any other code cannot be decrypted, and trying anyway yields garbage
//! rather than an error. The gate is consulted before any work is done.

use std::fmt;

use log::info;

use crate::KeyRecord;

/// Engine codes with recovered keys.
pub const RECOVERED_CODES: &[u8] = &[
    0x02, 0x03, 0x04, 0x05, 0x07, 0x0C, 0x0D, 0x0E, 0x0F, 0x10, 0x11, 0x12, // kernel slots
    0x38, 0x39, 0x3A, 0x44, 0x4B, 0x53, 0x57, 0x5D, 0x63, 0x64,
];

/// Set of engine codes (0-255) considered available.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyGate {
    bits: [u64; 4],
}

impl KeyGate {
    /// A gate that rejects every code.
    pub const fn none() -> Self {
        Self { bits: [0; 4] }
    }

    /// A gate that admits exactly `codes`.
    pub fn with_codes<I: IntoIterator<Item = u8>>(codes: I) -> Self {
        let mut gate = Self::none();
        for code in codes {
            gate.allow(code);
        }
        gate
    }

    /// Admit an additional code.
    pub fn allow(&mut self, code: u8) {
        self.bits[usize::from(code >> 6)] |= 1 << (code & 63);
    }

    /// Check membership without recording a diagnostic.
    #[inline]
    pub fn contains(&self, code: u8) -> bool {
        self.bits[usize::from(code >> 6)] & (1 << (code & 63)) != 0
    }

    /// Check whether `code` can be serviced, logging when it cannot.
    pub fn is_available(&self, code: u8) -> bool {
        let available = self.contains(code);
        if !available {
            info!("missing key {code:02X}, cannot decrypt module");
        }
        available
    }

    /// First code `record` needs that the gate rejects, if any.
    ///
    /// Codes are checked in order and checking stops at the first rejection,
    /// so only that code is logged.
    pub fn missing_code<R: KeyRecord + ?Sized>(&self, record: &R) -> Option<u8> {
        record.required_codes().find(|&code| !self.is_available(code))
    }

    /// All admitted codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&code| self.contains(code))
    }
}

impl Default for KeyGate {
    fn default() -> Self {
        Self::with_codes(RECOVERED_CODES.iter().copied())
    }
}

impl fmt::Debug for KeyGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.codes().map(|c| format!("{c:#04x}")))
            .finish()
    }
}
