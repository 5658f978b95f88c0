//! Key catalogs for encrypted PSP modules.
//!
//! Every encrypted module carries a 4-byte tag at offset `0xD0` of its header.
//! The tag selects the key material and the engine code(s) the crypto engine
//! needs to unwrap the module. Two historically distinct schemes exist, each
//! with its own catalog:
//!
//! | Module | Scheme | Key material |
//! |--------|--------|--------------|
//! | [`v1`] | Variant 1 | 36 words (144 bytes) XORed around an engine pass, optional second code |
//! | [`v2`] | Variant 2 | 16 bytes expanded to a 0x90-byte block, SHA-1 checked header |
//!
//! Catalog lookup is linear and first-match-wins. Both catalogs contain tags
//! that appear more than once; see [`v1::duplicate_tags`] and
//! [`v2::duplicate_tags`].
//!
//! The [`KeyGate`] decides which engine codes are actually serviceable. Codes
//! whose keys were never recovered are rejected up front so a module is never
//! "decrypted" into garbage.
//!
//! # Example
//!
//! ```
//! use prxcrypt_keys::{v2, KeyGate};
//!
//! let gate = KeyGate::default();
//! let record = v2::lookup(0xD91609F0).unwrap();
//! assert_eq!(gate.missing_code(record), None);
//! ```

pub mod gate;
pub mod v1;
pub mod v2;

pub use gate::KeyGate;
pub use v1::TagInfo;
pub use v2::TagInfo2;

/// A catalog entry of either variant.
pub trait KeyRecord {
    /// The tag found at offset `0xD0` of the module header.
    fn tag(&self) -> u32;

    /// Short human-readable description of the entry.
    fn label(&self) -> &'static str;

    /// Engine codes the entry needs, primary code first.
    fn required_codes(&self) -> impl Iterator<Item = u8> + '_;
}

/// Tags that occur more than once, in order of their first repeat.
fn duplicates(tags: impl Iterator<Item = u32>) -> Vec<u32> {
    let mut seen = Vec::new();
    let mut repeated = Vec::new();
    for tag in tags {
        if seen.contains(&tag) {
            if !repeated.contains(&tag) {
                repeated.push(tag);
            }
        } else {
            seen.push(tag);
        }
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_order() {
        let tags = [1, 2, 3, 2, 1, 2];
        assert_eq!(duplicates(tags.into_iter()), vec![2, 1]);
    }

    #[test]
    fn test_no_duplicates() {
        assert!(duplicates([5, 6, 7].into_iter()).is_empty());
    }
}
