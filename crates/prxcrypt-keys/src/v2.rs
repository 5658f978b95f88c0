//! Variant-2 key catalog.
//!
//! Entries carry a 16-byte key, an engine code and a layout type. Type 3
//! modules keep an extra 32-byte side block in the SHA-1 input and the final
//! engine header; every other type uses the plain layout.

use crate::KeyRecord;

/// Layout type selecting the alternate (side block) header arrangement.
pub const ALT_LAYOUT: u8 = 3;

/// A Variant-2 catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagInfo2 {
    /// Module tag.
    pub tag: u32,
    /// 16-byte key.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub key: &'static [u8; 16],
    /// Engine code.
    pub code: u8,
    /// Layout type.
    pub kind: u8,
    /// Short description.
    pub label: &'static str,
}

impl TagInfo2 {
    pub const fn new(
        tag: u32,
        key: &'static [u8; 16],
        code: u8,
        kind: u8,
        label: &'static str,
    ) -> Self {
        Self {
            tag,
            key,
            code,
            kind,
            label,
        }
    }

    #[inline]
    pub fn uses_alt_layout(&self) -> bool {
        self.kind == ALT_LAYOUT
    }
}

impl KeyRecord for TagInfo2 {
    fn tag(&self) -> u32 {
        self.tag
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn required_codes(&self) -> impl Iterator<Item = u8> + '_ {
        std::iter::once(self.code)
    }
}

/// Find the first entry carrying `tag`.
pub fn lookup(tag: u32) -> Option<&'static TagInfo2> {
    TAGS.iter().find(|t| t.tag == tag)
}

/// All entries in catalog order.
pub fn iter() -> impl Iterator<Item = &'static TagInfo2> {
    TAGS.iter()
}

/// Tags present more than once. Only the first occurrence is reachable by
/// [`lookup`].
pub fn duplicate_tags() -> Vec<u32> {
    crate::duplicates(TAGS.iter().map(|t| t.tag))
}

const KEY_660_K1: [u8; 16] = [0x76, 0xF2, 0x6C, 0x0A, 0xCA, 0x3A, 0xBA, 0x4E, 0xAC, 0x76, 0xD2, 0x40, 0xF5, 0xC3, 0xBF, 0xF9];
const KEY_660_K2: [u8; 16] = [0x7A, 0x3E, 0x55, 0x75, 0xB9, 0x6A, 0xFC, 0x4F, 0x3E, 0xE3, 0xDF, 0xB3, 0x6C, 0xE8, 0x2A, 0x82];
const KEY_660_K3: [u8; 16] = [0xFA, 0x79, 0x09, 0x36, 0xE6, 0x19, 0xE8, 0xA4, 0xA9, 0x41, 0x37, 0x18, 0x81, 0x02, 0xE9, 0xB3];
const KEY_660_K8: [u8; 16] = [0x85, 0x93, 0x1F, 0xED, 0x2C, 0x4D, 0xA4, 0x53, 0x59, 0x9C, 0x3F, 0x16, 0xF3, 0x50, 0xDE, 0x46];
const KEY_660_K4: [u8; 16] = [0xC8, 0xA0, 0x70, 0x98, 0xAE, 0xE6, 0x2B, 0x80, 0xD7, 0x91, 0xE6, 0xCA, 0x4C, 0xA9, 0x78, 0x4E];
const KEY_660_K5: [u8; 16] = [0xBF, 0xF8, 0x34, 0x02, 0x84, 0x47, 0xBD, 0x87, 0x1C, 0x52, 0x03, 0x23, 0x79, 0xBB, 0x59, 0x81];
const KEY_660_K6: [u8; 16] = [0xD2, 0x83, 0xCC, 0x63, 0xBB, 0x10, 0x15, 0xE7, 0x7B, 0xC0, 0x6D, 0xEE, 0x34, 0x9E, 0x4A, 0xFA];
const KEY_660_K7: [u8; 16] = [0xEB, 0xD9, 0x1E, 0x05, 0x3C, 0xAE, 0xAB, 0x62, 0xE3, 0xB7, 0x1F, 0x37, 0xE5, 0xCD, 0x68, 0xC3];
const KEY_660_V1: [u8; 16] = [0xBA, 0x76, 0x61, 0x47, 0x8B, 0x55, 0xA8, 0x72, 0x89, 0x15, 0x79, 0x6D, 0xD7, 0x2F, 0x78, 0x0E];
const KEY_660_V7: [u8; 16] = [0xC5, 0x9C, 0x77, 0x9C, 0x41, 0x01, 0xE4, 0x85, 0x79, 0xC8, 0x71, 0x63, 0xA5, 0x7D, 0x4F, 0xFB];
const KEY_660_V6: [u8; 16] = [0x92, 0x8C, 0xA4, 0x12, 0xD6, 0x5C, 0x55, 0x31, 0x5B, 0x94, 0x23, 0x9B, 0x62, 0xB3, 0xDB, 0x47];
const KEY_660_V3: [u8; 16] = [0x88, 0xAF, 0x18, 0xE9, 0xC3, 0xAA, 0x6B, 0x56, 0xF7, 0xC5, 0xA8, 0xBF, 0x1A, 0x84, 0xE9, 0xF3];
const KEY_660_V2: [u8; 16] = [0xF9, 0x4A, 0x6B, 0x96, 0x79, 0x3F, 0xEE, 0x0A, 0x04, 0xC8, 0x8D, 0x7E, 0x5F, 0x38, 0x3A, 0xCF];
const KEY_660_V8: [u8; 16] = [0x86, 0xA0, 0x7D, 0x4D, 0xB3, 0x6B, 0xA2, 0xFD, 0xF4, 0x15, 0x85, 0x70, 0x2D, 0x6A, 0x0D, 0x3A];
const KEY_660_V4: [u8; 16] = [0xD1, 0xB0, 0xAE, 0xC3, 0x24, 0x36, 0x13, 0x49, 0xD6, 0x49, 0xD7, 0x88, 0xEA, 0xA4, 0x99, 0x86];
const KEY_660_V5: [u8; 16] = [0xCB, 0x93, 0x12, 0x38, 0x31, 0xC0, 0x2D, 0x2E, 0x7A, 0x18, 0x5C, 0xAC, 0x92, 0x93, 0xAB, 0x32];
const KEY_639_K3: [u8; 16] = [0x01, 0x7B, 0xF0, 0xE9, 0xBE, 0x9A, 0xDD, 0x54, 0x37, 0xEA, 0x0E, 0xC4, 0xD6, 0x4D, 0x8E, 0x9E];
const KEY_638_K4: [u8; 16] = [0x98, 0x43, 0xFF, 0x85, 0x68, 0xB2, 0xDB, 0x3B, 0xD4, 0x22, 0xD0, 0x4F, 0xAB, 0x5F, 0x0A, 0x31];
const KEY_636_K2: [u8; 16] = [0x91, 0xF2, 0x02, 0x9E, 0x63, 0x32, 0x30, 0xA9, 0x1D, 0xDA, 0x0B, 0xA8, 0xB7, 0x41, 0xA3, 0xCC];
const KEY_636_K1: [u8; 16] = [0x07, 0xE3, 0x08, 0x64, 0x7F, 0x60, 0xA3, 0x36, 0x6A, 0x76, 0x21, 0x44, 0xC9, 0xD7, 0x06, 0x83];
const KEY_630_K8: [u8; 16] = [0x81, 0xD1, 0x12, 0x89, 0x35, 0xC8, 0xEA, 0x8B, 0xE0, 0x02, 0x2D, 0x2D, 0x6A, 0x18, 0x67, 0xB8];
const KEY_630_K7: [u8; 16] = [0x77, 0x1C, 0x06, 0x5F, 0x53, 0xEC, 0x3F, 0xFC, 0x22, 0xCE, 0x5A, 0x27, 0xFF, 0x78, 0xA8, 0x48];
const KEY_630_K6: [u8; 16] = [0x8D, 0xDB, 0xDC, 0x5C, 0xF2, 0x70, 0x2B, 0x40, 0xB2, 0x3D, 0x00, 0x09, 0x61, 0x7C, 0x10, 0x60];
const KEY_630_K5: [u8; 16] = [0x87, 0x37, 0x21, 0xCC, 0x65, 0xAE, 0xAA, 0x5F, 0x40, 0xF6, 0x6F, 0x2A, 0x86, 0xC7, 0xA1, 0xC8];
const KEY_630_K4: [u8; 16] = [0xAA, 0xA1, 0xB5, 0x7C, 0x93, 0x5A, 0x95, 0xBD, 0xEF, 0x69, 0x16, 0xFC, 0x2B, 0x92, 0x31, 0xDD];
const KEY_630_K3: [u8; 16] = [0x23, 0x8D, 0x3D, 0xAE, 0x41, 0x50, 0xA0, 0xFA, 0xF3, 0x2F, 0x32, 0xCE, 0xC7, 0x27, 0xCD, 0x50];
const KEY_630_K2: [u8; 16] = [0xD4, 0x35, 0x18, 0x02, 0x29, 0x68, 0xFB, 0xA0, 0x6A, 0xA9, 0xA5, 0xED, 0x78, 0xFD, 0x2E, 0x9D];
const KEY_630_K1: [u8; 16] = [0x36, 0xB0, 0xDC, 0xFC, 0x59, 0x2A, 0x95, 0x1D, 0x80, 0x2D, 0x80, 0x3F, 0xCD, 0x30, 0xA0, 0x1B];
const KEY_620_E: [u8; 16] = [0xB1, 0xB3, 0x7F, 0x76, 0xC3, 0xFB, 0x88, 0xE6, 0xF8, 0x60, 0xD3, 0x35, 0x3C, 0xA3, 0x4E, 0xF3];
const KEY_620_A: [u8; 16] = [0xAC, 0x34, 0xBA, 0xB1, 0x97, 0x8D, 0xAE, 0x6F, 0xBA, 0xE8, 0xB1, 0xD6, 0xDF, 0xDF, 0xF1, 0xA2];
const KEY_620_5V: [u8; 16] = [0xF2, 0x8F, 0x75, 0xA7, 0x31, 0x91, 0xCE, 0x9E, 0x75, 0xBD, 0x27, 0x26, 0xB4, 0xB4, 0x0C, 0x32];
const KEY_620_5K: [u8; 16] = [0x41, 0x8A, 0x35, 0x4F, 0x69, 0x3A, 0xDF, 0x04, 0xFD, 0x39, 0x46, 0xA2, 0x5C, 0x2D, 0xF2, 0x21];
const KEY_620_5: [u8; 16] = [0xF1, 0xBC, 0x17, 0x07, 0xAE, 0xB7, 0xC8, 0x30, 0xD8, 0x34, 0x9D, 0x40, 0x6A, 0x8E, 0xDF, 0x4E];
const KEY_620_1: [u8; 16] = [0x1D, 0x13, 0xE9, 0x50, 0x04, 0x73, 0x3D, 0xD2, 0xE1, 0xDA, 0xB9, 0xC1, 0xE6, 0x7B, 0x25, 0xA7];
const KEY_620_0: [u8; 16] = [0xD6, 0xBD, 0xCE, 0x1E, 0x12, 0xAF, 0x9A, 0xE6, 0x69, 0x30, 0xDE, 0xDA, 0x88, 0xB8, 0xFF, 0xFB];
const KEY_600_2: [u8; 16] = [0xE1, 0x45, 0x93, 0x2C, 0x53, 0xE2, 0xAB, 0x06, 0x6F, 0xB6, 0x8F, 0x0B, 0x66, 0x91, 0xE7, 0x1E];
const KEY_600_1: [u8; 16] = [0xE3, 0x52, 0x39, 0x97, 0x3B, 0x84, 0x41, 0x1C, 0xC3, 0x23, 0xF1, 0xB8, 0xA9, 0x09, 0x4B, 0xF0];
const KEY_570_5K: [u8; 16] = [0x6D, 0x72, 0xA4, 0xBA, 0x7F, 0xBF, 0xD1, 0xF1, 0xA9, 0xF3, 0xBB, 0x07, 0x1B, 0xC0, 0xB3, 0x66];
const KEY_505_A: [u8; 16] = [0x7B, 0x94, 0x72, 0x27, 0x4C, 0xCC, 0x54, 0x3B, 0xAE, 0xDF, 0x46, 0x37, 0xAC, 0x01, 0x4D, 0x87];
const KEY_505_1: [u8; 16] = [0x58, 0x2A, 0x4C, 0x69, 0x19, 0x7B, 0x83, 0x3D, 0xD2, 0x61, 0x61, 0xFE, 0x14, 0xEE, 0xAA, 0x11];
const KEY_505_0: [u8; 16] = [0x2E, 0x8E, 0x97, 0xA2, 0x85, 0x42, 0x70, 0x73, 0x18, 0xDA, 0xA0, 0x8A, 0xF8, 0x62, 0xA2, 0xB0];
const KEY_500_C: [u8; 16] = [0xA3, 0x5D, 0x51, 0xE6, 0x56, 0xC8, 0x01, 0xCA, 0xE3, 0x77, 0xBF, 0xCD, 0xFF, 0x24, 0xDA, 0x4D];
const KEY_500_2: [u8; 16] = [0x2C, 0x8E, 0xAF, 0x1D, 0xFF, 0x79, 0x73, 0x1A, 0xAD, 0x96, 0xAB, 0x09, 0xEA, 0x35, 0x59, 0x8B];
const KEY_500_1: [u8; 16] = [0xBA, 0xE2, 0xA3, 0x12, 0x07, 0xFF, 0x04, 0x1B, 0x64, 0xA5, 0x11, 0x85, 0xF7, 0x2F, 0x99, 0x5B];
const KEY_500_0: [u8; 16] = [0xEB, 0x1B, 0x53, 0x0B, 0x62, 0x49, 0x32, 0x58, 0x1F, 0x83, 0x0A, 0xF4, 0x99, 0x3D, 0x75, 0xD0];
const KEY_390_0: [u8; 16] = [0x45, 0xEF, 0x5C, 0x5D, 0xED, 0x81, 0x99, 0x84, 0x12, 0x94, 0x8F, 0xAB, 0xE8, 0x05, 0x6D, 0x7D];
const KEY_390_1: [u8; 16] = [0x70, 0x1B, 0x08, 0x25, 0x22, 0xA1, 0x4D, 0x3B, 0x69, 0x21, 0xF9, 0x71, 0x0A, 0xA8, 0x41, 0xA9];
const KEY_370_0: [u8; 16] = [0x26, 0x38, 0x0A, 0xAC, 0xA5, 0xD8, 0x74, 0xD1, 0x32, 0xB7, 0x2A, 0xBF, 0x79, 0x9E, 0x6D, 0xDB];
const KEY_370_1: [u8; 16] = [0x53, 0xE7, 0xAB, 0xB9, 0xC6, 0x4A, 0x4B, 0x77, 0x92, 0x17, 0xB5, 0x74, 0x0A, 0xDA, 0xA9, 0xEA];
const KEY_370_2: [u8; 16] = [0x71, 0x10, 0xF0, 0xA4, 0x16, 0x14, 0xD5, 0x93, 0x12, 0xFF, 0x74, 0x96, 0xDF, 0x1F, 0xDA, 0x89];
const KEY_360_0: [u8; 16] = [0x3C, 0x2B, 0x51, 0xD4, 0x2D, 0x85, 0x47, 0xDA, 0x2D, 0xCA, 0x18, 0xDF, 0xFE, 0x54, 0x09, 0xED];
const KEY_360_1: [u8; 16] = [0x31, 0x1F, 0x98, 0xD5, 0x7B, 0x58, 0x95, 0x45, 0x32, 0xAB, 0x3A, 0xE3, 0x89, 0x32, 0x4B, 0x34];
const KEY_330_0: [u8; 16] = [0x3B, 0x9B, 0x1A, 0x56, 0x21, 0x80, 0x14, 0xED, 0x8E, 0x8B, 0x08, 0x42, 0xFA, 0x2C, 0xDC, 0x3A];
const KEY_330_1: [u8; 16] = [0xE8, 0xBE, 0x2F, 0x06, 0xB1, 0x05, 0x2A, 0xB9, 0x18, 0x18, 0x03, 0xE3, 0xEB, 0x64, 0x7D, 0x26];
const KEY_330_2: [u8; 16] = [0xAB, 0x82, 0x25, 0xD7, 0x43, 0x6F, 0x6C, 0xC1, 0x95, 0xC5, 0xF7, 0xF0, 0x63, 0x73, 0x3F, 0xE7];
const KEY_330_3: [u8; 16] = [0xA8, 0xB1, 0x47, 0x77, 0xDC, 0x49, 0x6A, 0x6F, 0x38, 0x4C, 0x4D, 0x96, 0xBD, 0x49, 0xEC, 0x9B];
const KEY_330_4: [u8; 16] = [0xEC, 0x3B, 0xD2, 0xC0, 0xFA, 0xC1, 0xEE, 0xB9, 0x9A, 0xBC, 0xFF, 0xA3, 0x89, 0xF2, 0x60, 0x1F];
const KEY_310_0: [u8; 16] = [0xA2, 0x41, 0xE8, 0x39, 0x66, 0x5B, 0xFA, 0xBB, 0x1B, 0x2D, 0x6E, 0x0E, 0x33, 0xE5, 0xD7, 0x3F];
const KEY_310_1: [u8; 16] = [0xA4, 0x60, 0x8F, 0xAB, 0xAB, 0xDE, 0xA5, 0x65, 0x5D, 0x43, 0x3A, 0xD1, 0x5E, 0xC3, 0xFF, 0xEA];
const KEY_310_2: [u8; 16] = [0xE7, 0x5C, 0x85, 0x7A, 0x59, 0xB4, 0xE3, 0x1D, 0xD0, 0x9E, 0xCE, 0xC2, 0xD6, 0xD4, 0xBD, 0x2B];
const KEY_310_3: [u8; 16] = [0x2E, 0x00, 0xF6, 0xF7, 0x52, 0xCF, 0x95, 0x5A, 0xA1, 0x26, 0xB4, 0x84, 0x9B, 0x58, 0x76, 0x2F];
const KEY_303_0: [u8; 16] = [0x7B, 0xA1, 0xE2, 0x5A, 0x91, 0xB9, 0xD3, 0x13, 0x77, 0x65, 0x4A, 0xB7, 0xC2, 0x8A, 0x10, 0xAF];
const KEY_300_0: [u8; 16] = [0x9F, 0x67, 0x1A, 0x7A, 0x22, 0xF3, 0x59, 0x0B, 0xAA, 0x6D, 0xA4, 0xC6, 0x8B, 0xD0, 0x03, 0x77];
const KEY_300_1: [u8; 16] = [0x15, 0x07, 0x63, 0x26, 0xDB, 0xE2, 0x69, 0x34, 0x56, 0x08, 0x2A, 0x93, 0x4E, 0x4B, 0x8A, 0xB2];
const KEY_300_2: [u8; 16] = [0x56, 0x3B, 0x69, 0xF7, 0x29, 0x88, 0x2F, 0x4C, 0xDB, 0xD5, 0xDE, 0x80, 0xC6, 0x5C, 0xC8, 0x73];
const KEY_280_0: [u8; 16] = [0xCA, 0xFB, 0xBF, 0xC7, 0x50, 0xEA, 0xB4, 0x40, 0x8E, 0x44, 0x5C, 0x63, 0x53, 0xCE, 0x80, 0xB1];
const KEY_280_1: [u8; 16] = [0x40, 0x9B, 0xC6, 0x9B, 0xA9, 0xFB, 0x84, 0x7F, 0x72, 0x21, 0xD2, 0x36, 0x96, 0x55, 0x09, 0x74];
const KEY_280_2: [u8; 16] = [0x03, 0xA7, 0xCC, 0x4A, 0x5B, 0x91, 0xC2, 0x07, 0xFF, 0xFC, 0x26, 0x25, 0x1E, 0x42, 0x4B, 0xB5];
const KEY_260_0: [u8; 16] = [0xC3, 0x24, 0x89, 0xD3, 0x80, 0x87, 0xB2, 0x4E, 0x4C, 0xD7, 0x49, 0xE4, 0x9D, 0x1D, 0x34, 0xD1];
const KEY_260_1: [u8; 16] = [0xF3, 0xAC, 0x6E, 0x7C, 0x04, 0x0A, 0x23, 0xE7, 0x0D, 0x33, 0xD8, 0x24, 0x73, 0x39, 0x2B, 0x4A];
const KEY_260_2: [u8; 16] = [0x72, 0xB4, 0x39, 0xFF, 0x34, 0x9B, 0xAE, 0x82, 0x30, 0x34, 0x4A, 0x1D, 0xA2, 0xD8, 0xB4, 0x3C];
const KEY_2DA8: [u8; 16] = [0x80, 0x02, 0xC0, 0xBF, 0x00, 0x0A, 0xC0, 0xBF, 0x40, 0x03, 0xC0, 0xBF, 0x40, 0x00, 0x00, 0x00];
const KEY_22E0: [u8; 16] = [0x66, 0x0F, 0xCB, 0x3B, 0x30, 0x75, 0xE3, 0x10, 0x0A, 0x95, 0x65, 0xC7, 0x3C, 0x93, 0x87, 0x22];
const KEY_21C0: [u8; 16] = [0x6A, 0x19, 0x71, 0xF3, 0x18, 0xDE, 0xD3, 0xA2, 0x6D, 0x3B, 0xDE, 0xC7, 0xBE, 0x98, 0xE2, 0x4C];
const KEY_2250: [u8; 16] = [0x50, 0xCC, 0x03, 0xAC, 0x3F, 0x53, 0x1A, 0xFA, 0x0A, 0xA4, 0x34, 0x23, 0x86, 0x61, 0x7F, 0x97];
const KEY_2E5E10F0: [u8; 16] = [0x9D, 0x5C, 0x5B, 0xAF, 0x8C, 0xD8, 0x69, 0x7E, 0x51, 0x9F, 0x70, 0x96, 0xE6, 0xD5, 0xC4, 0xE8];
const KEY_2E5E12F0: [u8; 16] = [0x8A, 0x7B, 0xC9, 0xD6, 0x52, 0x58, 0x88, 0xEA, 0x51, 0x83, 0x60, 0xCA, 0x16, 0x79, 0xE2, 0x07];
const KEY_2E5E13F0: [u8; 16] = [0xFF, 0xA4, 0x68, 0xC3, 0x31, 0xCA, 0xB7, 0x4C, 0xF1, 0x23, 0xFF, 0x01, 0x65, 0x3D, 0x26, 0x36];
const KEY_2FD30BF0: [u8; 16] = [0xD8, 0x58, 0x79, 0xF9, 0xA4, 0x22, 0xAF, 0x86, 0x90, 0xAC, 0xDA, 0x45, 0xCE, 0x60, 0x40, 0x3F];
const KEY_2FD311F0: [u8; 16] = [0x3A, 0x6B, 0x48, 0x96, 0x86, 0xA5, 0xC8, 0x80, 0x69, 0x6C, 0xE6, 0x4B, 0xF6, 0x04, 0x17, 0x44];
const KEY_2FD312F0: [u8; 16] = [0xC5, 0xFB, 0x69, 0x03, 0x20, 0x7A, 0xCF, 0xBA, 0x2C, 0x90, 0xF8, 0xB8, 0x4D, 0xD2, 0xF1, 0xDE];
const KEY_D91605F0: [u8; 16] = [0xB8, 0x8C, 0x45, 0x8B, 0xB6, 0xE7, 0x6E, 0xB8, 0x51, 0x59, 0xA6, 0x53, 0x7C, 0x5E, 0x86, 0x31];
const KEY_D91606F0: [u8; 16] = [0xED, 0x10, 0xE0, 0x36, 0xC4, 0xFE, 0x83, 0xF3, 0x75, 0x70, 0x5E, 0xF6, 0xA4, 0x40, 0x05, 0xF7];
const KEY_D91608F0: [u8; 16] = [0x5C, 0x77, 0x0C, 0xBB, 0xB4, 0xC2, 0x4F, 0xA2, 0x7E, 0x3B, 0x4E, 0xB4, 0xB4, 0xC8, 0x70, 0xAF];
const KEY_D91609F0: [u8; 16] = [0xD0, 0x36, 0x12, 0x75, 0x80, 0x56, 0x20, 0x43, 0xC4, 0x30, 0x94, 0x3E, 0x1C, 0x75, 0xD1, 0xBF];
const KEY_D9160AF0: [u8; 16] = [0x10, 0xA9, 0xAC, 0x16, 0xAE, 0x19, 0xC0, 0x7E, 0x3B, 0x60, 0x77, 0x86, 0x01, 0x6F, 0xF2, 0x63];
const KEY_D9160BF0: [u8; 16] = [0x83, 0x83, 0xF1, 0x37, 0x53, 0xD0, 0xBE, 0xFC, 0x8D, 0xA7, 0x32, 0x52, 0x46, 0x0A, 0xC2, 0xC2];
const KEY_D91611F0: [u8; 16] = [0x61, 0xB0, 0xC0, 0x58, 0x71, 0x57, 0xD9, 0xFA, 0x74, 0x67, 0x0E, 0x5C, 0x7E, 0x6E, 0x95, 0xB9];
const KEY_D91612F0: [u8; 16] = [0x9E, 0x20, 0xE1, 0xCD, 0xD7, 0x88, 0xDE, 0xC0, 0x31, 0x9B, 0x10, 0xAF, 0xC5, 0xB8, 0x73, 0x23];
const KEY_D91613F0: [u8; 16] = [0xEB, 0xFF, 0x40, 0xD8, 0xB4, 0x1A, 0xE1, 0x66, 0x91, 0x3B, 0x8F, 0x64, 0xB6, 0xFC, 0xB7, 0x12];
const KEY_D91614F0: [u8; 16] = [0xFD, 0xF7, 0xB7, 0x3C, 0x9F, 0xD1, 0x33, 0x95, 0x11, 0xB8, 0xB5, 0xBB, 0x54, 0x23, 0x73, 0x85];
const KEY_D91615F0: [u8; 16] = [0xC8, 0x03, 0xE3, 0x44, 0x50, 0xF1, 0xE7, 0x2A, 0x6A, 0x0D, 0xC3, 0x61, 0xB6, 0x8E, 0x5F, 0x51];
const KEY_D91616F0: [u8; 16] = [0x53, 0x03, 0xB8, 0x6A, 0x10, 0x19, 0x98, 0x49, 0x1C, 0xAF, 0x30, 0xE4, 0x25, 0x1B, 0x6B, 0x28];
const KEY_D91617F0: [u8; 16] = [0x02, 0xFA, 0x48, 0x73, 0x75, 0xAF, 0xAE, 0x0A, 0x67, 0x89, 0x2B, 0x95, 0x4B, 0x09, 0x87, 0xA3];
const KEY_D91618F0: [u8; 16] = [0x96, 0x96, 0x7C, 0xC3, 0xF7, 0x12, 0xDA, 0x62, 0x1B, 0xF6, 0x9A, 0x9A, 0x44, 0x44, 0xBC, 0x48];
const KEY_D91619F0: [u8; 16] = [0xE0, 0x32, 0xA7, 0x08, 0x6B, 0x2B, 0x29, 0x2C, 0xD1, 0x4D, 0x5B, 0xEE, 0xA8, 0xC8, 0xB4, 0xE9];
const KEY_D9161AF0: [u8; 16] = [0x27, 0xE5, 0xA7, 0x49, 0x52, 0xE1, 0x94, 0x67, 0x35, 0x66, 0x91, 0x0C, 0xE8, 0x9A, 0x25, 0x24];
const KEY_D91620F0: [u8; 16] = [0x52, 0x1C, 0xB4, 0x5F, 0x40, 0x3B, 0x9A, 0xDD, 0xAC, 0xFC, 0xEA, 0x92, 0xFD, 0xDD, 0xF5, 0x90];
const KEY_D91621F0: [u8; 16] = [0xD1, 0x91, 0x2E, 0xA6, 0x21, 0x14, 0x29, 0x62, 0xF6, 0xED, 0xAE, 0xCB, 0xDD, 0xA3, 0xBA, 0xFE];
const KEY_D91622F0: [u8; 16] = [0x59, 0x5D, 0x78, 0x4D, 0x21, 0xB2, 0x01, 0x17, 0x6C, 0x9A, 0xB5, 0x1B, 0xDA, 0xB7, 0xF9, 0xE6];
const KEY_D91623F0: [u8; 16] = [0xAA, 0x45, 0xEB, 0x4F, 0x62, 0xFB, 0xD1, 0x0D, 0x71, 0xD5, 0x62, 0xD2, 0xF5, 0xBF, 0xA5, 0x2F];
const KEY_D91624F0: [u8; 16] = [0x61, 0xB7, 0x26, 0xAF, 0x8B, 0xF1, 0x41, 0x58, 0x83, 0x6A, 0xC4, 0x92, 0x12, 0xCB, 0xB1, 0xE9];
const KEY_D91628F0: [u8; 16] = [0x49, 0xA4, 0xFC, 0x66, 0xDC, 0xE7, 0x62, 0x21, 0xDB, 0x18, 0xA7, 0x50, 0xD6, 0xA8, 0xC1, 0xB6];
const KEY_D91680F0: [u8; 16] = [0x2C, 0x22, 0x9B, 0x12, 0x36, 0x74, 0x11, 0x67, 0x49, 0xD1, 0xD1, 0x88, 0x92, 0xF6, 0xA1, 0xD8];
const KEY_D91681F0: [u8; 16] = [0x52, 0xB6, 0x36, 0x6C, 0x8C, 0x46, 0x7F, 0x7A, 0xCC, 0x11, 0x62, 0x99, 0xC1, 0x99, 0xBE, 0x98];
const KEY_02G_E: [u8; 16] = [0x9D, 0x09, 0xFD, 0x20, 0xF3, 0x8F, 0x10, 0x69, 0x0D, 0xB2, 0x6F, 0x00, 0xCC, 0xC5, 0x51, 0x2E];
const KEY_03G_E: [u8; 16] = [0x4F, 0x44, 0x5C, 0x62, 0xB3, 0x53, 0xC4, 0x30, 0xFC, 0x3A, 0xA4, 0x5B, 0xEC, 0xFE, 0x51, 0xEA];
const KEY_05G_E: [u8; 16] = [0x5D, 0xAA, 0x72, 0xF2, 0x26, 0x60, 0x4D, 0x1C, 0xE7, 0x2D, 0xC8, 0xA3, 0x2F, 0x79, 0xC5, 0x54];
const KEY_ONESEG_310: [u8; 16] = [0xC7, 0x27, 0x72, 0x85, 0xAB, 0xA7, 0xF7, 0xF0, 0x4C, 0xC1, 0x86, 0xCC, 0xE3, 0x7F, 0x17, 0xCA];
const KEY_ONESEG_300: [u8; 16] = [0x76, 0x40, 0x9E, 0x08, 0xDB, 0x9B, 0x3B, 0xA1, 0x47, 0x8A, 0x96, 0x8E, 0xF3, 0xF7, 0x62, 0x92];
const KEY_ONESEG_280: [u8; 16] = [0x23, 0xDC, 0x3B, 0xB5, 0xA9, 0x82, 0xD6, 0xEA, 0x63, 0xA3, 0x6E, 0x2B, 0x2B, 0xE9, 0xE1, 0x54];
const KEY_ONESEG_260_271: [u8; 16] = [0x22, 0x43, 0x57, 0x68, 0x2F, 0x41, 0xCE, 0x65, 0x4C, 0xA3, 0x7C, 0xC6, 0xC4, 0xAC, 0xF3, 0x60];
const KEY_ONESEG_SLIM: [u8; 16] = [0x12, 0x57, 0x0D, 0x8A, 0x16, 0x6D, 0x87, 0x06, 0x03, 0x7D, 0xC8, 0x8B, 0x62, 0xA3, 0x32, 0xA9];
const KEY_MS_APP_MAIN: [u8; 16] = [0x1E, 0x2E, 0x38, 0x49, 0xDA, 0xD4, 0x16, 0x08, 0x27, 0x2E, 0xF3, 0xBC, 0x37, 0x75, 0x80, 0x93];
const KEY_DEMO_280: [u8; 16] = [0x12, 0x99, 0x70, 0x5E, 0x24, 0x07, 0x6C, 0xD0, 0x2D, 0x06, 0xFE, 0x7E, 0xB3, 0x0C, 0x11, 0x26];
const KEY_DEMO_3XX_1: [u8; 16] = [0x47, 0x05, 0xD5, 0xE3, 0x56, 0x1E, 0x81, 0x9B, 0x09, 0x2F, 0x06, 0xDB, 0x6B, 0x12, 0x92, 0xE0];
const KEY_DEMO_3XX_2: [u8; 16] = [0xF6, 0x62, 0x39, 0x6E, 0x26, 0x22, 0x4D, 0xCA, 0x02, 0x64, 0x16, 0x99, 0x7B, 0x9A, 0xE7, 0xB8];
const KEY_EBOOTBIN_271_NEW: [u8; 16] = [0xF4, 0xAE, 0xF4, 0xE1, 0x86, 0xDD, 0xD2, 0x9C, 0x7C, 0xC5, 0x42, 0xA6, 0x95, 0xA0, 0x83, 0x88];
const KEY_EBOOTBIN_280_NEW: [u8; 16] = [0xB8, 0x8C, 0x45, 0x8B, 0xB6, 0xE7, 0x6E, 0xB8, 0x51, 0x59, 0xA6, 0x53, 0x7C, 0x5E, 0x86, 0x31];
const KEY_EBOOTBIN_300_NEW: [u8; 16] = [0xED, 0x10, 0xE0, 0x36, 0xC4, 0xFE, 0x83, 0xF3, 0x75, 0x70, 0x5E, 0xF6, 0xA4, 0x40, 0x05, 0xF7];
const KEY_EBOOTBIN_310_NEW: [u8; 16] = [0x5C, 0x77, 0x0C, 0xBB, 0xB4, 0xC2, 0x4F, 0xA2, 0x7E, 0x3B, 0x4E, 0xB4, 0xB4, 0xC8, 0x70, 0xAF];
const KEY_GAMESHARE_260_271: [u8; 16] = [0xF9, 0x48, 0x38, 0x0C, 0x96, 0x88, 0xA7, 0x74, 0x4F, 0x65, 0xA0, 0x54, 0xC2, 0x76, 0xD9, 0xB8];
const KEY_GAMESHARE_280: [u8; 16] = [0x2D, 0x86, 0x77, 0x3A, 0x56, 0xA4, 0x4F, 0xDD, 0x3C, 0x16, 0x71, 0x93, 0xAA, 0x8E, 0x11, 0x43];
const KEY_GAMESHARE_300: [u8; 16] = [0x78, 0x1A, 0xD2, 0x87, 0x24, 0xBD, 0xA2, 0x96, 0x18, 0x3F, 0x89, 0x36, 0x72, 0x90, 0x92, 0x85];
const KEY_GAMESHARE_310: [u8; 16] = [0xC9, 0x7D, 0x3E, 0x0A, 0x54, 0x81, 0x6E, 0xC7, 0x13, 0x74, 0x99, 0x74, 0x62, 0x18, 0xE7, 0xDD];
const KEY_380210F0: [u8; 16] = [0x32, 0x2C, 0xFA, 0x75, 0xE4, 0x7E, 0x93, 0xEB, 0x9F, 0x22, 0x80, 0x85, 0x57, 0x08, 0x98, 0x48];
const KEY_380280F0: [u8; 16] = [0x97, 0x09, 0x12, 0xD3, 0xDB, 0x02, 0xBD, 0xD8, 0xE7, 0x74, 0x51, 0xFE, 0xF0, 0xEA, 0x6C, 0x5C];
const KEY_380283F0: [u8; 16] = [0x34, 0x20, 0x0C, 0x8E, 0xA1, 0x86, 0x79, 0x84, 0xAF, 0x13, 0xAE, 0x34, 0x77, 0x6F, 0xEA, 0x89];
const KEY_407810F0: [u8; 16] = [0xAF, 0xAD, 0xCA, 0xF1, 0x95, 0x59, 0x91, 0xEC, 0x1B, 0x27, 0xD0, 0x4E, 0x8A, 0xF3, 0x3D, 0xE7];
const KEY_DRM_6XX_1: [u8; 16] = [0x36, 0xEF, 0x82, 0x4E, 0x74, 0xFB, 0x17, 0x5B, 0x14, 0x14, 0x05, 0xF3, 0xB3, 0x8A, 0x76, 0x18];
const KEY_DRM_6XX_2: [u8; 16] = [0x21, 0x52, 0x5D, 0x76, 0xF6, 0x81, 0x0F, 0x15, 0x2F, 0x4A, 0x40, 0x89, 0x63, 0xA0, 0x10, 0x55];

pub static TAGS: &[TagInfo2] = &[
    TagInfo2::new(0x4C9494F0, &KEY_660_K1, 0x43, 0, "fw 6.60 k1"),
    TagInfo2::new(0x4C9495F0, &KEY_660_K2, 0x43, 0, "fw 6.60 k2"),
    TagInfo2::new(0x4C9490F0, &KEY_660_K3, 0x43, 0, "fw 6.60 k3"),
    TagInfo2::new(0x4C9491F0, &KEY_660_K8, 0x43, 0, "fw 6.60 k8"),
    TagInfo2::new(0x4C9493F0, &KEY_660_K4, 0x43, 0, "fw 6.60 k4"),
    TagInfo2::new(0x4C9497F0, &KEY_660_K5, 0x43, 0, "fw 6.60 k5"),
    TagInfo2::new(0x4C9492F0, &KEY_660_K6, 0x43, 0, "fw 6.60 k6"),
    TagInfo2::new(0x4C9496F0, &KEY_660_K7, 0x43, 0, "fw 6.60 k7"),
    TagInfo2::new(0x457B90F0, &KEY_660_V1, 0x5B, 0, "fw 6.60 v1"),
    TagInfo2::new(0x457B91F0, &KEY_660_V7, 0x5B, 0, "fw 6.60 v7"),
    TagInfo2::new(0x457B92F0, &KEY_660_V6, 0x5B, 0, "fw 6.60 v6"),
    TagInfo2::new(0x457B93F0, &KEY_660_V3, 0x5B, 0, "fw 6.60 v3"),
    TagInfo2::new(0x380290F0, &KEY_660_V2, 0x5A, 0, "fw 6.60 v2"),
    TagInfo2::new(0x380291F0, &KEY_660_V8, 0x5A, 0, "fw 6.60 v8"),
    TagInfo2::new(0x380292F0, &KEY_660_V4, 0x5A, 0, "fw 6.60 v4"),
    TagInfo2::new(0x380293F0, &KEY_660_V5, 0x5A, 0, "fw 6.60 v5"),
    TagInfo2::new(0x4C948CF0, &KEY_639_K3, 0x43, 0, "fw 6.39 k3"),
    TagInfo2::new(0x4C948DF0, &KEY_638_K4, 0x43, 0, "fw 6.38 k4"),
    TagInfo2::new(0x4C948BF0, &KEY_636_K2, 0x43, 0, "fw 6.36 k2"),
    TagInfo2::new(0x4C948AF0, &KEY_636_K1, 0x43, 0, "fw 6.36 k1"),
    TagInfo2::new(0x4C9487F0, &KEY_630_K8, 0x43, 0, "fw 6.30 k8"),
    TagInfo2::new(0x457B83F0, &KEY_630_K7, 0x5B, 0, "fw 6.30 k7"),
    TagInfo2::new(0x4C9486F0, &KEY_630_K6, 0x43, 0, "fw 6.30 k6"),
    TagInfo2::new(0x457B82F0, &KEY_630_K5, 0x5B, 0, "fw 6.30 k5"),
    TagInfo2::new(0x457B81F0, &KEY_630_K4, 0x5B, 0, "fw 6.30 k4"),
    TagInfo2::new(0x4C9485F0, &KEY_630_K3, 0x43, 0, "fw 6.30 k3"),
    TagInfo2::new(0x457B80F0, &KEY_630_K2, 0x5B, 0, "fw 6.30 k2"),
    TagInfo2::new(0x4C9484F0, &KEY_630_K1, 0x43, 0, "fw 6.30 k1"),
    TagInfo2::new(0x457B28F0, &KEY_620_E, 0x5B, 0, "fw 6.20 e"),
    TagInfo2::new(0x457B0CF0, &KEY_620_A, 0x5B, 0, "fw 6.20 a"),
    TagInfo2::new(0x380228F0, &KEY_620_5V, 0x5A, 0, "fw 6.20 5v"),
    TagInfo2::new(0x4C942AF0, &KEY_620_5K, 0x43, 0, "fw 6.20 5k"),
    TagInfo2::new(0x4C9428F0, &KEY_620_5, 0x43, 0, "fw 6.20 5"),
    TagInfo2::new(0x4C941DF0, &KEY_620_1, 0x43, 0, "fw 6.20 1"),
    TagInfo2::new(0x4C941CF0, &KEY_620_0, 0x43, 0, "fw 6.20 0"),
    TagInfo2::new(0x4C9422F0, &KEY_600_2, 0x43, 0, "fw 6.00 2"),
    TagInfo2::new(0x4C941EF0, &KEY_600_1, 0x43, 0, "fw 6.00 1"),
    TagInfo2::new(0x4C9429F0, &KEY_570_5K, 0x43, 0, "fw 5.70 5k"),
    TagInfo2::new(0x457B0BF0, &KEY_505_A, 0x5B, 0, "fw 5.05 a"),
    TagInfo2::new(0x4C9419F0, &KEY_505_1, 0x43, 0, "fw 5.05 1"),
    TagInfo2::new(0x4C9418F0, &KEY_505_0, 0x43, 0, "fw 5.05 0"),
    TagInfo2::new(0x457B1EF0, &KEY_500_C, 0x5B, 0, "fw 5.00 c"),
    TagInfo2::new(0x4C941FF0, &KEY_500_2, 0x43, 0, "fw 5.00 2"),
    TagInfo2::new(0x4C9417F0, &KEY_500_1, 0x43, 0, "fw 5.00 1"),
    TagInfo2::new(0x4C9416F0, &KEY_500_0, 0x43, 0, "fw 5.00 0"),
    TagInfo2::new(0x4C9414F0, &KEY_390_0, 0x43, 0, "fw 3.90 0"),
    TagInfo2::new(0x4C9415F0, &KEY_390_1, 0x43, 0, "fw 3.90 1"),
    TagInfo2::new(0x4C9412F0, &KEY_370_0, 0x43, 0, "fw 3.70 0"),
    TagInfo2::new(0x4C9413F0, &KEY_370_1, 0x43, 0, "fw 3.70 1"),
    TagInfo2::new(0x457B10F0, &KEY_370_2, 0x5B, 0, "fw 3.70 2"),
    TagInfo2::new(0x4C940DF0, &KEY_360_0, 0x43, 0, "fw 3.60 0"),
    TagInfo2::new(0x4C9410F0, &KEY_360_1, 0x43, 0, "fw 3.60 1"),
    TagInfo2::new(0x4C940BF0, &KEY_330_0, 0x43, 0, "fw 3.30 0"),
    TagInfo2::new(0x457B0AF0, &KEY_330_1, 0x5B, 0, "fw 3.30 1"),
    TagInfo2::new(0x38020AF0, &KEY_330_2, 0x5A, 0, "fw 3.30 2"),
    TagInfo2::new(0x4C940AF0, &KEY_330_3, 0x43, 0, "fw 3.30 3"),
    TagInfo2::new(0x4C940CF0, &KEY_330_4, 0x43, 0, "fw 3.30 4"),
    TagInfo2::new(0xCFEF09F0, &KEY_310_0, 0x62, 0, "fw 3.10 0"),
    TagInfo2::new(0x457B08F0, &KEY_310_1, 0x5B, 0, "fw 3.10 1"),
    TagInfo2::new(0x380208F0, &KEY_310_2, 0x5A, 0, "fw 3.10 2"),
    TagInfo2::new(0xCFEF08F0, &KEY_310_3, 0x62, 0, "fw 3.10 3"),
    TagInfo2::new(0xCFEF07F0, &KEY_303_0, 0x62, 0, "fw 3.03 0"),
    TagInfo2::new(0xCFEF06F0, &KEY_300_0, 0x62, 0, "fw 3.00 0"),
    TagInfo2::new(0x457B06F0, &KEY_300_1, 0x5B, 0, "fw 3.00 1"),
    TagInfo2::new(0x380206F0, &KEY_300_2, 0x5A, 0, "fw 3.00 2"),
    TagInfo2::new(0xCFEF05F0, &KEY_280_0, 0x62, 0, "fw 2.80 0"),
    TagInfo2::new(0x457B05F0, &KEY_280_1, 0x5B, 0, "fw 2.80 1"),
    TagInfo2::new(0x380205F0, &KEY_280_2, 0x5A, 0, "fw 2.80 2"),
    TagInfo2::new(0x16D59E03, &KEY_260_0, 0x62, 0, "fw 2.60 0"),
    TagInfo2::new(0x76202403, &KEY_260_1, 0x5B, 0, "fw 2.60 1"),
    TagInfo2::new(0x0F037303, &KEY_260_2, 0x5A, 0, "fw 2.60 2"),
    TagInfo2::new(0x4C940FF0, &KEY_2DA8, 0x43, 0, "module 2DA8"),
    TagInfo2::new(0x4467415D, &KEY_22E0, 0x59, 0, "module 22E0"),
    TagInfo2::new(0x00000000, &KEY_21C0, 0x42, 0, "module 21C0"),
    TagInfo2::new(0x01000000, &KEY_2250, 0x43, 0, "module 2250"),
    TagInfo2::new(0x2E5E10F0, &KEY_2E5E10F0, 0x48, 0, "module 2E5E10F0"),
    TagInfo2::new(0x2E5E12F0, &KEY_2E5E12F0, 0x48, 0, "module 2E5E12F0"),
    TagInfo2::new(0x2E5E13F0, &KEY_2E5E13F0, 0x48, 0, "module 2E5E13F0"),
    TagInfo2::new(0x2FD30BF0, &KEY_2FD30BF0, 0x47, 0, "module 2FD30BF0"),
    TagInfo2::new(0x2FD311F0, &KEY_2FD311F0, 0x47, 0, "module 2FD311F0"),
    TagInfo2::new(0x2FD312F0, &KEY_2FD312F0, 0x47, 0, "module 2FD312F0"),
    TagInfo2::new(0xD91605F0, &KEY_D91605F0, 0x5D, 0, "module D91605F0"),
    TagInfo2::new(0xD91606F0, &KEY_D91606F0, 0x5D, 0, "module D91606F0"),
    TagInfo2::new(0xD91608F0, &KEY_D91608F0, 0x5D, 0, "module D91608F0"),
    TagInfo2::new(0xD91609F0, &KEY_D91609F0, 0x5D, 0, "module D91609F0"),
    TagInfo2::new(0xD9160AF0, &KEY_D9160AF0, 0x5D, 0, "module D9160AF0"),
    TagInfo2::new(0xD9160BF0, &KEY_D9160BF0, 0x5D, 0, "module D9160BF0"),
    TagInfo2::new(0xD91611F0, &KEY_D91611F0, 0x5D, 0, "module D91611F0"),
    TagInfo2::new(0xD91612F0, &KEY_D91612F0, 0x5D, 0, "module D91612F0"),
    TagInfo2::new(0xD91613F0, &KEY_D91613F0, 0x5D, 0, "module D91613F0"),
    TagInfo2::new(0xD91614F0, &KEY_D91614F0, 0x5D, 0, "module D91614F0"),
    TagInfo2::new(0xD91615F0, &KEY_D91615F0, 0x5D, 0, "module D91615F0"),
    TagInfo2::new(0xD91616F0, &KEY_D91616F0, 0x5D, 0, "module D91616F0"),
    TagInfo2::new(0xD91617F0, &KEY_D91617F0, 0x5D, 0, "module D91617F0"),
    TagInfo2::new(0xD91618F0, &KEY_D91618F0, 0x5D, 0, "module D91618F0"),
    TagInfo2::new(0xD91619F0, &KEY_D91619F0, 0x5D, 0, "module D91619F0"),
    TagInfo2::new(0xD9161AF0, &KEY_D9161AF0, 0x5D, 0, "module D9161AF0"),
    TagInfo2::new(0xD91620F0, &KEY_D91620F0, 0x5D, 0, "module D91620F0"),
    TagInfo2::new(0xD91621F0, &KEY_D91621F0, 0x5D, 0, "module D91621F0"),
    TagInfo2::new(0xD91622F0, &KEY_D91622F0, 0x5D, 0, "module D91622F0"),
    TagInfo2::new(0xD91623F0, &KEY_D91623F0, 0x5D, 0, "module D91623F0"),
    TagInfo2::new(0xD91624F0, &KEY_D91624F0, 0x5D, 0, "module D91624F0"),
    TagInfo2::new(0xD91628F0, &KEY_D91628F0, 0x5D, 0, "module D91628F0"),
    TagInfo2::new(0xD91680F0, &KEY_D91680F0, 0x5D, 0, "module D91680F0"),
    TagInfo2::new(0xD91681F0, &KEY_D91681F0, 0x5D, 0, "module D91681F0"),
    TagInfo2::new(0xD82310F0, &KEY_02G_E, 0x51, 0, "go 2g"),
    TagInfo2::new(0xD8231EF0, &KEY_03G_E, 0x51, 0, "go 3g"),
    TagInfo2::new(0xD82328F0, &KEY_05G_E, 0x51, 0, "go 5g"),
    TagInfo2::new(0x279D08F0, &KEY_ONESEG_310, 0x61, 0, "oneseg 310"),
    TagInfo2::new(0x279D06F0, &KEY_ONESEG_300, 0x61, 0, "oneseg 300"),
    TagInfo2::new(0x279D05F0, &KEY_ONESEG_280, 0x61, 0, "oneseg 280"),
    TagInfo2::new(0xD66DF703, &KEY_ONESEG_260_271, 0x61, 0, "oneseg 260 271"),
    TagInfo2::new(0x279D10F0, &KEY_ONESEG_SLIM, 0x61, 0, "oneseg slim"),
    TagInfo2::new(0x3C2A08F0, &KEY_MS_APP_MAIN, 0x67, 0, "memory stick app"),
    TagInfo2::new(0xADF305F0, &KEY_DEMO_280, 0x60, 0, "demo 280"),
    TagInfo2::new(0xADF306F0, &KEY_DEMO_3XX_1, 0x60, 0, "demo 3XX 1"),
    TagInfo2::new(0xADF308F0, &KEY_DEMO_3XX_2, 0x60, 0, "demo 3XX 2"),
    TagInfo2::new(0x8004FD03, &KEY_EBOOTBIN_271_NEW, 0x5D, 0, "eboot 271 new"),
    TagInfo2::new(0xD91605F0, &KEY_EBOOTBIN_280_NEW, 0x5D, 0, "eboot 280 new"),
    TagInfo2::new(0xD91606F0, &KEY_EBOOTBIN_300_NEW, 0x5D, 0, "eboot 300 new"),
    TagInfo2::new(0xD91608F0, &KEY_EBOOTBIN_310_NEW, 0x5D, 0, "eboot 310 new"),
    TagInfo2::new(0x0A35EA03, &KEY_GAMESHARE_260_271, 0x5E, 0, "gameshare 260 271"),
    TagInfo2::new(0x7B0505F0, &KEY_GAMESHARE_280, 0x5E, 0, "gameshare 280"),
    TagInfo2::new(0x7B0506F0, &KEY_GAMESHARE_300, 0x5E, 0, "gameshare 300"),
    TagInfo2::new(0x7B0508F0, &KEY_GAMESHARE_310, 0x5E, 0, "gameshare 310"),
    TagInfo2::new(0x380210F0, &KEY_380210F0, 0x5A, 0, "module 380210F0"),
    TagInfo2::new(0x380280F0, &KEY_380280F0, 0x5A, 0, "module 380280F0"),
    TagInfo2::new(0x380283F0, &KEY_380283F0, 0x5A, 0, "module 380283F0"),
    TagInfo2::new(0x407810F0, &KEY_407810F0, 0x6A, 0, "module 407810F0"),
    TagInfo2::new(0xE92410F0, &KEY_DRM_6XX_1, 0x40, 0, "drm 6XX 1"),
    TagInfo2::new(0x692810F0, &KEY_DRM_6XX_2, 0x40, 0, "drm 6XX 2"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(TAGS.len(), 131);
    }

    #[test]
    fn test_lookup() {
        let info = lookup(0xD91609F0).unwrap();
        assert_eq!(info.code, 0x5D);
        assert_eq!(info.key[0], 0xD0);
        assert!(!info.uses_alt_layout());
        assert!(lookup(0xDEADBEEF).is_none());
    }

    #[test]
    fn test_duplicates_resolve_to_first_entry() {
        assert_eq!(duplicate_tags(), vec![0xD91605F0, 0xD91606F0, 0xD91608F0]);
        assert_eq!(lookup(0xD91605F0).unwrap().label, "module D91605F0");

        // the shadowed entries carry the same key, so first-match is harmless
        for &tag in &duplicate_tags() {
            let mut entries = iter().filter(|t| t.tag == tag);
            let first = entries.next().unwrap();
            assert!(entries.all(|t| t.key == first.key));
        }
    }

    #[test]
    fn test_catalog_uses_plain_layout() {
        assert!(iter().all(|t| !t.uses_alt_layout()));
        let alt = TagInfo2::new(0x1, &[0; 16], 0x5D, ALT_LAYOUT, "alt");
        assert!(alt.uses_alt_layout());
    }
}
