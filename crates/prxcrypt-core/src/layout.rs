//! Fixed byte layout of an encrypted module.
//!
//! The first 0x150 bytes of a module are a header whose fields the decoders
//! shuffle into the arrangement the engine expects. Offsets here are part of
//! the binary format.
//!
//! ```text
//! 0x000 +-------------------------+
//!       | ~PSP header     (0x80)  |
//! 0x080 +-------------------------+
//!       | mid block       (0x50)  |  0xB0..0xD0 holds the size block
//! 0x0D0 +-------------------------+
//!       | tag block       (0x80)  |  tag at 0xD0
//! 0x150 +-------------------------+
//!       | payload                 |
//! ```

use byteorder::{ByteOrder, LittleEndian};
use prxcrypt_common::Region;

use crate::{Error, Result};

/// Length of the encrypted header.
pub const HEADER_LEN: usize = 0x150;

/// Smallest buffer Variant 2 accepts.
pub const MIN_V2_LEN: usize = 0x160;

/// Leading `~PSP` header.
pub const PSP_HEADER: Region = Region::new(0x00, 0x80);

/// Block between the `~PSP` header and the tag block.
pub const MID_BLOCK: Region = Region::new(0x80, 0x50);

/// Size/reserved block.
pub const SIZE_BLOCK: Region = Region::new(0xB0, 0x20);

/// Declared plaintext size, little-endian.
pub const SIZE_FIELD: Region = Region::new(0xB0, 4);

/// Tag block.
pub const TAG_BLOCK: Region = Region::new(0xD0, 0x80);

/// Format tag, little-endian.
pub const TAG_FIELD: Region = Region::new(0xD0, 4);

/// Scratch bytes the engine ignores.
pub const SCRATCH: Region = Region::new(0x00, 0x40);

/// Fill for [`SCRATCH`].
pub const SCRATCH_FILL: u8 = 0x55;

/// Offset of the 0x90-byte command header consumed by [`Command::Decrypt`].
///
/// [`Command::Decrypt`]: crate::Command::Decrypt
pub const DECRYPT_HEADER_OFFSET: usize = 0x40;

/// Mode word of the decrypt command header.
pub const DECRYPT_MODE: Region = Region::new(0xA0, 4);

/// Second mode word, set only in the alternate Variant-2 layout.
pub const DECRYPT_MODE_ALT: Region = Region::new(0xA4, 4);

/// Mode value selecting plain payload decryption.
pub const MODE_DECRYPT: u32 = 1;

/// Variant-2 header relocations, `(source, destination offset)`, applied from
/// a snapshot of the original header.
pub const V2_RELOCATIONS: [(Region, usize); 7] = [
    (Region::new(0xD0, 0x5C), 0x00),
    (Region::new(0x140, 0x10), 0x5C),
    (Region::new(0x12C, 0x14), 0x6C),
    (Region::new(0x80, 0x30), 0x80),
    (Region::new(0xC0, 0x10), 0xB0),
    (Region::new(0xB0, 0x10), 0xC0),
    (Region::new(0x00, 0x80), 0xD0),
];

/// Read the format tag.
pub fn read_tag(buf: &[u8]) -> Result<u32> {
    read_word(buf, TAG_FIELD)
}

/// Read the declared plaintext size.
pub fn read_declared_size(buf: &[u8]) -> Result<u32> {
    read_word(buf, SIZE_FIELD)
}

fn read_word(buf: &[u8], field: Region) -> Result<u32> {
    let bytes = field.get(buf).map_err(|_| Error::BufferTooSmall {
        needed: field.end(),
        actual: buf.len(),
    })?;
    Ok(LittleEndian::read_u32(bytes))
}
