//! Typed view of the encrypted module header.

use prxcrypt_common::BinaryReader;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::layout::HEADER_LEN;
use crate::{Error, Result};

/// The 0x150-byte header at the start of an encrypted module.
///
/// Field offsets match the [`layout`](crate::layout) regions; the decoders
/// work on raw regions and this view is for inspection.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct PrxHeader {
    /// `~PSP`.
    pub signature: [u8; 4],
    pub mod_attribute: u16,
    /// Bit 0 set when the payload is compressed.
    pub comp_attribute: u16,
    pub module_ver_lo: u8,
    pub module_ver_hi: u8,
    /// NUL-padded module name.
    pub mod_name: [u8; 28],
    pub version: u8,
    pub nsegments: u8,
    pub elf_size: u32,
    pub psp_size: u32,
    pub entry: u32,
    pub modinfo_offset: u32,
    pub bss_size: u32,
    pub seg_align: [u16; 4],
    pub seg_address: [u32; 4],
    pub seg_size: [u32; 4],
    pub reserved: [u32; 5],
    pub devkit_version: u32,
    pub decrypt_mode: u8,
    pub padding: u8,
    pub overlap_size: u16,
    pub aes_key: [u8; 16],
    pub cmac_key: [u8; 16],
    pub cmac_header_hash: [u8; 16],
    /// Declared plaintext size (0xB0).
    pub data_size: u32,
    /// Payload offset relative to the end of the tag block (0xB4).
    pub data_offset: u32,
    pub unk_b8: u32,
    pub unk_bc: u32,
    pub cmac_data_hash: [u8; 16],
    /// Format tag (0xD0).
    pub tag: u32,
    pub sig_check: [u8; 0x58],
    pub sha1_hash: [u8; 0x14],
    pub key_data: [u8; 0x10],
}

const _: () = assert!(std::mem::size_of::<PrxHeader>() == HEADER_LEN);

impl PrxHeader {
    /// Expected signature.
    pub const MAGIC: [u8; 4] = *b"~PSP";

    const KERNEL_MODE: u16 = 0x1000;

    /// Read the header from the start of `buf`.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_LEN {
            return Err(Error::BufferTooSmall {
                needed: HEADER_LEN,
                actual: buf.len(),
            });
        }
        Ok(BinaryReader::new(buf).read_struct::<Self>()?)
    }

    pub fn has_psp_magic(&self) -> bool {
        self.signature == Self::MAGIC
    }

    pub fn is_compressed(&self) -> bool {
        let attr = self.comp_attribute;
        attr & 1 != 0
    }

    pub fn is_kernel_module(&self) -> bool {
        let attr = self.mod_attribute;
        attr & Self::KERNEL_MODE != 0
    }

    /// Module name up to the first NUL, lossily decoded.
    pub fn module_name(&self) -> String {
        let name = self.mod_name;
        let end = name.iter().position(|&b| b == 0).unwrap_or(name.len());
        String::from_utf8_lossy(&name[..end]).into_owned()
    }

    /// `(major, minor)` module version.
    pub fn module_version(&self) -> (u8, u8) {
        (self.module_ver_hi, self.module_ver_lo)
    }
}
