//! Deterministic engine and module builders for tests.
//!
//! [`MockEngine`] stands in for the hardware with AES-128-CBC keyed per engine
//! code. The `seal_*` builders run the decoder construction backwards so a
//! known plaintext can be encrypted and then recovered.

use aes::cipher::block_padding::NoPadding;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use byteorder::{ByteOrder, LittleEndian};
use sha1::{Digest, Sha1};

use crate::engine::{Command, CryptoEngine, EngineError, SCRAMBLE_HEADER_LEN};
use crate::layout::{HEADER_LEN, SIZE_FIELD, TAG_FIELD};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

const IV: [u8; 16] = [0; 16];

/// Offset from the end of the tag block to the payload.
pub const DATA_OFFSET: u32 = 0x80;

/// Key for the engine slot selected by `code`.
pub fn slot_key(code: u32) -> [u8; 16] {
    std::array::from_fn(|i| (code as u8).wrapping_mul(i as u8 + 1) ^ 0xA5)
}

pub fn cbc_encrypt(key: &[u8], data: &mut [u8]) {
    let len = data.len();
    Aes128CbcEnc::new(GenericArray::from_slice(key), GenericArray::from_slice(&IV))
        .encrypt_padded_mut::<NoPadding>(data, len)
        .unwrap();
}

pub fn cbc_decrypt(key: &[u8], data: &mut [u8]) {
    Aes128CbcDec::new(GenericArray::from_slice(key), GenericArray::from_slice(&IV))
        .decrypt_padded_mut::<NoPadding>(data)
        .unwrap();
}

fn xor16(a: &[u8], b: &[u8]) -> [u8; 16] {
    std::array::from_fn(|i| a[i] ^ b[i])
}

fn encrypt_block(key: &[u8], block: [u8; 16]) -> [u8; 16] {
    let mut block = block;
    cbc_encrypt(key, &mut block);
    block
}

fn padded(len: usize) -> usize {
    len.div_ceil(16) * 16
}

/// Engine backed by AES-128-CBC with per-code keys.
#[derive(Debug, Default)]
pub struct MockEngine {
    /// Every command received, in order.
    pub calls: Vec<Command>,
    /// Command header of each accepted [`Command::Decrypt`].
    pub decrypt_headers: Vec<[u8; 0x90]>,
    fail_at: Option<(Command, usize)>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the `nth` (zero-based) invocation of `command`.
    pub fn failing(command: Command, nth: usize) -> Self {
        Self {
            fail_at: Some((command, nth)),
            ..Self::default()
        }
    }

    fn check_range(command: Command, needed: usize, buf: &[u8]) -> Result<(), EngineError> {
        if needed > buf.len() {
            return Err(EngineError::OutOfRange {
                command,
                needed,
                available: buf.len(),
            });
        }
        Ok(())
    }

    fn rejected(command: Command) -> EngineError {
        EngineError::Rejected { command, status: -1 }
    }

    fn decrypt_iv0(buf: &mut [u8], input: usize) -> Result<(), EngineError> {
        let command = Command::DecryptIv0;
        Self::check_range(command, input + SCRAMBLE_HEADER_LEN, buf)?;
        let mut words = [0u32; 5];
        LittleEndian::read_u32_into(&buf[input..input + SCRAMBLE_HEADER_LEN], &mut words);
        let [mode, _, _, code, size] = words;
        let size = size as usize;
        if mode != 5 || size % 16 != 0 {
            return Err(Self::rejected(command));
        }
        let start = input + SCRAMBLE_HEADER_LEN;
        Self::check_range(command, start + size, buf)?;

        let mut data = buf[start..start + size].to_vec();
        cbc_decrypt(&slot_key(code), &mut data);
        buf[..size].copy_from_slice(&data);
        Ok(())
    }

    fn decrypt(buf: &mut [u8], input: usize) -> Result<(), EngineError> {
        let command = Command::Decrypt;
        Self::check_range(command, input + 0x90, buf)?;
        let header = &buf[input..input + 0x90];
        let mode = LittleEndian::read_u32(&header[0x60..]);
        let size = LittleEndian::read_u32(&header[0x70..]) as usize;
        let offset = LittleEndian::read_u32(&header[0x74..]) as usize;
        if mode != 1 {
            return Err(Self::rejected(command));
        }
        let key: [u8; 16] = header[..16].try_into().unwrap();
        let start = input + 0x90 + offset;
        Self::check_range(command, start + padded(size), buf)?;

        let mut data = buf[start..start + padded(size)].to_vec();
        cbc_decrypt(&key, &mut data);
        buf[..size].copy_from_slice(&data[..size]);
        Ok(())
    }

    fn sha1(buf: &mut [u8], input: usize) -> Result<(), EngineError> {
        let command = Command::Sha1;
        Self::check_range(command, input + 4, buf)?;
        let len = LittleEndian::read_u32(&buf[input..]) as usize;
        Self::check_range(command, input + 4 + len, buf)?;
        let digest = Sha1::digest(&buf[input + 4..input + 4 + len]);
        buf[..20].copy_from_slice(&digest);
        Ok(())
    }
}

impl CryptoEngine for MockEngine {
    fn transform(
        &mut self,
        command: Command,
        buf: &mut [u8],
        input_offset: usize,
    ) -> Result<(), EngineError> {
        let nth = self.calls.iter().filter(|&&c| c == command).count();
        self.calls.push(command);
        if self.fail_at == Some((command, nth)) {
            return Err(Self::rejected(command));
        }
        if command == Command::Decrypt {
            if let Some(header) = buf.get(input_offset..input_offset + 0x90) {
                self.decrypt_headers.push(header.try_into().unwrap());
            }
        }
        match command {
            Command::DecryptIv0 => Self::decrypt_iv0(buf, input_offset),
            Command::Decrypt => Self::decrypt(buf, input_offset),
            Command::Sha1 => Self::sha1(buf, input_offset),
        }
    }
}

/// A module header with the fields every builder needs.
fn base_header(tag: u32, declared: u32) -> [u8; HEADER_LEN] {
    let mut header: [u8; HEADER_LEN] = std::array::from_fn(|i| (i as u8).wrapping_mul(7) ^ 0x3C);
    header[..4].copy_from_slice(b"~PSP");
    header[0x0A..0x14].copy_from_slice(b"sceTestMod");
    SIZE_FIELD.write_u32(&mut header, declared);
    LittleEndian::write_u32(&mut header[0xB4..], DATA_OFFSET);
    TAG_FIELD.write_u32(&mut header, tag);
    header
}

/// Header followed by `plaintext` encrypted with `key`.
fn assemble(header: &[u8; HEADER_LEN], key: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let mut payload = plaintext.to_vec();
    payload.resize(padded(plaintext.len()), 0);
    cbc_encrypt(key, &mut payload);

    let mut module = header.to_vec();
    module.extend_from_slice(&payload);
    module
}

/// Payload key used by the builders.
pub const PAYLOAD_KEY: [u8; 16] = *b"prx-payload-key!";

/// Build a Variant-1 module from the effective (already scrambled) key.
pub fn seal_v1(tag: u32, key: &[u8; 0x90], code: u8, code_extra: u8, plaintext: &[u8]) -> Vec<u8> {
    let mut header = base_header(tag, plaintext.len() as u32);

    // the engine's first output block, XORed with key[0x20..0x30], becomes the payload key
    let desired = xor16(
        &encrypt_block(&slot_key(code.into()), xor16(&PAYLOAD_KEY, &key[0x20..0x30])),
        &key[0x14..0x24],
    );
    let block = if code_extra == 0 {
        desired
    } else {
        // block 3 of the extra-mangled window is chained to block 2
        encrypt_block(&slot_key(code_extra.into()), xor16(&desired, &header[0x100..0x110]))
    };
    header[0x110..0x120].copy_from_slice(&block);

    assemble(&header, &PAYLOAD_KEY, plaintext)
}

/// The expanded key block after scrambling with `code`.
pub fn scrambled_key_block(key: &[u8; 16], code: u8) -> [u8; 0x90] {
    let mut block = [0u8; 0x90];
    for (index, chunk) in block.chunks_exact_mut(16).enumerate() {
        chunk.copy_from_slice(key);
        chunk[0] = index as u8;
    }
    cbc_decrypt(&slot_key(code.into()), &mut block);
    block
}

/// Build a Variant-2 module.
///
/// `len` is the total module length; it must leave room for the payload.
pub fn seal_v2(tag: u32, key: &[u8; 16], code: u8, alt_layout: bool, plaintext: &[u8], len: usize) -> Vec<u8> {
    let mut header = base_header(tag, plaintext.len() as u32);
    let slot = slot_key(code.into());
    let s = scrambled_key_block(key, code);

    // plaintext of the re-mangled header window
    let mut t: [u8; 0x60] = std::array::from_fn(|i| (i as u8) ^ 0x96);
    let unwrapped = encrypt_block(&slot, xor16(&PAYLOAD_KEY, &s[0x50..0x60]));
    t[0x24..0x34].copy_from_slice(&xor16(&unwrapped, &s[0x10..0x20]));

    // what the decoder hashes
    let mut hashed = [0u8; HEADER_LEN];
    LittleEndian::write_u32(&mut hashed, 0x14C);
    hashed[4..8].copy_from_slice(&header[0xD0..0xD4]);
    hashed[8..0x18].copy_from_slice(&s[..0x10]);
    if alt_layout {
        hashed[0x50..0x70].copy_from_slice(&header[0x10C..0x12C]);
    }
    hashed[0x70..0x80].copy_from_slice(&t[..0x10]);
    hashed[0x80..0xBC].copy_from_slice(&t[0x24..0x60]);
    hashed[0xBC..0xC0].copy_from_slice(&header[0xCC..0xD0]);
    hashed[0xC0..0xD0].copy_from_slice(&header[0xB0..0xC0]);
    hashed[0xD0..0x150].copy_from_slice(&header[..0x80]);
    let digest = Sha1::digest(&hashed[4..]);
    t[0x10..0x24].copy_from_slice(&digest);

    let mut c = t;
    cbc_encrypt(&slot, &mut c);
    header[0x140..0x150].copy_from_slice(&c[..0x10]);
    header[0x12C..0x140].copy_from_slice(&c[0x10..0x24]);
    header[0x80..0xB0].copy_from_slice(&c[0x24..0x54]);
    header[0xC0..0xCC].copy_from_slice(&c[0x54..0x60]);

    let mut module = assemble(&header, &PAYLOAD_KEY, plaintext);
    assert!(module.len() <= len, "module does not fit in {len:#x} bytes");
    module.resize(len, 0xCD);
    module
}

/// A recognizable plaintext of `len` bytes.
pub fn plaintext(len: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
    let magic = b"\x7FELF";
    let n = magic.len().min(len);
    data[..n].copy_from_slice(&magic[..n]);
    data
}
