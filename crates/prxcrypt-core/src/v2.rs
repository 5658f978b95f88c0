//! Variant-2 decoder.
//!
//! The 16-byte catalog key is expanded and scrambled, the header is relocated
//! into the engine's layout and re-mangled, and the result is checked against
//! the SHA-1 digest the module carries before the payload key is unwrapped.
//!
//! Engine calls, in order: key scramble, header scramble, SHA-1, key-data
//! scramble, decrypt. Each failure has its own status code.

use log::{debug, warn};
use prxcrypt_common::{xor, Region};
use prxcrypt_keys::{v2, KeyGate, TagInfo2};

use crate::engine::{Command, CryptoEngine, SCRAMBLE_HEADER_LEN};
use crate::layout::{
    read_declared_size, DECRYPT_HEADER_OFFSET, DECRYPT_MODE, DECRYPT_MODE_ALT, HEADER_LEN,
    MIN_V2_LEN, MODE_DECRYPT, V2_RELOCATIONS,
};
use crate::{Error, Result, Step, Variant};

const KEY_BLOCK_LEN: usize = 0x90;

/// Header window scrambled after relocation.
const MANGLE_WINDOW: Region = Region::new(0x5C, 0x60);

/// Digest the module expects, inside the mangled window.
const EXPECTED_DIGEST: Region = Region::new(0x6C, 0x14);

/// Leading block of the mangled window, duplicated to 0x70.
const MANGLE_HEAD: Region = Region::new(0x5C, 0x10);

/// Side block kept by the alternate layout.
const SIDE_BLOCK: Region = Region::new(0x3C, 0x20);

/// Where the side block sits in the digest input.
const SIDE_IN_DIGEST: usize = 0x50;

/// Where the side block sits in the decrypt command header.
const SIDE_IN_HEADER: usize = 0x80;

const CLEAR_PLAIN: Region = Region::new(0x18, 0x58);
const CLEAR_ALT: Region = Region::new(0x18, 0x38);

/// Length word read by the digest command.
const DIGEST_LEN: Region = Region::new(0x00, 4);

/// Length of the digest input following [`DIGEST_LEN`].
const DIGEST_INPUT_LEN: u32 = 0x14C;

/// First key-block bytes mixed into the digest input.
const DIGEST_KEY: Region = Region::new(0x08, 0x10);

const DIGEST: Region = Region::new(0x00, 0x14);

/// Wrapped key data.
const KEY_DATA: Region = Region::new(0x80, 0x40);

/// Where the unwrapped key data goes.
const KEY_DEST: Region = Region::new(0x40, 0x40);

const TAIL_PLAIN: Region = Region::new(0x80, 0x30);
const TAIL_ALT: Region = Region::new(0xA0, 0x10);

/// Header hash moved down before decryption.
const CMAC_HASH: Region = Region::new(0xC0, 0x10);
const CMAC_HASH_DEST: usize = 0xB0;

/// Decrypt `buf` in place as a Variant-2 module with the given tag.
///
/// Returns the declared plaintext size. When that size is below 0x150 the
/// rest of the first 0x150 bytes is zeroed.
pub fn decrypt<E>(engine: &mut E, gate: &KeyGate, buf: &mut [u8], tag: u32) -> Result<u32>
where
    E: CryptoEngine + ?Sized,
{
    let info = v2::lookup(tag).ok_or(Error::UnknownTag {
        tag,
        variant: Variant::V2,
    })?;
    if let Some(code) = gate.missing_code(info) {
        return Err(Error::MissingKey { tag, code });
    }
    debug!("tag {tag:#010x}: variant 2 entry \"{}\"", info.label);
    decrypt_with(engine, info, buf)
}

/// Decrypt `buf` in place with an explicit catalog entry, skipping lookup and
/// the capability gate.
pub fn decrypt_with<E>(engine: &mut E, info: &TagInfo2, buf: &mut [u8]) -> Result<u32>
where
    E: CryptoEngine + ?Sized,
{
    if buf.len() < MIN_V2_LEN {
        return Err(Error::BufferTooSmall {
            needed: MIN_V2_LEN,
            actual: buf.len(),
        });
    }
    let declared = read_declared_size(buf)?;
    let available = buf.len() - HEADER_LEN;
    if u64::from(declared) > available as u64 {
        return Err(Error::SizeExceedsBuffer {
            declared,
            available,
        });
    }
    let code = u32::from(info.code);

    let header: [u8; HEADER_LEN] = Region::new(0, HEADER_LEN).snapshot(buf);
    let key_block = expand_key(engine, info)?;

    for (source, dest) in V2_RELOCATIONS {
        source.at(dest).write(buf, source.slice(&header));
    }

    let mut request = [0u8; SCRAMBLE_HEADER_LEN + 0x60];
    request[SCRAMBLE_HEADER_LEN..].copy_from_slice(MANGLE_WINDOW.slice(buf));
    engine
        .scramble(&mut request, code)
        .map_err(Error::engine(Variant::V2, Step::HeaderMangle))?;
    MANGLE_WINDOW.write(buf, &request[..MANGLE_WINDOW.len]);
    let expected: [u8; 0x14] = EXPECTED_DIGEST.snapshot(buf);
    MANGLE_HEAD.copy_to(buf, 0x70);

    let side: Option<[u8; 0x20]> = info.uses_alt_layout().then(|| SIDE_BLOCK.snapshot(buf));
    match &side {
        Some(side) => {
            SIDE_BLOCK.at(SIDE_IN_DIGEST).write(buf, side);
            CLEAR_ALT.fill(buf, 0);
        }
        None => CLEAR_PLAIN.fill(buf, 0),
    }

    // the relocated tag moves up one word to make room for the length
    Region::new(0x00, 4).copy_to(buf, 0x04);
    DIGEST_LEN.write_u32(buf, DIGEST_INPUT_LEN);
    DIGEST_KEY.write(buf, &key_block[..DIGEST_KEY.len]);

    engine
        .transform(Command::Sha1, buf, 0)
        .map_err(Error::engine(Variant::V2, Step::Digest))?;
    let actual: [u8; 0x14] = DIGEST.snapshot(buf);
    if actual != expected {
        warn!("tag {:#010x}: header digest mismatch", info.tag);
        return Err(Error::IntegrityMismatch { expected, actual });
    }

    let mut request = [0u8; SCRAMBLE_HEADER_LEN + 0x40];
    let wrapped = &mut request[SCRAMBLE_HEADER_LEN..];
    wrapped.copy_from_slice(KEY_DATA.slice(buf));
    xor::xor_forward(wrapped, &key_block[0x10..0x50]);
    engine
        .scramble(&mut request, code)
        .map_err(Error::engine(Variant::V2, Step::KeyUnwrap))?;
    xor::xor_into_reverse(
        KEY_DEST.slice_mut(buf),
        &request[..KEY_DEST.len],
        &key_block[0x50..0x90],
    );

    match &side {
        Some(side) => {
            SIDE_BLOCK.at(SIDE_IN_HEADER).write(buf, side);
            TAIL_ALT.fill(buf, 0);
            DECRYPT_MODE_ALT.write_u32(buf, 1);
            DECRYPT_MODE.write_u32(buf, MODE_DECRYPT);
        }
        None => {
            TAIL_PLAIN.fill(buf, 0);
            DECRYPT_MODE.write_u32(buf, MODE_DECRYPT);
        }
    }

    CMAC_HASH.copy_to(buf, CMAC_HASH_DEST);
    CMAC_HASH.fill(buf, 0);
    // 0xD0..0x150 still holds the ~PSP header placed by the relocation

    engine
        .transform(Command::Decrypt, buf, DECRYPT_HEADER_OFFSET)
        .map_err(Error::engine(Variant::V2, Step::Decrypt))?;

    let size = declared as usize;
    if size < HEADER_LEN {
        buf[size..HEADER_LEN].fill(0);
    }

    debug!("tag {:#010x}: variant 2 recovered {declared:#x} bytes", info.tag);
    Ok(declared)
}

/// Nine copies of the key, each led by its index, scrambled with the entry's
/// code.
fn expand_key<E>(engine: &mut E, info: &TagInfo2) -> Result<[u8; KEY_BLOCK_LEN]>
where
    E: CryptoEngine + ?Sized,
{
    let mut request = [0u8; SCRAMBLE_HEADER_LEN + KEY_BLOCK_LEN];
    for (index, chunk) in request[SCRAMBLE_HEADER_LEN..]
        .chunks_exact_mut(info.key.len())
        .enumerate()
    {
        chunk.copy_from_slice(info.key);
        chunk[0] = index as u8;
    }
    engine
        .scramble(&mut request, u32::from(info.code))
        .map_err(Error::engine(Variant::V2, Step::KeyScramble))?;

    let mut block = [0u8; KEY_BLOCK_LEN];
    block.copy_from_slice(&request[..KEY_BLOCK_LEN]);
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status;
    use crate::testing::{plaintext, seal_v2, MockEngine};

    const TAG: u32 = 0xD91609F0;

    fn sealed(len: usize, size: usize) -> (Vec<u8>, Vec<u8>) {
        let info = v2::lookup(TAG).unwrap();
        let plain = plaintext(size);
        (seal_v2(TAG, info.key, info.code, false, &plain, len), plain)
    }

    #[test]
    fn test_round_trip() {
        let (mut buf, plain) = sealed(0x600, 0x4A0);
        let mut engine = MockEngine::new();
        let size = decrypt(&mut engine, &KeyGate::default(), &mut buf, TAG).unwrap();
        assert_eq!(size, 0x4A0);
        assert_eq!(&buf[..plain.len()], &plain[..]);
        assert_eq!(
            engine.calls,
            vec![
                Command::DecryptIv0,
                Command::DecryptIv0,
                Command::Sha1,
                Command::DecryptIv0,
                Command::Decrypt,
            ]
        );
    }

    #[test]
    fn test_minimum_length_zero_pads_header() {
        let (mut buf, plain) = sealed(MIN_V2_LEN, 0x0C);
        let size = decrypt(&mut MockEngine::new(), &KeyGate::default(), &mut buf, TAG).unwrap();
        assert_eq!(size, 0x0C);
        assert_eq!(&buf[..0x0C], &plain[..]);
        assert!(buf[0x0C..HEADER_LEN].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_alt_layout_round_trip() {
        static KEY: [u8; 16] = *b"alt-layout-key-3";
        let info = TagInfo2::new(0x12345678, &KEY, 0x5D, v2::ALT_LAYOUT, "alt");
        let plain = plaintext(0x123);
        let mut buf = seal_v2(info.tag, info.key, info.code, true, &plain, 0x300);

        let size = decrypt_with(&mut MockEngine::new(), &info, &mut buf).unwrap();
        assert_eq!(size, 0x123);
        assert_eq!(&buf[..0x123], &plain[..]);

        // the same module under the plain layout hashes differently
        let mut buf = seal_v2(info.tag, info.key, info.code, true, &plain, 0x300);
        let plain_info = TagInfo2::new(info.tag, &KEY, 0x5D, 0, "plain");
        let err = decrypt_with(&mut MockEngine::new(), &plain_info, &mut buf).unwrap_err();
        assert_eq!(err.status(), status::INTEGRITY);
    }

    #[test]
    fn test_too_small() {
        let mut buf = vec![0u8; MIN_V2_LEN - 1];
        let err = decrypt(&mut MockEngine::new(), &KeyGate::default(), &mut buf, TAG).unwrap_err();
        assert_eq!(err.status(), status::BUFFER_TOO_SMALL);
    }

    #[test]
    fn test_declared_size_exceeds_buffer() {
        let (mut buf, _) = sealed(MIN_V2_LEN, 0x10);
        crate::layout::SIZE_FIELD.write_u32(&mut buf, 0x11);
        let mut engine = MockEngine::new();
        let err = decrypt(&mut engine, &KeyGate::default(), &mut buf, TAG).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeExceedsBuffer { declared: 0x11, available: 0x10 }
        ));
        assert_eq!(err.status(), status::SIZE_EXCEEDS_BUFFER);
        assert!(engine.calls.is_empty());

        // a size with the top bit set is not mistaken for a small one
        crate::layout::SIZE_FIELD.write_u32(&mut buf, 0x8000_0000);
        let err = decrypt(&mut engine, &KeyGate::default(), &mut buf, TAG).unwrap_err();
        assert_eq!(err.status(), status::SIZE_EXCEEDS_BUFFER);
    }

    #[test]
    fn test_tampered_header() {
        let (mut buf, _) = sealed(0x200, 0x80);
        buf[0x20] ^= 1;
        let err = decrypt(&mut MockEngine::new(), &KeyGate::default(), &mut buf, TAG).unwrap_err();
        assert!(matches!(err, Error::IntegrityMismatch { .. }));
        assert_eq!(err.status(), status::INTEGRITY);
    }

    #[test]
    fn test_engine_failures_map_to_steps() {
        let cases = [
            (Command::DecryptIv0, 0, status::KEY_SCRAMBLE),
            (Command::DecryptIv0, 1, status::HEADER_SCRAMBLE),
            (Command::Sha1, 0, status::DIGEST),
            (Command::DecryptIv0, 2, status::KEY_UNWRAP),
            (Command::Decrypt, 0, status::FAILED),
        ];
        for (command, nth, expected) in cases {
            let (mut buf, _) = sealed(0x200, 0x80);
            let mut engine = MockEngine::failing(command, nth);
            let err = decrypt(&mut engine, &KeyGate::default(), &mut buf, TAG).unwrap_err();
            assert_eq!(err.status(), expected, "{command} #{nth}");
        }
    }

    #[test]
    fn test_missing_key() {
        let mut buf = vec![0u8; 0x200];
        let err = decrypt(&mut MockEngine::new(), &KeyGate::default(), &mut buf, 0x4C9494F0)
            .unwrap_err();
        assert!(matches!(err, Error::MissingKey { code: 0x43, .. }));
        assert_eq!(err.status(), status::MISSING_KEY);
    }

    #[test]
    fn test_shadowed_duplicate_uses_first_entry() {
        let first = v2::lookup(0xD91605F0).unwrap();
        let plain = plaintext(0x40);
        let mut buf = seal_v2(first.tag, first.key, first.code, false, &plain, 0x200);
        let size = decrypt(&mut MockEngine::new(), &KeyGate::default(), &mut buf, 0xD91605F0).unwrap();
        assert_eq!(size, 0x40);
        assert_eq!(&buf[..0x40], &plain[..]);
    }
}
