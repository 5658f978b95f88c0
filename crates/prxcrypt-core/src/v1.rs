//! Variant-1 decoder.
//!
//! Rebuilds the engine's decrypt command header from the module header and
//! 144 bytes of key material, then hands the whole buffer to
//! [`Command::Decrypt`]. One engine code is always used; entries with a second
//! code run the signature block through the engine once more first.

use log::debug;
use prxcrypt_common::{xor, Region};
use prxcrypt_keys::{v1, KeyGate, TagInfo};

use crate::engine::{Command, CryptoEngine, SCRAMBLE_HEADER_LEN};
use crate::layout::{
    read_declared_size, DECRYPT_HEADER_OFFSET, DECRYPT_MODE, HEADER_LEN, MID_BLOCK, MODE_DECRYPT,
    PSP_HEADER, SCRATCH, SCRATCH_FILL, SIZE_BLOCK, TAG_BLOCK,
};
use crate::{Error, Result, Step, Variant};

const KEY_LEN: usize = 0x90;

/// A key whose first 0x14 bytes are zero has not been scrambled yet.
const RAW_KEY_PREFIX: usize = 0x14;

/// Window of the signature block mangled with the second code.
const EXTRA_WINDOW: Region = Region::new(0x10, 0xA0);

/// Signature bytes carried into the command header.
const SIGNATURE_KEY: Region = Region::new(0x40, 0x40);

/// Window XORed with key material on both sides of the header mangle.
const MANGLE_WINDOW: Region = Region::new(0x40, 0x70);

/// Scramble request for the header mangle; its 0x14-byte header ends where
/// [`MANGLE_WINDOW`] starts.
const MANGLE_REQUEST: Region = Region::new(0x2C, SCRAMBLE_HEADER_LEN + 0x70);

/// Command-header bytes cleared before the final decrypt.
const HEADER_TAIL: Region = Region::new(0x80, 0x30);

/// Decrypt `buf` in place as a Variant-1 module with the given tag.
///
/// Returns the declared plaintext size. An unknown tag is
/// [`Error::UnknownTag`]; a known tag whose codes the gate rejects is
/// [`Error::MissingKey`] and leaves `buf` untouched.
pub fn decrypt<E>(engine: &mut E, gate: &KeyGate, buf: &mut [u8], tag: u32) -> Result<u32>
where
    E: CryptoEngine + ?Sized,
{
    let info = v1::lookup(tag).ok_or(Error::UnknownTag {
        tag,
        variant: Variant::V1,
    })?;
    if let Some(code) = gate.missing_code(info) {
        return Err(Error::MissingKey { tag, code });
    }
    debug!("tag {tag:#010x}: variant 1 entry \"{}\"", info.label);
    decrypt_with(engine, info, buf)
}

/// Decrypt `buf` in place with an explicit catalog entry, skipping lookup and
/// the capability gate.
pub fn decrypt_with<E>(engine: &mut E, info: &TagInfo, buf: &mut [u8]) -> Result<u32>
where
    E: CryptoEngine + ?Sized,
{
    if buf.len() < HEADER_LEN {
        return Err(Error::BufferTooSmall {
            needed: HEADER_LEN,
            actual: buf.len(),
        });
    }
    let declared = read_declared_size(buf)?;
    let key = prepare_key(engine, info)?;
    let code = u32::from(info.code);

    let tag_block: [u8; 0x80] = TAG_BLOCK.snapshot(buf);
    let mid_block: [u8; 0x50] = MID_BLOCK.snapshot(buf);
    let psp_header: [u8; 0x80] = PSP_HEADER.snapshot(buf);
    let size_block: [u8; 0x20] = SIZE_BLOCK.snapshot(buf);

    buf[..HEADER_LEN].fill(0);
    SCRATCH.fill(buf, SCRATCH_FILL);

    // signature block in the order the engine checks it
    let mut signature = [0u8; HEADER_LEN];
    TAG_BLOCK.at(0x00).write(&mut signature, &tag_block);
    MID_BLOCK.write(&mut signature, &mid_block);
    PSP_HEADER.at(0xD0).write(&mut signature, &psp_header);
    if info.has_extra_code() {
        extra_mangle(engine, &mut signature, info.code_extra)?;
    }
    SIGNATURE_KEY.write(buf, SIGNATURE_KEY.slice(&signature));

    xor::xor_forward(MANGLE_WINDOW.slice_mut(buf), &key[0x14..]);
    engine
        .scramble(MANGLE_REQUEST.slice_mut(buf), code)
        .map_err(Error::engine(Variant::V1, Step::HeaderMangle))?;
    // output landed at 0x2C; shifting it up to 0x40 overlaps, so walk backwards
    xor::xor_within_reverse(
        buf,
        MANGLE_REQUEST.offset,
        MANGLE_WINDOW.offset,
        &key[0x20..0x20 + MANGLE_WINDOW.len],
    );

    HEADER_TAIL.fill(buf, 0);
    DECRYPT_MODE.write_u32(buf, MODE_DECRYPT);
    SIZE_BLOCK.write(buf, &size_block);
    TAG_BLOCK.write(buf, &psp_header);

    engine
        .transform(Command::Decrypt, buf, DECRYPT_HEADER_OFFSET)
        .map_err(Error::engine(Variant::V1, Step::Decrypt))?;

    debug!("tag {:#010x}: variant 1 recovered {declared:#x} bytes", info.tag);
    Ok(declared)
}

/// Key material ready for use, scrambling it first if it is still raw.
fn prepare_key<E>(engine: &mut E, info: &TagInfo) -> Result<[u8; KEY_LEN]>
where
    E: CryptoEngine + ?Sized,
{
    let key = info.key_bytes();
    if key[..RAW_KEY_PREFIX].iter().any(|&b| b != 0) {
        return Ok(key);
    }

    debug!("tag {:#010x}: raw key, scrambling with code {:#04x}", info.tag, info.code);
    let mut request = [0u8; SCRAMBLE_HEADER_LEN + KEY_LEN];
    request[SCRAMBLE_HEADER_LEN..].copy_from_slice(&key);
    engine
        .scramble(&mut request, u32::from(info.code))
        .map_err(Error::engine(Variant::V1, Step::KeyScramble))?;

    let mut scrambled = [0u8; KEY_LEN];
    scrambled.copy_from_slice(&request[..KEY_LEN]);
    Ok(scrambled)
}

/// Pass the signature window through the engine under the second code.
fn extra_mangle<E>(engine: &mut E, signature: &mut [u8; HEADER_LEN], code: u8) -> Result<()>
where
    E: CryptoEngine + ?Sized,
{
    let mut request = [0u8; SCRAMBLE_HEADER_LEN + 0xA0];
    request[SCRAMBLE_HEADER_LEN..].copy_from_slice(EXTRA_WINDOW.slice(signature));
    engine
        .scramble(&mut request, u32::from(code))
        .map_err(Error::engine(Variant::V1, Step::ExtraMangle))?;
    EXTRA_WINDOW.write(signature, &request[..EXTRA_WINDOW.len]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status;
    use crate::testing::{cbc_decrypt, plaintext, seal_v1, slot_key, MockEngine};

    fn catalog(tag: u32) -> &'static TagInfo {
        v1::lookup(tag).unwrap()
    }

    #[test]
    fn test_round_trip_single_code() {
        let info = catalog(0x08000000);
        let plain = plaintext(0x1F3);
        let mut buf = seal_v1(info.tag, &info.key_bytes(), info.code, info.code_extra, &plain);

        let mut engine = MockEngine::new();
        let size = decrypt(&mut engine, &KeyGate::default(), &mut buf, info.tag).unwrap();
        assert_eq!(size, 0x1F3);
        assert_eq!(&buf[..plain.len()], &plain[..]);
        assert_eq!(engine.calls, vec![Command::DecryptIv0, Command::Decrypt]);
    }

    #[test]
    fn test_round_trip_extra_code() {
        let info = catalog(0xC0CB167C);
        assert!(info.has_extra_code());
        let plain = plaintext(0x400);
        let mut buf = seal_v1(info.tag, &info.key_bytes(), info.code, info.code_extra, &plain);

        let mut engine = MockEngine::new();
        let size = decrypt(&mut engine, &KeyGate::default(), &mut buf, info.tag).unwrap();
        assert_eq!(size as usize, plain.len());
        assert_eq!(&buf[..plain.len()], &plain[..]);
        assert_eq!(
            engine.calls,
            vec![Command::DecryptIv0, Command::DecryptIv0, Command::Decrypt]
        );
    }

    #[test]
    fn test_command_header_contents() {
        let info = catalog(0x08000000);
        let key = info.key_bytes();
        let mut buf = seal_v1(info.tag, &key, info.code, 0, &plaintext(0x60));
        let module = buf.clone();

        // engine output for the mangled window: signature bytes 0x40..0x80 are
        // the module's 0x110..0x150, the rest of the window is zero
        let mut window = [0u8; 0x70];
        window[..0x40].copy_from_slice(&module[0x110..0x150]);
        xor::xor_forward(&mut window, &key[0x14..0x84]);
        cbc_decrypt(&slot_key(info.code.into()), &mut window);

        let mut expected = [0u8; 0x90];
        for ((out, w), k) in expected[..0x40].iter_mut().zip(&window).zip(&key[0x20..]) {
            *out = w ^ k;
        }
        expected[0x60] = 1;
        expected[0x70..].copy_from_slice(&module[0xB0..0xD0]);

        let mut engine = MockEngine::new();
        decrypt(&mut engine, &KeyGate::default(), &mut buf, info.tag).unwrap();
        assert_eq!(engine.decrypt_headers.len(), 1);
        assert_eq!(engine.decrypt_headers[0][..], expected[..]);
    }

    static RAW_KEY: [u32; 36] = {
        let mut key = [0u32; 36];
        let mut i = 5;
        while i < key.len() {
            key[i] = 0x9E37_79B9u32.wrapping_mul(i as u32);
            i += 1;
        }
        key
    };

    #[test]
    fn test_raw_key_is_scrambled_first() {
        let info = TagInfo::new(0x0A000000, &RAW_KEY, 0x4B, 0, "raw");
        let mut effective = [0u8; SCRAMBLE_HEADER_LEN + KEY_LEN];
        effective[SCRAMBLE_HEADER_LEN..].copy_from_slice(&info.key_bytes());
        MockEngine::new().scramble(&mut effective, 0x4B).unwrap();
        let effective: [u8; KEY_LEN] = effective[..KEY_LEN].try_into().unwrap();

        let plain = plaintext(0x80);
        let mut buf = seal_v1(info.tag, &effective, info.code, 0, &plain);
        let mut engine = MockEngine::new();
        assert_eq!(decrypt_with(&mut engine, &info, &mut buf).unwrap(), 0x80);
        assert_eq!(&buf[..0x80], &plain[..]);
        assert_eq!(engine.calls.len(), 3);
    }

    #[test]
    fn test_missing_key_leaves_buffer() {
        let mut buf = vec![0xAAu8; 0x200];
        let mut engine = MockEngine::new();
        let err = decrypt(&mut engine, &KeyGate::default(), &mut buf, 0x00000000).unwrap_err();
        assert!(matches!(err, Error::MissingKey { tag: 0, code: 0x42 }));
        assert!(engine.calls.is_empty());
        assert!(buf.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_unknown_tag() {
        let mut buf = vec![0u8; 0x200];
        let err = decrypt(&mut MockEngine::new(), &KeyGate::default(), &mut buf, 0xD91609F0)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTag { variant: Variant::V1, .. }));
        assert_eq!(err.status(), status::FAILED);
    }

    #[test]
    fn test_engine_failure_is_generic() {
        let info = catalog(0x08000000);
        let mut buf = seal_v1(info.tag, &info.key_bytes(), info.code, 0, &plaintext(0x40));
        let mut engine = MockEngine::failing(Command::DecryptIv0, 0);
        let err = decrypt(&mut engine, &KeyGate::default(), &mut buf, info.tag).unwrap_err();
        assert!(matches!(
            err,
            Error::Engine { step: Step::HeaderMangle, .. }
        ));
        assert_eq!(err.status(), status::FAILED);
        // nothing after the failing call
        assert_eq!(engine.calls, vec![Command::DecryptIv0]);
    }

    #[test]
    fn test_short_buffer() {
        let info = catalog(0x08000000);
        let mut buf = vec![0u8; 0x14F];
        assert!(matches!(
            decrypt_with(&mut MockEngine::new(), info, &mut buf),
            Err(Error::BufferTooSmall { needed: 0x150, .. })
        ));
    }
}
