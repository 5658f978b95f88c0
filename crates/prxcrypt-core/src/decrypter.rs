//! Tag dispatch across both variants.

use log::debug;
use prxcrypt_keys::{v1, v2, KeyGate, KeyRecord, TagInfo, TagInfo2};

use crate::engine::CryptoEngine;
use crate::layout::{self, HEADER_LEN, MIN_V2_LEN};
use crate::{v1 as decode_v1, v2 as decode_v2, Error, Result, Variant};

/// Decrypts modules by trying Variant 1 and falling back to Variant 2.
///
/// # Example
///
/// ```no_run
/// use prxcrypt_core::{CryptoEngine, PrxDecrypter};
///
/// fn unpack<E: CryptoEngine>(engine: E, module: &[u8]) -> prxcrypt_core::Result<Vec<u8>> {
///     PrxDecrypter::new(engine).decrypt_to_vec(module)
/// }
/// ```
#[derive(Debug)]
pub struct PrxDecrypter<E> {
    engine: E,
    gate: KeyGate,
}

impl<E: CryptoEngine> PrxDecrypter<E> {
    /// Create a decrypter that admits the recovered engine codes.
    pub fn new(engine: E) -> Self {
        Self::with_gate(engine, KeyGate::default())
    }

    pub fn with_gate(engine: E, gate: KeyGate) -> Self {
        Self { engine, gate }
    }

    pub fn gate(&self) -> &KeyGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut KeyGate {
        &mut self.gate
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Decrypt `input` into `output`, returning the plaintext size.
    ///
    /// `output` must be at least as long as `input`; only its first
    /// `input.len()` bytes are used. A missing key in Variant 1 is final. Any
    /// other Variant-1 failure, or a zero size, retries as Variant 2 on a fresh
    /// copy of the input.
    pub fn decrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let tag = layout::read_tag(input)?;
        if output.len() < input.len() {
            return Err(Error::BufferTooSmall {
                needed: input.len(),
                actual: output.len(),
            });
        }
        let output = &mut output[..input.len()];

        output.copy_from_slice(input);
        match decode_v1::decrypt(&mut self.engine, &self.gate, output, tag) {
            Ok(size) if size > 0 && size <= i32::MAX as u32 => return Ok(size as usize),
            Ok(size) => debug!("tag {tag:#010x}: variant 1 declared size {size:#x}, trying variant 2"),
            Err(err) if err.is_missing_key() => return Err(err),
            Err(err) => debug!("tag {tag:#010x}: {err}, trying variant 2"),
        }

        output.copy_from_slice(input);
        let size = decode_v2::decrypt(&mut self.engine, &self.gate, output, tag)?;
        Ok(size as usize)
    }

    /// Decrypt `buf` in place.
    pub fn decrypt_in_place(&mut self, buf: &mut [u8]) -> Result<usize> {
        let input = buf.to_vec();
        self.decrypt(&input, buf)
    }

    /// Decrypt into a new buffer truncated to the plaintext size.
    pub fn decrypt_to_vec(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; input.len()];
        let size = self.decrypt(input, &mut output)?;
        output.truncate(size);
        Ok(output)
    }

    /// Integer form of [`decrypt`](Self::decrypt): the plaintext size on
    /// success, a non-positive status otherwise (see [`status`](crate::status)).
    pub fn decrypt_status(&mut self, input: &[u8], output: &mut [u8]) -> i32 {
        match self.decrypt(input, output) {
            Ok(size) => i32::try_from(size).unwrap_or(i32::MAX),
            Err(err) => err.status(),
        }
    }
}

/// Which catalog entry handles a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Route {
    V1(&'static TagInfo),
    V2(&'static TagInfo2),
    Unknown,
}

impl Route {
    pub fn variant(&self) -> Option<Variant> {
        match self {
            Self::V1(_) => Some(Variant::V1),
            Self::V2(_) => Some(Variant::V2),
            Self::Unknown => None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::V1(info) => Some(info.label()),
            Self::V2(info) => Some(info.label()),
            Self::Unknown => None,
        }
    }

    /// Engine codes the entry needs, primary first.
    pub fn codes(&self) -> Vec<u8> {
        match self {
            Self::V1(info) => info.required_codes().collect(),
            Self::V2(info) => info.required_codes().collect(),
            Self::Unknown => Vec::new(),
        }
    }
}

/// What [`PrxDecrypter::decrypt`] would do with a module, without running the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Identification {
    pub tag: u32,
    /// Declared plaintext size, if the buffer is long enough to hold it.
    pub declared_size: Option<u32>,
    pub len: usize,
    pub route: Route,
    /// First engine code of the routed entry that the gate rejects.
    pub missing_code: Option<u8>,
}

impl Identification {
    /// True when the routed entry exists and every code it needs is admitted.
    pub fn is_decryptable(&self) -> bool {
        self.route != Route::Unknown && self.missing_code.is_none()
    }

    /// Check the length preconditions of the routed variant.
    pub fn check_size(&self) -> Result<()> {
        let needed = match self.route {
            Route::V2(_) => MIN_V2_LEN,
            _ => HEADER_LEN,
        };
        if self.len < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: self.len,
            });
        }
        if let (Route::V2(_), Some(declared)) = (self.route, self.declared_size) {
            let available = self.len - HEADER_LEN;
            if u64::from(declared) > available as u64 {
                return Err(Error::SizeExceedsBuffer {
                    declared,
                    available,
                });
            }
        }
        Ok(())
    }
}

/// Resolve the tag of `buf` the way [`PrxDecrypter::decrypt`] would.
///
/// A Variant-1 entry whose codes are rejected is final, as in `decrypt`. An
/// admitted Variant-1 entry is only kept when the buffer holds a full header
/// and a usable declared size; otherwise `decrypt` would fall back, so the tag
/// is resolved against the Variant-2 catalog. Engine failures cannot be
/// predicted here. Nothing is logged for rejected codes.
pub fn identify(gate: &KeyGate, buf: &[u8]) -> Result<Identification> {
    let tag = layout::read_tag(buf)?;
    let declared_size = layout::read_declared_size(buf).ok();

    let v1_route = v1::lookup(tag).and_then(|info| {
        let missing = first_rejected(gate, info);
        let usable = buf.len() >= HEADER_LEN
            && declared_size.is_some_and(|size| size > 0 && size <= i32::MAX as u32);
        (missing.is_some() || usable).then_some((Route::V1(info), missing))
    });
    let (route, missing_code) = match v1_route {
        Some(found) => found,
        None => match v2::lookup(tag) {
            Some(info) => (Route::V2(info), first_rejected(gate, info)),
            None => (Route::Unknown, None),
        },
    };

    Ok(Identification {
        tag,
        declared_size,
        len: buf.len(),
        route,
        missing_code,
    })
}

fn first_rejected<R: KeyRecord>(gate: &KeyGate, record: &R) -> Option<u8> {
    record.required_codes().find(|&code| !gate.contains(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Command;
    use crate::layout::{SIZE_FIELD, TAG_FIELD};
    use crate::status;
    use crate::testing::{plaintext, seal_v1, seal_v2, MockEngine};

    fn v1_module(tag: u32, size: usize) -> (Vec<u8>, Vec<u8>) {
        let info = v1::lookup(tag).unwrap();
        let plain = plaintext(size);
        (
            seal_v1(tag, &info.key_bytes(), info.code, info.code_extra, &plain),
            plain,
        )
    }

    fn v2_module(tag: u32, size: usize, len: usize) -> (Vec<u8>, Vec<u8>) {
        let info = v2::lookup(tag).unwrap();
        let plain = plaintext(size);
        (seal_v2(tag, info.key, info.code, false, &plain, len), plain)
    }

    fn bare(tag: u32, len: usize) -> Vec<u8> {
        let mut buf = vec![0x5Au8; len];
        TAG_FIELD.write_u32(&mut buf, tag);
        SIZE_FIELD.write_u32(&mut buf, 0x10);
        buf
    }

    #[test]
    fn test_routes_v1_tags_to_v1() {
        for tag in [0x08000000, 0xC0CB167C] {
            let (module, plain) = v1_module(tag, 0x2E0);
            let mut decrypter = PrxDecrypter::new(MockEngine::new());
            let out = decrypter.decrypt_to_vec(&module).unwrap();
            assert_eq!(out, plain);
            assert!(!decrypter.engine_mut().calls.contains(&Command::Sha1));
        }
    }

    #[test]
    fn test_routes_v2_only_tags_to_v2() {
        let (module, plain) = v2_module(0x8004FD03, 0x333, 0x500);
        let mut decrypter = PrxDecrypter::new(MockEngine::new());
        let mut output = vec![0u8; module.len()];
        assert_eq!(decrypter.decrypt_status(&module, &mut output), 0x333);
        assert_eq!(&output[..0x333], &plain[..]);
    }

    #[test]
    fn test_unknown_everywhere() {
        let module = bare(0xDEADBEEF, 0x200);
        let mut decrypter = PrxDecrypter::new(MockEngine::new());
        let mut output = vec![0u8; module.len()];
        assert_eq!(decrypter.decrypt_status(&module, &mut output), status::FAILED);
        assert!(decrypter.engine_mut().calls.is_empty());
    }

    #[test]
    fn test_missing_key_is_final() {
        // known to both catalogs; variant 1 rejects it first
        for tag in [0x00000000, 0x4467415D] {
            let module = bare(tag, 0x200);
            let mut decrypter = PrxDecrypter::new(MockEngine::new());
            let mut output = vec![0u8; module.len()];
            assert_eq!(decrypter.decrypt_status(&module, &mut output), status::MISSING_KEY);
            assert!(decrypter.engine_mut().calls.is_empty());
        }
    }

    #[test]
    fn test_missing_key_ignores_content() {
        let (mut module, _) = v1_module(0x08000000, 0x100);
        let mut decrypter = PrxDecrypter::with_gate(MockEngine::new(), KeyGate::none());
        assert!(matches!(
            decrypter.decrypt_to_vec(&module),
            Err(Error::MissingKey { code: 0x4B, .. })
        ));
        module[0x150..].fill(0);
        assert!(decrypter.decrypt_to_vec(&module).unwrap_err().is_missing_key());
    }

    #[test]
    fn test_v1_failure_falls_back() {
        let (module, _) = v1_module(0x08000000, 0x100);
        let mut decrypter = PrxDecrypter::new(MockEngine::failing(Command::Decrypt, 0));
        let err = decrypter.decrypt_to_vec(&module).unwrap_err();
        // not in the variant 2 catalog
        assert!(matches!(err, Error::UnknownTag { variant: Variant::V2, .. }));
    }

    #[test]
    fn test_zero_size_falls_back() {
        let (mut module, _) = v1_module(0x08000000, 0x100);
        SIZE_FIELD.write_u32(&mut module, 0);
        let mut decrypter = PrxDecrypter::new(MockEngine::new());
        let mut output = vec![0u8; module.len()];
        assert_eq!(decrypter.decrypt_status(&module, &mut output), status::FAILED);
        assert_eq!(decrypter.engine_mut().calls.len(), 2);
    }

    #[test]
    fn test_v2_boundary() {
        let (module, _) = v2_module(0xD91609F0, 0x10, MIN_V2_LEN);
        let mut decrypter = PrxDecrypter::new(MockEngine::new());
        assert_eq!(decrypter.decrypt_to_vec(&module).unwrap().len(), 0x10);

        let short = &module[..MIN_V2_LEN - 1];
        let mut output = vec![0u8; short.len()];
        assert_eq!(
            decrypter.decrypt_status(short, &mut output),
            status::BUFFER_TOO_SMALL
        );
    }

    #[test]
    fn test_deterministic_and_in_place() {
        let (module, _) = v2_module(0xD91609F0, 0x90, 0x300);
        let mut decrypter = PrxDecrypter::new(MockEngine::new());

        let mut first = vec![0u8; module.len()];
        let mut second = vec![0xFFu8; module.len() + 0x10];
        let a = decrypter.decrypt(&module, &mut first).unwrap();
        let b = decrypter.decrypt(&module, &mut second).unwrap();
        assert_eq!(a, b);
        assert_eq!(first[..], second[..module.len()]);
        assert!(second[module.len()..].iter().all(|&b| b == 0xFF));

        let mut in_place = module.clone();
        assert_eq!(decrypter.decrypt_in_place(&mut in_place).unwrap(), a);
        assert_eq!(in_place, first);
    }

    #[test]
    fn test_output_too_small() {
        let module = bare(0x08000000, 0x200);
        let mut output = vec![0u8; 0x1FF];
        let mut decrypter = PrxDecrypter::new(MockEngine::new());
        assert_eq!(
            decrypter.decrypt_status(&module, &mut output),
            status::BUFFER_TOO_SMALL
        );
    }

    #[test]
    fn test_identify() {
        let gate = KeyGate::default();

        let id = identify(&gate, &bare(0xC0CB167C, 0x200)).unwrap();
        assert_eq!(id.route.variant(), Some(Variant::V1));
        assert_eq!(id.route.codes(), vec![0x5D, 0x5D]);
        assert!(id.is_decryptable());

        let id = identify(&gate, &bare(0x4467415D, 0x200)).unwrap();
        assert_eq!(id.route.variant(), Some(Variant::V1));
        assert_eq!(id.missing_code, Some(0x59));
        assert!(!id.is_decryptable());

        let id = identify(&gate, &bare(0xD91609F0, 0x15F)).unwrap();
        assert_eq!(id.route.label(), Some("module D91609F0"));
        assert_eq!(id.check_size().unwrap_err().status(), status::BUFFER_TOO_SMALL);

        let id = identify(&gate, &bare(0x11111111, 0x200)).unwrap();
        assert_eq!(id.route, Route::Unknown);
        assert!(!id.is_decryptable());

        assert!(identify(&gate, &[0u8; 0x10]).is_err());
    }

    #[test]
    fn test_identify_follows_fallback() {
        let gate = KeyGate::default();

        // admitted variant 1 tag, but too short for a variant 1 header
        let id = identify(&gate, &bare(0x08000000, 0x14F)).unwrap();
        assert_eq!(id.route, Route::Unknown);
        let mut decrypter = PrxDecrypter::new(MockEngine::new());
        let mut output = vec![0u8; 0x14F];
        assert!(matches!(
            decrypter.decrypt(&bare(0x08000000, 0x14F), &mut output),
            Err(Error::UnknownTag { variant: Variant::V2, .. })
        ));

        // zero declared size also falls through
        let mut module = bare(0x08000000, 0x200);
        SIZE_FIELD.write_u32(&mut module, 0);
        assert_eq!(identify(&gate, &module).unwrap().route, Route::Unknown);

        // rejected codes stay with variant 1 whatever the length
        let id = identify(&gate, &bare(0x4467415D, 0xD4)).unwrap();
        assert_eq!(id.route.variant(), Some(Variant::V1));
        assert_eq!(id.missing_code, Some(0x59));
    }
}
