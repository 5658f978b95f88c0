//! Crypto engine interface.
//!
//! The hardware coprocessor that holds the real keys is an external
//! collaborator. Decoders drive it through [`CryptoEngine`]: one generic
//! command entry point plus a provided `scramble` built on top of it.
//!
//! All commands used here run in place. The engine reads its input (command
//! header followed by data) from `buf[input_offset..]` and writes its output
//! from `buf[0]` onward, so the output region may overlap the input.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

/// Size of the five-word header that precedes scramble input.
pub const SCRAMBLE_HEADER_LEN: usize = 0x14;

/// First header word of a scramble request.
const SCRAMBLE_MODE: u32 = 5;

/// Engine command codes used by the decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Command {
    /// Decrypt a payload described by a 0x90-byte command header.
    Decrypt = 1,
    /// Keyed transform with a zero IV, used for scrambling.
    DecryptIv0 = 7,
    /// SHA-1 over a length-prefixed buffer.
    Sha1 = 0x0B,
}

impl Command {
    /// Numeric command code.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({:#04x})", self, self.code())
    }
}

/// Failure reported by an engine adapter.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine ran the command and reported a non-zero status.
    #[error("command {command} rejected with status {status}")]
    Rejected { command: Command, status: i32 },

    /// The command would read or write past the end of the buffer.
    #[error("command {command} needs {needed:#x} bytes, buffer holds {available:#x}")]
    OutOfRange {
        command: Command,
        needed: usize,
        available: usize,
    },
}

/// A crypto engine the decoders can drive.
///
/// Adapters implement [`transform`](Self::transform). [`scramble`](Self::scramble)
/// is provided in terms of it.
pub trait CryptoEngine {
    /// Run `command` over `buf`, reading input from `buf[input_offset..]` and
    /// writing output from `buf[0]`.
    fn transform(
        &mut self,
        command: Command,
        buf: &mut [u8],
        input_offset: usize,
    ) -> Result<(), EngineError>;

    /// Scramble `buf[SCRAMBLE_HEADER_LEN..]` with the key slot selected by
    /// `code`.
    ///
    /// Writes the header `(5, 0, 0, code, size)` into the first 0x14 bytes and
    /// runs [`Command::DecryptIv0`]. The result lands at `buf[0..size]`.
    fn scramble(&mut self, buf: &mut [u8], code: u32) -> Result<(), EngineError> {
        let size = buf
            .len()
            .checked_sub(SCRAMBLE_HEADER_LEN)
            .ok_or(EngineError::OutOfRange {
                command: Command::DecryptIv0,
                needed: SCRAMBLE_HEADER_LEN,
                available: buf.len(),
            })?;
        let header = [SCRAMBLE_MODE, 0, 0, code, size as u32];
        LittleEndian::write_u32_into(&header, &mut buf[..SCRAMBLE_HEADER_LEN]);
        self.transform(Command::DecryptIv0, buf, 0)
    }
}

impl<E: CryptoEngine + ?Sized> CryptoEngine for &mut E {
    fn transform(
        &mut self,
        command: Command,
        buf: &mut [u8],
        input_offset: usize,
    ) -> Result<(), EngineError> {
        (**self).transform(command, buf, input_offset)
    }

    fn scramble(&mut self, buf: &mut [u8], code: u32) -> Result<(), EngineError> {
        (**self).scramble(buf, code)
    }
}

impl<E: CryptoEngine + ?Sized> CryptoEngine for Box<E> {
    fn transform(
        &mut self,
        command: Command,
        buf: &mut [u8],
        input_offset: usize,
    ) -> Result<(), EngineError> {
        (**self).transform(command, buf, input_offset)
    }

    fn scramble(&mut self, buf: &mut [u8], code: u32) -> Result<(), EngineError> {
        (**self).scramble(buf, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what it was asked to do and leaves the buffer alone.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Command, usize, Vec<u8>)>,
    }

    impl CryptoEngine for Recorder {
        fn transform(
            &mut self,
            command: Command,
            buf: &mut [u8],
            input_offset: usize,
        ) -> Result<(), EngineError> {
            self.calls.push((command, input_offset, buf.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_scramble_writes_header() {
        let mut engine = Recorder::default();
        let mut buf = [0xEEu8; SCRAMBLE_HEADER_LEN + 0x20];
        engine.scramble(&mut buf, 0x5D).unwrap();

        let (command, offset, seen) = &engine.calls[0];
        assert_eq!(*command, Command::DecryptIv0);
        assert_eq!(*offset, 0);
        let mut words = [0u32; 5];
        LittleEndian::read_u32_into(&seen[..SCRAMBLE_HEADER_LEN], &mut words);
        assert_eq!(words, [5, 0, 0, 0x5D, 0x20]);
        assert!(seen[SCRAMBLE_HEADER_LEN..].iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn test_scramble_short_buffer() {
        let mut engine = Recorder::default();
        let mut buf = [0u8; 0x10];
        assert!(matches!(
            engine.scramble(&mut buf, 1),
            Err(EngineError::OutOfRange { needed: 0x14, available: 0x10, .. })
        ));
        assert!(engine.calls.is_empty());
    }

    #[test]
    fn test_command_codes() {
        assert_eq!(Command::Decrypt.code(), 1);
        assert_eq!(Command::DecryptIv0.code(), 7);
        assert_eq!(Command::Sha1.code(), 0x0B);
        assert_eq!(Command::Sha1.to_string(), "Sha1 (0x0b)");
    }
}
