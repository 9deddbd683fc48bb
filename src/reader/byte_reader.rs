// Thu Oct 15 2026 - Alex

use crate::error::ParseError;
use std::io::{ErrorKind, Read, Seek, SeekFrom};

/// Positioned reads over a seekable byte source.
///
/// End of data is reported as `Ok(None)` by [`ByteReader::read_byte`] and as
/// [`ParseError::UnexpectedEndOfFile`] by every read that needs a fixed amount
/// of data or a terminator.
pub struct ByteReader<R> {
    inner: R,
}

impl<R: Read + Seek> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn seek(&mut self, offset: u64) -> Result<(), ParseError> {
        self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    pub fn position(&mut self) -> Result<u64, ParseError> {
        Ok(self.inner.stream_position()?)
    }

    pub fn read_byte(&mut self) -> Result<Option<u8>, ParseError> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ParseError::Io(e)),
            }
        }
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ParseError> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, ParseError> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Collects bytes up to a NUL terminator or until `max_len` bytes were
    /// collected, whichever comes first. A terminator is consumed but never
    /// returned.
    pub fn read_until_nul(&mut self, max_len: Option<usize>) -> Result<Vec<u8>, ParseError> {
        let mut bytes = Vec::new();
        loop {
            if max_len.map_or(false, |max| bytes.len() >= max) {
                break;
            }
            match self.read_byte()? {
                Some(0) => break,
                Some(b) => bytes.push(b),
                None => {
                    let offset = self.position()?;
                    return Err(ParseError::UnexpectedEndOfFile { offset });
                }
            }
        }
        Ok(bytes)
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), ParseError> {
        let start = self.position()?;
        self.inner.read_exact(buf).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => ParseError::UnexpectedEndOfFile { offset: start },
            _ => ParseError::Io(e),
        })
    }
}
