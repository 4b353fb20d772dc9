use byteorder::{BigEndian, ByteOrder};

use crate::{ClassFileError, Result};

type Endian = BigEndian;

/// Cursor over an immutable byte buffer. Multi-byte reads are big-endian
/// and advance the cursor; a short read fails with
/// [`ClassFileError::Truncated`].
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    remaining: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { remaining: bytes }
    }

    /// The tail of the buffer that has not been consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }

    /// Borrows the next `count` bytes as a sub-slice of the input.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining.len() < count {
            return Err(ClassFileError::Truncated);
        }

        let (bytes, rest) = self.remaining.split_at(count);
        self.remaining = rest;

        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(Endian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(Endian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(Endian::read_u64(self.read_bytes(8)?))
    }

    // The unchecked variants are for sub-readers over a slice a prior
    // `read_bytes` has already sized. They panic on over-read; the caller
    // must have reserved the bytes.

    pub fn read_u8_unchecked(&mut self) -> u8 {
        let (bytes, rest) = self.remaining.split_at(1);
        self.remaining = rest;
        bytes[0]
    }

    pub fn read_u16_unchecked(&mut self) -> u16 {
        let (bytes, rest) = self.remaining.split_at(2);
        self.remaining = rest;
        Endian::read_u16(bytes)
    }

    pub fn read_u32_unchecked(&mut self) -> u32 {
        let (bytes, rest) = self.remaining.split_at(4);
        self.remaining = rest;
        Endian::read_u32(bytes)
    }
}
