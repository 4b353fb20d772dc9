use std::io::{self, Write};

use byteorder::{BigEndian, WriteBytesExt};

type Endian = BigEndian;

/// Write target for the serializer. Multi-byte writes are big-endian.
pub trait Sink {
    fn write_u8(&mut self, value: u8) -> io::Result<()>;
    fn write_u16(&mut self, value: u16) -> io::Result<()>;
    fn write_u32(&mut self, value: u32) -> io::Result<()>;
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// Accumulates writes in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: Vec<u8>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of everything written so far.
    pub fn view(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Sink for BufferSink {
    fn write_u8(&mut self, value: u8) -> io::Result<()> {
        self.buffer.write_u8(value)
    }

    fn write_u16(&mut self, value: u16) -> io::Result<()> {
        self.buffer.write_u16::<Endian>(value)
    }

    fn write_u32(&mut self, value: u32) -> io::Result<()> {
        self.buffer.write_u32::<Endian>(value)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }
}

/// Forwards writes to an underlying writer as they happen. The caller
/// owns the writer's flushing and closing semantics.
#[derive(Debug)]
pub struct FileSink<W> {
    target: W,
}

impl<W: Write> FileSink<W> {
    pub fn new(target: W) -> Self {
        Self { target }
    }

    pub fn into_inner(self) -> W {
        self.target
    }
}

impl<W: Write> Sink for FileSink<W> {
    fn write_u8(&mut self, value: u8) -> io::Result<()> {
        self.target.write_u8(value)
    }

    fn write_u16(&mut self, value: u16) -> io::Result<()> {
        self.target.write_u16::<Endian>(value)
    }

    fn write_u32(&mut self, value: u32) -> io::Result<()> {
        self.target.write_u32::<Endian>(value)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.target.write_all(bytes)
    }
}
