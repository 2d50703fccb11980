//! Byte transports the encoder writes to.
//!
//! The encoder only needs to push single bytes; buffering, flow control and
//! hardware access belong to the transport.

mod serial_buffer;

pub use serial_buffer::{
    serial_buffer, serial_buffer_with_capacity, OverflowPolicy, SerialBuffer, SerialReader,
};

use crate::error::Result;
use std::io::Write;

/// Byte sink for the MIDI serial stream.
pub trait Transport {
    /// (Re)initialize the underlying device.
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Write one byte. Must either write it whole or return an error.
    fn write(&mut self, byte: u8) -> Result<()>;

    /// Sequential write, stopping at the first failed byte.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            self.write(byte)?;
        }
        Ok(())
    }

    /// Free space in the write buffer, if the transport knows it.
    fn available_for_write(&self) -> Option<usize> {
        None
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn begin(&mut self) -> Result<()> {
        (**self).begin()
    }

    fn write(&mut self, byte: u8) -> Result<()> {
        (**self).write(byte)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_all(bytes)
    }

    fn available_for_write(&self) -> Option<usize> {
        (**self).available_for_write()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Unbounded capture buffer.
impl Transport for Vec<u8> {
    #[inline]
    fn write(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts any `std::io::Write` (a serial device file, a socket, stdout).
#[derive(Debug)]
pub struct WriteTransport<W> {
    inner: W,
}

impl<W: Write> WriteTransport<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Transport for WriteTransport<W> {
    fn write(&mut self, byte: u8) -> Result<()> {
        self.inner.write_all(&[byte])?;
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
