//! Bounded lock-free byte FIFO standing in for a UART transmit buffer.
//!
//! The producer side is a [`Transport`]; the consumer side drains bytes the
//! way an interrupt handler or DMA would.

use super::Transport;
use crate::error::{Error, Result};
use ringbuf::{traits::*, HeapCons, HeapProd, HeapRb};
use tracing::debug;

const DEFAULT_CAPACITY: usize = 64;

/// What a full buffer does with the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail the write with [`Error::TransportFull`].
    #[default]
    Reject,
    /// Discard the byte and count it.
    Drop,
}

/// Producer side -- the encoder writes here.
pub struct SerialBuffer {
    producer: HeapProd<u8>,
    capacity: usize,
    policy: OverflowPolicy,
    dropped: usize,
}

impl SerialBuffer {
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes discarded under [`OverflowPolicy::Drop`].
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Transport for SerialBuffer {
    fn write(&mut self, byte: u8) -> Result<()> {
        if self.producer.try_push(byte).is_ok() {
            return Ok(());
        }
        match self.policy {
            OverflowPolicy::Reject => Err(Error::TransportFull {
                capacity: self.capacity,
            }),
            OverflowPolicy::Drop => {
                self.dropped += 1;
                debug!(byte, dropped = self.dropped, "serial buffer full, byte dropped");
                Ok(())
            }
        }
    }

    fn available_for_write(&self) -> Option<usize> {
        Some(self.producer.vacant_len())
    }
}

/// Consumer side -- drains bytes in wire order.
pub struct SerialReader {
    consumer: HeapCons<u8>,
}

impl SerialReader {
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        self.consumer.try_pop()
    }

    /// Fills `buf` from the front of the queue, returns the count read.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        self.consumer.pop_slice(buf)
    }

    pub fn drain_all(&mut self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.consumer.occupied_len());
        while let Some(byte) = self.consumer.try_pop() {
            bytes.push(byte);
        }
        bytes
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.consumer.is_empty()
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.consumer.occupied_len()
    }
}

pub fn serial_buffer() -> (SerialBuffer, SerialReader) {
    serial_buffer_with_capacity(DEFAULT_CAPACITY)
}

/// A zero capacity is raised to one byte.
pub fn serial_buffer_with_capacity(capacity: usize) -> (SerialBuffer, SerialReader) {
    let capacity = capacity.max(1);
    let rb = HeapRb::<u8>::new(capacity);
    let (producer, consumer) = rb.split();
    (
        SerialBuffer {
            producer,
            capacity,
            policy: OverflowPolicy::default(),
            dropped: 0,
        },
        SerialReader { consumer },
    )
}
