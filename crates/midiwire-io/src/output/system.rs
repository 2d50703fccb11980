//! System Exclusive, System Common and real-time senders.
//!
//! SysEx frames and real-time bytes leave running status alone. Receivers
//! cancel running status on every System Common status byte, so the System
//! Common senders here clear it too. The generic [`MidiOutput::send`] keeps
//! `TuneRequest` as a one-byte shortcut.

use crate::error::Result;
use crate::transport::Transport;
use midiwire_core::{split_14bit, MessageKind, Scope, SYSEX_END, SYSEX_START};
use tracing::{debug, trace};

use super::MidiOutput;

impl<T: Transport> MidiOutput<T> {
    /// Write a System Exclusive frame.
    ///
    /// Payload bytes are written unmodified. With `array_contains_boundaries`
    /// the caller's buffer already holds the 0xF0/0xF7 delimiters and is
    /// written as is.
    pub fn send_sys_ex(&mut self, data: &[u8], array_contains_boundaries: bool) -> Result<()> {
        if !array_contains_boundaries {
            self.transport.write(SYSEX_START)?;
        }
        self.transport.write_all(data)?;
        if !array_contains_boundaries {
            self.transport.write(SYSEX_END)?;
        }
        trace!(len = data.len(), array_contains_boundaries, "sysex frame sent");
        Ok(())
    }

    /// Generic System Common send. Unused data bytes are ignored.
    ///
    /// Clears running status, `TuneRequest` included. Returns `Ok(false)` for
    /// kinds that are not System Common.
    pub fn send_common(&mut self, kind: MessageKind, data1: u8, data2: u8) -> Result<bool> {
        let info = kind.info();
        match info.scope {
            Scope::SystemCommon => {
                self.transport.write(info.status)?;
                self.write_data(info.data_bytes, data1, data2)?;
                self.running_status.reset();
                Ok(true)
            }
            Scope::RealTime if kind == MessageKind::TuneRequest => {
                self.transport.write(info.status)?;
                self.running_status.reset();
                Ok(true)
            }
            _ => {
                debug!(?kind, "rejected system common send");
                Ok(false)
            }
        }
    }

    /// One-byte real-time message. Returns `Ok(false)` for other kinds.
    pub fn send_real_time(&mut self, kind: MessageKind) -> Result<bool> {
        if kind.scope() != Scope::RealTime {
            debug!(?kind, "rejected real-time send");
            return Ok(false);
        }
        self.transport.write(kind.info().status)?;
        Ok(true)
    }

    /// MIDI Time Code quarter frame from its message type (0-7) and value
    /// nibble.
    pub fn send_time_code_quarter_frame(&mut self, type_nibble: u8, values_nibble: u8) -> Result<()> {
        let data = ((type_nibble & 0x07) << 4) | (values_nibble & 0x0F);
        self.send_time_code_quarter_frame_raw(data)
    }

    /// MIDI Time Code quarter frame from a pre-packed data byte.
    pub fn send_time_code_quarter_frame_raw(&mut self, data: u8) -> Result<()> {
        self.send_common(MessageKind::TimeCodeQuarterFrame, data, 0)?;
        Ok(())
    }

    /// Song Position Pointer, in MIDI beats (sixteenth notes) since the
    /// start of the song. 14-bit.
    pub fn send_song_position(&mut self, beats: u16) -> Result<()> {
        let (lsb, msb) = split_14bit(beats);
        self.send_common(MessageKind::SongPosition, lsb, msb)?;
        Ok(())
    }

    pub fn send_song_select(&mut self, song: u8) -> Result<()> {
        self.send_common(MessageKind::SongSelect, song, 0)?;
        Ok(())
    }

    pub fn send_tune_request(&mut self) -> Result<()> {
        self.send_common(MessageKind::TuneRequest, 0, 0)?;
        Ok(())
    }
}
