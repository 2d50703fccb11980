//! MIDI serial output encoder.
//!
//! ## Quick Start
//!
//! ```ignore
//! use midiwire_io::{serial_buffer, MidiOutput};
//!
//! let (tx, mut rx) = serial_buffer();
//! let mut midi = MidiOutput::new(tx);
//! midi.begin()?;
//!
//! midi.send_note_on(60, 100, 1)?;
//! midi.send_note_on(64, 100, 1)?; // status byte elided
//! midi.send_pitch_bend(0, 1)?;
//!
//! // RPN: pitch bend sensitivity = 2 semitones
//! midi.begin_rpn(0x0000, 1)?;
//! midi.send_rpn_value_msb_lsb(2, 0, 1)?;
//! midi.end_rpn(1)?;
//! ```

mod builder;
mod parameter;
mod system;
mod voice;

pub use builder::MidiOutputBuilder;

use crate::error::Result;
use crate::running_status::RunningStatus;
use crate::settings::Settings;
use crate::transport::Transport;
use midiwire_core::{channel, data_byte, MessageKind, Scope};
use tracing::{debug, trace};

/// Encodes typed MIDI messages onto a byte [`Transport`].
///
/// Owns the transport and the transmit running status. All sends take
/// `&mut self`; share across threads only behind your own lock.
pub struct MidiOutput<T> {
    transport: T,
    settings: Settings,
    running_status: RunningStatus,
}

impl MidiOutput<()> {
    /// # Example
    ///
    /// ```ignore
    /// let midi = MidiOutput::builder()
    ///     .running_status(false)
    ///     .build(transport);
    /// ```
    pub fn builder() -> MidiOutputBuilder {
        MidiOutputBuilder::default()
    }
}

impl<T: Transport> MidiOutput<T> {
    /// Encoder with default [`Settings`] (running status on).
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, Settings::default())
    }

    pub fn with_settings(transport: T, settings: Settings) -> Self {
        Self {
            transport,
            settings,
            running_status: RunningStatus::new(settings.use_running_status),
        }
    }

    /// Initialize the transport and forget the running status.
    pub fn begin(&mut self) -> Result<()> {
        self.transport.begin()?;
        self.running_status.reset();
        trace!("midi output initialized");
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Status byte the next same-status channel voice message may elide.
    pub fn running_status(&self) -> Option<u8> {
        self.running_status.last()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn flush(&mut self) -> Result<()> {
        self.transport.flush()
    }

    /// Generic send.
    ///
    /// `channel` is 1-16 and only checked for channel voice kinds. Data bytes
    /// are masked to 7 bits; unused data bytes are ignored.
    ///
    /// Returns `Ok(false)` without writing anything when the message is
    /// rejected: `Invalid` kind, a channel outside 1-16 (omni included) for a
    /// channel voice kind, or a SysEx kind (use [`send_sys_ex`]).
    ///
    /// [`send_sys_ex`]: MidiOutput::send_sys_ex
    pub fn send(&mut self, kind: MessageKind, data1: u8, data2: u8, channel: u8) -> Result<bool> {
        let info = kind.info();
        match info.scope {
            Scope::ChannelVoice => {
                let Some(nibble) = channel::to_nibble(channel) else {
                    debug!(?kind, channel, "rejected send: channel out of range");
                    return Ok(false);
                };
                let status = info.status | nibble;
                if self.running_status.should_emit(status) {
                    self.transport.write(status)?;
                }
                // The receiver now runs on `status` even if a data byte fails
                self.running_status.record(status);
                self.write_data(info.data_bytes, data1, data2)?;
                Ok(true)
            }
            Scope::RealTime => {
                self.transport.write(info.status)?;
                Ok(true)
            }
            Scope::SystemCommon => self.send_common(kind, data1, data2),
            Scope::Exclusive | Scope::Invalid => {
                debug!(?kind, "rejected send: kind not encodable as a short message");
                Ok(false)
            }
        }
    }

    fn write_data(&mut self, count: u8, data1: u8, data2: u8) -> Result<()> {
        if count >= 1 {
            self.transport.write(data_byte(data1))?;
        }
        if count >= 2 {
            self.transport.write(data_byte(data2))?;
        }
        Ok(())
    }
}
