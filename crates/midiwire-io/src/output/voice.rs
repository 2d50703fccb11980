//! Typed channel voice senders. All of them shape arguments and delegate to
//! [`MidiOutput::send`], so validation and running status apply uniformly.

use crate::error::Result;
use crate::transport::Transport;
use midiwire_core::{normalized_pitch_bend_to_wire, pitch_bend_to_wire, split_14bit, MessageKind};

use super::MidiOutput;

impl<T: Transport> MidiOutput<T> {
    pub fn send_note_on(&mut self, note: u8, velocity: u8, channel: u8) -> Result<bool> {
        self.send(MessageKind::NoteOn, note, velocity, channel)
    }

    pub fn send_note_off(&mut self, note: u8, velocity: u8, channel: u8) -> Result<bool> {
        self.send(MessageKind::NoteOff, note, velocity, channel)
    }

    pub fn send_program_change(&mut self, program: u8, channel: u8) -> Result<bool> {
        self.send(MessageKind::ProgramChange, program, 0, channel)
    }

    pub fn send_control_change(&mut self, controller: u8, value: u8, channel: u8) -> Result<bool> {
        self.send(MessageKind::ControlChange, controller, value, channel)
    }

    /// Polyphonic key pressure.
    pub fn send_poly_pressure(&mut self, note: u8, pressure: u8, channel: u8) -> Result<bool> {
        self.send(MessageKind::AfterTouchPoly, note, pressure, channel)
    }

    /// Same as [`send_poly_pressure`](MidiOutput::send_poly_pressure).
    pub fn send_after_touch_poly(&mut self, note: u8, pressure: u8, channel: u8) -> Result<bool> {
        self.send_poly_pressure(note, pressure, channel)
    }

    /// Channel pressure.
    pub fn send_after_touch(&mut self, pressure: u8, channel: u8) -> Result<bool> {
        self.send(MessageKind::AfterTouchChannel, pressure, 0, channel)
    }

    /// `value`: -8192 to 8191, 0 = center. Out-of-range values are clamped.
    pub fn send_pitch_bend(&mut self, value: i32, channel: u8) -> Result<bool> {
        self.send_pitch_bend_wire(pitch_bend_to_wire(value), channel)
    }

    /// `value`: -1.0 to 1.0, 0.0 = center. Out-of-range values are clamped.
    pub fn send_pitch_bend_normalized(&mut self, value: f64, channel: u8) -> Result<bool> {
        self.send_pitch_bend_wire(normalized_pitch_bend_to_wire(value), channel)
    }

    fn send_pitch_bend_wire(&mut self, wire: u16, channel: u8) -> Result<bool> {
        let (lsb, msb) = split_14bit(wire);
        self.send(MessageKind::PitchBend, lsb, msb, channel)
    }
}
