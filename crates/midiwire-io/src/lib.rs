//! MIDI 1.0 serial output for midiwire.
//!
//! Encodes typed MIDI messages into the byte stream a DIN/UART link carries:
//! running status, SysEx framing, RPN/NRPN sequences and System Common /
//! real-time shortcuts. Bytes go to any [`Transport`].

pub mod error;
pub use error::{Error, Result};

pub mod settings;
pub use settings::Settings;

pub mod running_status;
pub use running_status::RunningStatus;

pub mod transport;
pub use transport::{
    serial_buffer, serial_buffer_with_capacity, OverflowPolicy, SerialBuffer, SerialReader,
    Transport, WriteTransport,
};

mod output;
pub use output::{MidiOutput, MidiOutputBuilder};

mod midi_builder;
pub use midi_builder::MidiBuilder;

pub use midiwire_core::{
    controller, MessageKind, ParameterKind, Scope, CHANNEL_MAX, CHANNEL_MIN, CHANNEL_OFF,
    CHANNEL_OMNI, PITCH_BEND_CENTER, PITCH_BEND_MAX, PITCH_BEND_MIN,
};
