//! # midiwire - MIDI 1.0 Serial Output
//!
//! Turns typed MIDI messages into the byte stream a 31250-baud DIN/UART link
//! carries.
//!
//! ## Architecture
//!
//! midiwire is an umbrella crate over:
//! - **midiwire-core** - Wire types (message kinds, channels, 14-bit values, RPN/NRPN numbers)
//! - **midiwire-io** - Encoder (running status, SysEx framing, parameter sequences) and transports
//!
//! ## Quick Start
//!
//! ```ignore
//! use midiwire::prelude::*;
//!
//! let (tx, mut rx) = serial_buffer();
//! let mut midi = MidiOutput::builder()
//!     .running_status(true)
//!     .build(tx);
//! midi.begin()?;
//!
//! midi.send_note_on(60, 100, 1)?;
//! midi.send_note_on(64, 100, 1)?; // 2 bytes, status elided
//! midi.send_sys_ex(&[0x7E, 0x7F, 0x09, 0x01], false)?;
//!
//! // Hand bytes to the UART
//! let bytes = rx.drain_all();
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `std`
//! - `std` - std support in midiwire-core (serde/std)

/// Re-export of midiwire-core for direct access
pub use midiwire_core as core;

/// Re-export of midiwire-io for direct access
pub use midiwire_io as io;

// Encoder
pub use midiwire_io::{Error, MidiBuilder, MidiOutput, MidiOutputBuilder, Result, Settings};

// Transports
pub use midiwire_io::{
    serial_buffer, serial_buffer_with_capacity, OverflowPolicy, SerialBuffer, SerialReader,
    Transport, WriteTransport,
};

// Wire types
pub use midiwire_core::{
    controller, KindInfo, MessageKind, ParameterKind, Scope, CHANNEL_MAX, CHANNEL_MIN,
    CHANNEL_OFF, CHANNEL_OMNI, PITCH_BEND_CENTER, PITCH_BEND_MAX, PITCH_BEND_MIN,
};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        serial_buffer, serial_buffer_with_capacity, Error, MessageKind, MidiOutput,
        OverflowPolicy, ParameterKind, Result, Settings, Transport, WriteTransport,
    };
}
