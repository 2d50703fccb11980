//! MIDI 1.0 wire types for midiwire.
//!
//! Everything here is plain data and `const` lookups, usable without `std`:
//!
//! - **Message kinds**: closed [`MessageKind`] enum with a per-kind table of
//!   status bits, data-byte count and [`Scope`]
//! - **Channels**: 1-16 send range plus the receive-only omni/off sentinels
//! - **14-bit values**: data byte masking, LSB/MSB splitting, pitch bend mapping
//! - **Parameter protocol**: RPN/NRPN controller numbers

#![cfg_attr(not(feature = "std"), no_std)]

pub mod channel;
pub mod controller;
pub(crate) mod kind;
pub(crate) mod pitch_bend;
pub(crate) mod utils;

pub use channel::{CHANNEL_MAX, CHANNEL_MIN, CHANNEL_OFF, CHANNEL_OMNI};
pub use controller::ParameterKind;
pub use kind::{KindInfo, MessageKind, Scope};
pub use pitch_bend::{
    normalized_pitch_bend_to_wire, pitch_bend_to_wire, PITCH_BEND_CENTER, PITCH_BEND_MAX,
    PITCH_BEND_MIN,
};
pub use utils::{data_byte, join_14bit, split_14bit};

/// First byte of a System Exclusive frame.
pub const SYSEX_START: u8 = 0xF0;

/// Last byte of a System Exclusive frame.
pub const SYSEX_END: u8 = 0xF7;
