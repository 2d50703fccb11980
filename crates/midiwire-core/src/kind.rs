//! MIDI message kinds and their per-kind wire properties.

use serde::{Deserialize, Serialize};

/// How a message kind relates to channels and running status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Status nibble carries the channel; participates in running status.
    ChannelVoice,
    /// Channel-independent, may carry data bytes. Cancels running status.
    SystemCommon,
    /// Single status byte, may be interleaved anywhere.
    RealTime,
    /// SysEx start/end delimiters, self-framed.
    Exclusive,
    Invalid,
}

/// Static wire properties of a [`MessageKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindInfo {
    /// Status byte, or the high nibble for channel voice kinds.
    pub status: u8,
    /// Number of data bytes following the status byte.
    pub data_bytes: u8,
    pub scope: Scope,
}

impl KindInfo {
    const fn new(status: u8, data_bytes: u8, scope: Scope) -> Self {
        Self {
            status,
            data_bytes,
            scope,
        }
    }
}

/// Every message kind the encoder knows about.
///
/// `TuneRequest` is System Common on the wire but carries no data, so it is
/// sent as a one-byte shortcut alongside the real-time kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    NoteOff,
    NoteOn,
    AfterTouchPoly,
    ControlChange,
    ProgramChange,
    AfterTouchChannel,
    PitchBend,
    SystemExclusive,
    TimeCodeQuarterFrame,
    SongPosition,
    SongSelect,
    TuneRequest,
    SystemExclusiveEnd,
    Clock,
    Tick,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    SystemReset,
    Invalid,
}

impl MessageKind {
    pub const ALL_CHANNEL_VOICE: [MessageKind; 7] = [
        MessageKind::NoteOff,
        MessageKind::NoteOn,
        MessageKind::AfterTouchPoly,
        MessageKind::ControlChange,
        MessageKind::ProgramChange,
        MessageKind::AfterTouchChannel,
        MessageKind::PitchBend,
    ];

    /// Kinds sent as a single status byte without touching running status.
    pub const ALL_SHORTCUTS: [MessageKind; 8] = [
        MessageKind::TuneRequest,
        MessageKind::Clock,
        MessageKind::Tick,
        MessageKind::Start,
        MessageKind::Continue,
        MessageKind::Stop,
        MessageKind::ActiveSensing,
        MessageKind::SystemReset,
    ];

    #[inline]
    pub const fn info(self) -> KindInfo {
        use MessageKind::*;
        match self {
            NoteOff => KindInfo::new(0x80, 2, Scope::ChannelVoice),
            NoteOn => KindInfo::new(0x90, 2, Scope::ChannelVoice),
            AfterTouchPoly => KindInfo::new(0xA0, 2, Scope::ChannelVoice),
            ControlChange => KindInfo::new(0xB0, 2, Scope::ChannelVoice),
            ProgramChange => KindInfo::new(0xC0, 1, Scope::ChannelVoice),
            AfterTouchChannel => KindInfo::new(0xD0, 1, Scope::ChannelVoice),
            PitchBend => KindInfo::new(0xE0, 2, Scope::ChannelVoice),
            SystemExclusive => KindInfo::new(0xF0, 0, Scope::Exclusive),
            TimeCodeQuarterFrame => KindInfo::new(0xF1, 1, Scope::SystemCommon),
            SongPosition => KindInfo::new(0xF2, 2, Scope::SystemCommon),
            SongSelect => KindInfo::new(0xF3, 1, Scope::SystemCommon),
            TuneRequest => KindInfo::new(0xF6, 0, Scope::RealTime),
            SystemExclusiveEnd => KindInfo::new(0xF7, 0, Scope::Exclusive),
            Clock => KindInfo::new(0xF8, 0, Scope::RealTime),
            Tick => KindInfo::new(0xF9, 0, Scope::RealTime),
            Start => KindInfo::new(0xFA, 0, Scope::RealTime),
            Continue => KindInfo::new(0xFB, 0, Scope::RealTime),
            Stop => KindInfo::new(0xFC, 0, Scope::RealTime),
            ActiveSensing => KindInfo::new(0xFE, 0, Scope::RealTime),
            SystemReset => KindInfo::new(0xFF, 0, Scope::RealTime),
            Invalid => KindInfo::new(0x00, 0, Scope::Invalid),
        }
    }

    #[inline]
    pub const fn scope(self) -> Scope {
        self.info().scope
    }

    #[inline]
    pub const fn data_bytes(self) -> u8 {
        self.info().data_bytes
    }

    #[inline]
    pub const fn is_channel_voice(self) -> bool {
        matches!(self.scope(), Scope::ChannelVoice)
    }

    /// Status byte for `channel` (1-16). Returns `None` for kinds that cannot
    /// be addressed to that channel.
    #[inline]
    pub fn status_byte(self, channel: u8) -> Option<u8> {
        let info = self.info();
        match info.scope {
            Scope::ChannelVoice => {
                crate::channel::is_sendable(channel).then(|| info.status | (channel - 1))
            }
            Scope::Invalid => None,
            _ => Some(info.status),
        }
    }

    /// Kind from a status byte. Channel voice kinds ignore the low nibble.
    pub fn from_status(status: u8) -> Option<Self> {
        use MessageKind::*;
        let kind = match status {
            0x80..=0xEF => match status & 0xF0 {
                0x80 => NoteOff,
                0x90 => NoteOn,
                0xA0 => AfterTouchPoly,
                0xB0 => ControlChange,
                0xC0 => ProgramChange,
                0xD0 => AfterTouchChannel,
                _ => PitchBend,
            },
            0xF0 => SystemExclusive,
            0xF1 => TimeCodeQuarterFrame,
            0xF2 => SongPosition,
            0xF3 => SongSelect,
            0xF6 => TuneRequest,
            0xF7 => SystemExclusiveEnd,
            0xF8 => Clock,
            0xF9 => Tick,
            0xFA => Start,
            0xFB => Continue,
            0xFC => Stop,
            0xFE => ActiveSensing,
            0xFF => SystemReset,
            _ => return None,
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_voice_arity() {
        let arity: [u8; 7] = [2, 2, 2, 2, 1, 1, 2];
        for (kind, expected) in MessageKind::ALL_CHANNEL_VOICE.iter().zip(arity) {
            assert!(kind.is_channel_voice());
            assert_eq!(kind.data_bytes(), expected, "{:?}", kind);
        }
    }

    #[test]
    fn test_status_byte_per_channel() {
        assert_eq!(MessageKind::NoteOn.status_byte(12), Some(0x9B));
        assert_eq!(MessageKind::NoteOff.status_byte(1), Some(0x80));
        assert_eq!(MessageKind::PitchBend.status_byte(16), Some(0xEF));
        assert_eq!(MessageKind::ControlChange.status_byte(0), None);
        assert_eq!(MessageKind::ControlChange.status_byte(17), None);
        assert_eq!(MessageKind::Invalid.status_byte(1), None);
    }

    #[test]
    fn test_shortcuts_ignore_channel() {
        let expected = [0xF6, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFE, 0xFF];
        for (kind, status) in MessageKind::ALL_SHORTCUTS.iter().zip(expected) {
            assert_eq!(kind.scope(), Scope::RealTime);
            assert_eq!(kind.data_bytes(), 0);
            assert_eq!(kind.status_byte(42), Some(status));
        }
    }

    #[test]
    fn test_from_status_inverts_table() {
        for kind in MessageKind::ALL_CHANNEL_VOICE {
            for channel in 1..=16 {
                let status = kind.status_byte(channel).unwrap();
                assert_eq!(MessageKind::from_status(status), Some(kind));
            }
        }
        for kind in MessageKind::ALL_SHORTCUTS {
            assert_eq!(MessageKind::from_status(kind.info().status), Some(kind));
        }
        assert_eq!(MessageKind::from_status(0x7F), None);
        assert_eq!(MessageKind::from_status(0xF4), None);
        assert_eq!(MessageKind::from_status(0xFD), None);
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&MessageKind::AfterTouchPoly).unwrap();
        assert_eq!(json, "\"AfterTouchPoly\"");
        let kind: MessageKind = serde_json::from_str("\"SongSelect\"").unwrap();
        assert_eq!(kind, MessageKind::SongSelect);
    }
}
