//! MIDI channel numbering.
//!
//! Channels are 1-based on the API (1-16) and 0-based in the status nibble.

pub const CHANNEL_MIN: u8 = 1;
pub const CHANNEL_MAX: u8 = 16;

/// Listen on all channels. Receive-side filter only, never a send target.
pub const CHANNEL_OMNI: u8 = 0;

/// Receive-side "disabled" filter value.
pub const CHANNEL_OFF: u8 = 17;

/// `true` if `channel` can be addressed by an outgoing channel voice message.
#[inline]
pub const fn is_sendable(channel: u8) -> bool {
    channel >= CHANNEL_MIN && channel <= CHANNEL_MAX
}

/// Low nibble of a channel voice status byte.
#[inline]
pub const fn to_nibble(channel: u8) -> Option<u8> {
    if is_sendable(channel) {
        Some(channel - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sendable_range() {
        assert!(!is_sendable(CHANNEL_OMNI));
        assert!(!is_sendable(CHANNEL_OFF));
        assert!(!is_sendable(42));
        assert!((1..=16).all(is_sendable));
    }

    #[test]
    fn test_nibble() {
        assert_eq!(to_nibble(1), Some(0));
        assert_eq!(to_nibble(12), Some(11));
        assert_eq!(to_nibble(16), Some(15));
        assert_eq!(to_nibble(0), None);
    }
}
