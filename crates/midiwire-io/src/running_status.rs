//! Transmit-side running status tracking.

/// Remembers the last channel voice status byte written to the wire.
///
/// When disabled, nothing is ever recorded and every status byte is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningStatus {
    enabled: bool,
    last: Option<u8>,
}

impl RunningStatus {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last: None,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.last
    }

    #[inline]
    pub fn should_emit(&self, status: u8) -> bool {
        !self.enabled || self.last != Some(status)
    }

    #[inline]
    pub fn record(&mut self, status: u8) {
        if self.enabled {
            self.last = Some(status);
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.last = None;
    }
}
