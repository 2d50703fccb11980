//! Fluent MIDI output builder

use crate::error::Result;
use crate::output::MidiOutput;
use crate::transport::Transport;
use midiwire_core::ParameterKind;

/// Fluent builder for sending a run of MIDI messages.
///
/// Created via `MidiOutput::chain()`. After the first transport error the
/// remaining calls are skipped and `finish()` returns that error. Rejected
/// messages (bad channel) are skipped silently, as with the direct senders.
///
/// # Example
/// ```ignore
/// midi.chain()
///     .note_on(60, 100, 1)
///     .cc(74, 64, 1)
///     .pitch_bend(0, 1)
///     .finish()?;
/// ```
pub struct MidiBuilder<'a, T: Transport> {
    midi: &'a mut MidiOutput<T>,
    result: Result<()>,
}

impl<'a, T: Transport> MidiBuilder<'a, T> {
    pub(crate) fn new(midi: &'a mut MidiOutput<T>) -> Self {
        Self {
            midi,
            result: Ok(()),
        }
    }

    fn then(mut self, f: impl FnOnce(&mut MidiOutput<T>) -> Result<()>) -> Self {
        if self.result.is_ok() {
            self.result = f(&mut *self.midi);
        }
        self
    }

    /// Send a Note On message.
    ///
    /// # Arguments
    /// * `note` - Note number (0-127)
    /// * `velocity` - Velocity (0-127)
    /// * `channel` - MIDI channel (1-16)
    pub fn note_on(self, note: u8, velocity: u8, channel: u8) -> Self {
        self.then(|midi| midi.send_note_on(note, velocity, channel).map(drop))
    }

    /// Send a Note Off message.
    ///
    /// # Arguments
    /// * `note` - Note number (0-127)
    /// * `velocity` - Release velocity (0-127)
    /// * `channel` - MIDI channel (1-16)
    pub fn note_off(self, note: u8, velocity: u8, channel: u8) -> Self {
        self.then(|midi| midi.send_note_off(note, velocity, channel).map(drop))
    }

    /// Send a Control Change (CC) message.
    pub fn cc(self, controller: u8, value: u8, channel: u8) -> Self {
        self.then(|midi| midi.send_control_change(controller, value, channel).map(drop))
    }

    pub fn program_change(self, program: u8, channel: u8) -> Self {
        self.then(|midi| midi.send_program_change(program, channel).map(drop))
    }

    /// Send a Pitch Bend message.
    ///
    /// # Arguments
    /// * `value` - Pitch bend value (-8192 to 8191, 0 = center)
    /// * `channel` - MIDI channel (1-16)
    pub fn pitch_bend(self, value: i32, channel: u8) -> Self {
        self.then(|midi| midi.send_pitch_bend(value, channel).map(drop))
    }

    pub fn after_touch(self, pressure: u8, channel: u8) -> Self {
        self.then(|midi| midi.send_after_touch(pressure, channel).map(drop))
    }

    pub fn poly_pressure(self, note: u8, pressure: u8, channel: u8) -> Self {
        self.then(|midi| midi.send_poly_pressure(note, pressure, channel).map(drop))
    }

    /// Select `number`, write a 14-bit value, then deselect.
    pub fn parameter(self, kind: ParameterKind, number: u16, value: u16, channel: u8) -> Self {
        self.then(|midi| {
            midi.begin_parameter(kind, number, channel)?;
            midi.send_data_entry(value, channel)?;
            midi.end_parameter(kind, channel)
        })
    }

    pub fn rpn(self, number: u16, value: u16, channel: u8) -> Self {
        self.parameter(ParameterKind::Registered, number, value, channel)
    }

    pub fn nrpn(self, number: u16, value: u16, channel: u8) -> Self {
        self.parameter(ParameterKind::NonRegistered, number, value, channel)
    }

    /// SysEx payload without delimiters.
    pub fn sys_ex(self, data: &[u8]) -> Self {
        self.then(|midi| midi.send_sys_ex(data, false))
    }

    pub fn finish(self) -> Result<()> {
        self.result
    }
}

impl<T: Transport> MidiOutput<T> {
    pub fn chain(&mut self) -> MidiBuilder<'_, T> {
        MidiBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::output::MidiOutput;
    use crate::transport::serial_buffer_with_capacity;
    use midiwire_core::controller::rpn;
    use midiwire_core::MessageKind;

    #[test]
    fn test_chain_shares_running_status() {
        let mut midi = MidiOutput::new(Vec::<u8>::new());
        midi.chain()
            .note_on(60, 100, 1)
            .note_on(64, 100, 1)
            .cc(74, 64, 1)
            .pitch_bend(0, 1)
            .finish()
            .unwrap();
        assert_eq!(
            midi.into_transport(),
            vec![0x90, 60, 100, 64, 100, 0xB0, 74, 64, 0xE0, 0x00, 0x40]
        );
    }

    #[test]
    fn test_chain_rpn() {
        let mut midi = MidiOutput::new(Vec::<u8>::new());
        midi.chain()
            .rpn(rpn::PITCH_BEND_SENSITIVITY, 2 << 7, 3)
            .finish()
            .unwrap();
        assert_eq!(
            midi.into_transport(),
            vec![0xB2, 0x64, 0x00, 0x65, 0x00, 0x06, 0x02, 0x26, 0x00, 0x64, 0x7F, 0x65, 0x7F]
        );
    }

    #[test]
    fn test_chain_skips_rejected_messages() {
        let mut midi = MidiOutput::new(Vec::<u8>::new());
        midi.chain()
            .program_change(5, 0)
            .program_change(5, 2)
            .after_touch(9, 2)
            .poly_pressure(60, 9, 2)
            .note_off(60, 0, 2)
            .nrpn(1, 1, 2)
            .sys_ex(&[0x42])
            .finish()
            .unwrap();
        assert_eq!(
            midi.into_transport(),
            vec![
                0xC1, 5, 0xD1, 9, 0xA1, 60, 9, 0x81, 60, 0, 0xB1, 0x62, 0x01, 0x63, 0x00, 0x06,
                0x00, 0x26, 0x01, 0x62, 0x7F, 0x63, 0x7F, 0xF0, 0x42, 0xF7
            ]
        );
    }

    #[test]
    fn test_chain_stops_at_first_error() {
        let (tx, mut rx) = serial_buffer_with_capacity(4);
        let mut midi = MidiOutput::new(tx);
        let result = midi
            .chain()
            .note_on(60, 100, 1)
            .note_on(62, 100, 1)
            .note_on(64, 100, 1)
            .finish();
        assert!(matches!(result, Err(Error::TransportFull { capacity: 4 })));

        // Drained bytes free space; the chain did not resume
        assert_eq!(rx.drain_all(), vec![0x90, 60, 100, 62]);
        midi.send_real_time(MessageKind::Clock).unwrap();
        assert_eq!(rx.drain_all(), vec![0xF8]);
    }
}
