//! End-to-end tests through the umbrella crate.
//!
//! Run with:
//! ```bash
//! cargo test -p midiwire --test midi_output
//! ```

use midiwire::controller::rpn;
use midiwire::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Note On, Note On, Program Change, Pitch Bend on one channel.
#[test]
fn test_performance_stream() {
    init_tracing();
    let (tx, mut rx) = serial_buffer();
    let mut midi = MidiOutput::new(tx);
    midi.begin().unwrap();

    midi.send_note_on(60, 100, 1).unwrap();
    midi.send_note_on(64, 100, 1).unwrap();
    midi.send_program_change(5, 1).unwrap();
    midi.send_pitch_bend(0, 1).unwrap();

    assert_eq!(
        rx.drain_all(),
        vec![0x90, 60, 100, 64, 100, 0xC0, 5, 0xE0, 0x00, 0x40]
    );
}

#[test]
fn test_running_status_disabled() {
    init_tracing();
    let (tx, mut rx) = serial_buffer();
    let mut midi = MidiOutput::builder().running_status(false).build(tx);

    midi.send_note_on(60, 100, 1).unwrap();
    midi.send_note_on(64, 100, 1).unwrap();
    assert_eq!(rx.drain_all(), vec![0x90, 60, 100, 0x90, 64, 100]);
}

#[test]
fn test_rejected_channels_write_nothing() {
    init_tracing();
    let (tx, rx) = serial_buffer();
    let mut midi = MidiOutput::new(tx);

    assert!(!midi.send_note_on(60, 100, midiwire::CHANNEL_OMNI).unwrap());
    assert!(!midi.send_note_on(60, 100, midiwire::CHANNEL_OFF).unwrap());
    assert!(!midi.send(MessageKind::Invalid, 1, 2, 1).unwrap());
    assert!(!rx.has_pending());
}

#[test]
fn test_pitch_bend_sensitivity_setup() {
    init_tracing();
    let (tx, mut rx) = serial_buffer();
    let mut midi = MidiOutput::new(tx);

    midi.chain()
        .rpn(rpn::PITCH_BEND_SENSITIVITY, 12 << 7, 2)
        .pitch_bend(midiwire::PITCH_BEND_MAX, 2)
        .finish()
        .unwrap();

    assert_eq!(
        rx.drain_all(),
        vec![
            0xB1, 0x64, 0x00, 0x65, 0x00, 0x06, 0x0C, 0x26, 0x00, 0x64, 0x7F, 0x65, 0x7F, 0xE1,
            0x7F, 0x7F
        ]
    );
}

#[test]
fn test_generic_send_matches_typed_senders() {
    let mut generic = MidiOutput::new(Vec::<u8>::new());
    let mut typed = MidiOutput::new(Vec::<u8>::new());

    generic.send(MessageKind::ControlChange, 7, 90, 4).unwrap();
    generic.send(MessageKind::AfterTouchChannel, 33, 0, 4).unwrap();
    generic.send(MessageKind::Clock, 0, 0, 0).unwrap();
    generic.send(MessageKind::SongSelect, 2, 0, 0).unwrap();

    typed.send_control_change(7, 90, 4).unwrap();
    typed.send_after_touch(33, 4).unwrap();
    typed.send_real_time(MessageKind::Clock).unwrap();
    typed.send_song_select(2).unwrap();

    assert_eq!(generic.into_transport(), typed.into_transport());
}

#[test]
fn test_kind_table_through_umbrella() {
    assert_eq!(MessageKind::NoteOn.status_byte(10), Some(0x99));
    assert_eq!(MessageKind::from_status(0xE5), Some(MessageKind::PitchBend));
    assert_eq!(ParameterKind::NonRegistered.select_lsb(), 0x62);
    assert!(Settings::default().use_running_status);
}
