//! Pitch bend value mapping.
//!
//! The wire value is an unsigned 14-bit number centered at 8192. Signed input
//! spans `PITCH_BEND_MIN..=PITCH_BEND_MAX`, normalized input spans
//! `-1.0..=1.0`. Out-of-range input is clamped.

pub const PITCH_BEND_MIN: i32 = -8192;
pub const PITCH_BEND_MAX: i32 = 8191;

/// Wire value for "no bend".
pub const PITCH_BEND_CENTER: u16 = 8192;

#[inline]
pub fn pitch_bend_to_wire(value: i32) -> u16 {
    (value.clamp(PITCH_BEND_MIN, PITCH_BEND_MAX) - PITCH_BEND_MIN) as u16
}

/// Positive input scales to `PITCH_BEND_MAX`, negative to `PITCH_BEND_MIN`,
/// so both ends of the range are reachable. NaN maps to center.
#[inline]
pub fn normalized_pitch_bend_to_wire(value: f64) -> u16 {
    if value.is_nan() {
        return PITCH_BEND_CENTER;
    }
    let value = value.clamp(-1.0, 1.0);
    let scale = if value > 0.0 {
        PITCH_BEND_MAX as f64
    } else {
        -(PITCH_BEND_MIN as f64)
    };
    pitch_bend_to_wire((value * scale) as i32)
}
