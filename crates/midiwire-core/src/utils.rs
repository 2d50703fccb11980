//! Data byte helpers

/// Clear the high bit. Data bytes on the wire are always 7-bit.
#[inline]
pub const fn data_byte(value: u8) -> u8 {
    value & 0x7F
}

/// Split a 14-bit value into `(lsb, msb)` data bytes.
#[inline]
pub const fn split_14bit(value: u16) -> (u8, u8) {
    ((value & 0x7F) as u8, ((value >> 7) & 0x7F) as u8)
}

#[inline]
pub const fn join_14bit(lsb: u8, msb: u8) -> u16 {
    ((msb as u16 & 0x7F) << 7) | (lsb as u16 & 0x7F)
}
