//! Controller numbers used by the (N)RPN parameter protocol.

use serde::{Deserialize, Serialize};

pub const DATA_ENTRY_MSB: u8 = 0x06;
pub const DATA_ENTRY_LSB: u8 = 0x26;
pub const DATA_INCREMENT: u8 = 0x60;
pub const DATA_DECREMENT: u8 = 0x61;
pub const NRPN_LSB: u8 = 0x62;
pub const NRPN_MSB: u8 = 0x63;
pub const RPN_LSB: u8 = 0x64;
pub const RPN_MSB: u8 = 0x65;

/// Select value that deselects the current parameter.
pub const NULL_PARAMETER: u8 = 0x7F;

/// Well-known registered parameter numbers (14-bit).
pub mod rpn {
    pub const PITCH_BEND_SENSITIVITY: u16 = 0x0000;
    pub const CHANNEL_FINE_TUNING: u16 = 0x0001;
    pub const CHANNEL_COARSE_TUNING: u16 = 0x0002;
    pub const SELECT_TUNING_PROGRAM: u16 = 0x0003;
    pub const SELECT_TUNING_BANK: u16 = 0x0004;
    pub const MODULATION_DEPTH_RANGE: u16 = 0x0005;
    pub const NULL_FUNCTION: u16 = 0x7F | (0x7F << 7);
}

/// Registered or non-registered parameter family.
///
/// The two families share the data entry and increment/decrement
/// controllers and differ only in their select controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    Registered,
    NonRegistered,
}

impl ParameterKind {
    #[inline]
    pub const fn select_lsb(self) -> u8 {
        match self {
            ParameterKind::Registered => RPN_LSB,
            ParameterKind::NonRegistered => NRPN_LSB,
        }
    }

    #[inline]
    pub const fn select_msb(self) -> u8 {
        match self {
            ParameterKind::Registered => RPN_MSB,
            ParameterKind::NonRegistered => NRPN_MSB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::split_14bit;

    #[test]
    fn test_select_controllers() {
        assert_eq!(ParameterKind::Registered.select_lsb(), 0x64);
        assert_eq!(ParameterKind::Registered.select_msb(), 0x65);
        assert_eq!(ParameterKind::NonRegistered.select_lsb(), 0x62);
        assert_eq!(ParameterKind::NonRegistered.select_msb(), 0x63);
    }

    #[test]
    fn test_null_function_selects_null_bytes() {
        assert_eq!(
            split_14bit(rpn::NULL_FUNCTION),
            (NULL_PARAMETER, NULL_PARAMETER)
        );
    }
}
