//! Registered / Non-Registered Parameter Number sequences.
//!
//! Every verb is a series of Control Change messages on one channel, so a
//! whole begin..end session shares a single status byte under running
//! status. The selected parameter lives on the receiver; nothing is cached
//! here.

use crate::error::Result;
use crate::transport::Transport;
use midiwire_core::controller::{
    DATA_DECREMENT, DATA_ENTRY_LSB, DATA_ENTRY_MSB, DATA_INCREMENT, NULL_PARAMETER,
};
use midiwire_core::{split_14bit, ParameterKind};

use super::MidiOutput;

impl<T: Transport> MidiOutput<T> {
    /// Select `number` (14-bit): LSB select first, then MSB select.
    pub fn begin_parameter(&mut self, kind: ParameterKind, number: u16, channel: u8) -> Result<()> {
        let (lsb, msb) = split_14bit(number);
        self.send_control_change(kind.select_lsb(), lsb, channel)?;
        self.send_control_change(kind.select_msb(), msb, channel)?;
        Ok(())
    }

    /// Data Entry MSB then LSB. Shared by both parameter families.
    pub fn send_data_entry_msb_lsb(&mut self, msb: u8, lsb: u8, channel: u8) -> Result<()> {
        self.send_control_change(DATA_ENTRY_MSB, msb, channel)?;
        self.send_control_change(DATA_ENTRY_LSB, lsb, channel)?;
        Ok(())
    }

    /// 14-bit Data Entry, split into MSB and LSB.
    pub fn send_data_entry(&mut self, value: u16, channel: u8) -> Result<()> {
        let (lsb, msb) = split_14bit(value);
        self.send_data_entry_msb_lsb(msb, lsb, channel)
    }

    pub fn send_data_increment(&mut self, amount: u8, channel: u8) -> Result<()> {
        self.send_control_change(DATA_INCREMENT, amount, channel)?;
        Ok(())
    }

    pub fn send_data_decrement(&mut self, amount: u8, channel: u8) -> Result<()> {
        self.send_control_change(DATA_DECREMENT, amount, channel)?;
        Ok(())
    }

    /// Select the null parameter so later data entry is ignored.
    pub fn end_parameter(&mut self, kind: ParameterKind, channel: u8) -> Result<()> {
        self.send_control_change(kind.select_lsb(), NULL_PARAMETER, channel)?;
        self.send_control_change(kind.select_msb(), NULL_PARAMETER, channel)?;
        Ok(())
    }

    // ==================== RPN ====================

    pub fn begin_rpn(&mut self, number: u16, channel: u8) -> Result<()> {
        self.begin_parameter(ParameterKind::Registered, number, channel)
    }

    pub fn send_rpn_value(&mut self, value: u16, channel: u8) -> Result<()> {
        self.send_data_entry(value, channel)
    }

    pub fn send_rpn_value_msb_lsb(&mut self, msb: u8, lsb: u8, channel: u8) -> Result<()> {
        self.send_data_entry_msb_lsb(msb, lsb, channel)
    }

    pub fn send_rpn_increment(&mut self, amount: u8, channel: u8) -> Result<()> {
        self.send_data_increment(amount, channel)
    }

    pub fn send_rpn_decrement(&mut self, amount: u8, channel: u8) -> Result<()> {
        self.send_data_decrement(amount, channel)
    }

    pub fn end_rpn(&mut self, channel: u8) -> Result<()> {
        self.end_parameter(ParameterKind::Registered, channel)
    }

    // ==================== NRPN ====================

    pub fn begin_nrpn(&mut self, number: u16, channel: u8) -> Result<()> {
        self.begin_parameter(ParameterKind::NonRegistered, number, channel)
    }

    pub fn send_nrpn_value(&mut self, value: u16, channel: u8) -> Result<()> {
        self.send_data_entry(value, channel)
    }

    pub fn send_nrpn_value_msb_lsb(&mut self, msb: u8, lsb: u8, channel: u8) -> Result<()> {
        self.send_data_entry_msb_lsb(msb, lsb, channel)
    }

    pub fn send_nrpn_increment(&mut self, amount: u8, channel: u8) -> Result<()> {
        self.send_data_increment(amount, channel)
    }

    pub fn send_nrpn_decrement(&mut self, amount: u8, channel: u8) -> Result<()> {
        self.send_data_decrement(amount, channel)
    }

    pub fn end_nrpn(&mut self, channel: u8) -> Result<()> {
        self.end_parameter(ParameterKind::NonRegistered, channel)
    }
}
