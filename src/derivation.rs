// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Receive window and transmit power derivation rules.
use crate::error::{Error, Result};
use crate::types::DR;

/// Rule mapping an uplink data rate and RX1 offset to the RX1 downlink data rate.
///
/// Inputs are validated strictly while the derived index saturates at `floor` and `ceiling`:
/// the offset is a speed reduction, and extreme offsets degrade to the slowest (or fastest)
/// downlink rate instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rx1DataRateRule {
    /// Highest uplink data rate the rule accepts.
    pub max_uplink: DR,
    pub max_offset: u8,
    /// Added to the uplink index before subtracting the offset; fixed plans use it to move
    /// from the uplink to the downlink part of the data rate table.
    pub shift: u8,
    pub floor: DR,
    /// Floor applied when the downlink dwell time limit is in effect.
    pub dwell_time_floor: DR,
    pub ceiling: DR,
    /// Offsets 6 and 7 select -1 and -2, raising the downlink data rate.
    pub extended_offsets: bool,
}

impl Rx1DataRateRule {
    pub const fn new(max_uplink: DR, max_offset: u8, floor: DR, ceiling: DR) -> Self {
        Self {
            max_uplink,
            max_offset,
            shift: 0,
            floor,
            dwell_time_floor: floor,
            ceiling,
            extended_offsets: false,
        }
    }

    pub const fn with_shift(mut self, shift: u8) -> Self {
        self.shift = shift;
        self
    }

    pub const fn with_dwell_time_floor(mut self, floor: DR) -> Self {
        self.dwell_time_floor = floor;
        self
    }

    pub const fn with_extended_offsets(mut self) -> Self {
        self.extended_offsets = true;
        self
    }

    /// Whether `offset` may be configured as RX1 data rate offset.
    pub fn offset_valid(&self, offset: u8) -> bool {
        offset <= self.max_offset
    }

    pub fn data_rate(&self, uplink: DR, offset: u8, dwell_time: bool) -> Result<DR> {
        if uplink > self.max_uplink {
            return Err(Error::DataRateIndexTooHigh { max: self.max_uplink });
        }
        if offset > self.max_offset {
            return Err(Error::DataRateOffsetTooHigh { max: self.max_offset });
        }
        let effective_offset = if self.extended_offsets && offset > 5 {
            5 - i16::from(offset)
        } else {
            i16::from(offset)
        };
        let floor = if dwell_time {
            self.dwell_time_floor
        } else {
            self.floor
        };
        let si = i16::from(uplink.index()) + i16::from(self.shift) - effective_offset;
        if si <= i16::from(floor.index()) {
            return Ok(floor);
        }
        if si >= i16::from(self.ceiling.index()) {
            return Ok(self.ceiling);
        }
        DR::try_from(si as u8)
    }
}

/// Mapping from the uplink channel index to the RX1 downlink channel index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rx1Channel {
    /// The downlink uses the uplink channel.
    Identity,
    /// The downlink uses channel `index % n`.
    Modulo(u8),
}

impl Rx1Channel {
    pub fn channel(&self, uplink_channel: u8) -> u8 {
        match self {
            Rx1Channel::Identity => uplink_channel,
            Rx1Channel::Modulo(n) => uplink_channel % (*n).max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rx2Parameters {
    pub data_rate: DR,
    pub frequency: u32,
}

impl Rx2Parameters {
    pub const fn new(data_rate: DR, frequency: u32) -> Self {
        Self { data_rate, frequency }
    }
}

/// Transmit power offsets in dB relative to the band's max EIRP, indexed by TXPower.
///
/// RFU slots have no defined meaning and read as `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxOffsetTable([Option<f32>; 16]);

impl TxOffsetTable {
    pub const fn new(offsets: [Option<f32>; 16]) -> Self {
        Self(offsets)
    }

    /// Defines `count` offsets going down in steps of `step` dB from 0.
    pub fn steps(count: u8, step: f32) -> Self {
        let mut offsets = [None; 16];
        for (i, offset) in offsets.iter_mut().enumerate().take(count as usize) {
            *offset = Some(-step * i as f32);
        }
        Self(offsets)
    }

    pub fn get(&self, index: u8) -> Option<f32> {
        self.0.get(index as usize).copied().flatten()
    }

    /// Highest defined TXPower index.
    pub fn max_index(&self) -> Option<u8> {
        self.0.iter().rposition(Option::is_some).map(|i| i as u8)
    }
}
