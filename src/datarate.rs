// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Data rate tables: the 16-slot mapping from [`DR`] to modulation and payload limits.
use lora_modulation::{Bandwidth, SpreadingFactor};

use crate::types::DR;

/// Modulation used by a data rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modulation {
    LoRa { spreading_factor: SpreadingFactor, bandwidth: Bandwidth },
    /// GFSK, bit rate in bits per second.
    Fsk { bit_rate: u32 },
}

/// Maximum payload sizes of a data rate, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxPayloadSize {
    /// Maximum MACPayload size (M).
    pub mac_payload: u8,
    /// Maximum application payload size without FOpts (N).
    pub frm_payload: u8,
}

impl MaxPayloadSize {
    pub const fn new(mac_payload: u8, frm_payload: u8) -> Self {
        Self { mac_payload, frm_payload }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataRate {
    pub modulation: Modulation,
    /// Payload limits when a repeater may be in the path.
    pub default_max_size: MaxPayloadSize,
    pub no_repeater_max_size: MaxPayloadSize,
}

impl DataRate {
    pub const fn lora(
        spreading_factor: SpreadingFactor,
        bandwidth: Bandwidth,
        default_max_size: MaxPayloadSize,
        no_repeater_max_size: MaxPayloadSize,
    ) -> Self {
        Self {
            modulation: Modulation::LoRa { spreading_factor, bandwidth },
            default_max_size,
            no_repeater_max_size,
        }
    }

    pub const fn fsk(
        bit_rate: u32,
        default_max_size: MaxPayloadSize,
        no_repeater_max_size: MaxPayloadSize,
    ) -> Self {
        Self { modulation: Modulation::Fsk { bit_rate }, default_max_size, no_repeater_max_size }
    }

    pub fn max_payload_size(&self, repeater_compatible: bool) -> MaxPayloadSize {
        if repeater_compatible {
            self.default_max_size
        } else {
            self.no_repeater_max_size
        }
    }

    pub fn is_lora(&self) -> bool {
        matches!(self.modulation, Modulation::LoRa { .. })
    }

    pub fn bandwidth(&self) -> Option<&Bandwidth> {
        match &self.modulation {
            Modulation::LoRa { bandwidth, .. } => Some(bandwidth),
            Modulation::Fsk { .. } => None,
        }
    }
}

/// The 16 data rate slots of a band. `None` entries are RFU.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRateTable([Option<DataRate>; 16]);

impl DataRateTable {
    pub const fn new(data_rates: [Option<DataRate>; 16]) -> Self {
        Self(data_rates)
    }

    /// Looks up a data rate. Indexes of 16 and above, and RFU slots, yield `None`.
    pub fn get(&self, index: u8) -> Option<&DataRate> {
        self.0.get(index as usize).and_then(Option::as_ref)
    }

    pub fn get_dr(&self, dr: DR) -> Option<&DataRate> {
        self.get(dr.index())
    }

    pub fn is_defined(&self, dr: DR) -> bool {
        self.get_dr(dr).is_some()
    }

    /// Finds the index of a data rate in the table.
    pub fn index_of(&self, data_rate: &DataRate) -> Option<DR> {
        self.iter().find(|(_, dr)| dr.modulation == data_rate.modulation).map(|(idx, _)| idx)
    }

    /// Defined entries, in increasing index order.
    pub fn iter(&self) -> impl Iterator<Item = (DR, &DataRate)> {
        DR::ALL
            .into_iter()
            .zip(self.0.iter())
            .filter_map(|(idx, dr)| dr.as_ref().map(|dr| (idx, dr)))
    }

    pub fn max_payload_size(&self, dr: DR, repeater_compatible: bool) -> Option<MaxPayloadSize> {
        self.get_dr(dr).map(|dr| dr.max_payload_size(repeater_compatible))
    }

    /// Replaces a slot, returning the updated table.
    pub fn with(mut self, dr: DR, data_rate: Option<DataRate>) -> Self {
        self.0[dr.index() as usize] = data_rate;
        self
    }
}
