// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Class B beacon and ping slot channel selection.
use core::time::Duration;

use lora_modulation::CodingRate;

use crate::types::DR;

/// Beacon period; hopping regions move to the next channel every period.
pub const BEACON_PERIOD: Duration = Duration::from_secs(128);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeaconChannels {
    /// One frequency for beacons and ping slots alike.
    Fixed(u32),
    /// `count` channels `spacing` Hz apart starting at `first`, selected by beacon period.
    Hopping { first: u32, spacing: u32, count: u8 },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Beacon {
    pub data_rate: DR,
    pub coding_rate: CodingRate,
    pub channels: BeaconChannels,
}

impl Beacon {
    pub const fn fixed(data_rate: DR, coding_rate: CodingRate, frequency: u32) -> Self {
        Self { data_rate, coding_rate, channels: BeaconChannels::Fixed(frequency) }
    }

    /// Frequency the beacon is broadcast on at `beacon_time` (time since the GPS epoch).
    pub fn broadcast_channel(&self, beacon_time: Duration) -> u32 {
        match self.channels {
            BeaconChannels::Fixed(frequency) => frequency,
            BeaconChannels::Hopping { first, spacing, count } => {
                let period = beacon_time.as_secs() / BEACON_PERIOD.as_secs();
                first + spacing * (period % u64::from(count.max(1))) as u32
            }
        }
    }

    /// Every frequency a class B ping slot may use.
    pub fn ping_slot_channels(&self) -> impl Iterator<Item = u32> {
        let (first, spacing, count) = match self.channels {
            BeaconChannels::Fixed(frequency) => (frequency, 0, 1),
            BeaconChannels::Hopping { first, spacing, count } => (first, spacing, count.max(1)),
        };
        (0..u32::from(count)).map(move |i| first + spacing * i)
    }

    /// Ping slot frequency of a device during the beacon period starting at `beacon_time`.
    pub fn ping_slot_channel(&self, dev_addr: u32, beacon_time: Duration) -> u32 {
        match self.channels {
            BeaconChannels::Fixed(frequency) => frequency,
            BeaconChannels::Hopping { first, spacing, count } => {
                let period = beacon_time.as_secs() / BEACON_PERIOD.as_secs();
                let index = (u64::from(dev_addr) + period) % u64::from(count.max(1));
                first + spacing * index as u32
            }
        }
    }
}
