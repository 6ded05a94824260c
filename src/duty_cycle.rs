// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Sub-band duty cycle limits. The table is advisory: airtime accounting belongs to the caller.

/// Fraction returned for frequencies outside every sub-band of a band.
pub const UNRESTRICTED: f32 = 1.0;

/// Duty cycle ceiling of the half-open frequency range `[min_frequency, max_frequency)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyCycle {
    pub min_frequency: u32,
    pub max_frequency: u32,
    pub duty_cycle: f32,
}

impl DutyCycle {
    pub const fn new(min_frequency: u32, max_frequency: u32, duty_cycle: f32) -> Self {
        Self { min_frequency, max_frequency, duty_cycle }
    }

    pub fn contains(&self, frequency: u32) -> bool {
        (self.min_frequency..self.max_frequency).contains(&frequency)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DutyCycleTable(heapless::Vec<DutyCycle, 8>);

impl DutyCycleTable {
    /// Builds the table; `None` when there are more sub-bands than the table holds.
    pub fn new(sub_bands: &[DutyCycle]) -> Option<Self> {
        heapless::Vec::from_slice(sub_bands).ok().map(Self)
    }

    /// The sub-band containing `frequency`, if any.
    pub fn find(&self, frequency: u32) -> Option<&DutyCycle> {
        self.0.iter().find(|dc| dc.contains(frequency))
    }

    /// Duty cycle ceiling for `frequency`, [`UNRESTRICTED`] outside every sub-band.
    pub fn limit_for(&self, frequency: u32) -> f32 {
        self.find(frequency).map_or(UNRESTRICTED, |dc| dc.duty_cycle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DutyCycle> {
        self.0.iter()
    }

    /// Ranges are non-empty, ordered, non-overlapping, and every fraction lies in (0, 1].
    pub fn is_valid(&self) -> bool {
        let ranges_valid = self.0.iter().all(|dc| {
            dc.min_frequency < dc.max_frequency && dc.duty_cycle > 0.0 && dc.duty_cycle <= 1.0
        });
        ranges_valid && self.0.windows(2).all(|w| w[0].max_frequency <= w[1].min_frequency)
    }
}
