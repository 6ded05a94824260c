// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

/// AS923 band (915..928 MHz), channel frequency offset 0
///
/// Downlink dwell time limits raise the lowest RX1 data rate to DR2; RX1 offsets 6 and 7
/// select a downlink data rate above the uplink one.
use super::*;

pub const AS_923: &str = "AS_923";

const CHANNELS: [Channel; 2] = [
    Channel::new(923_200_000, DR::_0, DR::_5),
    Channel::new(923_400_000, DR::_0, DR::_5),
];

const DUTY_CYCLES: [DutyCycle; 1] = [DutyCycle::new(915_000_000, 928_000_000, 0.01)];

pub(crate) const DATARATES: DataRateTable = DataRateTable::new([
    // DR0
    Some(DataRate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, SIZE_59, SIZE_59)),
    // DR1
    Some(DataRate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, SIZE_59, SIZE_59)),
    // DR2
    Some(DataRate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, SIZE_123, SIZE_123)),
    // DR3
    Some(DataRate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, SIZE_123, SIZE_123)),
    // DR4
    Some(DataRate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, SIZE_230, SIZE_250)),
    // DR5
    Some(DataRate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, SIZE_230, SIZE_250)),
    // DR6
    Some(DataRate::lora(SpreadingFactor::_7, Bandwidth::_250KHz, SIZE_230, SIZE_250)),
    // DR7
    Some(DataRate::fsk(50_000, SIZE_230, SIZE_250)),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);

pub fn as_923() -> Result<Band> {
    Ok(Band {
        rx1_data_rate: Rx1DataRateRule::new(DR::_7, 7, DR::_0, DR::_5)
            .with_extended_offsets()
            .with_dwell_time_floor(DR::_2),
        versions: VersionOverlays::since(PhyVersion::V1_0_2RevA),
        ..DynamicBand {
            id: AS_923,
            channels: &CHANNELS,
            frequency_range: 915_000_000..=928_000_000,
            duty_cycles: &DUTY_CYCLES,
            data_rates: DATARATES,
            rx2: Rx2Parameters::new(DR::_2, 923_200_000),
            beacon: Beacon::fixed(DR::_3, BEACON_CODING_RATE, 923_400_000),
        }
        .build()?
    })
}
