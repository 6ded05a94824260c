// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

/// EU433 band (433.05..434.79 MHz)
use super::*;

pub const EU_433: &str = "EU_433";

const RX2_FREQUENCY: u32 = 434_665_000;

const CHANNELS: [Channel; 3] = [
    Channel::new(433_175_000, DR::_0, DR::_5),
    Channel::new(433_375_000, DR::_0, DR::_5),
    Channel::new(433_575_000, DR::_0, DR::_5),
];

const DUTY_CYCLES: [DutyCycle; 1] = [DutyCycle::new(433_175_000, 434_665_000, 0.01)];

pub(crate) const DATARATES: DataRateTable = DataRateTable::new([
    // DR0
    Some(DataRate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, SIZE_59, SIZE_59)),
    // DR1
    Some(DataRate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, SIZE_59, SIZE_59)),
    // DR2
    Some(DataRate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, SIZE_59, SIZE_59)),
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

pub fn eu_433() -> Result<Band> {
    Ok(Band {
        default_max_eirp: 12.15,
        tx_offset: TxOffsetTable::steps(6, 2.0),
        ..DynamicBand {
            id: EU_433,
            channels: &CHANNELS,
            frequency_range: 433_175_000..=434_665_000,
            duty_cycles: &DUTY_CYCLES,
            data_rates: DATARATES,
            rx2: Rx2Parameters::new(DR::_0, RX2_FREQUENCY),
            beacon: Beacon::fixed(DR::_3, BEACON_CODING_RATE, RX2_FREQUENCY),
        }
        .build()?
    })
}
