// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

/// EU863-870 band (863..870 MHz)
///
/// Three default channels at 868.1, 868.3 and 868.5 MHz carrying DR0..DR5; the RX2 window and
/// class B beacon share 869.525 MHz.
use super::*;

pub const EU_863_870: &str = "EU_863_870";

const BEACON_FREQUENCY: u32 = 869_525_000;

const CHANNELS: [Channel; 3] = [
    Channel::new(868_100_000, DR::_0, DR::_5),
    Channel::new(868_300_000, DR::_0, DR::_5),
    Channel::new(868_500_000, DR::_0, DR::_5),
];

const DUTY_CYCLES: [DutyCycle; 6] = [
    DutyCycle::new(863_000_000, 865_000_000, 0.001),
    DutyCycle::new(865_000_000, 868_000_000, 0.01),
    DutyCycle::new(868_000_000, 868_600_000, 0.01),
    DutyCycle::new(868_700_000, 869_200_000, 0.001),
    DutyCycle::new(869_400_000, 869_650_000, 0.1),
    DutyCycle::new(869_700_000, 870_000_000, 0.01),
];

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
    // DR8..DR14: RFU
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    // DR15: used by LinkADRReq from Regional Parameters 1.1 on, RFU before
    None,
]);

pub fn eu_863_870() -> Result<Band> {
    DynamicBand {
        id: EU_863_870,
        channels: &CHANNELS,
        frequency_range: 863_000_000..=870_000_000,
        duty_cycles: &DUTY_CYCLES,
        data_rates: DATARATES,
        rx2: Rx2Parameters::new(DR::_0, BEACON_FREQUENCY),
        beacon: Beacon::fixed(DR::_3, BEACON_CODING_RATE, BEACON_FREQUENCY),
    }
    .build()
}
