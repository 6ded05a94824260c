// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

/// IN865-867 band (865..867 MHz)
use super::*;

pub const IN_865_867: &str = "IN_865_867";

const RX2_FREQUENCY: u32 = 866_550_000;

const CHANNELS: [Channel; 3] = [
    Channel::new(865_062_500, DR::_0, DR::_5),
    Channel::new(865_402_500, DR::_0, DR::_5),
    Channel::new(865_985_000, DR::_0, DR::_5),
];

const DUTY_CYCLES: [DutyCycle; 1] = [DutyCycle::new(865_000_000, 867_000_000, 1.0)];

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
    // DR6: RFU
    None,
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

pub fn in_865_867() -> Result<Band> {
    Ok(Band {
        default_max_eirp: 30.0,
        tx_offset: TxOffsetTable::steps(11, 2.0),
        rx1_data_rate: Rx1DataRateRule::new(DR::_7, 7, DR::_0, DR::_5).with_extended_offsets(),
        versions: VersionOverlays::since(PhyVersion::V1_0_2RevB),
        ..DynamicBand {
            id: IN_865_867,
            channels: &CHANNELS,
            frequency_range: 865_000_000..=867_000_000,
            duty_cycles: &DUTY_CYCLES,
            data_rates: DATARATES,
            rx2: Rx2Parameters::new(DR::_2, RX2_FREQUENCY),
            beacon: Beacon::fixed(DR::_4, BEACON_CODING_RATE, RX2_FREQUENCY),
        }
        .build()?
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn explicit_unrestricted_sub_band() {
        let band = in_865_867().unwrap();
        assert_eq!(band.duty_cycle(865_062_500), 1.0);
        assert!(band.duty_cycles.find(865_062_500).is_some());
        assert!(band.duty_cycles.find(868_000_000).is_none());
    }

    #[test]
    fn rfu_data_rate() {
        let band = in_865_867().unwrap();
        assert!(band.data_rate(6).is_none());
        assert!(band.data_rate(7).is_some());
        assert_eq!(band.rx1_data_rate(DR::_5, 7, false), Ok(DR::_5));
        assert_eq!(band.rx1_data_rate(DR::_6, 0, false), Err(Error::InvalidDataRateIndex(6)));
        assert_eq!(band.rx1_data_rate(DR::_7, 0, false), Ok(DR::_5));
        assert_eq!(band.tx_power(10), Some(10.0));
        assert_eq!(band.tx_power(11), None);
        assert_eq!(band.supported_versions(), [PhyVersion::V1_1RevA, PhyVersion::V1_0_2RevB]);
    }
}
