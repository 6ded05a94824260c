// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

/// US902-928 band (902..928 MHz)
///
/// Regional parameters before 1.0.2 only define TXPower indexes 0..10.
use super::*;

mod datarates;
use datarates::*;

pub const US_902_928: &str = "US_902_928";

pub fn us_902_928() -> Result<Band> {
    let mut uplink = Channels::new();
    push_channels(&mut uplink, 902_300_000, 200_000, 64, DR::_0, DR::_3)?;
    push_channels(&mut uplink, 903_000_000, 1_600_000, 8, DR::_4, DR::_4)?;
    fixed_band(
        US_902_928,
        &uplink,
        902_000_000..=928_000_000,
        DATARATES,
        Rx1DataRateRule::new(DR::_4, 3, DR::_8, DR::_13).with_shift(10),
        VersionOverlays::all().with(PhyVersion::V1_0_1, Some(tx_power_1_0_1)),
    )
}

fn tx_power_1_0_1(band: Band) -> Band {
    Band { tx_offset: TxOffsetTable::steps(11, 2.0), ..band }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::ChannelMask;
    use core::time::Duration;

    #[test]
    fn channel_plan() {
        let band = us_902_928().unwrap();
        let plan = &band.channel_plan;
        assert_eq!(plan.uplink().len(), 72);
        assert_eq!(plan.uplink_frequency(63), Some(914_900_000));
        assert_eq!(plan.uplink_frequency(64), Some(903_000_000));
        assert_eq!(plan.uplink_frequency(71), Some(914_200_000));
        assert_eq!(plan.downlink().len(), 8);
        assert_eq!(band.rx1_channel(17), 1);
        assert_eq!(band.rx1_frequency(71), Some(927_500_000));
    }

    #[test]
    fn rx1_data_rate() {
        let band = us_902_928().unwrap();
        assert_eq!(band.rx1_data_rate(DR::_0, 0, false), Ok(DR::_10));
        assert_eq!(band.rx1_data_rate(DR::_4, 0, false), Ok(DR::_13));
        assert_eq!(band.rx1_data_rate(DR::_3, 3, false), Ok(DR::_10));
        assert_eq!(band.rx1_data_rate(DR::_0, 3, false), Ok(DR::_8));
        assert_eq!(
            band.rx1_data_rate(DR::_5, 0, false),
            Err(Error::DataRateIndexTooHigh { max: DR::_4 })
        );
    }

    #[test]
    fn beacon_hops_over_downlink_channels() {
        let band = us_902_928().unwrap();
        assert_eq!(band.beacon.broadcast_channel(Duration::from_secs(0)), 923_300_000);
        assert_eq!(band.beacon.broadcast_channel(Duration::from_secs(3 * 128)), 925_100_000);
        assert_eq!(band.beacon.ping_slot_channels().count(), 8);
        assert!(band
            .beacon
            .ping_slot_channels()
            .all(|f| band.channel_plan.downlink().iter().any(|c| c.frequency == f)));
    }

    #[test]
    fn tx_power_before_1_0_2() {
        let band = us_902_928().unwrap();
        assert_eq!(band.tx_power(14), Some(2.0));
        let legacy = band.version(PhyVersion::V1_0).unwrap();
        assert_eq!(legacy.tx_power(10), Some(10.0));
        assert_eq!(legacy.tx_power(11), None);
        let rev_b = band.version(PhyVersion::V1_0_2RevB).unwrap();
        assert_eq!(rev_b.tx_power(14), Some(2.0));
    }

    #[test]
    fn cf_list_channel_mask() {
        let band = us_902_928().unwrap();
        let mut mask = ChannelMask::empty();
        mask.set_bank(1, 0xff);
        mask.set_bank(8, 0x02);
        let device = band.apply_cf_list(&crate::channel::CfList::ChannelMask(mask.clone())).unwrap();
        assert_eq!(device.channels.len(), 72);
        assert_eq!(device.enabled, mask);
        assert_eq!(
            band.apply_cf_list(&crate::channel::CfList::Frequencies([0; 5])),
            Err(Error::InvalidCfList)
        );
    }
}
