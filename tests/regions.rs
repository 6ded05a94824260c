// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

use core::time::Duration;

use lorawan_band::channel::MAX_CHANNELS;
use lorawan_band::region::{self, AU_915_928, EU_863_870, US_902_928};
use lorawan_band::*;

fn registry() -> &'static BandRegistry {
    BandRegistry::global().unwrap()
}

#[test]
fn test_rx1_data_rate_stays_within_bounds() {
    for band in registry().iter() {
        let rule = band.rx1_data_rate;
        let uplinks = DR::ALL.into_iter().filter(|dr| *dr <= rule.max_uplink);
        for uplink in uplinks.filter(|dr| band.data_rates.is_defined(*dr)) {
            for offset in 0..=rule.max_offset {
                for dwell_time in [false, true] {
                    let dr = band.rx1_data_rate(uplink, offset, dwell_time).unwrap();
                    let floor = if dwell_time { rule.dwell_time_floor } else { rule.floor };
                    assert!(dr >= floor && dr <= rule.ceiling, "{} {:?} {}", band.id, uplink, offset);
                }
            }
        }
    }
}

#[test]
fn test_rx1_data_rate_rejects_inputs_above_maximum() {
    for band in registry().iter() {
        let rule = band.rx1_data_rate;
        for uplink in DR::ALL.into_iter().filter(|dr| *dr > rule.max_uplink) {
            assert_eq!(
                band.rx1_data_rate(uplink, 0, false),
                Err(Error::DataRateIndexTooHigh { max: rule.max_uplink })
            );
        }
        for offset in rule.max_offset + 1..=u8::MAX {
            assert_eq!(
                band.rx1_data_rate(rule.max_uplink, offset, false),
                Err(Error::DataRateOffsetTooHigh { max: rule.max_offset })
            );
        }
    }
}

#[test]
fn test_rx1_data_rate_rejects_rfu_uplinks() {
    for band in registry().iter() {
        let rule = band.rx1_data_rate;
        let uplinks = DR::ALL.into_iter().filter(|dr| *dr <= rule.max_uplink);
        for uplink in uplinks.filter(|dr| !band.data_rates.is_defined(*dr)) {
            assert_eq!(
                band.rx1_data_rate(uplink, 0, false),
                Err(Error::InvalidDataRateIndex(uplink.index())),
                "{}",
                band.id
            );
        }
    }
}

#[test]
fn test_eu868_scenario() {
    let band = registry().get(EU_863_870).unwrap();
    assert_eq!(band.rx1_data_rate(DR::_5, 1, false), Ok(DR::_4));
    assert_eq!(band.rx1_data_rate(DR::_0, 5, false), Ok(DR::_0));
    assert_eq!(
        band.rx1_data_rate(DR::_8, 0, false),
        Err(Error::DataRateIndexTooHigh { max: DR::_7 })
    );
    assert_eq!(band.rx1_data_rate(DR::_5, 6, false), Err(Error::DataRateOffsetTooHigh { max: 5 }));
    assert_eq!(band.duty_cycle(869_525_000), 0.1);
    assert_eq!(band.duty_cycle(433_175_000), 1.0);
    assert!(band.duty_cycles.find(433_175_000).is_none());
    assert_eq!(band.beacon.broadcast_channel(Duration::from_secs(12_345)), 869_525_000);
    assert!(band.beacon.ping_slot_channels().eq([869_525_000]));
}

#[test]
fn test_rfu_data_rates_are_rejected() {
    let band = registry().get(EU_863_870).unwrap();
    assert!(band.data_rate(7).is_some());
    for index in 8..=u8::MAX {
        assert!(band.data_rate(index).is_none());
    }
    assert_eq!(DR::try_from(16u8), Err(Error::InvalidDataRateIndex(16)));
}

#[test]
fn test_payload_sizes_grow_with_data_rate() {
    for band in registry().iter() {
        let lora: heapless::Vec<(DR, &DataRate), 16> =
            band.data_rates.iter().filter(|(_, dr)| dr.is_lora()).collect();
        for pair in lora.windows(2) {
            let ((slow_dr, slow), (fast_dr, fast)) = (pair[0], pair[1]);
            // fixed plans restart at SF12 after an RFU gap for the downlink data rates
            if fast_dr.index() != slow_dr.index() + 1 || slow.bandwidth() != fast.bandwidth() {
                continue;
            }
            assert!(slow.default_max_size.mac_payload <= fast.default_max_size.mac_payload);
            assert!(slow.no_repeater_max_size.mac_payload <= fast.no_repeater_max_size.mac_payload);
        }
    }
}

#[test]
fn test_registry_errors() {
    let mut registry = BandRegistry::new();
    registry.register(region::eu_863_870().unwrap()).unwrap();
    assert_eq!(registry.register(region::eu_863_870().unwrap()), Err(Error::DuplicateRegion));
    assert_eq!(registry.get(US_902_928).map(|b| b.id), Err(Error::UnknownRegion));
    assert_eq!(
        registry.get_version("XX_000", PhyVersion::V1_0).map(|b| b.id),
        Err(Error::UnknownRegion)
    );
    assert_eq!(registry.ids().collect::<heapless::Vec<_, 8>>(), [EU_863_870]);
}

#[test]
fn test_version_overlay_totality() {
    for band in registry().iter() {
        for version in PhyVersion::ALL {
            let resolved = band.version(version);
            if band.supports_version(version) {
                let resolved = resolved.unwrap();
                assert!(!resolved.channel_plan.uplink().is_empty());
                assert!(!resolved.channel_plan.downlink().is_empty());
                assert_eq!(resolved.validate(), Ok(()));
            } else {
                assert_eq!(resolved.map(|b| b.id), Err(Error::UnsupportedVersion(version)));
            }
        }
    }
}

#[test]
fn test_au915_revision_downgrade() {
    let rev_a = registry().get_version(AU_915_928, PhyVersion::V1_0_2RevA).unwrap();
    let latest = registry().get_version(AU_915_928, PhyVersion::V1_1RevA).unwrap();
    assert_eq!(latest.rx1_data_rate(DR::_2, 0, false), Ok(DR::_10));
    assert_eq!(rev_a.rx1_data_rate(DR::_2, 0, false), Ok(DR::_12));
    assert!(rev_a.channel_plan.uplink()[0].supports(DR::_3));
    assert!(!rev_a.channel_plan.uplink()[0].supports(DR::_4));
    assert_eq!(
        rev_a.version(PhyVersion::V1_0).map(|b| b.id),
        Err(Error::UnsupportedVersion(PhyVersion::V1_0))
    );
}

#[test]
fn test_us915_beacon_hopping() {
    let band = registry().get(US_902_928).unwrap();
    for period in 0..16u64 {
        let frequency = band.beacon.broadcast_channel(Duration::from_secs(period * 128 + 5));
        assert_eq!(frequency, 923_300_000 + 600_000 * (period % 8) as u32);
    }
}

#[test]
fn test_channel_mask_round_trip() {
    for band in registry().iter() {
        let defined = band.channel_plan.uplink().len();
        let all = ChannelMask::first(defined);
        for pattern in [0x00u8, 0x01, 0x55, 0xaa, 0xf0, 0xff] {
            let mut desired = ChannelMask::<9>::empty();
            for channel in (0..defined).filter(|c| pattern & (1 << (c % 8)) != 0) {
                desired.set_channel(channel, true);
            }
            let blocks = band.generate_channel_masks(&all, &desired).unwrap();
            assert!(!blocks.is_empty());
            assert_eq!(band.apply_channel_mask(&all, &blocks), Ok(desired), "{}", band.id);
        }
    }
}

#[test]
fn test_channel_mask_ignores_undefined_channels() {
    let band = registry().get(EU_863_870).unwrap();
    let previous = ChannelMask::first(3);
    let next = band.apply_channel_mask(&previous, &[ChMaskBlock::new(0, 0xff02u16)]).unwrap();
    assert_eq!(next.enabled_channels().collect::<heapless::Vec<_, MAX_CHANNELS>>(), [1]);
}

#[test]
fn test_cf_list() {
    let eu = registry().get(EU_863_870).unwrap();
    let frequencies = CfList::Frequencies([867_100_000, 867_300_000, 0, 867_500_000, 0]);
    let device = eu.apply_cf_list(&frequencies).unwrap();
    assert_eq!(device.len(), 7);
    assert_eq!(device.channel(3).map(|c| c.frequency), Some(867_100_000));
    assert_eq!(device.channel(5), None);
    assert_eq!(device.channel(6).map(|c| c.frequency), Some(867_500_000));
    assert!(device.channel(6).is_some_and(|c| c.supports(DR::_5)));
    let enabled: heapless::Vec<_, 16> = device.enabled.enabled_channels().collect();
    assert_eq!(enabled, [0, 1, 2, 3, 4, 6]);

    let blocks = [ChMaskBlock::new(0, 0b110_0001u16)];
    let updated = eu.update_device_channels(&device, &blocks).unwrap();
    assert_eq!(updated.enabled.enabled_channels().collect::<heapless::Vec<_, 16>>(), [0, 6]);

    let mask = CfList::ChannelMask(ChannelMask::first(8));
    assert_eq!(eu.apply_cf_list(&mask), Err(Error::InvalidCfList));
    let outside = CfList::Frequencies([915_000_000, 0, 0, 0, 0]);
    assert_eq!(eu.apply_cf_list(&outside), Err(Error::InvalidCfList));

    let us = registry().get(US_902_928).unwrap();
    assert_eq!(us.apply_cf_list(&frequencies), Err(Error::InvalidCfList));
    let device = us.apply_cf_list(&mask).unwrap();
    assert_eq!(device.enabled.count_enabled(), 8);
}

#[test]
fn test_device_channel_mask_round_trip() {
    let eu = registry().get(EU_863_870).unwrap();
    let full =
        CfList::Frequencies([867_100_000, 867_300_000, 867_500_000, 867_700_000, 867_900_000]);
    let device = eu.apply_cf_list(&full).unwrap();
    assert_eq!(device.len(), 8);
    for channels in [&[0usize, 7][..], &[3, 4, 5], &[1], &[0, 1, 2, 3, 4, 5, 6, 7]] {
        let mut desired = ChannelMask::<9>::empty();
        for &channel in channels {
            desired.set_channel(channel, true);
        }
        let blocks = eu.generate_device_channel_masks(&device, &desired).unwrap();
        let updated = eu.update_device_channels(&device, &blocks).unwrap();
        assert_eq!(updated.enabled, desired);
    }

    let sparse = CfList::Frequencies([867_100_000, 0, 867_500_000, 0, 0]);
    let sparse = eu.apply_cf_list(&sparse).unwrap();
    let mut desired = ChannelMask::<9>::empty();
    desired.set_channel(4, true);
    assert_eq!(
        eu.generate_device_channel_masks(&sparse, &desired),
        Err(Error::InvalidChannelMask)
    );
    desired.set_channel(4, false);
    desired.set_channel(5, true);
    let blocks = eu.generate_device_channel_masks(&sparse, &desired).unwrap();
    assert_eq!(eu.update_device_channels(&sparse, &blocks).map(|d| d.enabled), Ok(desired));
}
