// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

/// AU915-928 band (915..928 MHz)
///
/// Up to Regional Parameters 1.0.2-RevA the band used the US902-928 data rate table: 125 kHz
/// uplink channels carried DR0..DR3, 500 kHz ones DR4, and RX1 shifted uplink data rates by
/// ten. Later revisions moved to DR0..DR5 and DR6 with a shift of eight.
use super::*;
use crate::types::DataRateRange;

mod datarates;
use datarates::*;

pub const AU_915_928: &str = "AU_915_928";

pub fn au_915_928() -> Result<Band> {
    let mut uplink = Channels::new();
    push_channels(&mut uplink, 915_200_000, 200_000, 64, DR::_0, DR::_5)?;
    push_channels(&mut uplink, 915_900_000, 1_600_000, 8, DR::_6, DR::_6)?;
    fixed_band(
        AU_915_928,
        &uplink,
        915_000_000..=928_000_000,
        DATARATES,
        Rx1DataRateRule::new(DR::_6, 5, DR::_8, DR::_13).with_shift(8),
        VersionOverlays::all().with(PhyVersion::V1_0_2RevA, Some(us_style_data_rates)),
    )
}

fn us_style_data_rates(band: Band) -> Band {
    let mut band = Band {
        data_rates: DATARATES_1_0_2_REV_A,
        rx1_data_rate: Rx1DataRateRule::new(DR::_4, 3, DR::_8, DR::_13).with_shift(10),
        ..band
    };
    band.channel_plan.remap_uplink_data_rates(
        DataRateRange::new_range(DR::_0, DR::_5),
        DataRateRange::new_range(DR::_0, DR::_3),
    );
    band.channel_plan.remap_uplink_data_rates(
        DataRateRange::new_range(DR::_6, DR::_6),
        DataRateRange::new_range(DR::_4, DR::_4),
    );
    band
}
