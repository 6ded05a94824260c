// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Bands with a fixed channel plan: 64 x 125 kHz and 8 x 500 kHz uplink channels, 8 downlink
//! channels, ChMask blocks addressing the whole plan and a hopping class B beacon.
use core::ops::RangeInclusive;

use super::*;
use crate::beacon::BeaconChannels;
use crate::channel::Channels;

#[cfg(feature = "region-au915")]
pub(crate) mod au915;
#[cfg(feature = "region-us915")]
pub(crate) mod us915;

const MAX_EIRP: f32 = 30.0;
const DOWNLINK_FIRST: u32 = 923_300_000;
const DOWNLINK_SPACING: u32 = 600_000;

/// Appends `count` channels `spacing` Hz apart starting at `first`.
pub(crate) fn push_channels(
    channels: &mut Channels,
    first: u32,
    spacing: u32,
    count: u32,
    dr_min: DR,
    dr_max: DR,
) -> Result {
    for i in 0..count {
        channels
            .push(Channel::new(first + spacing * i, dr_min, dr_max))
            .map_err(|_| Error::InvalidBand)?;
    }
    Ok(())
}

/// Completes a fixed band from its uplink channels. Every fixed plan shares the downlink
/// channels at 923.3 + 0.6 * n MHz carrying DR8..DR13.
pub(crate) fn fixed_band(
    id: &'static str,
    uplink: &[Channel],
    frequency_range: RangeInclusive<u32>,
    data_rates: DataRateTable,
    rx1_data_rate: Rx1DataRateRule,
    versions: VersionOverlays,
) -> Result<Band> {
    let mut downlink = Channels::new();
    push_channels(&mut downlink, DOWNLINK_FIRST, DOWNLINK_SPACING, 8, DR::_8, DR::_13)?;
    Ok(Band {
        id,
        channel_plan: ChannelPlan::new(uplink, &downlink)?,
        max_uplink_channels: 72,
        max_downlink_channels: 8,
        frequency_range,
        duty_cycles: DutyCycleTable::default(),
        data_rates,

        receive_delay_1: RECEIVE_DELAY1,
        receive_delay_2: RECEIVE_DELAY2,
        join_accept_delay_1: JOIN_ACCEPT_DELAY1,
        join_accept_delay_2: JOIN_ACCEPT_DELAY2,
        max_fcnt_gap: MAX_FCNT_GAP,
        adr_ack_limit: ADR_ACK_LIMIT,
        adr_ack_delay: ADR_ACK_DELAY,
        min_ack_timeout: MIN_ACK_TIMEOUT,
        max_ack_timeout: MAX_ACK_TIMEOUT,

        default_max_eirp: MAX_EIRP,
        tx_offset: TxOffsetTable::steps(15, 2.0),

        rx1_channel: Rx1Channel::Modulo(8),
        rx1_data_rate,
        channel_mask: ChannelMaskCodec::Mask72,

        implements_cf_list: true,
        cf_list_type: CfListType::ChannelMasks,

        default_rx2_parameters: Rx2Parameters::new(DR::_8, DOWNLINK_FIRST),
        beacon: Beacon {
            data_rate: DR::_8,
            coding_rate: BEACON_CODING_RATE,
            channels: BeaconChannels::Hopping {
                first: DOWNLINK_FIRST,
                spacing: DOWNLINK_SPACING,
                count: 8,
            },
        },

        versions,
    })
}
