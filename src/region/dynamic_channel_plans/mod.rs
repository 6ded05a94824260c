// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Bands with a dynamic channel plan: a few default channels, up to 16 channels in total, and
//! additional channels announced through a frequency CFList.
use core::ops::RangeInclusive;

use super::*;

#[cfg(feature = "region-as923")]
pub(crate) mod as923;
#[cfg(feature = "region-eu433")]
pub(crate) mod eu433;
#[cfg(feature = "region-eu868")]
pub(crate) mod eu868;
#[cfg(feature = "region-in865")]
pub(crate) mod in865;

const MAX_CHANNELS: u8 = 16;

/// Default channels, sub-bands and receive windows of a dynamic band.
pub(crate) struct DynamicBand<'a> {
    pub id: &'static str,
    pub channels: &'a [Channel],
    pub frequency_range: RangeInclusive<u32>,
    pub duty_cycles: &'a [DutyCycle],
    pub data_rates: DataRateTable,
    pub rx2: Rx2Parameters,
    pub beacon: Beacon,
}

impl DynamicBand<'_> {
    /// Completes the band with the parameters every dynamic plan shares. Regions override
    /// what differs with struct update syntax.
    pub fn build(self) -> Result<Band> {
        Ok(Band {
            id: self.id,
            channel_plan: ChannelPlan::symmetric(self.channels)?,
            max_uplink_channels: MAX_CHANNELS,
            max_downlink_channels: MAX_CHANNELS,
            frequency_range: self.frequency_range,
            duty_cycles: DutyCycleTable::new(self.duty_cycles).ok_or(Error::InvalidBand)?,
            data_rates: self.data_rates,

            receive_delay_1: RECEIVE_DELAY1,
            receive_delay_2: RECEIVE_DELAY2,
            join_accept_delay_1: JOIN_ACCEPT_DELAY1,
            join_accept_delay_2: JOIN_ACCEPT_DELAY2,
            max_fcnt_gap: MAX_FCNT_GAP,
            adr_ack_limit: ADR_ACK_LIMIT,
            adr_ack_delay: ADR_ACK_DELAY,
            min_ack_timeout: MIN_ACK_TIMEOUT,
            max_ack_timeout: MAX_ACK_TIMEOUT,

            default_max_eirp: 16.0,
            tx_offset: TxOffsetTable::steps(8, 2.0),

            rx1_channel: Rx1Channel::Identity,
            rx1_data_rate: Rx1DataRateRule::new(DR::_7, 5, DR::_0, DR::_7),
            channel_mask: ChannelMaskCodec::Mask16,

            implements_cf_list: true,
            cf_list_type: CfListType::Frequencies,

            default_rx2_parameters: self.rx2,
            beacon: self.beacon,

            versions: VersionOverlays::all(),
        })
    }
}
