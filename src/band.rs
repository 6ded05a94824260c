// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

use core::ops::RangeInclusive;
use core::time::Duration;

use crate::beacon::Beacon;
use crate::channel::{
    CfList, CfListType, ChMaskBlock, ChMaskBlocks, Channel, ChannelMaskCodec, ChannelPlan,
    DeviceChannels,
};
use crate::datarate::{DataRate, DataRateTable, MaxPayloadSize};
use crate::derivation::{Rx1Channel, Rx1DataRateRule, Rx2Parameters, TxOffsetTable};
use crate::duty_cycle::DutyCycleTable;
use crate::error::{Error, Result};
use crate::types::{ChannelMask, DR};
use crate::version::{PhyVersion, VersionOverlays};

/// Complete regional parameters of one LoRaWAN region at one or more revisions.
///
/// A band obtained from [`Band::version`] is pinned to the resolved revision.
#[derive(Debug, Clone)]
pub struct Band {
    /// Region identifier, e.g. `EU_863_870`.
    pub id: &'static str,
    pub channel_plan: ChannelPlan,
    pub max_uplink_channels: u8,
    pub max_downlink_channels: u8,
    /// Frequencies a channel of this band may use, in Hz.
    pub frequency_range: RangeInclusive<u32>,
    pub duty_cycles: DutyCycleTable,
    pub data_rates: DataRateTable,

    pub receive_delay_1: Duration,
    pub receive_delay_2: Duration,
    pub join_accept_delay_1: Duration,
    pub join_accept_delay_2: Duration,
    pub max_fcnt_gap: u32,
    pub adr_ack_limit: u16,
    pub adr_ack_delay: u16,
    pub min_ack_timeout: Duration,
    pub max_ack_timeout: Duration,

    /// Default maximum EIRP in dBm.
    pub default_max_eirp: f32,
    pub tx_offset: TxOffsetTable,

    pub rx1_channel: Rx1Channel,
    pub rx1_data_rate: Rx1DataRateRule,
    pub channel_mask: ChannelMaskCodec,

    pub implements_cf_list: bool,
    pub cf_list_type: CfListType,

    pub default_rx2_parameters: Rx2Parameters,
    pub beacon: Beacon,

    pub versions: VersionOverlays,
}

impl Band {
    /// Resolves the band of a regional parameters revision.
    pub fn version(&self, version: PhyVersion) -> Result<Band> {
        trace!("resolving band {} at revision {}", self.id, version);
        self.versions.resolve(self.clone(), version)
    }

    /// Supported revisions, newest first.
    pub fn supported_versions(&self) -> heapless::Vec<PhyVersion, 5> {
        self.versions.supported()
    }

    pub fn supports_version(&self, version: PhyVersion) -> bool {
        self.versions.supports(version)
    }

    pub fn data_rate(&self, index: u8) -> Option<&DataRate> {
        self.data_rates.get(index)
    }

    pub fn max_payload_size(&self, dr: DR, repeater_compatible: bool) -> Option<MaxPayloadSize> {
        self.data_rates.max_payload_size(dr, repeater_compatible)
    }

    /// Data rate of the RX1 window for an uplink at `uplink` with the configured RX1 offset.
    ///
    /// `dwell_time` is the downlink dwell time setting; only regions with dwell time
    /// restrictions consider it. Uplink data rates the band leaves RFU are rejected.
    pub fn rx1_data_rate(&self, uplink: DR, offset: u8, dwell_time: bool) -> Result<DR> {
        let downlink = self.rx1_data_rate.data_rate(uplink, offset, dwell_time)?;
        if !self.data_rates.is_defined(uplink) {
            return Err(Error::InvalidDataRateIndex(uplink.index()));
        }
        Ok(downlink)
    }

    pub fn rx1_channel(&self, uplink_channel: u8) -> u8 {
        self.rx1_channel.channel(uplink_channel)
    }

    /// Default downlink frequency of the RX1 window for an uplink on `uplink_channel`.
    pub fn rx1_frequency(&self, uplink_channel: u8) -> Option<u32> {
        self.channel_plan.downlink_frequency(self.rx1_channel(uplink_channel))
    }

    pub fn rx2(&self) -> Rx2Parameters {
        self.default_rx2_parameters
    }

    /// Power reduction in dB of a TXPower index. RFU indexes yield `None`.
    pub fn tx_offset(&self, index: u8) -> Option<f32> {
        self.tx_offset.get(index)
    }

    /// EIRP in dBm of a TXPower index.
    pub fn tx_power(&self, index: u8) -> Option<f32> {
        self.tx_offset(index).map(|offset| self.default_max_eirp + offset)
    }

    /// Duty cycle ceiling of a frequency.
    pub fn duty_cycle(&self, frequency: u32) -> f32 {
        self.duty_cycles.limit_for(frequency)
    }

    /// Applies ChMask blocks to the default channels.
    pub fn apply_channel_mask(
        &self,
        previous: &ChannelMask<9>,
        blocks: &[ChMaskBlock],
    ) -> Result<ChannelMask<9>> {
        self.channel_mask.apply_all(previous, blocks, self.channel_plan.uplink().len())
    }

    /// Generates the ChMask blocks moving the default channels from `current` to `desired`.
    pub fn generate_channel_masks(
        &self,
        current: &ChannelMask<9>,
        desired: &ChannelMask<9>,
    ) -> Result<ChMaskBlocks> {
        self.channel_mask.generate(current, desired, self.channel_plan.uplink().len())
    }

    /// Applies ChMask blocks to the channels of one device. Bits addressing slots the device
    /// has no channel for are ignored.
    pub fn update_device_channels(
        &self,
        device: &DeviceChannels,
        blocks: &[ChMaskBlock],
    ) -> Result<DeviceChannels> {
        let mut enabled = self.channel_mask.apply_all(&device.enabled, blocks, device.len())?;
        device.clear_undefined(&mut enabled);
        Ok(DeviceChannels { channels: device.channels.clone(), enabled })
    }

    /// Generates the ChMask blocks moving the channels of one device to `desired`.
    pub fn generate_device_channel_masks(
        &self,
        device: &DeviceChannels,
        desired: &ChannelMask<9>,
    ) -> Result<ChMaskBlocks> {
        if device.enables_undefined(desired) {
            return Err(Error::InvalidChannelMask);
        }
        self.channel_mask.generate(&device.enabled, desired, device.len())
    }

    /// Default uplink channels, all enabled.
    pub fn default_channels(&self) -> DeviceChannels {
        let uplink = self.channel_plan.uplink();
        DeviceChannels {
            channels: uplink.iter().copied().map(Some).collect(),
            enabled: ChannelMask::first(uplink.len()),
        }
    }

    /// Channels of a device after joining with `cf_list`.
    ///
    /// Frequency slot `n` defines channel `default channels + n`; a 0 Hz slot leaves its
    /// channel undefined.
    pub fn apply_cf_list(&self, cf_list: &CfList) -> Result<DeviceChannels> {
        if !self.implements_cf_list || cf_list.list_type() != self.cf_list_type {
            warn!("band {} rejects CFList of this type", self.id);
            return Err(Error::InvalidCfList);
        }
        let mut device = self.default_channels();
        match cf_list {
            CfList::Frequencies(frequencies) => {
                let data_rates = self
                    .channel_plan
                    .uplink()
                    .first()
                    .map(|c| c.data_rates)
                    .ok_or(Error::InvalidBand)?;
                let used = frequencies.iter().rposition(|f| *f != 0).map_or(0, |last| last + 1);
                for &frequency in &frequencies[..used] {
                    let index = device.len();
                    if index >= self.max_uplink_channels as usize {
                        warn!("CFList exceeds {} channels", self.max_uplink_channels);
                        return Err(Error::InvalidCfList);
                    }
                    let channel = match frequency {
                        0 => None,
                        f if self.frequency_range.contains(&f) => {
                            Some(Channel { frequency, data_rates })
                        }
                        _ => {
                            warn!("CFList frequency {} outside band {}", frequency, self.id);
                            return Err(Error::InvalidCfList);
                        }
                    };
                    device.channels.push(channel).map_err(|_| Error::InvalidCfList)?;
                    device.enabled.set_channel(index, channel.is_some());
                }
            }
            CfList::ChannelMask(mask) => {
                if device.enables_undefined(mask) {
                    warn!("CFList channel mask addresses undefined channels");
                    return Err(Error::InvalidCfList);
                }
                device.enabled = mask.clone();
            }
        }
        Ok(device)
    }

    /// Checks the structural consistency of the band.
    pub fn validate(&self) -> Result {
        let plan = &self.channel_plan;
        if plan.uplink().is_empty() || plan.downlink().is_empty() {
            return Err(Error::InvalidBand);
        }
        if plan.uplink().len() > self.max_uplink_channels as usize
            || plan.uplink().len() > self.channel_mask.channel_count()
            || plan.downlink().len() > self.max_downlink_channels as usize
        {
            return Err(Error::InvalidBand);
        }
        let channels_valid = plan.uplink().iter().chain(plan.downlink()).all(|c| {
            c.frequency > 0
                && self.frequency_range.contains(&c.frequency)
                && !c.data_rates.is_empty()
                && c.data_rates.iter().all(|dr| self.data_rates.is_defined(dr))
        });
        if !channels_valid || !self.duty_cycles.is_valid() {
            return Err(Error::InvalidBand);
        }
        let rule = &self.rx1_data_rate;
        let data_rates_defined = [
            self.default_rx2_parameters.data_rate,
            self.beacon.data_rate,
            rule.floor,
            rule.dwell_time_floor,
            rule.ceiling,
        ]
        .into_iter()
        .all(|dr| self.data_rates.is_defined(dr));
        if !data_rates_defined || rule.floor > rule.ceiling {
            return Err(Error::InvalidBand);
        }
        if !self.frequency_range.contains(&self.default_rx2_parameters.frequency) {
            return Err(Error::InvalidBand);
        }
        Ok(())
    }
}
