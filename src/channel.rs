// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Channel plans, channel mask codecs and CFList payloads.
use crate::error::{Error, Result};
use crate::types::{ChannelMask, DataRateRange, Frequency, DR};

/// Upper bound on the number of channels of any plan (64 x 125 kHz + 8 x 500 kHz).
pub const MAX_CHANNELS: usize = 72;

pub type Channels = heapless::Vec<Channel, MAX_CHANNELS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    /// Carrier frequency in Hz.
    pub frequency: u32,
    pub data_rates: DataRateRange,
}

impl Channel {
    /// Initialize Channel with frequency and supported minimum and maximum data rates
    pub const fn new(frequency: u32, dr_min: DR, dr_max: DR) -> Self {
        Self { frequency, data_rates: DataRateRange::new_range(dr_min, dr_max) }
    }

    pub fn supports(&self, dr: DR) -> bool {
        self.data_rates.contains(dr)
    }
}

/// Ordered uplink and downlink channel lists of a band.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlan {
    uplink: Channels,
    downlink: Channels,
}

impl ChannelPlan {
    pub fn new(uplink: &[Channel], downlink: &[Channel]) -> Result<Self> {
        Ok(Self {
            uplink: Channels::from_slice(uplink).map_err(|_| Error::InvalidBand)?,
            downlink: Channels::from_slice(downlink).map_err(|_| Error::InvalidBand)?,
        })
    }

    /// A plan whose downlink channels mirror the uplink channels.
    pub fn symmetric(channels: &[Channel]) -> Result<Self> {
        Self::new(channels, channels)
    }

    pub fn uplink(&self) -> &[Channel] {
        &self.uplink
    }

    pub fn downlink(&self) -> &[Channel] {
        &self.downlink
    }

    pub fn uplink_frequency(&self, index: u8) -> Option<u32> {
        self.uplink.get(index as usize).map(|c| c.frequency)
    }

    pub fn downlink_frequency(&self, index: u8) -> Option<u32> {
        self.downlink.get(index as usize).map(|c| c.frequency)
    }

    /// Replaces the data rate range of every uplink channel that carries `from`.
    pub(crate) fn remap_uplink_data_rates(&mut self, from: DataRateRange, to: DataRateRange) {
        for channel in self.uplink.iter_mut().filter(|c| c.data_rates == from) {
            channel.data_rates = to;
        }
    }
}

/// One ChMask/ChMaskCntl pair, as carried by a LinkADRReq.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChMaskBlock {
    pub control: u8,
    pub mask: ChannelMask<2>,
}

impl ChMaskBlock {
    pub fn new(control: u8, mask: impl Into<ChannelMask<2>>) -> Self {
        Self { control, mask: mask.into() }
    }

    fn bit(&self, index: usize) -> bool {
        self.mask.is_enabled(index).unwrap_or(false)
    }
}

/// Blocks needed to move a channel mask to a desired state; one LinkADRReq each.
pub type ChMaskBlocks = heapless::Vec<ChMaskBlock, 5>;

/// Channel mask interpretation of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ChannelMaskCodec {
    /// Dynamic channel plans with up to 16 channels.
    Mask16,
    /// Fixed channel plans with 64 x 125 kHz and 8 x 500 kHz uplink channels.
    Mask72,
}

impl ChannelMaskCodec {
    pub fn channel_count(&self) -> usize {
        match self {
            ChannelMaskCodec::Mask16 => 16,
            ChannelMaskCodec::Mask72 => 72,
        }
    }

    /// Applies one block to the `previous` enabled set of a plan with `defined` channels.
    ///
    /// Mask bits addressing channels the plan does not define are ignored.
    pub fn apply(
        &self,
        previous: &ChannelMask<9>,
        block: &ChMaskBlock,
        defined: usize,
    ) -> Result<ChannelMask<9>> {
        let mut next = previous.clone();
        match (*self, block.control) {
            (ChannelMaskCodec::Mask16, 0) => {
                for i in 0..16 {
                    next.set_channel(i, block.bit(i));
                }
            }
            (ChannelMaskCodec::Mask16, 6) => {
                next = ChannelMask::first(defined.min(16));
            }
            (ChannelMaskCodec::Mask72, ctl @ 0..=3) => {
                let base = ctl as usize * 16;
                for i in 0..16 {
                    next.set_channel(base + i, block.bit(i));
                }
            }
            (ChannelMaskCodec::Mask72, 4) => {
                for i in 0..8 {
                    next.set_channel(64 + i, block.bit(i));
                }
            }
            (ChannelMaskCodec::Mask72, ctl @ (6 | 7)) => {
                for i in 0..64 {
                    next.set_channel(i, ctl == 6);
                }
                for i in 0..8 {
                    next.set_channel(64 + i, block.bit(i));
                }
            }
            (_, ctl) => return Err(Error::UnsupportedChannelMaskControl(ctl)),
        }
        if next.any_enabled_from(defined) {
            warn!("ignoring ChMask bits beyond channel {}", defined);
            for channel in defined..ChannelMask::<9>::CAPACITY {
                next.set_channel(channel, previous.is_enabled(channel).unwrap_or(false));
            }
        }
        Ok(next)
    }

    /// Applies blocks in order, as a device processes a LinkADRReq block.
    pub fn apply_all(
        &self,
        previous: &ChannelMask<9>,
        blocks: &[ChMaskBlock],
        defined: usize,
    ) -> Result<ChannelMask<9>> {
        blocks.iter().try_fold(previous.clone(), |mask, block| self.apply(&mask, block, defined))
    }

    /// Generates the blocks which move a plan with `defined` channels from `current` to
    /// `desired`.
    pub fn generate(
        &self,
        current: &ChannelMask<9>,
        desired: &ChannelMask<9>,
        defined: usize,
    ) -> Result<ChMaskBlocks> {
        if desired.any_enabled_from(defined.min(self.channel_count())) {
            return Err(Error::InvalidChannelMask);
        }
        let mut blocks = ChMaskBlocks::new();
        match self {
            ChannelMaskCodec::Mask16 => {
                push(&mut blocks, ChMaskBlock::new(0, bank16(desired, 0)))?;
            }
            ChannelMaskCodec::Mask72 => {
                let mut best = diff72(current, desired)?;
                if best.is_empty() {
                    push(&mut blocks, ChMaskBlock::new(0, bank16(desired, 0)))?;
                    return Ok(blocks);
                }
                for ctl in [6, 7] {
                    let mut candidate = ChMaskBlocks::new();
                    let head = ChMaskBlock::new(ctl, u16::from(desired.get_index(8)));
                    let base = self.apply(current, &head, MAX_CHANNELS)?;
                    push(&mut candidate, head)?;
                    for block in diff72(&base, desired)? {
                        push(&mut candidate, block)?;
                    }
                    if candidate.len() < best.len() {
                        best = candidate;
                    }
                }
                blocks = best;
            }
        }
        Ok(blocks)
    }
}

fn push(blocks: &mut ChMaskBlocks, block: ChMaskBlock) -> Result {
    blocks.push(block).map_err(|_| Error::InvalidChannelMask)
}

fn bank16(mask: &ChannelMask<9>, block: usize) -> u16 {
    u16::from(mask.get_index(block * 2)) | (u16::from(mask.get_index(block * 2 + 1)) << 8)
}

fn diff72(from: &ChannelMask<9>, to: &ChannelMask<9>) -> Result<ChMaskBlocks> {
    let mut blocks = ChMaskBlocks::new();
    for block in 0..4 {
        if bank16(from, block) != bank16(to, block) {
            push(&mut blocks, ChMaskBlock::new(block as u8, bank16(to, block)))?;
        }
    }
    if from.get_index(8) != to.get_index(8) {
        push(&mut blocks, ChMaskBlock::new(4, u16::from(to.get_index(8))))?;
    }
    Ok(blocks)
}

/// Encoding of the CFList a band accepts in its join-accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CfListType {
    /// Type 0: up to five additional channel frequencies.
    Frequencies,
    /// Type 1: channel mask of a fixed channel plan.
    ChannelMasks,
}

/// Decoded CFList payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CfList {
    /// Frequencies in Hz; 0 marks an unused slot.
    Frequencies([u32; 5]),
    ChannelMask(ChannelMask<9>),
}

impl CfList {
    /// Decodes the 16-byte CFList field of a join-accept.
    pub fn new(bytes: &[u8; 16]) -> Result<Self> {
        match bytes[15] {
            0 => {
                let mut frequencies = [0; 5];
                for (freq, chunk) in frequencies.iter_mut().zip(bytes[..15].chunks_exact(3)) {
                    *freq = Frequency::new(chunk).map(|f| f.value()).ok_or(Error::InvalidCfList)?;
                }
                Ok(CfList::Frequencies(frequencies))
            }
            1 => Ok(CfList::ChannelMask(ChannelMask::new(&bytes[..9])?)),
            _ => Err(Error::InvalidCfList),
        }
    }

    pub fn list_type(&self) -> CfListType {
        match self {
            CfList::Frequencies(_) => CfListType::Frequencies,
            CfList::ChannelMask(_) => CfListType::ChannelMasks,
        }
    }
}

/// Channel state of one device: the channels it knows and which of them are enabled.
///
/// Channels are indexed by position, as ChMask bits address them. A `None` slot is a channel
/// index the device has no frequency for, eg: a 0 Hz entry of a frequency CFList.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceChannels {
    pub channels: heapless::Vec<Option<Channel>, MAX_CHANNELS>,
    pub enabled: ChannelMask<9>,
}

impl DeviceChannels {
    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index).and_then(Option::as_ref)
    }

    /// Channel indexes the device may address, defined or not.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Whether `mask` enables an index without a channel.
    pub fn enables_undefined(&self, mask: &ChannelMask<9>) -> bool {
        mask.any_enabled_from(self.len())
            || self.channels.iter().enumerate().any(|(i, c)| {
                c.is_none() && mask.is_enabled(i).unwrap_or(false)
            })
    }

    /// Clears the bits of `mask` addressing slots without a channel.
    pub(crate) fn clear_undefined(&self, mask: &mut ChannelMask<9>) {
        for (i, _) in self.channels.iter().enumerate().filter(|(_, c)| c.is_none()) {
            mask.set_channel(i, false);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mask72(enabled: &[usize]) -> ChannelMask<9> {
        let mut mask = ChannelMask::empty();
        for &i in enabled {
            mask.set_channel(i, true);
        }
        mask
    }

    #[test]
    fn mask16_ignores_undefined_channels() {
        let previous = ChannelMask::first(3);
        let block = ChMaskBlock::new(0, 0b1000_0000_0000_0101u16);
        let next = ChannelMaskCodec::Mask16.apply(&previous, &block, 3).unwrap();
        assert_eq!(next, mask72(&[0, 2]));
    }

    #[test]
    fn mask16_enable_all_and_rfu() {
        let previous = ChannelMask::empty();
        let all = ChannelMaskCodec::Mask16.apply(&previous, &ChMaskBlock::new(6, 0u16), 5);
        assert_eq!(all, Ok(ChannelMask::first(5)));
        let rfu = ChannelMaskCodec::Mask16.apply(&previous, &ChMaskBlock::new(5, 0u16), 5);
        assert_eq!(rfu, Err(Error::UnsupportedChannelMaskControl(5)));
    }

    #[test]
    fn mask72_controls() {
        let codec = ChannelMaskCodec::Mask72;
        let all = ChannelMask::first(72);
        let next = codec.apply(&all, &ChMaskBlock::new(7, 0b10u16), 72).unwrap();
        assert_eq!(next, mask72(&[65]));
        let next = codec.apply(&next, &ChMaskBlock::new(1, 0x00ffu16), 72).unwrap();
        assert_eq!(next.enabled_channels().collect::<heapless::Vec<_, 72>>().len(), 9);
        assert_eq!(next.is_enabled(16), Ok(true));
        assert_eq!(next.is_enabled(24), Ok(false));
        let next = codec.apply(&next, &ChMaskBlock::new(4, 0xff01u16), 72).unwrap();
        assert_eq!(next.is_enabled(64), Ok(true));
        assert_eq!(next.is_enabled(65), Ok(false));
        assert_eq!(
            codec.apply(&next, &ChMaskBlock::new(5, 0u16), 72),
            Err(Error::UnsupportedChannelMaskControl(5))
        );
    }

    #[test]
    fn mask16_round_trip() {
        let codec = ChannelMaskCodec::Mask16;
        let current = ChannelMask::first(8);
        for bits in [0u16, 0b1, 0b1010_1010, 0xff] {
            let mut desired = ChannelMask::empty();
            desired.set_bank(0, bits as u8);
            let blocks = codec.generate(&current, &desired, 8).unwrap();
            assert_eq!(codec.apply_all(&current, &blocks, 8), Ok(desired));
        }
    }

    #[test]
    fn mask72_round_trip() {
        let codec = ChannelMaskCodec::Mask72;
        let cases = [
            (ChannelMask::first(72), mask72(&[8, 9, 10, 11, 12, 13, 14, 15, 65])),
            (ChannelMask::first(72), ChannelMask::first(72)),
            (mask72(&[0, 1]), mask72(&[0, 1, 40, 71])),
            (mask72(&[3]), ChannelMask::first(64)),
            (ChannelMask::empty(), ChannelMask::empty()),
        ];
        for (current, desired) in cases {
            let blocks = codec.generate(&current, &desired, 72).unwrap();
            assert!(!blocks.is_empty());
            assert_eq!(codec.apply_all(&current, &blocks, 72), Ok(desired));
        }
    }

    #[test]
    fn mask72_prefers_bulk_controls() {
        let codec = ChannelMaskCodec::Mask72;
        let blocks = codec
            .generate(&ChannelMask::first(72), &mask72(&[8, 9, 10, 11, 12, 13, 14, 15, 65]), 72)
            .unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], ChMaskBlock::new(7, 0b10u16));
        assert_eq!(blocks[1], ChMaskBlock::new(0, 0xff00u16));
    }

    #[test]
    fn generate_rejects_undefined_channels() {
        let codec = ChannelMaskCodec::Mask16;
        let desired = mask72(&[0, 4]);
        assert_eq!(
            codec.generate(&ChannelMask::first(3), &desired, 3),
            Err(Error::InvalidChannelMask)
        );
    }

    #[test]
    fn cf_list_decoding() {
        let mut bytes = [0u8; 16];
        bytes[..3].copy_from_slice(&[0x18, 0x4f, 0x84]);
        assert_eq!(
            CfList::new(&bytes),
            Ok(CfList::Frequencies([867_100_000, 0, 0, 0, 0]))
        );
        let mut bytes = [0u8; 16];
        bytes[0] = 0xff;
        bytes[15] = 1;
        let cf_list = CfList::new(&bytes).unwrap();
        assert_eq!(cf_list.list_type(), CfListType::ChannelMasks);
        assert_eq!(cf_list, CfList::ChannelMask(ChannelMask::first(8)));
        bytes[15] = 2;
        assert_eq!(CfList::new(&bytes), Err(Error::InvalidCfList));
    }
}
