// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! LoRaWAN type primitives (data rate index, channel mask, frequency, etc)
//! shared by every band descriptor.
use crate::error::Error;

seq_macro::seq!(
    N in 0..=15 {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        /// A data rate index. Note that not all data rates are defined in all regions, the
        /// band's data rate table decides which ones are usable.
        pub enum DR {
            #(
                _~N = N,
            )*
        }

        impl DR {
            /// Every index, in increasing order.
            pub const ALL: [DR; 16] = [#(DR::_~N,)*];

            /// Data rate index from the low nibble of `value`.
            pub const fn from_nibble(value: u8) -> DR {
                match value & 0x0f {
                    #(
                        N => DR::_~N,
                    )*
                    _ => DR::_15,
                }
            }
        }
    }
);

impl DR {
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DR {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 15 {
            return Err(Error::InvalidDataRateIndex(value));
        }
        Ok(DR::from_nibble(value))
    }
}

impl From<DR> for u8 {
    fn from(dr: DR) -> u8 {
        dr.index()
    }
}

/// ChannelMask represents a set of enabled channels, one bit per channel.
///
/// `ChannelMask<2>` is the 16-bit ChMask carried by LinkADRReq, `ChannelMask<9>` holds the
/// complete state of a plan with up to 72 channels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelMask<const N: usize>([u8; N]);

impl<const N: usize> Default for ChannelMask<N> {
    fn default() -> Self {
        ChannelMask([0xFF; N])
    }
}

#[cfg(feature = "defmt-03")]
impl<const N: usize> defmt::Format for ChannelMask<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ChannelMask(");
        for byte in self.0.iter().rev() {
            defmt::write!(f, "{:02x}", byte);
        }
        defmt::write!(f, ")")
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for ChannelMask<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for e in &self.0 {
            seq.serialize_element(e)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ChannelMaskDeserializer<const N: usize>;

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::de::Visitor<'de> for ChannelMaskDeserializer<N> {
    type Value = ChannelMask<N>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter.write_str("ChannelMask bytes.")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut arr = [0; N];
        let mut index = 0;
        while let Some(el) = seq.next_element()? {
            if index >= N {
                return Err(serde::de::Error::custom("ChannelMask has too many elements"));
            }
            arr[index] = el;
            index += 1;
        }
        Ok(ChannelMask(arr))
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for ChannelMask<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ChannelMaskDeserializer {})
    }
}

impl<const N: usize> ChannelMask<N> {
    /// Number of channels the mask can address.
    pub const CAPACITY: usize = N * 8;

    /// Constructs a new ChannelMask from the provided data (little endian, channel 0 is bit 0 of
    /// the first byte).
    pub fn new(data: &[u8]) -> Result<Self, Error> {
        if data.len() < N {
            return Err(Error::InvalidChannelMask);
        }
        let mut payload = [0; N];
        payload.copy_from_slice(&data[..N]);
        Ok(ChannelMask(payload))
    }

    /// A mask with every channel disabled.
    pub const fn empty() -> Self {
        ChannelMask([0; N])
    }

    /// A mask with channels `0..count` enabled.
    pub fn first(count: usize) -> Self {
        let mut mask = Self::empty();
        for channel in 0..count.min(Self::CAPACITY) {
            mask.set_channel(channel, true);
        }
        mask
    }

    pub fn set_bank(&mut self, index: usize, value: u8) {
        if let Some(bank) = self.0.get_mut(index) {
            *bank = value;
        }
    }

    pub fn get_index(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Enable or disable a specific channel. Recall that LoRaWAN channel numbers start indexing
    /// at zero. Channels beyond the mask capacity are ignored.
    pub fn set_channel(&mut self, channel: usize, set: bool) {
        let Some(bank) = self.0.get_mut(channel >> 3) else {
            return;
        };
        let flag = 0b1 << (channel & 0x07);
        if set {
            *bank |= flag;
        } else {
            *bank &= !flag;
        }
    }

    fn channel_enabled(&self, index: usize) -> bool {
        self.0[index >> 3] & (1 << (index & 0x07)) != 0
    }

    /// Verifies if a given channel is enabled.
    pub fn is_enabled(&self, index: usize) -> Result<bool, Error> {
        if index >= Self::CAPACITY {
            return Err(Error::InvalidChannelMask);
        }
        Ok(self.channel_enabled(index))
    }

    /// Indexes of the enabled channels, in increasing order.
    pub fn enabled_channels(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::CAPACITY).filter(|&i| self.channel_enabled(i))
    }

    pub fn count_enabled(&self) -> usize {
        self.0.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Whether any channel at or above `limit` is enabled.
    pub fn any_enabled_from(&self, limit: usize) -> bool {
        (limit..Self::CAPACITY).any(|i| self.channel_enabled(i))
    }

    /// Disables every channel at or above `limit`.
    pub fn truncate(&mut self, limit: usize) {
        for channel in limit..Self::CAPACITY {
            self.set_channel(channel, false);
        }
    }
}

impl From<u16> for ChannelMask<2> {
    fn from(v: u16) -> Self {
        ChannelMask(v.to_le_bytes())
    }
}

impl From<&ChannelMask<2>> for u16 {
    fn from(mask: &ChannelMask<2>) -> u16 {
        u16::from_le_bytes(mask.0)
    }
}

/// DataRateRange represents the inclusive range of data rates allowed on a channel, packed the
/// way NewChannelReq carries it (max in the high nibble, min in the low nibble).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataRateRange(u8);

impl DataRateRange {
    /// Constructs a range from its bounds, without checking for correctness.
    pub const fn new_range(min: DR, max: DR) -> DataRateRange {
        DataRateRange(((max as u8) << 4) | (min as u8))
    }

    /// Constructs a new DataRateRange from the provided byte.
    pub fn new(byte: u8) -> Result<DataRateRange, Error> {
        if (byte >> 4) < (byte & 0x0f) {
            return Err(Error::InvalidDataRateIndex(byte & 0x0f));
        }
        Ok(DataRateRange(byte))
    }

    /// The highest data rate allowed on this channel.
    pub const fn max_data_rate(&self) -> DR {
        DR::from_nibble(self.0 >> 4)
    }

    /// The lowest data rate allowed on this channel.
    pub const fn min_data_rate(&self) -> DR {
        DR::from_nibble(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.min_data_rate() > self.max_data_rate()
    }

    pub fn contains(&self, dr: DR) -> bool {
        (self.min_data_rate()..=self.max_data_rate()).contains(&dr)
    }

    pub fn iter(&self) -> impl Iterator<Item = DR> {
        let (min, max) = (self.min_data_rate(), self.max_data_rate());
        DR::ALL.into_iter().filter(move |dr| (min..=max).contains(dr))
    }

    /// The integer value of the DataRateRange.
    pub fn raw_value(&self) -> u8 {
        self.0
    }
}

/// Frequency represents a channel's central frequency as carried in a CFList or NewChannelReq.
#[derive(Debug, PartialEq, Eq)]
pub struct Frequency<'a>(&'a [u8]);

impl<'a> Frequency<'a> {
    /// Constructs a new Frequency from the provided bytes.
    pub fn new(bytes: &'a [u8]) -> Option<Self> {
        if bytes.len() != 3 {
            return None;
        }

        Some(Frequency(bytes))
    }

    /// Provides the decimal value in Hz of the frequency.
    pub fn value(&self) -> u32 {
        ((u32::from(self.0[2]) << 16) + (u32::from(self.0[1]) << 8) + u32::from(self.0[0])) * 100
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn data_rate_index_conversion() {
        assert_eq!(DR::try_from(0u8), Ok(DR::_0));
        assert_eq!(DR::try_from(15u8), Ok(DR::_15));
        assert_eq!(DR::try_from(16u8), Err(Error::InvalidDataRateIndex(16)));
        assert_eq!(u8::from(DR::_7), 7);
    }

    #[test]
    fn channel_mask_bits() {
        let mut mask = ChannelMask::<2>::empty();
        mask.set_channel(0, true);
        mask.set_channel(9, true);
        assert_eq!(u16::from(&mask), 0b10_0000_0001);
        assert_eq!(mask.is_enabled(9), Ok(true));
        assert_eq!(mask.is_enabled(16), Err(Error::InvalidChannelMask));
        // out of range writes are dropped
        mask.set_channel(40, true);
        assert_eq!(mask.count_enabled(), 2);
        assert_eq!(mask.enabled_channels().collect::<heapless::Vec<_, 16>>(), [0, 9]);
    }

    #[test]
    fn channel_mask_first_and_truncate() {
        let mut mask = ChannelMask::<9>::first(66);
        assert_eq!(mask.count_enabled(), 66);
        assert!(mask.any_enabled_from(65));
        mask.truncate(64);
        assert_eq!(mask.count_enabled(), 64);
        assert!(!mask.any_enabled_from(64));
    }

    #[test]
    fn data_rate_range() {
        let range = DataRateRange::new_range(DR::_0, DR::_5);
        assert_eq!(range.raw_value(), 0x50);
        assert!(range.contains(DR::_3));
        assert!(!range.contains(DR::_6));
        assert_eq!(range.iter().count(), 6);
        assert!(DataRateRange::new(0x05).is_err());
        assert_eq!(DataRateRange::new(0x61).map(|r| r.min_data_rate()), Ok(DR::_1));
    }

    #[test]
    fn frequency_value() {
        let freq = Frequency::new(&[0x18, 0x4f, 0x84]).map(|f| f.value());
        assert_eq!(freq, Some(867_100_000));
        assert!(Frequency::new(&[0, 0]).is_none());
    }
}
