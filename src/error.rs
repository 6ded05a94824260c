// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

use crate::types::DR;
use crate::version::PhyVersion;

/// Errors returned by band lookups and derivations.
///
/// Every error is deterministic: retrying the same call with the same inputs reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    /// The data rate index exceeds what the band accepts at this point.
    DataRateIndexTooHigh { max: DR },
    /// The RX1 data rate offset exceeds the band's maximum.
    DataRateOffsetTooHigh { max: u8 },
    /// A raw data rate index does not fit in the 16-slot table.
    InvalidDataRateIndex(u8),
    UnknownRegion,
    /// The band exists but does not declare support for this revision.
    UnsupportedVersion(PhyVersion),
    DuplicateRegion,
    /// The registry holds as many bands as it can.
    RegistryFull,
    /// The CFList does not match the band's declared list type or violates its channel bounds.
    InvalidCfList,
    /// ChMaskCntl value that is RFU for the band's channel mask codec.
    UnsupportedChannelMaskControl(u8),
    /// A channel mask addresses channels the band does not define.
    InvalidChannelMask,
    /// The band descriptor is structurally inconsistent.
    InvalidBand,
}

pub type Result<T = ()> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::DataRateIndexTooHigh { max } => {
                write!(f, "data rate index too high (max {})", max.index())
            }
            Error::DataRateOffsetTooHigh { max } => {
                write!(f, "data rate offset too high (max {max})")
            }
            Error::InvalidDataRateIndex(idx) => write!(f, "invalid data rate index {idx}"),
            Error::UnknownRegion => f.write_str("unknown region"),
            Error::UnsupportedVersion(version) => {
                write!(f, "regional parameters version {version} is not supported")
            }
            Error::DuplicateRegion => f.write_str("region already registered"),
            Error::RegistryFull => f.write_str("band registry is full"),
            Error::InvalidCfList => f.write_str("invalid CFList"),
            Error::UnsupportedChannelMaskControl(ctl) => {
                write!(f, "unsupported ChMaskCntl {ctl}")
            }
            Error::InvalidChannelMask => f.write_str("channel mask addresses undefined channels"),
            Error::InvalidBand => f.write_str("invalid band descriptor"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
