// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Band descriptors of the supported regions (eg: EU868, US915, etc).
use lora_modulation::{Bandwidth, SpreadingFactor};

use crate::band::Band;
use crate::beacon::Beacon;
use crate::channel::{CfListType, Channel, ChannelMaskCodec, ChannelPlan};
use crate::datarate::{DataRate, DataRateTable, MaxPayloadSize};
use crate::derivation::{Rx1Channel, Rx1DataRateRule, Rx2Parameters, TxOffsetTable};
use crate::duty_cycle::{DutyCycle, DutyCycleTable};
use crate::error::{Error, Result};
use crate::types::DR;
use crate::version::{PhyVersion, VersionOverlays};

pub(crate) mod constants;
use constants::*;

#[cfg(not(any(
    feature = "region-as923",
    feature = "region-eu433",
    feature = "region-eu868",
    feature = "region-in865",
    feature = "region-au915",
    feature = "region-us915"
)))]
compile_error!("You must enable at least one region! eg: `region-eu868`, `region-us915`...");

#[cfg(any(
    feature = "region-as923",
    feature = "region-eu433",
    feature = "region-eu868",
    feature = "region-in865"
))]
mod dynamic_channel_plans;
#[cfg(feature = "region-as923")]
pub use dynamic_channel_plans::as923::{as_923, AS_923};
#[cfg(feature = "region-eu433")]
pub use dynamic_channel_plans::eu433::{eu_433, EU_433};
#[cfg(feature = "region-eu868")]
pub use dynamic_channel_plans::eu868::{eu_863_870, EU_863_870};
#[cfg(feature = "region-in865")]
pub use dynamic_channel_plans::in865::{in_865_867, IN_865_867};

#[cfg(any(feature = "region-us915", feature = "region-au915"))]
mod fixed_channel_plans;
#[cfg(feature = "region-au915")]
pub use fixed_channel_plans::au915::{au_915_928, AU_915_928};
#[cfg(feature = "region-us915")]
pub use fixed_channel_plans::us915::{us_902_928, US_902_928};

/// Constructors of every enabled band, in registration order.
pub const REGIONS: &[fn() -> Result<Band>] = &[
    #[cfg(feature = "region-eu868")]
    eu_863_870,
    #[cfg(feature = "region-eu433")]
    eu_433,
    #[cfg(feature = "region-us915")]
    us_902_928,
    #[cfg(feature = "region-au915")]
    au_915_928,
    #[cfg(feature = "region-as923")]
    as_923,
    #[cfg(feature = "region-in865")]
    in_865_867,
];

// (M, N) payload sizes shared by most data rate tables
pub(crate) const SIZE_59: MaxPayloadSize = MaxPayloadSize::new(59, 51);
pub(crate) const SIZE_123: MaxPayloadSize = MaxPayloadSize::new(123, 115);
pub(crate) const SIZE_230: MaxPayloadSize = MaxPayloadSize::new(230, 222);
pub(crate) const SIZE_250: MaxPayloadSize = MaxPayloadSize::new(250, 242);
