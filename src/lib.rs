// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! LoRaWAN regional parameters.
//!
//! A [`Band`] describes one region: its channel plan, data rate table, duty cycle sub-bands,
//! receive window rules and class B beacon. Bands are looked up by region id through a
//! [`BandRegistry`] and resolved to a regional parameters revision with [`Band::version`].
//!
//! ```
//! use lorawan_band::{region, BandRegistry, PhyVersion, DR};
//!
//! let registry = BandRegistry::with_all_regions().unwrap();
//! let band = registry.get_version(region::EU_863_870, PhyVersion::V1_0_2RevB).unwrap();
//!
//! assert_eq!(band.rx1_data_rate(DR::_5, 1, false), Ok(DR::_4));
//! assert_eq!(band.duty_cycle(869_525_000), 0.1);
//! assert_eq!(band.rx2().frequency, 869_525_000);
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

mod fmt;

pub mod band;
pub mod beacon;
pub mod channel;
pub mod datarate;
pub mod derivation;
pub mod duty_cycle;
pub mod error;
pub mod region;
pub mod registry;
pub mod types;
pub mod version;

pub use band::Band;
pub use beacon::{Beacon, BeaconChannels};
pub use channel::{CfList, CfListType, ChMaskBlock, Channel, ChannelMaskCodec, DeviceChannels};
pub use datarate::{DataRate, MaxPayloadSize, Modulation};
pub use derivation::{Rx1Channel, Rx1DataRateRule, Rx2Parameters};
pub use error::{Error, Result};
pub use registry::BandRegistry;
pub use types::{ChannelMask, DataRateRange, DR};
pub use version::PhyVersion;
