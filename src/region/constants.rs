// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

use core::time::Duration;

use lora_modulation::CodingRate;

pub(crate) const RECEIVE_DELAY1: Duration = Duration::from_secs(1);
pub(crate) const RECEIVE_DELAY2: Duration = Duration::from_secs(2); // must be RECEIVE_DELAY1 + 1 s
pub(crate) const JOIN_ACCEPT_DELAY1: Duration = Duration::from_secs(5);
pub(crate) const JOIN_ACCEPT_DELAY2: Duration = Duration::from_secs(6);
pub(crate) const MAX_FCNT_GAP: u32 = 16384;
pub(crate) const ADR_ACK_LIMIT: u16 = 64;
pub(crate) const ADR_ACK_DELAY: u16 = 32;
// ACK_TIMEOUT is 2 s +/- 1 s
pub(crate) const MIN_ACK_TIMEOUT: Duration = Duration::from_secs(1);
pub(crate) const MAX_ACK_TIMEOUT: Duration = Duration::from_secs(3);

pub(crate) const BEACON_CODING_RATE: CodingRate = CodingRate::_4_5;
