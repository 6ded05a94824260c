// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

use super::*;

const SIZE_19: MaxPayloadSize = MaxPayloadSize::new(19, 11);
const SIZE_41: MaxPayloadSize = MaxPayloadSize::new(41, 33);
const SIZE_61: MaxPayloadSize = MaxPayloadSize::new(61, 53);
const SIZE_117: MaxPayloadSize = MaxPayloadSize::new(117, 109);
const SIZE_133: MaxPayloadSize = MaxPayloadSize::new(133, 125);
const SIZE_137: MaxPayloadSize = MaxPayloadSize::new(137, 129);

pub(crate) const DATARATES: DataRateTable = DataRateTable::new([
    // DR0
    Some(DataRate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, SIZE_19, SIZE_19)),
    // DR1
    Some(DataRate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, SIZE_61, SIZE_61)),
    // DR2
    Some(DataRate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, SIZE_133, SIZE_133)),
    // DR3
    Some(DataRate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, SIZE_250, SIZE_250)),
    // DR4
    Some(DataRate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, SIZE_250, SIZE_250)),
    // DR5..DR7: RFU
    None,
    None,
    None,
    // DR8
    Some(DataRate::lora(SpreadingFactor::_12, Bandwidth::_500KHz, SIZE_41, SIZE_61)),
    // DR9
    Some(DataRate::lora(SpreadingFactor::_11, Bandwidth::_500KHz, SIZE_117, SIZE_137)),
    // DR10
    Some(DataRate::lora(SpreadingFactor::_10, Bandwidth::_500KHz, SIZE_230, SIZE_250)),
    // DR11
    Some(DataRate::lora(SpreadingFactor::_9, Bandwidth::_500KHz, SIZE_230, SIZE_250)),
    // DR12
    Some(DataRate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, SIZE_230, SIZE_250)),
    // DR13
    Some(DataRate::lora(SpreadingFactor::_7, Bandwidth::_500KHz, SIZE_230, SIZE_250)),
    // DR14: RFU
    None,
    // DR15: used by LinkADRReq from Regional Parameters 1.1 on
    None,
]);
