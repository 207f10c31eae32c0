// Copyright (c) 2023 Huawei Device Co., Ltd.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Prefixed integer representation.
//!
//! # Introduction
//! Integers are used to represent indexes and string lengths. An integer
//! starts anywhere within an octet, using its `N` least significant bits
//! (the prefix), and always finishes at the end of an octet.
//!
//! Values that fit in the prefix are stored in it directly. Otherwise the
//! prefix is filled with ones and the remainder follows, 7 bits per octet,
//! least significant group first, with the high bit flagging continuation.
//!
//! Every integer of this format stays below `2^16`; larger values are
//! rejected while decoding. Trailing zero groups are accepted.

use core::cmp::Ordering;

use crate::error::CompressionCause;

/// Exclusive upper bound of a decoded integer.
pub(crate) const INTEGER_LIMIT: usize = 1 << 16;

/// `IntegerDecoder` decodes an integer octet by octet, so that decoding can be
/// suspended at any octet boundary.
///
/// # Pseudocode
/// ```text
/// decode I from the next N bits
/// if I < 2^N - 1, return I
/// else
///     M = 0
///     repeat
///         B = next octet
///         I = I + (B & 127) * 2^M
///         M = M + 7
///     while B & 128 == 128
///     return I
/// ```
pub(crate) struct IntegerDecoder {
    value: usize,
    shift: u32,
}

impl IntegerDecoder {
    /// Calculates an integer based on the incoming first byte and mask.
    /// If no subsequent bytes exist, return the result directly, otherwise
    /// return the decoder itself.
    pub(crate) fn first_byte(byte: u8, mask: u8) -> Result<usize, Self> {
        let value = byte & mask;
        match value.cmp(&mask) {
            Ordering::Less => Ok(value as usize),
            _ => Err(Self {
                value: value as usize,
                shift: 0,
            }),
        }
    }

    /// Continues computing the integer based on the next byte of the input.
    /// Returns `Ok(Some(value))` once the last octet has been seen, otherwise
    /// `Ok(None)`.
    pub(crate) fn next_byte(&mut self, byte: u8) -> Result<Option<usize>, CompressionCause> {
        let group = (byte & 0x7f) as usize;
        if group != 0 {
            // Zero groups may pad the integer at any length, any other group
            // past bit 16 is out of range.
            if self.shift >= 16 {
                return Err(CompressionCause::InvalidInteger);
            }
            self.value += group << self.shift;
            if self.value >= INTEGER_LIMIT {
                return Err(CompressionCause::InvalidInteger);
            }
        }
        self.shift = self.shift.saturating_add(7);
        match (byte & 0x80) == 0x00 {
            true => Ok(Some(self.value)),
            false => Ok(None),
        }
    }
}

/// `IntegerEncoder` yields the octets of an integer one after another. The
/// bits outside of the prefix mask are taken from `pre`.
///
/// # Pseudocode
/// ```text
/// if I < 2^N - 1, encode I on N bits
/// else
///     encode (2^N - 1) on N bits
///     I = I - (2^N - 1)
///     while I >= 128
///          encode (I % 128 + 128) on 8 bits
///          I = I / 128
///     encode I on 8 bits
/// ```
pub(crate) struct IntegerEncoder {
    rest: usize,
    mask: u8,
    pre: u8,
    state: IntegerEncodeState,
}

/// Enumeration of states that the `IntegerEncoder` needs to use.
enum IntegerEncodeState {
    First,
    Other,
    Finish,
}

impl IntegerEncoder {
    /// Creates a new `IntegerEncoder`.
    pub(crate) fn new(value: usize, mask: u8, pre: u8) -> Self {
        Self {
            rest: value,
            mask,
            pre,
            state: IntegerEncodeState::First,
        }
    }
}

impl Iterator for IntegerEncoder {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        match self.state {
            IntegerEncodeState::First => {
                if self.rest < self.mask as usize {
                    self.state = IntegerEncodeState::Finish;
                    return Some(self.pre | (self.rest as u8));
                }
                self.rest -= self.mask as usize;
                self.state = IntegerEncodeState::Other;
                Some(self.pre | self.mask)
            }
            IntegerEncodeState::Other => {
                let group = (self.rest & 0x7f) as u8;
                self.rest >>= 7;
                if self.rest == 0 {
                    self.state = IntegerEncodeState::Finish;
                    Some(group)
                } else {
                    Some(group | 0x80)
                }
            }
            IntegerEncodeState::Finish => None,
        }
    }
}
