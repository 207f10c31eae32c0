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

use crate::error::HpackError;
use crate::hpack::context::{Context, Role};
use crate::hpack::representation::Limits;
use crate::hpack::{
    HpackDecoder, HpackEncoder, Side, DEFAULT_MAX_BLOCK_SIZE, DEFAULT_MAX_NAME_LEN,
    DEFAULT_MAX_VALUE_LEN, DEFAULT_TABLE_SIZE,
};

/// Builder of [`HpackEncoder`].
///
/// [`HpackEncoder`]: crate::HpackEncoder
///
/// # Examples
///
/// ```
/// use ylong_hpack::{EncoderBuilder, Side};
///
/// let encoder = EncoderBuilder::new()
///     .side(Side::Response)
///     .table_size(1024)
///     .no_reference_set(true)
///     .build()
///     .unwrap();
/// assert_eq!(encoder.side(), Side::Response);
/// assert_eq!(encoder.advertised_table_max(), 1024);
/// ```
pub struct EncoderBuilder {
    side: Side,
    table_size: usize,
    storage_size: usize,
    no_reference_set: bool,
    max_block_size: usize,
}

impl EncoderBuilder {
    /// `EncoderBuilder` constructor.
    pub fn new() -> Self {
        Self {
            side: Side::Request,
            table_size: DEFAULT_TABLE_SIZE,
            storage_size: DEFAULT_TABLE_SIZE,
            no_reference_set: false,
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
        }
    }

    /// Endpoint type of the encoder.
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Budget, in octets, of the part of the dynamic table the encoder
    /// keeps content for and may refer to.
    pub fn table_size(mut self, size: usize) -> Self {
        self.table_size = size;
        self
    }

    /// Size, in octets, of the dynamic table shared with the peer. It is
    /// later changed by `HpackEncoder::change_table_size`.
    pub fn storage_size(mut self, size: usize) -> Self {
        self.storage_size = size;
        self
    }

    /// Starts every header block by emptying the reference set.
    pub fn no_reference_set(mut self, enabled: bool) -> Self {
        self.no_reference_set = enabled;
        self
    }

    /// Upper bound of an encoded header block.
    pub fn max_block_size(mut self, size: usize) -> Self {
        self.max_block_size = size;
        self
    }

    /// Consumes the builder and constructs a `HpackEncoder`.
    pub fn build(self) -> Result<HpackEncoder, HpackError> {
        let ctx = Context::new(Role::Deflate, self.side, self.storage_size, self.table_size)?;
        Ok(HpackEncoder::from_parts(
            ctx,
            self.no_reference_set,
            self.max_block_size,
        ))
    }
}

impl Default for EncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder of [`HpackDecoder`].
///
/// [`HpackDecoder`]: crate::HpackDecoder
///
/// # Examples
///
/// ```
/// use ylong_hpack::{DecoderBuilder, Side};
///
/// let decoder = DecoderBuilder::new()
///     .side(Side::Request)
///     .table_size(8192)
///     .max_value_len(1 << 14)
///     .build()
///     .unwrap();
/// assert_eq!(decoder.table_max(), 8192);
/// ```
pub struct DecoderBuilder {
    side: Side,
    table_size: usize,
    limits: Limits,
}

impl DecoderBuilder {
    /// `DecoderBuilder` constructor.
    pub fn new() -> Self {
        Self {
            side: Side::Request,
            table_size: DEFAULT_TABLE_SIZE,
            limits: Limits {
                max_name_len: DEFAULT_MAX_NAME_LEN,
                max_value_len: DEFAULT_MAX_VALUE_LEN,
            },
        }
    }

    /// Endpoint type of the decoder.
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Size, in octets, of the dynamic table.
    pub fn table_size(mut self, size: usize) -> Self {
        self.table_size = size;
        self
    }

    /// Longest header name accepted.
    pub fn max_name_len(mut self, len: usize) -> Self {
        self.limits.max_name_len = len;
        self
    }

    /// Longest header value accepted.
    pub fn max_value_len(mut self, len: usize) -> Self {
        self.limits.max_value_len = len;
        self
    }

    /// Consumes the builder and constructs a `HpackDecoder`.
    pub fn build(self) -> Result<HpackDecoder, HpackError> {
        let ctx = Context::new(Role::Inflate, self.side, self.table_size, self.table_size)?;
        Ok(HpackDecoder::from_parts(ctx, self.limits))
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod ut_builder {
    use crate::{DecoderBuilder, EncoderBuilder, Side, DEFAULT_TABLE_SIZE};

    /// UT test cases for `EncoderBuilder`.
    ///
    /// # Brief
    /// 1. Builds encoders with default and custom settings.
    /// 2. Checks the budgets and the side of each encoder.
    #[test]
    fn ut_encoder_builder() {
        let encoder = EncoderBuilder::default().build().unwrap();
        assert_eq!(encoder.side(), Side::Request);
        assert_eq!(encoder.table_max(), DEFAULT_TABLE_SIZE);
        assert_eq!(encoder.advertised_table_max(), DEFAULT_TABLE_SIZE);
        assert_eq!(encoder.table_capacity(), 128);

        // The advertised budget is clamped by the storage budget.
        let encoder = EncoderBuilder::new()
            .side(Side::Response)
            .storage_size(1024)
            .table_size(2048)
            .build()
            .unwrap();
        assert_eq!(encoder.side(), Side::Response);
        assert_eq!(encoder.table_max(), 1024);
        assert_eq!(encoder.advertised_table_max(), 1024);
    }

    /// UT test cases for `DecoderBuilder`.
    ///
    /// # Brief
    /// 1. Builds decoders with default and custom settings.
    /// 2. Checks the table budget and the side of each decoder.
    #[test]
    fn ut_decoder_builder() {
        let decoder = DecoderBuilder::default().build().unwrap();
        assert_eq!(decoder.side(), Side::Request);
        assert_eq!(decoder.table_max(), DEFAULT_TABLE_SIZE);

        let decoder = DecoderBuilder::new()
            .side(Side::Response)
            .table_size(0)
            .max_name_len(16)
            .build()
            .unwrap();
        assert_eq!(decoder.side(), Side::Response);
        assert_eq!(decoder.table_max(), 0);
        assert_eq!(decoder.table_capacity(), 1);
    }
}
