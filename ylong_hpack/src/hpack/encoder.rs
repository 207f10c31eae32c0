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

use crate::error::{CompressionCause, HpackError};
use crate::hpack::context::{Added, Context, Search};
use crate::hpack::representation::BlockWriter;
use crate::hpack::table::StaticTable;
use crate::hpack::{EncoderBuilder, HeaderField, Side};

/// Header names that are never added to the dynamic table, because their
/// values rarely repeat or must not be kept.
const NEVER_INDEXED: [&[u8]; 5] = [
    b"set-cookie",
    b"content-length",
    b"location",
    b"etag",
    b":path",
];

/// Encoder of header blocks.
///
/// Every call to `encode` turns one header list into one header block and
/// updates the dynamic table and the reference set the same way the peer's
/// decoder will. Header fields already in the reference set and repeated in
/// the next list are not sent again.
///
/// Any error poisons the encoder: the peer can no longer follow its table,
/// so all further calls fail with `Poisoned`.
///
/// # Examples
///
/// ```
/// use ylong_hpack::{HeaderField, HpackEncoder, Side};
///
/// let mut encoder = HpackEncoder::new(Side::Request).unwrap();
/// let block = encoder
///     .encode(&[HeaderField::new(":method", "GET")])
///     .unwrap();
/// // Promoted from the static table into the dynamic table.
/// assert_eq!(block, [0x82]);
/// assert_eq!(encoder.table_len(), 1);
///
/// // Still in the reference set: nothing to send.
/// let block = encoder
///     .encode(&[HeaderField::new(":method", "GET")])
///     .unwrap();
/// assert!(block.is_empty());
/// ```
pub struct HpackEncoder {
    ctx: Context,
    no_reference_set: bool,
    max_block_size: usize,
}

impl HpackEncoder {
    /// Creates a `HpackEncoder` with default settings.
    pub fn new(side: Side) -> Result<Self, HpackError> {
        EncoderBuilder::new().side(side).build()
    }

    /// Creates a `HpackEncoder` which keeps at most `size` octets of header
    /// fields it may refer to.
    pub fn with_table_size(side: Side, size: usize) -> Result<Self, HpackError> {
        EncoderBuilder::new().side(side).table_size(size).build()
    }

    pub(crate) fn from_parts(ctx: Context, no_reference_set: bool, max_block_size: usize) -> Self {
        Self {
            ctx,
            no_reference_set,
            max_block_size,
        }
    }

    /// Encodes `fields` into a new header block.
    pub fn encode(&mut self, fields: &[HeaderField]) -> Result<Vec<u8>, HpackError> {
        let mut block = Vec::new();
        self.encode_into(&mut block, fields)?;
        Ok(block)
    }

    /// Appends the header block of `fields` to `dst` and returns its length.
    /// Octets already in `dst` are kept, so a frame header can be written in
    /// front of the block. On failure `dst` is restored to its original
    /// length.
    pub fn encode_into(
        &mut self,
        dst: &mut Vec<u8>,
        fields: &[HeaderField],
    ) -> Result<usize, HpackError> {
        self.ctx.check()?;
        let mut writer = BlockWriter::new(dst, self.max_block_size);
        match self.deflate(&mut writer, fields) {
            Ok(()) => {
                let len = writer.written();
                log::trace!("encoded {} header fields into {len} octets", fields.len());
                Ok(len)
            }
            Err(err) => {
                writer.rollback();
                self.ctx.poison(&err);
                Err(err)
            }
        }
    }

    /// Empties the reference set at the start of every block from now on.
    pub fn set_no_reference_set(&mut self, enabled: bool) {
        self.no_reference_set = enabled;
    }

    /// Changes the size of the dynamic table shared with the peer, usually
    /// after it acknowledged a new setting. Entries which no longer fit are
    /// evicted.
    pub fn change_table_size(&mut self, size: usize) -> Result<(), HpackError> {
        self.ctx.check()?;
        let result = self.ctx.change_table_size(size);
        if let Err(err) = &result {
            self.ctx.poison(err);
        }
        result
    }

    /// Endpoint type of the encoder.
    pub fn side(&self) -> Side {
        self.ctx.side()
    }

    /// Checks if a previous error made the encoder unusable.
    pub fn is_poisoned(&self) -> bool {
        self.ctx.is_bad()
    }

    /// Number of entries in the dynamic table, zombies included.
    pub fn table_len(&self) -> usize {
        self.ctx.len()
    }

    /// Size of the dynamic table, in octets.
    pub fn table_size(&self) -> usize {
        self.ctx.storage_size()
    }

    /// Maximum size of the dynamic table, in octets.
    pub fn table_max(&self) -> usize {
        self.ctx.storage_max()
    }

    /// Size of the entries the encoder keeps content for, in octets.
    pub fn advertised_table_size(&self) -> usize {
        self.ctx.advertised_size()
    }

    /// Maximum size of the entries the encoder keeps content for.
    pub fn advertised_table_max(&self) -> usize {
        self.ctx.advertised_max()
    }

    /// Number of entries the encoder keeps content for. They are always the
    /// newest ones.
    pub fn advertised_len(&self) -> usize {
        self.ctx.advertised_len()
    }

    /// Number of entries the dynamic table can hold without growing.
    pub fn table_capacity(&self) -> usize {
        self.ctx.capacity()
    }

    /// Gets the header field at `index` of the dynamic table followed by the
    /// static table. Returns `None` out of range and for entries whose
    /// content has been released.
    pub fn get(&self, index: usize) -> Option<&HeaderField> {
        self.ctx.field(index)
    }

    fn deflate(
        &mut self,
        writer: &mut BlockWriter<'_>,
        fields: &[HeaderField],
    ) -> Result<(), HpackError> {
        if self.no_reference_set {
            writer.clear_reference_set()?;
            self.ctx.clear_refset();
        }
        for field in fields {
            self.deflate_field(writer, field)?;
        }
        self.drop_unused(writer)
    }

    fn deflate_field(
        &mut self,
        writer: &mut BlockWriter<'_>,
        field: &HeaderField,
    ) -> Result<(), HpackError> {
        if field.name().is_empty() {
            return Err(CompressionCause::EmptyName.into());
        }
        let len = self.ctx.len();
        match self.ctx.search(field) {
            Some(Search::Exact(index)) if index < len => self.deflate_indexed(writer, index),
            Some(Search::Exact(index)) => self.deflate_static(writer, index - len),
            Some(Search::Name(index)) => {
                let incremental = self.should_index(field);
                if incremental {
                    // A static name is shared rather than copied.
                    let name = match index.checked_sub(len) {
                        Some(position) => StaticTable::get(position)
                            .ok_or(CompressionCause::IndexOutOfRange)?
                            .field()
                            .name_bytes()
                            .clone(),
                        None => field.name_bytes().clone(),
                    };
                    let entry = HeaderField::new(name, field.value_bytes().clone());
                    let added = self.ctx.add(entry, Some(&mut *writer))?;
                    writer.indexed_name(index, field.value(), true)?;
                    self.settle(writer, added)
                } else {
                    writer.indexed_name(index, field.value(), false)
                }
            }
            None => {
                let incremental = self.should_index(field);
                if incremental {
                    let added = self.ctx.add(field.clone(), Some(&mut *writer))?;
                    writer.new_name(field.name(), field.value(), true)?;
                    self.settle(writer, added)
                } else {
                    writer.new_name(field.name(), field.value(), false)
                }
            }
        }
    }

    /// Handles an exact match in the dynamic table.
    fn deflate_indexed(
        &mut self,
        writer: &mut BlockWriter<'_>,
        index: usize,
    ) -> Result<(), HpackError> {
        let entry = self
            .ctx
            .get_mut(index)
            .ok_or(CompressionCause::IndexOutOfRange)?;
        let state = &mut entry.state;
        let toggles = if !state.in_refset {
            state.in_refset = true;
            state.emitted = true;
            1
        } else if state.emitted {
            // Off then on: the field is emitted once more.
            2
        } else if state.implicit {
            // The peer has not emitted the implicit occurrence yet, so both
            // occurrences are sent now.
            state.implicit = false;
            state.emitted = true;
            4
        } else {
            // Kept from the previous block, emitted by the peer at its end.
            state.implicit = true;
            0
        };
        for _ in 0..toggles {
            writer.indexed(index)?;
        }
        Ok(())
    }

    /// Handles an exact match in the static table: the entry is copied into
    /// the dynamic table and referred to by its static index.
    fn deflate_static(
        &mut self,
        writer: &mut BlockWriter<'_>,
        position: usize,
    ) -> Result<(), HpackError> {
        let index = self.ctx.len() + position;
        let field = StaticTable::get(position)
            .ok_or(CompressionCause::IndexOutOfRange)?
            .field()
            .clone();
        let added = self.ctx.add(field, Some(&mut *writer))?;
        writer.indexed(index)?;
        self.settle(writer, added)
    }

    /// Completes the insertion of a new entry once its representation has
    /// been written.
    fn settle(&mut self, writer: &mut BlockWriter<'_>, added: Added) -> Result<(), HpackError> {
        match added {
            Added::Inserted => {
                if let Some(entry) = self.ctx.get_mut(0) {
                    entry.state.emitted = true;
                }
                Ok(())
            }
            // The peer puts the entry in its reference set; take it out
            // again since it cannot be referred to from here.
            Added::Zombie => writer.indexed(0),
            Added::Dropped => Ok(()),
        }
    }

    /// Removes from the reference set the entries absent from the list just
    /// encoded, then resets the per-block flags.
    fn drop_unused(&mut self, writer: &mut BlockWriter<'_>) -> Result<(), HpackError> {
        for index in 0..self.ctx.advertised_len() {
            let Some(entry) = self.ctx.get_mut(index) else {
                break;
            };
            let state = &mut entry.state;
            if state.in_refset && !state.implicit && !state.emitted {
                writer.indexed(index)?;
                state.in_refset = false;
            }
        }
        for index in 0..self.ctx.len() {
            if let Some(entry) = self.ctx.get_mut(index) {
                entry.state.emitted = false;
                entry.state.implicit = false;
            }
        }
        Ok(())
    }

    fn should_index(&self, field: &HeaderField) -> bool {
        if field.room() * 4 > self.ctx.advertised_max() * 3 {
            return false;
        }
        !NEVER_INDEXED.contains(&field.name())
    }
}

#[cfg(test)]
mod ut_hpack_encoder {
    use crate::error::{CompressionCause, HpackError};
    use crate::util::test_util::decode;
    use crate::{EncoderBuilder, HeaderField, HpackEncoder, Side};

    fn fields(pairs: &[(&'static str, &'static str)]) -> Vec<HeaderField> {
        pairs
            .iter()
            .map(|(name, value)| HeaderField::new(*name, *value))
            .collect()
    }

    macro_rules! encode_test_cases {
        ($encoder: expr, $res: literal, $len: expr, { $($n: literal: $v: literal),* $(,)? } $(,)?) => {
            let block = $encoder.encode(&fields(&[$(($n, $v)),*])).unwrap();
            assert_eq!(block, decode($res).unwrap());
            assert_eq!($encoder.table_len(), $len);
        };
    }

    /// UT test cases for `HpackEncoder::encode` with static matches.
    ///
    /// # Brief
    /// 1. Encodes header lists whose fields are in the static table.
    /// 2. Checks the blocks and that fields are promoted into the dynamic
    ///    table.
    /// 3. Encodes the same list again and checks that nothing is sent.
    #[test]
    fn ut_hpack_encoder_static() {
        let mut encoder = HpackEncoder::new(Side::Request).unwrap();
        encode_test_cases!(encoder, "82 87", 2, {":method": "GET", ":scheme": "http"});
        assert_eq!(encoder.get(0), Some(&HeaderField::new(":scheme", "http")));
        assert_eq!(encoder.get(1), Some(&HeaderField::new(":method", "GET")));
        assert_eq!(encoder.table_size(), 42 + 43);

        encode_test_cases!(encoder, "", 2, {":method": "GET", ":scheme": "http"});

        // `:scheme: http` is no longer in the list and is toggled off.
        encode_test_cases!(encoder, "81", 2, {":method": "GET"});
    }

    /// UT test cases for `HpackEncoder::encode` with literals.
    ///
    /// # Brief
    /// 1. Encodes fields with new names, static names and denied names.
    /// 2. Checks the blocks and the dynamic table.
    #[test]
    fn ut_hpack_encoder_literal() {
        let mut encoder = HpackEncoder::new(Side::Request).unwrap();
        // New name, indexed.
        encode_test_cases!(
            encoder,
            "00 88 25a849e95ba97d7f 89 25a849e95bb8e8b4bf",
            1,
            {"custom-key": "custom-value"},
        );
        // Static name of `user-agent`, shifted by one dynamic entry.
        encode_test_cases!(encoder, "3a 85 aa69d29ac5 82", 2, {"user-agent": "nghttp2"});
        // `:path` is never indexed.
        encode_test_cases!(encoder, "46 01 78 81", 2, {":path": "x"});
        assert_eq!(encoder.get(0), Some(&HeaderField::new("user-agent", "nghttp2")));
    }

    /// UT test cases for repeated header fields.
    ///
    /// # Brief
    /// 1. Encodes a list with the same field twice, then three times.
    /// 2. Checks the toggles emitted for each occurrence.
    #[test]
    fn ut_hpack_encoder_repeated() {
        let mut encoder = HpackEncoder::new(Side::Request).unwrap();
        let block = encoder
            .encode(&fields(&[("cookie", "alpha"), ("cookie", "alpha")]))
            .unwrap();
        assert_eq!(&block[block.len() - 2..], [0x81, 0x81]);

        let block = encoder
            .encode(&fields(&[("cookie", "alpha"), ("cookie", "alpha"), ("cookie", "alpha")]))
            .unwrap();
        assert_eq!(block, [0x81; 6]);
    }

    /// UT test cases for the advertised budget of `HpackEncoder`.
    ///
    /// # Brief
    /// 1. Creates encoders whose advertised budget is smaller than the table.
    /// 2. Encodes lists which do not fit in that budget.
    /// 3. Checks the zombie entries and the advertised accounting.
    #[test]
    fn ut_hpack_encoder_advertised() {
        // `:method: GET` takes 42 octets, `:scheme: http` 43.
        let mut encoder = HpackEncoder::with_table_size(Side::Request, 32).unwrap();
        let block = encoder
            .encode(&fields(&[(":method", "GET"), (":scheme", "http")]))
            .unwrap();
        assert_eq!(block, [0x82, 0x81, 0x87, 0x81]);
        assert_eq!(encoder.table_len(), 2);
        assert_eq!(encoder.advertised_len(), 0);
        assert_eq!(encoder.advertised_table_size(), 0);
        assert_eq!(encoder.get(0), None);
        assert_eq!(encoder.get(1), None);

        let pairs = [("k1", "v1"), ("k10", "v10"), ("k100", "v100"), ("k1000", "v1000")];
        let mut encoder = HpackEncoder::with_table_size(Side::Request, 156).unwrap();
        encoder.encode(&fields(&pairs)).unwrap();
        assert_eq!(encoder.table_len(), 4);
        assert_eq!(encoder.advertised_len(), 4);
        assert_eq!(encoder.advertised_table_size(), 156);

        encoder.change_table_size(4096).unwrap();
        assert_eq!(encoder.advertised_len(), 4);
        // Too large to be indexed.
        let large = HeaderField::new(vec![b'a'; 256], vec![b'a'; 256]);
        encoder.encode(&[large]).unwrap();
        assert_eq!(encoder.table_len(), 4);
        assert_eq!(encoder.advertised_table_size(), 156);

        let mut encoder = HpackEncoder::with_table_size(Side::Request, 155).unwrap();
        encoder.encode(&fields(&pairs)).unwrap();
        assert_eq!(encoder.table_len(), 4);
        assert_eq!(encoder.advertised_len(), 3);
        assert_eq!(encoder.advertised_table_size(), 120);
        assert_eq!(encoder.get(3), None);

        encoder
            .encode(&fields(&[("k10", "v10"), ("k1", "v1")]))
            .unwrap();
        assert_eq!(encoder.table_len(), 5);
        assert_eq!(encoder.advertised_len(), 3);
        assert_eq!(encoder.advertised_table_size(), 118);
        assert_eq!(encoder.get(0), Some(&HeaderField::new("k1", "v1")));
        assert_eq!(encoder.get(3), None);
        assert_eq!(encoder.get(4), None);
    }

    /// UT test cases for `HpackEncoder::change_table_size`.
    ///
    /// # Brief
    /// 1. Grows the table, encodes a list, then shrinks the table to 0.
    /// 2. Checks the capacity, the length and that literals are used after.
    #[test]
    fn ut_hpack_encoder_change_table_size() {
        let mut encoder = HpackEncoder::new(Side::Request).unwrap();
        encoder.change_table_size(8000).unwrap();
        assert_eq!(encoder.table_capacity(), 256);
        assert_eq!(encoder.table_max(), 8000);
        assert_eq!(encoder.advertised_table_max(), 4096);

        encoder
            .encode(&fields(&[(":method", "GET"), (":path", "/")]))
            .unwrap();
        assert_eq!(encoder.table_len(), 2);

        encoder.change_table_size(16384).unwrap();
        assert_eq!(encoder.table_capacity(), 512);
        assert_eq!(encoder.table_len(), 2);
        assert_eq!(encoder.advertised_len(), 2);
        assert_eq!(encoder.get(0).map(|field| field.name().len()), Some(5));

        encoder.change_table_size(0).unwrap();
        assert_eq!(encoder.table_capacity(), 512);
        assert_eq!(encoder.table_len(), 0);
        assert_eq!(encoder.advertised_len(), 0);
        assert_eq!(encoder.advertised_table_max(), 0);

        let block = encoder.encode(&fields(&[(":method", "GET")])).unwrap();
        assert_eq!(block, [0x82]);
        assert_eq!(encoder.table_len(), 0);
    }

    /// UT test cases for the reference set mode of `HpackEncoder`.
    ///
    /// # Brief
    /// 1. Encodes the same list twice with the reference set disabled.
    /// 2. Checks that every block starts by emptying the reference set and
    ///    sends every field.
    #[test]
    fn ut_hpack_encoder_no_reference_set() {
        let mut encoder = EncoderBuilder::new().no_reference_set(true).build().unwrap();
        let list = fields(&[(":path", "/"), (":scheme", "http")]);
        assert_eq!(encoder.encode(&list).unwrap(), [0x80, 0x84, 0x87]);
        assert_eq!(encoder.encode(&list).unwrap(), [0x80, 0x82, 0x81]);
        assert_eq!(encoder.encode(&list).unwrap(), [0x80, 0x82, 0x81]);

        // Both entries were left in the reference set by the last block.
        encoder.set_no_reference_set(false);
        assert!(encoder.encode(&list).unwrap().is_empty());
    }

    /// UT test cases for `HpackEncoder` errors.
    ///
    /// # Brief
    /// 1. Encodes an empty name, then a block above the maximum size.
    /// 2. Checks the errors, the restored buffer and the poisoned state.
    #[test]
    fn ut_hpack_encoder_errors() {
        let mut encoder = HpackEncoder::new(Side::Request).unwrap();
        let mut dst = vec![0u8; 9];
        assert_eq!(
            encoder.encode_into(&mut dst, &fields(&[(":method", "GET"), ("", "x")])),
            Err(HpackError::HeaderCompression(CompressionCause::EmptyName))
        );
        assert_eq!(dst, [0u8; 9]);
        assert!(encoder.is_poisoned());
        assert_eq!(
            encoder.encode(&fields(&[(":method", "GET")])),
            Err(HpackError::HeaderCompression(CompressionCause::Poisoned))
        );
        assert_eq!(
            encoder.change_table_size(0),
            Err(HpackError::HeaderCompression(CompressionCause::Poisoned))
        );

        let mut encoder = EncoderBuilder::new().max_block_size(4).build().unwrap();
        assert_eq!(
            encoder.encode(&fields(&[("custom-key", "custom-value")])),
            Err(HpackError::HeaderCompression(CompressionCause::BlockTooLarge))
        );
        assert!(encoder.is_poisoned());
    }

    /// UT test cases for `HpackEncoder::encode_into`.
    ///
    /// # Brief
    /// 1. Encodes a list behind a prefix already in the buffer.
    /// 2. Checks the returned length and the prefix.
    #[test]
    fn ut_hpack_encoder_encode_into() {
        let mut encoder = HpackEncoder::new(Side::Response).unwrap();
        let mut dst = vec![0xff; 9];
        let len = encoder
            .encode_into(&mut dst, &fields(&[(":status", "200")]))
            .unwrap();
        assert_eq!(len, 1);
        assert_eq!(dst.len(), 10);
        assert_eq!(&dst[..9], [0xff; 9]);
        assert_eq!(dst[9], 0x88);
    }
}
