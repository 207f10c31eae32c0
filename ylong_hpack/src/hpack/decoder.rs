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

use bytes::Bytes;

use crate::error::{CompressionCause, HpackError};
use crate::hpack::context::{Added, Context};
use crate::hpack::representation::{Limits, Name, ReprDecoder, Representation};
use crate::hpack::table::StaticTable;
use crate::hpack::{DecoderBuilder, HeaderField, Side};

/// Result of one call to [`HpackDecoder::decode`].
///
/// [`HpackDecoder::decode`]: HpackDecoder::decode
#[derive(Debug, Eq, PartialEq)]
pub enum DecodeStatus<'a> {
    /// A header field has been decoded. It is borrowed from the decoder until
    /// the next call.
    Emitted(&'a HeaderField),
    /// All the input has been consumed and more is needed.
    NeedMore,
    /// The header block is complete.
    Finished,
}

enum Progress {
    Emitted,
    NeedMore,
    Finished,
}

/// Decoder of header blocks.
///
/// A header block may be split into any number of chunks. Each call to
/// `decode` consumes input until a header field is complete and returns it,
/// so callers loop until `Finished`, passing the unconsumed part of the chunk
/// again. Once the last chunk has been consumed, the fields kept in the
/// reference set from the previous block are emitted too.
///
/// Any error poisons the decoder, and all further calls fail with
/// `Poisoned`.
///
/// # Examples
///
/// ```
/// use ylong_hpack::{DecodeStatus, HeaderField, HpackDecoder, Side};
///
/// let mut decoder = HpackDecoder::new(Side::Request).unwrap();
/// let (consumed, status) = decoder.decode(&[0x82], true).unwrap();
/// assert_eq!(consumed, 1);
/// assert_eq!(status, DecodeStatus::Emitted(&HeaderField::new(":method", "GET")));
///
/// let (_, status) = decoder.decode(&[], true).unwrap();
/// assert_eq!(status, DecodeStatus::Finished);
/// decoder.end_headers();
/// ```
pub struct HpackDecoder {
    ctx: Context,
    repr: ReprDecoder,
    keep: Option<HeaderField>,
    end_headers_index: usize,
}

impl HpackDecoder {
    /// Creates a `HpackDecoder` with default settings.
    pub fn new(side: Side) -> Result<Self, HpackError> {
        DecoderBuilder::new().side(side).build()
    }

    /// Creates a `HpackDecoder` whose dynamic table holds `size` octets.
    pub fn with_table_size(side: Side, size: usize) -> Result<Self, HpackError> {
        DecoderBuilder::new().side(side).table_size(size).build()
    }

    pub(crate) fn from_parts(ctx: Context, limits: Limits) -> Self {
        Self {
            ctx,
            repr: ReprDecoder::new(limits),
            keep: None,
            end_headers_index: 0,
        }
    }

    /// Decodes the front of `src` and returns the number of octets consumed
    /// with the decoding status. `is_final` tells that `src` ends the header
    /// block.
    ///
    /// The header field returned by a previous call is released first.
    pub fn decode(
        &mut self,
        src: &[u8],
        is_final: bool,
    ) -> Result<(usize, DecodeStatus<'_>), HpackError> {
        self.keep = None;
        self.ctx.check()?;
        let mut buf = src;
        let progress = match self.inflate(&mut buf, is_final) {
            Ok(progress) => progress,
            Err(err) => {
                self.ctx.poison(&err);
                return Err(err);
            }
        };
        let consumed = src.len() - buf.len();
        let status = match (progress, self.keep.as_ref()) {
            (Progress::Emitted, Some(field)) => DecodeStatus::Emitted(field),
            (Progress::Finished, _) => DecodeStatus::Finished,
            _ => DecodeStatus::NeedMore,
        };
        Ok((consumed, status))
    }

    /// Prepares the decoder for the next header block. Called once `decode`
    /// returned `Finished`.
    pub fn end_headers(&mut self) {
        self.keep = None;
        self.end_headers_index = 0;
    }

    /// Changes the size of the dynamic table. Entries which no longer fit are
    /// evicted.
    pub fn change_table_size(&mut self, size: usize) -> Result<(), HpackError> {
        self.ctx.check()?;
        let result = self.ctx.change_table_size(size);
        if let Err(err) = &result {
            self.ctx.poison(err);
        }
        result
    }

    /// Endpoint type of the decoder.
    pub fn side(&self) -> Side {
        self.ctx.side()
    }

    /// Checks if a previous error made the decoder unusable.
    pub fn is_poisoned(&self) -> bool {
        self.ctx.is_bad()
    }

    /// Number of entries in the dynamic table.
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

    /// Number of entries the dynamic table can hold without growing.
    pub fn table_capacity(&self) -> usize {
        self.ctx.capacity()
    }

    /// Gets the header field at `index` of the dynamic table followed by the
    /// static table.
    pub fn get(&self, index: usize) -> Option<&HeaderField> {
        self.ctx.field(index)
    }

    fn inflate(&mut self, buf: &mut &[u8], is_final: bool) -> Result<Progress, HpackError> {
        while !buf.is_empty() {
            match self.repr.decode(buf)? {
                Some(repr) => {
                    if self.update(repr)? {
                        return Ok(Progress::Emitted);
                    }
                }
                None => break,
            }
        }
        if !is_final {
            return Ok(Progress::NeedMore);
        }
        if !self.repr.is_idle() {
            return Err(CompressionCause::IncompleteBlock.into());
        }

        // Emits the entries of the reference set the block did not touch.
        while let Some(entry) = self.ctx.get_mut(self.end_headers_index) {
            self.end_headers_index += 1;
            let state = &mut entry.state;
            let carried = state.in_refset && !state.emitted;
            state.emitted = false;
            if let (true, Some(field)) = (carried, entry.field()) {
                let field = field.clone();
                self.emit(field);
                return Ok(Progress::Emitted);
            }
        }
        Ok(Progress::Finished)
    }

    /// Applies one representation to the dynamic table. Returns `true` if a
    /// header field has been emitted.
    fn update(&mut self, repr: Representation) -> Result<bool, HpackError> {
        match repr {
            Representation::ClearReferenceSet => {
                self.ctx.clear_refset();
                Ok(false)
            }
            Representation::Indexed { index } => self.update_indexed(index),
            Representation::LiteralWithIndexing { name, value } => {
                let name = self.resolve_name(name)?;
                let field = HeaderField::new(name, value);
                let added = self.ctx.add(field.clone(), None)?;
                self.mark_emitted(added);
                self.emit(field);
                Ok(true)
            }
            Representation::LiteralWithoutIndexing { name, value } => {
                let name = self.resolve_name(name)?;
                self.emit(HeaderField::new(name, value));
                Ok(true)
            }
        }
    }

    fn update_indexed(&mut self, index: usize) -> Result<bool, HpackError> {
        self.check_index(index)?;
        let len = self.ctx.len();
        if index >= len {
            let field = StaticTable::get(index - len)
                .ok_or(CompressionCause::IndexOutOfRange)?
                .field()
                .clone();
            let added = self.ctx.add(field.clone(), None)?;
            self.mark_emitted(added);
            self.emit(field);
            return Ok(true);
        }

        let entry = self
            .ctx
            .get_mut(index)
            .ok_or(CompressionCause::IndexOutOfRange)?;
        entry.state.in_refset = !entry.state.in_refset;
        if !entry.state.in_refset {
            return Ok(false);
        }
        entry.state.emitted = true;
        let field = entry
            .field()
            .ok_or(CompressionCause::IndexOutOfRange)?
            .clone();
        self.emit(field);
        Ok(true)
    }

    fn resolve_name(&self, name: Name) -> Result<Bytes, HpackError> {
        match name {
            Name::Index(index) => {
                self.check_index(index)?;
                let field = self
                    .ctx
                    .field(index)
                    .ok_or(CompressionCause::IndexOutOfRange)?;
                Ok(field.name_bytes().clone())
            }
            Name::Literal(octets) => Ok(Bytes::from(octets)),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), HpackError> {
        match index < self.ctx.max_index() {
            true => Ok(()),
            false => Err(CompressionCause::IndexOutOfRange.into()),
        }
    }

    fn mark_emitted(&mut self, added: Added) {
        if added == Added::Inserted {
            if let Some(entry) = self.ctx.get_mut(0) {
                entry.state.emitted = true;
            }
        }
    }

    fn emit(&mut self, field: HeaderField) {
        log::trace!(
            "emit header field {}: {} octets",
            String::from_utf8_lossy(field.name()),
            field.value().len()
        );
        self.keep = Some(field);
    }
}

#[cfg(test)]
mod ut_hpack_decoder {
    use crate::error::{CompressionCause, HpackError};
    use crate::hpack::representation::BlockWriter;
    use crate::{DecodeStatus, DecoderBuilder, HeaderField, HpackDecoder, HpackEncoder, Side};

    /// Decodes a complete header block.
    fn inflate(decoder: &mut HpackDecoder, mut block: &[u8]) -> Vec<HeaderField> {
        let mut fields = Vec::new();
        loop {
            let (consumed, status) = decoder.decode(block, true).unwrap();
            block = &block[consumed..];
            match status {
                DecodeStatus::Emitted(field) => fields.push(field.clone()),
                DecodeStatus::Finished => break,
                DecodeStatus::NeedMore => panic!("final chunk needs more input"),
            }
        }
        assert!(block.is_empty());
        decoder.end_headers();
        fields
    }

    fn build_block(write: impl FnOnce(&mut BlockWriter<'_>)) -> Vec<u8> {
        let mut vec = Vec::new();
        let mut writer = BlockWriter::new(&mut vec, 1 << 16);
        write(&mut writer);
        vec
    }

    /// UT test cases for literals with an indexed name and no indexing.
    ///
    /// # Brief
    /// 1. Decodes literals referring to the static name `user-agent`.
    /// 2. Checks the fields and that the dynamic table stays empty.
    #[test]
    fn ut_hpack_decoder_indname_noinc() {
        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        for value in ["nghttp2", "x"] {
            let block = build_block(|w| w.indexed_name(56, value.as_bytes(), false).unwrap());
            let fields = inflate(&mut decoder, &block);
            assert_eq!(fields, [HeaderField::new("user-agent", value)]);
            assert_eq!(decoder.table_len(), 0);
        }
    }

    /// UT test cases for literals with an indexed name and indexing.
    ///
    /// # Brief
    /// 1. Decodes a literal referring to the static name `user-agent`.
    /// 2. Checks the field and the new dynamic entry.
    #[test]
    fn ut_hpack_decoder_indname_inc() {
        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        let block = build_block(|w| w.indexed_name(56, b"nghttp2", true).unwrap());
        let field = HeaderField::new("user-agent", "nghttp2");
        assert_eq!(inflate(&mut decoder, &block), [field.clone()]);
        assert_eq!(decoder.table_len(), 1);
        assert_eq!(decoder.get(0), Some(&field));
        assert_eq!(decoder.table_size(), 49);
    }

    /// UT test cases for literals with indexing which evict entries.
    ///
    /// # Brief
    /// 1. Decodes four literals of about 1 KiB in one block.
    /// 2. Checks that all of them are emitted and only three are kept.
    #[test]
    fn ut_hpack_decoder_indname_inc_eviction() {
        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        let value = [b'0'; 1024];
        let block = build_block(|w| {
            for index in 13..17 {
                w.indexed_name(index, &value, true).unwrap();
            }
        });
        let fields = inflate(&mut decoder, &block);
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].name(), b"accept-charset");
        assert_eq!(fields[0].value().len(), 1024);
        assert_eq!(decoder.table_len(), 3);
        assert!(decoder.ctx.get(0).unwrap().state.in_refset);
    }

    /// UT test cases for literals with a new name.
    ///
    /// # Brief
    /// 1. Decodes literals with and without Huffman strings, without
    ///    indexing, then one with indexing.
    /// 2. Checks the fields and the dynamic table.
    #[test]
    fn ut_hpack_decoder_newname() {
        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        let cases = [
            ("my-long-content-length", "nghttp2"),
            ("x", "y"),
            ("my-long-content-length", "y"),
            ("x", "nghttp2"),
        ];
        for (name, value) in cases {
            let block =
                build_block(|w| w.new_name(name.as_bytes(), value.as_bytes(), false).unwrap());
            assert_eq!(inflate(&mut decoder, &block), [HeaderField::new(name, value)]);
            assert_eq!(decoder.table_len(), 0);
        }

        let block = build_block(|w| w.new_name(b"x-rel", b"nghttp2", true).unwrap());
        let field = HeaderField::new("x-rel", "nghttp2");
        assert_eq!(inflate(&mut decoder, &block), [field.clone()]);
        assert_eq!(decoder.table_len(), 1);
        assert_eq!(decoder.get(0), Some(&field));
    }

    /// UT test cases for an entry larger than the dynamic table.
    ///
    /// # Brief
    /// 1. Decodes a literal with indexing of 4097 octets, twice.
    /// 2. Checks that it is emitted but not stored.
    /// 3. Decodes one of exactly 4096 octets and checks that it is stored.
    #[test]
    fn ut_hpack_decoder_clearall_inc() {
        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        let value = vec![b'0'; 4060];
        let block_too_large = build_block(|w| w.new_name(b"alpha", &value, true).unwrap());
        for _ in 0..2 {
            let fields = inflate(&mut decoder, &block_too_large);
            assert_eq!(fields, [HeaderField::new("alpha", value.clone())]);
            assert_eq!(decoder.table_len(), 0);
        }

        let block_fit = build_block(|w| w.new_name(b"alpha", &value[1..], true).unwrap());
        let fields = inflate(&mut decoder, &block_fit);
        assert_eq!(fields.len(), 1);
        assert_eq!(decoder.table_len(), 1);
        assert_eq!(decoder.table_size(), 4096);
    }

    /// UT test cases for an empty Huffman string.
    ///
    /// # Brief
    /// 1. Decodes a literal whose value is an empty Huffman string.
    /// 2. Checks the field.
    #[test]
    fn ut_hpack_decoder_zero_length_huffman() {
        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        let fields = inflate(&mut decoder, &[0x40, 0x01, b'x', 0x80]);
        assert_eq!(fields, [HeaderField::new("x", "")]);
    }

    /// UT test cases for the reference set of `HpackDecoder`.
    ///
    /// # Brief
    /// 1. Decodes a block which promotes a static entry.
    /// 2. Decodes an empty block and checks the entry is emitted again.
    /// 3. Toggles it off, then empties the reference set, and checks that
    ///    nothing is emitted any more.
    #[test]
    fn ut_hpack_decoder_reference_set() {
        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        let method = HeaderField::new(":method", "GET");
        assert_eq!(inflate(&mut decoder, &[0x82]), [method.clone()]);
        assert_eq!(inflate(&mut decoder, &[]), [method.clone()]);
        assert_eq!(inflate(&mut decoder, &[0x81]), []);
        assert_eq!(inflate(&mut decoder, &[]), []);

        assert_eq!(inflate(&mut decoder, &[0x81]), [method.clone()]);
        assert_eq!(inflate(&mut decoder, &[0x80]), []);
        assert_eq!(decoder.table_len(), 1);
    }

    /// UT test cases for `HpackDecoder::decode` with split input.
    ///
    /// # Brief
    /// 1. Encodes a header list.
    /// 2. Decodes the block one octet at a time.
    /// 3. Checks the fields and the statuses.
    #[test]
    fn ut_hpack_decoder_split() {
        let list = [
            HeaderField::new(":method", "GET"),
            HeaderField::new(":path", "/index.html"),
            HeaderField::new("custom-key", "custom-value"),
            HeaderField::new("user-agent", "nghttp2"),
        ];
        let mut encoder = HpackEncoder::new(Side::Request).unwrap();
        let block = encoder.encode(&list).unwrap();

        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        let mut fields = Vec::new();
        for (i, octet) in block.iter().enumerate() {
            let is_final = i + 1 == block.len();
            let (consumed, status) = decoder.decode(&[*octet], is_final).unwrap();
            assert_eq!(consumed, 1);
            match status {
                DecodeStatus::Emitted(field) => fields.push(field.clone()),
                DecodeStatus::NeedMore => assert!(!is_final),
                DecodeStatus::Finished => panic!("finished before the end"),
            }
        }
        loop {
            match decoder.decode(&[], true).unwrap() {
                (0, DecodeStatus::Emitted(field)) => fields.push(field.clone()),
                (0, DecodeStatus::Finished) => break,
                _ => panic!("unexpected status"),
            }
        }
        assert_eq!(fields, list);
    }

    /// UT test cases for `HpackDecoder` errors.
    ///
    /// # Brief
    /// 1. Decodes an index out of range, a truncated block and a name above
    ///    the limit.
    /// 2. Checks the errors and that the decoder is poisoned.
    #[test]
    fn ut_hpack_decoder_errors() {
        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        assert_eq!(
            decoder.decode(&[0xbc], true).unwrap().1,
            DecodeStatus::Emitted(&HeaderField::new("www-authenticate", ""))
        );
        decoder.end_headers();
        // One dynamic entry, so index 61 is the first invalid one.
        assert_eq!(
            decoder.decode(&[0xbe], true),
            Err(HpackError::HeaderCompression(CompressionCause::IndexOutOfRange))
        );
        assert!(decoder.is_poisoned());
        assert_eq!(
            decoder.decode(&[0x82], true),
            Err(HpackError::HeaderCompression(CompressionCause::Poisoned))
        );

        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        assert_eq!(
            decoder.decode(&[0x40, 0x05, b'a'], true),
            Err(HpackError::HeaderCompression(CompressionCause::IncompleteBlock))
        );

        let mut decoder = DecoderBuilder::new().max_name_len(4).build().unwrap();
        assert_eq!(
            decoder.decode(&[0x40, 0x05, b'a'], false),
            Err(HpackError::HeaderCompression(CompressionCause::NameTooLong))
        );
        assert!(decoder.is_poisoned());

        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        assert_eq!(
            decoder.decode(&[0x7f, 0x00, 0x01, b'x'], true),
            Err(HpackError::HeaderCompression(CompressionCause::IndexOutOfRange))
        );
    }

    /// UT test cases for `HpackDecoder::decode` with a padded name length.
    ///
    /// # Brief
    /// 1. Decodes a new-name literal whose length of 127 is followed by zero
    ///    continuation groups.
    /// 2. Checks that the field is emitted and the decoder stays usable.
    #[test]
    fn ut_hpack_decoder_padded_length() {
        let mut block = vec![0x40, 0x7f, 0x80, 0x80, 0x80, 0x00];
        block.extend_from_slice(&[b'a'; 127]);
        block.push(0x00);

        let mut decoder = HpackDecoder::new(Side::Request).unwrap();
        let (consumed, status) = decoder.decode(&block, true).unwrap();
        assert_eq!(consumed, block.len());
        assert_eq!(
            status,
            DecodeStatus::Emitted(&HeaderField::new(vec![b'a'; 127], ""))
        );
        assert_eq!(decoder.decode(&[], true).unwrap().1, DecodeStatus::Finished);
        assert!(!decoder.is_poisoned());
        assert_eq!(decoder.table_len(), 0);
    }

    /// UT test cases for `HpackDecoder::change_table_size`.
    ///
    /// # Brief
    /// 1. Fills the table, then grows and shrinks it.
    /// 2. Checks the capacity, evictions and idempotence.
    #[test]
    fn ut_hpack_decoder_change_table_size() {
        let mut decoder = HpackDecoder::new(Side::Response).unwrap();
        assert_eq!(decoder.side(), Side::Response);
        inflate(&mut decoder, &[0x88, 0x83]);
        assert_eq!(decoder.table_len(), 2);

        decoder.change_table_size(8000).unwrap();
        assert_eq!(decoder.table_capacity(), 256);
        decoder.change_table_size(8000).unwrap();
        assert_eq!(decoder.table_capacity(), 256);
        assert_eq!(decoder.table_len(), 2);
        assert_eq!(decoder.get(0), Some(&HeaderField::new(":method", "GET")));

        // `:method: GET` takes 42 octets and is the newest entry.
        decoder.change_table_size(42).unwrap();
        assert_eq!(decoder.table_len(), 1);
        assert_eq!(decoder.get(0), Some(&HeaderField::new(":method", "GET")));
        assert_eq!(decoder.table_max(), 42);

        decoder.change_table_size(0).unwrap();
        assert_eq!(decoder.table_len(), 0);
        assert_eq!(decoder.table_size(), 0);
    }
}
