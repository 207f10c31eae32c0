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

use core::cmp::Ordering;

use crate::error::{CompressionCause, HpackError};
use crate::hpack::integer::IntegerDecoder;
use crate::hpack::representation::{Name, PrefixBit, PrefixIndexMask, Representation};
use crate::huffman::{HuffmanDecodeError, HuffmanDecoder};

/// Length limits applied to decoded literal strings.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Limits {
    pub(crate) max_name_len: usize,
    pub(crate) max_value_len: usize,
}

impl Limits {
    fn name(&self) -> StringLimit {
        StringLimit {
            max: self.max_name_len,
            cause: CompressionCause::NameTooLong,
        }
    }

    fn value(&self) -> StringLimit {
        StringLimit {
            max: self.max_value_len,
            cause: CompressionCause::ValueTooLong,
        }
    }
}

#[derive(Copy, Clone)]
struct StringLimit {
    max: usize,
    cause: CompressionCause,
}

/// Decoder of representations. Every time users call `decode`, it tries to
/// decode one `Representation` from the front of the input. When the input
/// ends in the middle of a representation, the partial state is kept and
/// decoding resumes with the next input.
pub(crate) struct ReprDecoder {
    state: Option<ReprDecodeState>,
    limits: Limits,
}

impl ReprDecoder {
    /// Creates a new `ReprDecoder` without partial state.
    pub(crate) fn new(limits: Limits) -> Self {
        Self {
            state: None,
            limits,
        }
    }

    /// Checks if the decoder stands between two representations.
    pub(crate) fn is_idle(&self) -> bool {
        self.state.is_none()
    }

    /// Decodes the front of `buf`, moving `buf` past the consumed octets.
    pub(crate) fn decode(&mut self, buf: &mut &[u8]) -> Result<Option<Representation>, HpackError> {
        // If buf is empty, leave the state unchanged.
        if buf.is_empty() {
            return Ok(None);
        }

        let state = self
            .state
            .take()
            .unwrap_or_else(|| Index::new(self.limits).into());
        match state.decode(buf) {
            DecResult::NeedMore(state) => {
                self.state = Some(state);
                Ok(None)
            }
            DecResult::Decoded(repr) => Ok(Some(repr)),
            DecResult::Error(error) => Err(error),
        }
    }
}

macro_rules! state_def {
    ($name: ident, $decoded: ty, $($state: ident),* $(,)?) => {
        pub(crate) enum $name {
            $(
                $state($state),
            )*
        }

        impl $name {
            fn decode(self, buf: &mut &[u8]) -> DecResult<$decoded, $name> {
                match self {
                    $(
                        Self::$state(state) => state.decode(buf),
                    )*
                }
            }
        }

        $(
            impl From<$state> for $name {
                fn from(s: $state) -> Self {
                    Self::$state(s)
                }
            }
        )*
    }
}

// `Representation` decoding state diagram:
//
//                    ┌ `Index` ─ `IndexInner` ┬ `FirstByte`
//                    │                        └ `TrailingBytes`
//                    │
// `ReprDecodeState`  ┼ `NameString`  ┐                 ┌ `LengthFirstByte`
//                    │               ├ `LiteralString` ┼ `LengthTrailingBytes`
//                    └ `ValueString` ┘                 ├ `AsciiStringBytes`
//                                                      └ `HuffmanStringBytes`

state_def!(
    ReprDecodeState,
    Representation,
    Index,
    NameString,
    ValueString
);

state_def!(IndexInner, (PrefixBit, usize), FirstByte, TrailingBytes);

state_def!(
    LiteralString,
    Vec<u8>,
    LengthFirstByte,
    LengthTrailingBytes,
    AsciiStringBytes,
    HuffmanStringBytes,
);

/// `Index` decodes the opcode and the index following it.
pub(crate) struct Index {
    limits: Limits,
    inner: IndexInner,
}

impl Index {
    fn new(limits: Limits) -> Self {
        Self::from_inner(limits, FirstByte.into())
    }

    fn from_inner(limits: Limits, inner: IndexInner) -> Self {
        Self { limits, inner }
    }

    fn decode(self, buf: &mut &[u8]) -> DecResult<Representation, ReprDecodeState> {
        match self.inner.decode(buf) {
            DecResult::Decoded((PrefixBit::INDEXED, 0)) => {
                DecResult::Decoded(Representation::ClearReferenceSet)
            }
            DecResult::Decoded((PrefixBit::INDEXED, index)) => {
                DecResult::Decoded(Representation::Indexed { index: index - 1 })
            }
            DecResult::Decoded((repr, 0)) => NameString::new(repr, self.limits).decode(buf),
            DecResult::Decoded((repr, index)) => {
                ValueString::new(repr, Name::Index(index - 1), self.limits).decode(buf)
            }
            DecResult::NeedMore(inner) => {
                DecResult::NeedMore(Index::from_inner(self.limits, inner).into())
            }
            DecResult::Error(e) => e.into(),
        }
    }
}

/// `NameString` decodes the name string of a literal with a new name.
pub(crate) struct NameString {
    repr: PrefixBit,
    limits: Limits,
    inner: LiteralString,
}

impl NameString {
    fn new(repr: PrefixBit, limits: Limits) -> Self {
        Self::from_inner(repr, limits, LengthFirstByte::new(limits.name()).into())
    }

    fn from_inner(repr: PrefixBit, limits: Limits, inner: LiteralString) -> Self {
        Self {
            repr,
            limits,
            inner,
        }
    }

    fn decode(self, buf: &mut &[u8]) -> DecResult<Representation, ReprDecodeState> {
        match self.inner.decode(buf) {
            DecResult::Decoded(octets) if octets.is_empty() => CompressionCause::EmptyName.into(),
            DecResult::Decoded(octets) => {
                ValueString::new(self.repr, Name::Literal(octets), self.limits).decode(buf)
            }
            DecResult::NeedMore(inner) => {
                DecResult::NeedMore(Self::from_inner(self.repr, self.limits, inner).into())
            }
            DecResult::Error(e) => e.into(),
        }
    }
}

/// `ValueString` decodes the value string of a literal.
pub(crate) struct ValueString {
    repr: PrefixBit,
    name: Name,
    inner: LiteralString,
}

impl ValueString {
    fn new(repr: PrefixBit, name: Name, limits: Limits) -> Self {
        Self::from_inner(repr, name, LengthFirstByte::new(limits.value()).into())
    }

    fn from_inner(repr: PrefixBit, name: Name, inner: LiteralString) -> Self {
        Self { repr, name, inner }
    }

    fn decode(self, buf: &mut &[u8]) -> DecResult<Representation, ReprDecodeState> {
        match (self.repr, self.inner.decode(buf)) {
            (PrefixBit::LITERAL_WITH_INDEXING, DecResult::Decoded(value)) => {
                DecResult::Decoded(Representation::LiteralWithIndexing {
                    name: self.name,
                    value,
                })
            }
            (_, DecResult::Decoded(value)) => {
                DecResult::Decoded(Representation::LiteralWithoutIndexing {
                    name: self.name,
                    value,
                })
            }
            (_, DecResult::NeedMore(inner)) => {
                DecResult::NeedMore(Self::from_inner(self.repr, self.name, inner).into())
            }
            (_, DecResult::Error(e)) => e.into(),
        }
    }
}

/// `FirstByte` decodes the opcode octet and the integer prefix it carries.
///
/// # Binary Format
/// ```text
/// Bytes list:
/// +--------+----------------------+
/// | Prefix |         Index        |
/// +--------+----------------------+
/// |      (trailing bytes)...      |
/// +--------+----------------------+
/// ```
pub(crate) struct FirstByte;

impl FirstByte {
    fn decode(self, buf: &mut &[u8]) -> DecResult<(PrefixBit, usize), IndexInner> {
        if buf.is_empty() {
            return DecResult::NeedMore(self.into());
        }

        let byte = buf[0];
        let repr = PrefixBit::from_u8(byte);
        let mask = repr.prefix_index_mask();

        *buf = &buf[1..];
        match IntegerDecoder::first_byte(byte, mask.0) {
            Ok(idx) => DecResult::Decoded((repr, idx)),
            Err(int) => TrailingBytes::new(repr, int).decode(buf),
        }
    }
}

/// `TrailingBytes` decodes the continuation octets of an index.
pub(crate) struct TrailingBytes {
    repr: PrefixBit,
    index: IntegerDecoder,
}

impl TrailingBytes {
    fn new(repr: PrefixBit, index: IntegerDecoder) -> Self {
        Self { repr, index }
    }

    fn decode(mut self, buf: &mut &[u8]) -> DecResult<(PrefixBit, usize), IndexInner> {
        loop {
            if buf.is_empty() {
                return DecResult::NeedMore(self.into());
            }

            let byte = buf[0];
            *buf = &buf[1..];
            match self.index.next_byte(byte) {
                Ok(None) => {}
                Ok(Some(index)) => return DecResult::Decoded((self.repr, index)),
                Err(e) => return e.into(),
            }
        }
    }
}

/// `LengthFirstByte` decodes the first octet of a string length.
///
/// # Binary Format
/// ```text
/// Bytes list:
/// +---+---------------------------+
/// | H |           Length          |
/// +---+---------------------------+
/// |      (trailing bytes)...      |
/// +--------+----------------------+
/// ```
pub(crate) struct LengthFirstByte {
    limit: StringLimit,
}

impl LengthFirstByte {
    fn new(limit: StringLimit) -> Self {
        Self { limit }
    }

    fn decode(self, buf: &mut &[u8]) -> DecResult<Vec<u8>, LiteralString> {
        if buf.is_empty() {
            return DecResult::NeedMore(self.into());
        }

        let byte = buf[0];
        *buf = &buf[1..];
        let is_huffman = (byte & 0x80) == 0x80;
        match IntegerDecoder::first_byte(byte, PrefixIndexMask::STRING_LENGTH.0) {
            Ok(len) => string_bytes(is_huffman, len, self.limit, buf),
            Err(int) => LengthTrailingBytes::new(is_huffman, int, self.limit).decode(buf),
        }
    }
}

/// `LengthTrailingBytes` decodes the continuation octets of a string length.
pub(crate) struct LengthTrailingBytes {
    is_huffman: bool,
    length: IntegerDecoder,
    limit: StringLimit,
}

impl LengthTrailingBytes {
    fn new(is_huffman: bool, length: IntegerDecoder, limit: StringLimit) -> Self {
        Self {
            is_huffman,
            length,
            limit,
        }
    }

    fn decode(mut self, buf: &mut &[u8]) -> DecResult<Vec<u8>, LiteralString> {
        loop {
            if buf.is_empty() {
                return DecResult::NeedMore(self.into());
            }

            let byte = buf[0];
            *buf = &buf[1..];
            match self.length.next_byte(byte) {
                Ok(None) => {}
                Ok(Some(length)) => return string_bytes(self.is_huffman, length, self.limit, buf),
                Err(e) => return e.into(),
            }
        }
    }
}

fn string_bytes(
    is_huffman: bool,
    length: usize,
    limit: StringLimit,
    buf: &mut &[u8],
) -> DecResult<Vec<u8>, LiteralString> {
    // The limit bounds the encoded length, Huffman or not. Decoded Huffman
    // octets are checked against it again while they are produced.
    if length > limit.max {
        return limit.cause.into();
    }
    match is_huffman {
        true => HuffmanStringBytes::new(length, limit).decode(buf),
        false => match AsciiStringBytes::new(length) {
            Ok(state) => state.decode(buf),
            Err(e) => e.into(),
        },
    }
}

/// `AsciiStringBytes` copies the octets of a raw string literal.
pub(crate) struct AsciiStringBytes {
    octets: Vec<u8>,
    length: usize,
}

impl AsciiStringBytes {
    fn new(length: usize) -> Result<Self, HpackError> {
        let mut octets = Vec::new();
        octets.try_reserve_exact(length)?;
        Ok(Self { octets, length })
    }

    fn decode(mut self, buf: &mut &[u8]) -> DecResult<Vec<u8>, LiteralString> {
        match (buf.len() + self.octets.len()).cmp(&self.length) {
            Ordering::Greater | Ordering::Equal => {
                let pos = self.length - self.octets.len();
                self.octets.extend_from_slice(&buf[..pos]);
                *buf = &buf[pos..];
                DecResult::Decoded(self.octets)
            }
            Ordering::Less => {
                self.octets.extend_from_slice(buf);
                *buf = &buf[buf.len()..];
                DecResult::NeedMore(self.into())
            }
        }
    }
}

/// `HuffmanStringBytes` decodes the octets of a Huffman encoded string
/// literal.
pub(crate) struct HuffmanStringBytes {
    huffman: HuffmanDecoder,
    read: usize,
    length: usize,
    limit: StringLimit,
}

impl HuffmanStringBytes {
    fn new(length: usize, limit: StringLimit) -> Self {
        Self {
            huffman: HuffmanDecoder::new(),
            read: 0,
            length,
            limit,
        }
    }

    fn feed(&mut self, src: &[u8]) -> Result<(), HpackError> {
        self.huffman.decode(src).map_err(huffman_error)?;
        self.read += src.len();
        if self.huffman.len() > self.limit.max {
            return Err(self.limit.cause.into());
        }
        Ok(())
    }

    fn decode(mut self, buf: &mut &[u8]) -> DecResult<Vec<u8>, LiteralString> {
        let pos = buf.len().min(self.length - self.read);
        if let Err(e) = self.feed(&buf[..pos]) {
            return e.into();
        }
        *buf = &buf[pos..];
        if self.read < self.length {
            return DecResult::NeedMore(self.into());
        }
        match self.huffman.finish() {
            Ok(vec) => DecResult::Decoded(vec),
            Err(e) => huffman_error(e).into(),
        }
    }
}

fn huffman_error(err: HuffmanDecodeError) -> HpackError {
    match err {
        HuffmanDecodeError::InvalidHuffmanCode => CompressionCause::InvalidHuffmanCode.into(),
        HuffmanDecodeError::OutOfMemory => HpackError::OutOfMemory,
    }
}

/// Decoder's possible returns during the decoding process.
enum DecResult<D, S> {
    /// Decoder has got a `D`. Users can continue to call `encode` to try to
    /// get the next `D`.
    Decoded(D),

    /// Decoder needs more bytes to decode to get a `D`. Returns the current
    /// decoding state `S`.
    NeedMore(S),

    /// Errors that may occur when decoding.
    Error(HpackError),
}

impl<D, S> From<HpackError> for DecResult<D, S> {
    fn from(e: HpackError) -> Self {
        DecResult::Error(e)
    }
}

impl<D, S> From<CompressionCause> for DecResult<D, S> {
    fn from(e: CompressionCause) -> Self {
        DecResult::Error(e.into())
    }
}

#[cfg(test)]
mod ut_repr_decoder {
    use super::{Limits, ReprDecoder};
    use crate::error::{CompressionCause, HpackError};
    use crate::hpack::representation::{Name, Representation};
    use crate::util::test_util::decode;

    const LIMITS: Limits = Limits {
        max_name_len: 256,
        max_value_len: 8192,
    };

    fn decode_all(
        decoder: &mut ReprDecoder,
        bytes: &[u8],
    ) -> Result<Vec<Representation>, HpackError> {
        let mut buf = bytes;
        let mut reprs = Vec::new();
        while let Some(repr) = decoder.decode(&mut buf)? {
            reprs.push(repr);
        }
        Ok(reprs)
    }

    /// UT test cases for `ReprDecoder::decode`.
    ///
    /// # Brief
    /// 1. Creates a `ReprDecoder`.
    /// 2. Decodes every kind of representation.
    /// 3. Checks if the test results are correct.
    #[test]
    fn ut_repr_decoder_kinds() {
        let mut decoder = ReprDecoder::new(LIMITS);
        let bytes = decode(
            "80 82 ff00 \
             3f8a01 03 616263 \
             4a 00 \
             00 01 78 80 \
             40 8c f1e3c2e5f23a6ba0ab90f4ff 01 79",
        )
        .unwrap();
        let reprs = decode_all(&mut decoder, &bytes).unwrap();
        assert_eq!(
            reprs,
            vec![
                Representation::ClearReferenceSet,
                Representation::Indexed { index: 1 },
                Representation::Indexed { index: 126 },
                Representation::LiteralWithIndexing {
                    name: Name::Index(200),
                    value: b"abc".to_vec(),
                },
                Representation::LiteralWithoutIndexing {
                    name: Name::Index(9),
                    value: Vec::new(),
                },
                Representation::LiteralWithIndexing {
                    name: Name::Literal(b"x".to_vec()),
                    value: Vec::new(),
                },
                Representation::LiteralWithoutIndexing {
                    name: Name::Literal(b"www.example.com".to_vec()),
                    value: b"y".to_vec(),
                },
            ]
        );
        assert!(decoder.is_idle());
    }

    /// UT test cases for `ReprDecoder::decode` with padded integers.
    ///
    /// # Brief
    /// 1. Decodes an index and a string length followed by zero
    ///    continuation groups.
    /// 2. Checks that the padding does not change the decoded values.
    #[test]
    fn ut_repr_decoder_padded_integers() {
        let mut bytes = decode("ff80808000 40 7f80808000").unwrap();
        bytes.extend_from_slice(&[b'a'; 127]);
        bytes.extend_from_slice(&[0x01, b'y']);

        let mut decoder = ReprDecoder::new(LIMITS);
        let reprs = decode_all(&mut decoder, &bytes).unwrap();
        assert_eq!(
            reprs,
            vec![
                Representation::Indexed { index: 126 },
                Representation::LiteralWithoutIndexing {
                    name: Name::Literal(vec![b'a'; 127]),
                    value: b"y".to_vec(),
                },
            ]
        );
        assert!(decoder.is_idle());
    }

    /// UT test cases for `ReprDecoder::decode` with fragmented input.
    ///
    /// # Brief
    /// 1. Feeds a block one octet at a time.
    /// 2. Checks that the same representations are decoded and that the
    ///    decoder is only idle between representations.
    #[test]
    fn ut_repr_decoder_fragments() {
        let bytes = decode("3f8a01 83 640eff 00 8c f1e3c2e5f23a6ba0ab90f4ff 02 6869").unwrap();
        let mut whole = ReprDecoder::new(LIMITS);
        let expected = decode_all(&mut whole, &bytes).unwrap();
        assert_eq!(expected.len(), 2);

        let mut decoder = ReprDecoder::new(LIMITS);
        let mut reprs = Vec::new();
        for (i, byte) in bytes.iter().enumerate() {
            reprs.extend(decode_all(&mut decoder, &[*byte]).unwrap());
            if i + 1 < bytes.len() && reprs.len() == 1 {
                // Between the two representations.
                assert_eq!(decoder.is_idle(), i == 6);
            }
        }
        assert_eq!(reprs, expected);
        assert!(decoder.is_idle());
    }

    /// UT test cases for `ReprDecoder::decode` errors.
    ///
    /// # Brief
    /// 1. Decodes malformed integers, oversized strings, empty names and
    ///    invalid Huffman strings.
    /// 2. Checks that each one is reported.
    #[test]
    fn ut_repr_decoder_errors() {
        let cases = [
            ("ff80808001", CompressionCause::InvalidInteger),
            ("7f80808004", CompressionCause::InvalidInteger),
            ("0000", CompressionCause::EmptyName),
            ("007f8202", CompressionCause::NameTooLong),
            ("017fff3f", CompressionCause::ValueTooLong),
            ("01ff823f", CompressionCause::ValueTooLong),
            ("018100", CompressionCause::InvalidHuffmanCode),
            ("0184ffffffff", CompressionCause::InvalidHuffmanCode),
        ];
        for (hex, cause) in cases {
            let mut decoder = ReprDecoder::new(LIMITS);
            let bytes = decode(hex).unwrap();
            assert_eq!(
                decode_all(&mut decoder, &bytes),
                Err(HpackError::HeaderCompression(cause)),
                "{hex}"
            );
        }
    }
}
