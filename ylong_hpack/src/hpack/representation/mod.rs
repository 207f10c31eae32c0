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

//! Header field representations.
//!
//! # Binary Format
//! `Indexed Header Field`, toggling an entry of the reference set, or
//! clearing the reference set when the index is 0:
//! ```text
//!   0   1   2   3   4   5   6   7
//! +---+---+---+---+---+---+---+---+
//! | 1 |       Index + 1 (7+)      |
//! +---+---------------------------+
//! ```
//!
//! `Literal Header Field -- Indexed Name`, the `N` bit is set when the field
//! must not be added to the dynamic table:
//! ```text
//!   0   1   2   3   4   5   6   7
//! +---+---+---+---+---+---+---+---+
//! | 0 | N |     Index + 1 (6+)    |
//! +---+---+-----------------------+
//! | H |     Value Length (7+)     |
//! +---+---------------------------+
//! | Value String (Length octets)  |
//! +-------------------------------+
//! ```
//!
//! `Literal Header Field -- New Name`:
//! ```text
//!   0   1   2   3   4   5   6   7
//! +---+---+---+---+---+---+---+---+
//! | 0 | N |           0           |
//! +---+---+-----------------------+
//! | H |     Name Length (7+)      |
//! +---+---------------------------+
//! |  Name String (Length octets)  |
//! +---+---------------------------+
//! | H |     Value Length (7+)     |
//! +---+---------------------------+
//! | Value String (Length octets)  |
//! +-------------------------------+
//! ```
//!
//! The `H` bit of a string length tells whether the string is Huffman
//! encoded.

mod decoder;
mod encoder;

pub(crate) use decoder::{Limits, ReprDecoder};
pub(crate) use encoder::BlockWriter;

/// Pattern of the first octet of a representation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct PrefixBit(u8);

impl PrefixBit {
    pub(crate) const INDEXED: Self = Self(0x80);
    pub(crate) const LITERAL_WITH_INDEXING: Self = Self(0x00);
    pub(crate) const LITERAL_WITHOUT_INDEXING: Self = Self(0x40);

    /// Creates a `PrefixBit` from the first octet of a representation.
    pub(crate) fn from_u8(byte: u8) -> Self {
        match byte {
            x if x & 0x80 == 0x80 => Self::INDEXED,
            x if x & 0x40 == 0x40 => Self::LITERAL_WITHOUT_INDEXING,
            _ => Self::LITERAL_WITH_INDEXING,
        }
    }

    /// Mask of the integer prefix following this pattern.
    pub(crate) fn prefix_index_mask(&self) -> PrefixIndexMask {
        match *self {
            Self::INDEXED => PrefixIndexMask::INDEXED,
            _ => PrefixIndexMask::LITERAL,
        }
    }

    pub(crate) fn bits(&self) -> u8 {
        self.0
    }
}

/// Integer prefix mask of each representation.
#[derive(Copy, Clone)]
pub(crate) struct PrefixIndexMask(pub(crate) u8);

impl PrefixIndexMask {
    pub(crate) const INDEXED: Self = Self(0x7f);
    pub(crate) const LITERAL: Self = Self(0x3f);
    pub(crate) const STRING_LENGTH: Self = Self(0x7f);
}

/// A decoded representation. Indices are already converted from their
/// `index + 1` wire form.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Representation {
    /// Empties the reference set.
    ClearReferenceSet,

    /// Toggles a dynamic entry, or promotes a static entry.
    Indexed { index: usize },

    /// A literal to be added to the dynamic table.
    LiteralWithIndexing { name: Name, value: Vec<u8> },

    /// A literal leaving the dynamic table unchanged.
    LiteralWithoutIndexing { name: Name, value: Vec<u8> },
}

/// Name of a literal representation.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Name {
    Index(usize),
    Literal(Vec<u8>),
}
