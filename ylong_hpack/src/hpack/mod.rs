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

//! Header compression with reference sets.
//!
//! # Introduction
//! Header fields of consecutive requests or responses on one connection are
//! highly redundant. Both endpoints therefore maintain a **dynamic table** of
//! recently seen header fields, and the encoder refers to its entries by
//! index instead of sending their content again.
//!
//! On top of the table, this revision of the format keeps a **reference
//! set**: the subset of dynamic entries that belong to the current header
//! list. Entries stay in the reference set from one header block to the
//! next, so a header field repeated in every request costs nothing at all.
//! An indexed representation toggles an entry in or out of the set, and the
//! decoder emits every entry left in the set once the block ends.
//!
//! Indices `0..dynamic_len` address the dynamic table (0 is the newest
//! entry), indices `dynamic_len..dynamic_len + 60` the static table.

mod builder;
mod context;
mod decoder;
mod encoder;
mod integer;
mod representation;
mod ring;
mod table;

use bytes::Bytes;

pub use builder::{DecoderBuilder, EncoderBuilder};
pub use decoder::{DecodeStatus, HpackDecoder};
pub use encoder::HpackEncoder;
pub use table::STATIC_TABLE_LEN;

/// Size of the dynamic table, in octets, until a peer negotiates another one.
pub const DEFAULT_TABLE_SIZE: usize = 4096;

/// Octets charged for each dynamic table entry on top of its name and value.
pub const ENTRY_OVERHEAD: usize = 32;

/// Default upper bound of a decoded header name.
pub const DEFAULT_MAX_NAME_LEN: usize = 256;

/// Default upper bound of a decoded header value.
pub const DEFAULT_MAX_VALUE_LEN: usize = 8192;

/// Default upper bound of an encoded header block.
pub const DEFAULT_MAX_BLOCK_SIZE: usize = 1 << 16;

/// Endpoint type of a compression context.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Side {
    /// The context compresses or decompresses request headers.
    Request,
    /// The context compresses or decompresses response headers.
    Response,
}

/// A header field, an immutable pair of name and value octets.
///
/// Both parts are reference counted, so cloning a `HeaderField` and sharing
/// it between the caller and a dynamic table never copies its content.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct HeaderField {
    name: Bytes,
    value: Bytes,
}

impl HeaderField {
    /// Creates a `HeaderField` from a name and a value.
    ///
    /// # Examples
    /// ```
    /// use ylong_hpack::HeaderField;
    ///
    /// let field = HeaderField::new("accept", String::from("text/html"));
    /// assert_eq!(field.name(), b"accept");
    /// assert_eq!(field.value(), b"text/html");
    /// ```
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a `HeaderField` borrowing static octets.
    pub const fn from_static(name: &'static [u8], value: &'static [u8]) -> Self {
        Self {
            name: Bytes::from_static(name),
            value: Bytes::from_static(value),
        }
    }

    /// Gets the name octets.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Gets the value octets.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Octets this field is charged for in a dynamic table.
    pub fn room(&self) -> usize {
        entry_room(self.name.len(), self.value.len())
    }

    pub(crate) fn name_bytes(&self) -> &Bytes {
        &self.name
    }

    pub(crate) fn value_bytes(&self) -> &Bytes {
        &self.value
    }
}

pub(crate) fn entry_room(name_len: usize, value_len: usize) -> usize {
    ENTRY_OVERHEAD + name_len + value_len
}
