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

//! Errors that may occur in this crate.
//!
//! Both the encoder and the decoder keep a dynamic table that must stay
//! identical to the peer's one. Once any error is reported the table views
//! can no longer be proven equal, so the context reporting it is poisoned and
//! every later call fails with [`CompressionCause::Poisoned`].

use core::fmt::{Debug, Display, Formatter};
use std::collections::TryReserveError;
use std::error::Error;

/// Errors that may occur when encoding or decoding header blocks.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum HpackError {
    /// Memory could not be reserved for the dynamic table, an output block or
    /// a literal string.
    OutOfMemory,

    /// The header block could not be compressed or decompressed.
    HeaderCompression(CompressionCause),
}

/// Detailed reason of a [`HpackError::HeaderCompression`].
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum CompressionCause {
    /// A prefixed integer is malformed or not less than `2^16`.
    InvalidInteger,

    /// An index refers to neither the dynamic table nor the static table.
    IndexOutOfRange,

    /// The block ended in the middle of a representation.
    IncompleteBlock,

    /// A Huffman encoded string contains an invalid code or padding.
    InvalidHuffmanCode,

    /// A header name is longer than the configured maximum.
    NameTooLong,

    /// A header value is longer than the configured maximum.
    ValueTooLong,

    /// A literal header name is empty.
    EmptyName,

    /// The encoded block is larger than the configured maximum.
    BlockTooLarge,

    /// The context has already failed and must be discarded.
    Poisoned,
}

impl From<CompressionCause> for HpackError {
    fn from(cause: CompressionCause) -> Self {
        HpackError::HeaderCompression(cause)
    }
}

impl From<TryReserveError> for HpackError {
    fn from(_err: TryReserveError) -> Self {
        HpackError::OutOfMemory
    }
}

impl Display for HpackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for HpackError {}
