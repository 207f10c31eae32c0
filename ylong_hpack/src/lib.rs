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

//! `ylong_hpack` provides a stateful header compression codec for HTTP/2
//! header blocks, following the early HPACK drafts which still carry a
//! **reference set** between consecutive header blocks.
//!
//! # Components
//! - [`HpackEncoder`] turns an ordered list of [`HeaderField`]s into a binary
//!   header block and keeps its dynamic table in lockstep with the peer.
//! - [`HpackDecoder`] consumes a header block incrementally, in any number of
//!   chunks, and emits the decoded [`HeaderField`]s one at a time.
//!
//! # Examples
//! ```
//! use ylong_hpack::{DecodeStatus, HeaderField, HpackDecoder, HpackEncoder, Side};
//!
//! let mut encoder = HpackEncoder::new(Side::Request).unwrap();
//! let mut decoder = HpackDecoder::new(Side::Request).unwrap();
//!
//! let fields = vec![
//!     HeaderField::new(":method", "GET"),
//!     HeaderField::new("user-agent", "ylong"),
//! ];
//! let block = encoder.encode(&fields).unwrap();
//!
//! let mut decoded = Vec::new();
//! let mut buf = block.as_slice();
//! loop {
//!     let (consumed, status) = decoder.decode(buf, true).unwrap();
//!     buf = &buf[consumed..];
//!     match status {
//!         DecodeStatus::Emitted(field) => decoded.push(field.clone()),
//!         DecodeStatus::Finished => break,
//!         DecodeStatus::NeedMore => unreachable!(),
//!     }
//! }
//! decoder.end_headers();
//! assert_eq!(decoded.len(), 2);
//! ```

mod error;
mod hpack;
mod huffman;

pub(crate) mod util;

pub use error::{CompressionCause, HpackError};
pub use hpack::{
    DecodeStatus, DecoderBuilder, EncoderBuilder, HeaderField, HpackDecoder, HpackEncoder, Side,
    DEFAULT_MAX_BLOCK_SIZE, DEFAULT_MAX_NAME_LEN, DEFAULT_MAX_VALUE_LEN, DEFAULT_TABLE_SIZE,
    ENTRY_OVERHEAD, STATIC_TABLE_LEN,
};
