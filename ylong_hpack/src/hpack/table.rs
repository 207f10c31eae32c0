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

use crate::hpack::HeaderField;

/// Number of entries of the static table.
pub const STATIC_TABLE_LEN: usize = 60;

/// Rolling hash used to find candidate entries before comparing octets.
pub(crate) const fn hash(octets: &[u8]) -> u32 {
    let mut h = 0u32;
    let mut i = 0;
    while i < octets.len() {
        h = h.wrapping_mul(31).wrapping_add(octets[i] as u32);
        i += 1;
    }
    h
}

/// An entry of the static table.
pub(crate) struct StaticEntry {
    field: HeaderField,
    index: usize,
    name_hash: u32,
    value_hash: u32,
}

impl StaticEntry {
    const fn new(index: usize, name: &'static [u8], value: &'static [u8]) -> Self {
        Self {
            field: HeaderField::from_static(name, value),
            index,
            name_hash: hash(name),
            value_hash: hash(value),
        }
    }

    pub(crate) fn field(&self) -> &HeaderField {
        &self.field
    }
}

/// Result of a search in the static table, holding static indices.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum StaticMatch {
    /// Both name and value are equal.
    Exact(usize),
    /// Only the name is equal.
    Name(usize),
}

/// The static table of header compression.
///
/// # Introduction
/// The static table consists of a predefined list of common header fields.
/// Its indices follow the dynamic ones, so static index `i` is addressed as
/// `dynamic_len + i` on the wire.
///
/// Entries are stored sorted by the hash of their names, which allows a
/// binary search. `STATIC_POSITION` maps a static index to its position.
///
/// # List
/// | Index | Header Name                   | Header Value  |
/// | :---: | :---:                         | :---:         |
/// | 0     | :authority                    |               |
/// | 1     | :method                       | GET           |
/// | 2     | :method                       | POST          |
/// | 3     | :path                         | /             |
/// | 4     | :path                         | /index.html   |
/// | 5     | :scheme                       | http          |
/// | 6     | :scheme                       | https         |
/// | 7     | :status                       | 200           |
/// | 8     | :status                       | 500           |
/// | 9     | :status                       | 404           |
/// | 10    | :status                       | 403           |
/// | 11    | :status                       | 400           |
/// | 12    | :status                       | 401           |
/// | 13    | accept-charset                |               |
/// | 14    | accept-encoding               |               |
/// | 15    | accept-language               |               |
/// | 16    | accept-ranges                 |               |
/// | 17    | accept                        |               |
/// | 18    | access-control-allow-origin   |               |
/// | 19    | age                           |               |
/// | 20    | allow                         |               |
/// | 21    | authorization                 |               |
/// | 22    | cache-control                 |               |
/// | 23    | content-disposition           |               |
/// | 24    | content-encoding              |               |
/// | 25    | content-language              |               |
/// | 26    | content-length                |               |
/// | 27    | content-location              |               |
/// | 28    | content-range                 |               |
/// | 29    | content-type                  |               |
/// | 30    | cookie                        |               |
/// | 31    | date                          |               |
/// | 32    | etag                          |               |
/// | 33    | expect                        |               |
/// | 34    | expires                       |               |
/// | 35    | from                          |               |
/// | 36    | host                          |               |
/// | 37    | if-match                      |               |
/// | 38    | if-modified-since             |               |
/// | 39    | if-none-match                 |               |
/// | 40    | if-range                      |               |
/// | 41    | if-unmodified-since           |               |
/// | 42    | last-modified                 |               |
/// | 43    | link                          |               |
/// | 44    | location                      |               |
/// | 45    | max-forwards                  |               |
/// | 46    | proxy-authenticate            |               |
/// | 47    | proxy-authorization           |               |
/// | 48    | range                         |               |
/// | 49    | referer                       |               |
/// | 50    | refresh                       |               |
/// | 51    | retry-after                   |               |
/// | 52    | server                        |               |
/// | 53    | set-cookie                    |               |
/// | 54    | strict-transport-security     |               |
/// | 55    | transfer-encoding             |               |
/// | 56    | user-agent                    |               |
/// | 57    | vary                          |               |
/// | 58    | via                           |               |
/// | 59    | www-authenticate              |               |
pub(crate) struct StaticTable;

static STATIC_TABLE: [StaticEntry; STATIC_TABLE_LEN] = [
    StaticEntry::new(19, b"age", b""),
    StaticEntry::new(58, b"via", b""),
    StaticEntry::new(31, b"date", b""),
    StaticEntry::new(32, b"etag", b""),
    StaticEntry::new(35, b"from", b""),
    StaticEntry::new(36, b"host", b""),
    StaticEntry::new(43, b"link", b""),
    StaticEntry::new(57, b"vary", b""),
    StaticEntry::new(37, b"if-match", b""),
    StaticEntry::new(40, b"if-range", b""),
    StaticEntry::new(3, b":path", b"/"),
    StaticEntry::new(4, b":path", b"/index.html"),
    StaticEntry::new(20, b"allow", b""),
    StaticEntry::new(48, b"range", b""),
    StaticEntry::new(13, b"accept-charset", b""),
    StaticEntry::new(42, b"last-modified", b""),
    StaticEntry::new(47, b"proxy-authorization", b""),
    StaticEntry::new(56, b"user-agent", b""),
    StaticEntry::new(39, b"if-none-match", b""),
    StaticEntry::new(29, b"content-type", b""),
    StaticEntry::new(15, b"accept-language", b""),
    StaticEntry::new(49, b"referer", b""),
    StaticEntry::new(50, b"refresh", b""),
    StaticEntry::new(54, b"strict-transport-security", b""),
    StaticEntry::new(53, b"set-cookie", b""),
    StaticEntry::new(55, b"transfer-encoding", b""),
    StaticEntry::new(16, b"accept-ranges", b""),
    StaticEntry::new(41, b"if-unmodified-since", b""),
    StaticEntry::new(45, b"max-forwards", b""),
    StaticEntry::new(44, b"location", b""),
    StaticEntry::new(51, b"retry-after", b""),
    StaticEntry::new(24, b"content-encoding", b""),
    StaticEntry::new(27, b"content-location", b""),
    StaticEntry::new(38, b"if-modified-since", b""),
    StaticEntry::new(17, b"accept", b""),
    StaticEntry::new(28, b"content-range", b""),
    StaticEntry::new(21, b"authorization", b""),
    StaticEntry::new(30, b"cookie", b""),
    StaticEntry::new(0, b":authority", b""),
    StaticEntry::new(34, b"expires", b""),
    StaticEntry::new(33, b"expect", b""),
    StaticEntry::new(23, b"content-disposition", b""),
    StaticEntry::new(25, b"content-language", b""),
    StaticEntry::new(1, b":method", b"GET"),
    StaticEntry::new(2, b":method", b"POST"),
    StaticEntry::new(26, b"content-length", b""),
    StaticEntry::new(18, b"access-control-allow-origin", b""),
    StaticEntry::new(5, b":scheme", b"http"),
    StaticEntry::new(6, b":scheme", b"https"),
    StaticEntry::new(7, b":status", b"200"),
    StaticEntry::new(8, b":status", b"500"),
    StaticEntry::new(9, b":status", b"404"),
    StaticEntry::new(10, b":status", b"403"),
    StaticEntry::new(11, b":status", b"400"),
    StaticEntry::new(12, b":status", b"401"),
    StaticEntry::new(52, b"server", b""),
    StaticEntry::new(46, b"proxy-authenticate", b""),
    StaticEntry::new(59, b"www-authenticate", b""),
    StaticEntry::new(22, b"cache-control", b""),
    StaticEntry::new(14, b"accept-encoding", b""),
];

static STATIC_POSITION: [usize; STATIC_TABLE_LEN] = [
    38, 43, 44, 10, 11, 47, 48, 49, 50, 51, 52, 53, 54, 14, 59, 20, 26, 34, 46, 0, 12, 36, 58, 41,
    31, 42, 45, 32, 35, 19, 37, 2, 3, 40, 39, 4, 5, 8, 33, 18, 9, 27, 15, 6, 29, 28, 56, 16, 13,
    21, 22, 30, 55, 24, 23, 25, 17, 7, 1, 57,
];

impl StaticTable {
    /// Gets an entry by its static index.
    pub(crate) fn get(index: usize) -> Option<&'static StaticEntry> {
        STATIC_POSITION
            .get(index)
            .map(|position| &STATIC_TABLE[*position])
    }

    /// Searches a header field. An exact match wins over a name match, and
    /// among name matches the first one in hash order is returned.
    pub(crate) fn search(
        field: &HeaderField,
        name_hash: u32,
        value_hash: u32,
    ) -> Option<StaticMatch> {
        let start = STATIC_TABLE.partition_point(|entry| entry.name_hash < name_hash);
        let mut found = None;
        for entry in STATIC_TABLE[start..]
            .iter()
            .take_while(|entry| entry.name_hash == name_hash)
        {
            if entry.field.name() != field.name() {
                continue;
            }
            if entry.value_hash == value_hash && entry.field.value() == field.value() {
                return Some(StaticMatch::Exact(entry.index));
            }
            if found.is_none() {
                found = Some(StaticMatch::Name(entry.index));
            }
        }
        found
    }
}
