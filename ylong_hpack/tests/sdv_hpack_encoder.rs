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

use ylong_hpack::{DecodeStatus, HeaderField, HpackDecoder, HpackEncoder, Side};

fn fields(pairs: &[(&'static str, &'static str)]) -> Vec<HeaderField> {
    pairs
        .iter()
        .map(|(name, value)| HeaderField::new(*name, *value))
        .collect()
}

fn inflate(decoder: &mut HpackDecoder, mut block: &[u8]) -> Vec<HeaderField> {
    let mut out = Vec::new();
    loop {
        let (consumed, status) = decoder.decode(block, true).unwrap();
        block = &block[consumed..];
        match status {
            DecodeStatus::Emitted(field) => out.push(field.clone()),
            DecodeStatus::Finished => break,
            DecodeStatus::NeedMore => panic!("final chunk needs more input"),
        }
    }
    decoder.end_headers();
    out
}

fn sorted(mut list: Vec<HeaderField>) -> Vec<HeaderField> {
    list.sort_by(|a, b| (a.name(), a.value()).cmp(&(b.name(), b.value())));
    list
}

/// SDV test cases for consecutive header lists.
///
/// # Brief
/// 1. Encodes five header lists sharing fields, with duplicates and empty
///    values.
/// 2. Decodes every block with a peer decoder.
/// 3. Checks that every list is reproduced.
#[test]
fn sdv_hpack_encoder_lists() {
    let lists = [
        fields(&[
            (":path", "/my-example/index.html"),
            (":scheme", "https"),
            ("hello", "world"),
        ]),
        fields(&[(":path", "/script.js"), (":scheme", "https")]),
        fields(&[("cookie", "k1=v1"), ("cookie", "k2=v2"), ("via", "proxy")]),
        fields(&[(":path", "/style.css"), ("cookie", "k1=v1"), ("cookie", "k1=v1")]),
        fields(&[(":path", "/style.css"), ("x-nghttp2", "")]),
    ];
    let mut encoder = HpackEncoder::new(Side::Request).unwrap();
    let mut decoder = HpackDecoder::new(Side::Request).unwrap();
    for list in lists {
        let block = encoder.encode(&list).unwrap();
        assert!(!block.is_empty());
        let decoded = inflate(&mut decoder, &block);
        assert_eq!(sorted(decoded), sorted(list));
    }
    assert_eq!(encoder.table_len(), decoder.table_len());
    assert_eq!(encoder.table_size(), decoder.table_size());
}

/// SDV test cases for fields carried by the reference set.
///
/// # Brief
/// 1. Encodes a list, then a second list repeating `:scheme: https`.
/// 2. Checks that the second block does not carry `:scheme` as a literal.
/// 3. Checks that the peer still reproduces both lists.
#[test]
fn sdv_hpack_encoder_reference_set() {
    let mut encoder = HpackEncoder::new(Side::Request).unwrap();
    let mut decoder = HpackDecoder::new(Side::Request).unwrap();

    let first = fields(&[
        (":path", "/my-example/index.html"),
        (":scheme", "https"),
        ("hello", "world"),
    ]);
    let block = encoder.encode(&first).unwrap();
    assert_eq!(sorted(inflate(&mut decoder, &block)), sorted(first));
    assert_eq!(encoder.get(1), Some(&HeaderField::new(":scheme", "https")));

    let second = fields(&[(":path", "/script.js"), (":scheme", "https")]);
    let block = encoder.encode(&second).unwrap();
    // A `:path` literal without indexing whose name is static entry 3, then
    // `hello: world` at index 0 toggled off.
    assert_eq!(block[0], 0x40 | (2 + 3 + 1));
    assert_eq!(block[block.len() - 1], 0x81);
    assert_eq!(encoder.table_len(), 2);
    assert_eq!(sorted(inflate(&mut decoder, &block)), sorted(second));
}

/// SDV test cases for a field repeated in consecutive lists.
///
/// # Brief
/// 1. Encodes `cookie: alpha` twice in one list, then three times.
/// 2. Checks that the second block is made of six indexed representations.
/// 3. Checks that the peer decodes two then three fields.
#[test]
fn sdv_hpack_encoder_same_indexed_repr() {
    let mut encoder = HpackEncoder::new(Side::Request).unwrap();
    let mut decoder = HpackDecoder::new(Side::Request).unwrap();

    let first = fields(&[("cookie", "alpha"), ("cookie", "alpha")]);
    let block = encoder.encode(&first).unwrap();
    assert_eq!(inflate(&mut decoder, &block), first);

    let second = fields(&[("cookie", "alpha"), ("cookie", "alpha"), ("cookie", "alpha")]);
    let block = encoder.encode(&second).unwrap();
    assert_eq!(block.len(), 6);
    assert_eq!(inflate(&mut decoder, &block), second);
}

/// SDV test cases for a field of the reference set evicted by a new entry.
///
/// # Brief
/// 1. Encodes `h1` with a large value, then `h1` and `h2` of the same size.
/// 2. Checks that `h1` is still emitted by the peer though the table only
///    has room for one of them.
#[test]
fn sdv_hpack_encoder_common_header_eviction() {
    let value = vec![b'0'; 3038];
    let h1 = HeaderField::new("h1", value.clone());
    let h2 = HeaderField::new("h2", value);
    let mut encoder = HpackEncoder::new(Side::Request).unwrap();
    let mut decoder = HpackDecoder::new(Side::Request).unwrap();

    let block = encoder.encode(&[h1.clone()]).unwrap();
    assert_eq!(inflate(&mut decoder, &block), [h1.clone()]);

    let block = encoder.encode(&[h1.clone(), h2.clone()]).unwrap();
    assert_eq!(sorted(inflate(&mut decoder, &block)), sorted(vec![h1, h2]));
    assert_eq!(encoder.table_len(), 1);
    assert_eq!(decoder.table_len(), 1);
}

/// SDV test cases for names which are never indexed.
///
/// # Brief
/// 1. Encodes `:path: /a` and other denied names in many lists.
/// 2. Checks that none of them enters the dynamic table on either side.
#[test]
fn sdv_hpack_encoder_never_indexed() {
    let list = fields(&[
        (":path", "/a"),
        ("set-cookie", "id=1"),
        ("content-length", "42"),
        ("location", "/b"),
        ("etag", "\"x\""),
    ]);
    let mut encoder = HpackEncoder::new(Side::Response).unwrap();
    let mut decoder = HpackDecoder::new(Side::Response).unwrap();
    let first = encoder.encode(&list).unwrap();
    // A literal without indexing.
    assert_eq!(first[0] & 0xc0, 0x40);
    assert_eq!(inflate(&mut decoder, &first), list);
    for _ in 0..16 {
        let block = encoder.encode(&list).unwrap();
        assert_eq!(block, first);
        assert_eq!(inflate(&mut decoder, &block), list);
        assert_eq!(encoder.table_len(), 0);
        assert_eq!(decoder.table_len(), 0);
    }
}

/// SDV test cases for a table shrunk to 0.
///
/// # Brief
/// 1. Fills both tables, then changes their size to 0.
/// 2. Checks that both tables are empty.
/// 3. Checks that new fields are sent as literals only.
#[test]
fn sdv_hpack_encoder_table_size_zero() {
    let mut encoder = HpackEncoder::new(Side::Request).unwrap();
    let mut decoder = HpackDecoder::new(Side::Request).unwrap();
    let list = fields(&[(":method", "GET"), ("hello", "world"), ("user-agent", "x")]);
    let block = encoder.encode(&list).unwrap();
    inflate(&mut decoder, &block);
    assert_eq!(encoder.table_len(), 3);

    encoder.change_table_size(0).unwrap();
    decoder.change_table_size(0).unwrap();
    assert_eq!(encoder.table_len(), 0);
    assert_eq!(decoder.table_len(), 0);

    let list = fields(&[("hello", "world")]);
    let block = encoder.encode(&list).unwrap();
    assert_eq!(block[0], 0x40);
    assert_eq!(inflate(&mut decoder, &block), list);
    assert_eq!(encoder.table_len(), 0);
    assert_eq!(decoder.table_len(), 0);
}

/// SDV test cases for the reference set disabled.
///
/// # Brief
/// 1. Encodes the same list twice with the reference set disabled.
/// 2. Checks that both blocks are self-contained and decoded in full.
#[test]
fn sdv_hpack_encoder_clear_reference_set() {
    let mut encoder = ylong_hpack::EncoderBuilder::new()
        .no_reference_set(true)
        .build()
        .unwrap();
    let mut decoder = HpackDecoder::new(Side::Request).unwrap();
    let list = fields(&[(":path", "/"), (":scheme", "http")]);
    for _ in 0..2 {
        let block = encoder.encode(&list).unwrap();
        assert!(block.len() > 1);
        assert_eq!(block[0], 0x80);
        assert_eq!(inflate(&mut decoder, &block), list);
    }
}
