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

use proptest::prelude::*;
use ylong_hpack::{DecodeStatus, HeaderField, HpackDecoder, HpackEncoder, Side};

const NAMES: [&str; 10] = [
    ":method",
    ":path",
    ":scheme",
    ":status",
    "cookie",
    "content-length",
    "user-agent",
    "x-custom",
    "set-cookie",
    "accept",
];

const VALUES: [&str; 8] = ["", "GET", "/", "http", "200", "alpha", "text/html", "1"];

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(NAMES.to_vec()).prop_map(String::from),
        1 => "[a-z][a-z0-9-]{0,15}",
    ]
}

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(VALUES.to_vec()).prop_map(String::from),
        1 => "[ -~]{0,64}",
    ]
}

fn arb_list() -> impl Strategy<Value = Vec<HeaderField>> {
    prop::collection::vec(
        (arb_name(), arb_value()).prop_map(|(name, value)| HeaderField::new(name, value)),
        0..12,
    )
}

fn inflate(decoder: &mut HpackDecoder, chunks: &[&[u8]]) -> Vec<HeaderField> {
    let mut out = Vec::new();
    let mut index = 0;
    let mut buf = chunks.first().copied().unwrap_or(&[]);
    loop {
        let is_final = index + 1 >= chunks.len();
        let (consumed, status) = decoder.decode(buf, is_final).unwrap();
        buf = &buf[consumed..];
        match status {
            DecodeStatus::Emitted(field) => out.push(field.clone()),
            DecodeStatus::NeedMore => {
                index += 1;
                buf = chunks[index];
            }
            DecodeStatus::Finished => break,
        }
    }
    decoder.end_headers();
    out
}

fn sorted(mut list: Vec<HeaderField>) -> Vec<HeaderField> {
    list.sort_by(|a, b| (a.name(), a.value()).cmp(&(b.name(), b.value())));
    list
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// SDV test cases for encoding then decoding header lists.
    ///
    /// # Brief
    /// 1. Encodes a sequence of random header lists with random budgets.
    /// 2. Decodes every block with a peer decoder.
    /// 3. Checks that each list is reproduced and both tables agree.
    #[test]
    fn sdv_hpack_round_trip(
        lists in prop::collection::vec(arb_list(), 1..8),
        advertised in prop::sample::select(vec![0usize, 64, 150, 512, 4096]),
        storage in prop::sample::select(vec![0usize, 100, 1024, 4096]),
        no_reference_set in any::<bool>(),
    ) {
        let mut encoder = HpackEncoder::with_table_size(Side::Request, advertised).unwrap();
        encoder.set_no_reference_set(no_reference_set);
        encoder.change_table_size(storage).unwrap();
        let mut decoder = HpackDecoder::with_table_size(Side::Request, storage).unwrap();

        for list in lists {
            let block = encoder.encode(&list).unwrap();
            let decoded = inflate(&mut decoder, &[block.as_slice()]);
            prop_assert_eq!(sorted(decoded), sorted(list));
            prop_assert_eq!(decoder.table_len(), encoder.table_len());
            prop_assert_eq!(decoder.table_size(), encoder.table_size());
            prop_assert!(encoder.table_size() <= encoder.table_max());
            prop_assert!(encoder.advertised_table_size() <= encoder.advertised_table_max());
            prop_assert!(encoder.advertised_table_max() <= encoder.table_max());
        }
    }

    /// SDV test cases for decoding a block split in two.
    ///
    /// # Brief
    /// 1. Encodes two random header lists.
    /// 2. Decodes the second block in one piece and split at a random
    ///    octet with two decoders.
    /// 3. Checks that both decoders emit the same fields in the same order.
    #[test]
    fn sdv_hpack_split_decode(
        first in arb_list(),
        second in arb_list(),
        split in any::<prop::sample::Index>(),
    ) {
        let mut encoder = HpackEncoder::new(Side::Response).unwrap();
        let mut whole = HpackDecoder::new(Side::Response).unwrap();
        let mut parts = HpackDecoder::new(Side::Response).unwrap();

        let block = encoder.encode(&first).unwrap();
        inflate(&mut whole, &[block.as_slice()]);
        inflate(&mut parts, &[block.as_slice()]);

        let block = encoder.encode(&second).unwrap();
        let at = split.index(block.len() + 1);
        let expected = inflate(&mut whole, &[block.as_slice()]);
        let actual = inflate(&mut parts, &[&block[..at], &block[at..]]);
        prop_assert_eq!(actual, expected);
    }

    /// SDV test cases for changing the table size twice.
    ///
    /// # Brief
    /// 1. Encodes a random header list, then sets the same table size twice.
    /// 2. Checks that the second change leaves the table untouched.
    #[test]
    fn sdv_hpack_change_table_size_idempotent(list in arb_list(), size in 0usize..4096) {
        let mut encoder = HpackEncoder::new(Side::Request).unwrap();
        encoder.encode(&list).unwrap();
        encoder.change_table_size(size).unwrap();
        let len = encoder.table_len();
        let entries: Vec<_> = (0..len).map(|i| encoder.get(i).cloned()).collect();

        encoder.change_table_size(size).unwrap();
        prop_assert_eq!(encoder.table_len(), len);
        let again: Vec<_> = (0..len).map(|i| encoder.get(i).cloned()).collect();
        prop_assert_eq!(again, entries);
    }
}
