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

//! Static code tables used by the Huffman codec.

/// Code of every symbol as `(bit length, code)`, the last one is `EOS`.
pub(crate) const HUFFMAN_ENCODE: [(u8, u64); 257] = [
    (13, 0x1ff8),
    (23, 0x7fffd8),
    (28, 0xfffffe2),
    (28, 0xfffffe3),
    (28, 0xfffffe4),
    (28, 0xfffffe5),
    (28, 0xfffffe6),
    (28, 0xfffffe7),
    (28, 0xfffffe8),
    (24, 0xffffea),
    (30, 0x3ffffffc),
    (28, 0xfffffe9),
    (28, 0xfffffea),
    (30, 0x3ffffffd),
    (28, 0xfffffeb),
    (28, 0xfffffec),
    (28, 0xfffffed),
    (28, 0xfffffee),
    (28, 0xfffffef),
    (28, 0xffffff0),
    (28, 0xffffff1),
    (28, 0xffffff2),
    (30, 0x3ffffffe),
    (28, 0xffffff3),
    (28, 0xffffff4),
    (28, 0xffffff5),
    (28, 0xffffff6),
    (28, 0xffffff7),
    (28, 0xffffff8),
    (28, 0xffffff9),
    (28, 0xffffffa),
    (28, 0xffffffb),
    (6, 0x14),
    (10, 0x3f8),
    (10, 0x3f9),
    (12, 0xffa),
    (13, 0x1ff9),
    (6, 0x15),
    (8, 0xf8),
    (11, 0x7fa),
    (10, 0x3fa),
    (10, 0x3fb),
    (8, 0xf9),
    (11, 0x7fb),
    (8, 0xfa),
    (6, 0x16),
    (6, 0x17),
    (6, 0x18),
    (5, 0x0),
    (5, 0x1),
    (5, 0x2),
    (6, 0x19),
    (6, 0x1a),
    (6, 0x1b),
    (6, 0x1c),
    (6, 0x1d),
    (6, 0x1e),
    (6, 0x1f),
    (7, 0x5c),
    (8, 0xfb),
    (15, 0x7ffc),
    (6, 0x20),
    (12, 0xffb),
    (10, 0x3fc),
    (13, 0x1ffa),
    (6, 0x21),
    (7, 0x5d),
    (7, 0x5e),
    (7, 0x5f),
    (7, 0x60),
    (7, 0x61),
    (7, 0x62),
    (7, 0x63),
    (7, 0x64),
    (7, 0x65),
    (7, 0x66),
    (7, 0x67),
    (7, 0x68),
    (7, 0x69),
    (7, 0x6a),
    (7, 0x6b),
    (7, 0x6c),
    (7, 0x6d),
    (7, 0x6e),
    (7, 0x6f),
    (7, 0x70),
    (7, 0x71),
    (7, 0x72),
    (8, 0xfc),
    (7, 0x73),
    (8, 0xfd),
    (13, 0x1ffb),
    (19, 0x7fff0),
    (13, 0x1ffc),
    (14, 0x3ffc),
    (6, 0x22),
    (15, 0x7ffd),
    (5, 0x3),
    (6, 0x23),
    (5, 0x4),
    (6, 0x24),
    (5, 0x5),
    (6, 0x25),
    (6, 0x26),
    (6, 0x27),
    (5, 0x6),
    (7, 0x74),
    (7, 0x75),
    (6, 0x28),
    (6, 0x29),
    (6, 0x2a),
    (5, 0x7),
    (6, 0x2b),
    (7, 0x76),
    (6, 0x2c),
    (5, 0x8),
    (5, 0x9),
    (6, 0x2d),
    (7, 0x77),
    (7, 0x78),
    (7, 0x79),
    (7, 0x7a),
    (7, 0x7b),
    (15, 0x7ffe),
    (11, 0x7fc),
    (14, 0x3ffd),
    (13, 0x1ffd),
    (28, 0xffffffc),
    (20, 0xfffe6),
    (22, 0x3fffd2),
    (20, 0xfffe7),
    (20, 0xfffe8),
    (22, 0x3fffd3),
    (22, 0x3fffd4),
    (22, 0x3fffd5),
    (23, 0x7fffd9),
    (22, 0x3fffd6),
    (23, 0x7fffda),
    (23, 0x7fffdb),
    (23, 0x7fffdc),
    (23, 0x7fffdd),
    (23, 0x7fffde),
    (24, 0xffffeb),
    (23, 0x7fffdf),
    (24, 0xffffec),
    (24, 0xffffed),
    (22, 0x3fffd7),
    (23, 0x7fffe0),
    (24, 0xffffee),
    (23, 0x7fffe1),
    (23, 0x7fffe2),
    (23, 0x7fffe3),
    (23, 0x7fffe4),
    (21, 0x1fffdc),
    (22, 0x3fffd8),
    (23, 0x7fffe5),
    (22, 0x3fffd9),
    (23, 0x7fffe6),
    (23, 0x7fffe7),
    (24, 0xffffef),
    (22, 0x3fffda),
    (21, 0x1fffdd),
    (20, 0xfffe9),
    (22, 0x3fffdb),
    (22, 0x3fffdc),
    (23, 0x7fffe8),
    (23, 0x7fffe9),
    (21, 0x1fffde),
    (23, 0x7fffea),
    (22, 0x3fffdd),
    (22, 0x3fffde),
    (24, 0xfffff0),
    (21, 0x1fffdf),
    (22, 0x3fffdf),
    (23, 0x7fffeb),
    (23, 0x7fffec),
    (21, 0x1fffe0),
    (21, 0x1fffe1),
    (22, 0x3fffe0),
    (21, 0x1fffe2),
    (23, 0x7fffed),
    (22, 0x3fffe1),
    (23, 0x7fffee),
    (23, 0x7fffef),
    (20, 0xfffea),
    (22, 0x3fffe2),
    (22, 0x3fffe3),
    (22, 0x3fffe4),
    (23, 0x7ffff0),
    (22, 0x3fffe5),
    (22, 0x3fffe6),
    (23, 0x7ffff1),
    (26, 0x3ffffe0),
    (26, 0x3ffffe1),
    (20, 0xfffeb),
    (19, 0x7fff1),
    (22, 0x3fffe7),
    (23, 0x7ffff2),
    (22, 0x3fffe8),
    (25, 0x1ffffec),
    (26, 0x3ffffe2),
    (26, 0x3ffffe3),
    (26, 0x3ffffe4),
    (27, 0x7ffffde),
    (27, 0x7ffffdf),
    (26, 0x3ffffe5),
    (24, 0xfffff1),
    (25, 0x1ffffed),
    (19, 0x7fff2),
    (21, 0x1fffe3),
    (26, 0x3ffffe6),
    (27, 0x7ffffe0),
    (27, 0x7ffffe1),
    (26, 0x3ffffe7),
    (27, 0x7ffffe2),
    (24, 0xfffff2),
    (21, 0x1fffe4),
    (21, 0x1fffe5),
    (26, 0x3ffffe8),
    (26, 0x3ffffe9),
    (28, 0xffffffd),
    (27, 0x7ffffe3),
    (27, 0x7ffffe4),
    (27, 0x7ffffe5),
    (20, 0xfffec),
    (24, 0xfffff3),
    (20, 0xfffed),
    (21, 0x1fffe6),
    (22, 0x3fffe9),
    (21, 0x1fffe7),
    (21, 0x1fffe8),
    (23, 0x7ffff3),
    (22, 0x3fffea),
    (22, 0x3fffeb),
    (25, 0x1ffffee),
    (25, 0x1ffffef),
    (24, 0xfffff4),
    (24, 0xfffff5),
    (26, 0x3ffffea),
    (23, 0x7ffff4),
    (26, 0x3ffffeb),
    (27, 0x7ffffe6),
    (26, 0x3ffffec),
    (26, 0x3ffffed),
    (27, 0x7ffffe7),
    (27, 0x7ffffe8),
    (27, 0x7ffffe9),
    (27, 0x7ffffea),
    (27, 0x7ffffeb),
    (28, 0xffffffe),
    (27, 0x7ffffec),
    (27, 0x7ffffed),
    (27, 0x7ffffee),
    (27, 0x7ffffef),
    (27, 0x7fffff0),
    (26, 0x3ffffee),
    (30, 0x3fffffff),
];

/// Nibble driven decoding automaton, each cell is `(next state, decoded byte, flags)`.
pub(crate) const HUFFMAN_DECODE: [[(u8, u8, u8); 16]; 256] = [
    // 0
    [
        (87, 0, 0x00), (88, 0, 0x00), (131, 0, 0x00), (135, 0, 0x00),
        (143, 0, 0x00), (69, 0, 0x00), (83, 0, 0x00), (90, 0, 0x00),
        (100, 0, 0x00), (132, 0, 0x00), (138, 0, 0x00), (95, 0, 0x00),
        (105, 0, 0x00), (112, 0, 0x00), (119, 0, 0x00), (4, 0, 0x01),
    ],
    // 1
    [
        (101, 0, 0x00), (129, 0, 0x00), (133, 0, 0x00), (134, 0, 0x00),
        (139, 0, 0x00), (140, 0, 0x00), (142, 0, 0x00), (96, 0, 0x00),
        (106, 0, 0x00), (109, 0, 0x00), (113, 0, 0x00), (116, 0, 0x00),
        (120, 0, 0x00), (136, 0, 0x00), (144, 0, 0x00), (5, 0, 0x01),
    ],
    // 2
    [
        (107, 0, 0x00), (108, 0, 0x00), (110, 0, 0x00), (111, 0, 0x00),
        (114, 0, 0x00), (115, 0, 0x00), (117, 0, 0x00), (118, 0, 0x00),
        (121, 0, 0x00), (122, 0, 0x00), (137, 0, 0x00), (141, 0, 0x00),
        (145, 0, 0x00), (146, 0, 0x00), (75, 0, 0x00), (6, 0, 0x01),
    ],
    // 3
    [
        (0, 85, 0x03), (0, 86, 0x03), (0, 87, 0x03), (0, 89, 0x03),
        (0, 106, 0x03), (0, 107, 0x03), (0, 113, 0x03), (0, 118, 0x03),
        (0, 119, 0x03), (0, 120, 0x03), (0, 121, 0x03), (0, 122, 0x03),
        (76, 0, 0x00), (80, 0, 0x00), (123, 0, 0x00), (7, 0, 0x01),
    ],
    // 4
    [
        (66, 119, 0x02), (1, 119, 0x03), (66, 120, 0x02), (1, 120, 0x03),
        (66, 121, 0x02), (1, 121, 0x03), (66, 122, 0x02), (1, 122, 0x03),
        (0, 38, 0x03), (0, 42, 0x03), (0, 44, 0x03), (0, 59, 0x03),
        (0, 88, 0x03), (0, 90, 0x03), (71, 0, 0x00), (8, 0, 0x00),
    ],
    // 5
    [
        (66, 38, 0x02), (1, 38, 0x03), (66, 42, 0x02), (1, 42, 0x03),
        (66, 44, 0x02), (1, 44, 0x03), (66, 59, 0x02), (1, 59, 0x03),
        (66, 88, 0x02), (1, 88, 0x03), (66, 90, 0x02), (1, 90, 0x03),
        (72, 0, 0x00), (79, 0, 0x00), (77, 0, 0x00), (9, 0, 0x00),
    ],
    // 6
    [
        (85, 88, 0x02), (67, 88, 0x02), (93, 88, 0x02), (2, 88, 0x03),
        (85, 90, 0x02), (67, 90, 0x02), (93, 90, 0x02), (2, 90, 0x03),
        (0, 33, 0x03), (0, 34, 0x03), (0, 40, 0x03), (0, 41, 0x03),
        (0, 63, 0x03), (78, 0, 0x00), (73, 0, 0x00), (10, 0, 0x00),
    ],
    // 7
    [
        (66, 33, 0x02), (1, 33, 0x03), (66, 34, 0x02), (1, 34, 0x03),
        (66, 40, 0x02), (1, 40, 0x03), (66, 41, 0x02), (1, 41, 0x03),
        (66, 63, 0x02), (1, 63, 0x03), (0, 39, 0x03), (0, 43, 0x03),
        (0, 124, 0x03), (74, 0, 0x00), (11, 0, 0x00), (13, 0, 0x00),
    ],
    // 8
    [
        (85, 63, 0x02), (67, 63, 0x02), (93, 63, 0x02), (2, 63, 0x03),
        (66, 39, 0x02), (1, 39, 0x03), (66, 43, 0x02), (1, 43, 0x03),
        (66, 124, 0x02), (1, 124, 0x03), (0, 35, 0x03), (0, 62, 0x03),
        (12, 0, 0x00), (102, 0, 0x00), (127, 0, 0x00), (14, 0, 0x00),
    ],
    // 9
    [
        (85, 124, 0x02), (67, 124, 0x02), (93, 124, 0x02), (2, 124, 0x03),
        (66, 35, 0x02), (1, 35, 0x03), (66, 62, 0x02), (1, 62, 0x03),
        (0, 0, 0x03), (0, 36, 0x03), (0, 64, 0x03), (0, 91, 0x03),
        (0, 93, 0x03), (0, 126, 0x03), (128, 0, 0x00), (15, 0, 0x00),
    ],
    // 10
    [
        (66, 0, 0x02), (1, 0, 0x03), (66, 36, 0x02), (1, 36, 0x03),
        (66, 64, 0x02), (1, 64, 0x03), (66, 91, 0x02), (1, 91, 0x03),
        (66, 93, 0x02), (1, 93, 0x03), (66, 126, 0x02), (1, 126, 0x03),
        (0, 94, 0x03), (0, 125, 0x03), (98, 0, 0x00), (16, 0, 0x00),
    ],
    // 11
    [
        (85, 0, 0x02), (67, 0, 0x02), (93, 0, 0x02), (2, 0, 0x03),
        (85, 36, 0x02), (67, 36, 0x02), (93, 36, 0x02), (2, 36, 0x03),
        (85, 64, 0x02), (67, 64, 0x02), (93, 64, 0x02), (2, 64, 0x03),
        (85, 91, 0x02), (67, 91, 0x02), (93, 91, 0x02), (2, 91, 0x03),
    ],
    // 12
    [
        (86, 0, 0x02), (130, 0, 0x02), (68, 0, 0x02), (82, 0, 0x02),
        (99, 0, 0x02), (94, 0, 0x02), (104, 0, 0x02), (3, 0, 0x03),
        (86, 36, 0x02), (130, 36, 0x02), (68, 36, 0x02), (82, 36, 0x02),
        (99, 36, 0x02), (94, 36, 0x02), (104, 36, 0x02), (3, 36, 0x03),
    ],
    // 13
    [
        (85, 93, 0x02), (67, 93, 0x02), (93, 93, 0x02), (2, 93, 0x03),
        (85, 126, 0x02), (67, 126, 0x02), (93, 126, 0x02), (2, 126, 0x03),
        (66, 94, 0x02), (1, 94, 0x03), (66, 125, 0x02), (1, 125, 0x03),
        (0, 60, 0x03), (0, 96, 0x03), (0, 123, 0x03), (17, 0, 0x00),
    ],
    // 14
    [
        (85, 94, 0x02), (67, 94, 0x02), (93, 94, 0x02), (2, 94, 0x03),
        (85, 125, 0x02), (67, 125, 0x02), (93, 125, 0x02), (2, 125, 0x03),
        (66, 60, 0x02), (1, 60, 0x03), (66, 96, 0x02), (1, 96, 0x03),
        (66, 123, 0x02), (1, 123, 0x03), (124, 0, 0x00), (18, 0, 0x00),
    ],
    // 15
    [
        (85, 60, 0x02), (67, 60, 0x02), (93, 60, 0x02), (2, 60, 0x03),
        (85, 96, 0x02), (67, 96, 0x02), (93, 96, 0x02), (2, 96, 0x03),
        (85, 123, 0x02), (67, 123, 0x02), (93, 123, 0x02), (2, 123, 0x03),
        (125, 0, 0x00), (155, 0, 0x00), (150, 0, 0x00), (19, 0, 0x00),
    ],
    // 16
    [
        (86, 123, 0x02), (130, 123, 0x02), (68, 123, 0x02), (82, 123, 0x02),
        (99, 123, 0x02), (94, 123, 0x02), (104, 123, 0x02), (3, 123, 0x03),
        (126, 0, 0x00), (148, 0, 0x00), (156, 0, 0x00), (175, 0, 0x00),
        (196, 0, 0x00), (151, 0, 0x00), (20, 0, 0x00), (25, 0, 0x00),
    ],
    // 17
    [
        (0, 92, 0x03), (0, 195, 0x03), (0, 208, 0x03), (149, 0, 0x00),
        (157, 0, 0x00), (204, 0, 0x00), (241, 0, 0x00), (176, 0, 0x00),
        (197, 0, 0x00), (235, 0, 0x00), (152, 0, 0x00), (178, 0, 0x00),
        (199, 0, 0x00), (21, 0, 0x00), (167, 0, 0x00), (26, 0, 0x00),
    ],
    // 18
    [
        (198, 0, 0x00), (202, 0, 0x00), (236, 0, 0x00), (242, 0, 0x00),
        (153, 0, 0x00), (158, 0, 0x00), (179, 0, 0x00), (183, 0, 0x00),
        (200, 0, 0x00), (206, 0, 0x00), (216, 0, 0x00), (22, 0, 0x00),
        (168, 0, 0x00), (185, 0, 0x00), (41, 0, 0x00), (27, 0, 0x00),
    ],
    // 19
    [
        (201, 0, 0x00), (205, 0, 0x00), (207, 0, 0x00), (210, 0, 0x00),
        (217, 0, 0x00), (243, 0, 0x00), (23, 0, 0x00), (162, 0, 0x00),
        (169, 0, 0x00), (173, 0, 0x00), (186, 0, 0x00), (194, 0, 0x00),
        (208, 0, 0x00), (42, 0, 0x00), (191, 0, 0x00), (28, 0, 0x00),
    ],
    // 20
    [
        (0, 178, 0x03), (0, 181, 0x03), (0, 185, 0x03), (0, 186, 0x03),
        (0, 187, 0x03), (0, 189, 0x03), (0, 190, 0x03), (0, 196, 0x03),
        (0, 198, 0x03), (0, 228, 0x03), (0, 232, 0x03), (0, 233, 0x03),
        (24, 0, 0x00), (161, 0, 0x00), (163, 0, 0x00), (164, 0, 0x00),
    ],
    // 21
    [
        (66, 198, 0x02), (1, 198, 0x03), (66, 228, 0x02), (1, 228, 0x03),
        (66, 232, 0x02), (1, 232, 0x03), (66, 233, 0x02), (1, 233, 0x03),
        (0, 1, 0x03), (0, 135, 0x03), (0, 137, 0x03), (0, 138, 0x03),
        (0, 139, 0x03), (0, 140, 0x03), (0, 141, 0x03), (0, 143, 0x03),
    ],
    // 22
    [
        (66, 1, 0x02), (1, 1, 0x03), (66, 135, 0x02), (1, 135, 0x03),
        (66, 137, 0x02), (1, 137, 0x03), (66, 138, 0x02), (1, 138, 0x03),
        (66, 139, 0x02), (1, 139, 0x03), (66, 140, 0x02), (1, 140, 0x03),
        (66, 141, 0x02), (1, 141, 0x03), (66, 143, 0x02), (1, 143, 0x03),
    ],
    // 23
    [
        (85, 1, 0x02), (67, 1, 0x02), (93, 1, 0x02), (2, 1, 0x03),
        (85, 135, 0x02), (67, 135, 0x02), (93, 135, 0x02), (2, 135, 0x03),
        (85, 137, 0x02), (67, 137, 0x02), (93, 137, 0x02), (2, 137, 0x03),
        (85, 138, 0x02), (67, 138, 0x02), (93, 138, 0x02), (2, 138, 0x03),
    ],
    // 24
    [
        (86, 1, 0x02), (130, 1, 0x02), (68, 1, 0x02), (82, 1, 0x02),
        (99, 1, 0x02), (94, 1, 0x02), (104, 1, 0x02), (3, 1, 0x03),
        (86, 135, 0x02), (130, 135, 0x02), (68, 135, 0x02), (82, 135, 0x02),
        (99, 135, 0x02), (94, 135, 0x02), (104, 135, 0x02), (3, 135, 0x03),
    ],
    // 25
    [
        (170, 0, 0x00), (172, 0, 0x00), (174, 0, 0x00), (181, 0, 0x00),
        (187, 0, 0x00), (189, 0, 0x00), (195, 0, 0x00), (203, 0, 0x00),
        (209, 0, 0x00), (215, 0, 0x00), (43, 0, 0x00), (165, 0, 0x00),
        (192, 0, 0x00), (218, 0, 0x00), (211, 0, 0x00), (29, 0, 0x00),
    ],
    // 26
    [
        (0, 188, 0x03), (0, 191, 0x03), (0, 197, 0x03), (0, 231, 0x03),
        (0, 239, 0x03), (44, 0, 0x00), (166, 0, 0x00), (171, 0, 0x00),
        (193, 0, 0x00), (234, 0, 0x00), (245, 0, 0x00), (219, 0, 0x00),
        (212, 0, 0x00), (224, 0, 0x00), (229, 0, 0x00), (30, 0, 0x00),
    ],
    // 27
    [
        (0, 171, 0x03), (0, 206, 0x03), (0, 215, 0x03), (0, 225, 0x03),
        (0, 236, 0x03), (0, 237, 0x03), (220, 0, 0x00), (244, 0, 0x00),
        (213, 0, 0x00), (222, 0, 0x00), (237, 0, 0x00), (225, 0, 0x00),
        (230, 0, 0x00), (249, 0, 0x00), (31, 0, 0x00), (45, 0, 0x00),
    ],
    // 28
    [
        (214, 0, 0x00), (221, 0, 0x00), (223, 0, 0x00), (228, 0, 0x00),
        (238, 0, 0x00), (246, 0, 0x00), (248, 0, 0x00), (226, 0, 0x00),
        (231, 0, 0x00), (239, 0, 0x00), (250, 0, 0x00), (253, 0, 0x00),
        (32, 0, 0x00), (38, 0, 0x00), (55, 0, 0x00), (46, 0, 0x00),
    ],
    // 29
    [
        (232, 0, 0x00), (233, 0, 0x00), (240, 0, 0x00), (247, 0, 0x00),
        (251, 0, 0x00), (252, 0, 0x00), (254, 0, 0x00), (255, 0, 0x00),
        (33, 0, 0x00), (35, 0, 0x00), (39, 0, 0x00), (52, 0, 0x00),
        (56, 0, 0x00), (60, 0, 0x00), (63, 0, 0x00), (47, 0, 0x00),
    ],
    // 30
    [
        (0, 254, 0x03), (34, 0, 0x00), (36, 0, 0x00), (37, 0, 0x00),
        (40, 0, 0x00), (51, 0, 0x00), (53, 0, 0x00), (54, 0, 0x00),
        (57, 0, 0x00), (58, 0, 0x00), (61, 0, 0x00), (62, 0, 0x00),
        (64, 0, 0x00), (65, 0, 0x00), (147, 0, 0x00), (48, 0, 0x00),
    ],
    // 31
    [
        (66, 254, 0x02), (1, 254, 0x03), (0, 2, 0x03), (0, 3, 0x03),
        (0, 4, 0x03), (0, 5, 0x03), (0, 6, 0x03), (0, 7, 0x03),
        (0, 8, 0x03), (0, 11, 0x03), (0, 12, 0x03), (0, 14, 0x03),
        (0, 15, 0x03), (0, 16, 0x03), (0, 17, 0x03), (0, 18, 0x03),
    ],
    // 32
    [
        (85, 254, 0x02), (67, 254, 0x02), (93, 254, 0x02), (2, 254, 0x03),
        (66, 2, 0x02), (1, 2, 0x03), (66, 3, 0x02), (1, 3, 0x03),
        (66, 4, 0x02), (1, 4, 0x03), (66, 5, 0x02), (1, 5, 0x03),
        (66, 6, 0x02), (1, 6, 0x03), (66, 7, 0x02), (1, 7, 0x03),
    ],
    // 33
    [
        (86, 254, 0x02), (130, 254, 0x02), (68, 254, 0x02), (82, 254, 0x02),
        (99, 254, 0x02), (94, 254, 0x02), (104, 254, 0x02), (3, 254, 0x03),
        (85, 2, 0x02), (67, 2, 0x02), (93, 2, 0x02), (2, 2, 0x03),
        (85, 3, 0x02), (67, 3, 0x02), (93, 3, 0x02), (2, 3, 0x03),
    ],
    // 34
    [
        (86, 2, 0x02), (130, 2, 0x02), (68, 2, 0x02), (82, 2, 0x02),
        (99, 2, 0x02), (94, 2, 0x02), (104, 2, 0x02), (3, 2, 0x03),
        (86, 3, 0x02), (130, 3, 0x02), (68, 3, 0x02), (82, 3, 0x02),
        (99, 3, 0x02), (94, 3, 0x02), (104, 3, 0x02), (3, 3, 0x03),
    ],
    // 35
    [
        (85, 4, 0x02), (67, 4, 0x02), (93, 4, 0x02), (2, 4, 0x03),
        (85, 5, 0x02), (67, 5, 0x02), (93, 5, 0x02), (2, 5, 0x03),
        (85, 6, 0x02), (67, 6, 0x02), (93, 6, 0x02), (2, 6, 0x03),
        (85, 7, 0x02), (67, 7, 0x02), (93, 7, 0x02), (2, 7, 0x03),
    ],
    // 36
    [
        (86, 4, 0x02), (130, 4, 0x02), (68, 4, 0x02), (82, 4, 0x02),
        (99, 4, 0x02), (94, 4, 0x02), (104, 4, 0x02), (3, 4, 0x03),
        (86, 5, 0x02), (130, 5, 0x02), (68, 5, 0x02), (82, 5, 0x02),
        (99, 5, 0x02), (94, 5, 0x02), (104, 5, 0x02), (3, 5, 0x03),
    ],
    // 37
    [
        (86, 6, 0x02), (130, 6, 0x02), (68, 6, 0x02), (82, 6, 0x02),
        (99, 6, 0x02), (94, 6, 0x02), (104, 6, 0x02), (3, 6, 0x03),
        (86, 7, 0x02), (130, 7, 0x02), (68, 7, 0x02), (82, 7, 0x02),
        (99, 7, 0x02), (94, 7, 0x02), (104, 7, 0x02), (3, 7, 0x03),
    ],
    // 38
    [
        (66, 8, 0x02), (1, 8, 0x03), (66, 11, 0x02), (1, 11, 0x03),
        (66, 12, 0x02), (1, 12, 0x03), (66, 14, 0x02), (1, 14, 0x03),
        (66, 15, 0x02), (1, 15, 0x03), (66, 16, 0x02), (1, 16, 0x03),
        (66, 17, 0x02), (1, 17, 0x03), (66, 18, 0x02), (1, 18, 0x03),
    ],
    // 39
    [
        (85, 8, 0x02), (67, 8, 0x02), (93, 8, 0x02), (2, 8, 0x03),
        (85, 11, 0x02), (67, 11, 0x02), (93, 11, 0x02), (2, 11, 0x03),
        (85, 12, 0x02), (67, 12, 0x02), (93, 12, 0x02), (2, 12, 0x03),
        (85, 14, 0x02), (67, 14, 0x02), (93, 14, 0x02), (2, 14, 0x03),
    ],
    // 40
    [
        (86, 8, 0x02), (130, 8, 0x02), (68, 8, 0x02), (82, 8, 0x02),
        (99, 8, 0x02), (94, 8, 0x02), (104, 8, 0x02), (3, 8, 0x03),
        (86, 11, 0x02), (130, 11, 0x02), (68, 11, 0x02), (82, 11, 0x02),
        (99, 11, 0x02), (94, 11, 0x02), (104, 11, 0x02), (3, 11, 0x03),
    ],
    // 41
    [
        (66, 188, 0x02), (1, 188, 0x03), (66, 191, 0x02), (1, 191, 0x03),
        (66, 197, 0x02), (1, 197, 0x03), (66, 231, 0x02), (1, 231, 0x03),
        (66, 239, 0x02), (1, 239, 0x03), (0, 9, 0x03), (0, 142, 0x03),
        (0, 144, 0x03), (0, 145, 0x03), (0, 148, 0x03), (0, 159, 0x03),
    ],
    // 42
    [
        (85, 239, 0x02), (67, 239, 0x02), (93, 239, 0x02), (2, 239, 0x03),
        (66, 9, 0x02), (1, 9, 0x03), (66, 142, 0x02), (1, 142, 0x03),
        (66, 144, 0x02), (1, 144, 0x03), (66, 145, 0x02), (1, 145, 0x03),
        (66, 148, 0x02), (1, 148, 0x03), (66, 159, 0x02), (1, 159, 0x03),
    ],
    // 43
    [
        (86, 239, 0x02), (130, 239, 0x02), (68, 239, 0x02), (82, 239, 0x02),
        (99, 239, 0x02), (94, 239, 0x02), (104, 239, 0x02), (3, 239, 0x03),
        (85, 9, 0x02), (67, 9, 0x02), (93, 9, 0x02), (2, 9, 0x03),
        (85, 142, 0x02), (67, 142, 0x02), (93, 142, 0x02), (2, 142, 0x03),
    ],
    // 44
    [
        (86, 9, 0x02), (130, 9, 0x02), (68, 9, 0x02), (82, 9, 0x02),
        (99, 9, 0x02), (94, 9, 0x02), (104, 9, 0x02), (3, 9, 0x03),
        (86, 142, 0x02), (130, 142, 0x02), (68, 142, 0x02), (82, 142, 0x02),
        (99, 142, 0x02), (94, 142, 0x02), (104, 142, 0x02), (3, 142, 0x03),
    ],
    // 45
    [
        (0, 19, 0x03), (0, 20, 0x03), (0, 21, 0x03), (0, 23, 0x03),
        (0, 24, 0x03), (0, 25, 0x03), (0, 26, 0x03), (0, 27, 0x03),
        (0, 28, 0x03), (0, 29, 0x03), (0, 30, 0x03), (0, 31, 0x03),
        (0, 127, 0x03), (0, 220, 0x03), (0, 249, 0x03), (49, 0, 0x00),
    ],
    // 46
    [
        (66, 28, 0x02), (1, 28, 0x03), (66, 29, 0x02), (1, 29, 0x03),
        (66, 30, 0x02), (1, 30, 0x03), (66, 31, 0x02), (1, 31, 0x03),
        (66, 127, 0x02), (1, 127, 0x03), (66, 220, 0x02), (1, 220, 0x03),
        (66, 249, 0x02), (1, 249, 0x03), (50, 0, 0x00), (59, 0, 0x00),
    ],
    // 47
    [
        (85, 127, 0x02), (67, 127, 0x02), (93, 127, 0x02), (2, 127, 0x03),
        (85, 220, 0x02), (67, 220, 0x02), (93, 220, 0x02), (2, 220, 0x03),
        (85, 249, 0x02), (67, 249, 0x02), (93, 249, 0x02), (2, 249, 0x03),
        (0, 10, 0x03), (0, 13, 0x03), (0, 22, 0x03), (0, 0, 0x04),
    ],
    // 48
    [
        (86, 249, 0x02), (130, 249, 0x02), (68, 249, 0x02), (82, 249, 0x02),
        (99, 249, 0x02), (94, 249, 0x02), (104, 249, 0x02), (3, 249, 0x03),
        (66, 10, 0x02), (1, 10, 0x03), (66, 13, 0x02), (1, 13, 0x03),
        (66, 22, 0x02), (1, 22, 0x03), (0, 0, 0x04), (0, 0, 0x04),
    ],
    // 49
    [
        (85, 10, 0x02), (67, 10, 0x02), (93, 10, 0x02), (2, 10, 0x03),
        (85, 13, 0x02), (67, 13, 0x02), (93, 13, 0x02), (2, 13, 0x03),
        (85, 22, 0x02), (67, 22, 0x02), (93, 22, 0x02), (2, 22, 0x03),
        (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04),
    ],
    // 50
    [
        (86, 10, 0x02), (130, 10, 0x02), (68, 10, 0x02), (82, 10, 0x02),
        (99, 10, 0x02), (94, 10, 0x02), (104, 10, 0x02), (3, 10, 0x03),
        (86, 13, 0x02), (130, 13, 0x02), (68, 13, 0x02), (82, 13, 0x02),
        (99, 13, 0x02), (94, 13, 0x02), (104, 13, 0x02), (3, 13, 0x03),
    ],
    // 51
    [
        (86, 12, 0x02), (130, 12, 0x02), (68, 12, 0x02), (82, 12, 0x02),
        (99, 12, 0x02), (94, 12, 0x02), (104, 12, 0x02), (3, 12, 0x03),
        (86, 14, 0x02), (130, 14, 0x02), (68, 14, 0x02), (82, 14, 0x02),
        (99, 14, 0x02), (94, 14, 0x02), (104, 14, 0x02), (3, 14, 0x03),
    ],
    // 52
    [
        (85, 15, 0x02), (67, 15, 0x02), (93, 15, 0x02), (2, 15, 0x03),
        (85, 16, 0x02), (67, 16, 0x02), (93, 16, 0x02), (2, 16, 0x03),
        (85, 17, 0x02), (67, 17, 0x02), (93, 17, 0x02), (2, 17, 0x03),
        (85, 18, 0x02), (67, 18, 0x02), (93, 18, 0x02), (2, 18, 0x03),
    ],
    // 53
    [
        (86, 15, 0x02), (130, 15, 0x02), (68, 15, 0x02), (82, 15, 0x02),
        (99, 15, 0x02), (94, 15, 0x02), (104, 15, 0x02), (3, 15, 0x03),
        (86, 16, 0x02), (130, 16, 0x02), (68, 16, 0x02), (82, 16, 0x02),
        (99, 16, 0x02), (94, 16, 0x02), (104, 16, 0x02), (3, 16, 0x03),
    ],
    // 54
    [
        (86, 17, 0x02), (130, 17, 0x02), (68, 17, 0x02), (82, 17, 0x02),
        (99, 17, 0x02), (94, 17, 0x02), (104, 17, 0x02), (3, 17, 0x03),
        (86, 18, 0x02), (130, 18, 0x02), (68, 18, 0x02), (82, 18, 0x02),
        (99, 18, 0x02), (94, 18, 0x02), (104, 18, 0x02), (3, 18, 0x03),
    ],
    // 55
    [
        (66, 19, 0x02), (1, 19, 0x03), (66, 20, 0x02), (1, 20, 0x03),
        (66, 21, 0x02), (1, 21, 0x03), (66, 23, 0x02), (1, 23, 0x03),
        (66, 24, 0x02), (1, 24, 0x03), (66, 25, 0x02), (1, 25, 0x03),
        (66, 26, 0x02), (1, 26, 0x03), (66, 27, 0x02), (1, 27, 0x03),
    ],
    // 56
    [
        (85, 19, 0x02), (67, 19, 0x02), (93, 19, 0x02), (2, 19, 0x03),
        (85, 20, 0x02), (67, 20, 0x02), (93, 20, 0x02), (2, 20, 0x03),
        (85, 21, 0x02), (67, 21, 0x02), (93, 21, 0x02), (2, 21, 0x03),
        (85, 23, 0x02), (67, 23, 0x02), (93, 23, 0x02), (2, 23, 0x03),
    ],
    // 57
    [
        (86, 19, 0x02), (130, 19, 0x02), (68, 19, 0x02), (82, 19, 0x02),
        (99, 19, 0x02), (94, 19, 0x02), (104, 19, 0x02), (3, 19, 0x03),
        (86, 20, 0x02), (130, 20, 0x02), (68, 20, 0x02), (82, 20, 0x02),
        (99, 20, 0x02), (94, 20, 0x02), (104, 20, 0x02), (3, 20, 0x03),
    ],
    // 58
    [
        (86, 21, 0x02), (130, 21, 0x02), (68, 21, 0x02), (82, 21, 0x02),
        (99, 21, 0x02), (94, 21, 0x02), (104, 21, 0x02), (3, 21, 0x03),
        (86, 23, 0x02), (130, 23, 0x02), (68, 23, 0x02), (82, 23, 0x02),
        (99, 23, 0x02), (94, 23, 0x02), (104, 23, 0x02), (3, 23, 0x03),
    ],
    // 59
    [
        (86, 22, 0x02), (130, 22, 0x02), (68, 22, 0x02), (82, 22, 0x02),
        (99, 22, 0x02), (94, 22, 0x02), (104, 22, 0x02), (3, 22, 0x03),
        (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04),
        (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04),
    ],
    // 60
    [
        (85, 24, 0x02), (67, 24, 0x02), (93, 24, 0x02), (2, 24, 0x03),
        (85, 25, 0x02), (67, 25, 0x02), (93, 25, 0x02), (2, 25, 0x03),
        (85, 26, 0x02), (67, 26, 0x02), (93, 26, 0x02), (2, 26, 0x03),
        (85, 27, 0x02), (67, 27, 0x02), (93, 27, 0x02), (2, 27, 0x03),
    ],
    // 61
    [
        (86, 24, 0x02), (130, 24, 0x02), (68, 24, 0x02), (82, 24, 0x02),
        (99, 24, 0x02), (94, 24, 0x02), (104, 24, 0x02), (3, 24, 0x03),
        (86, 25, 0x02), (130, 25, 0x02), (68, 25, 0x02), (82, 25, 0x02),
        (99, 25, 0x02), (94, 25, 0x02), (104, 25, 0x02), (3, 25, 0x03),
    ],
    // 62
    [
        (86, 26, 0x02), (130, 26, 0x02), (68, 26, 0x02), (82, 26, 0x02),
        (99, 26, 0x02), (94, 26, 0x02), (104, 26, 0x02), (3, 26, 0x03),
        (86, 27, 0x02), (130, 27, 0x02), (68, 27, 0x02), (82, 27, 0x02),
        (99, 27, 0x02), (94, 27, 0x02), (104, 27, 0x02), (3, 27, 0x03),
    ],
    // 63
    [
        (85, 28, 0x02), (67, 28, 0x02), (93, 28, 0x02), (2, 28, 0x03),
        (85, 29, 0x02), (67, 29, 0x02), (93, 29, 0x02), (2, 29, 0x03),
        (85, 30, 0x02), (67, 30, 0x02), (93, 30, 0x02), (2, 30, 0x03),
        (85, 31, 0x02), (67, 31, 0x02), (93, 31, 0x02), (2, 31, 0x03),
    ],
    // 64
    [
        (86, 28, 0x02), (130, 28, 0x02), (68, 28, 0x02), (82, 28, 0x02),
        (99, 28, 0x02), (94, 28, 0x02), (104, 28, 0x02), (3, 28, 0x03),
        (86, 29, 0x02), (130, 29, 0x02), (68, 29, 0x02), (82, 29, 0x02),
        (99, 29, 0x02), (94, 29, 0x02), (104, 29, 0x02), (3, 29, 0x03),
    ],
    // 65
    [
        (86, 30, 0x02), (130, 30, 0x02), (68, 30, 0x02), (82, 30, 0x02),
        (99, 30, 0x02), (94, 30, 0x02), (104, 30, 0x02), (3, 30, 0x03),
        (86, 31, 0x02), (130, 31, 0x02), (68, 31, 0x02), (82, 31, 0x02),
        (99, 31, 0x02), (94, 31, 0x02), (104, 31, 0x02), (3, 31, 0x03),
    ],
    // 66
    [
        (0, 48, 0x03), (0, 49, 0x03), (0, 50, 0x03), (0, 97, 0x03),
        (0, 99, 0x03), (0, 101, 0x03), (0, 105, 0x03), (0, 111, 0x03),
        (0, 115, 0x03), (0, 116, 0x03), (70, 0, 0x00), (81, 0, 0x00),
        (84, 0, 0x00), (89, 0, 0x00), (91, 0, 0x00), (92, 0, 0x00),
    ],
    // 67
    [
        (66, 115, 0x02), (1, 115, 0x03), (66, 116, 0x02), (1, 116, 0x03),
        (0, 32, 0x03), (0, 37, 0x03), (0, 45, 0x03), (0, 46, 0x03),
        (0, 47, 0x03), (0, 51, 0x03), (0, 52, 0x03), (0, 53, 0x03),
        (0, 54, 0x03), (0, 55, 0x03), (0, 56, 0x03), (0, 57, 0x03),
    ],
    // 68
    [
        (85, 115, 0x02), (67, 115, 0x02), (93, 115, 0x02), (2, 115, 0x03),
        (85, 116, 0x02), (67, 116, 0x02), (93, 116, 0x02), (2, 116, 0x03),
        (66, 32, 0x02), (1, 32, 0x03), (66, 37, 0x02), (1, 37, 0x03),
        (66, 45, 0x02), (1, 45, 0x03), (66, 46, 0x02), (1, 46, 0x03),
    ],
    // 69
    [
        (85, 32, 0x02), (67, 32, 0x02), (93, 32, 0x02), (2, 32, 0x03),
        (85, 37, 0x02), (67, 37, 0x02), (93, 37, 0x02), (2, 37, 0x03),
        (85, 45, 0x02), (67, 45, 0x02), (93, 45, 0x02), (2, 45, 0x03),
        (85, 46, 0x02), (67, 46, 0x02), (93, 46, 0x02), (2, 46, 0x03),
    ],
    // 70
    [
        (86, 32, 0x02), (130, 32, 0x02), (68, 32, 0x02), (82, 32, 0x02),
        (99, 32, 0x02), (94, 32, 0x02), (104, 32, 0x02), (3, 32, 0x03),
        (86, 37, 0x02), (130, 37, 0x02), (68, 37, 0x02), (82, 37, 0x02),
        (99, 37, 0x02), (94, 37, 0x02), (104, 37, 0x02), (3, 37, 0x03),
    ],
    // 71
    [
        (85, 33, 0x02), (67, 33, 0x02), (93, 33, 0x02), (2, 33, 0x03),
        (85, 34, 0x02), (67, 34, 0x02), (93, 34, 0x02), (2, 34, 0x03),
        (85, 40, 0x02), (67, 40, 0x02), (93, 40, 0x02), (2, 40, 0x03),
        (85, 41, 0x02), (67, 41, 0x02), (93, 41, 0x02), (2, 41, 0x03),
    ],
    // 72
    [
        (86, 33, 0x02), (130, 33, 0x02), (68, 33, 0x02), (82, 33, 0x02),
        (99, 33, 0x02), (94, 33, 0x02), (104, 33, 0x02), (3, 33, 0x03),
        (86, 34, 0x02), (130, 34, 0x02), (68, 34, 0x02), (82, 34, 0x02),
        (99, 34, 0x02), (94, 34, 0x02), (104, 34, 0x02), (3, 34, 0x03),
    ],
    // 73
    [
        (86, 124, 0x02), (130, 124, 0x02), (68, 124, 0x02), (82, 124, 0x02),
        (99, 124, 0x02), (94, 124, 0x02), (104, 124, 0x02), (3, 124, 0x03),
        (85, 35, 0x02), (67, 35, 0x02), (93, 35, 0x02), (2, 35, 0x03),
        (85, 62, 0x02), (67, 62, 0x02), (93, 62, 0x02), (2, 62, 0x03),
    ],
    // 74
    [
        (86, 35, 0x02), (130, 35, 0x02), (68, 35, 0x02), (82, 35, 0x02),
        (99, 35, 0x02), (94, 35, 0x02), (104, 35, 0x02), (3, 35, 0x03),
        (86, 62, 0x02), (130, 62, 0x02), (68, 62, 0x02), (82, 62, 0x02),
        (99, 62, 0x02), (94, 62, 0x02), (104, 62, 0x02), (3, 62, 0x03),
    ],
    // 75
    [
        (85, 38, 0x02), (67, 38, 0x02), (93, 38, 0x02), (2, 38, 0x03),
        (85, 42, 0x02), (67, 42, 0x02), (93, 42, 0x02), (2, 42, 0x03),
        (85, 44, 0x02), (67, 44, 0x02), (93, 44, 0x02), (2, 44, 0x03),
        (85, 59, 0x02), (67, 59, 0x02), (93, 59, 0x02), (2, 59, 0x03),
    ],
    // 76
    [
        (86, 38, 0x02), (130, 38, 0x02), (68, 38, 0x02), (82, 38, 0x02),
        (99, 38, 0x02), (94, 38, 0x02), (104, 38, 0x02), (3, 38, 0x03),
        (86, 42, 0x02), (130, 42, 0x02), (68, 42, 0x02), (82, 42, 0x02),
        (99, 42, 0x02), (94, 42, 0x02), (104, 42, 0x02), (3, 42, 0x03),
    ],
    // 77
    [
        (86, 63, 0x02), (130, 63, 0x02), (68, 63, 0x02), (82, 63, 0x02),
        (99, 63, 0x02), (94, 63, 0x02), (104, 63, 0x02), (3, 63, 0x03),
        (85, 39, 0x02), (67, 39, 0x02), (93, 39, 0x02), (2, 39, 0x03),
        (85, 43, 0x02), (67, 43, 0x02), (93, 43, 0x02), (2, 43, 0x03),
    ],
    // 78
    [
        (86, 39, 0x02), (130, 39, 0x02), (68, 39, 0x02), (82, 39, 0x02),
        (99, 39, 0x02), (94, 39, 0x02), (104, 39, 0x02), (3, 39, 0x03),
        (86, 43, 0x02), (130, 43, 0x02), (68, 43, 0x02), (82, 43, 0x02),
        (99, 43, 0x02), (94, 43, 0x02), (104, 43, 0x02), (3, 43, 0x03),
    ],
    // 79
    [
        (86, 40, 0x02), (130, 40, 0x02), (68, 40, 0x02), (82, 40, 0x02),
        (99, 40, 0x02), (94, 40, 0x02), (104, 40, 0x02), (3, 40, 0x03),
        (86, 41, 0x02), (130, 41, 0x02), (68, 41, 0x02), (82, 41, 0x02),
        (99, 41, 0x02), (94, 41, 0x02), (104, 41, 0x02), (3, 41, 0x03),
    ],
    // 80
    [
        (86, 44, 0x02), (130, 44, 0x02), (68, 44, 0x02), (82, 44, 0x02),
        (99, 44, 0x02), (94, 44, 0x02), (104, 44, 0x02), (3, 44, 0x03),
        (86, 59, 0x02), (130, 59, 0x02), (68, 59, 0x02), (82, 59, 0x02),
        (99, 59, 0x02), (94, 59, 0x02), (104, 59, 0x02), (3, 59, 0x03),
    ],
    // 81
    [
        (86, 45, 0x02), (130, 45, 0x02), (68, 45, 0x02), (82, 45, 0x02),
        (99, 45, 0x02), (94, 45, 0x02), (104, 45, 0x02), (3, 45, 0x03),
        (86, 46, 0x02), (130, 46, 0x02), (68, 46, 0x02), (82, 46, 0x02),
        (99, 46, 0x02), (94, 46, 0x02), (104, 46, 0x02), (3, 46, 0x03),
    ],
    // 82
    [
        (66, 47, 0x02), (1, 47, 0x03), (66, 51, 0x02), (1, 51, 0x03),
        (66, 52, 0x02), (1, 52, 0x03), (66, 53, 0x02), (1, 53, 0x03),
        (66, 54, 0x02), (1, 54, 0x03), (66, 55, 0x02), (1, 55, 0x03),
        (66, 56, 0x02), (1, 56, 0x03), (66, 57, 0x02), (1, 57, 0x03),
    ],
    // 83
    [
        (85, 47, 0x02), (67, 47, 0x02), (93, 47, 0x02), (2, 47, 0x03),
        (85, 51, 0x02), (67, 51, 0x02), (93, 51, 0x02), (2, 51, 0x03),
        (85, 52, 0x02), (67, 52, 0x02), (93, 52, 0x02), (2, 52, 0x03),
        (85, 53, 0x02), (67, 53, 0x02), (93, 53, 0x02), (2, 53, 0x03),
    ],
    // 84
    [
        (86, 47, 0x02), (130, 47, 0x02), (68, 47, 0x02), (82, 47, 0x02),
        (99, 47, 0x02), (94, 47, 0x02), (104, 47, 0x02), (3, 47, 0x03),
        (86, 51, 0x02), (130, 51, 0x02), (68, 51, 0x02), (82, 51, 0x02),
        (99, 51, 0x02), (94, 51, 0x02), (104, 51, 0x02), (3, 51, 0x03),
    ],
    // 85
    [
        (66, 48, 0x02), (1, 48, 0x03), (66, 49, 0x02), (1, 49, 0x03),
        (66, 50, 0x02), (1, 50, 0x03), (66, 97, 0x02), (1, 97, 0x03),
        (66, 99, 0x02), (1, 99, 0x03), (66, 101, 0x02), (1, 101, 0x03),
        (66, 105, 0x02), (1, 105, 0x03), (66, 111, 0x02), (1, 111, 0x03),
    ],
    // 86
    [
        (85, 48, 0x02), (67, 48, 0x02), (93, 48, 0x02), (2, 48, 0x03),
        (85, 49, 0x02), (67, 49, 0x02), (93, 49, 0x02), (2, 49, 0x03),
        (85, 50, 0x02), (67, 50, 0x02), (93, 50, 0x02), (2, 50, 0x03),
        (85, 97, 0x02), (67, 97, 0x02), (93, 97, 0x02), (2, 97, 0x03),
    ],
    // 87
    [
        (86, 48, 0x02), (130, 48, 0x02), (68, 48, 0x02), (82, 48, 0x02),
        (99, 48, 0x02), (94, 48, 0x02), (104, 48, 0x02), (3, 48, 0x03),
        (86, 49, 0x02), (130, 49, 0x02), (68, 49, 0x02), (82, 49, 0x02),
        (99, 49, 0x02), (94, 49, 0x02), (104, 49, 0x02), (3, 49, 0x03),
    ],
    // 88
    [
        (86, 50, 0x02), (130, 50, 0x02), (68, 50, 0x02), (82, 50, 0x02),
        (99, 50, 0x02), (94, 50, 0x02), (104, 50, 0x02), (3, 50, 0x03),
        (86, 97, 0x02), (130, 97, 0x02), (68, 97, 0x02), (82, 97, 0x02),
        (99, 97, 0x02), (94, 97, 0x02), (104, 97, 0x02), (3, 97, 0x03),
    ],
    // 89
    [
        (86, 52, 0x02), (130, 52, 0x02), (68, 52, 0x02), (82, 52, 0x02),
        (99, 52, 0x02), (94, 52, 0x02), (104, 52, 0x02), (3, 52, 0x03),
        (86, 53, 0x02), (130, 53, 0x02), (68, 53, 0x02), (82, 53, 0x02),
        (99, 53, 0x02), (94, 53, 0x02), (104, 53, 0x02), (3, 53, 0x03),
    ],
    // 90
    [
        (85, 54, 0x02), (67, 54, 0x02), (93, 54, 0x02), (2, 54, 0x03),
        (85, 55, 0x02), (67, 55, 0x02), (93, 55, 0x02), (2, 55, 0x03),
        (85, 56, 0x02), (67, 56, 0x02), (93, 56, 0x02), (2, 56, 0x03),
        (85, 57, 0x02), (67, 57, 0x02), (93, 57, 0x02), (2, 57, 0x03),
    ],
    // 91
    [
        (86, 54, 0x02), (130, 54, 0x02), (68, 54, 0x02), (82, 54, 0x02),
        (99, 54, 0x02), (94, 54, 0x02), (104, 54, 0x02), (3, 54, 0x03),
        (86, 55, 0x02), (130, 55, 0x02), (68, 55, 0x02), (82, 55, 0x02),
        (99, 55, 0x02), (94, 55, 0x02), (104, 55, 0x02), (3, 55, 0x03),
    ],
    // 92
    [
        (86, 56, 0x02), (130, 56, 0x02), (68, 56, 0x02), (82, 56, 0x02),
        (99, 56, 0x02), (94, 56, 0x02), (104, 56, 0x02), (3, 56, 0x03),
        (86, 57, 0x02), (130, 57, 0x02), (68, 57, 0x02), (82, 57, 0x02),
        (99, 57, 0x02), (94, 57, 0x02), (104, 57, 0x02), (3, 57, 0x03),
    ],
    // 93
    [
        (0, 61, 0x03), (0, 65, 0x03), (0, 95, 0x03), (0, 98, 0x03),
        (0, 100, 0x03), (0, 102, 0x03), (0, 103, 0x03), (0, 104, 0x03),
        (0, 108, 0x03), (0, 109, 0x03), (0, 110, 0x03), (0, 112, 0x03),
        (0, 114, 0x03), (0, 117, 0x03), (97, 0, 0x00), (103, 0, 0x00),
    ],
    // 94
    [
        (66, 108, 0x02), (1, 108, 0x03), (66, 109, 0x02), (1, 109, 0x03),
        (66, 110, 0x02), (1, 110, 0x03), (66, 112, 0x02), (1, 112, 0x03),
        (66, 114, 0x02), (1, 114, 0x03), (66, 117, 0x02), (1, 117, 0x03),
        (0, 58, 0x03), (0, 66, 0x03), (0, 67, 0x03), (0, 68, 0x03),
    ],
    // 95
    [
        (85, 114, 0x02), (67, 114, 0x02), (93, 114, 0x02), (2, 114, 0x03),
        (85, 117, 0x02), (67, 117, 0x02), (93, 117, 0x02), (2, 117, 0x03),
        (66, 58, 0x02), (1, 58, 0x03), (66, 66, 0x02), (1, 66, 0x03),
        (66, 67, 0x02), (1, 67, 0x03), (66, 68, 0x02), (1, 68, 0x03),
    ],
    // 96
    [
        (85, 58, 0x02), (67, 58, 0x02), (93, 58, 0x02), (2, 58, 0x03),
        (85, 66, 0x02), (67, 66, 0x02), (93, 66, 0x02), (2, 66, 0x03),
        (85, 67, 0x02), (67, 67, 0x02), (93, 67, 0x02), (2, 67, 0x03),
        (85, 68, 0x02), (67, 68, 0x02), (93, 68, 0x02), (2, 68, 0x03),
    ],
    // 97
    [
        (86, 58, 0x02), (130, 58, 0x02), (68, 58, 0x02), (82, 58, 0x02),
        (99, 58, 0x02), (94, 58, 0x02), (104, 58, 0x02), (3, 58, 0x03),
        (86, 66, 0x02), (130, 66, 0x02), (68, 66, 0x02), (82, 66, 0x02),
        (99, 66, 0x02), (94, 66, 0x02), (104, 66, 0x02), (3, 66, 0x03),
    ],
    // 98
    [
        (86, 60, 0x02), (130, 60, 0x02), (68, 60, 0x02), (82, 60, 0x02),
        (99, 60, 0x02), (94, 60, 0x02), (104, 60, 0x02), (3, 60, 0x03),
        (86, 96, 0x02), (130, 96, 0x02), (68, 96, 0x02), (82, 96, 0x02),
        (99, 96, 0x02), (94, 96, 0x02), (104, 96, 0x02), (3, 96, 0x03),
    ],
    // 99
    [
        (66, 61, 0x02), (1, 61, 0x03), (66, 65, 0x02), (1, 65, 0x03),
        (66, 95, 0x02), (1, 95, 0x03), (66, 98, 0x02), (1, 98, 0x03),
        (66, 100, 0x02), (1, 100, 0x03), (66, 102, 0x02), (1, 102, 0x03),
        (66, 103, 0x02), (1, 103, 0x03), (66, 104, 0x02), (1, 104, 0x03),
    ],
    // 100
    [
        (85, 61, 0x02), (67, 61, 0x02), (93, 61, 0x02), (2, 61, 0x03),
        (85, 65, 0x02), (67, 65, 0x02), (93, 65, 0x02), (2, 65, 0x03),
        (85, 95, 0x02), (67, 95, 0x02), (93, 95, 0x02), (2, 95, 0x03),
        (85, 98, 0x02), (67, 98, 0x02), (93, 98, 0x02), (2, 98, 0x03),
    ],
    // 101
    [
        (86, 61, 0x02), (130, 61, 0x02), (68, 61, 0x02), (82, 61, 0x02),
        (99, 61, 0x02), (94, 61, 0x02), (104, 61, 0x02), (3, 61, 0x03),
        (86, 65, 0x02), (130, 65, 0x02), (68, 65, 0x02), (82, 65, 0x02),
        (99, 65, 0x02), (94, 65, 0x02), (104, 65, 0x02), (3, 65, 0x03),
    ],
    // 102
    [
        (86, 64, 0x02), (130, 64, 0x02), (68, 64, 0x02), (82, 64, 0x02),
        (99, 64, 0x02), (94, 64, 0x02), (104, 64, 0x02), (3, 64, 0x03),
        (86, 91, 0x02), (130, 91, 0x02), (68, 91, 0x02), (82, 91, 0x02),
        (99, 91, 0x02), (94, 91, 0x02), (104, 91, 0x02), (3, 91, 0x03),
    ],
    // 103
    [
        (86, 67, 0x02), (130, 67, 0x02), (68, 67, 0x02), (82, 67, 0x02),
        (99, 67, 0x02), (94, 67, 0x02), (104, 67, 0x02), (3, 67, 0x03),
        (86, 68, 0x02), (130, 68, 0x02), (68, 68, 0x02), (82, 68, 0x02),
        (99, 68, 0x02), (94, 68, 0x02), (104, 68, 0x02), (3, 68, 0x03),
    ],
    // 104
    [
        (0, 69, 0x03), (0, 70, 0x03), (0, 71, 0x03), (0, 72, 0x03),
        (0, 73, 0x03), (0, 74, 0x03), (0, 75, 0x03), (0, 76, 0x03),
        (0, 77, 0x03), (0, 78, 0x03), (0, 79, 0x03), (0, 80, 0x03),
        (0, 81, 0x03), (0, 82, 0x03), (0, 83, 0x03), (0, 84, 0x03),
    ],
    // 105
    [
        (66, 69, 0x02), (1, 69, 0x03), (66, 70, 0x02), (1, 70, 0x03),
        (66, 71, 0x02), (1, 71, 0x03), (66, 72, 0x02), (1, 72, 0x03),
        (66, 73, 0x02), (1, 73, 0x03), (66, 74, 0x02), (1, 74, 0x03),
        (66, 75, 0x02), (1, 75, 0x03), (66, 76, 0x02), (1, 76, 0x03),
    ],
    // 106
    [
        (85, 69, 0x02), (67, 69, 0x02), (93, 69, 0x02), (2, 69, 0x03),
        (85, 70, 0x02), (67, 70, 0x02), (93, 70, 0x02), (2, 70, 0x03),
        (85, 71, 0x02), (67, 71, 0x02), (93, 71, 0x02), (2, 71, 0x03),
        (85, 72, 0x02), (67, 72, 0x02), (93, 72, 0x02), (2, 72, 0x03),
    ],
    // 107
    [
        (86, 69, 0x02), (130, 69, 0x02), (68, 69, 0x02), (82, 69, 0x02),
        (99, 69, 0x02), (94, 69, 0x02), (104, 69, 0x02), (3, 69, 0x03),
        (86, 70, 0x02), (130, 70, 0x02), (68, 70, 0x02), (82, 70, 0x02),
        (99, 70, 0x02), (94, 70, 0x02), (104, 70, 0x02), (3, 70, 0x03),
    ],
    // 108
    [
        (86, 71, 0x02), (130, 71, 0x02), (68, 71, 0x02), (82, 71, 0x02),
        (99, 71, 0x02), (94, 71, 0x02), (104, 71, 0x02), (3, 71, 0x03),
        (86, 72, 0x02), (130, 72, 0x02), (68, 72, 0x02), (82, 72, 0x02),
        (99, 72, 0x02), (94, 72, 0x02), (104, 72, 0x02), (3, 72, 0x03),
    ],
    // 109
    [
        (85, 73, 0x02), (67, 73, 0x02), (93, 73, 0x02), (2, 73, 0x03),
        (85, 74, 0x02), (67, 74, 0x02), (93, 74, 0x02), (2, 74, 0x03),
        (85, 75, 0x02), (67, 75, 0x02), (93, 75, 0x02), (2, 75, 0x03),
        (85, 76, 0x02), (67, 76, 0x02), (93, 76, 0x02), (2, 76, 0x03),
    ],
    // 110
    [
        (86, 73, 0x02), (130, 73, 0x02), (68, 73, 0x02), (82, 73, 0x02),
        (99, 73, 0x02), (94, 73, 0x02), (104, 73, 0x02), (3, 73, 0x03),
        (86, 74, 0x02), (130, 74, 0x02), (68, 74, 0x02), (82, 74, 0x02),
        (99, 74, 0x02), (94, 74, 0x02), (104, 74, 0x02), (3, 74, 0x03),
    ],
    // 111
    [
        (86, 75, 0x02), (130, 75, 0x02), (68, 75, 0x02), (82, 75, 0x02),
        (99, 75, 0x02), (94, 75, 0x02), (104, 75, 0x02), (3, 75, 0x03),
        (86, 76, 0x02), (130, 76, 0x02), (68, 76, 0x02), (82, 76, 0x02),
        (99, 76, 0x02), (94, 76, 0x02), (104, 76, 0x02), (3, 76, 0x03),
    ],
    // 112
    [
        (66, 77, 0x02), (1, 77, 0x03), (66, 78, 0x02), (1, 78, 0x03),
        (66, 79, 0x02), (1, 79, 0x03), (66, 80, 0x02), (1, 80, 0x03),
        (66, 81, 0x02), (1, 81, 0x03), (66, 82, 0x02), (1, 82, 0x03),
        (66, 83, 0x02), (1, 83, 0x03), (66, 84, 0x02), (1, 84, 0x03),
    ],
    // 113
    [
        (85, 77, 0x02), (67, 77, 0x02), (93, 77, 0x02), (2, 77, 0x03),
        (85, 78, 0x02), (67, 78, 0x02), (93, 78, 0x02), (2, 78, 0x03),
        (85, 79, 0x02), (67, 79, 0x02), (93, 79, 0x02), (2, 79, 0x03),
        (85, 80, 0x02), (67, 80, 0x02), (93, 80, 0x02), (2, 80, 0x03),
    ],
    // 114
    [
        (86, 77, 0x02), (130, 77, 0x02), (68, 77, 0x02), (82, 77, 0x02),
        (99, 77, 0x02), (94, 77, 0x02), (104, 77, 0x02), (3, 77, 0x03),
        (86, 78, 0x02), (130, 78, 0x02), (68, 78, 0x02), (82, 78, 0x02),
        (99, 78, 0x02), (94, 78, 0x02), (104, 78, 0x02), (3, 78, 0x03),
    ],
    // 115
    [
        (86, 79, 0x02), (130, 79, 0x02), (68, 79, 0x02), (82, 79, 0x02),
        (99, 79, 0x02), (94, 79, 0x02), (104, 79, 0x02), (3, 79, 0x03),
        (86, 80, 0x02), (130, 80, 0x02), (68, 80, 0x02), (82, 80, 0x02),
        (99, 80, 0x02), (94, 80, 0x02), (104, 80, 0x02), (3, 80, 0x03),
    ],
    // 116
    [
        (85, 81, 0x02), (67, 81, 0x02), (93, 81, 0x02), (2, 81, 0x03),
        (85, 82, 0x02), (67, 82, 0x02), (93, 82, 0x02), (2, 82, 0x03),
        (85, 83, 0x02), (67, 83, 0x02), (93, 83, 0x02), (2, 83, 0x03),
        (85, 84, 0x02), (67, 84, 0x02), (93, 84, 0x02), (2, 84, 0x03),
    ],
    // 117
    [
        (86, 81, 0x02), (130, 81, 0x02), (68, 81, 0x02), (82, 81, 0x02),
        (99, 81, 0x02), (94, 81, 0x02), (104, 81, 0x02), (3, 81, 0x03),
        (86, 82, 0x02), (130, 82, 0x02), (68, 82, 0x02), (82, 82, 0x02),
        (99, 82, 0x02), (94, 82, 0x02), (104, 82, 0x02), (3, 82, 0x03),
    ],
    // 118
    [
        (86, 83, 0x02), (130, 83, 0x02), (68, 83, 0x02), (82, 83, 0x02),
        (99, 83, 0x02), (94, 83, 0x02), (104, 83, 0x02), (3, 83, 0x03),
        (86, 84, 0x02), (130, 84, 0x02), (68, 84, 0x02), (82, 84, 0x02),
        (99, 84, 0x02), (94, 84, 0x02), (104, 84, 0x02), (3, 84, 0x03),
    ],
    // 119
    [
        (66, 85, 0x02), (1, 85, 0x03), (66, 86, 0x02), (1, 86, 0x03),
        (66, 87, 0x02), (1, 87, 0x03), (66, 89, 0x02), (1, 89, 0x03),
        (66, 106, 0x02), (1, 106, 0x03), (66, 107, 0x02), (1, 107, 0x03),
        (66, 113, 0x02), (1, 113, 0x03), (66, 118, 0x02), (1, 118, 0x03),
    ],
    // 120
    [
        (85, 85, 0x02), (67, 85, 0x02), (93, 85, 0x02), (2, 85, 0x03),
        (85, 86, 0x02), (67, 86, 0x02), (93, 86, 0x02), (2, 86, 0x03),
        (85, 87, 0x02), (67, 87, 0x02), (93, 87, 0x02), (2, 87, 0x03),
        (85, 89, 0x02), (67, 89, 0x02), (93, 89, 0x02), (2, 89, 0x03),
    ],
    // 121
    [
        (86, 85, 0x02), (130, 85, 0x02), (68, 85, 0x02), (82, 85, 0x02),
        (99, 85, 0x02), (94, 85, 0x02), (104, 85, 0x02), (3, 85, 0x03),
        (86, 86, 0x02), (130, 86, 0x02), (68, 86, 0x02), (82, 86, 0x02),
        (99, 86, 0x02), (94, 86, 0x02), (104, 86, 0x02), (3, 86, 0x03),
    ],
    // 122
    [
        (86, 87, 0x02), (130, 87, 0x02), (68, 87, 0x02), (82, 87, 0x02),
        (99, 87, 0x02), (94, 87, 0x02), (104, 87, 0x02), (3, 87, 0x03),
        (86, 89, 0x02), (130, 89, 0x02), (68, 89, 0x02), (82, 89, 0x02),
        (99, 89, 0x02), (94, 89, 0x02), (104, 89, 0x02), (3, 89, 0x03),
    ],
    // 123
    [
        (86, 88, 0x02), (130, 88, 0x02), (68, 88, 0x02), (82, 88, 0x02),
        (99, 88, 0x02), (94, 88, 0x02), (104, 88, 0x02), (3, 88, 0x03),
        (86, 90, 0x02), (130, 90, 0x02), (68, 90, 0x02), (82, 90, 0x02),
        (99, 90, 0x02), (94, 90, 0x02), (104, 90, 0x02), (3, 90, 0x03),
    ],
    // 124
    [
        (66, 92, 0x02), (1, 92, 0x03), (66, 195, 0x02), (1, 195, 0x03),
        (66, 208, 0x02), (1, 208, 0x03), (0, 128, 0x03), (0, 130, 0x03),
        (0, 131, 0x03), (0, 162, 0x03), (0, 184, 0x03), (0, 194, 0x03),
        (0, 224, 0x03), (0, 226, 0x03), (177, 0, 0x00), (188, 0, 0x00),
    ],
    // 125
    [
        (85, 92, 0x02), (67, 92, 0x02), (93, 92, 0x02), (2, 92, 0x03),
        (85, 195, 0x02), (67, 195, 0x02), (93, 195, 0x02), (2, 195, 0x03),
        (85, 208, 0x02), (67, 208, 0x02), (93, 208, 0x02), (2, 208, 0x03),
        (66, 128, 0x02), (1, 128, 0x03), (66, 130, 0x02), (1, 130, 0x03),
    ],
    // 126
    [
        (86, 92, 0x02), (130, 92, 0x02), (68, 92, 0x02), (82, 92, 0x02),
        (99, 92, 0x02), (94, 92, 0x02), (104, 92, 0x02), (3, 92, 0x03),
        (86, 195, 0x02), (130, 195, 0x02), (68, 195, 0x02), (82, 195, 0x02),
        (99, 195, 0x02), (94, 195, 0x02), (104, 195, 0x02), (3, 195, 0x03),
    ],
    // 127
    [
        (86, 93, 0x02), (130, 93, 0x02), (68, 93, 0x02), (82, 93, 0x02),
        (99, 93, 0x02), (94, 93, 0x02), (104, 93, 0x02), (3, 93, 0x03),
        (86, 126, 0x02), (130, 126, 0x02), (68, 126, 0x02), (82, 126, 0x02),
        (99, 126, 0x02), (94, 126, 0x02), (104, 126, 0x02), (3, 126, 0x03),
    ],
    // 128
    [
        (86, 94, 0x02), (130, 94, 0x02), (68, 94, 0x02), (82, 94, 0x02),
        (99, 94, 0x02), (94, 94, 0x02), (104, 94, 0x02), (3, 94, 0x03),
        (86, 125, 0x02), (130, 125, 0x02), (68, 125, 0x02), (82, 125, 0x02),
        (99, 125, 0x02), (94, 125, 0x02), (104, 125, 0x02), (3, 125, 0x03),
    ],
    // 129
    [
        (86, 95, 0x02), (130, 95, 0x02), (68, 95, 0x02), (82, 95, 0x02),
        (99, 95, 0x02), (94, 95, 0x02), (104, 95, 0x02), (3, 95, 0x03),
        (86, 98, 0x02), (130, 98, 0x02), (68, 98, 0x02), (82, 98, 0x02),
        (99, 98, 0x02), (94, 98, 0x02), (104, 98, 0x02), (3, 98, 0x03),
    ],
    // 130
    [
        (85, 99, 0x02), (67, 99, 0x02), (93, 99, 0x02), (2, 99, 0x03),
        (85, 101, 0x02), (67, 101, 0x02), (93, 101, 0x02), (2, 101, 0x03),
        (85, 105, 0x02), (67, 105, 0x02), (93, 105, 0x02), (2, 105, 0x03),
        (85, 111, 0x02), (67, 111, 0x02), (93, 111, 0x02), (2, 111, 0x03),
    ],
    // 131
    [
        (86, 99, 0x02), (130, 99, 0x02), (68, 99, 0x02), (82, 99, 0x02),
        (99, 99, 0x02), (94, 99, 0x02), (104, 99, 0x02), (3, 99, 0x03),
        (86, 101, 0x02), (130, 101, 0x02), (68, 101, 0x02), (82, 101, 0x02),
        (99, 101, 0x02), (94, 101, 0x02), (104, 101, 0x02), (3, 101, 0x03),
    ],
    // 132
    [
        (85, 100, 0x02), (67, 100, 0x02), (93, 100, 0x02), (2, 100, 0x03),
        (85, 102, 0x02), (67, 102, 0x02), (93, 102, 0x02), (2, 102, 0x03),
        (85, 103, 0x02), (67, 103, 0x02), (93, 103, 0x02), (2, 103, 0x03),
        (85, 104, 0x02), (67, 104, 0x02), (93, 104, 0x02), (2, 104, 0x03),
    ],
    // 133
    [
        (86, 100, 0x02), (130, 100, 0x02), (68, 100, 0x02), (82, 100, 0x02),
        (99, 100, 0x02), (94, 100, 0x02), (104, 100, 0x02), (3, 100, 0x03),
        (86, 102, 0x02), (130, 102, 0x02), (68, 102, 0x02), (82, 102, 0x02),
        (99, 102, 0x02), (94, 102, 0x02), (104, 102, 0x02), (3, 102, 0x03),
    ],
    // 134
    [
        (86, 103, 0x02), (130, 103, 0x02), (68, 103, 0x02), (82, 103, 0x02),
        (99, 103, 0x02), (94, 103, 0x02), (104, 103, 0x02), (3, 103, 0x03),
        (86, 104, 0x02), (130, 104, 0x02), (68, 104, 0x02), (82, 104, 0x02),
        (99, 104, 0x02), (94, 104, 0x02), (104, 104, 0x02), (3, 104, 0x03),
    ],
    // 135
    [
        (86, 105, 0x02), (130, 105, 0x02), (68, 105, 0x02), (82, 105, 0x02),
        (99, 105, 0x02), (94, 105, 0x02), (104, 105, 0x02), (3, 105, 0x03),
        (86, 111, 0x02), (130, 111, 0x02), (68, 111, 0x02), (82, 111, 0x02),
        (99, 111, 0x02), (94, 111, 0x02), (104, 111, 0x02), (3, 111, 0x03),
    ],
    // 136
    [
        (85, 106, 0x02), (67, 106, 0x02), (93, 106, 0x02), (2, 106, 0x03),
        (85, 107, 0x02), (67, 107, 0x02), (93, 107, 0x02), (2, 107, 0x03),
        (85, 113, 0x02), (67, 113, 0x02), (93, 113, 0x02), (2, 113, 0x03),
        (85, 118, 0x02), (67, 118, 0x02), (93, 118, 0x02), (2, 118, 0x03),
    ],
    // 137
    [
        (86, 106, 0x02), (130, 106, 0x02), (68, 106, 0x02), (82, 106, 0x02),
        (99, 106, 0x02), (94, 106, 0x02), (104, 106, 0x02), (3, 106, 0x03),
        (86, 107, 0x02), (130, 107, 0x02), (68, 107, 0x02), (82, 107, 0x02),
        (99, 107, 0x02), (94, 107, 0x02), (104, 107, 0x02), (3, 107, 0x03),
    ],
    // 138
    [
        (85, 108, 0x02), (67, 108, 0x02), (93, 108, 0x02), (2, 108, 0x03),
        (85, 109, 0x02), (67, 109, 0x02), (93, 109, 0x02), (2, 109, 0x03),
        (85, 110, 0x02), (67, 110, 0x02), (93, 110, 0x02), (2, 110, 0x03),
        (85, 112, 0x02), (67, 112, 0x02), (93, 112, 0x02), (2, 112, 0x03),
    ],
    // 139
    [
        (86, 108, 0x02), (130, 108, 0x02), (68, 108, 0x02), (82, 108, 0x02),
        (99, 108, 0x02), (94, 108, 0x02), (104, 108, 0x02), (3, 108, 0x03),
        (86, 109, 0x02), (130, 109, 0x02), (68, 109, 0x02), (82, 109, 0x02),
        (99, 109, 0x02), (94, 109, 0x02), (104, 109, 0x02), (3, 109, 0x03),
    ],
    // 140
    [
        (86, 110, 0x02), (130, 110, 0x02), (68, 110, 0x02), (82, 110, 0x02),
        (99, 110, 0x02), (94, 110, 0x02), (104, 110, 0x02), (3, 110, 0x03),
        (86, 112, 0x02), (130, 112, 0x02), (68, 112, 0x02), (82, 112, 0x02),
        (99, 112, 0x02), (94, 112, 0x02), (104, 112, 0x02), (3, 112, 0x03),
    ],
    // 141
    [
        (86, 113, 0x02), (130, 113, 0x02), (68, 113, 0x02), (82, 113, 0x02),
        (99, 113, 0x02), (94, 113, 0x02), (104, 113, 0x02), (3, 113, 0x03),
        (86, 118, 0x02), (130, 118, 0x02), (68, 118, 0x02), (82, 118, 0x02),
        (99, 118, 0x02), (94, 118, 0x02), (104, 118, 0x02), (3, 118, 0x03),
    ],
    // 142
    [
        (86, 114, 0x02), (130, 114, 0x02), (68, 114, 0x02), (82, 114, 0x02),
        (99, 114, 0x02), (94, 114, 0x02), (104, 114, 0x02), (3, 114, 0x03),
        (86, 117, 0x02), (130, 117, 0x02), (68, 117, 0x02), (82, 117, 0x02),
        (99, 117, 0x02), (94, 117, 0x02), (104, 117, 0x02), (3, 117, 0x03),
    ],
    // 143
    [
        (86, 115, 0x02), (130, 115, 0x02), (68, 115, 0x02), (82, 115, 0x02),
        (99, 115, 0x02), (94, 115, 0x02), (104, 115, 0x02), (3, 115, 0x03),
        (86, 116, 0x02), (130, 116, 0x02), (68, 116, 0x02), (82, 116, 0x02),
        (99, 116, 0x02), (94, 116, 0x02), (104, 116, 0x02), (3, 116, 0x03),
    ],
    // 144
    [
        (85, 119, 0x02), (67, 119, 0x02), (93, 119, 0x02), (2, 119, 0x03),
        (85, 120, 0x02), (67, 120, 0x02), (93, 120, 0x02), (2, 120, 0x03),
        (85, 121, 0x02), (67, 121, 0x02), (93, 121, 0x02), (2, 121, 0x03),
        (85, 122, 0x02), (67, 122, 0x02), (93, 122, 0x02), (2, 122, 0x03),
    ],
    // 145
    [
        (86, 119, 0x02), (130, 119, 0x02), (68, 119, 0x02), (82, 119, 0x02),
        (99, 119, 0x02), (94, 119, 0x02), (104, 119, 0x02), (3, 119, 0x03),
        (86, 120, 0x02), (130, 120, 0x02), (68, 120, 0x02), (82, 120, 0x02),
        (99, 120, 0x02), (94, 120, 0x02), (104, 120, 0x02), (3, 120, 0x03),
    ],
    // 146
    [
        (86, 121, 0x02), (130, 121, 0x02), (68, 121, 0x02), (82, 121, 0x02),
        (99, 121, 0x02), (94, 121, 0x02), (104, 121, 0x02), (3, 121, 0x03),
        (86, 122, 0x02), (130, 122, 0x02), (68, 122, 0x02), (82, 122, 0x02),
        (99, 122, 0x02), (94, 122, 0x02), (104, 122, 0x02), (3, 122, 0x03),
    ],
    // 147
    [
        (86, 127, 0x02), (130, 127, 0x02), (68, 127, 0x02), (82, 127, 0x02),
        (99, 127, 0x02), (94, 127, 0x02), (104, 127, 0x02), (3, 127, 0x03),
        (86, 220, 0x02), (130, 220, 0x02), (68, 220, 0x02), (82, 220, 0x02),
        (99, 220, 0x02), (94, 220, 0x02), (104, 220, 0x02), (3, 220, 0x03),
    ],
    // 148
    [
        (86, 208, 0x02), (130, 208, 0x02), (68, 208, 0x02), (82, 208, 0x02),
        (99, 208, 0x02), (94, 208, 0x02), (104, 208, 0x02), (3, 208, 0x03),
        (85, 128, 0x02), (67, 128, 0x02), (93, 128, 0x02), (2, 128, 0x03),
        (85, 130, 0x02), (67, 130, 0x02), (93, 130, 0x02), (2, 130, 0x03),
    ],
    // 149
    [
        (86, 128, 0x02), (130, 128, 0x02), (68, 128, 0x02), (82, 128, 0x02),
        (99, 128, 0x02), (94, 128, 0x02), (104, 128, 0x02), (3, 128, 0x03),
        (86, 130, 0x02), (130, 130, 0x02), (68, 130, 0x02), (82, 130, 0x02),
        (99, 130, 0x02), (94, 130, 0x02), (104, 130, 0x02), (3, 130, 0x03),
    ],
    // 150
    [
        (0, 176, 0x03), (0, 177, 0x03), (0, 179, 0x03), (0, 209, 0x03),
        (0, 216, 0x03), (0, 217, 0x03), (0, 227, 0x03), (0, 229, 0x03),
        (0, 230, 0x03), (154, 0, 0x00), (159, 0, 0x00), (160, 0, 0x00),
        (180, 0, 0x00), (182, 0, 0x00), (184, 0, 0x00), (190, 0, 0x00),
    ],
    // 151
    [
        (66, 230, 0x02), (1, 230, 0x03), (0, 129, 0x03), (0, 132, 0x03),
        (0, 133, 0x03), (0, 134, 0x03), (0, 136, 0x03), (0, 146, 0x03),
        (0, 154, 0x03), (0, 156, 0x03), (0, 160, 0x03), (0, 163, 0x03),
        (0, 164, 0x03), (0, 169, 0x03), (0, 170, 0x03), (0, 173, 0x03),
    ],
    // 152
    [
        (85, 230, 0x02), (67, 230, 0x02), (93, 230, 0x02), (2, 230, 0x03),
        (66, 129, 0x02), (1, 129, 0x03), (66, 132, 0x02), (1, 132, 0x03),
        (66, 133, 0x02), (1, 133, 0x03), (66, 134, 0x02), (1, 134, 0x03),
        (66, 136, 0x02), (1, 136, 0x03), (66, 146, 0x02), (1, 146, 0x03),
    ],
    // 153
    [
        (86, 230, 0x02), (130, 230, 0x02), (68, 230, 0x02), (82, 230, 0x02),
        (99, 230, 0x02), (94, 230, 0x02), (104, 230, 0x02), (3, 230, 0x03),
        (85, 129, 0x02), (67, 129, 0x02), (93, 129, 0x02), (2, 129, 0x03),
        (85, 132, 0x02), (67, 132, 0x02), (93, 132, 0x02), (2, 132, 0x03),
    ],
    // 154
    [
        (86, 129, 0x02), (130, 129, 0x02), (68, 129, 0x02), (82, 129, 0x02),
        (99, 129, 0x02), (94, 129, 0x02), (104, 129, 0x02), (3, 129, 0x03),
        (86, 132, 0x02), (130, 132, 0x02), (68, 132, 0x02), (82, 132, 0x02),
        (99, 132, 0x02), (94, 132, 0x02), (104, 132, 0x02), (3, 132, 0x03),
    ],
    // 155
    [
        (66, 131, 0x02), (1, 131, 0x03), (66, 162, 0x02), (1, 162, 0x03),
        (66, 184, 0x02), (1, 184, 0x03), (66, 194, 0x02), (1, 194, 0x03),
        (66, 224, 0x02), (1, 224, 0x03), (66, 226, 0x02), (1, 226, 0x03),
        (0, 153, 0x03), (0, 161, 0x03), (0, 167, 0x03), (0, 172, 0x03),
    ],
    // 156
    [
        (85, 131, 0x02), (67, 131, 0x02), (93, 131, 0x02), (2, 131, 0x03),
        (85, 162, 0x02), (67, 162, 0x02), (93, 162, 0x02), (2, 162, 0x03),
        (85, 184, 0x02), (67, 184, 0x02), (93, 184, 0x02), (2, 184, 0x03),
        (85, 194, 0x02), (67, 194, 0x02), (93, 194, 0x02), (2, 194, 0x03),
    ],
    // 157
    [
        (86, 131, 0x02), (130, 131, 0x02), (68, 131, 0x02), (82, 131, 0x02),
        (99, 131, 0x02), (94, 131, 0x02), (104, 131, 0x02), (3, 131, 0x03),
        (86, 162, 0x02), (130, 162, 0x02), (68, 162, 0x02), (82, 162, 0x02),
        (99, 162, 0x02), (94, 162, 0x02), (104, 162, 0x02), (3, 162, 0x03),
    ],
    // 158
    [
        (85, 133, 0x02), (67, 133, 0x02), (93, 133, 0x02), (2, 133, 0x03),
        (85, 134, 0x02), (67, 134, 0x02), (93, 134, 0x02), (2, 134, 0x03),
        (85, 136, 0x02), (67, 136, 0x02), (93, 136, 0x02), (2, 136, 0x03),
        (85, 146, 0x02), (67, 146, 0x02), (93, 146, 0x02), (2, 146, 0x03),
    ],
    // 159
    [
        (86, 133, 0x02), (130, 133, 0x02), (68, 133, 0x02), (82, 133, 0x02),
        (99, 133, 0x02), (94, 133, 0x02), (104, 133, 0x02), (3, 133, 0x03),
        (86, 134, 0x02), (130, 134, 0x02), (68, 134, 0x02), (82, 134, 0x02),
        (99, 134, 0x02), (94, 134, 0x02), (104, 134, 0x02), (3, 134, 0x03),
    ],
    // 160
    [
        (86, 136, 0x02), (130, 136, 0x02), (68, 136, 0x02), (82, 136, 0x02),
        (99, 136, 0x02), (94, 136, 0x02), (104, 136, 0x02), (3, 136, 0x03),
        (86, 146, 0x02), (130, 146, 0x02), (68, 146, 0x02), (82, 146, 0x02),
        (99, 146, 0x02), (94, 146, 0x02), (104, 146, 0x02), (3, 146, 0x03),
    ],
    // 161
    [
        (86, 137, 0x02), (130, 137, 0x02), (68, 137, 0x02), (82, 137, 0x02),
        (99, 137, 0x02), (94, 137, 0x02), (104, 137, 0x02), (3, 137, 0x03),
        (86, 138, 0x02), (130, 138, 0x02), (68, 138, 0x02), (82, 138, 0x02),
        (99, 138, 0x02), (94, 138, 0x02), (104, 138, 0x02), (3, 138, 0x03),
    ],
    // 162
    [
        (85, 139, 0x02), (67, 139, 0x02), (93, 139, 0x02), (2, 139, 0x03),
        (85, 140, 0x02), (67, 140, 0x02), (93, 140, 0x02), (2, 140, 0x03),
        (85, 141, 0x02), (67, 141, 0x02), (93, 141, 0x02), (2, 141, 0x03),
        (85, 143, 0x02), (67, 143, 0x02), (93, 143, 0x02), (2, 143, 0x03),
    ],
    // 163
    [
        (86, 139, 0x02), (130, 139, 0x02), (68, 139, 0x02), (82, 139, 0x02),
        (99, 139, 0x02), (94, 139, 0x02), (104, 139, 0x02), (3, 139, 0x03),
        (86, 140, 0x02), (130, 140, 0x02), (68, 140, 0x02), (82, 140, 0x02),
        (99, 140, 0x02), (94, 140, 0x02), (104, 140, 0x02), (3, 140, 0x03),
    ],
    // 164
    [
        (86, 141, 0x02), (130, 141, 0x02), (68, 141, 0x02), (82, 141, 0x02),
        (99, 141, 0x02), (94, 141, 0x02), (104, 141, 0x02), (3, 141, 0x03),
        (86, 143, 0x02), (130, 143, 0x02), (68, 143, 0x02), (82, 143, 0x02),
        (99, 143, 0x02), (94, 143, 0x02), (104, 143, 0x02), (3, 143, 0x03),
    ],
    // 165
    [
        (85, 144, 0x02), (67, 144, 0x02), (93, 144, 0x02), (2, 144, 0x03),
        (85, 145, 0x02), (67, 145, 0x02), (93, 145, 0x02), (2, 145, 0x03),
        (85, 148, 0x02), (67, 148, 0x02), (93, 148, 0x02), (2, 148, 0x03),
        (85, 159, 0x02), (67, 159, 0x02), (93, 159, 0x02), (2, 159, 0x03),
    ],
    // 166
    [
        (86, 144, 0x02), (130, 144, 0x02), (68, 144, 0x02), (82, 144, 0x02),
        (99, 144, 0x02), (94, 144, 0x02), (104, 144, 0x02), (3, 144, 0x03),
        (86, 145, 0x02), (130, 145, 0x02), (68, 145, 0x02), (82, 145, 0x02),
        (99, 145, 0x02), (94, 145, 0x02), (104, 145, 0x02), (3, 145, 0x03),
    ],
    // 167
    [
        (0, 147, 0x03), (0, 149, 0x03), (0, 150, 0x03), (0, 151, 0x03),
        (0, 152, 0x03), (0, 155, 0x03), (0, 157, 0x03), (0, 158, 0x03),
        (0, 165, 0x03), (0, 166, 0x03), (0, 168, 0x03), (0, 174, 0x03),
        (0, 175, 0x03), (0, 180, 0x03), (0, 182, 0x03), (0, 183, 0x03),
    ],
    // 168
    [
        (66, 147, 0x02), (1, 147, 0x03), (66, 149, 0x02), (1, 149, 0x03),
        (66, 150, 0x02), (1, 150, 0x03), (66, 151, 0x02), (1, 151, 0x03),
        (66, 152, 0x02), (1, 152, 0x03), (66, 155, 0x02), (1, 155, 0x03),
        (66, 157, 0x02), (1, 157, 0x03), (66, 158, 0x02), (1, 158, 0x03),
    ],
    // 169
    [
        (85, 147, 0x02), (67, 147, 0x02), (93, 147, 0x02), (2, 147, 0x03),
        (85, 149, 0x02), (67, 149, 0x02), (93, 149, 0x02), (2, 149, 0x03),
        (85, 150, 0x02), (67, 150, 0x02), (93, 150, 0x02), (2, 150, 0x03),
        (85, 151, 0x02), (67, 151, 0x02), (93, 151, 0x02), (2, 151, 0x03),
    ],
    // 170
    [
        (86, 147, 0x02), (130, 147, 0x02), (68, 147, 0x02), (82, 147, 0x02),
        (99, 147, 0x02), (94, 147, 0x02), (104, 147, 0x02), (3, 147, 0x03),
        (86, 149, 0x02), (130, 149, 0x02), (68, 149, 0x02), (82, 149, 0x02),
        (99, 149, 0x02), (94, 149, 0x02), (104, 149, 0x02), (3, 149, 0x03),
    ],
    // 171
    [
        (86, 148, 0x02), (130, 148, 0x02), (68, 148, 0x02), (82, 148, 0x02),
        (99, 148, 0x02), (94, 148, 0x02), (104, 148, 0x02), (3, 148, 0x03),
        (86, 159, 0x02), (130, 159, 0x02), (68, 159, 0x02), (82, 159, 0x02),
        (99, 159, 0x02), (94, 159, 0x02), (104, 159, 0x02), (3, 159, 0x03),
    ],
    // 172
    [
        (86, 150, 0x02), (130, 150, 0x02), (68, 150, 0x02), (82, 150, 0x02),
        (99, 150, 0x02), (94, 150, 0x02), (104, 150, 0x02), (3, 150, 0x03),
        (86, 151, 0x02), (130, 151, 0x02), (68, 151, 0x02), (82, 151, 0x02),
        (99, 151, 0x02), (94, 151, 0x02), (104, 151, 0x02), (3, 151, 0x03),
    ],
    // 173
    [
        (85, 152, 0x02), (67, 152, 0x02), (93, 152, 0x02), (2, 152, 0x03),
        (85, 155, 0x02), (67, 155, 0x02), (93, 155, 0x02), (2, 155, 0x03),
        (85, 157, 0x02), (67, 157, 0x02), (93, 157, 0x02), (2, 157, 0x03),
        (85, 158, 0x02), (67, 158, 0x02), (93, 158, 0x02), (2, 158, 0x03),
    ],
    // 174
    [
        (86, 152, 0x02), (130, 152, 0x02), (68, 152, 0x02), (82, 152, 0x02),
        (99, 152, 0x02), (94, 152, 0x02), (104, 152, 0x02), (3, 152, 0x03),
        (86, 155, 0x02), (130, 155, 0x02), (68, 155, 0x02), (82, 155, 0x02),
        (99, 155, 0x02), (94, 155, 0x02), (104, 155, 0x02), (3, 155, 0x03),
    ],
    // 175
    [
        (85, 224, 0x02), (67, 224, 0x02), (93, 224, 0x02), (2, 224, 0x03),
        (85, 226, 0x02), (67, 226, 0x02), (93, 226, 0x02), (2, 226, 0x03),
        (66, 153, 0x02), (1, 153, 0x03), (66, 161, 0x02), (1, 161, 0x03),
        (66, 167, 0x02), (1, 167, 0x03), (66, 172, 0x02), (1, 172, 0x03),
    ],
    // 176
    [
        (85, 153, 0x02), (67, 153, 0x02), (93, 153, 0x02), (2, 153, 0x03),
        (85, 161, 0x02), (67, 161, 0x02), (93, 161, 0x02), (2, 161, 0x03),
        (85, 167, 0x02), (67, 167, 0x02), (93, 167, 0x02), (2, 167, 0x03),
        (85, 172, 0x02), (67, 172, 0x02), (93, 172, 0x02), (2, 172, 0x03),
    ],
    // 177
    [
        (86, 153, 0x02), (130, 153, 0x02), (68, 153, 0x02), (82, 153, 0x02),
        (99, 153, 0x02), (94, 153, 0x02), (104, 153, 0x02), (3, 153, 0x03),
        (86, 161, 0x02), (130, 161, 0x02), (68, 161, 0x02), (82, 161, 0x02),
        (99, 161, 0x02), (94, 161, 0x02), (104, 161, 0x02), (3, 161, 0x03),
    ],
    // 178
    [
        (66, 154, 0x02), (1, 154, 0x03), (66, 156, 0x02), (1, 156, 0x03),
        (66, 160, 0x02), (1, 160, 0x03), (66, 163, 0x02), (1, 163, 0x03),
        (66, 164, 0x02), (1, 164, 0x03), (66, 169, 0x02), (1, 169, 0x03),
        (66, 170, 0x02), (1, 170, 0x03), (66, 173, 0x02), (1, 173, 0x03),
    ],
    // 179
    [
        (85, 154, 0x02), (67, 154, 0x02), (93, 154, 0x02), (2, 154, 0x03),
        (85, 156, 0x02), (67, 156, 0x02), (93, 156, 0x02), (2, 156, 0x03),
        (85, 160, 0x02), (67, 160, 0x02), (93, 160, 0x02), (2, 160, 0x03),
        (85, 163, 0x02), (67, 163, 0x02), (93, 163, 0x02), (2, 163, 0x03),
    ],
    // 180
    [
        (86, 154, 0x02), (130, 154, 0x02), (68, 154, 0x02), (82, 154, 0x02),
        (99, 154, 0x02), (94, 154, 0x02), (104, 154, 0x02), (3, 154, 0x03),
        (86, 156, 0x02), (130, 156, 0x02), (68, 156, 0x02), (82, 156, 0x02),
        (99, 156, 0x02), (94, 156, 0x02), (104, 156, 0x02), (3, 156, 0x03),
    ],
    // 181
    [
        (86, 157, 0x02), (130, 157, 0x02), (68, 157, 0x02), (82, 157, 0x02),
        (99, 157, 0x02), (94, 157, 0x02), (104, 157, 0x02), (3, 157, 0x03),
        (86, 158, 0x02), (130, 158, 0x02), (68, 158, 0x02), (82, 158, 0x02),
        (99, 158, 0x02), (94, 158, 0x02), (104, 158, 0x02), (3, 158, 0x03),
    ],
    // 182
    [
        (86, 160, 0x02), (130, 160, 0x02), (68, 160, 0x02), (82, 160, 0x02),
        (99, 160, 0x02), (94, 160, 0x02), (104, 160, 0x02), (3, 160, 0x03),
        (86, 163, 0x02), (130, 163, 0x02), (68, 163, 0x02), (82, 163, 0x02),
        (99, 163, 0x02), (94, 163, 0x02), (104, 163, 0x02), (3, 163, 0x03),
    ],
    // 183
    [
        (85, 164, 0x02), (67, 164, 0x02), (93, 164, 0x02), (2, 164, 0x03),
        (85, 169, 0x02), (67, 169, 0x02), (93, 169, 0x02), (2, 169, 0x03),
        (85, 170, 0x02), (67, 170, 0x02), (93, 170, 0x02), (2, 170, 0x03),
        (85, 173, 0x02), (67, 173, 0x02), (93, 173, 0x02), (2, 173, 0x03),
    ],
    // 184
    [
        (86, 164, 0x02), (130, 164, 0x02), (68, 164, 0x02), (82, 164, 0x02),
        (99, 164, 0x02), (94, 164, 0x02), (104, 164, 0x02), (3, 164, 0x03),
        (86, 169, 0x02), (130, 169, 0x02), (68, 169, 0x02), (82, 169, 0x02),
        (99, 169, 0x02), (94, 169, 0x02), (104, 169, 0x02), (3, 169, 0x03),
    ],
    // 185
    [
        (66, 165, 0x02), (1, 165, 0x03), (66, 166, 0x02), (1, 166, 0x03),
        (66, 168, 0x02), (1, 168, 0x03), (66, 174, 0x02), (1, 174, 0x03),
        (66, 175, 0x02), (1, 175, 0x03), (66, 180, 0x02), (1, 180, 0x03),
        (66, 182, 0x02), (1, 182, 0x03), (66, 183, 0x02), (1, 183, 0x03),
    ],
    // 186
    [
        (85, 165, 0x02), (67, 165, 0x02), (93, 165, 0x02), (2, 165, 0x03),
        (85, 166, 0x02), (67, 166, 0x02), (93, 166, 0x02), (2, 166, 0x03),
        (85, 168, 0x02), (67, 168, 0x02), (93, 168, 0x02), (2, 168, 0x03),
        (85, 174, 0x02), (67, 174, 0x02), (93, 174, 0x02), (2, 174, 0x03),
    ],
    // 187
    [
        (86, 165, 0x02), (130, 165, 0x02), (68, 165, 0x02), (82, 165, 0x02),
        (99, 165, 0x02), (94, 165, 0x02), (104, 165, 0x02), (3, 165, 0x03),
        (86, 166, 0x02), (130, 166, 0x02), (68, 166, 0x02), (82, 166, 0x02),
        (99, 166, 0x02), (94, 166, 0x02), (104, 166, 0x02), (3, 166, 0x03),
    ],
    // 188
    [
        (86, 167, 0x02), (130, 167, 0x02), (68, 167, 0x02), (82, 167, 0x02),
        (99, 167, 0x02), (94, 167, 0x02), (104, 167, 0x02), (3, 167, 0x03),
        (86, 172, 0x02), (130, 172, 0x02), (68, 172, 0x02), (82, 172, 0x02),
        (99, 172, 0x02), (94, 172, 0x02), (104, 172, 0x02), (3, 172, 0x03),
    ],
    // 189
    [
        (86, 168, 0x02), (130, 168, 0x02), (68, 168, 0x02), (82, 168, 0x02),
        (99, 168, 0x02), (94, 168, 0x02), (104, 168, 0x02), (3, 168, 0x03),
        (86, 174, 0x02), (130, 174, 0x02), (68, 174, 0x02), (82, 174, 0x02),
        (99, 174, 0x02), (94, 174, 0x02), (104, 174, 0x02), (3, 174, 0x03),
    ],
    // 190
    [
        (86, 170, 0x02), (130, 170, 0x02), (68, 170, 0x02), (82, 170, 0x02),
        (99, 170, 0x02), (94, 170, 0x02), (104, 170, 0x02), (3, 170, 0x03),
        (86, 173, 0x02), (130, 173, 0x02), (68, 173, 0x02), (82, 173, 0x02),
        (99, 173, 0x02), (94, 173, 0x02), (104, 173, 0x02), (3, 173, 0x03),
    ],
    // 191
    [
        (66, 171, 0x02), (1, 171, 0x03), (66, 206, 0x02), (1, 206, 0x03),
        (66, 215, 0x02), (1, 215, 0x03), (66, 225, 0x02), (1, 225, 0x03),
        (66, 236, 0x02), (1, 236, 0x03), (66, 237, 0x02), (1, 237, 0x03),
        (0, 199, 0x03), (0, 207, 0x03), (0, 234, 0x03), (0, 235, 0x03),
    ],
    // 192
    [
        (85, 171, 0x02), (67, 171, 0x02), (93, 171, 0x02), (2, 171, 0x03),
        (85, 206, 0x02), (67, 206, 0x02), (93, 206, 0x02), (2, 206, 0x03),
        (85, 215, 0x02), (67, 215, 0x02), (93, 215, 0x02), (2, 215, 0x03),
        (85, 225, 0x02), (67, 225, 0x02), (93, 225, 0x02), (2, 225, 0x03),
    ],
    // 193
    [
        (86, 171, 0x02), (130, 171, 0x02), (68, 171, 0x02), (82, 171, 0x02),
        (99, 171, 0x02), (94, 171, 0x02), (104, 171, 0x02), (3, 171, 0x03),
        (86, 206, 0x02), (130, 206, 0x02), (68, 206, 0x02), (82, 206, 0x02),
        (99, 206, 0x02), (94, 206, 0x02), (104, 206, 0x02), (3, 206, 0x03),
    ],
    // 194
    [
        (85, 175, 0x02), (67, 175, 0x02), (93, 175, 0x02), (2, 175, 0x03),
        (85, 180, 0x02), (67, 180, 0x02), (93, 180, 0x02), (2, 180, 0x03),
        (85, 182, 0x02), (67, 182, 0x02), (93, 182, 0x02), (2, 182, 0x03),
        (85, 183, 0x02), (67, 183, 0x02), (93, 183, 0x02), (2, 183, 0x03),
    ],
    // 195
    [
        (86, 175, 0x02), (130, 175, 0x02), (68, 175, 0x02), (82, 175, 0x02),
        (99, 175, 0x02), (94, 175, 0x02), (104, 175, 0x02), (3, 175, 0x03),
        (86, 180, 0x02), (130, 180, 0x02), (68, 180, 0x02), (82, 180, 0x02),
        (99, 180, 0x02), (94, 180, 0x02), (104, 180, 0x02), (3, 180, 0x03),
    ],
    // 196
    [
        (66, 176, 0x02), (1, 176, 0x03), (66, 177, 0x02), (1, 177, 0x03),
        (66, 179, 0x02), (1, 179, 0x03), (66, 209, 0x02), (1, 209, 0x03),
        (66, 216, 0x02), (1, 216, 0x03), (66, 217, 0x02), (1, 217, 0x03),
        (66, 227, 0x02), (1, 227, 0x03), (66, 229, 0x02), (1, 229, 0x03),
    ],
    // 197
    [
        (85, 176, 0x02), (67, 176, 0x02), (93, 176, 0x02), (2, 176, 0x03),
        (85, 177, 0x02), (67, 177, 0x02), (93, 177, 0x02), (2, 177, 0x03),
        (85, 179, 0x02), (67, 179, 0x02), (93, 179, 0x02), (2, 179, 0x03),
        (85, 209, 0x02), (67, 209, 0x02), (93, 209, 0x02), (2, 209, 0x03),
    ],
    // 198
    [
        (86, 176, 0x02), (130, 176, 0x02), (68, 176, 0x02), (82, 176, 0x02),
        (99, 176, 0x02), (94, 176, 0x02), (104, 176, 0x02), (3, 176, 0x03),
        (86, 177, 0x02), (130, 177, 0x02), (68, 177, 0x02), (82, 177, 0x02),
        (99, 177, 0x02), (94, 177, 0x02), (104, 177, 0x02), (3, 177, 0x03),
    ],
    // 199
    [
        (66, 178, 0x02), (1, 178, 0x03), (66, 181, 0x02), (1, 181, 0x03),
        (66, 185, 0x02), (1, 185, 0x03), (66, 186, 0x02), (1, 186, 0x03),
        (66, 187, 0x02), (1, 187, 0x03), (66, 189, 0x02), (1, 189, 0x03),
        (66, 190, 0x02), (1, 190, 0x03), (66, 196, 0x02), (1, 196, 0x03),
    ],
    // 200
    [
        (85, 178, 0x02), (67, 178, 0x02), (93, 178, 0x02), (2, 178, 0x03),
        (85, 181, 0x02), (67, 181, 0x02), (93, 181, 0x02), (2, 181, 0x03),
        (85, 185, 0x02), (67, 185, 0x02), (93, 185, 0x02), (2, 185, 0x03),
        (85, 186, 0x02), (67, 186, 0x02), (93, 186, 0x02), (2, 186, 0x03),
    ],
    // 201
    [
        (86, 178, 0x02), (130, 178, 0x02), (68, 178, 0x02), (82, 178, 0x02),
        (99, 178, 0x02), (94, 178, 0x02), (104, 178, 0x02), (3, 178, 0x03),
        (86, 181, 0x02), (130, 181, 0x02), (68, 181, 0x02), (82, 181, 0x02),
        (99, 181, 0x02), (94, 181, 0x02), (104, 181, 0x02), (3, 181, 0x03),
    ],
    // 202
    [
        (86, 179, 0x02), (130, 179, 0x02), (68, 179, 0x02), (82, 179, 0x02),
        (99, 179, 0x02), (94, 179, 0x02), (104, 179, 0x02), (3, 179, 0x03),
        (86, 209, 0x02), (130, 209, 0x02), (68, 209, 0x02), (82, 209, 0x02),
        (99, 209, 0x02), (94, 209, 0x02), (104, 209, 0x02), (3, 209, 0x03),
    ],
    // 203
    [
        (86, 182, 0x02), (130, 182, 0x02), (68, 182, 0x02), (82, 182, 0x02),
        (99, 182, 0x02), (94, 182, 0x02), (104, 182, 0x02), (3, 182, 0x03),
        (86, 183, 0x02), (130, 183, 0x02), (68, 183, 0x02), (82, 183, 0x02),
        (99, 183, 0x02), (94, 183, 0x02), (104, 183, 0x02), (3, 183, 0x03),
    ],
    // 204
    [
        (86, 184, 0x02), (130, 184, 0x02), (68, 184, 0x02), (82, 184, 0x02),
        (99, 184, 0x02), (94, 184, 0x02), (104, 184, 0x02), (3, 184, 0x03),
        (86, 194, 0x02), (130, 194, 0x02), (68, 194, 0x02), (82, 194, 0x02),
        (99, 194, 0x02), (94, 194, 0x02), (104, 194, 0x02), (3, 194, 0x03),
    ],
    // 205
    [
        (86, 185, 0x02), (130, 185, 0x02), (68, 185, 0x02), (82, 185, 0x02),
        (99, 185, 0x02), (94, 185, 0x02), (104, 185, 0x02), (3, 185, 0x03),
        (86, 186, 0x02), (130, 186, 0x02), (68, 186, 0x02), (82, 186, 0x02),
        (99, 186, 0x02), (94, 186, 0x02), (104, 186, 0x02), (3, 186, 0x03),
    ],
    // 206
    [
        (85, 187, 0x02), (67, 187, 0x02), (93, 187, 0x02), (2, 187, 0x03),
        (85, 189, 0x02), (67, 189, 0x02), (93, 189, 0x02), (2, 189, 0x03),
        (85, 190, 0x02), (67, 190, 0x02), (93, 190, 0x02), (2, 190, 0x03),
        (85, 196, 0x02), (67, 196, 0x02), (93, 196, 0x02), (2, 196, 0x03),
    ],
    // 207
    [
        (86, 187, 0x02), (130, 187, 0x02), (68, 187, 0x02), (82, 187, 0x02),
        (99, 187, 0x02), (94, 187, 0x02), (104, 187, 0x02), (3, 187, 0x03),
        (86, 189, 0x02), (130, 189, 0x02), (68, 189, 0x02), (82, 189, 0x02),
        (99, 189, 0x02), (94, 189, 0x02), (104, 189, 0x02), (3, 189, 0x03),
    ],
    // 208
    [
        (85, 188, 0x02), (67, 188, 0x02), (93, 188, 0x02), (2, 188, 0x03),
        (85, 191, 0x02), (67, 191, 0x02), (93, 191, 0x02), (2, 191, 0x03),
        (85, 197, 0x02), (67, 197, 0x02), (93, 197, 0x02), (2, 197, 0x03),
        (85, 231, 0x02), (67, 231, 0x02), (93, 231, 0x02), (2, 231, 0x03),
    ],
    // 209
    [
        (86, 188, 0x02), (130, 188, 0x02), (68, 188, 0x02), (82, 188, 0x02),
        (99, 188, 0x02), (94, 188, 0x02), (104, 188, 0x02), (3, 188, 0x03),
        (86, 191, 0x02), (130, 191, 0x02), (68, 191, 0x02), (82, 191, 0x02),
        (99, 191, 0x02), (94, 191, 0x02), (104, 191, 0x02), (3, 191, 0x03),
    ],
    // 210
    [
        (86, 190, 0x02), (130, 190, 0x02), (68, 190, 0x02), (82, 190, 0x02),
        (99, 190, 0x02), (94, 190, 0x02), (104, 190, 0x02), (3, 190, 0x03),
        (86, 196, 0x02), (130, 196, 0x02), (68, 196, 0x02), (82, 196, 0x02),
        (99, 196, 0x02), (94, 196, 0x02), (104, 196, 0x02), (3, 196, 0x03),
    ],
    // 211
    [
        (0, 192, 0x03), (0, 193, 0x03), (0, 200, 0x03), (0, 201, 0x03),
        (0, 202, 0x03), (0, 205, 0x03), (0, 210, 0x03), (0, 213, 0x03),
        (0, 218, 0x03), (0, 219, 0x03), (0, 238, 0x03), (0, 240, 0x03),
        (0, 242, 0x03), (0, 243, 0x03), (0, 255, 0x03), (227, 0, 0x00),
    ],
    // 212
    [
        (66, 192, 0x02), (1, 192, 0x03), (66, 193, 0x02), (1, 193, 0x03),
        (66, 200, 0x02), (1, 200, 0x03), (66, 201, 0x02), (1, 201, 0x03),
        (66, 202, 0x02), (1, 202, 0x03), (66, 205, 0x02), (1, 205, 0x03),
        (66, 210, 0x02), (1, 210, 0x03), (66, 213, 0x02), (1, 213, 0x03),
    ],
    // 213
    [
        (85, 192, 0x02), (67, 192, 0x02), (93, 192, 0x02), (2, 192, 0x03),
        (85, 193, 0x02), (67, 193, 0x02), (93, 193, 0x02), (2, 193, 0x03),
        (85, 200, 0x02), (67, 200, 0x02), (93, 200, 0x02), (2, 200, 0x03),
        (85, 201, 0x02), (67, 201, 0x02), (93, 201, 0x02), (2, 201, 0x03),
    ],
    // 214
    [
        (86, 192, 0x02), (130, 192, 0x02), (68, 192, 0x02), (82, 192, 0x02),
        (99, 192, 0x02), (94, 192, 0x02), (104, 192, 0x02), (3, 192, 0x03),
        (86, 193, 0x02), (130, 193, 0x02), (68, 193, 0x02), (82, 193, 0x02),
        (99, 193, 0x02), (94, 193, 0x02), (104, 193, 0x02), (3, 193, 0x03),
    ],
    // 215
    [
        (86, 197, 0x02), (130, 197, 0x02), (68, 197, 0x02), (82, 197, 0x02),
        (99, 197, 0x02), (94, 197, 0x02), (104, 197, 0x02), (3, 197, 0x03),
        (86, 231, 0x02), (130, 231, 0x02), (68, 231, 0x02), (82, 231, 0x02),
        (99, 231, 0x02), (94, 231, 0x02), (104, 231, 0x02), (3, 231, 0x03),
    ],
    // 216
    [
        (85, 198, 0x02), (67, 198, 0x02), (93, 198, 0x02), (2, 198, 0x03),
        (85, 228, 0x02), (67, 228, 0x02), (93, 228, 0x02), (2, 228, 0x03),
        (85, 232, 0x02), (67, 232, 0x02), (93, 232, 0x02), (2, 232, 0x03),
        (85, 233, 0x02), (67, 233, 0x02), (93, 233, 0x02), (2, 233, 0x03),
    ],
    // 217
    [
        (86, 198, 0x02), (130, 198, 0x02), (68, 198, 0x02), (82, 198, 0x02),
        (99, 198, 0x02), (94, 198, 0x02), (104, 198, 0x02), (3, 198, 0x03),
        (86, 228, 0x02), (130, 228, 0x02), (68, 228, 0x02), (82, 228, 0x02),
        (99, 228, 0x02), (94, 228, 0x02), (104, 228, 0x02), (3, 228, 0x03),
    ],
    // 218
    [
        (85, 236, 0x02), (67, 236, 0x02), (93, 236, 0x02), (2, 236, 0x03),
        (85, 237, 0x02), (67, 237, 0x02), (93, 237, 0x02), (2, 237, 0x03),
        (66, 199, 0x02), (1, 199, 0x03), (66, 207, 0x02), (1, 207, 0x03),
        (66, 234, 0x02), (1, 234, 0x03), (66, 235, 0x02), (1, 235, 0x03),
    ],
    // 219
    [
        (85, 199, 0x02), (67, 199, 0x02), (93, 199, 0x02), (2, 199, 0x03),
        (85, 207, 0x02), (67, 207, 0x02), (93, 207, 0x02), (2, 207, 0x03),
        (85, 234, 0x02), (67, 234, 0x02), (93, 234, 0x02), (2, 234, 0x03),
        (85, 235, 0x02), (67, 235, 0x02), (93, 235, 0x02), (2, 235, 0x03),
    ],
    // 220
    [
        (86, 199, 0x02), (130, 199, 0x02), (68, 199, 0x02), (82, 199, 0x02),
        (99, 199, 0x02), (94, 199, 0x02), (104, 199, 0x02), (3, 199, 0x03),
        (86, 207, 0x02), (130, 207, 0x02), (68, 207, 0x02), (82, 207, 0x02),
        (99, 207, 0x02), (94, 207, 0x02), (104, 207, 0x02), (3, 207, 0x03),
    ],
    // 221
    [
        (86, 200, 0x02), (130, 200, 0x02), (68, 200, 0x02), (82, 200, 0x02),
        (99, 200, 0x02), (94, 200, 0x02), (104, 200, 0x02), (3, 200, 0x03),
        (86, 201, 0x02), (130, 201, 0x02), (68, 201, 0x02), (82, 201, 0x02),
        (99, 201, 0x02), (94, 201, 0x02), (104, 201, 0x02), (3, 201, 0x03),
    ],
    // 222
    [
        (85, 202, 0x02), (67, 202, 0x02), (93, 202, 0x02), (2, 202, 0x03),
        (85, 205, 0x02), (67, 205, 0x02), (93, 205, 0x02), (2, 205, 0x03),
        (85, 210, 0x02), (67, 210, 0x02), (93, 210, 0x02), (2, 210, 0x03),
        (85, 213, 0x02), (67, 213, 0x02), (93, 213, 0x02), (2, 213, 0x03),
    ],
    // 223
    [
        (86, 202, 0x02), (130, 202, 0x02), (68, 202, 0x02), (82, 202, 0x02),
        (99, 202, 0x02), (94, 202, 0x02), (104, 202, 0x02), (3, 202, 0x03),
        (86, 205, 0x02), (130, 205, 0x02), (68, 205, 0x02), (82, 205, 0x02),
        (99, 205, 0x02), (94, 205, 0x02), (104, 205, 0x02), (3, 205, 0x03),
    ],
    // 224
    [
        (66, 218, 0x02), (1, 218, 0x03), (66, 219, 0x02), (1, 219, 0x03),
        (66, 238, 0x02), (1, 238, 0x03), (66, 240, 0x02), (1, 240, 0x03),
        (66, 242, 0x02), (1, 242, 0x03), (66, 243, 0x02), (1, 243, 0x03),
        (66, 255, 0x02), (1, 255, 0x03), (0, 203, 0x03), (0, 204, 0x03),
    ],
    // 225
    [
        (85, 242, 0x02), (67, 242, 0x02), (93, 242, 0x02), (2, 242, 0x03),
        (85, 243, 0x02), (67, 243, 0x02), (93, 243, 0x02), (2, 243, 0x03),
        (85, 255, 0x02), (67, 255, 0x02), (93, 255, 0x02), (2, 255, 0x03),
        (66, 203, 0x02), (1, 203, 0x03), (66, 204, 0x02), (1, 204, 0x03),
    ],
    // 226
    [
        (86, 255, 0x02), (130, 255, 0x02), (68, 255, 0x02), (82, 255, 0x02),
        (99, 255, 0x02), (94, 255, 0x02), (104, 255, 0x02), (3, 255, 0x03),
        (85, 203, 0x02), (67, 203, 0x02), (93, 203, 0x02), (2, 203, 0x03),
        (85, 204, 0x02), (67, 204, 0x02), (93, 204, 0x02), (2, 204, 0x03),
    ],
    // 227
    [
        (86, 203, 0x02), (130, 203, 0x02), (68, 203, 0x02), (82, 203, 0x02),
        (99, 203, 0x02), (94, 203, 0x02), (104, 203, 0x02), (3, 203, 0x03),
        (86, 204, 0x02), (130, 204, 0x02), (68, 204, 0x02), (82, 204, 0x02),
        (99, 204, 0x02), (94, 204, 0x02), (104, 204, 0x02), (3, 204, 0x03),
    ],
    // 228
    [
        (86, 210, 0x02), (130, 210, 0x02), (68, 210, 0x02), (82, 210, 0x02),
        (99, 210, 0x02), (94, 210, 0x02), (104, 210, 0x02), (3, 210, 0x03),
        (86, 213, 0x02), (130, 213, 0x02), (68, 213, 0x02), (82, 213, 0x02),
        (99, 213, 0x02), (94, 213, 0x02), (104, 213, 0x02), (3, 213, 0x03),
    ],
    // 229
    [
        (0, 211, 0x03), (0, 212, 0x03), (0, 214, 0x03), (0, 221, 0x03),
        (0, 222, 0x03), (0, 223, 0x03), (0, 241, 0x03), (0, 244, 0x03),
        (0, 245, 0x03), (0, 246, 0x03), (0, 247, 0x03), (0, 248, 0x03),
        (0, 250, 0x03), (0, 251, 0x03), (0, 252, 0x03), (0, 253, 0x03),
    ],
    // 230
    [
        (66, 211, 0x02), (1, 211, 0x03), (66, 212, 0x02), (1, 212, 0x03),
        (66, 214, 0x02), (1, 214, 0x03), (66, 221, 0x02), (1, 221, 0x03),
        (66, 222, 0x02), (1, 222, 0x03), (66, 223, 0x02), (1, 223, 0x03),
        (66, 241, 0x02), (1, 241, 0x03), (66, 244, 0x02), (1, 244, 0x03),
    ],
    // 231
    [
        (85, 211, 0x02), (67, 211, 0x02), (93, 211, 0x02), (2, 211, 0x03),
        (85, 212, 0x02), (67, 212, 0x02), (93, 212, 0x02), (2, 212, 0x03),
        (85, 214, 0x02), (67, 214, 0x02), (93, 214, 0x02), (2, 214, 0x03),
        (85, 221, 0x02), (67, 221, 0x02), (93, 221, 0x02), (2, 221, 0x03),
    ],
    // 232
    [
        (86, 211, 0x02), (130, 211, 0x02), (68, 211, 0x02), (82, 211, 0x02),
        (99, 211, 0x02), (94, 211, 0x02), (104, 211, 0x02), (3, 211, 0x03),
        (86, 212, 0x02), (130, 212, 0x02), (68, 212, 0x02), (82, 212, 0x02),
        (99, 212, 0x02), (94, 212, 0x02), (104, 212, 0x02), (3, 212, 0x03),
    ],
    // 233
    [
        (86, 214, 0x02), (130, 214, 0x02), (68, 214, 0x02), (82, 214, 0x02),
        (99, 214, 0x02), (94, 214, 0x02), (104, 214, 0x02), (3, 214, 0x03),
        (86, 221, 0x02), (130, 221, 0x02), (68, 221, 0x02), (82, 221, 0x02),
        (99, 221, 0x02), (94, 221, 0x02), (104, 221, 0x02), (3, 221, 0x03),
    ],
    // 234
    [
        (86, 215, 0x02), (130, 215, 0x02), (68, 215, 0x02), (82, 215, 0x02),
        (99, 215, 0x02), (94, 215, 0x02), (104, 215, 0x02), (3, 215, 0x03),
        (86, 225, 0x02), (130, 225, 0x02), (68, 225, 0x02), (82, 225, 0x02),
        (99, 225, 0x02), (94, 225, 0x02), (104, 225, 0x02), (3, 225, 0x03),
    ],
    // 235
    [
        (85, 216, 0x02), (67, 216, 0x02), (93, 216, 0x02), (2, 216, 0x03),
        (85, 217, 0x02), (67, 217, 0x02), (93, 217, 0x02), (2, 217, 0x03),
        (85, 227, 0x02), (67, 227, 0x02), (93, 227, 0x02), (2, 227, 0x03),
        (85, 229, 0x02), (67, 229, 0x02), (93, 229, 0x02), (2, 229, 0x03),
    ],
    // 236
    [
        (86, 216, 0x02), (130, 216, 0x02), (68, 216, 0x02), (82, 216, 0x02),
        (99, 216, 0x02), (94, 216, 0x02), (104, 216, 0x02), (3, 216, 0x03),
        (86, 217, 0x02), (130, 217, 0x02), (68, 217, 0x02), (82, 217, 0x02),
        (99, 217, 0x02), (94, 217, 0x02), (104, 217, 0x02), (3, 217, 0x03),
    ],
    // 237
    [
        (85, 218, 0x02), (67, 218, 0x02), (93, 218, 0x02), (2, 218, 0x03),
        (85, 219, 0x02), (67, 219, 0x02), (93, 219, 0x02), (2, 219, 0x03),
        (85, 238, 0x02), (67, 238, 0x02), (93, 238, 0x02), (2, 238, 0x03),
        (85, 240, 0x02), (67, 240, 0x02), (93, 240, 0x02), (2, 240, 0x03),
    ],
    // 238
    [
        (86, 218, 0x02), (130, 218, 0x02), (68, 218, 0x02), (82, 218, 0x02),
        (99, 218, 0x02), (94, 218, 0x02), (104, 218, 0x02), (3, 218, 0x03),
        (86, 219, 0x02), (130, 219, 0x02), (68, 219, 0x02), (82, 219, 0x02),
        (99, 219, 0x02), (94, 219, 0x02), (104, 219, 0x02), (3, 219, 0x03),
    ],
    // 239
    [
        (85, 222, 0x02), (67, 222, 0x02), (93, 222, 0x02), (2, 222, 0x03),
        (85, 223, 0x02), (67, 223, 0x02), (93, 223, 0x02), (2, 223, 0x03),
        (85, 241, 0x02), (67, 241, 0x02), (93, 241, 0x02), (2, 241, 0x03),
        (85, 244, 0x02), (67, 244, 0x02), (93, 244, 0x02), (2, 244, 0x03),
    ],
    // 240
    [
        (86, 222, 0x02), (130, 222, 0x02), (68, 222, 0x02), (82, 222, 0x02),
        (99, 222, 0x02), (94, 222, 0x02), (104, 222, 0x02), (3, 222, 0x03),
        (86, 223, 0x02), (130, 223, 0x02), (68, 223, 0x02), (82, 223, 0x02),
        (99, 223, 0x02), (94, 223, 0x02), (104, 223, 0x02), (3, 223, 0x03),
    ],
    // 241
    [
        (86, 224, 0x02), (130, 224, 0x02), (68, 224, 0x02), (82, 224, 0x02),
        (99, 224, 0x02), (94, 224, 0x02), (104, 224, 0x02), (3, 224, 0x03),
        (86, 226, 0x02), (130, 226, 0x02), (68, 226, 0x02), (82, 226, 0x02),
        (99, 226, 0x02), (94, 226, 0x02), (104, 226, 0x02), (3, 226, 0x03),
    ],
    // 242
    [
        (86, 227, 0x02), (130, 227, 0x02), (68, 227, 0x02), (82, 227, 0x02),
        (99, 227, 0x02), (94, 227, 0x02), (104, 227, 0x02), (3, 227, 0x03),
        (86, 229, 0x02), (130, 229, 0x02), (68, 229, 0x02), (82, 229, 0x02),
        (99, 229, 0x02), (94, 229, 0x02), (104, 229, 0x02), (3, 229, 0x03),
    ],
    // 243
    [
        (86, 232, 0x02), (130, 232, 0x02), (68, 232, 0x02), (82, 232, 0x02),
        (99, 232, 0x02), (94, 232, 0x02), (104, 232, 0x02), (3, 232, 0x03),
        (86, 233, 0x02), (130, 233, 0x02), (68, 233, 0x02), (82, 233, 0x02),
        (99, 233, 0x02), (94, 233, 0x02), (104, 233, 0x02), (3, 233, 0x03),
    ],
    // 244
    [
        (86, 234, 0x02), (130, 234, 0x02), (68, 234, 0x02), (82, 234, 0x02),
        (99, 234, 0x02), (94, 234, 0x02), (104, 234, 0x02), (3, 234, 0x03),
        (86, 235, 0x02), (130, 235, 0x02), (68, 235, 0x02), (82, 235, 0x02),
        (99, 235, 0x02), (94, 235, 0x02), (104, 235, 0x02), (3, 235, 0x03),
    ],
    // 245
    [
        (86, 236, 0x02), (130, 236, 0x02), (68, 236, 0x02), (82, 236, 0x02),
        (99, 236, 0x02), (94, 236, 0x02), (104, 236, 0x02), (3, 236, 0x03),
        (86, 237, 0x02), (130, 237, 0x02), (68, 237, 0x02), (82, 237, 0x02),
        (99, 237, 0x02), (94, 237, 0x02), (104, 237, 0x02), (3, 237, 0x03),
    ],
    // 246
    [
        (86, 238, 0x02), (130, 238, 0x02), (68, 238, 0x02), (82, 238, 0x02),
        (99, 238, 0x02), (94, 238, 0x02), (104, 238, 0x02), (3, 238, 0x03),
        (86, 240, 0x02), (130, 240, 0x02), (68, 240, 0x02), (82, 240, 0x02),
        (99, 240, 0x02), (94, 240, 0x02), (104, 240, 0x02), (3, 240, 0x03),
    ],
    // 247
    [
        (86, 241, 0x02), (130, 241, 0x02), (68, 241, 0x02), (82, 241, 0x02),
        (99, 241, 0x02), (94, 241, 0x02), (104, 241, 0x02), (3, 241, 0x03),
        (86, 244, 0x02), (130, 244, 0x02), (68, 244, 0x02), (82, 244, 0x02),
        (99, 244, 0x02), (94, 244, 0x02), (104, 244, 0x02), (3, 244, 0x03),
    ],
    // 248
    [
        (86, 242, 0x02), (130, 242, 0x02), (68, 242, 0x02), (82, 242, 0x02),
        (99, 242, 0x02), (94, 242, 0x02), (104, 242, 0x02), (3, 242, 0x03),
        (86, 243, 0x02), (130, 243, 0x02), (68, 243, 0x02), (82, 243, 0x02),
        (99, 243, 0x02), (94, 243, 0x02), (104, 243, 0x02), (3, 243, 0x03),
    ],
    // 249
    [
        (66, 245, 0x02), (1, 245, 0x03), (66, 246, 0x02), (1, 246, 0x03),
        (66, 247, 0x02), (1, 247, 0x03), (66, 248, 0x02), (1, 248, 0x03),
        (66, 250, 0x02), (1, 250, 0x03), (66, 251, 0x02), (1, 251, 0x03),
        (66, 252, 0x02), (1, 252, 0x03), (66, 253, 0x02), (1, 253, 0x03),
    ],
    // 250
    [
        (85, 245, 0x02), (67, 245, 0x02), (93, 245, 0x02), (2, 245, 0x03),
        (85, 246, 0x02), (67, 246, 0x02), (93, 246, 0x02), (2, 246, 0x03),
        (85, 247, 0x02), (67, 247, 0x02), (93, 247, 0x02), (2, 247, 0x03),
        (85, 248, 0x02), (67, 248, 0x02), (93, 248, 0x02), (2, 248, 0x03),
    ],
    // 251
    [
        (86, 245, 0x02), (130, 245, 0x02), (68, 245, 0x02), (82, 245, 0x02),
        (99, 245, 0x02), (94, 245, 0x02), (104, 245, 0x02), (3, 245, 0x03),
        (86, 246, 0x02), (130, 246, 0x02), (68, 246, 0x02), (82, 246, 0x02),
        (99, 246, 0x02), (94, 246, 0x02), (104, 246, 0x02), (3, 246, 0x03),
    ],
    // 252
    [
        (86, 247, 0x02), (130, 247, 0x02), (68, 247, 0x02), (82, 247, 0x02),
        (99, 247, 0x02), (94, 247, 0x02), (104, 247, 0x02), (3, 247, 0x03),
        (86, 248, 0x02), (130, 248, 0x02), (68, 248, 0x02), (82, 248, 0x02),
        (99, 248, 0x02), (94, 248, 0x02), (104, 248, 0x02), (3, 248, 0x03),
    ],
    // 253
    [
        (85, 250, 0x02), (67, 250, 0x02), (93, 250, 0x02), (2, 250, 0x03),
        (85, 251, 0x02), (67, 251, 0x02), (93, 251, 0x02), (2, 251, 0x03),
        (85, 252, 0x02), (67, 252, 0x02), (93, 252, 0x02), (2, 252, 0x03),
        (85, 253, 0x02), (67, 253, 0x02), (93, 253, 0x02), (2, 253, 0x03),
    ],
    // 254
    [
        (86, 250, 0x02), (130, 250, 0x02), (68, 250, 0x02), (82, 250, 0x02),
        (99, 250, 0x02), (94, 250, 0x02), (104, 250, 0x02), (3, 250, 0x03),
        (86, 251, 0x02), (130, 251, 0x02), (68, 251, 0x02), (82, 251, 0x02),
        (99, 251, 0x02), (94, 251, 0x02), (104, 251, 0x02), (3, 251, 0x03),
    ],
    // 255
    [
        (86, 252, 0x02), (130, 252, 0x02), (68, 252, 0x02), (82, 252, 0x02),
        (99, 252, 0x02), (94, 252, 0x02), (104, 252, 0x02), (3, 252, 0x03),
        (86, 253, 0x02), (130, 253, 0x02), (68, 253, 0x02), (82, 253, 0x02),
        (99, 253, 0x02), (94, 253, 0x02), (104, 253, 0x02), (3, 253, 0x03),
    ],
];
