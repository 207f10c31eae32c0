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

//! Dynamic table shared by the encoder and the decoder.
//!
//! # Introduction
//! The dynamic table is a list of header fields in first-in, first-out
//! order. The newest entry has index 0, and the oldest entries are evicted
//! when a new entry would exceed the size of the table. The size of an entry
//! is the sum of its name length, its value length and 32 octets.
//!
//! Two budgets are tracked. The storage budget is the size negotiated with
//! the peer; entries beyond it are physically removed on both sides. The
//! encoder may additionally limit itself to a smaller advertised budget to
//! bound its own memory: entries pushed beyond that budget keep their slot,
//! so indices stay in sync with the peer, but their content is released and
//! they can no longer be referenced. Those entries are called zombies and
//! always follow the advertised ones.

use crate::error::{CompressionCause, HpackError};
use crate::hpack::representation::BlockWriter;
use crate::hpack::ring::RingBuffer;
use crate::hpack::table::{hash, StaticMatch, StaticTable, STATIC_TABLE_LEN};
use crate::hpack::{entry_room, HeaderField, Side, ENTRY_OVERHEAD};

/// Direction of a compression context.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum Role {
    Deflate,
    Inflate,
}

/// Flags of a dynamic table entry.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone)]
pub(crate) struct EntryState {
    /// The entry belongs to the reference set.
    pub(crate) in_refset: bool,
    /// The entry has been emitted while processing the current block.
    pub(crate) emitted: bool,
    /// The entry is carried over from the previous block by the reference
    /// set without being emitted (encoder only).
    pub(crate) implicit: bool,
}

/// An entry of the dynamic table.
pub(crate) struct Entry {
    field: Option<HeaderField>,
    name_len: usize,
    value_len: usize,
    name_hash: u32,
    value_hash: u32,
    pub(crate) state: EntryState,
}

impl Entry {
    /// Content promoted from the static table keeps sharing its static
    /// octets, since `Bytes::clone` never copies them.
    fn new(field: HeaderField) -> Self {
        Self {
            name_len: field.name().len(),
            value_len: field.value().len(),
            name_hash: hash(field.name()),
            value_hash: hash(field.value()),
            field: Some(field),
            state: EntryState::default(),
        }
    }

    /// Content of the entry, `None` for zombies.
    pub(crate) fn field(&self) -> Option<&HeaderField> {
        self.field.as_ref()
    }

    pub(crate) fn room(&self) -> usize {
        entry_room(self.name_len, self.value_len)
    }

    fn release(&mut self) {
        self.field = None;
    }
}

/// Outcome of an insertion into the dynamic table.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum Added {
    /// The entry is at index 0 and belongs to the reference set.
    Inserted,
    /// The entry is at index 0 but exceeds the advertised budget, so its
    /// content has been released.
    Zombie,
    /// The entry is larger than the whole table and has not been stored.
    Dropped,
}

/// Result of a search in both tables, holding wire indices.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum Search {
    Exact(usize),
    Name(usize),
}

/// A compression context: the dynamic table of one direction of a
/// connection, with its two budgets and its poisoned flag.
pub(crate) struct Context {
    role: Role,
    side: Side,
    table: RingBuffer<Entry>,
    storage_size: usize,
    storage_max: usize,
    advertised_size: usize,
    advertised_limit: usize,
    advertised_len: usize,
    bad: bool,
}

impl Context {
    pub(crate) fn new(
        role: Role,
        side: Side,
        storage_max: usize,
        advertised_limit: usize,
    ) -> Result<Self, HpackError> {
        let advertised_limit = match role {
            Role::Deflate => advertised_limit,
            Role::Inflate => storage_max,
        };
        Ok(Self {
            role,
            side,
            table: RingBuffer::with_capacity(storage_max / ENTRY_OVERHEAD)?,
            storage_size: 0,
            storage_max,
            advertised_size: 0,
            advertised_limit,
            advertised_len: 0,
            bad: false,
        })
    }

    pub(crate) fn side(&self) -> Side {
        self.side
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub(crate) fn storage_size(&self) -> usize {
        self.storage_size
    }

    pub(crate) fn storage_max(&self) -> usize {
        self.storage_max
    }

    pub(crate) fn advertised_size(&self) -> usize {
        self.advertised_size
    }

    pub(crate) fn advertised_len(&self) -> usize {
        self.advertised_len
    }

    /// The advertised budget never exceeds the storage budget.
    pub(crate) fn advertised_max(&self) -> usize {
        self.advertised_limit.min(self.storage_max)
    }

    /// Exclusive upper bound of valid wire indices.
    pub(crate) fn max_index(&self) -> usize {
        self.table.len() + STATIC_TABLE_LEN
    }

    pub(crate) fn is_bad(&self) -> bool {
        self.bad
    }

    /// Fails if the context has already been poisoned.
    pub(crate) fn check(&self) -> Result<(), HpackError> {
        match self.bad {
            true => Err(CompressionCause::Poisoned.into()),
            false => Ok(()),
        }
    }

    /// Marks the context as unusable.
    pub(crate) fn poison(&mut self, err: &HpackError) {
        log::debug!("{:?} context poisoned by {err}", self.role);
        self.bad = true;
    }

    #[cfg(test)]
    pub(crate) fn get(&self, index: usize) -> Option<&Entry> {
        self.table.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.table.get_mut(index)
    }

    /// Gets the header field at a wire index, looking into the dynamic table
    /// first and the static table then. Zombies have no header field.
    pub(crate) fn field(&self, index: usize) -> Option<&HeaderField> {
        match index.checked_sub(self.table.len()) {
            None => self.table.get(index).and_then(Entry::field),
            Some(index) => StaticTable::get(index).map(|entry| entry.field()),
        }
    }

    /// Searches `field` among the advertised entries and the static table.
    /// The newest exact match wins, then any static exact match, then the
    /// first name match.
    pub(crate) fn search(&self, field: &HeaderField) -> Option<Search> {
        let name_hash = hash(field.name());
        let value_hash = hash(field.value());
        let mut found = None;
        for index in 0..self.advertised_len {
            let Some(entry) = self.table.get(index) else {
                break;
            };
            let Some(candidate) = entry.field() else {
                continue;
            };
            if entry.name_hash != name_hash || candidate.name() != field.name() {
                continue;
            }
            if entry.value_hash == value_hash && candidate.value() == field.value() {
                return Some(Search::Exact(index));
            }
            if found.is_none() {
                found = Some(Search::Name(index));
            }
        }
        let len = self.table.len();
        match StaticTable::search(field, name_hash, value_hash) {
            Some(StaticMatch::Exact(index)) => Some(Search::Exact(len + index)),
            Some(StaticMatch::Name(index)) if found.is_none() => Some(Search::Name(len + index)),
            _ => found,
        }
    }

    /// Inserts `field` at index 0, evicting old entries first.
    ///
    /// On the encoder side, evictions may have to tell the peer about the
    /// reference set, so indexed representations are written to `out`
    /// before anything referring to the new entry.
    pub(crate) fn add(
        &mut self,
        field: HeaderField,
        mut out: Option<&mut BlockWriter<'_>>,
    ) -> Result<Added, HpackError> {
        let room = field.room();

        while self.storage_size + room > self.storage_max && self.table.len() > 0 {
            let index = self.table.len() - 1;
            let implicit = self.table.get(index).is_some_and(|entry| entry.state.implicit);
            if implicit {
                // Emits the entry before it disappears from both tables,
                // otherwise the peer would never see it in this block.
                emit(&mut out, index, 2)?;
            }
            self.evict_back();
        }

        if self.role == Role::Deflate {
            let advertised_max = self.advertised_max();
            while self.advertised_size + room > advertised_max && self.advertised_len > 0 {
                let index = self.advertised_len - 1;
                let Some(entry) = self.table.get_mut(index) else {
                    break;
                };
                self.advertised_size -= entry.room();
                self.advertised_len -= 1;
                if entry.state.implicit {
                    emit(&mut out, index, 2)?;
                    entry.state.implicit = false;
                }
                if entry.state.in_refset {
                    emit(&mut out, index, 1)?;
                    entry.state.in_refset = false;
                }
                entry.release();
                log::debug!("entry {index} leaves the advertised table");
            }
        }

        if room > self.storage_max {
            log::debug!("entry of {room} octets is larger than the table, not stored");
            self.check_budgets();
            return Ok(Added::Dropped);
        }

        self.table.reserve(self.table.len() + 1)?;
        let mut entry = Entry::new(field);
        let added = if room <= self.advertised_max() {
            entry.state.in_refset = true;
            self.advertised_size += room;
            self.advertised_len += 1;
            Added::Inserted
        } else {
            entry.release();
            Added::Zombie
        };
        self.table.push_front(entry)?;
        self.storage_size += room;
        self.check_budgets();
        Ok(added)
    }

    /// Removes every entry from the reference set.
    pub(crate) fn clear_refset(&mut self) {
        log::debug!("clear reference set");
        for entry in self.table.iter_mut() {
            entry.state.in_refset = false;
        }
    }

    /// Changes the storage budget, evicting the oldest entries if the table
    /// no longer fits. On the decoder side both budgets are the same.
    pub(crate) fn change_table_size(&mut self, storage_max: usize) -> Result<(), HpackError> {
        self.table.reserve(storage_max / ENTRY_OVERHEAD)?;
        log::debug!("table size changes from {} to {storage_max}", self.storage_max);
        self.storage_max = storage_max;
        if self.role == Role::Inflate {
            self.advertised_limit = storage_max;
        }
        while self.storage_size > self.storage_max && self.table.len() > 0 {
            self.evict_back();
        }
        self.check_budgets();
        Ok(())
    }

    fn evict_back(&mut self) {
        let index = self.table.len().saturating_sub(1);
        if let Some(entry) = self.table.pop_back() {
            self.storage_size -= entry.room();
            if index < self.advertised_len {
                self.advertised_size -= entry.room();
                self.advertised_len -= 1;
            }
            log::debug!("evict entry {index} of {} octets", entry.room());
        }
    }

    fn check_budgets(&self) {
        debug_assert!(self.storage_size <= self.storage_max);
        debug_assert!(self.advertised_size <= self.advertised_max());
        debug_assert!(self.advertised_size <= self.storage_size);
        debug_assert!(self.advertised_len <= self.table.len());
    }
}

fn emit(
    out: &mut Option<&mut BlockWriter<'_>>,
    index: usize,
    times: usize,
) -> Result<(), HpackError> {
    if let Some(writer) = out.as_deref_mut() {
        for _ in 0..times {
            writer.indexed(index)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod ut_context {
    use super::{Added, Context, Role, Search};
    use crate::hpack::representation::BlockWriter;
    use crate::hpack::table::StaticTable;
    use crate::hpack::{HeaderField, Side};

    fn field(name: &'static str, value: &'static str) -> HeaderField {
        HeaderField::new(name, value)
    }

    /// Checks that both sizes are the sums of the rooms of their entries,
    /// and that zombies follow the advertised entries.
    fn check_accounting(ctx: &Context) {
        let mut storage = 0;
        let mut advertised = 0;
        for index in 0..ctx.len() {
            let entry = ctx.get(index).unwrap();
            storage += entry.room();
            if index < ctx.advertised_len() {
                advertised += entry.room();
                assert!(entry.field().is_some());
            } else {
                assert!(entry.field().is_none());
            }
        }
        assert_eq!(ctx.storage_size(), storage);
        assert_eq!(ctx.advertised_size(), advertised);
        assert!(ctx.storage_size() <= ctx.storage_max());
        assert!(ctx.advertised_size() <= ctx.advertised_max());
    }

    /// UT test cases for `Context::add` eviction.
    ///
    /// # Brief
    /// 1. Fills a decoder context, then adds an entry which needs two
    ///    evictions.
    /// 2. Checks the length, the sizes and the order of the entries.
    #[test]
    fn ut_context_add_evict() {
        let mut ctx = Context::new(Role::Inflate, Side::Request, 200, 0).unwrap();
        // Each entry takes 32 + 2 + 30 = 64 octets.
        let value = "012345678901234567890123456789";
        for name in ["h1", "h2", "h3"] {
            assert_eq!(
                ctx.add(HeaderField::new(name, value), None),
                Ok(Added::Inserted)
            );
        }
        assert_eq!(ctx.len(), 3);
        assert_eq!(ctx.storage_size(), 192);
        check_accounting(&ctx);

        let big = HeaderField::new("h4", "0123456789".repeat(7));
        // 32 + 2 + 70 = 104, so h1 and h2 must go.
        assert_eq!(ctx.add(big, None), Ok(Added::Inserted));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.storage_size(), 168);
        assert_eq!(ctx.field(0).unwrap().name(), b"h4");
        assert_eq!(ctx.field(1).unwrap().name(), b"h3");
        assert!(ctx.get(0).unwrap().state.in_refset);
        check_accounting(&ctx);
    }

    /// UT test cases for `Context::add` with an entry larger than the table.
    ///
    /// # Brief
    /// 1. Adds an entry larger than the storage budget.
    /// 2. Checks that the table is emptied and the entry is not stored.
    #[test]
    fn ut_context_add_dropped() {
        let mut ctx = Context::new(Role::Inflate, Side::Response, 64, 0).unwrap();
        ctx.add(field("a", "b"), None).unwrap();
        assert_eq!(ctx.len(), 1);
        let huge = HeaderField::new("a", vec![b'x'; 64]);
        assert_eq!(ctx.add(huge, None), Ok(Added::Dropped));
        assert_eq!(ctx.len(), 0);
        assert_eq!(ctx.storage_size(), 0);
    }

    /// UT test cases for `Context::add` with static content.
    ///
    /// # Brief
    /// 1. Promotes a static entry and adds a literal using a static name.
    /// 2. Checks that the dynamic entries point at the static octets.
    #[test]
    fn ut_context_add_shares_static() {
        let mut ctx = Context::new(Role::Inflate, Side::Request, 4096, 0).unwrap();
        let promoted = StaticTable::get(1).unwrap().field();
        ctx.add(promoted.clone(), None).unwrap();
        let name = promoted.name_bytes().clone();
        ctx.add(HeaderField::new(name, "PUT"), None).unwrap();

        let literal = ctx.field(0).unwrap();
        assert_eq!(literal.name().as_ptr(), promoted.name().as_ptr());
        assert_eq!(literal.value(), b"PUT");
        let entry = ctx.field(1).unwrap();
        assert_eq!(entry, promoted);
        assert_eq!(entry.name().as_ptr(), promoted.name().as_ptr());
        assert_eq!(entry.value().as_ptr(), promoted.value().as_ptr());
    }

    /// UT test cases for zombie entries of an encoder context.
    ///
    /// # Brief
    /// 1. Creates an encoder context whose advertised budget is smaller than
    ///    its storage budget.
    /// 2. Adds entries until older ones leave the advertised table.
    /// 3. Checks toggles written for the reference set and the accounting.
    #[test]
    fn ut_context_add_zombie() {
        let mut ctx = Context::new(Role::Deflate, Side::Request, 4096, 80).unwrap();
        let mut vec = Vec::new();
        let mut writer = BlockWriter::new(&mut vec, 1 << 16);

        // 32 + 1 + 1 = 34 octets each.
        let added = ctx.add(field("a", "1"), Some(&mut writer));
        assert_eq!(added, Ok(Added::Inserted));
        ctx.add(field("b", "2"), Some(&mut writer)).unwrap();
        assert_eq!(ctx.advertised_len(), 2);
        assert_eq!(writer.written(), 0);

        // "a" leaves the advertised table and is toggled off.
        ctx.add(field("c", "3"), Some(&mut writer)).unwrap();
        assert_eq!(writer.written(), 1);
        assert_eq!(ctx.len(), 3);
        assert_eq!(ctx.advertised_len(), 2);
        assert!(ctx.field(2).is_none());
        assert!(!ctx.get(2).unwrap().state.in_refset);
        check_accounting(&ctx);

        // "b" is implicit: emitted twice, then toggled off.
        ctx.get_mut(1).unwrap().state.implicit = true;
        ctx.add(field("d", "4"), Some(&mut writer)).unwrap();
        assert_eq!(writer.written(), 4);

        // Larger than the advertised budget: a zombie at the front.
        let wide = HeaderField::new("e", vec![b'5'; 60]);
        assert_eq!(
            ctx.add(wide, Some(&mut writer)),
            Ok(Added::Zombie)
        );
        assert_eq!(ctx.advertised_len(), 0);
        assert_eq!(ctx.advertised_size(), 0);
        assert_eq!(ctx.len(), 5);
        check_accounting(&ctx);
        drop(writer);
        assert_eq!(vec, [0x82, 0x82, 0x82, 0x82, 0x82, 0x81]);
    }

    /// UT test cases for `Context::search`.
    ///
    /// # Brief
    /// 1. Adds entries to an encoder context.
    /// 2. Searches exact matches, name matches and static matches.
    /// 3. Checks the wire indices returned.
    #[test]
    fn ut_context_search() {
        let mut ctx = Context::new(Role::Deflate, Side::Request, 4096, 4096).unwrap();
        let mut vec = Vec::new();
        let mut writer = BlockWriter::new(&mut vec, 1 << 16);
        ctx.add(field("hello", "world"), Some(&mut writer)).unwrap();
        ctx.add(field("hello", "there"), Some(&mut writer)).unwrap();
        ctx.add(field(":method", "PUT"), Some(&mut writer)).unwrap();

        assert_eq!(ctx.search(&field("hello", "world")), Some(Search::Exact(2)));
        assert_eq!(ctx.search(&field("hello", "you")), Some(Search::Name(1)));
        assert_eq!(ctx.search(&field(":method", "GET")), Some(Search::Exact(3 + 1)));
        assert_eq!(ctx.search(&field(":method", "PUT")), Some(Search::Exact(0)));
        assert_eq!(ctx.search(&field(":method", "HEAD")), Some(Search::Name(0)));
        assert_eq!(ctx.search(&field("user-agent", "x")), Some(Search::Name(3 + 56)));
        assert_eq!(ctx.search(&field("x-none", "x")), None);
        assert_eq!(ctx.max_index(), 63);
        assert_eq!(ctx.field(3 + 59).unwrap().name(), b"www-authenticate");
        assert!(ctx.field(63).is_none());
    }

    /// UT test cases for `Context::change_table_size`.
    ///
    /// # Brief
    /// 1. Grows and shrinks the storage budget of a decoder context.
    /// 2. Checks the capacity of the ring, evictions and idempotence.
    #[test]
    fn ut_context_change_table_size() {
        let mut ctx = Context::new(Role::Inflate, Side::Request, 4096, 0).unwrap();
        assert_eq!(ctx.capacity(), 128);
        ctx.add(field("alpha", "bravo"), None).unwrap();
        ctx.add(field("charlie", "delta"), None).unwrap();

        ctx.change_table_size(8000).unwrap();
        assert_eq!(ctx.capacity(), 256);
        ctx.change_table_size(16384).unwrap();
        assert_eq!(ctx.capacity(), 512);
        ctx.change_table_size(16384).unwrap();
        assert_eq!(ctx.capacity(), 512);
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.field(0).unwrap().name(), b"charlie");

        // 32 + 12 = 44 octets for "charlie" only.
        ctx.change_table_size(44).unwrap();
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.field(0).unwrap().name(), b"charlie");
        assert_eq!(ctx.advertised_max(), 44);
        check_accounting(&ctx);

        ctx.change_table_size(0).unwrap();
        assert_eq!(ctx.len(), 0);
        assert_eq!(ctx.storage_size(), 0);
        assert_eq!(ctx.capacity(), 512);
    }

    /// UT test cases for `Context::clear_refset` and poisoning.
    ///
    /// # Brief
    /// 1. Adds entries, clears the reference set and poisons the context.
    /// 2. Checks flags and the result of `check`.
    #[test]
    fn ut_context_refset_and_poison() {
        let mut ctx = Context::new(Role::Inflate, Side::Request, 4096, 0).unwrap();
        ctx.add(field("a", "1"), None).unwrap();
        ctx.add(field("b", "2"), None).unwrap();
        ctx.clear_refset();
        assert!(!ctx.get(0).unwrap().state.in_refset);
        assert!(!ctx.get(1).unwrap().state.in_refset);

        assert!(ctx.check().is_ok());
        ctx.poison(&crate::HpackError::OutOfMemory);
        assert!(ctx.is_bad());
        assert!(ctx.check().is_err());
    }
}
