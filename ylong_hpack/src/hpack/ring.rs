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

use std::iter;

use crate::error::HpackError;

/// A growable circular buffer addressed by logical index, where index 0 is
/// the front. The capacity is always a power of two and never shrinks.
pub(crate) struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    first: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a `RingBuffer` able to hold at least `capacity` elements.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, HpackError> {
        let mut ring = Self {
            slots: Vec::new(),
            first: 0,
            len: 0,
        };
        ring.reserve(capacity)?;
        Ok(ring)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    /// Makes room for at least `capacity` elements. Logical order and
    /// indices are kept, and nothing happens if the buffer is large enough.
    pub(crate) fn reserve(&mut self, capacity: usize) -> Result<(), HpackError> {
        if self.slots.len() >= capacity.max(1) {
            return Ok(());
        }
        let size = capacity.checked_next_power_of_two().ok_or(HpackError::OutOfMemory)?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(size)?;
        for i in 0..self.len {
            let pos = (self.first + i) & self.mask();
            slots.push(self.slots[pos].take());
        }
        slots.extend(iter::repeat_with(|| None).take(size - self.len));
        self.slots = slots;
        self.first = 0;
        Ok(())
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.first + index) & self.mask()].as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let pos = (self.first + index) & self.mask();
        self.slots[pos].as_mut()
    }

    /// Inserts `value` at index 0, growing the buffer if it is full.
    pub(crate) fn push_front(&mut self, value: T) -> Result<(), HpackError> {
        if self.len == self.slots.len() {
            self.reserve(self.len + 1)?;
        }
        self.first = self.first.wrapping_sub(1) & self.mask();
        self.slots[self.first] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the element with the highest index.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let pos = (self.first + self.len) & self.mask();
        self.slots[pos].take()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        let len = self.len;
        let (tail, head) = self.slots.split_at_mut(self.first);
        head.iter_mut()
            .chain(tail.iter_mut())
            .take(len)
            .filter_map(Option::as_mut)
    }
}

#[cfg(test)]
mod ut_ring_buffer {
    use super::RingBuffer;

    /// UT test cases for `RingBuffer::reserve`.
    ///
    /// # Brief
    /// 1. Creates `RingBuffer`s of several capacities.
    /// 2. Calls `reserve` with smaller, equal and larger capacities.
    /// 3. Checks that capacities are powers of two and never shrink.
    #[test]
    fn ut_ring_buffer_reserve() {
        let ring = RingBuffer::<u32>::with_capacity(0).unwrap();
        assert_eq!(ring.capacity(), 1);

        let mut ring = RingBuffer::<u32>::with_capacity(128).unwrap();
        assert_eq!(ring.capacity(), 128);
        ring.reserve(100).unwrap();
        assert_eq!(ring.capacity(), 128);
        ring.reserve(250).unwrap();
        assert_eq!(ring.capacity(), 256);
        ring.reserve(512).unwrap();
        assert_eq!(ring.capacity(), 512);
        ring.reserve(0).unwrap();
        assert_eq!(ring.capacity(), 512);
    }

    /// UT test cases for `RingBuffer` ordering.
    ///
    /// # Brief
    /// 1. Pushes elements to the front until the buffer wraps and grows.
    /// 2. Pops elements from the back.
    /// 3. Checks logical indices after each step.
    #[test]
    fn ut_ring_buffer_push_pop() {
        let mut ring = RingBuffer::with_capacity(2).unwrap();
        ring.push_front(1).unwrap();
        ring.push_front(2).unwrap();
        assert_eq!(ring.pop_back(), Some(1));
        ring.push_front(3).unwrap();
        ring.push_front(4).unwrap();
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.get(0), Some(&4));
        assert_eq!(ring.get(1), Some(&3));
        assert_eq!(ring.get(2), Some(&2));
        assert_eq!(ring.get(3), None);

        *ring.get_mut(1).unwrap() = 30;
        assert_eq!(ring.iter_mut().map(|v| *v).collect::<Vec<_>>(), [4, 30, 2]);

        assert_eq!(ring.pop_back(), Some(2));
        assert_eq!(ring.pop_back(), Some(30));
        assert_eq!(ring.pop_back(), Some(4));
        assert_eq!(ring.pop_back(), None);
        assert_eq!(ring.len(), 0);
    }
}
