// SPDX-License-Identifier: MPL-2.0
//! Circular buffer for diagnostic event storage.
//!
//! A memory-bounded ring buffer that evicts the oldest entry when full.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// A ring buffer with fixed capacity, oldest element first.
///
/// # Example
///
/// ```
/// use halfloop::diagnostics::CircularBuffer;
///
/// let mut buffer: CircularBuffer<u32> = CircularBuffer::with_raw_capacity(2);
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1).
    ///
    /// Handy for tests that want to observe eviction quickly.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an element, evicting the oldest when full.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
