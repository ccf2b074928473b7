// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for control event storage.
//!
//! This module provides a memory-bounded ring buffer that automatically
//! evicts the oldest entries when capacity is reached.

use crate::config::{
    DEFAULT_EVENT_LOG_CAPACITY, MAX_EVENT_LOG_CAPACITY, MIN_EVENT_LOG_CAPACITY,
};
use std::collections::VecDeque;

/// Buffer capacity for logged events.
///
/// Always within `MIN_EVENT_LOG_CAPACITY..=MAX_EVENT_LOG_CAPACITY`.
///
/// # Example
///
/// ```
/// use iced_segments::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(32).value(), 32);
/// assert_eq!(BufferCapacity::new(50_000).value(), 1024); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_EVENT_LOG_CAPACITY, MAX_EVENT_LOG_CAPACITY))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_EVENT_LOG_CAPACITY
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_EVENT_LOG_CAPACITY
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_EVENT_LOG_CAPACITY)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use iced_segments::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::default());
///
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![1, 2, 3]);
/// assert_eq!(buffer.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a new circular buffer with a raw capacity value.
    ///
    /// This is useful for testing with small capacities.
    /// For production use, prefer [`CircularBuffer::new`] with [`BufferCapacity`].
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_capacity_clamps_to_valid_range() {
        assert_eq!(BufferCapacity::new(0).value(), MIN_EVENT_LOG_CAPACITY);
        assert_eq!(BufferCapacity::new(100_000).value(), MAX_EVENT_LOG_CAPACITY);
    }

    #[test]
    fn buffer_capacity_default_returns_expected_value() {
        assert_eq!(BufferCapacity::default().value(), DEFAULT_EVENT_LOG_CAPACITY);
    }

    #[test]
    fn buffer_capacity_detects_bounds() {
        assert!(BufferCapacity::new(MIN_EVENT_LOG_CAPACITY).is_min());
        assert!(BufferCapacity::new(MAX_EVENT_LOG_CAPACITY).is_max());
        assert!(!BufferCapacity::new(64).is_min());
        assert!(!BufferCapacity::new(64).is_max());
    }

    #[test]
    fn circular_buffer_overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(3);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.push(4); // Evicts 1
        buffer.push(5); // Evicts 2

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
    }

    #[test]
    fn circular_buffer_iterates_newest_first_when_reversed() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(4);
        for value in 1..=4 {
            buffer.push(value);
        }

        let newest_first: Vec<_> = buffer.iter().rev().copied().collect();
        assert_eq!(newest_first, vec![4, 3, 2, 1]);
    }

    #[test]
    fn circular_buffer_len_and_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(5);

        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert!(buffer.is_empty());

        for value in 0..6 {
            buffer.push(value);
        }
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn circular_buffer_clear_keeps_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(5);
        buffer.push(1);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn zero_raw_capacity_holds_one_item() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(0);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2]);
    }
}
