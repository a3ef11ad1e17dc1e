// SPDX-License-Identifier: MPL-2.0
//! Ring buffer holding the most recent control events.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::EventCapacity;

/// Fixed-capacity buffer that drops its oldest entry when full.
///
/// Iteration is oldest first.
///
/// ```
/// use iced_video_controls::diagnostics::{CircularBuffer, EventCapacity};
///
/// let mut buffer: CircularBuffer<u32> = CircularBuffer::new(EventCapacity::new(10));
/// for value in 0..12 {
///     buffer.push(value);
/// }
/// assert_eq!(buffer.len(), 10);
/// assert_eq!(buffer.iter().next(), Some(&2));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one at capacity.
    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Most recently pushed entry.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
