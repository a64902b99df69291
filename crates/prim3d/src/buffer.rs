//! Growable storage for per-frame vertex and draw-run records.

use core::ops::{Deref, DerefMut};

/// Owned growable array that keeps its allocation across frames.
///
/// Growth policy:
/// - capacity is at least [`GrowBuffer::MIN_CAPACITY`] once anything is reserved
/// - a full buffer doubles on `push_back`
/// - capacity never shrinks; `clear` only resets the length
#[derive(Debug, Clone, PartialEq)]
pub struct GrowBuffer<T> {
    data: Vec<T>,
}

impl<T> GrowBuffer<T> {
    pub const MIN_CAPACITY: usize = 8;

    #[inline]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        if capacity > 0 {
            buf.reserve(capacity);
        }
        buf
    }

    /// Grows capacity to at least `max(MIN_CAPACITY, capacity)` total elements.
    ///
    /// Never shrinks. Existing elements are moved into the new allocation.
    pub fn reserve(&mut self, capacity: usize) {
        let capacity = capacity.max(Self::MIN_CAPACITY);
        if capacity <= self.data.capacity() {
            return;
        }
        self.data.reserve_exact(capacity - self.data.len());
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.data.len() == self.data.capacity() {
            self.reserve(self.data.capacity() * 2);
        }
        self.data.push(value);
    }

    /// Clears the contents. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> GrowBuffer<T> {
    /// Grows the logical length to `len`, filling new slots with `value`.
    ///
    /// A `len` at or below the current length is a no-op.
    pub fn resize(&mut self, len: usize, value: T) {
        if len <= self.data.len() {
            return;
        }
        self.reserve(len);
        self.data.resize(len, value);
    }

    pub fn extend_from_slice(&mut self, values: &[T]) {
        let needed = self.data.len() + values.len();
        if needed > self.data.capacity() {
            self.reserve(needed.max(self.data.capacity() * 2));
        }
        self.data.extend_from_slice(values);
    }
}

impl<T> Default for GrowBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for GrowBuffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
