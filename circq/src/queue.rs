use std::{fmt, iter};

use tracing::{debug, trace};

use crate::errors::{self, Result};

/// Smallest capacity a queue is ever created with.
pub const MIN_CAPACITY: usize = 32;

/// Growable FIFO queue backed by a circular buffer.
///
/// The occupied slots are exactly the `len` slots starting at `head`,
/// walking forward with wraparound. Every other slot is `None`, so a value
/// that has been dequeued is never kept alive by the buffer.
pub struct CircularQueue<T> {
    buffer: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
    initial_capacity: usize,
}

fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> CircularQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates a queue whose capacity never shrinks below `capacity`.
    /// Values under [`MIN_CAPACITY`] are raised to it.
    pub fn with_capacity(capacity: usize) -> Self {
        let initial_capacity = capacity.max(MIN_CAPACITY);
        Self {
            buffer: allocate(initial_capacity),
            head: 0,
            tail: 0,
            len: 0,
            initial_capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Appends `item` to the back of the queue and returns the new length.
    ///
    /// A full buffer is doubled before the write.
    pub fn enqueue(&mut self, item: T) -> usize {
        if self.len == self.capacity() {
            self.resize(self.capacity() * 2);
        }
        self.buffer[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        self.len
    }

    /// Removes the item at the front of the queue, or returns `None` if
    /// the queue is empty.
    ///
    /// Once the length drops to a quarter of the capacity the buffer is
    /// halved, as long as that keeps it at or above the initial capacity.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;

        let capacity = self.capacity();
        if capacity >= 2 * self.initial_capacity && self.len <= capacity / 4 {
            self.resize(capacity / 2);
        }
        item
    }

    /// Like [`dequeue`](Self::dequeue), failing with [`Error::Empty`] on an
    /// empty queue.
    ///
    /// [`Error::Empty`]: crate::Error::Empty
    pub fn try_dequeue(&mut self) -> Result<T> {
        self.dequeue().ok_or_else(errors::empty)
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    /// Mutable access to the front element.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.head].as_mut()
    }

    /// Returns the element `index` positions behind the front, or `None`
    /// when `index` is not in `0..len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buffer[self.slot(index)].as_ref()
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.buffer[slot].as_mut()
    }

    /// Like [`get`](Self::get), failing with [`Error::OutOfRange`] when
    /// `index` is not in `0..len`.
    ///
    /// [`Error::OutOfRange`]: crate::Error::OutOfRange
    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.get(index)
            .ok_or_else(|| errors::out_of_range(index, self.len))
    }

    /// Drops every element and goes back to a fresh buffer of the initial
    /// capacity.
    pub fn clear(&mut self) {
        trace!(len = self.len, capacity = self.capacity(), "clear queue");
        self.buffer = allocate(self.initial_capacity);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    #[inline]
    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    // Moves the occupied slots, in logical order, to the front of a new
    // buffer of `capacity` slots.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(self.len <= capacity);
        debug!(
            from = self.capacity(),
            to = capacity,
            len = self.len,
            "resize queue buffer"
        );
        let mut buffer = allocate(capacity);
        for (index, slot) in buffer.iter_mut().take(self.len).enumerate() {
            let from = self.slot(index);
            *slot = self.buffer[from].take();
        }
        self.buffer = buffer;
        self.head = 0;
        self.tail = self.len;
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            initial_capacity: self.initial_capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a CircularQueue<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Renders `Queue(<len>) { v0, v1, ..., vn }` in FIFO order.
impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue({}) {{ ", self.len)?;
        for (item, index) in self.entries() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str(" }")
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
