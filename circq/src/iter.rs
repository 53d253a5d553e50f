use std::iter::{Enumerate, FusedIterator};

use crate::CircularQueue;

impl<T> CircularQueue<T> {
    /// Iterates from front to back without consuming the queue.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Like [`iter`](Self::iter), pairing each element with its position as
    /// `(value, index)`.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            inner: self.iter().enumerate(),
        }
    }

    /// Calls `f` with every element, its position and the queue itself.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (item, index) in self.entries() {
            f(item, index, self);
        }
    }
}

#[derive(Debug)]
pub struct Iter<'a, T> {
    queue: &'a CircularQueue<T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.queue.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.queue.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Debug)]
pub struct Entries<'a, T> {
    inner: Enumerate<Iter<'a, T>>,
}

impl<T> Clone for Entries<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, item)| (item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

/// Owning iterator that dequeues elements in FIFO order.
#[derive(Debug)]
pub struct IntoIter<T> {
    queue: CircularQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [3, 5, 7] stored across the end of the buffer.
    fn wrapped() -> CircularQueue<i32> {
        let mut q = CircularQueue::new();
        for i in 0..30 {
            q.enqueue(i);
        }
        for _ in 0..30 {
            q.dequeue();
        }
        q.extend([3, 5, 7]);
        q
    }

    #[test]
    fn iterate_wrapped() {
        let q = wrapped();
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![3, 5, 7]);
        assert_eq!(q.iter().rev().copied().collect::<Vec<_>>(), vec![7, 5, 3]);
        assert_eq!(q.iter().len(), 3);

        let mut seen = Vec::new();
        for item in &q {
            seen.push(*item);
        }
        assert_eq!(seen, vec![3, 5, 7]);
    }

    #[test]
    fn iteration_is_restartable() {
        let q = wrapped();
        let mut iter = q.iter();
        assert_eq!(iter.next(), Some(&3));
        let rest = iter.clone();
        assert_eq!(iter.count(), 2);
        assert_eq!(rest.copied().collect::<Vec<_>>(), vec![5, 7]);
        assert_eq!(q.iter().count(), 3);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn iterate_empty() {
        let q = CircularQueue::<i32>::new();
        assert_eq!(q.iter().next(), None);
        assert_eq!(q.entries().next(), None);
        assert_eq!(q.into_iter().next(), None);
    }

    #[test]
    fn entries_pair_with_index() {
        let q = wrapped();
        let entries = q.entries().collect::<Vec<_>>();
        assert_eq!(entries, vec![(&3, 0), (&5, 1), (&7, 2)]);
        for (item, index) in q.entries() {
            assert_eq!(q.get(index), Some(item));
        }
    }

    #[test]
    fn entries_yield_value_before_index() {
        let q: CircularQueue<i32> = [1, 2].into_iter().collect();
        let (value, index) = q.entries().next().unwrap();
        assert_eq!(*value, 1);
        assert_eq!(index, 0);
        assert_eq!(q.entries().last(), Some((&2, 1)));
    }

    #[test]
    fn for_each_visits_in_order() {
        let q = wrapped();
        let mut calls = Vec::new();
        q.for_each(|value, index, queue| {
            assert_eq!(queue.get(index), Some(value));
            calls.push((*value, index, queue.len()));
        });
        assert_eq!(calls, vec![(3, 0, 3), (5, 1, 3), (7, 2, 3)]);
    }

    #[test]
    fn into_iter_drains_fifo() {
        let mut q = CircularQueue::new();
        for i in 0..100 {
            q.enqueue(i);
        }
        let mut iter = q.into_iter();
        assert_eq!(iter.len(), 100);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.len(), 99);
        assert_eq!(iter.collect::<Vec<_>>(), (1..100).collect::<Vec<_>>());
    }
}
