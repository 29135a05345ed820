use std::collections::{vec_deque, VecDeque};
use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{QueueError, Result};

/// A FIFO queue: elements go in at the tail and come out at the head.
///
/// Serializes as a plain sequence in head-to-tail order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `item` at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.data.push_back(item);
    }

    /// Removes and returns the head element.
    pub fn dequeue(&mut self) -> Result<T> {
        self.data.pop_front().ok_or_else(|| {
            trace!("dequeue on empty queue");
            QueueError::Empty
        })
    }

    /// Borrows the head element without removing it.
    pub fn front(&self) -> Result<&T> {
        self.data.front().ok_or_else(|| {
            trace!("front on empty queue");
            QueueError::Empty
        })
    }

    /// Borrows the tail element, i.e. the most recently enqueued one.
    pub fn peek_last(&self) -> Result<&T> {
        self.data.back().ok_or_else(|| {
            trace!("peek_last on empty queue");
            QueueError::Empty
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        debug!("clearing queue of {} elements", self.data.len());
        self.data.clear();
    }

    /// Reverses the element order in place, so the tail becomes the head.
    pub fn reverse(&mut self) {
        debug!("reversing queue of {} elements", self.data.len());
        self.data.make_contiguous().reverse();
    }

    /// Head-to-tail iterator over the elements.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.data.contains(item)
    }

    /// Removes the first element equal to `item`, counting from the head.
    /// The other elements keep their relative order.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.data.iter().position(|v| v == item) {
            Some(i) => {
                self.data.remove(i);
                trace!("removed element at position {}", i);
                true
            }
            None => {
                trace!("remove found no matching element");
                false
            }
        }
    }
}

impl<T: Clone> Queue<T> {
    /// Copies the elements out in head-to-tail order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Queue: [")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(v: Vec<T>) -> Self {
        Self { data: v.into() }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

/// Consumes the queue, yielding elements in dequeue order.
impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
