use serde::Deserialize;

use crate::{CircularQueue, MIN_CAPACITY};

/// Construction parameters for a [`CircularQueue`], loadable from any
/// serde format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QueueConfig {
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_initial_capacity() -> usize {
    MIN_CAPACITY
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl QueueConfig {
    pub fn build<T>(&self) -> CircularQueue<T> {
        CircularQueue::with_capacity(self.initial_capacity)
    }
}
