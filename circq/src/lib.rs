//! A FIFO queue with amortized O(1) `enqueue`/`dequeue`.
//!
//! Elements live in a single circular buffer addressed by a `head` cursor,
//! a `tail` cursor and an occupancy counter. The buffer doubles when it is
//! full and halves once occupancy drops to a quarter of the capacity, but
//! never below the capacity the queue was created with.
//!
//! ```
//! use circq::CircularQueue;
//!
//! let mut queue = CircularQueue::new();
//! queue.enqueue(3);
//! queue.enqueue(5);
//! assert_eq!(queue.dequeue(), Some(3));
//! assert_eq!(queue.to_string(), "Queue(1) { 5 }");
//! ```

mod config;
pub mod errors;
mod iter;
mod queue;

pub use config::QueueConfig;
pub use errors::{Error, Result};
pub use iter::{Entries, IntoIter, Iter};
pub use queue::{CircularQueue, MIN_CAPACITY};
