use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures reported by the checked accessors
/// ([`try_dequeue`](crate::CircularQueue::try_dequeue),
/// [`try_get`](crate::CircularQueue::try_get)).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("queue is empty")]
    Empty,
    #[error("index {index} is out of range for a queue of length {len}")]
    OutOfRange { index: usize, len: usize },
}

#[inline]
pub fn empty() -> Error {
    Error::Empty
}

#[inline]
pub fn out_of_range(index: usize, len: usize) -> Error {
    Error::OutOfRange { index, len }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(empty().to_string(), "queue is empty");
        assert_eq!(
            out_of_range(4, 3).to_string(),
            "index 4 is out of range for a queue of length 3"
        );
    }
}
