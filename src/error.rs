/// Queue-specific error type
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// A head or tail read was attempted on a queue with no elements.
    #[error("empty queue")]
    Empty,
}

pub type Result<T> = std::result::Result<T, QueueError>;
