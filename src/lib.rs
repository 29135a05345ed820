//! A generic FIFO queue.
//!
//! ```
//! use fifo_queue::Queue;
//!
//! let mut q = Queue::new();
//! q.enqueue(10);
//! q.enqueue(20);
//! q.enqueue(30);
//! assert_eq!(q.to_string(), "Queue: [10 20 30]");
//! assert_eq!(q.front(), Ok(&10));
//! assert_eq!(q.dequeue(), Ok(10));
//! assert!(!q.is_empty());
//! q.clear();
//! assert!(q.is_empty());
//! ```

pub mod error;
pub mod queue;

pub use error::{QueueError, Result};
pub use queue::Queue;
