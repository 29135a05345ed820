//! JSON form of the queue

use fifo_queue::Queue;
use serde_json::json;

#[test]
fn test_serializes_head_to_tail() {
    let mut q = Queue::new();
    q.enqueue(1);
    q.enqueue(2);
    q.enqueue(3);
    q.dequeue().unwrap();
    q.enqueue(4);
    assert_eq!(serde_json::to_value(&q).unwrap(), json!([2, 3, 4]));
}

#[test]
fn test_serializes_empty() {
    let q: Queue<String> = Queue::new();
    assert_eq!(serde_json::to_string(&q).unwrap(), "[]");
}

#[test]
fn test_deserializes_sequence() {
    let mut q: Queue<String> = serde_json::from_str(r#"["first","second"]"#).unwrap();
    assert_eq!(q.len(), 2);
    assert_eq!(q.dequeue().as_deref(), Ok("first"));
    assert_eq!(q.dequeue().as_deref(), Ok("second"));
    assert!(q.is_empty());
}

#[test]
fn test_rejects_non_sequence() {
    let r: Result<Queue<i32>, _> = serde_json::from_str(r#"{"data":[1]}"#);
    assert!(r.is_err());
}
