use crate::domain::model::{CustomerId, Request};
use std::collections::VecDeque;

/// Pending requests, oldest at the head.
#[derive(Debug, Default)]
pub struct PendingQueue {
    requests: VecDeque<Request>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, customer: CustomerId, description: impl Into<String>) {
        self.requests.push_back(Request::new(customer, description));
    }

    pub fn dequeue_oldest(&mut self) -> Option<Request> {
        self.requests.pop_front()
    }

    /// Head to tail, without removing anything.
    pub fn peek_all(&self) -> impl Iterator<Item = &Request> + '_ {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_is_fifo() {
        let mut queue = PendingQueue::new();
        queue.enqueue(CustomerId::new(0), "first");
        queue.enqueue(CustomerId::new(1), "second");
        queue.enqueue(CustomerId::new(0), "third");

        let order: Vec<String> = std::iter::from_fn(|| queue.dequeue_oldest())
            .map(|r| r.description().to_string())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dequeue_on_empty_queue() {
        let mut queue = PendingQueue::new();
        assert!(queue.dequeue_oldest().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_all_is_non_destructive() {
        let mut queue = PendingQueue::new();
        queue.enqueue(CustomerId::new(3), "refund");
        queue.enqueue(CustomerId::new(4), "login");

        let peeked: Vec<&str> = queue.peek_all().map(Request::description).collect();
        assert_eq!(peeked, vec!["refund", "login"]);
        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.dequeue_oldest().map(|r| r.customer()),
            Some(CustomerId::new(3))
        );
    }
}
