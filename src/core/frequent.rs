use crate::domain::model::CustomerId;
use std::collections::VecDeque;

/// Customers promoted to frequent, newest first. Membership is by registry
/// slot, so two customers with equal fields are still distinct members.
#[derive(Debug, Default)]
pub struct FrequentTracker {
    members: VecDeque<CustomerId>,
}

impl FrequentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front unless already present. Returns true on insertion.
    pub fn add_if_absent(&mut self, customer: CustomerId) -> bool {
        if self.contains(customer) {
            return false;
        }
        self.members.push_front(customer);
        true
    }

    pub fn contains(&self, customer: CustomerId) -> bool {
        self.members.contains(&customer)
    }

    pub fn list_all(&self) -> impl Iterator<Item = CustomerId> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
