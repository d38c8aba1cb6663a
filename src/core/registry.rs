use crate::domain::model::{Customer, CustomerId};

/// Every customer ever seen, in registration order. Customers are never removed,
/// so a `CustomerId` handed out here stays valid for the registry's lifetime.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the customer registered under `name`, creating it with a zero
    /// request count if absent. Any string is a valid name, including `""`.
    pub fn find_or_create(&mut self, name: &str) -> CustomerId {
        if let Some(slot) = self.customers.iter().position(|c| c.name() == name) {
            return CustomerId::new(slot);
        }

        self.customers.push(Customer::new(name));
        let id = CustomerId::new(self.customers.len() - 1);
        tracing::debug!("Registered new customer '{}' in slot {}", name, id.slot());
        id
    }

    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(id.slot())
    }

    /// Bumps the request count and returns the new value.
    ///
    /// Panics if `id` was not issued by this registry.
    pub(crate) fn record_request(&mut self, id: CustomerId) -> u32 {
        self.customers[id.slot()].record_request()
    }

    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
