use crate::core::frequent::FrequentTracker;
use crate::core::history::HistoryStack;
use crate::core::queue::PendingQueue;
use crate::core::registry::CustomerRegistry;
use crate::domain::model::{CustomerView, Notice, Outcome, Registration, Request, RequestView};
use crate::domain::ports::ConfigProvider;

pub const DEFAULT_FREQUENT_THRESHOLD: u32 = 5;

/// Owns every collection of the help desk. Operations run to completion and
/// return snapshot records; nothing outside the center borrows its state.
#[derive(Debug)]
pub struct RequestCenter {
    registry: CustomerRegistry,
    pending: PendingQueue,
    history: HistoryStack,
    frequent: FrequentTracker,
    frequent_threshold: u32,
}

impl Default for RequestCenter {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_FREQUENT_THRESHOLD)
    }
}

impl RequestCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A customer is promoted once their request count is strictly greater
    /// than `frequent_threshold`.
    pub fn with_threshold(frequent_threshold: u32) -> Self {
        Self {
            registry: CustomerRegistry::new(),
            pending: PendingQueue::new(),
            history: HistoryStack::new(),
            frequent: FrequentTracker::new(),
            frequent_threshold,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::with_threshold(config.frequent_threshold())
    }

    pub fn frequent_threshold(&self) -> u32 {
        self.frequent_threshold
    }

    pub fn register_request(&mut self, name: &str, description: &str) -> Registration {
        let customer = self.registry.find_or_create(name);
        let request_count = self.registry.record_request(customer);
        self.pending.enqueue(customer, description);

        let promoted =
            request_count > self.frequent_threshold && self.frequent.add_if_absent(customer);

        if promoted {
            tracing::info!(customer = name, "Frequent customer added: {}", name);
        }
        tracing::info!(
            customer = name,
            request_count,
            "Request registered for {}: {}",
            name,
            description
        );

        Registration {
            customer: name.to_string(),
            description: description.to_string(),
            request_count,
            promoted,
        }
    }

    pub fn serve_next_request(&mut self) -> Outcome<RequestView> {
        let Some(request) = self.pending.dequeue_oldest() else {
            tracing::debug!("Serve requested with an empty queue");
            return Outcome::Empty(Notice::NoPendingRequests);
        };

        let view = self.view(&request);
        self.history.push(request);
        tracing::info!(
            pending = self.pending.len(),
            "Now serving: {} - {}",
            view.customer,
            view.description
        );
        Outcome::Done(view)
    }

    pub fn query_last_served(&self) -> Outcome<RequestView> {
        match self.history.peek_top() {
            Some(request) => Outcome::Done(self.view(request)),
            None => {
                tracing::debug!("History queried before anything was served");
                Outcome::Empty(Notice::NoHistory)
            }
        }
    }

    /// All customers in first-seen order.
    pub fn list_customers(&self) -> Outcome<Vec<CustomerView>> {
        let customers: Vec<CustomerView> =
            self.registry.list().iter().map(CustomerView::from).collect();
        Outcome::listing(customers, Notice::NoCustomers)
    }

    /// Frequent customers, most recently promoted first.
    pub fn list_frequent_customers(&self) -> Outcome<Vec<CustomerView>> {
        let customers: Vec<CustomerView> = self
            .frequent
            .list_all()
            .filter_map(|id| self.registry.get(id))
            .map(CustomerView::from)
            .collect();
        Outcome::listing(customers, Notice::NoFrequentCustomers)
    }

    /// Pending requests, oldest first.
    pub fn list_pending_requests(&self) -> Outcome<Vec<RequestView>> {
        let requests: Vec<RequestView> =
            self.pending.peek_all().map(|r| self.view(r)).collect();
        Outcome::listing(requests, Notice::NoPendingRequests)
    }

    pub fn registry(&self) -> &CustomerRegistry {
        &self.registry
    }

    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn frequent(&self) -> &FrequentTracker {
        &self.frequent
    }

    // Every stored request references a registered customer, so the lookup
    // only falls back for ids from a different registry.
    fn view(&self, request: &Request) -> RequestView {
        let customer = self
            .registry
            .get(request.customer())
            .map(|c| c.name().to_string())
            .unwrap_or_default();
        RequestView::new(customer, request.description())
    }
}
