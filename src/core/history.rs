use crate::domain::model::Request;

/// Served requests, most recent on top. Entries are never popped.
#[derive(Debug, Default)]
pub struct HistoryStack {
    served: Vec<Request>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, request: Request) {
        self.served.push(request);
    }

    pub fn peek_top(&self) -> Option<&Request> {
        self.served.last()
    }

    pub fn len(&self) -> usize {
        self.served.len()
    }

    pub fn is_empty(&self) -> bool {
        self.served.is_empty()
    }
}
