use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Registry slot of a customer. Two ids are equal only when they point at the
/// same registered customer, regardless of the customer's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(usize);

impl CustomerId {
    pub(crate) fn new(slot: usize) -> Self {
        Self(slot)
    }

    pub fn slot(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    request_count: u32,
}

impl Customer {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            request_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn request_count(&self) -> u32 {
        self.request_count
    }

    pub(crate) fn record_request(&mut self) -> u32 {
        self.request_count += 1;
        self.request_count
    }
}

/// A customer request. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    customer: CustomerId,
    description: String,
}

impl Request {
    pub fn new(customer: CustomerId, description: impl Into<String>) -> Self {
        Self {
            customer,
            description: description.into(),
        }
    }

    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerView {
    pub name: String,
    pub request_count: u32,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            request_count: customer.request_count,
        }
    }
}

impl fmt::Display for CustomerView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - Requests: {}", self.name, self.request_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestView {
    pub customer: String,
    pub description: String,
}

impl RequestView {
    pub fn new(customer: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for RequestView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.customer, self.description)
    }
}

/// Confirmation returned by `RequestCenter::register_request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub customer: String,
    pub description: String,
    pub request_count: u32,
    /// True only on the registration that made the customer frequent.
    pub promoted: bool,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // promotion is announced before the confirmation
        if self.promoted {
            writeln!(f, "Frequent customer added: {}", self.customer)?;
        }
        write!(f, "Request registered for {}: {}", self.customer, self.description)
    }
}

/// Informational "nothing to show" conditions. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    NoPendingRequests,
    NoHistory,
    NoCustomers,
    NoFrequentCustomers,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoPendingRequests => "No pending requests.",
            Notice::NoHistory => "No service history yet.",
            Notice::NoCustomers => "No customers registered.",
            Notice::NoFrequentCustomers => "No frequent customers registered.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Done(T),
    Empty(Notice),
}

impl<T> Outcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty(_))
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            Outcome::Done(_) => None,
            Outcome::Empty(notice) => Some(*notice),
        }
    }

    pub fn done(&self) -> Option<&T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Empty(_) => None,
        }
    }

    pub fn into_done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Empty(_) => None,
        }
    }
}

impl<E> Outcome<Vec<E>> {
    /// Builds a listing outcome, reporting `notice` when there are no entries.
    pub(crate) fn listing(entries: Vec<E>, notice: Notice) -> Self {
        if entries.is_empty() {
            Outcome::Empty(notice)
        } else {
            Outcome::Done(entries)
        }
    }
}

// {"status":"ok","data":...} or {"status":"empty","notice":...,"message":...}
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Done(data) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("status", "ok")?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Outcome::Empty(notice) => {
                let mut state = serializer.serialize_struct("Outcome", 3)?;
                state.serialize_field("status", "empty")?;
                state.serialize_field("notice", notice)?;
                state.serialize_field("message", notice.message())?;
                state.end()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
