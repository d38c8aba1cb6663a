pub mod center;
pub mod frequent;
pub mod history;
pub mod queue;
pub mod registry;

pub use crate::domain::model::{CustomerId, CustomerView, Notice, Outcome, Registration, RequestView};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
