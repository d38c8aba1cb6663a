//! In-memory customer service desk.
//!
//! A [`RequestCenter`] records customer requests, serves them oldest first,
//! keeps the served ones on a history stack and promotes customers whose
//! request count passes a threshold to a frequent-customer list. The
//! [`MenuSession`] front end drives a center from any `BufRead`/`Write` pair.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use app::MenuSession;
pub use config::CenterConfig;
pub use core::center::RequestCenter;
pub use domain::model::{CustomerView, Notice, Outcome, OutputFormat, Registration, RequestView};
pub use utils::error::{HelpDeskError, Result};
