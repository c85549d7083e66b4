#![warn(missing_docs)]

//! OSD alerting: a facade that stamps alerts with cluster identity and
//! hands them to a pluggable alert store.

pub mod cli;
pub mod config;
pub mod error;
pub mod facade;
pub mod store;

pub use config::AlertConfig;
pub use error::{AlertError, AlertResult};
pub use facade::{init, instance, AlertFacade};
pub use store::{AlertStore, MemoryAlertStore};
