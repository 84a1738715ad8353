//! Receipt processing: change detection and bulk runs.
//!
//! # Key Concepts
//!
//! - **ReceiptProcessor**: compares live and recorded statuses and appends
//!   history entries on change
//! - **Clock**: the time source stamped onto new entries
//! - **ProcessorConfig**: TOML-loadable tunables, applied through
//!   `ProcessorBuilder`
//!
//! Processing is synchronous and never fails. Callers that share a receipt
//! across threads must serialize access to it themselves.

mod builder;
mod clock;
mod config;
mod engine;
mod error;

pub use builder::ProcessorBuilder;
pub use clock::{Clock, SystemClock};
pub use config::ProcessorConfig;
pub use engine::{BulkOutcome, ProcessingStats, ReceiptProcessor};
pub use error::ConfigError;
