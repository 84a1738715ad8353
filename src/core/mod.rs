//! Core receipt types.
//!
//! This module contains the data side of the tracker:
//! - Status values via the `Status` trait
//! - The `Receipt` record and its live status
//! - Append-only `StatusHistory` of recorded statuses
//!
//! Nothing here reads the clock or logs; that lives in `processor`.

mod history;
mod receipt;
mod status;

pub use history::{HistoryEntry, StatusHistory};
pub use receipt::Receipt;
pub use status::Status;

pub(crate) use status::display_name;
