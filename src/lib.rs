//! Receipt Status: status-change tracking for receipt records
//!
//! A receipt carries a live status set by its owner and an append-only
//! history of the statuses that have been recorded for it. A processor
//! compares the two and appends a timestamped entry whenever they differ,
//! one receipt at a time or over a whole batch.
//!
//! # Core Concepts
//!
//! - **Status**: any comparable value via the `Status` trait
//! - **Receipt**: live status plus recorded `StatusHistory`
//! - **ReceiptProcessor**: change detection and bulk processing
//! - **Snapshot**: versioned JSON/binary form of receipts for persistence
//!
//! # Example
//!
//! ```rust
//! use receipt_status::core::Receipt;
//! use receipt_status::processor::ReceiptProcessor;
//!
//! let processor = ReceiptProcessor::new();
//!
//! let mut receipts: Vec<Receipt<String>> = (0..3).map(|_| Receipt::new()).collect();
//! receipts[0].set_status("pending".to_string());
//! receipts[2].set_status("approved".to_string());
//!
//! let changed = processor.bulk_process_receipts(&mut receipts);
//! assert_eq!(changed.len(), 2);
//!
//! // Nothing new to record on a second run.
//! assert!(processor.bulk_process_receipts(&mut receipts).is_empty());
//! ```

pub mod analysis;
pub mod core;
mod macros;
pub mod processor;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{HistoryEntry, Receipt, Status, StatusHistory};
pub use crate::processor::{ProcessorConfig, ReceiptProcessor};
