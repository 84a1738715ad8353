//! Versioned snapshots of receipts and their histories.
//!
//! The tracker owns no storage. Snapshots give callers a ready-made
//! serialization (JSON for readability, bincode for compactness) to persist
//! or transmit receipts with their histories intact.

use crate::core::{Receipt, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a set of receipts.
///
/// # Example
///
/// ```rust
/// use receipt_status::core::Receipt;
/// use receipt_status::processor::ReceiptProcessor;
/// use receipt_status::snapshot::Snapshot;
///
/// let processor = ReceiptProcessor::new();
/// let mut receipt: Receipt<String> = Receipt::new();
/// receipt.set_status("pending".to_string());
/// processor.process(&mut receipt);
///
/// let json = Snapshot::capture([&receipt]).to_json().unwrap();
/// let restored = Snapshot::<String>::from_json(&json).unwrap().into_receipts();
///
/// assert_eq!(restored, vec![receipt]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: Status> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Receipts with their complete histories, in capture order
    pub receipts: Vec<Receipt<S>>,
}

impl<S: Status> Snapshot<S> {
    /// Snapshot copies of the given receipts.
    pub fn capture<'a, I>(receipts: I) -> Self
    where
        S: 'a,
        I: IntoIterator<Item = &'a Receipt<S>>,
    {
        Self::from_receipts(receipts.into_iter().cloned().collect())
    }

    /// Snapshot receipts the caller already owns.
    pub fn from_receipts(receipts: Vec<Receipt<S>>) -> Self {
        let snapshot = Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            receipts,
        };
        debug!(snapshot_id = %snapshot.id, receipts = snapshot.receipts.len(), "captured snapshot");
        snapshot
    }

    pub fn into_receipts(self) -> Vec<Receipt<S>> {
        self.receipts
    }

    /// Check the version and that no receipt appears twice.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let mut seen = HashSet::with_capacity(self.receipts.len());
        for receipt in &self.receipts {
            if !seen.insert(receipt.id()) {
                return Err(SnapshotError::DuplicateReceipt(receipt.id()));
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode and validate a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        debug!(snapshot_id = %snapshot.id, receipts = snapshot.receipts.len(), "decoded JSON snapshot");
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        debug!(snapshot_id = %snapshot.id, receipts = snapshot.receipts.len(), "decoded binary snapshot");
        Ok(snapshot)
    }
}
