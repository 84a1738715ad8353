//! The receipt record: a live status plus its recorded history.

use super::history::StatusHistory;
use super::status::Status;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A receipt with a live status and an append-only status history.
///
/// The live `status` is set by callers. The history only changes when a
/// [`ReceiptProcessor`] detects that the live status differs from the
/// recorded one, so [`get_current_status`] may lag behind [`status`]
/// until the receipt is processed.
///
/// # Example
///
/// ```rust
/// use receipt_status::core::Receipt;
///
/// let mut receipt: Receipt<String> = Receipt::new();
/// assert!(receipt.get_current_status().is_none());
///
/// receipt.set_status("pending".to_string());
/// assert_eq!(receipt.status().map(String::as_str), Some("pending"));
///
/// // Nothing is recorded until a processor runs.
/// assert!(receipt.get_current_status().is_none());
/// assert!(receipt.has_pending_change());
/// ```
///
/// [`ReceiptProcessor`]: crate::processor::ReceiptProcessor
/// [`get_current_status`]: Receipt::get_current_status
/// [`status`]: Receipt::status
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Receipt<S: Status> {
    id: Uuid,
    /// Live status, set externally before processing
    pub status: Option<S>,
    status_history: StatusHistory<S>,
}

impl<S: Status> Default for Receipt<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Status> Receipt<S> {
    /// Create a receipt with a random id, no status and an empty history.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Create a receipt with a caller-supplied id.
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            status: None,
            status_history: StatusHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The live status.
    pub fn status(&self) -> Option<&S> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: S) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Read-only view of the recorded history.
    pub fn status_history(&self) -> &StatusHistory<S> {
        &self.status_history
    }

    pub(crate) fn status_history_mut(&mut self) -> &mut StatusHistory<S> {
        &mut self.status_history
    }

    /// The status of the most recent history entry.
    ///
    /// Returns `None` when nothing has been recorded yet, or when the last
    /// recorded status was itself `None`.
    pub fn get_current_status(&self) -> Option<&S> {
        self.status_history
            .last()
            .and_then(|entry| entry.status.as_ref())
    }

    /// Whether the live status differs from the recorded one.
    pub fn has_pending_change(&self) -> bool {
        self.status() != self.get_current_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HistoryEntry;
    use chrono::Utc;

    fn record(receipt: &mut Receipt<String>, status: Option<&str>) {
        receipt.status_history_mut().append(HistoryEntry {
            status: status.map(str::to_string),
            timestamp: Utc::now(),
        });
    }

    #[test]
    fn fresh_receipt_has_no_status() {
        let receipt: Receipt<String> = Receipt::new();

        assert!(receipt.status().is_none());
        assert!(receipt.status_history().is_empty());
        assert!(receipt.get_current_status().is_none());
        assert!(!receipt.has_pending_change());
    }

    #[test]
    fn receipts_get_distinct_ids() {
        let a: Receipt<String> = Receipt::new();
        let b: Receipt<String> = Receipt::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn with_id_keeps_the_given_id() {
        let id = Uuid::new_v4();
        let receipt: Receipt<String> = Receipt::with_id(id);
        assert_eq!(receipt.id(), id);
    }

    #[test]
    fn current_status_reads_last_entry() {
        let mut receipt = Receipt::new();
        record(&mut receipt, Some("pending"));
        record(&mut receipt, Some("approved"));

        assert_eq!(
            receipt.get_current_status().map(String::as_str),
            Some("approved")
        );
    }

    #[test]
    fn current_status_lags_live_status() {
        let mut receipt = Receipt::new();
        record(&mut receipt, Some("pending"));
        receipt.set_status("approved".to_string());

        assert_eq!(
            receipt.get_current_status().map(String::as_str),
            Some("pending")
        );
        assert!(receipt.has_pending_change());
    }

    #[test]
    fn recorded_none_reads_as_no_current_status() {
        let mut receipt = Receipt::new();
        record(&mut receipt, Some("pending"));
        record(&mut receipt, None);

        assert!(receipt.get_current_status().is_none());
        assert_eq!(receipt.status_history().len(), 2);
    }

    #[test]
    fn clear_status_resets_live_status() {
        let mut receipt: Receipt<String> = Receipt::new();
        receipt.set_status("pending".to_string());
        receipt.clear_status();
        assert!(receipt.status().is_none());
    }
}
