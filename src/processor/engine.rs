//! Change detection over receipts.

use crate::core::{display_name, HistoryEntry, Receipt, Status};
use crate::processor::clock::{Clock, SystemClock};
use crate::processor::config::ProcessorConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// Counters for a single bulk run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Receipts looked at
    pub examined: usize,
    /// Receipts that got a new history entry
    pub changed: usize,
    /// Receipts whose live status matched the recorded one
    pub unchanged: usize,
    /// Receipts skipped because their recorded status was final
    pub skipped: usize,
}

/// Result of a bulk run: the changed receipts, in input order, plus stats.
#[derive(Debug)]
pub struct BulkOutcome<'a, S: Status> {
    pub changed: Vec<&'a Receipt<S>>,
    pub stats: ProcessingStats,
}

/// Records status changes onto receipt histories.
///
/// The processor holds only its configuration and clock. It never keeps
/// receipts around; every call works on what the caller passes in.
///
/// # Example
///
/// ```rust
/// use receipt_status::core::Receipt;
/// use receipt_status::processor::ReceiptProcessor;
///
/// let processor = ReceiptProcessor::new();
/// let mut receipt: Receipt<String> = Receipt::new();
/// receipt.set_status("pending".to_string());
///
/// assert!(processor.process_receipt(&mut receipt, None));
/// assert_eq!(receipt.status_history().len(), 1);
///
/// receipt.set_status("approved".to_string());
/// let pending = "pending".to_string();
/// assert!(processor.process_receipt(&mut receipt, Some(&pending)));
///
/// let approved = "approved".to_string();
/// assert!(!processor.process_receipt(&mut receipt, Some(&approved)));
/// assert_eq!(receipt.status_history().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ReceiptProcessor<C: Clock = SystemClock> {
    config: ProcessorConfig,
    clock: C,
}

impl ReceiptProcessor<SystemClock> {
    /// Create a processor with default configuration and the system clock.
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for ReceiptProcessor<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReceiptProcessor<C> {
    pub(crate) fn from_parts(config: ProcessorConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Compare the receipt's live status against `current_status` and
    /// append a history entry if they differ.
    ///
    /// Returns `true` when an entry was appended. `current_status` is
    /// normally the receipt's recorded status; see [`process`] for the
    /// form that reads it from the receipt itself.
    ///
    /// [`process`]: ReceiptProcessor::process
    pub fn process_receipt<S: Status>(
        &self,
        receipt: &mut Receipt<S>,
        current_status: Option<&S>,
    ) -> bool {
        if receipt.status() == current_status {
            trace!(receipt_id = %receipt.id(), status = display_name(current_status), "status unchanged");
            return false;
        }

        if receipt.status().is_none() && !self.config.record_cleared_status {
            trace!(receipt_id = %receipt.id(), "cleared status not recorded");
            return false;
        }

        let entry = HistoryEntry {
            status: receipt.status.clone(),
            timestamp: self.clock.now(),
        };
        debug!(
            receipt_id = %receipt.id(),
            from = display_name(current_status),
            to = display_name(entry.status.as_ref()),
            timestamp = %entry.timestamp,
            "recorded status change"
        );
        receipt.status_history_mut().append(entry);
        true
    }

    /// Process a receipt against its own recorded status.
    pub fn process<S: Status>(&self, receipt: &mut Receipt<S>) -> bool {
        let recorded = receipt.get_current_status().cloned();
        self.process_receipt(receipt, recorded.as_ref())
    }

    /// Process every receipt and return the ones that changed, in order.
    ///
    /// Receipts that did not change are left untouched and are not
    /// returned.
    pub fn bulk_process_receipts<'a, S, I>(&self, receipts: I) -> Vec<&'a Receipt<S>>
    where
        S: Status + 'a,
        I: IntoIterator<Item = &'a mut Receipt<S>>,
    {
        self.bulk_process(receipts).changed
    }

    /// Like [`bulk_process_receipts`], also reporting counters for the run.
    ///
    /// [`bulk_process_receipts`]: ReceiptProcessor::bulk_process_receipts
    pub fn bulk_process<'a, S, I>(&self, receipts: I) -> BulkOutcome<'a, S>
    where
        S: Status + 'a,
        I: IntoIterator<Item = &'a mut Receipt<S>>,
    {
        let mut changed = Vec::new();
        let mut stats = ProcessingStats::default();

        for receipt in receipts {
            stats.examined += 1;

            if self.config.skip_final
                && receipt.get_current_status().is_some_and(|s| s.is_final())
            {
                trace!(receipt_id = %receipt.id(), "skipping receipt in final status");
                stats.skipped += 1;
                continue;
            }

            if self.process(receipt) {
                stats.changed += 1;
                changed.push(&*receipt);
            } else {
                stats.unchanged += 1;
            }
        }

        info!(
            examined = stats.examined,
            changed = stats.changed,
            unchanged = stats.unchanged,
            skipped = stats.skipped,
            "bulk processing complete"
        );

        BulkOutcome { changed, stats }
    }
}
