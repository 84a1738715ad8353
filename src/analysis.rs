//! Status flow and lead time analysis across receipt histories.

use crate::core::{display_name, Receipt, Status};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// A `from -> to` pair of status names.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TransitionKey {
    pub from: String,
    pub to: String,
}

impl std::fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Counts of recorded status transitions over a set of receipts.
///
/// Transitions are read from consecutive history entries; a missing status
/// is counted under the name `"none"`.
///
/// # Example
///
/// ```rust
/// use receipt_status::analysis::StatusFlow;
/// use receipt_status::core::Receipt;
/// use receipt_status::processor::ReceiptProcessor;
///
/// let processor = ReceiptProcessor::new();
/// let mut receipt: Receipt<String> = Receipt::new();
/// for status in ["pending", "approved"] {
///     receipt.set_status(status.to_string());
///     processor.process(&mut receipt);
/// }
///
/// let flow = StatusFlow::from_receipts([&receipt]);
/// let top = flow.top(1);
/// assert_eq!(top[0].0.to_string(), "pending->approved");
/// assert_eq!(top[0].1, 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusFlow {
    counts: BTreeMap<TransitionKey, usize>,
}

impl StatusFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_receipts<'a, S, I>(receipts: I) -> Self
    where
        S: Status + 'a,
        I: IntoIterator<Item = &'a Receipt<S>>,
    {
        let mut flow = Self::new();
        for receipt in receipts {
            flow.add(receipt);
        }
        flow
    }

    /// Add the transitions recorded on one receipt.
    pub fn add<S: Status>(&mut self, receipt: &Receipt<S>) {
        for (from, to) in receipt.status_history().transitions() {
            let key = TransitionKey {
                from: display_name(from).to_string(),
                to: display_name(to).to_string(),
            };
            *self.counts.entry(key).or_insert(0) += 1;
        }
    }

    pub fn count(&self, from: &str, to: &str) -> usize {
        let key = TransitionKey {
            from: from.to_string(),
            to: to.to_string(),
        };
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Total number of transitions counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent transitions, most frequent first.
    ///
    /// Ties keep key order.
    pub fn top(&self, n: usize) -> Vec<(&TransitionKey, usize)> {
        let mut sorted: Vec<_> = self.counts.iter().map(|(k, &c)| (k, c)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

/// Lead times from first recorded entry to first final status.
///
/// Receipts that never reached a final status are counted as open and do
/// not contribute to the averages.
///
/// # Example
///
/// ```rust
/// use receipt_status::analysis::LeadTimes;
/// use receipt_status::core::Receipt;
/// use receipt_status::processor::ReceiptProcessor;
/// use receipt_status::status_enum;
///
/// status_enum! {
///     enum Step { Pending, Paid }
///     final: [Paid]
/// }
///
/// let processor = ReceiptProcessor::new();
/// let mut receipt = Receipt::new();
/// for step in [Step::Pending, Step::Paid] {
///     receipt.set_status(step);
///     processor.process(&mut receipt);
/// }
///
/// let lead = LeadTimes::from_receipts([&receipt]);
/// assert_eq!(lead.completed(), 1);
/// assert_eq!(lead.open(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadTimes {
    open: usize,
    by_status: BTreeMap<String, (Duration, u32)>,
}

impl LeadTimes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_receipts<'a, S, I>(receipts: I) -> Self
    where
        S: Status + 'a,
        I: IntoIterator<Item = &'a Receipt<S>>,
    {
        let mut lead = Self::new();
        for receipt in receipts {
            lead.add(receipt);
        }
        lead
    }

    /// Add one receipt, grouped under the name of its first final status.
    pub fn add<S: Status>(&mut self, receipt: &Receipt<S>) {
        let history = receipt.status_history();
        let (Some(completion), Some(lead)) = (history.completion(), history.time_to_final())
        else {
            self.open += 1;
            return;
        };

        let name = display_name(completion.status.as_ref()).to_string();
        let slot = self.by_status.entry(name).or_insert((Duration::ZERO, 0));
        slot.0 += lead;
        slot.1 += 1;
    }

    /// Receipts that reached a final status.
    pub fn completed(&self) -> usize {
        self.by_status.values().map(|&(_, n)| n as usize).sum()
    }

    /// Receipts that have not reached a final status.
    pub fn open(&self) -> usize {
        self.open
    }

    /// Mean lead time over all completed receipts.
    pub fn average(&self) -> Option<Duration> {
        let (total, count) = self
            .by_status
            .values()
            .fold((Duration::ZERO, 0u32), |(t, c), &(d, n)| (t + d, c + n));
        (count > 0).then(|| total / count)
    }

    /// Mean lead time per final status, slowest first.
    ///
    /// Ties keep status name order.
    pub fn average_by_status(&self) -> Vec<(&str, Duration)> {
        let mut averages: Vec<_> = self
            .by_status
            .iter()
            .map(|(name, &(total, n))| (name.as_str(), total / n))
            .collect();
        averages.sort_by(|a, b| b.1.cmp(&a.1));
        averages
    }
}
