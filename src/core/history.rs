//! Status history tracking.
//!
//! A receipt's history is an ordered, append-only log of the statuses it
//! has been recorded in. The most recent entry is always last.

use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single recorded status and the wall-clock time it was recorded at.
///
/// The status is optional: a receipt whose live status was cleared after
/// being recorded gets a `None` entry.
///
/// # Example
///
/// ```rust
/// use receipt_status::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     status: Some("pending".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(entry.status.as_deref(), Some("pending"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryEntry<S: Status> {
    /// The status recorded at this point
    pub status: Option<S>,
    /// When the status was recorded
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only history of recorded statuses.
///
/// Within the crate, entries are only added through [`ReceiptProcessor`],
/// and callers get no way to reorder or edit them in place. A history
/// decoded with serde (directly or through a [`Snapshot`]) is taken as-is:
/// its entries are not re-checked for repeated statuses or timestamp order.
///
/// [`ReceiptProcessor`]: crate::processor::ReceiptProcessor
/// [`Snapshot`]: crate::snapshot::Snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusHistory<S: Status> {
    entries: Vec<HistoryEntry<S>>,
}

impl<S: Status> Default for StatusHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Status> StatusHistory<S> {
    /// Create a new empty history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use receipt_status::core::StatusHistory;
    ///
    /// let history: StatusHistory<String> = StatusHistory::new();
    /// assert!(history.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, entry: HistoryEntry<S>) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry<S>] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry<S>> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry<S>> {
        self.entries.iter()
    }

    /// Get the path of recorded statuses, in recording order.
    pub fn get_path(&self) -> Vec<Option<&S>> {
        self.entries.iter().map(|e| e.status.as_ref()).collect()
    }

    /// Calculate total duration from first to last entry.
    ///
    /// Returns `None` if the history is empty. A single entry has a
    /// duration of zero, and so does a history whose last timestamp is
    /// earlier than its first (the wall clock stepped backwards).
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        Some(elapsed(first.timestamp, last.timestamp))
    }

    /// The first entry that recorded a final status.
    ///
    /// Later entries, even a move out of the final status, do not change
    /// the result.
    pub fn completion(&self) -> Option<&HistoryEntry<S>> {
        self.entries
            .iter()
            .find(|e| e.status.as_ref().is_some_and(|s| s.is_final()))
    }

    /// When the first final status was recorded, if any.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completion().map(|e| e.timestamp)
    }

    /// Lead time from the first recorded entry to [`completed_at`].
    ///
    /// Clamped to zero like [`duration`].
    ///
    /// [`completed_at`]: StatusHistory::completed_at
    /// [`duration`]: StatusHistory::duration
    pub fn time_to_final(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let completed = self.completed_at()?;
        Some(elapsed(first.timestamp, completed))
    }

    /// Consecutive `(from, to)` status pairs.
    ///
    /// A history of `n` entries yields `n - 1` transitions.
    pub fn transitions(&self) -> impl Iterator<Item = (Option<&S>, Option<&S>)> + '_ {
        self.entries
            .windows(2)
            .map(|pair| (pair[0].status.as_ref(), pair[1].status.as_ref()))
    }
}

fn elapsed(from: DateTime<Utc>, to: DateTime<Utc>) -> Duration {
    to.signed_duration_since(from)
        .to_std()
        .unwrap_or(Duration::ZERO)
}

impl<'a, S: Status> IntoIterator for &'a StatusHistory<S> {
    type Item = &'a HistoryEntry<S>;
    type IntoIter = std::slice::Iter<'a, HistoryEntry<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
