//! Property-based tests for receipt change detection.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated status sequences.

use chrono::Utc;
use proptest::prelude::*;
use receipt_status::analysis::{LeadTimes, StatusFlow};
use receipt_status::core::{Receipt, Status};
use receipt_status::processor::ReceiptProcessor;
use receipt_status::snapshot::Snapshot;
use receipt_status::status_enum;

status_enum! {
    enum TestStatus {
        Pending,
        Approved,
        Rejected,
        Paid,
    }
    final: [Rejected, Paid]
}

prop_compose! {
    fn arbitrary_status()(variant in 0..5u8) -> Option<TestStatus> {
        match variant {
            0 => None,
            1 => Some(TestStatus::Pending),
            2 => Some(TestStatus::Approved),
            3 => Some(TestStatus::Rejected),
            _ => Some(TestStatus::Paid),
        }
    }
}

fn receipt_with(status: Option<TestStatus>) -> Receipt<TestStatus> {
    let mut receipt = Receipt::new();
    receipt.status = status;
    receipt
}

proptest! {
    #[test]
    fn process_receipt_appends_iff_statuses_differ(
        live in arbitrary_status(),
        given in arbitrary_status(),
    ) {
        let processor = ReceiptProcessor::new();
        let mut receipt = receipt_with(live.clone());

        let before = Utc::now();
        let changed = processor.process_receipt(&mut receipt, given.as_ref());

        prop_assert_eq!(changed, live != given);
        prop_assert_eq!(receipt.status_history().len(), usize::from(changed));
        if let Some(entry) = receipt.status_history().last() {
            prop_assert_eq!(&entry.status, &live);
            prop_assert!(entry.timestamp >= before);
        }
    }

    #[test]
    fn history_never_records_the_same_status_twice_in_a_row(
        statuses in prop::collection::vec(arbitrary_status(), 0..20)
    ) {
        let processor = ReceiptProcessor::new();
        let mut receipt = Receipt::new();

        for status in &statuses {
            receipt.status = status.clone();
            processor.process(&mut receipt);
        }

        for (from, to) in receipt.status_history().transitions() {
            prop_assert_ne!(from, to);
        }
        prop_assert_eq!(receipt.get_current_status(), receipt.status());
    }

    #[test]
    fn history_is_append_only(
        statuses in prop::collection::vec(arbitrary_status(), 1..15)
    ) {
        let processor = ReceiptProcessor::new();
        let mut receipt = Receipt::new();

        for status in &statuses {
            let previous = receipt.status_history().entries().to_vec();
            receipt.status = status.clone();
            processor.process(&mut receipt);

            let entries = receipt.status_history().entries();
            prop_assert!(entries.len() == previous.len() || entries.len() == previous.len() + 1);
            prop_assert_eq!(&entries[..previous.len()], &previous[..]);
        }
    }

    #[test]
    fn timestamps_are_non_decreasing(
        statuses in prop::collection::vec(arbitrary_status(), 0..15)
    ) {
        let processor = ReceiptProcessor::new();
        let mut receipt = Receipt::new();

        for status in &statuses {
            receipt.status = status.clone();
            processor.process(&mut receipt);
        }

        let entries = receipt.status_history().entries();
        for pair in entries.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn bulk_returns_exactly_the_changed_receipts_in_order(
        setups in prop::collection::vec((arbitrary_status(), arbitrary_status()), 0..12)
    ) {
        let processor = ReceiptProcessor::new();

        // Each receipt is first recorded at `recorded`, then moved to `live`.
        let mut receipts: Vec<Receipt<TestStatus>> = setups
            .iter()
            .map(|(recorded, live)| {
                let mut receipt = receipt_with(recorded.clone());
                processor.process(&mut receipt);
                receipt.status = live.clone();
                receipt
            })
            .collect();

        let before: Vec<_> = receipts.iter().map(|r| r.status_history().clone()).collect();
        let expected: Vec<_> = receipts
            .iter()
            .filter(|r| r.has_pending_change())
            .map(Receipt::id)
            .collect();

        let changed: Vec<_> = processor
            .bulk_process_receipts(&mut receipts)
            .into_iter()
            .map(Receipt::id)
            .collect();

        prop_assert_eq!(&changed, &expected);
        for (receipt, history) in receipts.iter().zip(&before) {
            if changed.contains(&receipt.id()) {
                prop_assert_eq!(receipt.status_history().len(), history.len() + 1);
            } else {
                prop_assert_eq!(receipt.status_history(), history);
            }
        }
    }

    #[test]
    fn bulk_stats_add_up(
        setups in prop::collection::vec((arbitrary_status(), arbitrary_status()), 0..12),
        skip_final in any::<bool>(),
    ) {
        let recorder = ReceiptProcessor::new();
        let mut receipts: Vec<Receipt<TestStatus>> = setups
            .iter()
            .map(|(recorded, live)| {
                let mut receipt = receipt_with(recorded.clone());
                recorder.process(&mut receipt);
                receipt.status = live.clone();
                receipt
            })
            .collect();

        let total = receipts.len();
        let in_final = receipts
            .iter()
            .filter(|r| r.get_current_status().is_some_and(|s| s.is_final()))
            .count();
        let expected_skipped = if skip_final { in_final } else { 0 };

        let processor = ReceiptProcessor::builder().skip_final(skip_final).build();
        let outcome = processor.bulk_process(&mut receipts);
        let stats = outcome.stats;

        prop_assert_eq!(stats.examined, total);
        prop_assert_eq!(stats.changed + stats.unchanged + stats.skipped, stats.examined);
        prop_assert_eq!(outcome.changed.len(), stats.changed);
        prop_assert_eq!(stats.skipped, expected_skipped);
    }

    #[test]
    fn status_flow_counts_every_transition(
        histories in prop::collection::vec(
            prop::collection::vec(arbitrary_status(), 0..8),
            0..6,
        )
    ) {
        let processor = ReceiptProcessor::new();
        let receipts: Vec<Receipt<TestStatus>> = histories
            .iter()
            .map(|statuses| {
                let mut receipt = Receipt::new();
                for status in statuses {
                    receipt.status = status.clone();
                    processor.process(&mut receipt);
                }
                receipt
            })
            .collect();

        let expected: usize = receipts
            .iter()
            .map(|r| r.status_history().len().saturating_sub(1))
            .sum();

        prop_assert_eq!(StatusFlow::from_receipts(&receipts).total(), expected);
    }

    #[test]
    fn snapshot_restores_receipts(
        statuses in prop::collection::vec(arbitrary_status(), 0..8)
    ) {
        let processor = ReceiptProcessor::new();
        let mut receipt = Receipt::new();
        for status in &statuses {
            receipt.status = status.clone();
            processor.process(&mut receipt);
        }

        let json = Snapshot::capture([&receipt]).to_json().unwrap();
        let restored = Snapshot::<TestStatus>::from_json(&json).unwrap().into_receipts();

        prop_assert_eq!(restored, vec![receipt]);
    }

    #[test]
    fn completion_is_the_first_final_entry(
        statuses in prop::collection::vec(arbitrary_status(), 0..12)
    ) {
        let processor = ReceiptProcessor::new();
        let mut receipt = Receipt::new();
        for status in &statuses {
            receipt.status = status.clone();
            processor.process(&mut receipt);
        }

        let history = receipt.status_history();
        let first_final = history
            .entries()
            .iter()
            .position(|e| e.status.as_ref().is_some_and(|s| s.is_final()));

        match first_final {
            Some(index) => {
                let entries = history.entries();
                prop_assert_eq!(history.completed_at(), Some(entries[index].timestamp));
                prop_assert!(entries[..index]
                    .iter()
                    .all(|e| !e.status.as_ref().is_some_and(|s| s.is_final())));

                let lead = history.time_to_final().unwrap();
                prop_assert!(lead <= history.duration().unwrap());
            }
            None => {
                prop_assert!(history.completed_at().is_none());
                prop_assert!(history.time_to_final().is_none());
            }
        }
    }

    #[test]
    fn lead_times_count_every_receipt(
        histories in prop::collection::vec(
            prop::collection::vec(arbitrary_status(), 0..8),
            0..6,
        )
    ) {
        let processor = ReceiptProcessor::new();
        let receipts: Vec<Receipt<TestStatus>> = histories
            .iter()
            .map(|statuses| {
                let mut receipt = Receipt::new();
                for status in statuses {
                    receipt.status = status.clone();
                    processor.process(&mut receipt);
                }
                receipt
            })
            .collect();

        let completed = receipts
            .iter()
            .filter(|r| r.status_history().completed_at().is_some())
            .count();
        let lead = LeadTimes::from_receipts(&receipts);

        prop_assert_eq!(lead.completed(), completed);
        prop_assert_eq!(lead.completed() + lead.open(), receipts.len());
        prop_assert_eq!(lead.average().is_some(), completed > 0);
    }
}
