//! Receipt Workflow
//!
//! This example walks a batch of receipts through a few status updates.
//!
//! Key concepts:
//! - Declaring statuses with `status_enum!`
//! - Bulk processing that only returns receipts that changed
//! - Status flow counts over the recorded histories
//! - Lead times to a final status
//! - Snapshotting receipts for an external store
//!
//! Run with: RUST_LOG=debug cargo run --example receipt_workflow

use receipt_status::analysis::{LeadTimes, StatusFlow};
use receipt_status::core::{Receipt, Status};
use receipt_status::processor::{ProcessorConfig, ReceiptProcessor};
use receipt_status::snapshot::Snapshot;
use receipt_status::status_enum;
use tracing_subscriber::EnvFilter;

status_enum! {
    enum ReceiptStatus {
        Pending,
        Approved,
        Rejected,
        Paid,
    }
    final: [Rejected, Paid]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Receipt Workflow Example ===\n");

    let config = ProcessorConfig::from_toml_str("skip_final = true")?;
    let processor = ReceiptProcessor::builder().config(config).build();

    let mut receipts: Vec<Receipt<ReceiptStatus>> = (0..4).map(|_| Receipt::new()).collect();
    for receipt in &mut receipts {
        receipt.set_status(ReceiptStatus::Pending);
    }

    let outcome = processor.bulk_process(&mut receipts);
    println!("Round 1: {:?}", outcome.stats);

    receipts[0].set_status(ReceiptStatus::Approved);
    receipts[1].set_status(ReceiptStatus::Rejected);
    receipts[2].set_status(ReceiptStatus::Approved);

    let outcome = processor.bulk_process(&mut receipts);
    println!("Round 2: {:?}", outcome.stats);

    receipts[0].set_status(ReceiptStatus::Paid);
    // Rejected is final; this change is skipped.
    receipts[1].set_status(ReceiptStatus::Approved);

    let outcome = processor.bulk_process(&mut receipts);
    println!("Round 3: {:?}", outcome.stats);

    println!("\nCurrent statuses:");
    for receipt in &receipts {
        let recorded = receipt.get_current_status().map_or("none", |s| s.name());
        println!("  {} -> {}", receipt.id(), recorded);
    }

    println!("\nTop transitions:");
    let flow = StatusFlow::from_receipts(&receipts);
    for (transition, count) in flow.top(5) {
        println!("  {transition}: {count}x");
    }

    let lead = LeadTimes::from_receipts(&receipts);
    println!(
        "\nLead times: {} completed, {} open, average {:?}",
        lead.completed(),
        lead.open(),
        lead.average()
    );

    let bytes = Snapshot::capture(&receipts).to_bytes()?;
    let restored = Snapshot::<ReceiptStatus>::from_bytes(&bytes)?;
    println!(
        "\nSnapshot: {} receipts in {} bytes",
        restored.receipts.len(),
        bytes.len()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
