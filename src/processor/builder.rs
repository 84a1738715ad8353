//! Builder for constructing receipt processors.

use crate::processor::clock::{Clock, SystemClock};
use crate::processor::config::ProcessorConfig;
use crate::processor::engine::ReceiptProcessor;

/// Builder for [`ReceiptProcessor`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use receipt_status::processor::ReceiptProcessor;
///
/// let processor = ReceiptProcessor::builder()
///     .record_cleared_status(false)
///     .skip_final(true)
///     .build();
///
/// assert!(processor.config().skip_final);
/// ```
#[derive(Clone, Debug)]
pub struct ProcessorBuilder<C: Clock = SystemClock> {
    config: ProcessorConfig,
    clock: C,
}

impl ReceiptProcessor<SystemClock> {
    pub fn builder() -> ProcessorBuilder<SystemClock> {
        ProcessorBuilder::new()
    }
}

impl ProcessorBuilder<SystemClock> {
    pub fn new() -> Self {
        Self {
            config: ProcessorConfig::default(),
            clock: SystemClock,
        }
    }
}

impl Default for ProcessorBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ProcessorBuilder<C> {
    /// Replace the whole configuration, e.g. one loaded from TOML.
    pub fn config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn record_cleared_status(mut self, record: bool) -> Self {
        self.config.record_cleared_status = record;
        self
    }

    pub fn skip_final(mut self, skip: bool) -> Self {
        self.config.skip_final = skip;
        self
    }

    /// Use a different time source for history timestamps.
    pub fn clock<C2: Clock>(self, clock: C2) -> ProcessorBuilder<C2> {
        ProcessorBuilder {
            config: self.config,
            clock,
        }
    }

    pub fn build(self) -> ReceiptProcessor<C> {
        ReceiptProcessor::from_parts(self.config, self.clock)
    }
}
