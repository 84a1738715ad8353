//! The `Status` trait for values tracked on a receipt.
//!
//! Any comparable value type can serve as a status. Comparison uses the
//! type's own `PartialEq`; no validation is applied to the values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for receipt status values.
///
/// # Required Traits
///
/// - `Clone`: statuses are copied into history entries
/// - `PartialEq`: change detection compares live and recorded statuses
/// - `Debug`: diagnostics
/// - `Serialize` + `DeserializeOwned`: receipts are snapshot-able
///
/// # Example
///
/// ```rust
/// use receipt_status::core::Status;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ReceiptStatus {
///     Pending,
///     Approved,
///     Rejected,
/// }
///
/// impl Status for ReceiptStatus {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Approved => "Approved",
///             Self::Rejected => "Rejected",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Approved | Self::Rejected)
///     }
/// }
/// ```
pub trait Status: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Name used in logs and in status flow keys.
    fn name(&self) -> &str;

    /// Whether no further status changes are expected after this one.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

impl Status for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Display name for an optional status; `None` renders as `"none"`.
pub(crate) fn display_name<S: Status>(status: Option<&S>) -> &str {
    status.map_or("none", Status::name)
}
