//! Macros for declaring status enums.

/// Generate a `Status` implementation for a plain enum.
///
/// The enum gets `Clone`, `PartialEq`, `Debug`, `Serialize` and
/// `Deserialize` derived; each variant's name is its identifier.
///
/// # Example
///
/// ```
/// use receipt_status::status_enum;
/// use receipt_status::core::Status;
///
/// status_enum! {
///     pub enum ReceiptStatus {
///         Pending,
///         Approved,
///         Rejected,
///     }
///     final: [Approved, Rejected]
/// }
///
/// assert_eq!(ReceiptStatus::Pending.name(), "Pending");
/// assert!(ReceiptStatus::Rejected.is_final());
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Status for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
