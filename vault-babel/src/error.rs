//! Error types for callout operations

use thiserror::Error;

/// Errors that can occur while building callout values
///
/// Recognition failures in the extractors are not errors: malformed callout
/// syntax passes through as ordinary content. The only failure in the crate
/// is constructing a [`crate::Callout`] without a type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalloutError {
    /// The callout type was empty
    #[error("callout type is required")]
    MissingType,
}
