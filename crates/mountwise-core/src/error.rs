//! Error types for input documents.
//!
//! The recommendation algorithms themselves never fail; errors only arise
//! when input documents have the wrong shape. Settings and property
//! descriptors carry their own errors beside their types.

use thiserror::Error;

/// Errors raised while reading inventory or configuration documents.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A document does not have the expected shape (for example a host record
    /// without a disk list). `location` points at the offending element.
    #[error("Malformed inventory at {location}: {reason}")]
    MalformedInventory { location: String, reason: String },

    /// The document is not valid JSON.
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl InventoryError {
    pub(crate) fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInventory {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
