//! Error types for typechain.
//!
//! Dispatch itself never fails: an unmatched value or probe is a normal
//! outcome. The errors here only surface from the strict entry points
//! (`try_set_callback`) and from value conversions.

use crate::kind::Kind;
use thiserror::Error;

/// A boxed error type, used for the error argument handed to callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors reported by the strict chain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// No link in the chain accepts the probe value.
    #[error("no link matches a value of kind {kind}")]
    NoMatchingLink {
        /// Kind of the probe that found no link.
        kind: Kind,
    },

    /// A value could not be converted to or from another representation.
    #[error("value conversion failed: {0}")]
    Conversion(String),
}
