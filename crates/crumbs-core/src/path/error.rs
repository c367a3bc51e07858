//! Request path validation errors.

use thiserror::Error;

/// Raised when a raw request path cannot be turned into segments at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Percent-decoding produced bytes that are not valid UTF-8.
    #[error("request path {raw:?} does not decode to valid UTF-8")]
    Undecodable { raw: String },
}
