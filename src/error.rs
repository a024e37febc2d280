use std::result;
use thiserror::Error;

/// Errors returned by the trees and the linked list.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The value is not stored in the tree.
    #[error("value not found in tree")]
    NotFound,
    /// A positional list operation was given an index past the valid range.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = result::Result<T, Error>;
