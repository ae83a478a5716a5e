//! Error types for chapter transformation.

use thiserror::Error;

/// Errors that can occur while transforming a chapter fragment.
///
/// Per-node problems (a malformed image block, a section without a usable
/// heading) are absorbed during the walk; only a structurally invalid call
/// is surfaced here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid chapter fragment: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
