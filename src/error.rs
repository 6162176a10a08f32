//! Error type for the conversion pipeline.

/// Errors surfaced by [`crate::convert`].
///
/// Only structural failures reach the caller. Missing or unparseable numbers,
/// dangling edges and empty labels are absorbed by defaulting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed diagram xml: {0}")]
    Xml(#[from] roxmltree::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
