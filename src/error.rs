use thiserror::Error;

/// Errors returned by [`Tree`][crate::Tree] queries that cannot be answered with an `Option`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested value is not stored in the tree. Also returned for every query against an
    /// empty tree.
    #[error("value not found in tree")]
    NotFound,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
