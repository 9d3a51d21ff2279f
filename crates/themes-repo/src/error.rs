//! Error handling for the themes-repo binary.

use std::result;

use thiserror::Error;

/// Convenient result type for themes-repo commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end a themes-repo run.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog scan, parse, or write failure.
    #[error(transparent)]
    Catalog(#[from] catalog::Error),
    /// A check run found theme files the renderer cannot use.
    #[error("{errors} schema error(s) found in theme files")]
    CheckFailed {
        /// Number of schema findings.
        errors: usize,
    },
}
