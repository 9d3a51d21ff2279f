//! Error types for catalog building and descriptor checks.

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// A shared `Result` type for the catalog crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors produced while scanning, parsing, or writing theme catalogs.
#[derive(Debug, Error)]
pub enum Error {
    /// The themes directory does not exist or is not a directory.
    #[error("themes directory not found: {}", path.display())]
    NotFound {
        /// The directory that was requested.
        path: PathBuf,
    },

    /// A directory listing or file read failed.
    #[error("read error at {}: {source}", path.display())]
    Read {
        /// The relevant path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// A theme file did not contain valid JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        /// The offending theme file.
        path: PathBuf,
        /// The underlying parser error, carrying line and column.
        source: serde_json::Error,
    },

    /// A theme file parsed but a recognized section has the wrong shape.
    #[error("schema error in {}: {message}", path.display())]
    Schema {
        /// The offending theme file.
        path: PathBuf,
        /// Human-readable description of the mismatch.
        message: String,
    },

    /// The catalog could not be serialized.
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The catalog could not be written to disk.
    #[error("write error at {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

impl Error {
    /// Build a schema error for `path`.
    pub fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error is confined to the contents of a single theme file.
    ///
    /// Such errors may be downgraded to warnings when invalid files are skipped.
    pub fn is_file_local(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Schema { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn only_content_errors_are_file_local() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(
            Error::Parse {
                path: PathBuf::from("themes/Bad.json"),
                source: parse,
            }
            .is_file_local()
        );
        assert!(Error::schema("themes/Bad.json", "nope").is_file_local());
        assert!(
            !Error::NotFound {
                path: PathBuf::from("themes"),
            }
            .is_file_local()
        );
        assert!(
            !Error::Read {
                path: PathBuf::from("themes/Dark.json"),
                source: io::Error::other("denied"),
            }
            .is_file_local()
        );
    }

    #[test]
    fn messages_name_the_path() {
        let err = Error::NotFound {
            path: Path::new("missing-themes").to_path_buf(),
        };
        assert_eq!(err.to_string(), "themes directory not found: missing-themes");
        let err = Error::schema("themes/Odd.json", "manifest must be an object");
        assert_eq!(
            err.to_string(),
            "schema error in themes/Odd.json: manifest must be an object"
        );
    }
}
