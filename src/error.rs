//! Error types for formpost operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The errors produced while building or issuing an upload request.
#[derive(Debug, Error)]
pub enum Error {
    /// A file referenced by the form could not be opened or fully read.
    ///
    /// Encoding is aborted as a whole; no partial body is produced.
    #[error("unable to read file part {}", path.display())]
    FileRead {
        /// The file reference that failed to resolve.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The request body could not be staged to the local file supplied by
    /// the caller. No request is issued in this case.
    #[error("unable to stage request body to {}", path.display())]
    StageWrite {
        /// The staging destination.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The transport collaborator failed to carry out the request.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
