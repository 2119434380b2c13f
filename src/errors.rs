//! Shared error types for file creation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for write operations.
///
/// One type covers every failure point: input rejection, each filesystem
/// call, and the post-write verification step. Filesystem variants carry
/// the path and the underlying io error.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The caller supplied an empty filename
    #[error("filename must not be empty")]
    EmptyFilename,

    /// Opening or creating the target file failed
    #[error("failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the content failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading back file metadata during verification failed
    #[error("failed to read metadata for {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was absent after a write that reported no error
    #[error("{} missing after write", .path.display())]
    Missing { path: PathBuf },
}
