//! File writer: persists UPLC content as UTF-8 without a byte-order mark
//! and verifies the result.
//!
//! The content is treated as opaque text; nothing here parses or validates
//! UPLC syntax.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::WriteError;

/// Number of characters of content echoed back in the report preview.
pub const PREVIEW_CHARS: usize = 60;

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Path the content was written to.
    pub path: PathBuf,
    /// Size of the file on disk, in bytes.
    pub bytes: u64,
    /// First [`PREVIEW_CHARS`] characters of the content, `...`-suffixed
    /// when the content is longer.
    pub preview: String,
}

/// Aggregate result of [`write_many`].
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<WriteError>,
}

impl BatchOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

/// Write `content` to `filename` as UTF-8 with no byte-order mark,
/// truncating any existing file, then confirm the file exists and report
/// its size.
///
/// # Example
/// ```no_run
/// let report = uplcfile::write("validator.uplc", "(program 1.0.0 (lam x x))")?;
/// assert_eq!(report.bytes, 25);
/// # Ok::<(), uplcfile::WriteError>(())
/// ```
pub fn write<P: AsRef<Path>>(filename: P, content: &str) -> Result<WriteReport, WriteError> {
    let path = filename.as_ref();
    if path.as_os_str().is_empty() {
        return Err(WriteError::EmptyFilename);
    }

    debug!("writing {} bytes to {}", content.len(), path.display());

    // Rust strings are UTF-8 already; writing the bytes verbatim is the
    // BOM-free encoding the file format needs. The handle is dropped on
    // every exit path below, error paths included.
    let mut file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    drop(file);

    if !path.exists() {
        return Err(WriteError::Missing {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::metadata(path)
        .map_err(|source| WriteError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    Ok(WriteReport {
        path: path.to_path_buf(),
        bytes,
        preview: preview(content),
    })
}

/// Apply [`write`] to each `(filename, content)` pair in order.
///
/// A failing pair does not stop the batch; later pairs are still written.
/// The outcome reports the aggregate success count, and
/// [`BatchOutcome::all_succeeded`] is true only when every write succeeded.
pub fn write_many<P: AsRef<Path>>(files: &[(P, &str)]) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        total: files.len(),
        ..Default::default()
    };
    for (filename, content) in files {
        match write(filename, *content) {
            Ok(_) => outcome.succeeded += 1,
            Err(err) => outcome.failures.push(err),
        }
    }
    info!("created {}/{} file(s)", outcome.succeeded, outcome.total);
    outcome
}

fn preview(content: &str) -> String {
    let head: String = content.chars().take(PREVIEW_CHARS).collect();
    if content.chars().nth(PREVIEW_CHARS).is_some() {
        format!("{head}...")
    } else {
        head
    }
}
