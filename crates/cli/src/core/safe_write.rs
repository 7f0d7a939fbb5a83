use std::path::{Path, PathBuf};

use anyhow::Error;
use bugtrack_common::fs::{FlushingWriter, SafeFileWriter as CommonSafeFileWriter};
pub use bugtrack_common::fs::WriteMode;

use crate::core::errors::{BugTrackError, BugTrackResult};

/// Report writer whose failures surface as [`BugTrackError::Io`].
///
/// Missing parent directories are not created: a report name that points into
/// a nonexistent subdirectory fails when the file is opened.
pub struct SafeFileWriter {
    inner: CommonSafeFileWriter,
}

impl SafeFileWriter {
    pub fn new() -> Self {
        Self {
            inner: CommonSafeFileWriter::new().with_create_parents(false),
        }
    }

    pub fn open(&self, path: &Path, mode: WriteMode, operation: &str) -> BugTrackResult<ReportWriter> {
        let inner = self
            .inner
            .open(path, mode)
            .map_err(|err| convert_error(err, path, operation))?;
        Ok(ReportWriter {
            inner,
            operation: operation.to_string(),
        })
    }
}

impl Default for SafeFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ReportWriter {
    inner: FlushingWriter,
    operation: String,
}

impl ReportWriter {
    /// Writes and flushes one segment.
    pub fn write_text(&mut self, content: &str) -> BugTrackResult<()> {
        let path = self.inner.path().to_path_buf();
        self.inner
            .write_text(content)
            .map_err(|err| convert_error(err, &path, &self.operation))
    }
}

#[inline]
fn convert_error(err: Error, path: &Path, operation: &str) -> BugTrackError {
    let path: Option<PathBuf> = Some(path.to_path_buf());
    match err.downcast::<std::io::Error>() {
        Ok(io_err) => BugTrackError::io(path, operation, io_err),
        Err(err) => BugTrackError::io(path, operation, std::io::Error::other(format!("{err:#}"))),
    }
}
