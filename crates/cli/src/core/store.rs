//! # Report Store
//!
//! Creates, appends to and reads report files. The filesystem is the only
//! source of truth: the store keeps no registry of reports and never deletes
//! or rewrites existing content, except that creating a report under an
//! existing name truncates that file first.
//!
//! The reports directory itself is created on the first write if missing.
//! Subdirectories named inside a report name are not: such names fail with
//! an I/O error when the report is opened.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::errors::{BugTrackError, BugTrackResult};
use super::report::{header_segments, status_value, update_segments, ReportFields};
use super::safe_write::{SafeFileWriter, WriteMode};
use super::status::Status;

/// Suffix every report file name carries.
pub const REPORT_EXTENSION: &str = ".txt";

/// Appends `.txt` unless `name` already ends with it.
///
/// Never touches the filesystem and never fails; odd characters are passed
/// through and only matter once the path is opened.
pub fn resolve_path(name: &str) -> PathBuf {
    if name.ends_with(REPORT_EXTENSION) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}{REPORT_EXTENSION}"))
    }
}

pub struct ReportStore<C: Clock = SystemClock> {
    root: PathBuf,
    writer: SafeFileWriter,
    clock: C,
}

impl ReportStore<SystemClock> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_clock(root, SystemClock)
    }
}

impl<C: Clock> ReportStore<C> {
    pub fn with_clock(root: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            root: root.into(),
            writer: SafeFileWriter::new(),
            clock,
        }
    }

    /// Directory report names are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the report called `name`.
    pub fn report_path(&self, name: &str) -> PathBuf {
        self.root.join(resolve_path(name))
    }

    /// Writes a fresh report, truncating any file already at `path`.
    pub fn create_report(
        &self,
        path: &Path,
        fields: &ReportFields,
        status: Option<Status>,
    ) -> BugTrackResult<()> {
        self.ensure_root("create_report")?;
        let mut out = self
            .writer
            .open(path, WriteMode::Overwrite, "create_report")?;
        let created_at = self.clock.now();
        debug!(path = %path.display(), "writing report header");

        for segment in header_segments(fields, &created_at) {
            out.write_text(&segment)?;
        }
        out.write_text(&status_value(status))?;

        info!(
            path = %path.display(),
            status = status.map(Status::label).unwrap_or("<none>"),
            "bug report created"
        );
        Ok(())
    }

    /// Appends a status update block. The file is created if missing and is
    /// not checked for a report header.
    pub fn append_status_update(&self, path: &Path, status: Option<Status>) -> BugTrackResult<()> {
        self.ensure_root("append_status_update")?;
        let mut out = self
            .writer
            .open(path, WriteMode::Append, "append_status_update")?;
        let updated_at = self.clock.now();
        debug!(path = %path.display(), "appending status update");

        for segment in update_segments(&updated_at) {
            out.write_text(&segment)?;
        }
        out.write_text(&status_value(status))?;

        info!(
            path = %path.display(),
            status = status.map(Status::label).unwrap_or("<none>"),
            "status update appended"
        );
        Ok(())
    }

    fn ensure_root(&self, operation: &str) -> BugTrackResult<()> {
        if self.root.as_os_str().is_empty() || self.root.is_dir() {
            return Ok(());
        }
        debug!(root = %self.root.display(), "creating reports directory");
        fs::create_dir_all(&self.root)
            .map_err(|e| BugTrackError::io(self.root.clone(), operation, e))
    }

    /// Opens a report for line-by-line reading.
    pub fn read_report(&self, path: &Path) -> BugTrackResult<ReportLines> {
        let file = File::open(path)
            .map_err(|e| BugTrackError::io(path.to_path_buf(), "read_report", e))?;
        debug!(path = %path.display(), "report opened for reading");
        Ok(ReportLines {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
        })
    }
}

/// Lazy iterator over the lines of one report, in file order.
///
/// The underlying handle is closed when the iterator is dropped.
pub struct ReportLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl Iterator for ReportLines {
    type Item = BugTrackResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            line.map_err(|e| BugTrackError::io(self.path.clone(), "read_report", e))
        })
    }
}
