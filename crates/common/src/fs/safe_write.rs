use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file, truncating any previous content.
    Overwrite,
    /// Create the file if missing and position every write at the end.
    Append,
}

/// Opens report files and hands out writers that flush after every chunk.
#[derive(Debug, Clone)]
pub struct SafeFileWriter {
    create_parents: bool,
}

impl SafeFileWriter {
    pub fn new() -> Self {
        Self {
            create_parents: true,
        }
    }

    pub fn with_create_parents(mut self, create_parents: bool) -> Self {
        self.create_parents = create_parents;
        self
    }

    pub fn open(&self, path: &Path, mode: WriteMode) -> Result<FlushingWriter> {
        if self.create_parents {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "failed to create parent directories for '{}'",
                            parent.display()
                        )
                    })?;
                }
            }
        }

        let file = match mode {
            WriteMode::Overwrite => File::create(path)
                .with_context(|| format!("failed to create file '{}'", path.display()))?,
            WriteMode::Append => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open '{}' for append", path.display()))?,
        };

        tracing::debug!(path = %path.display(), ?mode, "opened file for writing");

        Ok(FlushingWriter {
            path: path.to_path_buf(),
            file,
        })
    }
}

impl Default for SafeFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// File handle whose writes reach the OS before `write_text` returns.
///
/// The handle is closed when dropped, on success and failure paths alike.
#[derive(Debug)]
pub struct FlushingWriter {
    path: PathBuf,
    file: File,
}

impl FlushingWriter {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_text(&mut self, content: &str) -> Result<()> {
        self.file
            .write_all(content.as_bytes())
            .with_context(|| format!("failed to write data into '{}'", self.path.display()))?;
        self.file
            .flush()
            .with_context(|| format!("failed to flush '{}'", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "old content that is long\n").unwrap();

        let mut w = SafeFileWriter::new()
            .open(&path, WriteMode::Overwrite)
            .unwrap();
        w.write_text("new\n").unwrap();
        drop(w);

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn append_keeps_prefix_and_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.txt");

        let mut w = SafeFileWriter::new().open(&path, WriteMode::Append).unwrap();
        w.write_text("one\n").unwrap();
        drop(w);

        let mut w = SafeFileWriter::new().open(&path, WriteMode::Append).unwrap();
        w.write_text("two\n").unwrap();
        drop(w);

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn writes_are_visible_before_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.txt");
        let mut w = SafeFileWriter::new()
            .open(&path, WriteMode::Overwrite)
            .unwrap();
        w.write_text("partial").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "partial");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/reports/d.txt");
        SafeFileWriter::new()
            .open(&path, WriteMode::Overwrite)
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_parent_fails_when_creation_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent/e.txt");
        let err = SafeFileWriter::new()
            .with_create_parents(false)
            .open(&path, WriteMode::Overwrite)
            .unwrap_err();
        assert!(err.to_string().contains("failed to create file"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
