//! Content discovery by filesystem walking.
//!
//! The scanner only finds files. Reading and parsing them is left to
//! [`FsLoader`](crate::FsLoader).

use std::fs;
use std::path::{Path, PathBuf};

use starfu_docs::path::CONTENT_EXTENSIONS;
use starfu_docs::{TOC_EXTENSIONS, TOC_FILE_STEM};

use crate::LoadError;

/// Kind of a discovered file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FileKind {
    /// Markdown or MDX document.
    Content,
    /// `_toc.yaml` or `_toc.json` descriptor.
    Toc,
}

/// A file found under a section root.
#[derive(Clone, Debug)]
pub(crate) struct FoundFile {
    /// Path relative to the scanned root, with forward slashes.
    pub relative: String,
    /// Absolute location on disk.
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Walks one section root.
pub(crate) struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Find every content file and descriptor under the root.
    ///
    /// Hidden entries are skipped. Results are sorted by relative path.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if a directory cannot be read.
    pub fn scan(&self) -> Result<Vec<FoundFile>, LoadError> {
        let mut found = Vec::new();
        self.scan_directory(&self.root, "", &mut found)?;
        found.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(found)
    }

    fn scan_directory(
        &self,
        dir_path: &Path,
        prefix: &str,
        found: &mut Vec<FoundFile>,
    ) -> Result<(), LoadError> {
        let entries = fs::read_dir(dir_path).map_err(|source| LoadError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let relative = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}/{name}")
            };
            let path = entry.path();

            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.scan_directory(&path, &relative, found)?;
            } else if let Some(kind) = classify(&name) {
                found.push(FoundFile {
                    relative,
                    path,
                    kind,
                });
            }
        }
        Ok(())
    }
}

/// Classify a file by name; `None` for files that are neither.
pub(crate) fn classify(name: &str) -> Option<FileKind> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem == TOC_FILE_STEM && TOC_EXTENSIONS.contains(&ext) {
        Some(FileKind::Toc)
    } else if !stem.is_empty() && CONTENT_EXTENSIONS.contains(&ext) {
        Some(FileKind::Content)
    } else {
        None
    }
}
