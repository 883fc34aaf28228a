//! Flat-file entry storage
//!
//! One `.md` file per entry, named by the entry's title; the filename
//! keeps the casing used when the entry was first written. Lookups are
//! case-insensitive through [`title::normalize`], so at most one file
//! exists per normalized title: a `put` through any casing rewrites the
//! existing file rather than creating a sibling.
//!
//! The title index is rebuilt from the directory listing on every read;
//! nothing is cached. Writes go through a temporary file and an atomic
//! rename so a reader never observes a half-written entry.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{WikiError, WikiResult};
use crate::title;

const ENTRY_EXT: &str = "md";

/// Store of wiki entries backed by a flat directory
pub struct EntryStore {
    root: PathBuf,
}

impl EntryStore {
    /// Open the store at the configured entries directory
    pub fn open(config: &Config) -> WikiResult<Self> {
        Self::at(config.entries_dir.clone())
    }

    /// Open the store at an explicit directory, creating it if needed
    pub fn at(root: PathBuf) -> WikiResult<Self> {
        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| WikiError::CreateDirectory {
                path: root.clone(),
                source: e,
            })?;
        }
        Ok(Self { root })
    }

    /// The entries directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the titles of all stored entries, in directory listing order
    ///
    /// Titles carry their on-disk casing. Files without the `.md`
    /// extension are ignored.
    pub fn list(&self) -> WikiResult<Vec<String>> {
        let mut titles = Vec::new();
        let entries =
            fs::read_dir(&self.root).map_err(|e| WikiError::from_io(e, self.root.clone()))?;

        for entry in entries {
            let path = entry
                .map_err(|e| WikiError::from_io(e, self.root.clone()))?
                .path();
            if path.extension().map_or(false, |ext| ext == ENTRY_EXT) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    titles.push(stem.to_string());
                }
            }
        }

        Ok(titles)
    }

    /// Read the body of an entry; `None` when no title matches
    ///
    /// Lookup is case-insensitive. Absence is not an error.
    pub fn get(&self, requested: &str) -> WikiResult<Option<String>> {
        match self.find_file(requested)? {
            Some(path) => {
                let body = fs::read_to_string(&path).map_err(|e| WikiError::ReadError {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(Some(body))
            }
            None => Ok(None),
        }
    }

    /// Whether an entry exists for this title (any casing)
    pub fn exists(&self, requested: &str) -> WikiResult<bool> {
        Ok(self.find_file(requested)?.is_some())
    }

    /// The stored casing of a title, if an entry matches
    pub fn canonical_title(&self, requested: &str) -> WikiResult<Option<String>> {
        for stored in self.list()? {
            if title::matches(&stored, requested) {
                return Ok(Some(stored));
            }
        }
        Ok(None)
    }

    /// Create or fully overwrite an entry
    ///
    /// When the title already exists under any casing, its existing file
    /// is rewritten and keeps its on-disk name; otherwise a new file named
    /// with the caller's casing is created. Overwriting is not an error —
    /// callers wanting create-only semantics check `exists` first.
    pub fn put(&self, requested: &str, body: &str) -> WikiResult<()> {
        let path = match self.find_file(requested)? {
            Some(existing) => existing,
            None => self.entry_path(requested.trim()),
        };
        debug!(title = requested, path = ?path, "writing entry");
        atomic_write(&path, body.as_bytes())
    }

    fn entry_path(&self, stored_title: &str) -> PathBuf {
        self.root.join(format!("{}.{}", stored_title, ENTRY_EXT))
    }

    fn find_file(&self, requested: &str) -> WikiResult<Option<PathBuf>> {
        Ok(self
            .canonical_title(requested)?
            .map(|stored| self.entry_path(&stored)))
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> WikiResult<()> {
    // Temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path).map_err(|e| WikiError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(data).map_err(|e| WikiError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    // Sync to disk before rename
    file.sync_all().map_err(|e| WikiError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| WikiError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
