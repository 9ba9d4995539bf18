use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::AnalyzerError;

/// Recursive directory scanner for Java source files.
pub struct JavaFileScanner {
    stable_order: bool,
}

impl JavaFileScanner {
    pub fn new() -> Self {
        Self {
            stable_order: false,
        }
    }

    /// Sort the scan result lexicographically by path. Without this, traversal
    /// order is whatever the filesystem yields, which decides the winner when
    /// two files declare the same primary type.
    pub fn with_stable_order(mut self, stable_order: bool) -> Self {
        self.stable_order = stable_order;
        self
    }

    /// Collect every `.java` file under `root`.
    ///
    /// Fails only when `root` itself cannot be opened as a directory.
    /// Unreadable entries further down are logged and dropped.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, AnalyzerError> {
        fs::read_dir(root).map_err(|source| AnalyzerError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("failed to read directory entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.path().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext == "java")
                    .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();

        if self.stable_order {
            files.sort();
        }

        Ok(files)
    }
}

impl Default for JavaFileScanner {
    fn default() -> Self {
        Self::new()
    }
}
