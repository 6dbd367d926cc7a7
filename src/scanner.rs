use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::models::ViewModelFiles;

/// Scanner for finding ViewModel main files in a directory
pub struct Scanner {
    /// Root directory to scan
    source_dir: PathBuf,
    /// Patterns to exclude
    exclude_patterns: Vec<String>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(source_dir: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Scanner {
            source_dir,
            exclude_patterns,
        }
    }

    /// Scan for all main `.dart` files, skipping `.ease.dart` companions
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut dart_files = Vec::new();

        for entry in WalkDir::new(&self.source_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e.path()))
        {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.is_main_file(path) {
                dart_files.push(path.to_path_buf());
            }
        }

        Ok(dart_files)
    }

    /// Check if a path is a main Dart file
    fn is_main_file(&self, path: &Path) -> bool {
        ViewModelFiles::file_base_name(path).is_some()
    }

    /// Check if a path should be excluded
    ///
    /// Patterns match whole path components below the scan root, so the root
    /// itself never counts and `build` does not exclude `builders/`.
    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.source_dir).unwrap_or(path);

        relative.components().any(|component| {
            self.exclude_patterns
                .iter()
                .any(|pattern| component.as_os_str() == pattern.as_str())
        })
    }
}
