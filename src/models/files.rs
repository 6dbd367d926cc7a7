use anyhow::Result;
use std::path::{Path, PathBuf};

/// Extension of the main ViewModel file
pub const MAIN_EXTENSION: &str = ".dart";

/// Extension of the generated companion file
pub const COMPANION_EXTENSION: &str = ".ease.dart";

/// Paths of the main file and its companion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelFiles {
    pub main: PathBuf,
    pub companion: PathBuf,
}

impl ViewModelFiles {
    /// Paths for `file_base_name` inside `dir`
    pub fn in_dir(dir: &Path, file_base_name: &str) -> Self {
        Self {
            main: dir.join(format!("{}{}", file_base_name, MAIN_EXTENSION)),
            companion: dir.join(format!("{}{}", file_base_name, COMPANION_EXTENSION)),
        }
    }

    /// Paths derived from an existing main file
    pub fn for_main_file(path: &Path) -> Result<Self> {
        let file_base_name = Self::file_base_name(path).ok_or_else(|| {
            anyhow::anyhow!("Please select a ViewModel .dart file (not .ease.dart)")
        })?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));

        Ok(Self::in_dir(dir, file_base_name))
    }

    /// File base name of a main file, `None` for companions and non-Dart files
    pub fn file_base_name(path: &Path) -> Option<&str> {
        let file_name = path.file_name()?.to_str()?;
        if file_name.ends_with(COMPANION_EXTENSION) {
            return None;
        }
        file_name
            .strip_suffix(MAIN_EXTENSION)
            .filter(|stem| !stem.is_empty())
    }

    /// Whether either file is already on disk
    pub fn any_exists(&self) -> bool {
        self.main.exists() || self.companion.exists()
    }
}
