use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::generator::TemplateParams;
use crate::models::{ViewModelDecl, ViewModelFiles, ViewModelName};
use crate::naming::{validate_state_type, validate_view_model_name};
use crate::parser::{self, EXPECTED_DECLARATION};
use crate::scanner::Scanner;

/// Request to scaffold a new ViewModel
#[derive(Debug, Clone)]
pub struct NewViewModel {
    /// Name as typed, with or without the `ViewModel` suffix
    pub name: String,
    /// State type token
    pub state_type: String,
}

/// Result of [`Pipeline::create`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Both files were written
    Created {
        class_name: String,
        files: ViewModelFiles,
    },
    /// At least one file exists and overwriting was not allowed; nothing was written
    AlreadyExists(ViewModelFiles),
}

/// A regenerated companion file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regenerated {
    pub decl: ViewModelDecl,
    pub files: ViewModelFiles,
}

/// Summary of a directory regeneration
#[derive(Debug, Default)]
pub struct RegenerateReport {
    /// Companion files that were rewritten
    pub regenerated: Vec<Regenerated>,
    /// Main files with no ViewModel declaration
    pub skipped: Vec<PathBuf>,
}

/// Drives generation and writes the results to disk
#[derive(Debug, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Pipeline
    }

    /// Write a new ViewModel and its companion into `target_dir`
    pub fn create(
        &self,
        request: &NewViewModel,
        target_dir: &Path,
        overwrite: bool,
    ) -> Result<CreateOutcome> {
        validate_view_model_name(&request.name).map_err(anyhow::Error::msg)?;
        validate_state_type(&request.state_type).map_err(anyhow::Error::msg)?;

        let name = ViewModelName::new(&request.name);
        let file_name = name.file_base_name();
        let files = ViewModelFiles::in_dir(target_dir, &file_name);

        if files.any_exists() && !overwrite {
            debug!(main = %files.main.display(), "files already exist, not overwriting");
            return Ok(CreateOutcome::AlreadyExists(files));
        }

        let pair = TemplateParams::new(&name.class_name, &file_name, &request.state_type).render();

        if !target_dir.as_os_str().is_empty() && !target_dir.exists() {
            fs::create_dir_all(target_dir).with_context(|| {
                format!("Failed to create output directory: {}", target_dir.display())
            })?;
        }

        write_file(&files.main, &pair.main_content)?;
        write_file(&files.companion, &pair.companion_content)?;

        debug!(
            class_name = %name.class_name,
            state_type = %request.state_type,
            "created ViewModel"
        );

        Ok(CreateOutcome::Created {
            class_name: name.class_name,
            files,
        })
    }

    /// Rewrite the companion of an existing main file from its declaration
    pub fn regenerate(&self, main_file: &Path) -> Result<Regenerated> {
        let files = ViewModelFiles::for_main_file(main_file)?;
        let content = read_file(&files.main)?;

        let decl = parser::extract(&content).ok_or_else(|| {
            anyhow::anyhow!(
                "Could not find StateNotifier class. Expected: {}",
                EXPECTED_DECLARATION
            )
        })?;

        self.write_companion(decl, files)
    }

    /// Regenerate every companion under `dir`
    ///
    /// Main files without a declaration are reported as skipped; read and
    /// write failures abort.
    pub fn regenerate_all(&self, dir: &Path, exclude: &[String]) -> Result<RegenerateReport> {
        let scanner = Scanner::new(dir.to_path_buf(), exclude.to_vec());
        let mut report = RegenerateReport::default();

        for path in scanner.scan()? {
            let content = read_file(&path)?;

            let Some(decl) = parser::extract(&content) else {
                warn!(path = %path.display(), "no StateNotifier class, skipping");
                report.skipped.push(path);
                continue;
            };

            let files = ViewModelFiles::for_main_file(&path)?;
            report.regenerated.push(self.write_companion(decl, files)?);
        }

        Ok(report)
    }

    fn write_companion(&self, decl: ViewModelDecl, files: ViewModelFiles) -> Result<Regenerated> {
        let file_name = ViewModelFiles::file_base_name(&files.main).unwrap_or_default();
        let pair = TemplateParams::new(&decl.class_name, file_name, &decl.state_type).render();

        write_file(&files.companion, &pair.companion_content)?;

        debug!(
            companion = %files.companion.display(),
            state_type = %decl.state_type,
            "regenerated companion file"
        );

        Ok(Regenerated { decl, files })
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
