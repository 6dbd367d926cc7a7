use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use ease_codegen::cli::{Cli, Commands};
use ease_codegen::config::Config;
use ease_codegen::naming::{validate_state_type, validate_view_model_name};
use ease_codegen::pipeline::{CreateOutcome, NewViewModel, Pipeline};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match cli.command {
        Commands::New {
            name,
            state_type,
            dir,
            force,
        } => {
            run_new(&cli.config, name, state_type, dir, force)?;
        }
        Commands::Regenerate { path } => {
            run_regenerate(&cli.config, &path)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Run the new command
fn run_new(
    config_path: &Path,
    name: Option<String>,
    state_type: Option<String>,
    dir: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let theme = ColorfulTheme::default();

    let name = match name {
        Some(name) => name,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Enter ViewModel name (e.g., Counter, Cart, Auth)")
            .validate_with(|value: &String| validate_view_model_name(value))
            .interact_text()
            .context("Failed to read ViewModel name")?,
    };

    let state_type = match state_type {
        Some(state_type) => state_type,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Enter state type (e.g., int, String, CartState)")
            .default(config.defaults.state_type.clone())
            .validate_with(|value: &String| validate_state_type(value))
            .interact_text()
            .context("Failed to read state type")?,
    };

    let target_dir = dir.unwrap_or_else(|| config.output.dir.clone());
    let request = NewViewModel { name, state_type };
    let pipeline = Pipeline::new();

    let mut outcome = pipeline.create(&request, &target_dir, force)?;

    if let CreateOutcome::AlreadyExists(_) = outcome {
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt("Files already exist. Overwrite?")
            .default(false)
            .interact()
            .context("Files already exist. Use --force to overwrite.")?;

        if !overwrite {
            return Ok(());
        }

        outcome = pipeline.create(&request, &target_dir, true)?;
    }

    if let CreateOutcome::Created { class_name, files } = outcome {
        println!(
            "Created {} with {} and {}",
            class_name,
            display_name(&files.main),
            display_name(&files.companion)
        );
    }

    Ok(())
}

/// Run the regenerate command
fn run_regenerate(config_path: &Path, path: &Path) -> Result<()> {
    let pipeline = Pipeline::new();

    if path.is_dir() {
        let config = Config::load_or_default(config_path)?;
        let report = pipeline.regenerate_all(path, &config.regenerate.exclude)?;

        for regenerated in &report.regenerated {
            println!(
                "Regenerated {} with state type: {}",
                regenerated.files.companion.display(),
                regenerated.decl.state_type
            );
        }
        println!(
            "\n{} regenerated, {} skipped (no StateNotifier class)",
            report.regenerated.len(),
            report.skipped.len()
        );
        return Ok(());
    }

    let regenerated = pipeline.regenerate(path)?;
    println!(
        "Regenerated {} with state type: {}",
        display_name(&regenerated.files.companion),
        regenerated.decl.state_type
    );

    Ok(())
}

/// Run the init command
fn run_init(output_path: &Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - output.dir: Directory for new ViewModels");
    println!("  - defaults.state_type: State type offered when prompting");
    println!("  - regenerate.exclude: Directories to skip when regenerating a tree");

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
