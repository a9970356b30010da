//! The generate command
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! `nativegen.toml`, then command-line flags. An override file given on the
//! command line is merged after the ones listed in the project config.

use anyhow::{bail, Context, Result};
use nativegen_config::{OverrideTable, ProjectConfig};
use nativegen_engine::{ClassMetadata, ClassRef, Generator};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Inputs of one generator run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Binary name of the class to generate for
    pub class: String,
    /// Override file from the command line
    pub overrides: Option<PathBuf>,
    /// Metadata directory from the command line
    pub model_dir: Option<PathBuf>,
    /// Explicit project config file
    pub config: Option<PathBuf>,
}

/// Generate the declaration block for `options.class`
pub fn execute(options: &GenerateOptions) -> Result<String> {
    if ClassRef::parse(&options.class).is_none() {
        bail!("'{}' is not a valid class name", options.class);
    }

    let project = load_project(options.config.as_deref())?;
    let model_dir = options
        .model_dir
        .clone()
        .or(project.generator.model_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut override_files = project.generator.overrides;
    override_files.extend(options.overrides.iter().cloned());

    let mut table = OverrideTable::new();
    for path in &override_files {
        let file = OverrideTable::from_file(path)
            .with_context(|| format!("Failed to load overrides from {}", path.display()))?;
        table.merge(file);
    }
    debug!(
        files = override_files.len(),
        overrides = table.len(),
        model_dir = %model_dir.display(),
        "settings resolved"
    );

    let class = ClassMetadata::load(&model_dir, &options.class)
        .with_context(|| format!("Failed to load class {}", options.class))?;
    let known = table.into_known_types();
    Ok(Generator::new(&class, &known).generate())
}

/// Explicit config must exist; otherwise use `./nativegen.toml` when present
fn load_project(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => ProjectConfig::from_file(path)
            .with_context(|| format!("Failed to load project config {}", path.display())),
        None => {
            let found = ProjectConfig::discover(Path::new("."))
                .context("Failed to load ./nativegen.toml")?;
            Ok(found.unwrap_or_default())
        }
    }
}
