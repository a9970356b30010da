//! Project configuration (nativegen.toml)
//!
//! ```toml
//! [generator]
//! model-dir = "models"
//! overrides = ["jdk.properties", "local.properties"]
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default project config file name
pub const CONFIG_FILE_NAME: &str = "nativegen.toml";

/// Project configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// `[generator]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory holding `<class>.json` metadata files
    #[serde(default, rename = "model-dir")]
    pub model_dir: Option<PathBuf>,

    /// Override files, merged in order
    #[serde(default)]
    pub overrides: Vec<PathBuf>,
}

impl ProjectConfig {
    /// Parse a config file, resolving relative paths against its directory
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve(base))
    }

    /// Parse a config from a string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: ProjectConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `nativegen.toml` from `dir` if there is one
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::from_file(&path).map(Some)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .generator
            .model_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(ConfigError::ValidationError(
                "model-dir cannot be empty".to_string(),
            ));
        }
        if self.generator.overrides.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(
                "override paths cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Make relative paths relative to `base`
    pub fn resolve(mut self, base: &Path) -> Self {
        let join = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };
        self.generator.model_dir = self.generator.model_dir.map(join);
        self.generator.overrides = self.generator.overrides.into_iter().map(join).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[generator]
model-dir = "models"
overrides = ["jdk.properties", "local.properties"]
"#;
        let config = ProjectConfig::from_str(toml).unwrap();
        assert_eq!(config.generator.model_dir, Some(PathBuf::from("models")));
        assert_eq!(config.generator.overrides.len(), 2);
    }

    #[test]
    fn test_empty_config() {
        let config = ProjectConfig::from_str("").unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ProjectConfig::from_str("[generator]\nmodel_dir = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_empty_paths_rejected() {
        let err = ProjectConfig::from_str("[generator]\nmodel-dir = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        let err = ProjectConfig::from_str("[generator]\noverrides = [\"\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_resolve_relative_paths() {
        let config = ProjectConfig::from_str(
            "[generator]\nmodel-dir = \"models\"\noverrides = [\"a.properties\"]\n",
        )
        .unwrap()
        .resolve(Path::new("/work/project"));
        assert_eq!(
            config.generator.model_dir,
            Some(PathBuf::from("/work/project/models"))
        );
        assert_eq!(
            config.generator.overrides,
            vec![PathBuf::from("/work/project/a.properties")]
        );
    }
}
