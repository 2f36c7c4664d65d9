//! Configuration management for starfu.
//!
//! Parses `starfu.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! title = "Starfu"
//! base_path = "/${REPO:-starfu}/"
//!
//! [[sections]]
//! root = "../docs/tutorial"
//! title = "Tutorial"
//! href = "/tutorial/intro"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`. Expanded fields:
//! - `title`
//! - `base_path`
//! - `sections.root`
//! - `sections.href`

mod branch;
mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use branch::{
    Branch, SectionConfig, normalize_base_path, normalize_root, resolve_branch_href,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the public base path.
    pub base_path: Option<String>,
    /// Override the site title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "starfu.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site title.
    pub title: Option<String>,
    /// Public base path as written in TOML.
    base_path: Option<String>,
    /// Section entries as written in TOML.
    sections: Vec<SectionConfig>,

    /// Normalized base path (set after loading).
    #[serde(skip)]
    pub base_path_resolved: String,
    /// Resolved branches (set after loading).
    #[serde(skip)]
    pub branches: Vec<Branch>,
    /// Directory that relative section roots are resolved against.
    #[serde(skip)]
    pub project_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`sections.root`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `starfu.toml` in current directory and parents,
    /// falling back to the default single `docs` section.
    ///
    /// CLI settings take precedence over config file values and are applied
    /// before branches are resolved, so a base path override also moves every
    /// derived href.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resolved configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.resolve();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text, resolving branches.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, env expansion or validation fails.
    pub fn from_toml(content: &str, project_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.project_dir = project_dir.to_path_buf();
        config.resolve();
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the raw configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_path) = &settings.base_path {
            self.base_path = Some(base_path.clone());
        }
        if let Some(title) = &settings.title {
            self.title = Some(title.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config rooted at the current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config rooted at the given project directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            title: None,
            base_path: None,
            sections: Vec::new(),
            base_path_resolved: String::new(),
            branches: Vec::new(),
            project_dir: base.to_path_buf(),
            config_path: None,
        };
        config.resolve();
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.project_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref title) = self.title {
            self.title = Some(expand::expand_env(title, "title")?);
        }
        if let Some(ref base_path) = self.base_path {
            self.base_path = Some(expand::expand_env(base_path, "base_path")?);
        }
        for section in &mut self.sections {
            section.root = expand::expand_env(&section.root, "sections.root")?;
            if let Some(ref href) = section.href {
                section.href = Some(expand::expand_env(href, "sections.href")?);
            }
        }
        Ok(())
    }

    /// Derive the normalized base path and the branch list.
    fn resolve(&mut self) {
        let base_path = self.base_path.as_deref();
        self.base_path_resolved = normalize_base_path(base_path);
        self.branches = if self.sections.is_empty() {
            vec![Branch::fallback(base_path)]
        } else {
            self.sections
                .iter()
                .map(|section| Branch::resolve(section, base_path))
                .collect()
        };
    }

    /// Validate resolved configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a section root is empty, an id
    /// cannot be derived, or two sections share an id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (section, branch) in self.sections.iter().zip(&self.branches) {
            if section.root.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "sections.root cannot be empty".to_owned(),
                ));
            }
            if branch.id.is_empty() || branch.id == ".." {
                return Err(ConfigError::Validation(format!(
                    "cannot derive a section id from root \"{}\", set sections.id",
                    section.root
                )));
            }
            if !seen.insert(branch.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate section id \"{}\"",
                    branch.id
                )));
            }
        }
        Ok(())
    }

    /// Directory on disk holding a branch's content.
    #[must_use]
    pub fn branch_dir(&self, branch: &Branch) -> PathBuf {
        self.project_dir.join(branch.root.trim_start_matches('/'))
    }
}
