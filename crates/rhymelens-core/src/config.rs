//! Configuration loading and discovery.
//!
//! Provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from the XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `rhymelens.<ext>` in current directory or any parent
//! - `.rhymelens.<ext>` in current directory or any parent
//! - `~/.config/rhymelens/config.<ext>` (user config)
//!
//! Environment variables prefixed `RHYMELENS_` override everything
//! (e.g., `RHYMELENS_COMPLEXITY_LEVEL=5`).
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use rhymelens_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("complexity: {}", config.complexity_level);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// The configuration for rhymelens.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and overridden by `RHYMELENS_*` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 1 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs. Omit to use the
    /// default; set `disable_input_limit` to remove the check entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Default connection cap for the `connections` command.
    pub max_connections: usize,
    /// Default visualization complexity (1–5) for the `connections` command.
    pub complexity_level: u8,
    /// Whether interior words participate in analysis by default.
    pub include_internal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            max_input_bytes: None,
            disable_input_limit: false,
            max_connections: 100,
            complexity_level: 3,
            include_internal: true,
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "rhymelens";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/rhymelens/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `RHYMELENS_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/rhymelens/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // Start with user config (lowest precedence of file sources)
        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        // Add project configs (ordered low→high precedence)
        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        // Add explicit files
        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables (highest precedence)
        figment = figment.merge(Env::prefixed("RHYMELENS_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that
    /// has any match, ordered low-to-high precedence: dotfiles before
    /// regular files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            // Dotfiles first (lower precedence, figment merges last-wins)
            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }
}

/// Find user config in the XDG config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let config_dir = user_config_dir()?;
    for ext in CONFIG_EXTENSIONS {
        let config_path = config_dir.join(format!("config.{ext}"));
        if config_path.is_file() {
            return Some(config_path);
        }
    }
    None
}

/// Merge a config file into the figment, detecting format from extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/rhymelens/` on Linux, `~/Library/Application
/// Support/rhymelens/` on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.max_connections, 100);
        assert_eq!(config.complexity_level, 3);
        assert!(config.include_internal);
    }

    #[test]
    fn explicit_toml_file_loads() {
        let dir = TempDir::new().unwrap();
        let path = utf8(&dir).join("custom.toml");
        fs::write(&path, "complexity_level = 5\nmax_connections = 25\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&path)
            .load()
            .unwrap();
        assert_eq!(config.complexity_level, 5);
        assert_eq!(config.max_connections, 25);
        assert_eq!(sources.primary_file(), Some(path.as_path()));
    }

    #[test]
    fn project_discovery_walks_up() {
        let dir = TempDir::new().unwrap();
        let root = utf8(&dir);
        fs::write(root.join("rhymelens.toml"), "include_internal = false\n").unwrap();
        let nested = root.join("album/track01");
        fs::create_dir_all(&nested).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&nested)
            .load()
            .unwrap();
        assert!(!config.include_internal);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn boundary_marker_stops_search() {
        let dir = TempDir::new().unwrap();
        let root = utf8(&dir);
        fs::write(root.join("rhymelens.toml"), "complexity_level = 5\n").unwrap();
        let nested = root.join("project/src");
        fs::create_dir_all(&nested).unwrap();
        // The marker sits between the config and the search start.
        fs::create_dir(root.join("project/.git")).unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&nested)
            .load()
            .unwrap();
        assert_eq!(config.complexity_level, 3);
    }

    #[test]
    fn json_and_yaml_formats_load() {
        let dir = TempDir::new().unwrap();
        let root = utf8(&dir);
        let json = root.join("a.json");
        fs::write(&json, r#"{"max_connections": 7}"#).unwrap();
        let yaml = root.join("b.yaml");
        fs::write(&yaml, "complexity_level: 2\n").unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&json)
            .with_file(&yaml)
            .load()
            .unwrap();
        assert_eq!(config.max_connections, 7);
        assert_eq!(config.complexity_level, 2);
    }

    #[test]
    fn later_files_take_precedence() {
        let dir = TempDir::new().unwrap();
        let root = utf8(&dir);
        let low = root.join("low.toml");
        fs::write(&low, "max_connections = 10\n").unwrap();
        let high = root.join("high.toml");
        fs::write(&high, "max_connections = 20\n").unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&low)
            .with_file(&high)
            .load()
            .unwrap();
        assert_eq!(config.max_connections, 20);
    }
}
