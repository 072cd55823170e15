//! Configuration loading and discovery.
//!
//! Discovers configuration by walking up from the working directory to find
//! project config, loading user config from the XDG config directory, and
//! merging with defaults. Supported formats: TOML, YAML, and JSON.
//!
//! # Config file locations (in order of precedence, highest first):
//! - files passed explicitly (e.g., via `--config`)
//! - `levelgauge.<ext>` / `.levelgauge.<ext>` in the working directory or any parent
//! - `~/.config/levelgauge/config.<ext>` (user config)
//!
//! Environment variables prefixed with `LEVELGAUGE_` override everything.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use levelgauge_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let config = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("Log level: {:?}", config.log_level);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup.
const APP_NAME: &str = "levelgauge";

/// File stems to search for project config (lowest precedence first).
const FILE_STEMS: &[&str] = &[".levelgauge", "levelgauge"];

/// The configuration for levelgauge.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs. Omit to use the
    /// default; use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Cap on extracted vocabulary items per content item (default: 10).
    pub max_vocabulary_items: Option<usize>,
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

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
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

    /// Set whether to include user config from `~/.config/levelgauge/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward search at directories containing this marker.
    /// Default is `.git`.
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
    /// Precedence (highest to lowest): environment variables, explicit
    /// files, project config (closest to the search root), user config,
    /// defaults. Missing sources are skipped, never an error.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(&self) -> ConfigResult<Config> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if self.include_user_config
            && let Some(dirs) = directories::ProjectDirs::from("", "", APP_NAME)
            && let Ok(config_dir) = Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf())
        {
            for ext in CONFIG_EXTENSIONS {
                let path = config_dir.join(format!("config.{ext}"));
                if path.as_std_path().is_file() {
                    figment = merge_file(figment, &path);
                }
            }
        }

        for dir in self.project_dirs() {
            for stem in FILE_STEMS {
                for ext in CONFIG_EXTENSIONS {
                    let path = dir.join(format!("{stem}.{ext}"));
                    if path.as_std_path().is_file() {
                        tracing::debug!(path = %path, "merging project config");
                        figment = merge_file(figment, &path);
                    }
                }
            }
        }

        for path in &self.explicit_files {
            figment = merge_file(figment, path);
        }

        figment
            .merge(Env::prefixed("LEVELGAUGE_"))
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))
    }

    /// Directories to search, farthest from the root first so that files
    /// closer to the search root win on merge.
    fn project_dirs(&self) -> Vec<Utf8PathBuf> {
        let Some(ref root) = self.project_search_root else {
            return Vec::new();
        };
        let mut dirs = Vec::new();
        let mut current = Some(root.as_path());
        while let Some(dir) = current {
            dirs.push(dir.to_path_buf());
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).as_std_path().exists()
            {
                break;
            }
            current = dir.parent();
        }
        dirs.reverse();
        dirs
    }
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("toml") => figment.merge(Toml::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => figment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_for(dir: &Utf8Path) -> ConfigLoader {
        // No user config and no boundary escape in tests
        ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker("never-present")
            .with_project_search(dir)
    }

    #[test]
    fn defaults_when_nothing_found() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        let config = loader_for(&dir).load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn project_file_is_discovered() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        std::fs::write(
            dir.join("levelgauge.toml"),
            "log_level = \"debug\"\nmax_vocabulary_items = 5\n",
        )
        .unwrap();
        let config = loader_for(&dir).load().unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.max_vocabulary_items, Some(5));
    }

    #[test]
    fn explicit_file_overrides_project_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        std::fs::write(dir.join("levelgauge.toml"), "log_level = \"debug\"\n").unwrap();
        let explicit = dir.join("override.toml");
        std::fs::write(&explicit, "log_level = \"error\"\n").unwrap();
        let config = loader_for(&dir).with_file(&explicit).load().unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn parent_directory_config_is_found() {
        let tmp = tempfile::tempdir().unwrap();
        let parent = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        let child = parent.join("nested");
        std::fs::create_dir(&child).unwrap();
        std::fs::write(parent.join(".levelgauge.toml"), "disable_input_limit = true\n").unwrap();
        let config = loader_for(&child).load().unwrap();
        assert!(config.disable_input_limit);
    }
}
