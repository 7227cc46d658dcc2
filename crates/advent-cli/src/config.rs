//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment (`AOC_SESSION`, read at the call-site; `.env` supported)
//! 3. Config file (`--config`, or the default location if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use advent_core::application::Layout;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which event to fetch from.
    pub event: EventConfig,
    /// Where the template lives and how artifacts are named.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Event year; `None` means the current calendar year.
    pub year: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub challenges_root: PathBuf,
    pub template_dir: PathBuf,
    pub input_filename: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let layout = Layout::default();
        Self {
            challenges_root: layout.challenges_root,
            template_dir: layout.template_dir,
            input_filename: layout.input_filename,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
        toml::from_str(&raw).map_err(|e| anyhow::anyhow!("cannot parse {}: {e}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.advent.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "advent", "advent")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".advent.toml"))
    }

    /// The [`Layout`] the scaffold service should use.
    pub fn layout(&self) -> Layout {
        Layout {
            challenges_root: self.paths.challenges_root.clone(),
            template_dir: self.paths.template_dir.clone(),
            input_filename: self.paths.input_filename.clone(),
            ..Layout::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.template_dir, PathBuf::from("challenges/day00"));
        assert_eq!(cfg.paths.input_filename, "input.txt");
        assert_eq!(cfg.event.year, None);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // The default config location is unlikely to exist in CI; either
        // way the call must succeed.
        assert!(AppConfig::load(None).is_ok());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[event]\nyear = 2020\n\n[paths]\ninput_filename = \"index.txt\"\n")
            .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.event.year, Some(2020));
        assert_eq!(cfg.paths.input_filename, "index.txt");
        // Untouched keys keep their defaults.
        assert_eq!(cfg.paths.challenges_root, PathBuf::from("challenges"));
    }

    #[test]
    fn layout_reflects_the_config() {
        let mut cfg = AppConfig::default();
        cfg.paths.input_filename = "index.txt".into();
        assert_eq!(cfg.layout().input_filename, "index.txt");
        assert_eq!(cfg.layout().readme_filename, "README.md");
    }
}
