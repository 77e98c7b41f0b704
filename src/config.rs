//! Configuration loading and management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::DEFAULT_APP_ROOT;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GUI settings
    #[serde(default)]
    pub gui: GuiSettings,

    /// Setup server settings
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Base URL of the setup server the GUI talks to
    #[serde(default = "default_app_root")]
    pub app_root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address the setup server binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory scanned for deployment templates, relative to the working
    /// directory unless absolute
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
}

fn default_app_root() -> String {
    DEFAULT_APP_ROOT.to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8046".to_string()
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            app_root: default_app_root(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            templates_dir: default_templates_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gui: GuiSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Create a configuration with default values
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Load the config file if present, falling back to defaults on a
    /// missing or unparsable file.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::with_defaults();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "[deploydeck] Failed to load config ({}): {}. Falling back to defaults.",
                    path.display(),
                    e
                );
                Self::with_defaults()
            }
        }
    }

    /// Resolve the templates directory against a working directory.
    pub fn templates_dir_in(&self, work_dir: &Path) -> PathBuf {
        if self.server.templates_dir.is_absolute() {
            self.server.templates_dir.clone()
        } else {
            work_dir.join(&self.server.templates_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::with_defaults();
        assert_eq!(config.gui.app_root, DEFAULT_APP_ROOT);
        assert_eq!(config.server.bind, "127.0.0.1:8046");
        assert_eq!(config.server.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml_config = r#"
[gui]
app_root = "http://10.0.0.5:9000/"

[server]
bind = "0.0.0.0:9000"
templates_dir = "/srv/templates"
"#;
        let config: Config = toml::from_str(toml_config).unwrap();
        assert_eq!(config.gui.app_root, "http://10.0.0.5:9000/");
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.templates_dir, PathBuf::from("/srv/templates"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[gui]\napp_root = \"http://x:1\"\n").unwrap();
        assert_eq!(config.gui.app_root, "http://x:1");
        assert_eq!(config.server.bind, "127.0.0.1:8046");
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("nope.toml"));
        assert_eq!(config.gui.app_root, DEFAULT_APP_ROOT);
    }

    #[test]
    fn test_templates_dir_resolution() {
        let config = Config::with_defaults();
        assert_eq!(
            config.templates_dir_in(Path::new("/work")),
            PathBuf::from("/work/templates")
        );

        let mut absolute = Config::with_defaults();
        absolute.server.templates_dir = PathBuf::from("/srv/templates");
        assert_eq!(
            absolute.templates_dir_in(Path::new("/work")),
            PathBuf::from("/srv/templates")
        );
    }
}
