//! Discovery of deployment templates on disk.
//!
//! A template is an immediate subdirectory of the templates root that
//! carries a `config.toml`. The config may list the prepop option names
//! offered for that template; a template without a `prepop` list offers
//! itself as the only option.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

/// Config file that marks a directory as a template
pub const TEMPLATE_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
struct TemplateConfig {
    #[serde(default)]
    prepop: Vec<String>,
}

/// A discovered template and its prepop option names, in config order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub prepop: Vec<String>,
}

/// Ordered set of templates discovered from the templates directory.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<TemplateEntry>,
}

impl TemplateRegistry {
    /// Scan the templates root. Discovery order is sorted by name so the
    /// selector contents are stable across runs.
    pub fn discover(root: &Path) -> Result<Self> {
        let read_dir = std::fs::read_dir(root)
            .with_context(|| format!("Failed to read templates directory: {}", root.display()))?;

        let mut templates = Vec::new();
        for dir_entry in read_dir {
            let dir_entry =
                dir_entry.with_context(|| format!("Failed to scan {}", root.display()))?;
            let path = dir_entry.path();
            let config_path = path.join(TEMPLATE_CONFIG_FILE);
            if !path.is_dir() || !config_path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let config = match read_template_config(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "[deploydeck] Skipping unreadable template config {}: {}",
                        config_path.display(),
                        e
                    );
                    TemplateConfig::default()
                }
            };

            let prepop = if config.prepop.is_empty() {
                vec![name.to_string()]
            } else {
                config.prepop
            };

            templates.push(TemplateEntry {
                name: name.to_string(),
                prepop,
            });
        }

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { templates })
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.templates
    }

    pub fn template_names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    /// Prepop option names for a template; empty for an unknown template.
    pub fn prepop_options(&self, template: &str) -> &[String] {
        self.templates
            .iter()
            .find(|t| t.name == template)
            .map(|t| t.prepop.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn read_template_config(path: &Path) -> Result<TemplateConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_template(root: &Path, name: &str, config: Option<&str>) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some(content) = config {
            fs::write(dir.join(TEMPLATE_CONFIG_FILE), content).unwrap();
        }
    }

    #[test]
    fn test_discover_sorts_and_skips_non_templates() {
        let tmp = tempfile::tempdir().unwrap();
        write_template(tmp.path(), "Zulu", Some(""));
        write_template(tmp.path(), "Alpha", Some(""));
        // Directory without a config file is not a template
        write_template(tmp.path(), "NotATemplate", None);
        // Stray file alongside template dirs
        fs::write(tmp.path().join("README.md"), "hello").unwrap();

        let registry = TemplateRegistry::discover(tmp.path()).unwrap();
        assert_eq!(registry.template_names(), vec!["Alpha", "Zulu"]);
    }

    #[test]
    fn test_template_without_prepop_list_offers_itself() {
        let tmp = tempfile::tempdir().unwrap();
        write_template(tmp.path(), "Skeleton", Some(""));

        let registry = TemplateRegistry::discover(tmp.path()).unwrap();
        assert_eq!(registry.prepop_options("Skeleton"), ["Skeleton"]);
    }

    #[test]
    fn test_prepop_list_order_is_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        write_template(
            tmp.path(),
            "Relief",
            Some("prepop = [\"Relief\", \"Relief/Demo\", \"Relief/Train\"]\n"),
        );

        let registry = TemplateRegistry::discover(tmp.path()).unwrap();
        assert_eq!(
            registry.prepop_options("Relief"),
            ["Relief", "Relief/Demo", "Relief/Train"]
        );
    }

    #[test]
    fn test_unknown_template_has_no_options() {
        let tmp = tempfile::tempdir().unwrap();
        write_template(tmp.path(), "Alpha", Some(""));

        let registry = TemplateRegistry::discover(tmp.path()).unwrap();
        assert!(registry.prepop_options("Missing").is_empty());
    }

    #[test]
    fn test_unparsable_config_falls_back_to_template_name() {
        let tmp = tempfile::tempdir().unwrap();
        write_template(tmp.path(), "Broken", Some("prepop = not toml ["));

        let registry = TemplateRegistry::discover(tmp.path()).unwrap();
        assert_eq!(registry.prepop_options("Broken"), ["Broken"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(TemplateRegistry::discover(&tmp.path().join("nope")).is_err());
    }
}
