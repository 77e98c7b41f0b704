//! Templates command implementation

use anyhow::Result;
use std::path::Path;

use deploydeck::config::Config;
use deploydeck::server::TemplateRegistry;

/// List the templates found in the templates directory, with their prepop
/// options.
pub fn templates_command(work_dir: &Path, config: &Config) -> Result<()> {
    let templates_dir = config.templates_dir_in(work_dir);
    let registry = TemplateRegistry::discover(&templates_dir)?;

    if registry.is_empty() {
        println!("No templates found in {}.", templates_dir.display());
        return Ok(());
    }

    println!("Found {} template(s):\n", registry.len());
    for entry in registry.entries() {
        println!("  {}", entry.name);
        for option in &entry.prepop {
            println!("    {}", option);
        }
    }

    Ok(())
}
