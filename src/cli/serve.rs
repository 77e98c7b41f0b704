//! Serve command implementation

use anyhow::Result;
use std::path::Path;

use deploydeck::config::Config;
use deploydeck::server::{self, TemplateRegistry};

/// Run the setup server until the process is stopped.
pub fn serve_command(work_dir: &Path, config: &Config) -> Result<()> {
    let templates_dir = config.templates_dir_in(work_dir);
    let registry = TemplateRegistry::discover(&templates_dir)?;

    server::run(&config.server.bind, registry)
}
