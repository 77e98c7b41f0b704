use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "deploydeck")]
#[command(about = "Deployment setup console - pick a template, get its prepop options")]
#[command(version)]
struct Cli {
    /// Path to the working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .deploydeck/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the setup GUI (the default)
    Gui,

    /// Run the setup server (template list + prepop endpoint)
    Serve,

    /// List templates discovered in the templates directory
    Templates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let config_path = cli
        .config
        .map(|p| if p.is_absolute() { p } else { work_dir.join(p) })
        .unwrap_or_else(|| work_dir.join(".deploydeck").join("config.toml"));
    let config = deploydeck::config::Config::load_or_default(&config_path);

    match cli.command {
        Some(Commands::Serve) => cli::serve::serve_command(&work_dir, &config),
        Some(Commands::Templates) => cli::templates::templates_command(&work_dir, &config),
        Some(Commands::Gui) | None => deploydeck::gui::run_gui(config),
    }
}
