use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::Session;
use budget_tracker::config::{paths::CONFIG_DIR_ENV, Settings, TrackerPaths};
use budget_tracker::display::format_category_list;
use budget_tracker::services::BudgetEngine;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "Records income and expenses for one session, tracks spending \
                  against per-category budget limits and warns when a category \
                  goes over its limit. Nothing is saved when the session ends."
)]
struct Cli {
    /// Configuration directory (overrides the default location)
    #[arg(long, global = true, env = CONFIG_DIR_ENV)]
    config_dir: Option<PathBuf>,

    /// Log filter, e.g. "info" or "budget_tracker=debug"
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    #[command(alias = "run")]
    Session,

    /// Write a default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let paths = match cli.config_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;
    tracing::debug!(config = %paths.settings_file().display(), "Settings loaded");

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let engine = BudgetEngine::new(settings)?;
            let stdin = io::stdin();
            let mut session = Session::new(engine, stdin.lock(), io::stdout().lock());
            session.run()?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!(
                "Wrote configuration to {}",
                paths.settings_file().display()
            );
            println!();
            println!("Sessions start with these categories (no limits set):");
            let engine = BudgetEngine::new(settings)?;
            print!(
                "{}",
                format_category_list(engine.list_categories(), &engine.settings().currency_symbol)
            );
        }
        Commands::Config => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Config file:      {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created, using defaults)" }
            );
            println!();
            println!("Settings:");
            println!("  Max transactions:   {}", settings.max_transactions);
            println!("  Max categories:     {}", settings.max_categories);
            println!("  Max notifications:  {}", settings.max_notifications);
            println!("  Max description:    {} chars", settings.max_description_length);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
        }
    }

    Ok(())
}
