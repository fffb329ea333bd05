use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tie_infrastructure::TieConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tie")]
#[command(about = "TIE CLI - inspect questions and feedback conversation logs", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/tie/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect question definitions
    Questions {
        #[command(subcommand)]
        action: QuestionsAction,
    },
    /// Inspect conversation logs
    Log {
        #[command(subcommand)]
        action: LogAction,
    },
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum QuestionsAction {
    /// List available question ids
    List,
    /// Show a question's tasks
    Show {
        /// Question id (file stem in the question directory)
        id: String,
    },
}

#[derive(Subcommand)]
enum LogAction {
    /// Validate and summarize a JSON conversation log
    Inspect {
        /// JSON file holding an array of speech balloon records
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
}

fn init_tracing(config: &TieConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TieConfig::load_from(path)?,
        None => TieConfig::load_default()?,
    };
    init_tracing(&config);

    match cli.command {
        Commands::Questions { action } => match action {
            QuestionsAction::List => commands::questions::list(&config)?,
            QuestionsAction::Show { id } => commands::questions::show(&config, &id)?,
        },
        Commands::Log { action } => match action {
            LogAction::Inspect { file } => commands::log::inspect(&file)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config)?,
        },
    }

    Ok(())
}
