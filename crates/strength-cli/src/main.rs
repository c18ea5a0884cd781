mod logging;
mod review;
mod tui;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use strength_core::{Category, Config, Provider, Researcher, LLM};

/// Researcher over whichever provider the config selects.
pub type DynResearcher = Researcher<Box<dyn LLM>>;

#[derive(Parser)]
#[command(name = "strength")]
#[command(about = "Evidence-based research assistant for strength and conditioning coaches", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to ./strength.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive terminal UI (default)
    Tui,
    /// Run one literature review and print it
    Review {
        /// Topic to research
        #[arg(required = true)]
        topic: Vec<String>,
        /// Category key, e.g. hypertrophy, power, injury-prevention
        #[arg(short, long, default_value = "hypertrophy")]
        category: Category,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Log to stderr instead of the log file
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the default configuration file
    Config,
}

fn build_researcher(config: &Config) -> color_eyre::Result<Arc<DynResearcher>> {
    let llm = Provider::from_config(&config.llm)?.build()?;
    Ok(Arc::new(Researcher::new(llm, config.research.clone())))
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            logging::init_file(&config.logging)?;
            let researcher = build_researcher(&config)?;
            tui::run(researcher).await
        }
        Commands::Review { topic, category, json, verbose } => {
            if verbose {
                logging::init_stderr(&config.logging);
            } else {
                logging::init_file(&config.logging)?;
            }
            let researcher = build_researcher(&config)?;
            review::run(researcher.as_ref(), &topic.join(" "), category, json).await
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
            Ok(())
        }
    }
}
