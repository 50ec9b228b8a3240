//! Owlet CLI - ask yes/no/don't-know questions of an ontology CSV.
//!
//! Usage:
//!   `owlet ask "is hemlock considered to be poisonous?" --data ontology.csv`
//!   `owlet repl --data ontology.csv`
//!   `owlet check ontology.csv`

mod import;
mod repl;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owlet_core::{Engine, EngineConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "owlet")]
#[command(
    author,
    version,
    about = "Owlet - open-world question answering over ontology graphs"
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        /// The question, e.g. "is hemlock considered to be poisonous?"
        question: String,

        /// Path to the ontology CSV
        #[arg(short, long, env = "OWLET_DATA")]
        data: PathBuf,

        /// Print the full result as JSON instead of one line
        #[arg(long)]
        json: bool,

        /// Path to an owlet.toml configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Start an interactive question REPL
    Repl {
        /// Path to the ontology CSV
        #[arg(short, long, env = "OWLET_DATA")]
        data: PathBuf,

        /// Path to an owlet.toml configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Lint an ontology CSV and report row problems
    Check {
        /// Path to the ontology CSV
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            data,
            json,
            config,
        } => {
            let engine = load_engine(config.as_deref(), &data)?;
            let answer = engine.process(&question);

            if json {
                println!("{}", serde_json::to_string_pretty(&answer)?);
            } else {
                print!("{}", answer.result);
                if let Some(explanation) = &answer.explanation {
                    print!("  ({explanation})");
                }
                println!();
            }
        }

        Commands::Repl { data, config } => {
            let engine = load_engine(config.as_deref(), &data)?;
            repl::run(&engine, &data)?;
        }

        Commands::Check { data } => {
            let stats = import::check_csv(&data)?;
            println!(
                "{}: {} edges loaded, {} rows skipped",
                data.display(),
                stats.loaded,
                stats.skipped
            );
        }
    }

    Ok(())
}

fn load_engine(config_path: Option<&Path>, data: &Path) -> Result<Engine> {
    let config = match config_path {
        Some(path) => EngineConfig::load_from_path(path)?,
        None => EngineConfig::load()?,
    };
    let engine = Engine::new(config)?;
    import::load_csv(&engine, data)?;
    Ok(engine)
}
