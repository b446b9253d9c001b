//! pzero: evaluate layered missile attack scenarios from the command line.
//!
//! Usage:
//!   pzero assess scenario.json
//!   pzero assess scenario.toml --model 1 --active-offensive 0,2 --active-defensive 1
//!   pzero models
//!   pzero radius --yield-kt 475 --hardness 1000

mod error;
mod load;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pzero_core::ActiveLayers;
use pzero_engine::{assess, lethal_radius, ModelRegistry};

use crate::error::Result;

const DEFAULT_LOG_FILTER: &str = "pzero=info,pzero_engine=warn";

#[derive(Parser, Debug)]
#[command(name = "pzero")]
#[command(about = "Probability a defended target survives a layered missile attack")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a scenario file (.json or .toml)
    Assess {
        scenario: PathBuf,

        /// Model index, overriding the scenario's own
        #[arg(long)]
        model: Option<usize>,

        /// Offensive layer indices for a what-if evaluation
        #[arg(long, value_delimiter = ',')]
        active_offensive: Vec<usize>,

        /// Defensive layer indices for a what-if evaluation
        #[arg(long, value_delimiter = ',')]
        active_defensive: Vec<usize>,

        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available models
    Models,

    /// Lethal radius of a surface burst
    Radius {
        /// Yield in kilotons
        #[arg(long)]
        yield_kt: f64,

        /// Target hardness in psi
        #[arg(long)]
        hardness: f64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let registry = ModelRegistry::builtin();

    match args.command {
        Command::Assess {
            scenario,
            model,
            active_offensive,
            active_defensive,
            json,
        } => {
            let mut loaded = load::load_scenario(&scenario)?;
            if let Some(index) = model {
                loaded.model_index = index;
            }
            if !active_offensive.is_empty() || !active_defensive.is_empty() {
                loaded.active = ActiveLayers::new(active_offensive, active_defensive);
            }

            let assessment = assess(&registry, &loaded)?;
            info!(model = %assessment.model, "assessed {}", scenario.display());

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print!("{}", report::Report(&assessment));
            }
        }
        Command::Models => {
            for (index, model) in registry.iter().enumerate() {
                let marker = if index == 0 { " (default)" } else { "" };
                println!("{index}: {}{marker}", model.name);
                if let Some(description) = &model.description {
                    println!("   {description}");
                }
            }
        }
        Command::Radius { yield_kt, hardness } => {
            println!("{}", report::meters(lethal_radius(yield_kt, hardness)));
        }
    }

    Ok(())
}
