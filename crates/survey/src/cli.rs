use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cmd::{self, check::CheckArgs, list::ListArgs, run::RunArgs};
use crate::config::RunOptions;

#[derive(Parser, Debug)]
#[command(
    name = "survey",
    about = "Run YAML-defined question sets interactively or headlessly",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Seed for random defaults and synthesized answers
    #[arg(long, value_name = "SEED", env = "SURVEY_SEED", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a question set and print the answers
    Run(RunArgs),
    /// Validate a question file without running it
    Check(CheckArgs),
    /// Edit a list of free-text entries
    List(ListArgs),
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = RunOptions::new(cli.seed);
    match cli.command {
        Commands::Run(args) => cmd::run::run(args, &options),
        Commands::Check(args) => cmd::check::run(args),
        Commands::List(args) => cmd::list::run(args),
    }
}
