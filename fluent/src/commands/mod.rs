mod check;
mod classify;
mod completions;
mod imports;
mod plan;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use classify::ClassifyCommand;
use completions::CompletionsCommand;
use eyre::Result;
use imports::ImportsCommand;
use plan::PlanCommand;

/// Extension trait for exiting on model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for fluentbuilder_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "fluent")]
#[command(version)]
#[command(about = "Plan fluent builders and resolve their imports")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Imports(cmd) => cmd.run(),
            Commands::Classify(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the imports a class needs to reference a type
    Imports(ImportsCommand),

    /// Classify a type signature
    Classify(ClassifyCommand),

    /// Validate fluent.toml
    Check(CheckCommand),

    /// Show builder plans for the classes in fluent.toml
    Plan(PlanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
