use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fluentbuilder_model::FluentToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to fluent.toml (defaults to ./fluent.toml)
    #[arg(short, long, default_value = "fluent.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let fluent_toml = FluentToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(fluent_toml.model(), &self.config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
