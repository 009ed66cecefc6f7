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
pub struct PlanCommand {
    /// Only plan this class (fully-qualified or simple name)
    pub class: Option<String>,

    /// Path to fluent.toml (defaults to ./fluent.toml)
    #[arg(short, long, default_value = "fluent.toml")]
    pub config: PathBuf,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let fluent_toml = FluentToml::open(&self.config).unwrap_or_exit();

        let report = ops::plan(fluent_toml.model(), self.class.as_deref())?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
