use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ImportsCommand {
    /// Fully-qualified type name, e.g. java.util.HashSet<de.example.Tag>
    pub type_name: String,

    /// Fully-qualified name of the class referencing the type
    pub class_name: String,
}

impl ImportsCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::imports(&self.type_name, &self.class_name);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
