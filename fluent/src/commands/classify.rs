use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ClassifyCommand {
    /// Type signature, e.g. java.util.List<String>
    pub signature: String,
}

impl ClassifyCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::classify(&self.signature);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
