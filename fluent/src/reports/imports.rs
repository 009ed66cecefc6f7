//! Imports command report.

use super::output::{Output, Report};

/// Report data from import resolution.
#[derive(Debug)]
pub struct ImportsReport {
    pub type_name: String,
    pub class_name: String,
    /// Import declarations, in resolution order.
    pub statements: Vec<String>,
}

impl Report for ImportsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.statements.is_empty() {
            out.warning(&format!(
                "{} needs no import in {}",
                self.type_name, self.class_name
            ));
            return;
        }
        for statement in &self.statements {
            out.preformatted(statement);
        }
    }
}
