//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the model file.
    pub config_path: PathBuf,
    /// Number of declared classes.
    pub classes: usize,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "✓ {} is valid ({} class{})",
            self.config_path.display(),
            self.classes,
            if self.classes == 1 { "" } else { "es" }
        ));
    }
}
