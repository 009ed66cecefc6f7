//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod classify;
mod imports;
mod output;
mod plan;

pub use check::CheckReport;
pub use classify::ClassifyReport;
pub use imports::ImportsReport;
pub use output::{Report, TerminalOutput};
pub use plan::PlanReport;
