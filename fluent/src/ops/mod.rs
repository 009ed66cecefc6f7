//! Core operations.
//!
//! This module contains the business logic for fluent commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod classify;
pub mod imports;
pub mod plan;

pub use check::check;
pub use classify::classify;
pub use imports::imports;
pub use plan::plan;
