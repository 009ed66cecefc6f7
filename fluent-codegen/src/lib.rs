//! Import resolution and builder planning.
//!
//! # Module Organization
//!
//! - [`imports`] - Import sets for types referenced by a generated class
//! - [`collections`] - Known implementations of the supported collection interfaces
//! - [`plan`] - Builder plans derived from a class model

pub mod collections;
pub mod imports;
pub mod plan;

pub use imports::{ImportSet, create_necessary_imports_for_type_in_class};
pub use plan::{BlankInstance, BuilderPlan, SetterKind, SetterPlan};
