//! Class model for the fluent builder toolkit.
//!
//! A model file (`fluent.toml`) describes the target classes a builder is
//! planned for: their constructors, parameters and fields. It stands in for
//! runtime type introspection, read once at build time.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod class;
mod error;
mod file;
mod parse;
mod validate;

pub use class::{ClassMirror, ConstructorMirror, FieldMirror, Model, ParameterMirror};
pub use error::{Error, Result};
pub use file::FluentToml;
pub use parse::parse_model;
