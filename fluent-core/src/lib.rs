//! Core types and classifiers for the fluent builder toolkit.
//!
//! This crate provides the fundamental, language-agnostic pieces shared by
//! the runtime builder factory and the build-time planner:
//!
//! - primitive types and their default values
//! - runtime argument values
//! - member modifiers
//! - qualified name handling and type classification
//! - shortest-constructor selection

mod constants;
mod constructor;
mod modifiers;
mod primitive;
mod qualified;
mod type_utils;
mod value;

pub use constants::{JAVA_LANG_PACKAGE, LIST_INTERFACE, SET_INTERFACE, SUPPORTED_COLLECTIONS};
pub use constructor::{
    ConstructorSignature, ParamKind, create_empty_parameters, select_shortest_constructor,
};
pub use modifiers::{HasModifiers, Modifier, Modifiers};
pub use primitive::{PrimitiveType, default_value_of_kind, default_value_of_primitive_type};
pub use qualified::{QualifiedName, is_valid_identifier};
pub use type_utils::{
    generic_arguments, is_list, is_primitive_type, is_set, is_static_or_final,
    is_supported_collection, raw_type,
};
pub use value::{Value, ValueError};
