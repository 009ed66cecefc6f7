//! Constructor selection for blank-instance synthesis.

use crate::{
    primitive::{PrimitiveType, default_value_of_kind},
    value::Value,
};

/// Kind of a constructor parameter, as far as default values are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Primitive(PrimitiveType),
    /// Any non-primitive type; its default is the absent reference.
    Reference,
}

impl ParamKind {
    /// Classify a parameter by its type name.
    pub fn from_type_name(name: &str) -> Self {
        PrimitiveType::from_name(name.trim())
            .map(ParamKind::Primitive)
            .unwrap_or(ParamKind::Reference)
    }
}

/// The narrow "describe constructors" capability.
///
/// Implemented by runtime constructor descriptors as well as by model
/// mirrors read from a class description file, so both share one selection
/// algorithm.
pub trait ConstructorSignature {
    /// Whether the constructor may be chosen for synthesis.
    fn is_public(&self) -> bool;

    /// Parameter kinds, in declaration order.
    fn parameter_kinds(&self) -> Vec<ParamKind>;

    fn arity(&self) -> usize {
        self.parameter_kinds().len()
    }
}

/// Select the public constructor with the fewest parameters.
///
/// Ties go to the constructor declared first. Returns `None` when there is
/// no public constructor.
pub fn select_shortest_constructor<C: ConstructorSignature>(constructors: &[C]) -> Option<&C> {
    let mut shortest: Option<(&C, usize)> = None;
    for constructor in constructors.iter().filter(|c| c.is_public()) {
        let arity = constructor.arity();
        match shortest {
            Some((_, min)) if arity >= min => {}
            _ => shortest = Some((constructor, arity)),
        }
    }
    shortest.map(|(c, _)| c)
}

/// Build the argument list of default values for a constructor.
pub fn create_empty_parameters<C: ConstructorSignature + ?Sized>(constructor: &C) -> Vec<Value> {
    constructor
        .parameter_kinds()
        .into_iter()
        .map(default_value_of_kind)
        .collect()
}
