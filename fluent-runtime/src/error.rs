use fluentbuilder_core::ValueError;
use miette::Diagnostic;
use thiserror::Error;

/// Failure reported by a constructor invocation.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Argument(#[from] ValueError),

    #[error("expected {expected} arguments, got {found}")]
    Arity { expected: usize, found: usize },

    #[error("{0}")]
    Failed(String),
}

impl InvokeError {
    /// A constructor-specific failure.
    pub fn failed(reason: impl Into<String>) -> Self {
        InvokeError::Failed(reason.into())
    }
}

/// A blank instance of the target type could not be created.
#[derive(Debug, Error, Diagnostic)]
pub enum ConstructionError {
    #[error("could not create new instance of {type_name}: no usable constructor")]
    #[diagnostic(
        code(fluent::no_usable_constructor),
        help("declare a public constructor, or pass a target instance to the builder factory")
    )]
    NoUsableConstructor { type_name: &'static str },

    #[error("illegal argument for constructor of {type_name}")]
    #[diagnostic(code(fluent::invalid_argument))]
    InvalidArgument {
        type_name: &'static str,
        #[source]
        source: ValueError,
    },

    #[error("could not create new instance of {type_name}")]
    #[diagnostic(code(fluent::instantiation))]
    Instantiation {
        type_name: &'static str,
        #[source]
        source: InvokeError,
    },
}

impl ConstructionError {
    pub(crate) fn from_invoke(type_name: &'static str, error: InvokeError) -> Self {
        match error {
            InvokeError::Argument(source) => ConstructionError::InvalidArgument { type_name, source },
            source => ConstructionError::Instantiation { type_name, source },
        }
    }

    /// Name of the type that could not be constructed.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConstructionError::NoUsableConstructor { type_name }
            | ConstructionError::InvalidArgument { type_name, .. }
            | ConstructionError::Instantiation { type_name, .. } => type_name,
        }
    }
}
