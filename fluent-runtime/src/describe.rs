//! Constructor descriptions.

use std::fmt;

use fluentbuilder_core::{ConstructorSignature, ParamKind, Value, ValueError};

use crate::error::InvokeError;

/// Function that builds an instance from its arguments.
pub type Instantiate<T> = fn(&Arguments<'_>) -> Result<T, InvokeError>;

/// Types that can describe their constructors.
///
/// This is the only introspection the synthesizer needs: an ordered list of
/// constructors, each with its visibility and parameter kinds.
pub trait Describe: Sized {
    /// Name used in diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Constructors in declaration order.
    fn constructors() -> Vec<Constructor<Self>>;
}

/// One constructor of `T`.
pub struct Constructor<T> {
    public: bool,
    params: Vec<ParamKind>,
    instantiate: Instantiate<T>,
}

impl<T> Constructor<T> {
    pub fn public(params: impl IntoIterator<Item = ParamKind>, instantiate: Instantiate<T>) -> Self {
        Self {
            public: true,
            params: params.into_iter().collect(),
            instantiate,
        }
    }

    /// A constructor that is never chosen for synthesis.
    pub fn private(params: impl IntoIterator<Item = ParamKind>, instantiate: Instantiate<T>) -> Self {
        Self {
            public: false,
            ..Self::public(params, instantiate)
        }
    }

    /// Public zero-argument constructor backed by [`Default`].
    pub fn from_default() -> Self
    where
        T: Default,
    {
        Self::public(Vec::new(), |_| Ok(T::default()))
    }

    /// Invoke the constructor.
    pub fn new_instance(&self, args: &[Value]) -> Result<T, InvokeError> {
        if args.len() != self.params.len() {
            return Err(InvokeError::Arity {
                expected: self.params.len(),
                found: args.len(),
            });
        }
        (self.instantiate)(&Arguments::new(args))
    }
}

impl<T> ConstructorSignature for Constructor<T> {
    fn is_public(&self) -> bool {
        self.public
    }

    fn parameter_kinds(&self) -> Vec<ParamKind> {
        self.params.clone()
    }

    fn arity(&self) -> usize {
        self.params.len()
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("public", &self.public)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Positional constructor arguments with typed accessors.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&'a Value, ValueError> {
        self.values.get(index).ok_or(ValueError::Missing { index })
    }

    pub fn bool(&self, index: usize) -> Result<bool, ValueError> {
        self.get(index)?.as_bool(index)
    }

    pub fn char(&self, index: usize) -> Result<char, ValueError> {
        self.get(index)?.as_char(index)
    }

    pub fn byte(&self, index: usize) -> Result<i8, ValueError> {
        self.get(index)?.as_i8(index)
    }

    pub fn short(&self, index: usize) -> Result<i16, ValueError> {
        self.get(index)?.as_i16(index)
    }

    pub fn int(&self, index: usize) -> Result<i32, ValueError> {
        self.get(index)?.as_i32(index)
    }

    pub fn long(&self, index: usize) -> Result<i64, ValueError> {
        self.get(index)?.as_i64(index)
    }

    pub fn float(&self, index: usize) -> Result<f32, ValueError> {
        self.get(index)?.as_f32(index)
    }

    pub fn double(&self, index: usize) -> Result<f64, ValueError> {
        self.get(index)?.as_f64(index)
    }

    /// A reference argument; null maps to `None`.
    pub fn reference<R>(&self, index: usize) -> Result<Option<R>, ValueError> {
        self.get(index)?.as_null(index)
    }
}
