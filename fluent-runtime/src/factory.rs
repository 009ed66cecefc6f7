//! Builder factory.

use crate::{describe::Describe, error::ConstructionError, synthesizer::synthesize_blank_instance};

/// A builder that owns the instance it populates.
///
/// Setters mutate the wrapped target; [`build`](AbstractBuilder::build)
/// hands it back. Implementations are usually declared with
/// [`fluent_builder!`](crate::fluent_builder).
pub trait AbstractBuilder: Sized {
    /// The type this builder produces.
    type Target;

    fn from_target(target: Self::Target) -> Self;

    fn target(&self) -> &Self::Target;

    fn target_mut(&mut self) -> &mut Self::Target;

    fn build(self) -> Self::Target;
}

/// Create a builder around a blank instance of its target type.
///
/// The target type is resolved from the builder's `Target` type; the
/// instance comes from the shortest public constructor.
pub fn create_implementation<B>() -> Result<B, ConstructionError>
where
    B: AbstractBuilder,
    B::Target: Describe,
{
    synthesize_blank_instance::<B::Target>().map(B::from_target)
}

/// Create a builder around a caller-supplied instance.
///
/// Useful for targets without a usable constructor.
pub fn create_implementation_with<B: AbstractBuilder>(target: B::Target) -> B {
    B::from_target(target)
}

/// Generic builder for targets without a declared builder type.
///
/// Setters are closures over the target:
///
/// ```
/// use fluentbuilder_runtime::{AbstractBuilder, Builder, create_implementation_with};
///
/// let numbers = create_implementation_with::<Builder<Vec<i32>>>(Vec::new())
///     .set(|v| v.push(1))
///     .set(|v| v.push(2))
///     .build();
/// assert_eq!(numbers, vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<T> {
    target: T,
}

impl<T> Builder<T> {
    /// Apply a mutation to the target.
    pub fn set(mut self, f: impl FnOnce(&mut T)) -> Self {
        f(&mut self.target);
        self
    }
}

impl<T> AbstractBuilder for Builder<T> {
    type Target = T;

    fn from_target(target: T) -> Self {
        Self { target }
    }

    fn target(&self) -> &T {
        &self.target
    }

    fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    fn build(self) -> T {
        self.target
    }
}
