//! Blank-instance synthesis.

use fluentbuilder_core::{create_empty_parameters, select_shortest_constructor};

use crate::{describe::Describe, error::ConstructionError};

/// Create a blank instance of `T`.
///
/// The public constructor with the fewest parameters is invoked with the
/// default value of each parameter type. Failures are logged once and
/// returned; construction is attempted exactly once.
pub fn synthesize_blank_instance<T: Describe>() -> Result<T, ConstructionError> {
    let result = create_shortest_instance::<T>();
    if let Err(err) = &result {
        tracing::error!(target_type = err.type_name(), error = %err, "could not create new instance");
    }
    result
}

/// Like [`synthesize_blank_instance`], degrading any failure to `None`.
pub fn try_synthesize_blank_instance<T: Describe>() -> Option<T> {
    synthesize_blank_instance().ok()
}

fn create_shortest_instance<T: Describe>() -> Result<T, ConstructionError> {
    let type_name = T::type_name();
    let constructors = T::constructors();
    let shortest = select_shortest_constructor(&constructors)
        .ok_or(ConstructionError::NoUsableConstructor { type_name })?;

    let parameters = create_empty_parameters(shortest);
    tracing::debug!(
        target_type = type_name,
        candidates = constructors.len(),
        arity = parameters.len(),
        "invoking shortest constructor"
    );

    shortest
        .new_instance(&parameters)
        .map_err(|e| ConstructionError::from_invoke(type_name, e))
}
