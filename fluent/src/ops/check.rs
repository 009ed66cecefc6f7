//! Check operation - model validation.

use std::path::Path;

use fluentbuilder_core::select_shortest_constructor;
use fluentbuilder_model::Model;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The model has already been parsed and validated; this collects the
/// warnings that don't prevent planning.
pub fn check(model: &Model, config_path: &Path) -> CheckReport {
    let mut warnings = Vec::new();

    if model.is_empty() {
        warnings.push("no classes declared".to_string());
    }

    for class in &model.classes {
        if select_shortest_constructor(&class.constructors).is_none() {
            warnings.push(format!(
                "class '{}' has no public constructor; its builder needs a target instance",
                class.name
            ));
        }
        if class.settable_fields().next().is_none() {
            warnings.push(format!("class '{}' has no settable fields", class.name));
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        classes: model.classes.len(),
        warnings,
    }
}
