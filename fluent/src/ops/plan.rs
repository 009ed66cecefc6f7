//! Plan operation - builder plans for model classes.

use eyre::{Result, bail};
use fluentbuilder_codegen::BuilderPlan;
use fluentbuilder_model::Model;

use crate::reports::PlanReport;

/// Execute the plan operation.
///
/// Plans every class, or only `class` when given.
pub fn plan(model: &Model, class: Option<&str>) -> Result<PlanReport> {
    let plans = match class {
        Some(name) => match model.class(name)? {
            Some(class) => vec![BuilderPlan::new(class)],
            None => bail!("class '{}' is not declared in the model", name),
        },
        None => model.classes.iter().map(BuilderPlan::new).collect(),
    };

    Ok(PlanReport { plans })
}
