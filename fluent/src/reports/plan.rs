//! Plan command report.

use fluentbuilder_codegen::{BuilderPlan, SetterKind};

use super::output::{Output, Report};

/// Builder plans, one per class.
#[derive(Debug)]
pub struct PlanReport {
    pub plans: Vec<BuilderPlan>,
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, plan) in self.plans.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            render_plan(plan, out);
        }
    }
}

fn render_plan(plan: &BuilderPlan, out: &mut dyn Output) {
    out.title(&plan.builder_name);
    out.key_value("target", &plan.class_name);
    match plan.blank_instance_expression() {
        Some(expr) => out.key_value("blank instance", &expr),
        None => out.warning(&format!(
            "{} has no public constructor; supply a target instance",
            plan.class_name
        )),
    }

    if !plan.setters.is_empty() {
        out.section("setters");
        for setter in &plan.setters {
            let suffix = match setter.kind {
                SetterKind::Value => "",
                SetterKind::List => " (varargs list)",
                SetterKind::Set => " (varargs set)",
            };
            out.list_item(&format!("{}: {}{}", setter.name, setter.type_name, suffix));
        }
    }

    if !plan.imports.is_empty() {
        out.section("imports");
        for statement in plan.imports.to_statements() {
            out.list_item(&statement);
        }
    }
}
