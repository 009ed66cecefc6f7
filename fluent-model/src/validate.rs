//! Model validation.

use std::collections::HashSet;

use fluentbuilder_core::{QualifiedName, raw_type};

use crate::{ClassMirror, Model, Result, error::SourceContext};

pub(crate) fn validate_model(model: &Model, ctx: &SourceContext<'_>) -> Result<()> {
    let mut seen = HashSet::new();
    for class in &model.classes {
        validate_class(class, ctx)?;
        if !seen.insert(class.name.as_str()) {
            return Err(ctx.duplicate_class_error(&class.name));
        }
    }
    Ok(())
}

fn validate_class(class: &ClassMirror, ctx: &SourceContext<'_>) -> Result<()> {
    if QualifiedName::parse(&class.name).is_none() {
        return Err(ctx.invalid_class_name_error(&class.name));
    }
    if let Some(builder) = &class.builder {
        if QualifiedName::parse(builder).is_none() {
            return Err(ctx.invalid_class_name_error(builder));
        }
    }

    let mut fields = HashSet::new();
    for field in &class.fields {
        if field.name().trim().is_empty() {
            return Err(ctx.validation_error(
                format!("field in class '{}' has an empty name", class.name),
                None,
            ));
        }
        validate_type(&field.type_name, field.name(), &class.name, ctx)?;
        if !fields.insert(field.name()) {
            return Err(ctx.duplicate_field_error(&class.name, field.name(), field.name_span()));
        }
    }

    for constructor in &class.constructors {
        for param in &constructor.parameters {
            validate_type(&param.type_name, &param.name, &class.name, ctx)?;
        }
    }
    Ok(())
}

fn validate_type(
    type_name: &str,
    member: &str,
    class: &str,
    ctx: &SourceContext<'_>,
) -> Result<()> {
    if raw_type(type_name).is_empty() {
        return Err(ctx.validation_error(
            format!("'{}' in class '{}' has no type", member, class),
            Some(member),
        ));
    }
    Ok(())
}
