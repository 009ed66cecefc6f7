//! Model parsing from files and strings.

use std::str::FromStr;

use crate::{Error, Model, Result, error::SourceContext, validate::validate_model};

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_model(s, "fluent.toml")
    }
}

/// Parse and validate a model, using `filename` for error reporting.
pub fn parse_model(content: &str, filename: &str) -> Result<Model> {
    let ctx = SourceContext::new(content, filename);
    let model: Model = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_model(&model, &ctx)?;
    tracing::debug!(filename, classes = model.classes.len(), "parsed class model");
    Ok(model)
}
