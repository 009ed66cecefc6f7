use std::path::Path;

use crate::{Error, Model, Result, parse::parse_model};

/// A `fluent.toml` file with both raw content and parsed model.
pub struct FluentToml {
    content: String,
    model: Model,
}

impl FluentToml {
    /// Open and parse a model file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let model = parse_model(&content, &path.display().to_string())?;

        Ok(Self { content, model })
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed model.
    pub fn model(&self) -> &Model {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_open_parses_model() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[class]]
            name = "de.samples.Person"

            [[class.constructors]]
            modifiers = ["public"]
            parameters = [{{ name = "name", type = "java.lang.String" }}]

            [[class.fields]]
            name = "name"
            type = "java.lang.String"
            modifiers = ["private"]
            "#
        )
        .unwrap();

        let fluent_toml = FluentToml::open(file.path()).unwrap();
        let model = fluent_toml.model();
        assert_eq!(model.classes.len(), 1);

        let person = model.class("Person").unwrap().unwrap();
        assert_eq!(person.name, "de.samples.Person");
        assert_eq!(person.constructors[0].parameters[0].type_name, "java.lang.String");
        assert_eq!(person.fields[0].name(), "name");
        assert!(fluent_toml.content().contains("de.samples.Person"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fluent.toml");
        let err = FluentToml::open(&path).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
