//! Class, constructor, parameter and field mirrors.

use std::ops::Range;

use fluentbuilder_core::{
    ConstructorSignature, HasModifiers, Modifier, Modifiers, ParamKind, QualifiedName,
};
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result};

/// Root of a `fluent.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Model {
    /// Target classes, in declaration order.
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassMirror>,
}

impl Model {
    /// Find a class by fully-qualified or simple name.
    ///
    /// A simple name shared by classes in different packages is an error.
    pub fn class(&self, name: &str) -> Result<Option<&ClassMirror>> {
        if let Some(class) = self.classes.iter().find(|c| c.name == name) {
            return Ok(Some(class));
        }

        let matches: Vec<&ClassMirror> = self
            .classes
            .iter()
            .filter(|c| c.simple_name() == name)
            .collect();
        match matches.as_slice() {
            [] => Ok(None),
            [class] => Ok(Some(*class)),
            candidates => Err(Box::new(Error::AmbiguousClass {
                name: name.to_string(),
                candidates: candidates.iter().map(|c| c.name.clone()).collect(),
            })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// A target class.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassMirror {
    /// Fully-qualified class name.
    pub name: String,

    /// Fully-qualified name of the builder class, if not the default.
    #[serde(default)]
    pub builder: Option<String>,

    #[serde(default)]
    pub constructors: Vec<ConstructorMirror>,

    #[serde(default)]
    pub fields: Vec<FieldMirror>,
}

impl ClassMirror {
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn package(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(package, _)| package)
    }

    /// Fully-qualified name of the builder class.
    ///
    /// Defaults to `<SimpleName>Builder` in the class's own package.
    pub fn builder_name(&self) -> String {
        if let Some(builder) = &self.builder {
            return builder.clone();
        }
        let builder = format!("{}Builder", self.simple_name());
        match QualifiedName::parse(&self.name) {
            Some(name) => name.sibling(&builder).to_string(),
            None => builder,
        }
    }

    /// Fields a builder can set, i.e. neither static nor final.
    pub fn settable_fields(&self) -> impl Iterator<Item = &FieldMirror> {
        self.fields
            .iter()
            .filter(|f| !fluentbuilder_core::is_static_or_final(*f))
    }
}

/// A constructor of a target class.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorMirror {
    /// Without modifiers a constructor is package-private.
    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default)]
    pub parameters: Vec<ParameterMirror>,
}

impl ConstructorMirror {
    /// Render the parameter list, e.g. `(java.lang.String name, int age)`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.type_name, p.name))
            .collect();
        format!("({})", params.join(", "))
    }
}

impl ConstructorSignature for ConstructorMirror {
    fn is_public(&self) -> bool {
        self.modifiers.contains(Modifier::Public)
    }

    fn parameter_kinds(&self) -> Vec<ParamKind> {
        self.parameters
            .iter()
            .map(|p| ParamKind::from_type_name(&p.type_name))
            .collect()
    }

    fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl HasModifiers for ConstructorMirror {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }
}

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterMirror {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,
}

impl ParameterMirror {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A field of a target class.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldMirror {
    /// Wrapped in Spanned to preserve source location for error reporting
    name: Spanned<String>,

    /// Declared type signature, possibly with generic arguments.
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub modifiers: Modifiers,
}

impl FieldMirror {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            name: Spanned::new(0..0, name.into()),
            type_name: type_name.into(),
            modifiers,
        }
    }

    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    /// Byte range of the name in the model file; empty when built in code.
    pub fn name_span(&self) -> Range<usize> {
        self.name.span()
    }
}

impl HasModifiers for FieldMirror {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }
}

#[cfg(test)]
mod tests {
    use fluentbuilder_core::is_static_or_final;

    use super::*;

    fn field(name: &str, modifiers: &[Modifier]) -> FieldMirror {
        FieldMirror::new(name, "java.lang.String", modifiers.iter().copied().collect())
    }

    #[test]
    fn test_builder_name_defaults_to_sibling() {
        let class = ClassMirror {
            name: "de.samples.Person".to_string(),
            builder: None,
            constructors: vec![],
            fields: vec![],
        };
        assert_eq!(class.builder_name(), "de.samples.PersonBuilder");
        assert_eq!(class.simple_name(), "Person");
        assert_eq!(class.package(), Some("de.samples"));
    }

    #[test]
    fn test_builder_name_override() {
        let class = ClassMirror {
            name: "de.samples.Person".to_string(),
            builder: Some("de.samples.builders.AbstractPersonBuilder".to_string()),
            constructors: vec![],
            fields: vec![],
        };
        assert_eq!(class.builder_name(), "de.samples.builders.AbstractPersonBuilder");
    }

    #[test]
    fn test_field_modifiers() {
        // mirrors a class with `static String s; final String f = ""; private String p;`
        let static_field = field("staticString", &[Modifier::Static]);
        let final_field = field("finalString", &[Modifier::Final]);
        let plain_field = field("norString", &[Modifier::Private]);

        assert!(is_static_or_final(&static_field));
        assert!(is_static_or_final(&final_field));
        assert!(!is_static_or_final(&plain_field));
    }

    #[test]
    fn test_settable_fields_skip_static_and_final() {
        let class = ClassMirror {
            name: "de.samples.Person".to_string(),
            builder: None,
            constructors: vec![],
            fields: vec![
                field("ID", &[Modifier::Public, Modifier::Static, Modifier::Final]),
                field("name", &[Modifier::Private]),
                field("kind", &[Modifier::Private, Modifier::Final]),
            ],
        };
        let names: Vec<&str> = class.settable_fields().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name"]);
    }

    #[test]
    fn test_constructor_signature() {
        let ctor = ConstructorMirror {
            modifiers: [Modifier::Public].into_iter().collect(),
            parameters: vec![
                ParameterMirror::new("name", "java.lang.String"),
                ParameterMirror::new("age", "int"),
            ],
        };
        assert!(ctor.is_public());
        assert_eq!(ctor.arity(), 2);
        assert_eq!(ctor.signature(), "(java.lang.String name, int age)");
        assert_eq!(
            ctor.parameter_kinds(),
            vec![
                ParamKind::Reference,
                ParamKind::Primitive(fluentbuilder_core::PrimitiveType::Int)
            ]
        );
        assert!(!ConstructorMirror::default().is_public());
    }

    fn class(name: &str) -> ClassMirror {
        ClassMirror {
            name: name.to_string(),
            builder: None,
            constructors: vec![],
            fields: vec![],
        }
    }

    #[test]
    fn test_class_lookup() {
        let model = Model {
            classes: vec![
                class("de.samples.Person"),
                class("de.billing.Person"),
                class("de.samples.Address"),
            ],
        };

        let address = model.class("Address").unwrap().unwrap();
        assert_eq!(address.name, "de.samples.Address");
        let person = model.class("de.billing.Person").unwrap().unwrap();
        assert_eq!(person.name, "de.billing.Person");
        assert!(model.class("Order").unwrap().is_none());

        let err = model.class("Person").unwrap_err();
        assert!(matches!(
            *err,
            Error::AmbiguousClass { ref candidates, .. }
                if candidates == &["de.samples.Person", "de.billing.Person"]
        ));
    }
}
