//! Builder plans.
//!
//! A plan captures everything a builder for one target class needs:
//! how to obtain a blank target instance, which setters to offer and which
//! imports the builder's source file requires. Rendering the plan into
//! source text is left to the caller.

use fluentbuilder_core::{Value, create_empty_parameters, is_list, is_set, select_shortest_constructor};
use fluentbuilder_model::{ClassMirror, FieldMirror};

use crate::imports::{ImportSet, create_necessary_imports_for_type_in_class};

/// How a setter assigns its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterKind {
    /// Plain assignment.
    Value,
    /// Varargs setter collecting into a list.
    List,
    /// Varargs setter collecting into a set.
    Set,
}

impl SetterKind {
    fn for_type(type_name: &str) -> Self {
        if is_list(type_name) {
            SetterKind::List
        } else if is_set(type_name) {
            SetterKind::Set
        } else {
            SetterKind::Value
        }
    }
}

/// One builder setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterPlan {
    /// Field (and method) name.
    pub name: String,
    /// Declared field type.
    pub type_name: String,
    pub kind: SetterKind,
}

/// The constructor call producing a blank target instance.
#[derive(Debug, Clone, PartialEq)]
pub struct BlankInstance {
    /// Parameter list of the chosen constructor.
    pub signature: String,
    /// Default arguments, one per parameter.
    pub arguments: Vec<Value>,
}

impl BlankInstance {
    /// Render the constructor call, e.g. `new Person(null, 0)`.
    pub fn expression(&self, simple_name: &str) -> String {
        let args: Vec<String> = self.arguments.iter().map(Value::to_literal).collect();
        format!("new {}({})", simple_name, args.join(", "))
    }
}

/// Everything needed to write a builder for one class.
#[derive(Debug, Clone)]
pub struct BuilderPlan {
    pub class_name: String,
    pub builder_name: String,
    /// `None` when the class has no public constructor; the caller must then
    /// supply a target instance.
    pub blank_instance: Option<BlankInstance>,
    pub setters: Vec<SetterPlan>,
    pub imports: ImportSet,
}

impl BuilderPlan {
    pub fn new(class: &ClassMirror) -> Self {
        let builder_name = class.builder_name();

        let blank_instance = select_shortest_constructor(&class.constructors).map(|ctor| {
            BlankInstance {
                signature: ctor.signature(),
                arguments: create_empty_parameters(ctor),
            }
        });
        if blank_instance.is_none() {
            tracing::warn!(class = %class.name, "no public constructor, blank instance must be supplied");
        }

        let setters: Vec<SetterPlan> = class.settable_fields().map(setter_for).collect();

        let mut imports = create_necessary_imports_for_type_in_class(&class.name, &builder_name);
        for field in class.settable_fields() {
            imports.merge(&create_necessary_imports_for_type_in_class(
                &field.type_name,
                &builder_name,
            ));
        }

        tracing::debug!(
            class = %class.name,
            builder = %builder_name,
            setters = setters.len(),
            imports = imports.len(),
            "planned builder"
        );

        Self {
            class_name: class.name.clone(),
            builder_name,
            blank_instance,
            setters,
            imports,
        }
    }

    pub fn simple_class_name(&self) -> &str {
        self.class_name.rsplit('.').next().unwrap_or(&self.class_name)
    }

    /// The blank-instance constructor call, if there is a public constructor.
    pub fn blank_instance_expression(&self) -> Option<String> {
        self.blank_instance
            .as_ref()
            .map(|b| b.expression(self.simple_class_name()))
    }
}

fn setter_for(field: &FieldMirror) -> SetterPlan {
    SetterPlan {
        name: field.name().to_string(),
        type_name: field.type_name.clone(),
        kind: SetterKind::for_type(&field.type_name),
    }
}

#[cfg(test)]
mod tests {
    use fluentbuilder_core::Modifier;
    use fluentbuilder_model::{ConstructorMirror, ParameterMirror};

    use super::*;

    fn public_ctor(params: &[(&str, &str)]) -> ConstructorMirror {
        ConstructorMirror {
            modifiers: [Modifier::Public].into_iter().collect(),
            parameters: params
                .iter()
                .map(|(name, ty)| ParameterMirror::new(*name, *ty))
                .collect(),
        }
    }

    fn field(name: &str, ty: &str, modifiers: &[Modifier]) -> FieldMirror {
        FieldMirror::new(name, ty, modifiers.iter().copied().collect())
    }

    #[test]
    fn test_blank_instance_uses_shortest_constructor() {
        let class = ClassMirror {
            name: "de.samples.Point".to_string(),
            builder: None,
            constructors: vec![
                public_ctor(&[("x", "int"), ("y", "int"), ("label", "java.lang.String")]),
                public_ctor(&[("visible", "boolean")]),
                public_ctor(&[("x", "int"), ("y", "int")]),
            ],
            fields: vec![],
        };

        let plan = BuilderPlan::new(&class);
        let blank = plan.blank_instance.as_ref().unwrap();
        assert_eq!(blank.signature, "(boolean visible)");
        assert_eq!(blank.arguments, vec![Value::Bool(false)]);
        assert_eq!(
            plan.blank_instance_expression().as_deref(),
            Some("new Point(false)")
        );
    }

    #[test]
    fn test_no_public_constructor() {
        let class = ClassMirror {
            name: "de.samples.Secret".to_string(),
            builder: None,
            constructors: vec![ConstructorMirror::default()],
            fields: vec![],
        };
        assert!(BuilderPlan::new(&class).blank_instance.is_none());
    }

    #[test]
    fn test_setters_and_kinds() {
        let class = ClassMirror {
            name: "de.samples.Person".to_string(),
            builder: None,
            constructors: vec![],
            fields: vec![
                field("COUNT", "int", &[Modifier::Static]),
                field("name", "java.lang.String", &[Modifier::Private]),
                field("nicknames", "java.util.List<java.lang.String>", &[]),
                field("tags", "java.util.Set<de.tags.Tag>", &[]),
            ],
        };

        let plan = BuilderPlan::new(&class);
        let kinds: Vec<(&str, SetterKind)> = plan
            .setters
            .iter()
            .map(|s| (s.name.as_str(), s.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("name", SetterKind::Value),
                ("nicknames", SetterKind::List),
                ("tags", SetterKind::Set),
            ]
        );
        assert_eq!(plan.builder_name, "de.samples.PersonBuilder");
        assert_eq!(
            plan.imports.to_string(),
            "[java.util.List, java.util.Set, de.tags.Tag]"
        );
    }

    #[test]
    fn test_array_of_collections_is_plain_value() {
        let class = ClassMirror {
            name: "de.samples.Sheet".to_string(),
            builder: None,
            constructors: vec![],
            fields: vec![
                field("rows", "java.util.List<java.lang.String>[]", &[]),
                field("marks", "java.util.Set...", &[]),
            ],
        };

        let plan = BuilderPlan::new(&class);
        assert!(plan.setters.iter().all(|s| s.kind == SetterKind::Value));
        assert_eq!(
            plan.imports.to_string(),
            "[java.util.List, java.util.Set]"
        );
    }

    #[test]
    fn test_target_is_imported_into_foreign_builder_package() {
        let class = ClassMirror {
            name: "de.samples.Person".to_string(),
            builder: Some("de.samples.builder.PersonBuilder".to_string()),
            constructors: vec![],
            fields: vec![field("age", "int", &[])],
        };
        assert_eq!(
            BuilderPlan::new(&class).imports.to_string(),
            "[de.samples.Person]"
        );
    }
}
