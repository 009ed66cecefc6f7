//! Import resolution for generated classes.

use std::fmt;

use fluentbuilder_core::{
    JAVA_LANG_PACKAGE, QualifiedName, SUPPORTED_COLLECTIONS, generic_arguments, is_primitive_type,
    raw_type,
};
use indexmap::IndexSet;

use crate::collections;

/// Deduplicated set of fully-qualified import names.
///
/// Maintains insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use fluentbuilder_codegen::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.add("java.util.HashSet");
/// imports.add("java.util.Set");
/// imports.add("java.util.HashSet");
///
/// assert_eq!(imports.to_string(), "[java.util.HashSet, java.util.Set]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    imports: IndexSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import. Returns `false` if it was already present.
    pub fn add(&mut self, name: &str) -> bool {
        self.imports.insert(name.to_string())
    }

    /// Merge another set into this one, keeping this set's order first.
    pub fn merge(&mut self, other: &ImportSet) {
        self.imports.extend(other.imports.iter().cloned());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.imports.contains(name)
    }

    /// Iterate over imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Import declarations, one per import.
    pub fn to_statements(&self) -> Vec<String> {
        self.iter().map(|name| format!("import {};", name)).collect()
    }
}

impl fmt::Display for ImportSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        write!(f, "[{}]", names.join(", "))
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.iter()
    }
}

/// Compute the imports a class named `class_name` needs to reference
/// `type_name`.
///
/// The type itself is imported unless it is visible without an import
/// (primitive, default package, `java.lang`, or the class's own package).
/// When the type is a known implementation of a supported collection, the
/// collection interface is imported as well. Generic arguments are resolved
/// the same way.
pub fn create_necessary_imports_for_type_in_class(type_name: &str, class_name: &str) -> ImportSet {
    let package = QualifiedName::parse(raw_type(class_name))
        .and_then(|name| name.package().map(str::to_string));

    let mut imports = ImportSet::new();
    collect_imports(type_name, package.as_deref(), &mut imports);
    imports
}

fn collect_imports(signature: &str, package: Option<&str>, imports: &mut ImportSet) {
    let raw = raw_type(signature);
    if needs_import(raw, package) {
        imports.add(raw);
    }

    for interface in SUPPORTED_COLLECTIONS {
        if collections::implements(raw, interface) && needs_import(interface, package) {
            imports.add(interface);
        }
    }

    for argument in generic_arguments(signature) {
        collect_imports(argument, package, imports);
    }
}

fn needs_import(raw: &str, package: Option<&str>) -> bool {
    if is_primitive_type(raw) {
        return false;
    }
    let Some(name) = QualifiedName::parse(raw) else {
        return false;
    };
    match name.package() {
        None => false,
        Some(JAVA_LANG_PACKAGE) => false,
        Some(p) => Some(p) != package,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_for_class_in_parent_package() {
        let imports = create_necessary_imports_for_type_in_class(
            "de.bluecarat.gpms.model.Usage",
            "de.bluecarat.gpms.model.module.AbstractPermissionModuleBuilder",
        );
        assert_eq!(imports.to_string(), "[de.bluecarat.gpms.model.Usage]");
    }

    #[test]
    fn test_default_imports_for_set() {
        let imports = create_necessary_imports_for_type_in_class(
            "java.util.HashSet",
            "de.bluecarat.fluentbuilder.samples.Test",
        );
        assert!(imports.contains("java.util.HashSet"));
        assert!(imports.contains("java.util.Set"));
    }

    #[test]
    fn test_default_imports_for_list() {
        let imports = create_necessary_imports_for_type_in_class(
            "java.util.ArrayList",
            "de.bluecarat.fluentbuilder.samples.Test",
        );
        assert!(imports.contains("java.util.ArrayList"));
        assert!(imports.contains("java.util.List"));
    }

    #[test]
    fn test_interface_is_not_duplicated() {
        let imports =
            create_necessary_imports_for_type_in_class("java.util.List<de.x.Foo>", "de.y.Bar");
        assert_eq!(imports.to_string(), "[java.util.List, de.x.Foo]");
    }

    #[test]
    fn test_same_package_and_implicit_types_are_skipped() {
        assert!(create_necessary_imports_for_type_in_class("de.x.Foo", "de.x.FooBuilder").is_empty());
        assert!(
            create_necessary_imports_for_type_in_class("java.lang.String", "de.x.FooBuilder")
                .is_empty()
        );
        assert!(create_necessary_imports_for_type_in_class("int", "de.x.FooBuilder").is_empty());
    }

    #[test]
    fn test_generic_arguments_are_resolved() {
        let imports = create_necessary_imports_for_type_in_class(
            "java.util.HashMap<java.lang.String, java.util.TreeSet<de.x.Tag>>",
            "de.y.FooBuilder",
        );
        assert_eq!(
            imports.to_string(),
            "[java.util.HashMap, java.util.TreeSet, java.util.Set, de.x.Tag]"
        );
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = create_necessary_imports_for_type_in_class("java.util.ArrayList", "de.y.B");
        let b = create_necessary_imports_for_type_in_class("java.util.HashSet", "de.y.B");
        a.merge(&b);
        assert_eq!(
            a.to_statements(),
            vec![
                "import java.util.ArrayList;",
                "import java.util.List;",
                "import java.util.HashSet;",
                "import java.util.Set;",
            ]
        );
    }
}
