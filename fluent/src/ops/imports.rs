//! Imports operation - import resolution for a single type.

use fluentbuilder_codegen::create_necessary_imports_for_type_in_class;

use crate::reports::ImportsReport;

/// Execute the imports operation.
pub fn imports(type_name: &str, class_name: &str) -> ImportsReport {
    let imports = create_necessary_imports_for_type_in_class(type_name, class_name);
    tracing::debug!(type_name, class_name, count = imports.len(), "resolved imports");

    ImportsReport {
        type_name: type_name.to_string(),
        class_name: class_name.to_string(),
        statements: imports.to_statements(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_report() {
        let report = imports("java.util.HashSet", "de.bluecarat.fluentbuilder.samples.Test");
        assert_eq!(
            report.statements,
            vec!["import java.util.HashSet;", "import java.util.Set;"]
        );
    }
}
