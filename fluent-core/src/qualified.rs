//! Fully-qualified type names.

use std::fmt;

/// A fully-qualified type name split into package and simple name.
///
/// Generic arguments are not part of a qualified name; use
/// [`raw_type`](crate::raw_type) first when starting from a signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    package: Option<String>,
    simple_name: String,
}

impl QualifiedName {
    /// Split a dotted name. Returns `None` if any segment is not a valid
    /// identifier.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if !name.split('.').all(is_valid_identifier) {
            return None;
        }
        Some(match name.rsplit_once('.') {
            Some((package, simple)) => Self {
                package: Some(package.to_string()),
                simple_name: simple.to_string(),
            },
            None => Self {
                package: None,
                simple_name: name.to_string(),
            },
        })
    }

    /// The package, or `None` for a name in the default package.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Name of a sibling type in the same package.
    pub fn sibling(&self, simple_name: &str) -> QualifiedName {
        QualifiedName {
            package: self.package.clone(),
            simple_name: simple_name.to_string(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(package) => write!(f, "{}.{}", package, self.simple_name),
            None => f.write_str(&self.simple_name),
        }
    }
}

/// Check whether `s` is a valid identifier segment.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified() {
        let name = QualifiedName::parse("de.bluecarat.gpms.model.Usage").unwrap();
        assert_eq!(name.package(), Some("de.bluecarat.gpms.model"));
        assert_eq!(name.simple_name(), "Usage");
        assert_eq!(name.to_string(), "de.bluecarat.gpms.model.Usage");
    }

    #[test]
    fn test_parse_default_package() {
        let name = QualifiedName::parse("Usage").unwrap();
        assert_eq!(name.package(), None);
        assert_eq!(name.to_string(), "Usage");
    }

    #[test]
    fn test_parse_rejects_invalid_segments() {
        assert!(QualifiedName::parse("").is_none());
        assert!(QualifiedName::parse("de..Usage").is_none());
        assert!(QualifiedName::parse("de.1model.Usage").is_none());
        assert!(QualifiedName::parse("java.util.List<String>").is_none());
    }

    #[test]
    fn test_sibling() {
        let name = QualifiedName::parse("de.samples.Person").unwrap();
        assert_eq!(name.sibling("PersonBuilder").to_string(), "de.samples.PersonBuilder");
    }
}
