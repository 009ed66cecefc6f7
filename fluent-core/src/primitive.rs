//! Primitive types and their zero values.

use std::{fmt, str::FromStr};

use crate::{constructor::ParamKind, value::Value};

/// The fixed set of language primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Char,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    /// Get the keyword for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Char => "char",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Look up a primitive by keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// The zero value passed for a parameter of this type.
    pub fn default_value(&self) -> Value {
        default_value_of_primitive_type(self.as_str())
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("'{}' is not a primitive type", s))
    }
}

/// Default value table for primitive type names.
///
/// Only `boolean`, `char`, `byte` and `short` have dedicated entries; every
/// other name falls back to the integer `0`.
pub fn default_value_of_primitive_type(name: &str) -> Value {
    match name {
        "boolean" => Value::Bool(false),
        "char" => Value::Char(0),
        "byte" => Value::Byte(0),
        "short" => Value::Short(0),
        _ => Value::Int(0),
    }
}

/// Default value for a constructor parameter of the given kind.
pub fn default_value_of_kind(kind: ParamKind) -> Value {
    match kind {
        ParamKind::Primitive(p) => p.default_value(),
        ParamKind::Reference => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_table() {
        assert_eq!(default_value_of_primitive_type("boolean"), Value::Bool(false));
        assert_eq!(default_value_of_primitive_type("char"), Value::Char(0));
        assert_eq!(default_value_of_primitive_type("byte"), Value::Byte(0));
        assert_eq!(default_value_of_primitive_type("short"), Value::Short(0));
    }

    #[test]
    fn test_default_value_falls_back_to_int_zero() {
        for name in ["int", "long", "float", "double", "quad"] {
            assert_eq!(default_value_of_primitive_type(name), Value::Int(0));
        }
    }

    #[test]
    fn test_default_value_of_kind() {
        assert_eq!(default_value_of_kind(ParamKind::Reference), Value::Null);
        assert_eq!(
            default_value_of_kind(ParamKind::Primitive(PrimitiveType::Boolean)),
            Value::Bool(false)
        );
        assert_eq!(
            default_value_of_kind(ParamKind::Primitive(PrimitiveType::Double)),
            Value::Int(0)
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!("short".parse::<PrimitiveType>(), Ok(PrimitiveType::Short));
        assert_eq!(PrimitiveType::from_name("boolean"), Some(PrimitiveType::Boolean));
        assert!(PrimitiveType::from_name("String").is_none());
        assert!(PrimitiveType::from_name("Int").is_none());
    }
}
