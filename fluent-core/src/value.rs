//! Runtime argument values passed to constructors.

use std::fmt;

use thiserror::Error;

/// A constructor argument.
///
/// Blank-instance synthesis only ever produces the zero value of a
/// primitive or [`Value::Null`]; the typed accessors apply the same
/// widening rules a reflective invocation would (e.g. an `Int` is accepted
/// where a `long` or `double` parameter is declared).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    /// A UTF-16 code unit.
    Char(u16),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// The absent reference.
    Null,
}

/// Error raised when an argument does not fit the declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("argument {index}: expected {expected}, found {found}")]
    Mismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("argument {index} is missing")]
    Missing { index: usize },
}

impl Value {
    /// Name of the value's type, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Char(_) => "char",
            Value::Byte(_) => "byte",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render the value as a source literal.
    pub fn to_literal(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Char(c) => format!("'\\u{:04x}'", c),
            Value::Byte(b) => format!("(byte) {}", b),
            Value::Short(s) => format!("(short) {}", s),
            Value::Int(i) => i.to_string(),
            Value::Long(l) => format!("{}L", l),
            Value::Float(f) => format!("{}f", f),
            Value::Double(d) => format!("{}d", d),
            Value::Null => "null".to_string(),
        }
    }

    pub fn as_bool(&self, index: usize) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(index, "boolean")),
        }
    }

    /// Surrogate code units do not convert on their own.
    pub fn as_char(&self, index: usize) -> Result<char, ValueError> {
        match self {
            Value::Char(c) => {
                char::from_u32(u32::from(*c)).ok_or_else(|| self.mismatch(index, "char"))
            }
            other => Err(other.mismatch(index, "char")),
        }
    }

    pub fn as_i8(&self, index: usize) -> Result<i8, ValueError> {
        match self {
            Value::Byte(b) => Ok(*b),
            other => Err(other.mismatch(index, "byte")),
        }
    }

    pub fn as_i16(&self, index: usize) -> Result<i16, ValueError> {
        match self {
            Value::Byte(b) => Ok(i16::from(*b)),
            Value::Short(s) => Ok(*s),
            other => Err(other.mismatch(index, "short")),
        }
    }

    pub fn as_i32(&self, index: usize) -> Result<i32, ValueError> {
        match self {
            Value::Byte(b) => Ok(i32::from(*b)),
            Value::Short(s) => Ok(i32::from(*s)),
            Value::Char(c) => Ok(i32::from(*c)),
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch(index, "int")),
        }
    }

    pub fn as_i64(&self, index: usize) -> Result<i64, ValueError> {
        match self {
            Value::Long(l) => Ok(*l),
            other => other
                .as_i32(index)
                .map(i64::from)
                .map_err(|_| other.mismatch(index, "long")),
        }
    }

    pub fn as_f32(&self, index: usize) -> Result<f32, ValueError> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Long(l) => Ok(*l as f32),
            other => other
                .as_i32(index)
                .map(|i| i as f32)
                .map_err(|_| other.mismatch(index, "float")),
        }
    }

    pub fn as_f64(&self, index: usize) -> Result<f64, ValueError> {
        match self {
            Value::Double(d) => Ok(*d),
            Value::Float(f) => Ok(f64::from(*f)),
            Value::Long(l) => Ok(*l as f64),
            other => other
                .as_i32(index)
                .map(f64::from)
                .map_err(|_| other.mismatch(index, "double")),
        }
    }

    /// Accept the value for a reference parameter.
    ///
    /// Only [`Value::Null`] is accepted; it maps to `None`.
    pub fn as_null<T>(&self, index: usize) -> Result<Option<T>, ValueError> {
        match self {
            Value::Null => Ok(None),
            other => Err(other.mismatch(index, "reference")),
        }
    }

    fn mismatch(&self, index: usize, expected: &'static str) -> ValueError {
        ValueError::Mismatch {
            index,
            expected,
            found: self.type_name(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_widens_to_long_and_double() {
        assert_eq!(Value::Int(0).as_i64(0), Ok(0));
        assert_eq!(Value::Int(3).as_f64(0), Ok(3.0));
        assert_eq!(Value::Int(3).as_f32(0), Ok(3.0));
    }

    #[test]
    fn test_int_does_not_narrow_to_byte() {
        assert_eq!(
            Value::Int(0).as_i8(2),
            Err(ValueError::Mismatch {
                index: 2,
                expected: "byte",
                found: "int",
            })
        );
    }

    #[test]
    fn test_char_is_a_code_unit() {
        assert_eq!(Value::Char(0x41).as_char(0), Ok('A'));
        assert_eq!(Value::Char(0x41).as_i32(0), Ok(65));
        assert!(Value::Char(0xd83d).as_char(0).is_err());
    }

    #[test]
    fn test_null_only_fits_references() {
        assert_eq!(Value::Null.as_null::<String>(0), Ok(None));
        assert!(Value::Null.as_i32(0).is_err());
        assert!(Value::Bool(false).as_null::<String>(1).is_err());
    }

    #[test]
    fn test_literals() {
        assert_eq!(Value::Null.to_literal(), "null");
        assert_eq!(Value::Bool(false).to_literal(), "false");
        assert_eq!(Value::Char(0).to_literal(), "'\\u0000'");
        assert_eq!(Value::Char(0xffff).to_literal(), "'\\uffff'");
        assert_eq!(Value::Byte(0).to_literal(), "(byte) 0");
        assert_eq!(Value::Short(0).to_literal(), "(short) 0");
        assert_eq!(Value::Int(0).to_literal(), "0");
    }
}
