use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the source content and filename so error factories don't need
/// them passed separately.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Find the span of the `n`th quoted occurrence of `value`.
    pub fn find_span(&self, value: &str, n: usize) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", value);
        self.src
            .match_indices(&quoted)
            .nth(n)
            // +1 to skip the opening quote
            .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(&self, message: impl Into<String>, value: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: value.and_then(|v| self.find_span(v, 0)),
            message: message.into(),
        })
    }

    pub fn invalid_class_name_error(&self, name: &str) -> Box<Error> {
        Box::new(Error::InvalidClassName {
            src: self.named_source(),
            span: self.find_span(name, 0),
            name: name.to_string(),
        })
    }

    pub fn duplicate_class_error(&self, name: &str) -> Box<Error> {
        Box::new(Error::DuplicateClass {
            src: self.named_source(),
            first_span: self.find_span(name, 0),
            second_span: self.find_span(name, 1),
            name: name.to_string(),
        })
    }

    pub fn duplicate_field_error(&self, class: &str, field: &str, span: Range<usize>) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            span: (!span.is_empty()).then(|| SourceSpan::from(span)),
            class: class.to_string(),
            field: field.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a fluent.toml describing the target classes"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse class model")]
    #[diagnostic(code(fluent::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(fluent::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid class name '{name}'")]
    #[diagnostic(
        code(fluent::invalid_class_name),
        help("use a dotted name made of identifiers, e.g. 'com.example.Person'")
    )]
    InvalidClassName {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a qualified name")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("class '{name}' is declared more than once")]
    #[diagnostic(code(fluent::duplicate_class))]
    DuplicateClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("duplicate field '{field}' in class '{class}'")]
    #[diagnostic(code(fluent::duplicate_field), help("field names must be unique within a class"))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate field")]
        span: Option<SourceSpan>,
        class: String,
        field: String,
    },

    #[error("class name '{name}' is ambiguous: {}", .candidates.join(", "))]
    #[diagnostic(code(fluent::ambiguous_class), help("use the fully-qualified class name"))]
    AmbiguousClass { name: String, candidates: Vec<String> },
}
