//! Well-known type names.

/// Fully-qualified name of the list interface.
pub const LIST_INTERFACE: &str = "java.util.List";

/// Fully-qualified name of the set interface.
pub const SET_INTERFACE: &str = "java.util.Set";

/// Package whose types are visible without an import.
pub const JAVA_LANG_PACKAGE: &str = "java.lang";

/// Collection interfaces that get element-adding setters and an auxiliary
/// interface import when a concrete implementation is referenced.
///
/// Order matters: it is the order auxiliary imports are added in.
pub const SUPPORTED_COLLECTIONS: [&str; 2] = [SET_INTERFACE, LIST_INTERFACE];
