//! Known implementations of the supported collection interfaces.

use fluentbuilder_core::{LIST_INTERFACE, SET_INTERFACE};

const SET_IMPLEMENTATIONS: &[&str] = &[
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.TreeSet",
    "java.util.SortedSet",
    "java.util.NavigableSet",
    "java.util.EnumSet",
    "java.util.concurrent.CopyOnWriteArraySet",
    "java.util.concurrent.ConcurrentSkipListSet",
];

const LIST_IMPLEMENTATIONS: &[&str] = &[
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Vector",
    "java.util.Stack",
    "java.util.concurrent.CopyOnWriteArrayList",
];

/// Check whether `raw_type` is `interface` or a known implementation of it.
///
/// Only the supported collection interfaces are known; anything else
/// implements nothing.
pub fn implements(raw_type: &str, interface: &str) -> bool {
    if raw_type == interface {
        return true;
    }
    let implementations = match interface {
        SET_INTERFACE => SET_IMPLEMENTATIONS,
        LIST_INTERFACE => LIST_IMPLEMENTATIONS,
        _ => return false,
    };
    implementations.contains(&raw_type)
}
