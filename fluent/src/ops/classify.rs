//! Classify operation - type signature classification.

use fluentbuilder_core::{is_list, is_primitive_type, is_set, is_supported_collection, raw_type};

use crate::reports::ClassifyReport;

/// Execute the classify operation.
pub fn classify(signature: &str) -> ClassifyReport {
    ClassifyReport {
        signature: signature.to_string(),
        raw_type: raw_type(signature).to_string(),
        list: is_list(signature),
        set: is_set(signature),
        collection: is_supported_collection(signature),
        primitive: is_primitive_type(signature),
    }
}
