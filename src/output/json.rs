//! JSON output for partition results.

use crate::models::SubnetDescriptor;

/// Render a descriptor list as pretty-printed JSON.
pub fn to_json(descriptors: &[SubnetDescriptor]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(descriptors)
}
