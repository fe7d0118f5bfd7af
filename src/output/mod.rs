//! Rendering of partition results.
//!
//! The partitioner returns structured values; these modules turn them into
//! text for the caller:
//! - [`terminal`] - human-readable field blocks
//! - [`csv`] - quoted, aligned CSV rows
//! - [`json`] - serde_json rendering

mod csv;
mod json;
mod terminal;

// Re-export public functions
pub use csv::{csv_header, csv_row, print_csv};
pub use json::to_json;
pub use terminal::{print_described, print_descriptors, print_wildcard, render_descriptor};
