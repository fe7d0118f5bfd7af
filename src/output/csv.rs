//! CSV output formatting for partition results.

use crate::models::SubnetDescriptor;

/// Format a value as a quoted, right-aligned field.
fn quoted<T: ToString>(value: T, width: usize) -> String {
    let field = format!("\"{}\"", value.to_string());
    format!("{field:>width$}")
}

/// Header row matching [`csv_row`].
pub fn csv_header() -> String {
    format!(
        "{},{},{},{},{},{},{},{},{}",
        quoted("index", 8),
        quoted("network", 17),
        quoted("first_usable", 17),
        quoted("last_usable", 17),
        quoted("broadcast", 17),
        quoted("hosts", 12),
        quoted("mask", 17),
        quoted("prefix", 8),
        quoted("wildcard", 17),
    )
}

/// One descriptor as a CSV row.
pub fn csv_row(d: &SubnetDescriptor) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{}",
        quoted(d.index, 8),
        quoted(d.network, 17),
        quoted(d.first_usable, 17),
        quoted(d.last_usable, 17),
        quoted(d.broadcast, 17),
        quoted(d.usable_hosts, 12),
        quoted(d.mask, 17),
        quoted(format!("/{}", d.prefix), 8),
        quoted(d.wildcard, 17),
    )
}

/// Print a descriptor list as CSV to stdout.
pub fn print_csv(descriptors: &[SubnetDescriptor]) {
    log::info!("#Start print_csv() subnet count = {}", descriptors.len());
    println!("{}", csv_header());
    for d in descriptors {
        println!("{}", csv_row(d));
    }
}
