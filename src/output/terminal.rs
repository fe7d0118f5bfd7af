//! Human-readable terminal output.
//!
//! Mirrors the per-subnet report layout of the interactive front end: one
//! indented field block per descriptor.

use crate::models::{Ipv4Network, SubnetDescriptor};
use crate::processing::WildcardReport;
use colored::Colorize;

/// Render one descriptor as an indented field block.
pub fn render_descriptor(d: &SubnetDescriptor) -> String {
    format!(
        "  network:      {network}\n\
         \x20 broadcast:    {broadcast}\n\
         \x20 host range:   {first} - {last}\n\
         \x20 usable hosts: {hosts}\n\
         \x20 mask:         {mask} (/{prefix})\n\
         \x20 wildcard:     {wildcard}",
        network = d.network,
        broadcast = d.broadcast,
        first = d.first_usable,
        last = d.last_usable,
        hosts = d.usable_hosts,
        mask = d.mask,
        prefix = d.prefix,
        wildcard = d.wildcard,
    )
}

/// Print a partition result: parent summary line, then one block per subnet.
pub fn print_descriptors(parent: &Ipv4Network, descriptors: &[SubnetDescriptor]) {
    println!(
        "{} {} -> {} subnets of /{}",
        "Partition of".bold(),
        parent.to_string().cyan(),
        descriptors.len(),
        descriptors.first().map(|d| d.prefix).unwrap_or(parent.prefix)
    );
    for d in descriptors {
        println!();
        println!("{}", format!("Subnet {} ({})", d.index, d).bold());
        println!("{}", render_descriptor(d));
    }
}

/// Print a single described network.
pub fn print_described(d: &SubnetDescriptor) {
    println!("{}", format!("Network {}", d).bold());
    println!("{}", render_descriptor(d));
}

/// Print a wildcard report.
pub fn print_wildcard(report: &WildcardReport) {
    println!(
        "mask {} (/{}) -> wildcard {}",
        report.mask,
        report.prefix,
        report.wildcard.to_string().cyan()
    );
}
