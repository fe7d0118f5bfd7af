//! VLSM subnet partitioning calculator.
//!
//! Splits an IPv4 network into subnets, sized either by a required subnet
//! count or by a required host count per subnet, and derives the addressing
//! fields of each block (network, broadcast, usable range, mask, wildcard).
//! All calculator operations are pure, synchronous functions; the binary is
//! a thin front end over this library.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{PartitionError, Result};
pub use models::{Ipv4Network, Mode, SubnetDescriptor};
pub use processing::{
    describe_network, partition_by_host_count, partition_by_subnet_count, wildcard_report,
};

/// Run a partition request in the given mode.
pub fn partition(network: Ipv4Network, mode: Mode, value: u32) -> Result<Vec<SubnetDescriptor>> {
    match mode {
        Mode::SubnetCount => partition_by_subnet_count(network, value),
        Mode::HostCount => partition_by_host_count(network, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_dispatch() {
        let net = Ipv4Network::parse("192.168.1.0/24").unwrap();
        assert_eq!(
            partition(net, Mode::SubnetCount, 5).unwrap(),
            partition_by_subnet_count(net, 5).unwrap()
        );
        assert_eq!(
            partition(net, Mode::HostCount, 30).unwrap(),
            partition_by_host_count(net, 30).unwrap()
        );
    }
}
