//! Subnet descriptor model.

use super::ipv4::{mask_bits, Ipv4Network, MAX_LENGTH};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One subnet produced by a partition, with all derived addressing fields.
///
/// Descriptors are immutable once created; a partition request builds a fresh
/// sequence every time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// 1-based position in partition order.
    pub index: usize,
    /// Network (base) address of the block.
    pub network: Ipv4Addr,
    /// Broadcast (highest) address of the block.
    pub broadcast: Ipv4Addr,
    /// First usable host address.
    pub first_usable: Ipv4Addr,
    /// Last usable host address.
    pub last_usable: Ipv4Addr,
    /// Number of usable host addresses (block size minus network and broadcast).
    pub usable_hosts: u32,
    /// Dotted subnet mask.
    pub mask: Ipv4Addr,
    /// Wildcard (inverse) mask.
    pub wildcard: Ipv4Addr,
    /// Prefix length of the block.
    pub prefix: u8,
}

impl SubnetDescriptor {
    /// Derive a descriptor from an aligned block base. `prefix` must be at
    /// most 30 so the usable range is non-empty.
    pub(crate) fn from_block(index: usize, base: u32, prefix: u8) -> SubnetDescriptor {
        let block_size = 1u64 << (MAX_LENGTH - prefix);
        let broadcast = base + (block_size - 1) as u32;
        let mask = mask_bits(prefix);
        SubnetDescriptor {
            index,
            network: Ipv4Addr::from(base),
            broadcast: Ipv4Addr::from(broadcast),
            first_usable: Ipv4Addr::from(base + 1),
            last_usable: Ipv4Addr::from(broadcast - 1),
            usable_hosts: (block_size - 2) as u32,
            mask: Ipv4Addr::from(mask),
            wildcard: Ipv4Addr::from(!mask),
            prefix,
        }
    }

    /// The block as an [`Ipv4Network`] value.
    pub fn cidr(&self) -> Ipv4Network {
        Ipv4Network {
            addr: self.network,
            prefix: self.prefix,
        }
    }
}

impl std::fmt::Display for SubnetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}
