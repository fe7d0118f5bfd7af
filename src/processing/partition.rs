//! VLSM partitioning of an IPv4 network.
//!
//! The two public operations are pure functions of their inputs: no side
//! effects, no shared state, deterministic for identical inputs. A call
//! either returns the full descriptor sequence or fails with a typed error.

use crate::error::{PartitionError, Result};
use crate::models::{Ipv4Network, SubnetDescriptor, MAX_LENGTH, MAX_USABLE_PREFIX};

/// Bit length of `n`: position of the highest set bit, 0 for 0.
fn bit_length(n: u64) -> u8 {
    (u64::BITS - n.leading_zeros()) as u8
}

fn ensure_positive(value: u32) -> Result<()> {
    if value == 0 {
        Err(PartitionError::InvalidRequest {
            value: value.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Enumerate the aligned blocks of `new_prefix` inside `network`, in
/// ascending address order, stopping after `limit` blocks.
fn split_blocks(network: Ipv4Network, new_prefix: u8, limit: u64) -> Vec<SubnetDescriptor> {
    let block_size = 1u64 << (MAX_LENGTH - new_prefix);
    let block_count = 1u64 << (new_prefix - network.prefix);
    let base = u64::from(u32::from(network.addr));

    (0..block_count.min(limit))
        .map(|i| {
            SubnetDescriptor::from_block(
                (i + 1) as usize,
                (base + i * block_size) as u32,
                new_prefix,
            )
        })
        .collect()
}

/// Split `network` into at least `required_subnets` equal blocks and return
/// exactly the first `required_subnets` of them.
///
/// Capacity is checked against a /30 floor: each subnet must leave room for
/// a usable host pool plus network and broadcast addresses.
pub fn partition_by_subnet_count(
    network: Ipv4Network,
    required_subnets: u32,
) -> Result<Vec<SubnetDescriptor>> {
    ensure_positive(required_subnets)?;

    let available: u64 = if network.prefix > MAX_USABLE_PREFIX {
        0
    } else {
        1u64 << (MAX_USABLE_PREFIX - network.prefix)
    };
    if u64::from(required_subnets) > available {
        return Err(PartitionError::Capacity {
            requested: required_subnets,
            unit: "subnets",
            prefix: network.prefix,
        });
    }

    let bits_needed = bit_length(u64::from(required_subnets) - 1);
    let new_prefix = network.prefix + bits_needed;
    if new_prefix > MAX_USABLE_PREFIX {
        return Err(PartitionError::PrefixOverflow {
            prefix: new_prefix,
            limit: MAX_USABLE_PREFIX,
        });
    }

    log::debug!(
        "partition {network} into {required_subnets} subnets -> /{new_prefix} blocks"
    );
    Ok(split_blocks(network, new_prefix, u64::from(required_subnets)))
}

/// Split `network` into equal blocks holding at least `required_hosts` usable
/// hosts each and return **all** of them.
///
/// Two addresses per block are reserved for network and broadcast. Unlike the
/// subnet-count mode there is no truncation: the caller asked for subnets of
/// at least this size, not for a number of subnets.
pub fn partition_by_host_count(
    network: Ipv4Network,
    required_hosts: u32,
) -> Result<Vec<SubnetDescriptor>> {
    ensure_positive(required_hosts)?;

    let bits_needed = bit_length(u64::from(required_hosts) + 1);
    if bits_needed > MAX_LENGTH - network.prefix {
        // the block for that host count would be wider than the parent
        return Err(PartitionError::InsufficientSpace {
            prefix: network.prefix,
            hosts: required_hosts,
        });
    }
    let new_prefix = MAX_LENGTH - bits_needed;

    // the host pool may take at most half the parent address space
    let available = (1u64 << (MAX_LENGTH - network.prefix - 1)).saturating_sub(2);
    if u64::from(required_hosts) > available {
        return Err(PartitionError::Capacity {
            requested: required_hosts,
            unit: "hosts",
            prefix: network.prefix,
        });
    }

    log::debug!(
        "partition {network} for {required_hosts} hosts per subnet -> /{new_prefix} blocks"
    );
    Ok(split_blocks(network, new_prefix, u64::MAX))
}
