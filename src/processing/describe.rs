//! Single-network description and wildcard reporting.
//!
//! The inverse of partitioning: take one network (any address plus mask or
//! prefix) and report its derived addressing fields, or take a mask and
//! report its wildcard.

use crate::error::{PartitionError, Result};
use crate::models::{
    mask_to_prefix, prefix_mask, Ipv4Network, SubnetDescriptor, MAX_LENGTH, MAX_USABLE_PREFIX,
};
use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Describe a single network as one descriptor (index 1).
///
/// The network is already normalized by construction, so any supplied host
/// address reports the subnet it lives in.
pub fn describe_network(network: Ipv4Network) -> Result<SubnetDescriptor> {
    if network.prefix > MAX_USABLE_PREFIX {
        return Err(PartitionError::PrefixOverflow {
            prefix: network.prefix,
            limit: MAX_USABLE_PREFIX,
        });
    }
    log::debug!("describe {network}");
    Ok(SubnetDescriptor::from_block(
        1,
        u32::from(network.addr),
        network.prefix,
    ))
}

/// A subnet mask with its wildcard complement and equivalent prefix.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WildcardReport {
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub prefix: u8,
}

/// Compute the wildcard for a dotted mask (`255.255.255.0`) or a prefix
/// (`/24`).
pub fn wildcard_report(input: &str) -> Result<WildcardReport> {
    let input = input.trim();
    let prefix = if let Some(len) = input.strip_prefix('/') {
        let len: u8 = len.parse().map_err(|_| PartitionError::MalformedNetwork {
            input: input.to_string(),
            reason: "invalid prefix length".to_string(),
        })?;
        if len > MAX_LENGTH {
            return Err(PartitionError::PrefixOverflow {
                prefix: len,
                limit: MAX_LENGTH,
            });
        }
        len
    } else {
        let mask = Ipv4Addr::from_str(input).map_err(|_| PartitionError::MalformedNetwork {
            input: input.to_string(),
            reason: "expected /prefix or dotted mask".to_string(),
        })?;
        mask_to_prefix(mask)?
    };

    let mask = prefix_mask(prefix)?;
    Ok(WildcardReport {
        mask: Ipv4Addr::from(mask),
        wildcard: Ipv4Addr::from(!mask),
        prefix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_normalizes_host_address() {
        let net = Ipv4Network::parse("192.168.1.17/28").unwrap();
        let d = describe_network(net).unwrap();
        assert_eq!(d.index, 1);
        assert_eq!(d.network, Ipv4Addr::new(192, 168, 1, 16));
        assert_eq!(d.broadcast, Ipv4Addr::new(192, 168, 1, 31));
        assert_eq!(d.usable_hosts, 14);
        assert_eq!(d.wildcard, Ipv4Addr::new(0, 0, 0, 15));
    }

    #[test]
    fn test_describe_rejects_point_to_point() {
        let net = Ipv4Network::parse("10.0.0.0/31").unwrap();
        assert_eq!(
            describe_network(net).unwrap_err(),
            PartitionError::PrefixOverflow {
                prefix: 31,
                limit: MAX_USABLE_PREFIX,
            }
        );
    }

    #[test]
    fn test_wildcard_from_prefix_and_mask_agree() {
        let from_prefix = wildcard_report("/24").unwrap();
        let from_mask = wildcard_report("255.255.255.0").unwrap();
        assert_eq!(from_prefix, from_mask);
        assert_eq!(from_prefix.wildcard, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(from_prefix.prefix, 24);
    }

    #[test]
    fn test_wildcard_edges() {
        assert_eq!(
            wildcard_report("/0").unwrap().wildcard,
            Ipv4Addr::new(255, 255, 255, 255)
        );
        assert_eq!(
            wildcard_report("255.255.255.255").unwrap().wildcard,
            Ipv4Addr::new(0, 0, 0, 0)
        );
    }

    #[test]
    fn test_wildcard_rejects_bad_input() {
        assert!(wildcard_report("/33").is_err());
        assert!(wildcard_report("24").is_err());
        assert!(wildcard_report("255.0.255.0").is_err());
        assert!(wildcard_report("garbage").is_err());
    }
}
