//! IPv4 network and CIDR notation utilities.
//!
//! Provides [`Ipv4Network`] for representing an IPv4 network as a normalized
//! base address plus prefix length, along with conversions between prefix
//! lengths, dotted subnet masks and wildcard masks.

use crate::error::{PartitionError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Longest prefix that still leaves room for at least one usable host and a
/// broadcast address. /31 and /32 are not treated as usable LAN subnets.
pub const MAX_USABLE_PREFIX: u8 = 30;

/// Mask bits for a prefix length. Caller guarantees `len <= 32`.
pub(crate) fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_subnet_calc::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(PartitionError::PrefixOverflow {
            prefix: len,
            limit: MAX_LENGTH,
        })
    } else {
        Ok(mask_bits(len))
    }
}

/// Convert a dotted subnet mask to its prefix length.
///
/// Rejects masks whose set bits are not contiguous from the left.
pub fn mask_to_prefix(mask: Ipv4Addr) -> Result<u8> {
    let bits = u32::from(mask);
    let len = bits.count_ones() as u8;
    if bits != mask_bits(len) {
        return Err(PartitionError::MalformedNetwork {
            input: mask.to_string(),
            reason: "subnet mask bits are not contiguous".to_string(),
        });
    }
    Ok(len)
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    if len > MAX_LENGTH {
        Err(PartitionError::PrefixOverflow {
            prefix: len,
            limit: MAX_LENGTH,
        })
    } else {
        Ok(Ipv4Addr::from(u32::from(addr) & mask_bits(len)))
    }
}

/// Get the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = prefix_mask(len)?;
    let network = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network | !mask))
}

/// Get the wildcard (inverse) mask for a prefix length.
pub fn wildcard_mask(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(!prefix_mask(len)?))
}

lazy_static! {
    // address, then "/" or whitespace, then prefix or dotted mask
    static ref RE_NETWORK: Regex =
        Regex::new(r"^\s*(\d{1,3}(?:\.\d{1,3}){3})\s*(?:/|\s+)\s*(\S+)\s*$")
            .expect("Invalid Regex?");
}

/// IPv4 network: normalized base address plus prefix length.
///
/// Construction is non-strict: host bits beyond the prefix are masked down,
/// so `192.168.1.17/28` becomes `192.168.1.16/28`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Network {
    /// The network base address (host bits zero).
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Ipv4Network {
    /// Create a new [`Ipv4Network`], masking `addr` down to its network
    /// address for the given prefix.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Network> {
        let addr = network_addr(addr, prefix)?;
        Ok(Ipv4Network { addr, prefix })
    }

    /// Parse a textual network.
    ///
    /// Accepts CIDR form (`10.0.0.0/24`), slash-mask form
    /// (`10.0.0.0/255.255.255.0`) and space-mask form
    /// (`10.0.0.0 255.255.255.0`).
    pub fn parse(input: &str) -> Result<Ipv4Network> {
        let malformed = |reason: &str| PartitionError::MalformedNetwork {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let caps = RE_NETWORK
            .captures(input)
            .ok_or_else(|| malformed("expected a.b.c.d/n or a.b.c.d mask"))?;

        let addr = Ipv4Addr::from_str(&caps[1])
            .map_err(|_| malformed("invalid IPv4 address"))?;

        let mask_part = &caps[2];
        let prefix = if mask_part.contains('.') {
            let mask = Ipv4Addr::from_str(mask_part)
                .map_err(|_| malformed("invalid subnet mask"))?;
            mask_to_prefix(mask)?
        } else {
            let len: u8 = mask_part
                .parse()
                .map_err(|_| malformed("invalid prefix length"))?;
            if len > MAX_LENGTH {
                return Err(malformed("prefix length above 32"));
            }
            len
        };

        Ipv4Network::new(addr, prefix)
    }

    /// The broadcast (highest) address of this network.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !mask_bits(self.prefix))
    }

    /// The dotted subnet mask of this network.
    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix))
    }

    /// The wildcard (inverse) mask of this network.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!mask_bits(self.prefix))
    }

    /// Total number of addresses in this network.
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Whether `addr` falls inside this network.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & mask_bits(self.prefix) == u32::from(self.addr)
    }
}

impl FromStr for Ipv4Network {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Ipv4Network> {
        Ipv4Network::parse(s)
    }
}

impl std::fmt::Display for Ipv4Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Network::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_mask() {
        assert_eq!(prefix_mask(0).unwrap(), 0x00000000);
        assert_eq!(prefix_mask(8).unwrap(), 0xFF000000);
        assert_eq!(prefix_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(prefix_mask(27).unwrap(), 0xFFFFFFE0);
        assert_eq!(prefix_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(prefix_mask(33).is_err());
    }

    #[test]
    fn test_mask_to_prefix() {
        assert_eq!(mask_to_prefix(Ipv4Addr::new(255, 255, 255, 0)).unwrap(), 24);
        assert_eq!(mask_to_prefix(Ipv4Addr::new(255, 255, 255, 224)).unwrap(), 27);
        assert_eq!(mask_to_prefix(Ipv4Addr::new(0, 0, 0, 0)).unwrap(), 0);
        assert_eq!(mask_to_prefix(Ipv4Addr::new(255, 255, 255, 255)).unwrap(), 32);
        assert!(mask_to_prefix(Ipv4Addr::new(255, 0, 255, 0)).is_err());
        assert!(mask_to_prefix(Ipv4Addr::new(0, 255, 255, 255)).is_err());
    }

    #[test]
    fn test_network_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(network_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(network_addr(ip, 32).unwrap(), ip);
        assert!(network_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
    }

    #[test]
    fn test_wildcard_mask() {
        assert_eq!(wildcard_mask(24).unwrap(), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(wildcard_mask(27).unwrap(), Ipv4Addr::new(0, 0, 0, 31));
        assert_eq!(wildcard_mask(0).unwrap(), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_parse_forms_agree() {
        let cidr = Ipv4Network::parse("10.0.0.0/24").unwrap();
        let slash_mask = Ipv4Network::parse("10.0.0.0/255.255.255.0").unwrap();
        let space_mask = Ipv4Network::parse("10.0.0.0 255.255.255.0").unwrap();
        assert_eq!(cidr, slash_mask);
        assert_eq!(cidr, space_mask);
        assert_eq!(cidr.prefix, 24);
    }

    #[test]
    fn test_parse_normalizes_host_bits() {
        let net = Ipv4Network::parse("192.168.1.17/28").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(192, 168, 1, 16));
        assert_eq!(net.prefix, 28);
        assert_eq!(net.to_string(), "192.168.1.16/28");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Ipv4Network::parse("not a network").is_err());
        assert!(Ipv4Network::parse("10.0.0.0").is_err());
        assert!(Ipv4Network::parse("10.0.0.0/33").is_err());
        assert!(Ipv4Network::parse("10.0.0.256/24").is_err());
        assert!(Ipv4Network::parse("10.0.0.0/255.0.255.0").is_err());
        assert!(Ipv4Network::parse("").is_err());
    }

    #[test]
    fn test_broadcast_and_contains() {
        let net = Ipv4Network::parse("10.1.2.0/23").unwrap();
        assert_eq!(net.broadcast(), Ipv4Addr::new(10, 1, 3, 255));
        assert!(net.contains(Ipv4Addr::new(10, 1, 2, 1)));
        assert!(net.contains(Ipv4Addr::new(10, 1, 3, 255)));
        assert!(!net.contains(Ipv4Addr::new(10, 1, 4, 0)));
    }

    #[test]
    fn test_ordering() {
        let a = Ipv4Network::parse("10.0.0.0/24").unwrap();
        let b = Ipv4Network::parse("10.0.1.0/24").unwrap();
        let c = Ipv4Network::parse("10.0.0.0/16").unwrap();
        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn test_serde_round_trip() {
        let net = Ipv4Network::parse("172.16.0.0/22").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"172.16.0.0/22\"");
        let back: Ipv4Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
    }
}
