//! Error types for the subnet partitioner.
//!
//! Every operation either returns a result or fails immediately with one of
//! these errors; there is no internal recovery and no partial results.

use thiserror::Error;

/// Result type alias for partitioner operations.
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Errors surfaced by parsing and partitioning.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PartitionError {
    #[error("malformed network {input:?}: {reason}")]
    MalformedNetwork { input: String, reason: String },

    #[error("sizing value {value:?} is not a positive integer")]
    InvalidRequest { value: String },

    #[error("cannot create {requested} {unit} in a /{prefix} network")]
    Capacity {
        requested: u32,
        unit: &'static str,
        prefix: u8,
    },

    #[error("prefix /{prefix} exceeds /{limit}")]
    PrefixOverflow { prefix: u8, limit: u8 },

    #[error("a /{prefix} network is too small for subnets with {hosts} hosts")]
    InsufficientSpace { prefix: u8, hosts: u32 },
}
