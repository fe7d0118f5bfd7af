//! Caller-held calculation history.
//!
//! The partitioner itself is stateless; callers that want a history of past
//! calculations keep a [`CalculationLog`] and append a record per request.
//! The log lives in memory only.

use super::ipv4::Ipv4Network;
use chrono::Local;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which sizing directive a partition request used.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Split into at least the requested number of subnets.
    SubnetCount,
    /// Split into subnets holding at least the requested host count.
    HostCount,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::SubnetCount => write!(f, "subnets"),
            Mode::HostCount => write!(f, "hosts"),
        }
    }
}

/// One completed calculation, as a plain value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalculationRecord {
    /// Local timestamp, formatted when the record is created.
    pub when: String,
    /// The parent network that was partitioned.
    pub network: Ipv4Network,
    /// Sizing mode of the request.
    pub mode: Mode,
    /// The sizing value (subnet count or host count).
    pub value: u32,
    /// How many descriptors the partition produced.
    pub subnet_count: usize,
}

impl CalculationRecord {
    /// Record a completed calculation, stamped with the current local time.
    pub fn new(network: Ipv4Network, mode: Mode, value: u32, subnet_count: usize) -> Self {
        CalculationRecord {
            when: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            network,
            mode,
            value,
            subnet_count,
        }
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}: {}) -> {} subnets",
            self.when, self.network, self.mode, self.value, self.subnet_count
        )
    }
}

/// In-memory list of calculation records, newest last.
#[derive(Debug, Default, Clone)]
pub struct CalculationLog {
    pub records: Vec<CalculationRecord>,
}

impl CalculationLog {
    /// Create a new empty log.
    pub fn new() -> CalculationLog {
        CalculationLog {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn add(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for CalculationLog {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "CalculationLog ({} records):", self.records.len())?;
        write!(
            f,
            "{}",
            self.records.iter().map(|r| format!("  - {r}")).join("\n")
        )
    }
}
