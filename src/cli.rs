//! Command-line argument parsing.
//!
//! Turns raw argv into a typed [`Invocation`] so `main.rs` stays thin.

use crate::error::{PartitionError, Result};
use crate::models::{Ipv4Network, Mode};
use std::error::Error;

/// Usage text printed on argument errors.
pub const USAGE: &str = "\
usage:
  vlsm-subnet-calc <network> subnets <count> [--csv|--json]
  vlsm-subnet-calc <network> hosts <count> [--csv|--json]
  vlsm-subnet-calc describe <network> [--csv|--json]
  vlsm-subnet-calc wildcard </prefix | mask>

  <network> is a.b.c.d/n, a.b.c.d/m.m.m.m, or two arguments: a.b.c.d m.m.m.m";

/// How the result should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Csv,
    Json,
}

/// A parsed calculator request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Partition {
        network: Ipv4Network,
        mode: Mode,
        value: u32,
    },
    Describe {
        network: Ipv4Network,
    },
    Wildcard {
        mask: String,
    },
}

/// A request plus its output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub request: Request,
    pub format: OutputFormat,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args<I>(args: I) -> std::result::Result<Invocation, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut format = OutputFormat::Terminal;
    for arg in args {
        match arg.as_str() {
            "--csv" => format = OutputFormat::Csv,
            "--json" => format = OutputFormat::Json,
            _ => positional.push(arg),
        }
    }

    let request = parse_request(&positional)?;
    Ok(Invocation { request, format })
}

fn parse_request(args: &[String]) -> std::result::Result<Request, Box<dyn Error>> {
    match args {
        [cmd, mask] if cmd == "wildcard" => Ok(Request::Wildcard { mask: mask.clone() }),
        [cmd, network] if cmd == "describe" => Ok(Request::Describe {
            network: Ipv4Network::parse(network)?,
        }),
        [cmd, addr, mask] if cmd == "describe" => Ok(Request::Describe {
            network: Ipv4Network::parse(&format!("{addr} {mask}"))?,
        }),
        [network, mode, value] => Ok(Request::Partition {
            network: Ipv4Network::parse(network)?,
            mode: parse_mode(mode)?,
            value: parse_value(value)?,
        }),
        [addr, mask, mode, value] => Ok(Request::Partition {
            network: Ipv4Network::parse(&format!("{addr} {mask}"))?,
            mode: parse_mode(mode)?,
            value: parse_value(value)?,
        }),
        _ => Err(format!("expected a network and a sizing directive, got {args:?}").into()),
    }
}

fn parse_mode(arg: &str) -> std::result::Result<Mode, Box<dyn Error>> {
    match arg {
        "subnets" => Ok(Mode::SubnetCount),
        "hosts" => Ok(Mode::HostCount),
        other => Err(format!("unknown sizing directive {other:?}, expected 'subnets' or 'hosts'").into()),
    }
}

fn parse_value(arg: &str) -> Result<u32> {
    match arg.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(PartitionError::InvalidRequest {
            value: arg.to_string(),
        }),
    }
}
