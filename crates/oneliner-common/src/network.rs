//! CIDR derivation
//!
//! Subnets are carved out of the VPC CIDR one `/24` per availability zone,
//! numbered from 1 in zone-enumeration order. With the default
//! `192.168.0.0/16` VPC the first subnet is `192.168.1.0/24`.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Errors from CIDR construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidrError {
    /// Zone index outside the range of `/24` blocks the VPC holds
    #[error("subnet index {index} is out of range (expected 1..={max})")]
    IndexOutOfRange { index: usize, max: usize },

    /// VPC CIDR is malformed or too small to hold a `/24`
    #[error("'{0}' is not an IPv4 CIDR with a prefix of /24 or shorter")]
    InvalidCidr(String),

    /// Discovered address is not a dotted IPv4 address
    #[error("'{0}' is not an IPv4 address")]
    NotIpv4(String),
}

/// Split `a.b.c.d/n` into its network address and prefix length.
///
/// Host bits below the prefix are cleared, so `10.0.5.0/16` reads as
/// `10.0.0.0/16`. Only prefixes that leave room for a `/24` are accepted.
pub fn parse_vpc_cidr(cidr: &str) -> Result<(Ipv4Addr, u8), CidrError> {
    let invalid = || CidrError::InvalidCidr(cidr.to_string());
    let (addr, prefix) = cidr.trim().split_once('/').ok_or_else(invalid)?;
    let addr: Ipv4Addr = addr.parse().map_err(|_| invalid())?;
    let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
    if prefix > 24 {
        return Err(invalid());
    }
    let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
    Ok((Ipv4Addr::from(u32::from(addr) & mask), prefix))
}

/// CIDR of the subnet for the 1-based zone `index` inside `vpc_cidr`.
///
/// Block `index` is the `index`-th `/24` after the network address, so a
/// `/16` VPC allows indexes 1..=255.
pub fn subnet_cidr(vpc_cidr: &str, index: usize) -> Result<String, CidrError> {
    let (network, prefix) = parse_vpc_cidr(vpc_cidr)?;
    let max = (1usize << (24 - prefix)) - 1;
    if index == 0 || index > max {
        return Err(CidrError::IndexOutOfRange { index, max });
    }
    // index < 2^(24 - prefix) so the shifted offset stays inside the host bits
    let offset = (index as u32) << 8;
    Ok(format!("{}/24", Ipv4Addr::from(u32::from(network) | offset)))
}

/// Pair each zone with its subnet CIDR, preserving zone order.
pub fn subnet_plan<S: AsRef<str>>(
    vpc_cidr: &str,
    zones: &[S],
) -> Result<Vec<(String, String)>, CidrError> {
    zones
        .iter()
        .enumerate()
        .map(|(i, zone)| Ok((zone.as_ref().to_string(), subnet_cidr(vpc_cidr, i + 1)?)))
        .collect()
}

/// Single-host CIDR (`<ip>/32`) for an ingress rule source.
///
/// Surrounding whitespace (the echo service ends its body with a newline) is
/// dropped; anything that is not an IPv4 address is rejected so a rule can
/// never open a wider range than one host.
pub fn host_cidr(ip: &str) -> Result<String, CidrError> {
    let trimmed = ip.trim();
    let addr: Ipv4Addr = trimmed
        .parse()
        .map_err(|_| CidrError::NotIpv4(trimmed.to_string()))?;
    Ok(format!("{addr}/32"))
}
