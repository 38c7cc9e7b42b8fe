//! IPv4 address and CIDR block primitives.
//!
//! Addresses are plain `u32` values in numeric (host-independent) form; a
//! [`CidrBlock`] pairs an aligned base address with a prefix length. All
//! arithmetic that could step past the end of IPv4 space widens to `u64`.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 address as an unsigned 32-bit numeric value.
pub type Address = u32;

/// Lowest routable unicast boundary (1.0.0.0), the initial cursor position.
pub const FIRST_UNICAST: Address = 0x0100_0000;

/// Errors that can occur when parsing a CIDR block or bare address
#[derive(Debug, thiserror::Error)]
pub enum CidrParseError {
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),
}

/// A contiguous, power-of-two-aligned range of IPv4 addresses.
///
/// Invariant: `base` has no bits set below the prefix boundary, so the
/// block covers exactly `[base, base | host_mask(prefix)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrBlock {
    pub base: Address,
    pub prefix: u8,
}

/// Mask of the host bits for a given prefix length (0..=32).
pub const fn host_mask(prefix: u8) -> u32 {
    if prefix == 0 {
        u32::MAX
    } else {
        (1u32 << (32 - prefix)) - 1
    }
}

impl CidrBlock {
    /// Build a block from a base address and prefix length, normalizing the
    /// base to its network address (host bits cleared).
    pub fn normalized(address: Address, prefix: u8) -> Self {
        Self {
            base: address & !host_mask(prefix),
            prefix,
        }
    }

    /// Last address covered by this block.
    pub fn last_address(&self) -> Address {
        self.base | host_mask(self.prefix)
    }

    /// Number of addresses in this block.
    pub fn size(&self) -> u64 {
        1u64 << (32 - self.prefix)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.base), self.prefix)
    }
}

impl FromStr for CidrBlock {
    type Err = CidrParseError;

    /// Parse `a.b.c.d/prefix` notation. A bare address is treated as a /32.
    /// The base is normalized to the network address, matching how the feed
    /// records describe whole announced blocks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_part, prefix) = match s.split_once('/') {
            Some((addr, len)) => {
                let prefix: u8 = len
                    .parse()
                    .map_err(|_| CidrParseError::InvalidPrefix(len.to_string()))?;
                if prefix > 32 {
                    return Err(CidrParseError::InvalidPrefix(len.to_string()));
                }
                (addr, prefix)
            }
            None => (s, 32),
        };

        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| CidrParseError::InvalidAddress(addr_part.to_string()))?;

        Ok(Self::normalized(u32::from(addr), prefix))
    }
}

/// A closed interval `[start, end]` of unallocated addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: Address,
    pub end: Address,
}

impl Interval {
    pub fn new(start: Address, end: Address) -> Self {
        Self { start, end }
    }

    /// True when the interval covers no addresses (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_mask_boundaries() {
        assert_eq!(host_mask(0), u32::MAX);
        assert_eq!(host_mask(8), 0x00FF_FFFF);
        assert_eq!(host_mask(24), 0x0000_00FF);
        assert_eq!(host_mask(32), 0);
    }

    #[test]
    fn test_parse_cidr_notation() {
        let block: CidrBlock = "10.0.0.0/8".parse().unwrap();
        assert_eq!(block.base, 0x0A00_0000);
        assert_eq!(block.prefix, 8);
        assert_eq!(block.last_address(), 0x0AFF_FFFF);
    }

    #[test]
    fn test_parse_bare_address_is_host_route() {
        let block: CidrBlock = "1.0.0.0".parse().unwrap();
        assert_eq!(block.base, FIRST_UNICAST);
        assert_eq!(block.prefix, 32);
        assert_eq!(block.size(), 1);
    }

    #[test]
    fn test_parse_normalizes_host_bits() {
        // Records sometimes carry an in-block address; the block extent is
        // still the containing network.
        let block: CidrBlock = "1.2.3.5/24".parse().unwrap();
        assert_eq!(block.to_string(), "1.2.3.0/24");
        assert_eq!(block.last_address(), u32::from(Ipv4Addr::new(1, 2, 3, 255)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-an-ip/8".parse::<CidrBlock>().is_err());
        assert!("1.2.3.4/33".parse::<CidrBlock>().is_err());
        assert!("1.2.3.4/x".parse::<CidrBlock>().is_err());
        assert!("".parse::<CidrBlock>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let block: CidrBlock = "192.0.0.0/24".parse().unwrap();
        assert_eq!(block.to_string(), "192.0.0.0/24");
    }

    #[test]
    fn test_interval_emptiness() {
        assert!(Interval::new(10, 5).is_empty());
        assert!(!Interval::new(5, 5).is_empty());
        assert!(!Interval::new(5, 10).is_empty());
    }
}
