//! Denylist of well-known private/reserved blocks.
//!
//! Matching is exact-block equality, not subsumption: a sub-block of a
//! reserved range passes the filter. Allocation feeds pre-carve these
//! standard ranges, so in practice the decomposer regenerates exactly these
//! shapes when one is unallocated; whether partial overlaps should also be
//! suppressed is an open upstream question and the behavior is preserved
//! as-is here.

use crate::cidr::CidrBlock;

/// Blocks never written to the blacklist, regardless of allocation status.
pub const RESERVED_BLOCKS: [CidrBlock; 6] = [
    // RFC 1918 private ranges
    CidrBlock { base: 0x0A00_0000, prefix: 8 },  // 10.0.0.0/8
    CidrBlock { base: 0xAC10_0000, prefix: 12 }, // 172.16.0.0/12
    CidrBlock { base: 0xC0A8_0000, prefix: 16 }, // 192.168.0.0/16
    // CGNAT
    CidrBlock { base: 0x6440_0000, prefix: 10 }, // 100.64.0.0/10
    // Loopback
    CidrBlock { base: 0x7F00_0000, prefix: 8 },  // 127.0.0.0/8
    // DS-Lite
    CidrBlock { base: 0xC000_0000, prefix: 24 }, // 192.0.0.0/24
];

/// True iff `block` is exactly one of the reserved blocks.
pub fn is_reserved(block: &CidrBlock) -> bool {
    RESERVED_BLOCKS.contains(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denylist_entries_match_their_notation() {
        let expected = [
            "10.0.0.0/8",
            "172.16.0.0/12",
            "192.168.0.0/16",
            "100.64.0.0/10",
            "127.0.0.0/8",
            "192.0.0.0/24",
        ];
        for (block, notation) in RESERVED_BLOCKS.iter().zip(expected) {
            assert_eq!(block.to_string(), notation);
            assert!(is_reserved(block));
        }
    }

    #[test]
    fn test_sub_blocks_are_not_filtered() {
        // Exact-match only: half of 10/8 is still emitted.
        assert!(!is_reserved(&"10.0.0.0/9".parse().unwrap()));
        assert!(!is_reserved(&"192.168.0.0/17".parse().unwrap()));
    }

    #[test]
    fn test_unrelated_blocks_pass() {
        assert!(!is_reserved(&"1.0.0.0/8".parse().unwrap()));
        assert!(!is_reserved(&"11.0.0.0/8".parse().unwrap()));
    }
}
