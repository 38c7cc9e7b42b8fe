//! Decomposition of an unallocated address interval into CIDR blocks.
//!
//! This is the algorithmic heart of the tool: given a closed interval
//! `[start, end]`, emit the minimal sequence of CIDR blocks whose union is
//! exactly the interval. The scan is greedy largest-block-first: at each
//! position, the shortest prefix that is both alignment-valid and contained
//! in the remaining span wins, then the position advances past that block.

use crate::cidr::{host_mask, CidrBlock, Interval};

/// Decompose an interval into maximal CIDR blocks, in ascending order.
///
/// The returned iterator is lazy and cheap to clone (restartable). An empty
/// interval (`start > end`) yields nothing; the nominal pipeline never
/// produces one, but the operation stays well-defined as a no-op.
pub fn decompose(interval: Interval) -> GapBlocks {
    GapBlocks {
        current: u64::from(interval.start),
        end: u64::from(interval.end),
    }
}

/// Iterator over the CIDR blocks covering a gap interval.
///
/// Positions are tracked as `u64` so that advancing past 255.255.255.255
/// terminates instead of wrapping.
#[derive(Debug, Clone)]
pub struct GapBlocks {
    current: u64,
    end: u64,
}

impl Iterator for GapBlocks {
    type Item = CidrBlock;

    fn next(&mut self) -> Option<CidrBlock> {
        if self.current > self.end {
            return None;
        }

        // Shortest prefix (largest block) that starts aligned at `current`
        // and does not run past the end of the interval. Prefix 32 always
        // qualifies, so the scan terminates with progress guaranteed.
        let mut prefix: u8 = 0;
        while prefix < 32 {
            let hosts = u64::from(host_mask(prefix));
            if self.current & hosts == 0 && self.current | hosts <= self.end {
                break;
            }
            prefix += 1;
        }

        let block = CidrBlock {
            base: self.current as u32,
            prefix,
        };
        self.current += block.size();
        Some(block)
    }
}
