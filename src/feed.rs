//! Allocation feed processing.
//!
//! Consumes the ordered `(address-or-CIDR, ASN)` records, tracks the next
//! unallocated address with a single cursor, and turns every gap between
//! consecutive allocations into blacklist blocks. Malformed lines are logged
//! and skipped; a broken internal invariant (cursor overflow) is fatal.

use log::{debug, warn};

use crate::cidr::{Address, CidrBlock, Interval, FIRST_UNICAST};
use crate::gap::decompose;
use crate::reserved::is_reserved;
use crate::sink::{BlockSink, SinkError};

/// Synthetic final record: the start of multicast space, pushed once when the
/// feed closes to flush the gap after the last real allocation.
pub const END_OF_FEED_SENTINEL: CidrBlock = CidrBlock {
    base: 0xE000_0000, // 224.0.0.0
    prefix: 32,
};

/// Errors that abort feed processing
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("address cursor advanced past the end of IPv4 space")]
    CursorOverflow,
}

/// Tracks the next unallocated address boundary as records are consumed.
///
/// Monotonically non-decreasing over a run, given the sorted non-overlapping
/// input the feed guarantees.
#[derive(Debug)]
struct AddressCursor {
    next_free: Address,
}

impl AddressCursor {
    fn new() -> Self {
        Self {
            next_free: FIRST_UNICAST,
        }
    }

    fn next_free(&self) -> Address {
        self.next_free
    }

    /// Move past the end of the just-processed allocation. Overflow past the
    /// last IPv4 address means an upstream invariant broke; it is never
    /// silently corrected.
    fn advance(&mut self, boundary: Address) -> Result<(), FeedError> {
        self.next_free = boundary.checked_add(1).ok_or(FeedError::CursorOverflow)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedState {
    AwaitingRecords,
    Processing,
    Draining,
    Done,
}

/// Statistics from a completed run, for the final log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedStats {
    pub records: u64,
    pub skipped_lines: u64,
    pub blocks_written: u64,
    pub blocks_reserved: u64,
}

/// Drives the record-to-blacklist pipeline: cursor, gap decomposition,
/// reserved filtering, and the output sink.
pub struct FeedProcessor<S: BlockSink> {
    cursor: AddressCursor,
    sink: S,
    state: FeedState,
    stats: FeedStats,
}

impl<S: BlockSink> FeedProcessor<S> {
    pub fn new(sink: S) -> Self {
        Self {
            cursor: AddressCursor::new(),
            sink,
            state: FeedState::AwaitingRecords,
            stats: FeedStats::default(),
        }
    }

    /// Handle one feed line. Lines that do not parse as
    /// `<address-or-CIDR><TAB><asn>` are warned about and skipped; only sink
    /// failures and invariant violations are fatal.
    pub fn process_line(&mut self, line: &str) -> Result<(), FeedError> {
        debug_assert!(matches!(
            self.state,
            FeedState::AwaitingRecords | FeedState::Processing
        ));

        let Some((block, asn)) = parse_record(line) else {
            if !line.trim().is_empty() {
                warn!("Skipping malformed feed line: {:?}", line);
                self.stats.skipped_lines += 1;
            }
            return Ok(());
        };

        debug!("Processing allocation {} (ASN {})", block, asn);
        self.state = FeedState::Processing;
        self.stats.records += 1;
        self.handle_record(block)
    }

    /// Blacklist the gap (if any) between the cursor and this record, then
    /// move the cursor past the record's own block, which is never
    /// blacklisted.
    fn handle_record(&mut self, block: CidrBlock) -> Result<(), FeedError> {
        if block.base > self.cursor.next_free() {
            let gap = Interval::new(self.cursor.next_free(), block.base - 1);
            for candidate in decompose(gap) {
                if is_reserved(&candidate) {
                    self.stats.blocks_reserved += 1;
                    continue;
                }
                self.sink.write_block(&candidate)?;
                self.stats.blocks_written += 1;
            }
        }

        self.cursor.advance(block.last_address())
    }

    /// Close the feed: synthesize the multicast sentinel to flush the
    /// trailing gap, then finalize the sink.
    pub fn finish(mut self) -> Result<FeedStats, FeedError> {
        self.state = FeedState::Draining;
        self.handle_record(END_OF_FEED_SENTINEL)?;
        self.state = FeedState::Done;
        self.sink.finish()?;
        Ok(self.stats)
    }
}

/// Split a feed line into its allocation block and ASN fields.
///
/// Returns `None` for lines missing either tab-separated field or carrying
/// an unparsable address. The ASN is opaque and unvalidated.
fn parse_record(line: &str) -> Option<(CidrBlock, &str)> {
    let mut fields = line.trim().split('\t');
    let address = fields.next()?.trim();
    let asn = fields.next()?.trim();
    if address.is_empty() || asn.is_empty() {
        return None;
    }

    let block: CidrBlock = address.parse().ok()?;
    Some((block, asn))
}
