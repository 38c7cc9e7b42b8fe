//! # Bogonlist - Unallocated-IPv4 blacklist generator
//!
//! This library derives the set of IPv4 address ranges that are not publicly
//! allocated to any Autonomous System, expressed as minimal CIDR blocks, so
//! that traffic from those ranges can be treated as suspicious.
//!
//! ## Overview
//!
//! The input is an already-sorted table of `(CIDR-or-range-start, ASN)`
//! records covering IPv4 space in ascending order (by default APNIC's
//! combined raw table). Every address not covered by an allocation record is
//! decomposed into maximal CIDR blocks and written to a blacklist file, one
//! block per line, except for a fixed set of well-known private/reserved
//! blocks which are suppressed by exact match.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `cidr`: address, CIDR block and interval primitives
//! - `gap`: greedy largest-first decomposition of a gap into CIDR blocks
//! - `reserved`: the private/reserved block denylist
//! - `feed`: the record-driven processor that finds gaps and fills the sink
//! - `source`: allocation feed retrieval (HTTP or local file)
//! - `sink`: blacklist output
//!
//! Data flows one way: records → feed processor → gap intervals → block
//! decomposition → reserved filter → output sink. The only state carried
//! across records is the cursor marking the next unallocated address.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bogonlist::feed::FeedProcessor;
//! use bogonlist::sink::FileSink;
//! use std::io::BufRead;
//!
//! let sink = FileSink::create(std::path::Path::new("blacklist.txt"))?;
//! let mut processor = FeedProcessor::new(sink);
//! for line in std::io::stdin().lock().lines() {
//!     processor.process_line(&line?)?;
//! }
//! let stats = processor.finish()?;
//! println!("{} blocks written", stats.blocks_written);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cidr;
pub mod feed;
pub mod gap;
pub mod reserved;
pub mod sink;
pub mod source;
