//! Output sink for the generated blacklist.
//!
//! The blacklist file is recreated fresh on every run and written as one
//! CIDR block per line. Write failures are fatal to the run; the sink must
//! be finished (flushed) before the process signals completion, otherwise
//! the tail of the list may be lost.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cidr::CidrBlock;

/// Errors that can occur while writing the blacklist
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write blacklist: {0}")]
    Write(#[from] std::io::Error),
}

/// Destination for blacklist blocks, written in ascending address order.
pub trait BlockSink {
    fn write_block(&mut self, block: &CidrBlock) -> Result<(), SinkError>;

    /// Flush and finalize the sink. Must be called exactly once, after the
    /// last block.
    fn finish(&mut self) -> Result<(), SinkError>;
}

impl<T: BlockSink + ?Sized> BlockSink for &mut T {
    fn write_block(&mut self, block: &CidrBlock) -> Result<(), SinkError> {
        (**self).write_block(block)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        (**self).finish()
    }
}

/// File-backed sink, truncating the target at creation.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl BlockSink for FileSink {
    fn write_block(&mut self, block: &CidrBlock) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", block)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_sink_writes_one_block_per_line() {
        let file = NamedTempFile::new().unwrap();
        let mut sink = FileSink::create(file.path()).unwrap();
        sink.write_block(&"1.0.0.4/30".parse().unwrap()).unwrap();
        sink.write_block(&"1.0.0.8/29".parse().unwrap()).unwrap();
        sink.finish().unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "1.0.0.4/30\n1.0.0.8/29\n");
    }

    #[test]
    fn test_file_sink_truncates_existing_output() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "stale contents\n").unwrap();

        let mut sink = FileSink::create(file.path()).unwrap();
        sink.finish().unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.is_empty());
    }
}
