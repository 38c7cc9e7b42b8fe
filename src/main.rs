use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::io::BufRead;
use std::path::PathBuf;

use bogonlist::feed::FeedProcessor;
use bogonlist::sink::FileSink;
use bogonlist::source::{FeedSource, DEFAULT_FEED_URL};

/// Generates a blacklist of IPv4 CIDR blocks not announced by any Autonomous System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Allocation feed: an HTTP(S) URL or a local file path
    #[arg(short, long, default_value = DEFAULT_FEED_URL)]
    source: String,

    /// Output path for the generated blacklist
    #[arg(short, long, default_value = "blacklist.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let source = FeedSource::from_arg(&args.source);
    info!("Starting blacklist generation");
    info!("Allocation feed: {}", source);
    info!("Output file: {:?}", args.output);

    let reader = source
        .open()
        .wrap_err_with(|| format!("failed to open allocation feed {}", source))?;

    let sink = FileSink::create(&args.output)
        .wrap_err_with(|| format!("failed to create output file {:?}", args.output))?;

    let mut processor = FeedProcessor::new(sink);
    for line in reader.lines() {
        let line = line.wrap_err("allocation feed closed unexpectedly")?;
        processor.process_line(&line)?;
    }

    let stats = processor.finish()?;
    if stats.skipped_lines > 0 {
        warn!("Skipped {} malformed feed lines", stats.skipped_lines);
    }
    info!(
        "Processed {} allocation records, wrote {} blacklist blocks ({} reserved blocks suppressed)",
        stats.records, stats.blocks_written, stats.blocks_reserved
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults_run_and_exit() {
        let args = Args::parse_from(["bogonlist"]);
        assert_eq!(args.source, DEFAULT_FEED_URL);
        assert_eq!(args.output, PathBuf::from("blacklist.txt"));
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from(["bogonlist", "--source", "table.txt", "--output", "out.txt"]);
        assert_eq!(args.source, "table.txt");
        assert_eq!(args.output, PathBuf::from("out.txt"));
    }
}
