//! Command-line validation for date-histogram interval strings.
//!
//! Each argument is parsed independently. Valid intervals print one line to
//! stdout (human-readable text by default, JSON with `--json`); rejected
//! intervals print a diagnostic with a hint to stderr. The exit status is
//! non-zero if any argument was rejected, so shell scripts can validate a
//! whole batch in one call.

use anyhow::bail;
use clap::Parser;

use bucketspan::{parse_interval, IntervalError};

#[derive(Parser)]
#[command(name = "bucketspan", version)]
#[command(about = "Validate and classify date-histogram interval strings")]
struct Cli {
    /// Interval expressions to validate, e.g. 250ms 7d 1M
    #[arg(required = true)]
    intervals: Vec<String>,

    /// Emit one JSON object per valid interval instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut rejected = 0usize;

    for input in &cli.intervals {
        match parse_interval(input) {
            Ok(interval) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&interval)?);
                } else {
                    println!(
                        "{input}: value={} unit={} type={}",
                        interval.value, interval.unit, interval.interval_type
                    );
                }
            }
            Err(err) => {
                eprintln!("{err} ({})", hint(&err));
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        bail!("rejected {rejected} of {} interval(s)", cli.intervals.len());
    }
    Ok(())
}

fn hint(err: &IntervalError) -> &'static str {
    match err {
        IntervalError::InvalidFormat { .. } => {
            "expected a positive integer followed by one of: ms, s, m, h, d, w, M, y"
        }
        IntervalError::InvalidCalendarInterval { .. } => {
            "calendar units (w, M, y) only support a magnitude of 1"
        }
    }
}
