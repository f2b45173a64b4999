use crate::error::CliResult;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tweet_tally_sdk::{tally_tweets_csv, TallyConfig};

/// Count tweets per author in `file` and print the most prolific ones
pub fn execute(file: PathBuf, config: TallyConfig) -> CliResult<()> {
    info!(
        file = %file.display(),
        top_count = config.top_count,
        max_row_count = config.max_row_count,
        "Starting tally"
    );

    let report = tally_tweets_csv(&file, &config)?;

    info!(
        distinct_authors = report.distinct_authors,
        rows_processed = report.rows_processed,
        "Writing ranking"
    );

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report)?;
    stdout.flush()?;

    Ok(())
}
