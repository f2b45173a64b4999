/*!
# Tweet Tally

One sequential pass over a tweets CSV:

1. Validate the header line and analyze it into a [`HeaderLayout`]
2. For every following line: skip it if blank, otherwise validate it against
   the layout, extract the name field, and count it in the table
3. Heap-sort the table and read the top authors off its tail

Any error aborts the whole run; nothing is reported for a partially read file.
*/

use crate::{RankedAuthor, TallyConfig, TallyError, TallyReport, TallyResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};
use tweet_tally_csvs::{analyze_header, read_line, validate_line, HeaderLayout};
use tweet_tally_table::TweetTable;

/// Tally the tweets CSV at `path`
pub fn tally_tweets_csv<P: AsRef<Path>>(path: P, config: &TallyConfig) -> TallyResult<TallyReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    info!(path = %path.display(), "Tallying tweets");

    tally_tweets(BufReader::new(file), config)
}

/// Tally tweets read line by line from `reader`
pub fn tally_tweets<R: BufRead>(mut reader: R, config: &TallyConfig) -> TallyResult<TallyReport> {
    config.validate()?;

    // One buffer for the whole file; lines keep their terminator.
    let mut line = Vec::new();

    if read_line(&mut reader, &mut line, config.max_line_length)? == 0 {
        return Err(TallyError::EmptyFile);
    }
    validate_line(&line, config.max_line_length, None)?;
    let header = analyze_header(&line)?;
    debug!(
        name_column = header.name_column,
        column_count = header.column_count,
        "Header analyzed"
    );

    let mut table = TweetTable::new();
    let mut rows_read = 0;
    let mut rows_processed = 0;

    loop {
        if read_line(&mut reader, &mut line, config.max_line_length)? == 0 {
            break;
        }

        rows_read += 1;
        if rows_read > config.max_row_count {
            return Err(TallyError::ExceededMaxRowCount {
                max: config.max_row_count,
            });
        }

        if is_blank(&line) {
            continue;
        }

        validate_line(&line, config.max_line_length, Some(&header))?;
        count_row(&mut table, &header, &line, rows_read + 1)?;
        rows_processed += 1;
    }

    if rows_read == 0 {
        return Err(TallyError::EmptyFile);
    }

    let distinct_authors = table.occupied();
    let ranking = table.into_ranking();
    let top: Vec<RankedAuthor> = ranking
        .top(config.top_count)
        .map(|(name, tweet_count)| RankedAuthor {
            name: String::from_utf8_lossy(name).into_owned(),
            tweet_count,
        })
        .collect();

    info!(rows_read, rows_processed, distinct_authors, "Tally completed");

    Ok(TallyReport {
        header,
        top,
        distinct_authors,
        rows_processed,
    })
}

fn is_blank(line: &[u8]) -> bool {
    matches!(line.first(), Some(b'\n' | b'\r'))
}

/// Hand the name field of a validated line over to the table
fn count_row(
    table: &mut TweetTable,
    header: &HeaderLayout,
    line: &[u8],
    line_number: usize,
) -> TallyResult<()> {
    let name = header
        .name_field(line)
        .ok_or(TallyError::MissingNameField {
            line_number,
            column: header.name_column,
        })?;

    table.increment(name)?;
    Ok(())
}
