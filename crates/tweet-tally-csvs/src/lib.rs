/*!
# Tweet Tally CSV Handling

This crate owns everything the tally pipeline knows about the **shape** of a
tweets CSV. No line content reaches the tally table before it has passed
through here.

## Components

- **Line Reader** ([`read_line`]): reads one raw line without ever buffering
  more than the longest accepted line
- **Line Validator** ([`validate_line`]): length, emptiness, column count, and
  the rule that a `,` may never appear between quotes
- **Header Analyzer** ([`analyze_header`]): finds the column whose header cell is
  exactly `"name"` and records the header's column count in a [`HeaderLayout`]
- **Field Extractor** ([`extract_field`]): returns the n-th delimiter-separated field
- **Fixture Writer** ([`write_tweets_csv`]): produces files the validator accepts

## Usage

```rust
use tweet_tally_csvs::{analyze_header, validate_line, CsvResult, MAX_LINE_LENGTH};

fn example() -> CsvResult<()> {
    let header = b"\"id\",\"name\"\n";
    validate_line(header, MAX_LINE_LENGTH, None)?;
    let layout = analyze_header(header)?;

    let row = b"7,\"Alice\"\n";
    validate_line(row, MAX_LINE_LENGTH, Some(&layout))?;
    assert_eq!(layout.name_field(row), Some(&b"\"Alice\""[..]));
    Ok(())
}
# example().unwrap();
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use schemas::{
    HeaderLayout, TweetRow, COLUMN_DELIMITER, MAX_LINE_LENGTH, NAME_HEADER, TWEETS_CSV_HEADERS,
};
pub use validation::{
    analyze_header, extract_field, read_line, validate_line, write_tweets_csv, LineShape,
};
