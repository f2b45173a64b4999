/*!
# Tweets CSV Schema

Constants and types describing the tweets CSV consumed by `tweet-tally tally`
and produced by `tweet-tally generate-fixtures`.

Only two things about the file are fixed:
- the first line is a header, and exactly one of its columns is the quoted token `"name"`
- every following line has as many columns as the header
*/

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Longest accepted line, in bytes, not counting the line terminator
pub const MAX_LINE_LENGTH: usize = 374;

pub const COLUMN_DELIMITER: u8 = b',';

pub const QUOTE: u8 = b'"';

/// Header cell that marks the author column, quotes included
pub const NAME_HEADER: &str = "\"name\"";

/// Header written by the fixture generator
pub const TWEETS_CSV_HEADERS: &[&str] = &["tweet_id", "name", "text", "tweet_created"];

/// True for the bytes that end the content of a line.
pub fn is_line_end(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r' | b'\0')
}

/// Whitespace as classified by C's `isspace` in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
pub fn is_header_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

// ================================================================================================
// Header Layout
// ================================================================================================

/// What the header line says about every data line.
///
/// Built once by [`crate::analyze_header`] and then passed by reference to the
/// validator and extractor for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// 1-based index of the `"name"` column
    pub name_column: usize,

    /// Number of columns in the header
    pub column_count: usize,
}

impl HeaderLayout {
    /// Extract the raw author field from a line that already passed validation.
    pub fn name_field<'a>(&self, line: &'a [u8]) -> Option<&'a [u8]> {
        crate::extract_field(line, self.name_column)
    }
}

// ================================================================================================
// Tweets CSV Row
// ================================================================================================

/// Row structure written by the fixture generator
///
/// **File**: any `*.csv` passed to `tweet-tally tally`
/// **Producer**: `generate-fixtures` command
/// **Consumer**: `tally` command (only the `name` column is read)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TweetRow {
    pub tweet_id: u64,

    /// Author handle
    pub name: String,

    /// Tweet body; must not contain the column delimiter
    pub text: String,

    pub tweet_created: NaiveDateTime,
}
