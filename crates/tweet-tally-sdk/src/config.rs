use serde::{Deserialize, Serialize};
use tweet_tally_csvs::MAX_LINE_LENGTH;
use tweet_tally_table::{DEFAULT_TOP_COUNT, HASHTABLE_SIZE};

use crate::{TallyError, TallyResult};

/// Maximum number of data rows (lines after the header, blank lines included)
pub const MAX_ROW_COUNT: usize = 20_000;

/// Largest accepted `max_row_count`: at most half the table can fill up, and
/// quadratic probing over a prime capacity reaches a free slot at that load.
pub const ROW_COUNT_CEILING: usize = (HASHTABLE_SIZE + 1) / 2;

/// Configuration for a tally run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Longest accepted line, in bytes, not counting the terminator
    pub max_line_length: usize,

    /// Most data rows a file may contain
    pub max_row_count: usize,

    /// How many authors to report
    pub top_count: usize,

    /// Report the specific violation instead of a generic message
    pub debug: bool,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
            max_row_count: MAX_ROW_COUNT,
            top_count: DEFAULT_TOP_COUNT,
            debug: false,
        }
    }
}

impl TallyConfig {
    /// Reject limits the table cannot honor.
    ///
    /// Every data row can introduce a new name, so the row limit is capped at
    /// [`ROW_COUNT_CEILING`].
    pub fn validate(&self) -> TallyResult<()> {
        if self.max_line_length == 0 {
            return Err(TallyError::InvalidConfig(
                "max_line_length must be greater than 0".to_string(),
            ));
        }
        if self.max_row_count == 0 {
            return Err(TallyError::InvalidConfig(
                "max_row_count must be greater than 0".to_string(),
            ));
        }
        if self.max_row_count > ROW_COUNT_CEILING {
            return Err(TallyError::InvalidConfig(format!(
                "max_row_count must be at most half the table size ({}), got {}",
                ROW_COUNT_CEILING, self.max_row_count
            )));
        }
        if self.top_count == 0 {
            return Err(TallyError::InvalidConfig(
                "top_count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
