use std::fmt;
use tweet_tally_csvs::HeaderLayout;

/// One line of the final ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedAuthor {
    /// Field text as counted, quotes included. Bytes that are not valid
    /// UTF-8 show up as U+FFFD.
    pub name: String,
    pub tweet_count: i32,
}

impl RankedAuthor {
    /// The name without one surrounding pair of double quotes
    pub fn display_name(&self) -> &str {
        self.name
            .strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
            .unwrap_or(self.name.as_str())
    }
}

impl fmt::Display for RankedAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name(), self.tweet_count)
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyReport {
    pub header: HeaderLayout,

    /// Most prolific authors first
    pub top: Vec<RankedAuthor>,

    /// Distinct names counted
    pub distinct_authors: usize,

    /// Data rows that reached the table (blank lines excluded)
    pub rows_processed: usize,
}

impl fmt::Display for TallyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for author in &self.top {
            writeln!(f, "{}", author)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str, tweet_count: i32) -> RankedAuthor {
        RankedAuthor {
            name: name.to_string(),
            tweet_count,
        }
    }

    #[test]
    fn test_display_strips_one_pair_of_quotes() {
        assert_eq!(author("\"Alice\"", 3).to_string(), "Alice: 3");
        assert_eq!(author("Bob", 1).to_string(), "Bob: 1");
        assert_eq!(author("\"\"Eve\"\"", 2).display_name(), "\"Eve\"");
        assert_eq!(author("\"half", 1).display_name(), "\"half");
        assert_eq!(author("\"", 1).display_name(), "\"");
        assert_eq!(author("\"\"", 1).display_name(), "");
    }

    #[test]
    fn test_report_prints_one_line_per_author() {
        let report = TallyReport {
            header: HeaderLayout {
                name_column: 2,
                column_count: 2,
            },
            top: vec![author("\"Alice\"", 3), author("\"Bob\"", 1)],
            distinct_authors: 2,
            rows_processed: 4,
        };
        assert_eq!(report.to_string(), "Alice: 3\nBob: 1\n");
    }
}
