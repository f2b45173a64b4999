use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

/// Structural problems found in a tweets CSV.
///
/// Every variant is caused by the input file, never by the program.
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("commas aren't allowed between quotations (character {position})")]
    CommaInsideQuotation { position: usize },

    #[error("empty line")]
    EmptyLine,

    #[error("line length exceeds limit: {max} < {length}")]
    LineTooLong { length: usize, max: usize },

    #[error("incorrect number of columns: {found} != {expected}")]
    ColumnCountMismatch { found: usize, expected: usize },

    #[error("two name columns: {first}, {second}")]
    DuplicateNameColumn { first: usize, second: usize },

    #[error("no name column")]
    NoNameColumn,
}
