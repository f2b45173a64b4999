use tweet_tally_csvs::CsvError;
use tweet_tally_table::TableError;

/// Who is to blame for a failed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad arguments, unreadable or malformed input
    User,
    /// An internal invariant was violated
    Program,
}

/// Errors that abort a tally run
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty file")]
    EmptyFile,

    #[error("exceeded maximum row count ({max})")]
    ExceededMaxRowCount { max: usize },

    #[error("no name in line {line_number} (column {column})")]
    MissingNameField { line_number: usize, column: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type TallyResult<T> = Result<T, TallyError>;

impl TallyError {
    pub fn class(&self) -> ErrorClass {
        match self {
            TallyError::Csv(_)
            | TallyError::Io(_)
            | TallyError::EmptyFile
            | TallyError::ExceededMaxRowCount { .. }
            | TallyError::InvalidConfig(_) => ErrorClass::User,
            TallyError::Table(_) | TallyError::MissingNameField { .. } => ErrorClass::Program,
        }
    }
}
