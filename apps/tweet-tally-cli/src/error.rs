use std::process::ExitCode;
use thiserror::Error;
use tracing::error;
use tweet_tally_csvs::CsvError;
use tweet_tally_sdk::{ErrorClass, TallyError};

pub type CliResult<T> = Result<T, CliError>;

/// Exit status for bad arguments, unreadable files and malformed input
pub const USER_ERROR_EXIT_CODE: u8 = 254;

/// Exit status for violated internal invariants
pub const PROGRAM_ERROR_EXIT_CODE: u8 = 255;

/// Diagnostic printed when debug mode is off
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input Format";

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Tally(#[from] TallyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    pub fn class(&self) -> ErrorClass {
        match self {
            CliError::Tally(err) => err.class(),
            CliError::Logging(_) => ErrorClass::Program,
            CliError::Io(_) | CliError::Csv(_) | CliError::Yaml(_) | CliError::InvalidConfig(_) => {
                ErrorClass::User
            }
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(exit_status(self.class()))
    }
}

pub fn exit_status(class: ErrorClass) -> u8 {
    match class {
        ErrorClass::User => USER_ERROR_EXIT_CODE,
        ErrorClass::Program => PROGRAM_ERROR_EXIT_CODE,
    }
}

/// The single line written to stdout for a failed run
pub fn failure_message(err: &CliError, debug: bool) -> String {
    if debug {
        err.to_string()
    } else {
        INVALID_INPUT_MESSAGE.to_string()
    }
}

/// Report a failed run on stdout; the full error also goes to the log.
pub fn report_failure(err: &CliError, debug: bool) {
    error!(error = %err, class = ?err.class(), "Run failed");
    println!("{}", failure_message(err, debug));
}
