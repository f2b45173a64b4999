use thiserror::Error;

pub type TableResult<T> = Result<T, TableError>;

/// Table failures. These are bugs in the caller or the table, never bad input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("attempt to replace full slot {index}")]
    OccupiedSlot { index: usize },

    #[error("no free slot reachable after {attempts} probes (capacity {capacity})")]
    TableFull { attempts: usize, capacity: usize },

    #[error("table capacity must be non-zero")]
    ZeroCapacity,

    #[error("slot index {index} out of bounds (capacity {capacity})")]
    InvalidIndex { index: usize, capacity: usize },
}
