/// Error types for the sqlfn combinators.
///
/// Every combinator in this crate reports failure through a single error
/// enum so that composed operations thread one error type all the way up
/// to the runner boundary:
/// - connection acquisition failures from the caller-supplied factory
/// - preparation, binding and execution failures from SQLite
/// - cardinality failures during single-row extraction
/// - row-to-record mapping failures
use thiserror::Error;

/// Failure of a composed database operation.
#[derive(Error, Debug)]
pub enum DbError {
    /// The connection factory could not produce a usable connection.
    #[error("connection error: {0}")]
    Connection(String),

    /// Statement preparation, parameter binding or execution failed.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A single-row extraction found an empty result.
    #[error("no data found")]
    NoDataFound,

    /// A single-row extraction found a second row.
    #[error("more than one record in result")]
    TooManyRows,

    /// A row mapper could not convert a result row into a record.
    #[error("row mapping error: {0}")]
    Mapping(String),
}

/// Type alias for Result with DbError as the error type.
pub type Result<T> = std::result::Result<T, DbError>;
