// Core combinator modules
pub mod either;
pub mod error;
pub mod operations;
pub mod query;
pub mod statement;
pub mod transaction;
pub mod update;

// Demo entity and configuration for the example binary
pub mod config;
pub mod person;

// Re-export commonly used types for convenience
pub use either::Either;
pub use error::{DbError, Result};
pub use operations::{do_in_database, ConnectionFactory};
pub use query::{database_query, multiple_row_extraction, single_row_extraction};
pub use statement::{statement, SqlCommand};
pub use transaction::within_transaction;
pub use update::{database_update, multiple_database_updates};
