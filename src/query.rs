/// Query executor.
///
/// [`database_query`] turns a [`SqlCommand`] and a result-set extraction
/// into an operation on a connection. Extraction runs against the raw row
/// cursor; the two provided combinators cover the common cases of mapping
/// every row and of demanding exactly one row. The cursor is released
/// before the prepared statement on every exit path, including a mapper
/// failure partway through the result.
use rusqlite::{Connection, Row, Rows};

use crate::error::{DbError, Result};
use crate::statement::SqlCommand;

/// Returns an operation executing `command` as a query and feeding its
/// rows through `extraction`.
pub fn database_query<T, E>(command: SqlCommand, extraction: E) -> impl FnOnce(&Connection) -> Result<T>
where
    E: FnOnce(&mut Rows<'_>) -> Result<T>,
{
    move |conn: &Connection| {
        let mut stmt = command.prepare(conn)?;
        let mut rows = stmt.raw_query();
        extraction(&mut rows)
    }
}

/// Extraction applying `mapper` to every row, in retrieval order.
///
/// An empty result yields an empty `Vec`, not an error. A mapper failure
/// aborts extraction and becomes the operation's failure.
pub fn multiple_row_extraction<T, M>(mapper: M) -> impl FnOnce(&mut Rows<'_>) -> Result<Vec<T>>
where
    M: Fn(&Row<'_>) -> Result<T>,
{
    move |rows: &mut Rows<'_>| {
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(mapper(row)?);
        }
        Ok(records)
    }
}

/// Extraction demanding exactly one row.
///
/// # Errors
///
/// Returns `DbError::NoDataFound` on an empty result and
/// `DbError::TooManyRows` when a second row exists.
pub fn single_row_extraction<T, M>(mapper: M) -> impl FnOnce(&mut Rows<'_>) -> Result<T>
where
    M: Fn(&Row<'_>) -> Result<T>,
{
    move |rows: &mut Rows<'_>| {
        let row = rows.next()?.ok_or(DbError::NoDataFound)?;
        let record = mapper(row)?;
        if rows.next()?.is_some() {
            return Err(DbError::TooManyRows);
        }
        Ok(record)
    }
}
