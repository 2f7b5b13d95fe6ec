/// Database-operation runner.
///
/// [`do_in_database`] is the single entry point of the crate: it acquires
/// a connection from a caller-supplied factory, applies a composed
/// operation to it, closes the connection on every exit path, and folds
/// the outcome into [`Either`]. Every other combinator is a building block
/// consumed through the `operation` argument.
use rusqlite::Connection;

use crate::either::Either;
use crate::error::{DbError, Result};

/// External provider of database connections.
///
/// Implementations should report acquisition failures as
/// [`DbError::Connection`]. The blanket impl lets a plain closure serve as
/// a factory, whether it opens a file directly or checks a handle out of a
/// pool.
pub trait ConnectionFactory {
    fn get(&self) -> Result<Connection>;
}

impl<F> ConnectionFactory for F
where
    F: Fn() -> Result<Connection>,
{
    fn get(&self) -> Result<Connection> {
        self()
    }
}

/// Acquires a connection, applies `operation`, and releases the connection.
///
/// The connection is closed exactly once whether the operation succeeds or
/// fails. A close failure after a successful operation surfaces as the
/// failure variant; when the operation itself failed, its error takes
/// precedence over any close error.
pub fn do_in_database<T, F, Op>(factory: &F, operation: Op) -> Either<T, DbError>
where
    F: ConnectionFactory + ?Sized,
    Op: FnOnce(&Connection) -> Result<T>,
{
    let conn = match factory.get() {
        Ok(conn) => conn,
        Err(err) => return Either::Right(err),
    };
    let result = operation(&conn);
    let closed = conn.close();
    match result {
        Ok(value) => match closed {
            Ok(()) => Either::Left(value),
            Err((_, close_err)) => Either::Right(DbError::Sqlite(close_err)),
        },
        Err(err) => Either::Right(err),
    }
}
