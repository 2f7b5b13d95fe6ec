/// Transaction wrapper.
///
/// [`within_transaction`] surrounds an operation with commit/rollback
/// handling while preserving the connection's autocommit mode. In SQLite,
/// autocommit turns off when a transaction opens and back on when it ends,
/// so `COMMIT`/`ROLLBACK` restore the saved mode on both outcomes.
use rusqlite::Connection;
use tracing::warn;

use crate::error::Result;

/// Returns an operation running `operation` inside a transaction.
///
/// If the connection is in autocommit mode a transaction is opened first.
/// On success the transaction commits; on failure it rolls back and the
/// operation's original error is re-surfaced. A failure of the rollback
/// itself is logged and never masks the original error.
///
/// Nesting two wrappers around the same connection is unsupported: when
/// autocommit is already off, `BEGIN` is skipped and the inner commit or
/// rollback acts on the enclosing transaction.
pub fn within_transaction<T, Op>(operation: Op) -> impl FnOnce(&Connection) -> Result<T>
where
    Op: FnOnce(&Connection) -> Result<T>,
{
    move |conn: &Connection| {
        if conn.is_autocommit() {
            conn.execute_batch("BEGIN")?;
        }
        let outcome = operation(conn).and_then(|value| {
            conn.execute_batch("COMMIT")?;
            Ok(value)
        });
        if let Err(ref err) = outcome {
            if let Err(rollback_err) = conn.execute_batch("ROLLBACK") {
                warn!(
                    original = %err,
                    rollback = %rollback_err,
                    "rollback failed after operation error"
                );
            }
        }
        outcome
    }
}
