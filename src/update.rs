/// Update executor.
///
/// [`database_update`] runs one mutating command and reports the number of
/// affected rows. [`multiple_database_updates`] runs an ordered sequence of
/// commands against the same connection, stopping at the first failure.
/// Neither rolls anything back; wrap the operation in
/// [`crate::transaction::within_transaction`] for that.
use rusqlite::Connection;

use crate::error::Result;
use crate::statement::SqlCommand;

/// Returns an operation executing `command` as an update and yielding the
/// affected-row count. The prepared statement is released on every exit
/// path.
pub fn database_update(command: SqlCommand) -> impl FnOnce(&Connection) -> Result<usize> {
    move |conn: &Connection| {
        let mut stmt = command.prepare(conn)?;
        Ok(stmt.raw_execute()?)
    }
}

/// Returns an operation executing `commands` in order, yielding one
/// affected-row count per command.
///
/// Execution stops at the first failing command; counts gathered so far
/// are discarded and the failure becomes the operation's result. Effects
/// of the commands that already ran stay in place at this layer.
pub fn multiple_database_updates(
    commands: Vec<SqlCommand>,
) -> impl FnOnce(&Connection) -> Result<Vec<usize>> {
    move |conn: &Connection| {
        let mut counts = Vec::with_capacity(commands.len());
        for command in &commands {
            let mut stmt = command.prepare(conn)?;
            counts.push(stmt.raw_execute()?);
        }
        Ok(counts)
    }
}
