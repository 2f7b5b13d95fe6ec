/// Statement factory.
///
/// A [`SqlCommand`] is the recipe for a prepared statement: SQL text plus
/// positional parameters held behind a type-erased [`ToSql`]. Preparing it
/// against a connection yields a fresh `rusqlite::Statement` each time;
/// nothing is cached and nothing is executed at build time.
use rusqlite::{Connection, Statement, ToSql};
use std::fmt;

use crate::error::Result;

/// A parameterized SQL command, not yet bound to any connection.
pub struct SqlCommand {
    sql: String,
    params: Vec<Box<dyn ToSql>>,
}

/// Builds a command for `sql` with no parameters bound.
pub fn statement(sql: impl Into<String>) -> SqlCommand {
    SqlCommand {
        sql: sql.into(),
        params: Vec::new(),
    }
}

impl SqlCommand {
    /// Appends one positional parameter.
    ///
    /// Parameters are bound 1-indexed in the order given, so the first
    /// `bind` call fills `?1`, the second `?2`, and so on. Any type SQLite
    /// accepts can be bound.
    pub fn bind(mut self, param: impl ToSql + 'static) -> Self {
        self.params.push(Box::new(param));
        self
    }

    /// Prepares a fresh statement on `conn` and binds all parameters.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Sqlite` if the SQL cannot be prepared (malformed
    /// text) or a parameter cannot be bound.
    pub fn prepare<'c>(&self, conn: &'c Connection) -> Result<Statement<'c>> {
        let mut stmt = conn.prepare(&self.sql)?;
        for (index, param) in self.params.iter().enumerate() {
            stmt.raw_bind_parameter(index + 1, param.as_ref())?;
        }
        Ok(stmt)
    }
}

impl fmt::Debug for SqlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlCommand")
            .field("sql", &self.sql)
            .field("params", &self.params.len())
            .finish()
    }
}
