//! Scoped database sessions.
//!
//! A [`Session`] owns one physical SQLite connection for the length of a
//! single operation. Opening a session begins a deferred transaction;
//! leaving it commits whatever was written and releases the connection,
//! whether the operation succeeded or not. There is no rollback path.

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::value::Row;
use rusqlite::{Connection, Params};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A data store identified by its file, opened anew for every scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Store named `name` in the working directory.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(StoreConfig::new(name))
    }

    pub fn path(&self) -> PathBuf {
        self.config.path()
    }

    /// Run `f` inside a scoped session.
    ///
    /// The session is committed and closed on every exit path. If `f`
    /// succeeds, a commit failure is returned instead of `f`'s value. If
    /// both fail, [`Error::CommitAfterFailure`] carries the two errors: the
    /// writes made earlier in the scope are lost in that case.
    pub fn session<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Session) -> Result<T>,
    {
        let session = Session::open(&self.config)?;
        let outcome = f(&session);
        let closed = session.close();
        match (outcome, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(statement), Err(commit)) => {
                warn!(error = %commit, "commit on scope exit failed after statement error");
                Err(Error::CommitAfterFailure {
                    statement: Box::new(statement),
                    commit: Box::new(commit),
                })
            }
        }
    }
}

/// An open connection plus the command handle bound to it.
pub struct Session {
    // `None` once committed and closed.
    conn: Option<Connection>,
    path: PathBuf,
    rows: RefCell<Vec<Row>>,
}

impl Session {
    /// Open the data file described by `config`, creating it if needed.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let path = config.path();
        let conn = Connection::open(&path)?;
        if let Some(timeout) = config.busy_timeout {
            conn.busy_timeout(timeout)?;
        }
        conn.execute_batch("BEGIN DEFERRED")?;
        debug!(path = %path.display(), "session opened");
        Ok(Self {
            conn: Some(conn),
            path,
            rows: RefCell::new(Vec::new()),
        })
    }

    fn conn(&self) -> &Connection {
        // Only `close` and `drop` take the connection, and both consume
        // the session.
        self.conn
            .as_ref()
            .unwrap_or_else(|| unreachable!("session used after close"))
    }

    /// Execute one parameterized statement.
    ///
    /// Rows produced by the statement are buffered for [`Session::fetch_all`].
    /// Returns the number of rows changed, or zero for statements that
    /// return rows.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        debug!(sql, "execute");
        let mut stmt = self.conn().prepare(sql)?;
        let columns = stmt.column_count();
        if columns == 0 {
            self.rows.borrow_mut().clear();
            return Ok(stmt.execute(params)?);
        }
        let rows = stmt
            .query_map(params, |row| Row::from_sql_row(row, columns))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        *self.rows.borrow_mut() = rows;
        Ok(0)
    }

    /// Take all rows produced by the last statement.
    pub fn fetch_all(&self) -> Vec<Row> {
        self.rows.take()
    }

    /// Commit pending writes and release the connection.
    pub fn close(mut self) -> Result<()> {
        match self.conn.take() {
            Some(conn) => finish(conn, &self.path),
            None => Ok(()),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err(e) = finish(conn, &self.path) {
                warn!(path = %self.path.display(), error = %e, "commit on drop failed");
            }
        }
    }
}

fn finish(conn: Connection, path: &Path) -> Result<()> {
    // SQLite may already have ended the transaction itself, e.g. after
    // certain errors.
    let committed = if conn.is_autocommit() {
        Ok(())
    } else {
        conn.execute_batch("COMMIT")
    };
    // Closing with the transaction still open rolls it back.
    let closed = conn.close().map_err(|(_, e)| e);
    debug!(path = %path.display(), "session committed and closed");
    committed?;
    closed?;
    Ok(())
}
