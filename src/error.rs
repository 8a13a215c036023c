//! Error type shared by the session and the CRUD modules.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Anything SQLite reports: malformed statements, constraint
    /// violations, a connection that can no longer be used.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// The scope's statement failed and the commit on exit failed too, so
    /// the writes made earlier in the scope were not kept.
    #[error("{statement}; commit on scope exit also failed: {commit}")]
    CommitAfterFailure {
        statement: Box<Error>,
        #[source]
        commit: Box<Error>,
    },

    #[error("failed to write listing: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
