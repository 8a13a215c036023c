//! Scoped SQLite sessions and two small CRUD demonstrations.
//!
//! # Intention
//!
//! - Give every operation its own short-lived connection that is always
//!   committed and released, whatever happens inside the scope.
//! - Show single-table CRUD (`crud`) and a one-to-many join
//!   (`relationships`) built on that one abstraction.
//!
//! # Architectural Boundaries
//!
//! - Only SQLite/database code belongs here.
//! - No pooling, no migrations, no query builder, no input validation.

pub mod config;
pub mod crud;
pub mod error;
pub mod relationships;
pub mod schema;
pub mod session;
pub mod value;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use session::{Session, Store};
pub use value::{write_listing, Row, Value};
