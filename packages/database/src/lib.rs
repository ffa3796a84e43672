#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Scoped `DuckDB` connection management and shared query helpers.
//!
//! All vendor data lives in read-only `DuckDB` files. This crate provides
//! the one piece of resource-management discipline in the system: every
//! query runs inside [`query::with_connection`], which opens a connection,
//! runs the caller's closure, and releases the connection on every exit
//! path. It also owns vendor database selection ([`vendor`]) and the
//! chunked parameterized IN-clause helper ([`query::query_in_chunks`]).

pub mod query;
pub mod timestamp;
pub mod vendor;

/// Errors that can occur during database operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A required file or directory does not exist. Checked eagerly,
    /// before any query executes.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what is missing.
        message: String,
    },

    /// `DuckDB` rejected or failed a statement. Propagated verbatim.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// Filesystem error while locating vendor databases.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
