//! Scoped query execution against `DuckDB` files.
//!
//! Connections are opened per call and dropped when the scope exits, so a
//! connection is never held across pipeline stages. Engine errors are
//! propagated unmodified; there is no retry.

use std::path::Path;

use duckdb::Connection;

use crate::DbError;

/// Maximum number of bound values per IN-clause chunk. Keeps arbitrarily
/// large key lists under engine parameter-count limits.
pub const IN_CHUNK_SIZE: usize = 1_000;

/// Opens a scoped connection to a `DuckDB` file and runs `f` against it.
///
/// The file's existence is verified before opening, so a bad path fails
/// as a configuration error rather than mid-query. The connection is
/// released when `f` returns, on both success and error paths.
///
/// # Errors
///
/// Returns [`DbError::Config`] if the file does not exist, or whatever
/// `f` returns.
pub fn with_connection<T, E, F>(path: &Path, f: F) -> Result<T, E>
where
    E: From<DbError>,
    F: FnOnce(&Connection) -> Result<T, E>,
{
    if !path.is_file() {
        return Err(E::from(DbError::Config {
            message: format!("database file does not exist: {}", path.display()),
        }));
    }

    let conn = Connection::open(path).map_err(|e| E::from(DbError::DuckDb(e)))?;

    conn.execute_batch("SET threads = 4; SET memory_limit = '512MB';")
        .map_err(|e| E::from(DbError::DuckDb(e)))?;

    f(&conn)
}

/// Lists the tables in the connected database's `main` schema.
///
/// # Errors
///
/// Returns [`DbError`] if the introspection query fails.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>, DbError> {
    let mut stmt = conn.prepare(
        "SELECT table_name FROM information_schema.tables
         WHERE table_schema = 'main'
         ORDER BY table_name",
    )?;
    let mut rows = stmt.query([])?;

    let mut tables = Vec::new();
    while let Some(row) = rows.next()? {
        tables.push(row.get(0)?);
    }

    Ok(tables)
}

/// Runs an IN-clause query in chunks, binding each chunk of keys through
/// the driver's parameter API.
///
/// `sql_prefix` is everything up to and including the `IN` keyword, e.g.
/// `"SELECT caid FROM veraset_visits WHERE safegraph_place_id IN"`. The
/// parenthesized placeholder list is appended per chunk and the key
/// values are bound, never interpolated into the SQL text.
///
/// An empty key list short-circuits to an empty result without touching
/// the engine.
///
/// # Errors
///
/// Returns [`DbError`] if preparing, binding, or executing any chunk
/// fails, or if `map_row` fails on any row.
pub fn query_in_chunks<T, F>(
    conn: &Connection,
    sql_prefix: &str,
    keys: &[String],
    mut map_row: F,
) -> Result<Vec<T>, DbError>
where
    F: FnMut(&duckdb::Row<'_>) -> duckdb::Result<T>,
{
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();

    for chunk in keys.chunks(IN_CHUNK_SIZE) {
        let placeholders: String = chunk.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
        let sql = format!("{sql_prefix} ({placeholders})");

        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(duckdb::params_from_iter(chunk.iter()))?;

        while let Some(row) = rows.next()? {
            out.push(map_row(row)?);
        }
    }

    Ok(out)
}
