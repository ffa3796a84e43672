//! Vendor `DuckDB` file selection.
//!
//! Each vendor (Advan, Veraset) ships its data as one or more `.duckdb`
//! files in a configured directory. Selection is deterministic: candidates
//! are sorted lexicographically by file name and the first one wins, with
//! a warning when more than one candidate exists.

use std::path::{Path, PathBuf};

use crate::DbError;

/// Selects the vendor database file from a directory of `.duckdb` files.
///
/// # Errors
///
/// Returns [`DbError::Config`] if the directory does not exist or contains
/// no `.duckdb` files, or [`DbError::Io`] if the directory cannot be read.
pub fn select_vendor_db(dir: &Path) -> Result<PathBuf, DbError> {
    if !dir.is_dir() {
        return Err(DbError::Config {
            message: format!("vendor database directory does not exist: {}", dir.display()),
        });
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("duckdb") {
            candidates.push(path);
        }
    }

    candidates.sort();

    let Some(selected) = candidates.first().cloned() else {
        return Err(DbError::Config {
            message: format!("no .duckdb files found in {}", dir.display()),
        });
    };

    if candidates.len() > 1 {
        log::warn!(
            "{} .duckdb files in {}; selecting {} (lexicographic order)",
            candidates.len(),
            dir.display(),
            selected.display()
        );
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("footfall-vendor-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_directory_is_config_error() {
        let result = select_vendor_db(Path::new("/nonexistent/footfall/advan"));
        assert!(matches!(result, Err(DbError::Config { .. })));
    }

    #[test]
    fn empty_directory_is_config_error() {
        let dir = scratch_dir("empty");
        let result = select_vendor_db(&dir);
        assert!(matches!(result, Err(DbError::Config { .. })));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn selection_is_lexicographic_and_ignores_other_extensions() {
        let dir = scratch_dir("multi");
        std::fs::write(dir.join("b_weekly.duckdb"), b"").unwrap();
        std::fs::write(dir.join("a_weekly.duckdb"), b"").unwrap();
        std::fs::write(dir.join("0_readme.txt"), b"").unwrap();

        let selected = select_vendor_db(&dir).unwrap();
        assert_eq!(
            selected.file_name().and_then(|n| n.to_str()),
            Some("a_weekly.duckdb")
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
