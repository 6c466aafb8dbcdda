//! SQLite-backed table store for BMKG station data.
//!
//! Two store files back the explorer: an observation store (station metadata
//! plus one daily observation row group per station) and a completeness store
//! (one monthly completeness row group per station). Both use the same
//! schema; each file simply leaves the tables it does not carry empty.
//!
//! # Access pattern
//!
//! [`Store`] holds nothing but a path. Every read opens the file read-only,
//! runs its query and drops the connection: the store is a shared,
//! read-mostly resource populated by an external ingestion process, and a
//! long-lived handle would block that single writer (and other readers) for
//! no benefit. Concurrent explorer sessions therefore never contend on a
//! shared cursor, at the cost of an open/close per station per action.
//!
//! [`StoreBuilder`] is the write side: it creates a store file and loads CSV
//! data into it. The dashboard flow never writes; the builder exists for the
//! ingestion tooling and for tests.

pub mod error;
mod loader;
mod queries;
pub mod schema;

pub use error::StoreError;
pub use loader::StoreBuilder;

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Read-only handle to one store file.
///
/// Cheap to clone; carries only the file path. See the module docs for the
/// open-per-call access pattern.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Point at a store file. The file is not opened until the first read.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh read-only connection for a single operation.
    pub(crate) fn open_read_only(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_cloneable_and_keeps_its_path() {
        let store = Store::at("/tmp/bmkg.db");
        let clone = store.clone();
        assert_eq!(clone.path(), Path::new("/tmp/bmkg.db"));
    }

    #[test]
    fn opening_a_missing_file_fails() {
        let store = Store::at("/nonexistent/bmkg.db");
        assert!(store.open_read_only().is_err());
    }
}
