//! # Workflows Module
//!
//! High-level entry points that tie the `core` readers and writers to the `engine`.
//!
//! - **Generation Workflow** ([`generate`]) - The full mapping → database → LAMMPS pipeline
//! - **Lookup Workflow** ([`lookup`]) - Resolve a single label pair against a database
//!
//! Every workflow resolves all inputs before writing anything, so a failed run
//! never leaves a partial coefficient file behind.

pub mod generate;
pub mod lookup;

use crate::core::io::database::{DatabaseError, MartiniDatabase};
use crate::engine::error::{EngineError, InputFile};
use std::path::Path;

fn ensure_exists(kind: InputFile, path: &Path) -> Result<(), EngineError> {
    if path.exists() {
        Ok(())
    } else {
        Err(EngineError::MissingFile {
            kind,
            path: path.to_path_buf(),
        })
    }
}

fn load_database(path: &Path) -> Result<MartiniDatabase, EngineError> {
    MartiniDatabase::read_from_path(path).map_err(|e| database_error(path, e))
}

/// Attaches the database path to an error raised while reading or querying it.
fn database_error(path: &Path, error: DatabaseError) -> EngineError {
    match error {
        DatabaseError::Io(source) => EngineError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => EngineError::Database {
            path: path.to_path_buf(),
            source,
        },
    }
}
