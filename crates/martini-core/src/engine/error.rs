use super::config::ConfigError;
use crate::core::io::database::DatabaseError;
use crate::core::io::mapping::MappingError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two input files a generation run reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    Mapping,
    Database,
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFile::Mapping => f.write_str("Martini input"),
            InputFile::Database => f.write_str("Martini database"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{kind} file '{path}' does not exist", path = path.display())]
    MissingFile { kind: InputFile, path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse mapping file '{path}': {source}", path = path.display())]
    Mapping {
        path: PathBuf,
        #[source]
        source: MappingError,
    },

    #[error("Lookup in database '{path}' failed: {source}", path = path.display())]
    Database {
        path: PathBuf,
        #[source]
        source: DatabaseError,
    },

    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
