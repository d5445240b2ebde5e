use super::{database_error, ensure_exists, load_database};
use crate::core::models::coefficient::LjParameters;
use crate::engine::error::{EngineError, InputFile};
use std::path::Path;
use tracing::{info, instrument};

/// Parameters for one label pair, before and after unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct PairLookup {
    pub first: String,
    pub second: String,
    /// nm and kJ/mol.
    pub gromacs: LjParameters,
    /// Å and kcal/mol.
    pub lammps: LjParameters,
}

/// Resolves a single label pair with the same matching rules as the
/// generation workflow.
#[instrument(skip(database_path), name = "lookup_workflow")]
pub fn run(database_path: &Path, first: &str, second: &str) -> Result<PairLookup, EngineError> {
    ensure_exists(InputFile::Database, database_path)?;
    let database = load_database(database_path)?;

    let gromacs = database
        .lookup(first, second)
        .map_err(|e| database_error(database_path, e))?;
    info!(
        "{} {}: epsilon = {} kJ/mol, sigma = {} nm",
        first, second, gromacs.epsilon, gromacs.sigma
    );

    Ok(PairLookup {
        first: first.to_string(),
        second: second.to_string(),
        gromacs,
        lammps: gromacs.to_lammps_real(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::database::DatabaseError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lookup_returns_both_unit_systems() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.itp");
        fs::write(&path, "TC5 TP1 1 0.47 2.0\n").unwrap();

        let result = run(&path, "TP1", "TC5").unwrap();
        assert_eq!(result.gromacs, LjParameters { epsilon: 2.0, sigma: 0.47 });
        assert_eq!(format!("{:.6}", result.lammps.epsilon), "0.478011");
        assert_eq!(format!("{:.6}", result.lammps.sigma), "4.700000");
    }

    #[test]
    fn lookup_propagates_no_match() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.itp");
        fs::write(&path, "TC5 TP1 1 0.47 2.0\n").unwrap();

        let err = run(&path, "TC5", "TC5").unwrap_err();
        assert!(err.to_string().contains("db.itp"));
        match err {
            EngineError::Database { path: reported, source } => {
                assert_eq!(reported, path);
                assert!(matches!(source, DatabaseError::NoMatch { .. }));
            }
            other => panic!("expected database error, got {other:?}"),
        }
    }

    #[test]
    fn lookup_requires_existing_database() {
        let dir = tempdir().unwrap();
        let err = run(&dir.path().join("absent.itp"), "TC5", "TP1").unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingFile {
                kind: InputFile::Database,
                ..
            }
        ));
    }
}
