use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileInputConfig {
    #[serde(rename = "mapping-path")]
    pub mapping_path: Option<PathBuf>,
    #[serde(rename = "database-path")]
    pub database_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePairConfig {
    pub style: Option<String>,
    pub cutoff: Option<f64>,
    #[serde(rename = "inner-cutoff")]
    pub inner_cutoff: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub path: Option<PathBuf>,
}

/// Contents of a `--config` TOML file. Every field is optional.
///
/// ```toml
/// [input]
/// mapping-path = "martini.inp"
/// database-path = "martini_v3.0.0.itp"
///
/// [pair]
/// style = "lj/gromacs"
/// cutoff = 1.2
/// inner-cutoff = 0.9
///
/// [output]
/// path = "paircoeffs.txt"
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<FileInputConfig>,
    pub pair: Option<FilePairConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [input]
            mapping-path = "types.inp"
            database-path = "db/martini_v3.0.0.itp"

            [pair]
            style = "lj/cut"
            cutoff = 1.1
            inner-cutoff = 0.8

            [output]
            path = "coeffs.lmp"
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let input = config.input.unwrap();
        assert_eq!(input.mapping_path, Some(PathBuf::from("types.inp")));
        assert_eq!(
            input.database_path,
            Some(PathBuf::from("db/martini_v3.0.0.itp"))
        );
        let pair = config.pair.unwrap();
        assert_eq!(pair.style.as_deref(), Some("lj/cut"));
        assert_eq!(pair.cutoff, Some(1.1));
        assert_eq!(pair.inner_cutoff, Some(0.8));
        assert_eq!(config.output.unwrap().path, Some(PathBuf::from("coeffs.lmp")));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert!(config.input.is_none());
        assert!(config.pair.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pair]\nshift = true\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
