use crate::core::models::style::{Cutoffs, PairStyle, UnsupportedPairStyle};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error(transparent)]
    UnsupportedPairStyle(#[from] UnsupportedPairStyle),
    #[error("Invalid cutoff: {0}")]
    InvalidCutoff(String),
}

/// Settings for one generation run. Cutoffs are given in nm.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub mapping_path: PathBuf,
    pub database_path: PathBuf,
    pub output_path: PathBuf,
    pub pair_style: PairStyle,
    pub cutoffs: Cutoffs,
}

impl GeneratorConfig {
    /// Checks the cutoffs against the selected pair style.
    ///
    /// Both cutoffs must be finite and positive; `lj/gromacs` additionally
    /// needs the inner cutoff strictly below the outer one. `lj/cut` never
    /// emits the inner cutoff, so it is not checked there.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Cutoffs { outer, inner, .. } = self.cutoffs;
        if !outer.is_finite() || outer <= 0.0 {
            return Err(ConfigError::InvalidCutoff(format!(
                "cutoff must be a positive number, got {}",
                outer
            )));
        }
        if self.pair_style.uses_inner_cutoff() {
            if !inner.is_finite() || inner <= 0.0 {
                return Err(ConfigError::InvalidCutoff(format!(
                    "inner cutoff must be a positive number, got {}",
                    inner
                )));
            }
            if inner >= outer {
                return Err(ConfigError::InvalidCutoff(format!(
                    "inner cutoff ({}) must be smaller than cutoff ({}) for {}",
                    inner, outer, self.pair_style
                )));
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct GeneratorConfigBuilder {
    mapping_path: Option<PathBuf>,
    database_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    pair_style: Option<String>,
    cutoff: Option<f64>,
    inner_cutoff: Option<f64>,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mapping_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mapping_path = Some(path.into());
        self
    }
    pub fn database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }
    pub fn pair_style(mut self, name: impl Into<String>) -> Self {
        self.pair_style = Some(name.into());
        self
    }
    pub fn cutoff(mut self, nm: f64) -> Self {
        self.cutoff = Some(nm);
        self
    }
    pub fn inner_cutoff(mut self, nm: f64) -> Self {
        self.inner_cutoff = Some(nm);
        self
    }

    /// Assembles and validates the configuration. No file is touched here.
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let pair_style: PairStyle = self
            .pair_style
            .ok_or(ConfigError::MissingParameter("pair_style"))?
            .parse()?;

        let cutoffs = Cutoffs::in_nm(
            self.cutoff.ok_or(ConfigError::MissingParameter("cutoff"))?,
            self.inner_cutoff
                .ok_or(ConfigError::MissingParameter("inner_cutoff"))?,
        );

        let config = GeneratorConfig {
            mapping_path: self
                .mapping_path
                .ok_or(ConfigError::MissingParameter("mapping_path"))?,
            database_path: self
                .database_path
                .ok_or(ConfigError::MissingParameter("database_path"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            pair_style,
            cutoffs,
        };
        config.validate()?;
        Ok(config)
    }
}
