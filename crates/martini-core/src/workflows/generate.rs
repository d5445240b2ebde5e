use super::{database_error, ensure_exists, load_database};
use crate::core::io::lammps::PairCoeffDocument;
use crate::core::io::mapping::MappingFile;
use crate::core::models::coefficient::CoefficientSet;
use crate::core::models::mapping::TypeLabelMap;
use crate::core::models::style::Cutoffs;
use crate::engine::config::GeneratorConfig;
use crate::engine::error::{EngineError, InputFile};
use crate::engine::pairs::resolve_pairs;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub mapping: TypeLabelMap,
    /// Coefficients in LAMMPS `real` units, in generation order.
    pub coefficients: CoefficientSet,
    /// Cutoffs in Å.
    pub cutoffs: Cutoffs,
    pub document: PairCoeffDocument,
}

/// Generates the LAMMPS pair coefficient file described by `config`.
///
/// # Errors
///
/// Fails on a missing input file, an invalid cutoff, a malformed mapping line,
/// or a label pair with zero or several database rows. The output file is only
/// created once every pair has been resolved.
#[instrument(skip_all, name = "generate_workflow")]
pub fn run(
    config: &GeneratorConfig,
    reporter: &ProgressReporter,
) -> Result<GenerationResult, EngineError> {
    reporter.stage(Stage::Validation, || validate_inputs(config))?;

    let mapping = reporter.stage(Stage::Mapping, || read_mapping(&config.mapping_path))?;
    info!(
        "Read {} bead types ({} distinct labels) from {:?}.",
        mapping.len(),
        mapping.label_index().len(),
        config.mapping_path
    );
    for (bead_type, label) in mapping.iter() {
        debug!("{} {}", bead_type, label);
    }

    let database = reporter.stage(Stage::Database, || load_database(&config.database_path))?;

    let raw = reporter.stage(Stage::Resolution, || {
        resolve_pairs(&mapping, &database, reporter)
            .map_err(|e| database_error(&config.database_path, e))
    })?;
    info!("Resolved {} pair coefficients.", raw.len());
    log_coefficients(&raw);

    let (cutoffs, coefficients) = reporter.stage(Stage::Conversion, || {
        Ok::<_, EngineError>((config.cutoffs.to_lammps_real(), raw.into_lammps_real()))
    })?;
    log_coefficients(&coefficients);

    let document = PairCoeffDocument::build(
        &mapping,
        config.pair_style,
        cutoffs,
        coefficients.clone(),
    );

    reporter.stage(Stage::Output, || {
        document
            .write_to_path(&config.output_path)
            .map_err(|source| EngineError::Io {
                path: config.output_path.clone(),
                source,
            })
    })?;
    info!(
        "Wrote {} pair coefficients ({}) to {:?}.",
        coefficients.len(),
        config.pair_style,
        config.output_path
    );
    reporter.report(Progress::Message(format!(
        "Wrote {} pair coefficients to {}",
        coefficients.len(),
        config.output_path.display()
    )));

    Ok(GenerationResult {
        mapping,
        coefficients,
        cutoffs,
        document,
    })
}

fn validate_inputs(config: &GeneratorConfig) -> Result<(), EngineError> {
    ensure_exists(InputFile::Mapping, &config.mapping_path)?;
    ensure_exists(InputFile::Database, &config.database_path)?;
    config.validate()?;
    Ok(())
}

fn read_mapping(path: &Path) -> Result<TypeLabelMap, EngineError> {
    MappingFile::read_from_path(path).map_err(|source| EngineError::Mapping {
        path: path.to_path_buf(),
        source,
    })
}

fn log_coefficients(set: &CoefficientSet) {
    let units = set.units();
    debug!(
        "PARAMETERS IN {} and {}",
        units.energy_unit(),
        units.length_unit()
    );
    for c in set.coefficients() {
        debug!("{} {} {:.6} {:.6}", c.type_a, c.type_b, c.epsilon, c.sigma);
    }
}
