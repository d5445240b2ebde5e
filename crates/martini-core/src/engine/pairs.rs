use super::progress::{Progress, ProgressReporter};
use crate::core::io::database::{DatabaseError, MartiniDatabase};
use crate::core::models::coefficient::{CoefficientSet, PairCoefficient};
use crate::core::models::mapping::{BeadType, TypeLabelMap};
use crate::core::units::UnitSystem;
use tracing::debug;

/// A bead type together with its label.
pub type LabelledBead<'a> = (BeadType, &'a str);

/// Ordered type pairs `(a, b)` with `a <= b`, in generation order.
///
/// Both loops walk the mapping in file order; an ordered pair is kept when
/// `a < b` (cross term) or `a == b` (self term), so each unordered pair
/// appears exactly once.
pub fn labelled_pairs(mapping: &TypeLabelMap) -> Vec<(LabelledBead<'_>, LabelledBead<'_>)> {
    let mut pairs = Vec::with_capacity(mapping.pair_count());
    for first in mapping.iter() {
        for second in mapping.iter() {
            if first.0 <= second.0 {
                pairs.push((first, second));
            }
        }
    }
    pairs
}

/// Same as [`labelled_pairs`], without the labels.
pub fn unordered_pairs(mapping: &TypeLabelMap) -> Vec<(BeadType, BeadType)> {
    labelled_pairs(mapping)
        .into_iter()
        .map(|((type_a, _), (type_b, _))| (type_a, type_b))
        .collect()
}

/// Looks up parameters for every unordered bead type pair.
///
/// The returned set is in GROMACS units. The first unresolved pair aborts
/// the whole resolution.
pub fn resolve_pairs(
    mapping: &TypeLabelMap,
    database: &MartiniDatabase,
    reporter: &ProgressReporter,
) -> Result<CoefficientSet, DatabaseError> {
    let pairs = labelled_pairs(mapping);
    reporter.report(Progress::PairsStart {
        total: pairs.len() as u64,
    });

    let mut coefficients = Vec::with_capacity(pairs.len());
    for ((type_a, label_a), (type_b, label_b)) in pairs {
        let params = database.lookup(label_a, label_b)?;
        debug!(
            "{} {} ({} {}): epsilon = {} kJ/mol, sigma = {} nm",
            type_a, type_b, label_a, label_b, params.epsilon, params.sigma
        );
        coefficients.push(PairCoefficient::new(type_a, type_b, params));
        reporter.report(Progress::PairResolved { type_a, type_b });
    }

    reporter.report(Progress::PairsFinish);
    Ok(CoefficientSet::new(UnitSystem::Gromacs, coefficients))
}
