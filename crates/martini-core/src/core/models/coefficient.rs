use super::mapping::BeadType;
use crate::core::units::{self, UnitSystem};

/// Lennard-Jones well depth and zero-crossing distance for one bead pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LjParameters {
    pub epsilon: f64,
    pub sigma: f64,
}

impl LjParameters {
    pub fn to_lammps_real(self) -> Self {
        Self {
            epsilon: units::kj_to_kcal(self.epsilon),
            sigma: units::nm_to_angstrom(self.sigma),
        }
    }
}

/// Parameters for one unordered bead type pair, `type_a <= type_b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairCoefficient {
    pub type_a: BeadType,
    pub type_b: BeadType,
    pub epsilon: f64,
    pub sigma: f64,
}

impl PairCoefficient {
    pub fn new(type_a: BeadType, type_b: BeadType, params: LjParameters) -> Self {
        Self {
            type_a,
            type_b,
            epsilon: params.epsilon,
            sigma: params.sigma,
        }
    }

    pub fn params(&self) -> LjParameters {
        LjParameters {
            epsilon: self.epsilon,
            sigma: self.sigma,
        }
    }

    pub fn is_self_pair(&self) -> bool {
        self.type_a == self.type_b
    }
}

/// Coefficients in generation order, tagged with the unit system they are in.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    units: UnitSystem,
    coefficients: Vec<PairCoefficient>,
}

impl CoefficientSet {
    pub fn new(units: UnitSystem, coefficients: Vec<PairCoefficient>) -> Self {
        Self {
            units,
            coefficients,
        }
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn coefficients(&self) -> &[PairCoefficient] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Converts every coefficient to LAMMPS `real` units.
    ///
    /// A set that is already in LAMMPS units is returned unchanged.
    pub fn into_lammps_real(self) -> Self {
        if self.units == UnitSystem::LammpsReal {
            return self;
        }
        let coefficients = self
            .coefficients
            .into_iter()
            .map(|c| PairCoefficient::new(c.type_a, c.type_b, c.params().to_lammps_real()))
            .collect();
        Self {
            units: UnitSystem::LammpsReal,
            coefficients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bead(i: u32) -> BeadType {
        BeadType::new(i).unwrap()
    }

    #[test]
    fn converts_parameters_to_lammps_real() {
        let params = LjParameters {
            epsilon: 2.0,
            sigma: 0.47,
        }
        .to_lammps_real();
        assert_eq!(format!("{:.6}", params.epsilon), "0.478011");
        assert_eq!(format!("{:.6}", params.sigma), "4.700000");
    }

    #[test]
    fn set_conversion_preserves_order_and_types() {
        let set = CoefficientSet::new(
            UnitSystem::Gromacs,
            vec![
                PairCoefficient::new(bead(1), bead(1), LjParameters { epsilon: 1.5, sigma: 0.43 }),
                PairCoefficient::new(bead(1), bead(2), LjParameters { epsilon: 2.0, sigma: 0.47 }),
            ],
        );

        let converted = set.into_lammps_real();
        assert_eq!(converted.units(), UnitSystem::LammpsReal);
        assert_eq!(converted.len(), 2);

        let first = converted.coefficients()[0];
        assert!(first.is_self_pair());
        assert!((first.sigma - 4.3).abs() < 1e-12);
        assert!((first.epsilon - 1.5 / 4.184).abs() < 1e-12);

        let second = converted.coefficients()[1];
        assert_eq!((second.type_a, second.type_b), (bead(1), bead(2)));
    }

    #[test]
    fn converting_twice_is_a_no_op() {
        let set = CoefficientSet::new(
            UnitSystem::Gromacs,
            vec![PairCoefficient::new(bead(1), bead(1), LjParameters { epsilon: 4.184, sigma: 0.5 })],
        );
        let once = set.into_lammps_real();
        let twice = once.clone().into_lammps_real();
        assert_eq!(once, twice);
        assert!((twice.coefficients()[0].epsilon - 1.0).abs() < 1e-12);
    }
}
