use crate::core::units::{self, UnitSystem};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// LAMMPS pair styles the generator can emit directives for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PairStyle {
    /// `lj/gromacs`: LJ with a GROMACS-style switching region between the
    /// inner and outer cutoff.
    #[default]
    LjGromacs,
    /// `lj/cut`: truncated LJ, shifted to zero at the cutoff.
    LjCut,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unsupported pair style '{0}'. Only 'lj/gromacs' or 'lj/cut' are allowed")]
pub struct UnsupportedPairStyle(pub String);

impl PairStyle {
    pub const ALL: [PairStyle; 2] = [PairStyle::LjGromacs, PairStyle::LjCut];

    pub fn name(self) -> &'static str {
        match self {
            PairStyle::LjGromacs => "lj/gromacs",
            PairStyle::LjCut => "lj/cut",
        }
    }

    /// Whether the style takes an inner (switching) cutoff.
    pub fn uses_inner_cutoff(self) -> bool {
        matches!(self, PairStyle::LjGromacs)
    }

    /// Whether the style needs `pair_modify shift yes` after the coefficients.
    pub fn needs_shift(self) -> bool {
        matches!(self, PairStyle::LjCut)
    }
}

impl fmt::Display for PairStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PairStyle {
    type Err = UnsupportedPairStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PairStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| UnsupportedPairStyle(s.to_string()))
    }
}

/// Outer and inner (switching) cutoff distances, tagged with their unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoffs {
    pub outer: f64,
    pub inner: f64,
    pub units: UnitSystem,
}

impl Cutoffs {
    pub fn in_nm(outer: f64, inner: f64) -> Self {
        Self {
            outer,
            inner,
            units: UnitSystem::Gromacs,
        }
    }

    /// Converts to Å. Cutoffs already in LAMMPS units are returned unchanged.
    pub fn to_lammps_real(self) -> Self {
        match self.units {
            UnitSystem::LammpsReal => self,
            UnitSystem::Gromacs => Self {
                outer: units::nm_to_angstrom(self.outer),
                inner: units::nm_to_angstrom(self.inner),
                units: UnitSystem::LammpsReal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_styles() {
        assert_eq!("lj/gromacs".parse(), Ok(PairStyle::LjGromacs));
        assert_eq!("lj/cut".parse(), Ok(PairStyle::LjCut));
    }

    #[test]
    fn rejects_unknown_style() {
        let err = "lj/foo".parse::<PairStyle>().unwrap_err();
        assert_eq!(err, UnsupportedPairStyle("lj/foo".to_string()));
        assert!(err.to_string().contains("lj/foo"));
    }

    #[test]
    fn matching_is_exact() {
        assert!("LJ/CUT".parse::<PairStyle>().is_err());
        assert!(" lj/cut".parse::<PairStyle>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for style in PairStyle::ALL {
            assert_eq!(style.to_string().parse(), Ok(style));
        }
    }

    #[test]
    fn style_specific_directives() {
        assert!(PairStyle::LjGromacs.uses_inner_cutoff());
        assert!(!PairStyle::LjGromacs.needs_shift());
        assert!(!PairStyle::LjCut.uses_inner_cutoff());
        assert!(PairStyle::LjCut.needs_shift());
    }

    #[test]
    fn cutoffs_convert_once() {
        let cutoffs = Cutoffs::in_nm(1.2, 0.9).to_lammps_real();
        assert_eq!(cutoffs.outer, 12.0);
        assert_eq!(cutoffs.inner, 9.0);
        assert_eq!(cutoffs.units, UnitSystem::LammpsReal);
        assert_eq!(cutoffs.to_lammps_real(), cutoffs);
    }
}
