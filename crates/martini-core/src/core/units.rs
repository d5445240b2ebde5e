//! Conversion between GROMACS units (nm, kJ/mol) and LAMMPS `real` units (Å, kcal/mol).

pub const NM_TO_ANGSTROM: f64 = 10.0;
pub const KJ_TO_KCAL: f64 = 1.0 / 4.184;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Lengths in nm, energies in kJ/mol.
    Gromacs,
    /// Lengths in Å, energies in kcal/mol.
    LammpsReal,
}

impl UnitSystem {
    pub fn length_unit(self) -> &'static str {
        match self {
            UnitSystem::Gromacs => "nm",
            UnitSystem::LammpsReal => "Å",
        }
    }

    pub fn energy_unit(self) -> &'static str {
        match self {
            UnitSystem::Gromacs => "kJ/mol",
            UnitSystem::LammpsReal => "kcal/mol",
        }
    }
}

#[inline]
pub fn nm_to_angstrom(length_nm: f64) -> f64 {
    length_nm * NM_TO_ANGSTROM
}

#[inline]
pub fn kj_to_kcal(energy_kj: f64) -> f64 {
    energy_kj * KJ_TO_KCAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_scale_by_ten() {
        assert!((nm_to_angstrom(0.47) - 4.7).abs() < 1e-12);
        assert_eq!(nm_to_angstrom(1.2), 12.0);
        assert_eq!(nm_to_angstrom(0.9), 9.0);
    }

    #[test]
    fn energies_divide_by_thermochemical_calorie() {
        assert_eq!(format!("{:.6}", kj_to_kcal(2.0)), "0.478011");
        assert!((kj_to_kcal(4.184) - 1.0).abs() < 1e-12);
    }
}
