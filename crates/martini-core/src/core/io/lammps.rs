use crate::core::models::coefficient::CoefficientSet;
use crate::core::models::mapping::TypeLabelMap;
use crate::core::models::style::{Cutoffs, PairStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const HEADER_LINES: [&str; 2] = [
    "# MARTINI force field",
    "# The bead id and its martini label are as follows",
];

/// A rendered LAMMPS pair coefficient file.
///
/// ```text
/// # MARTINI force field
/// # The bead id and its martini label are as follows
/// # 1 TC5
/// # 2 TP1
/// pair_style lj/gromacs 9.0 12.0
/// pair_coeff 1 1 0.358509 4.300000 9.0 12.0
/// pair_coeff 1 2 0.478011 4.700000 9.0 12.0
/// pair_coeff 2 2 1.075526 4.700000 9.0 12.0
/// ```
///
/// All values are in LAMMPS `real` units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCoeffDocument {
    legend: Vec<String>,
    pair_style: String,
    pair_coeffs: Vec<String>,
    pair_modify: Option<String>,
}

impl PairCoeffDocument {
    /// Formats the directive block for `style`.
    ///
    /// Cutoffs and coefficients are converted to LAMMPS `real` units first if
    /// they are still in GROMACS units.
    pub fn build(
        mapping: &TypeLabelMap,
        style: PairStyle,
        cutoffs: Cutoffs,
        coefficients: CoefficientSet,
    ) -> Self {
        let cutoffs = cutoffs.to_lammps_real();
        let coefficients = coefficients.into_lammps_real();

        let cutoff_params = if style.uses_inner_cutoff() {
            format!("{} {}", format_cutoff(cutoffs.inner), format_cutoff(cutoffs.outer))
        } else {
            format_cutoff(cutoffs.outer)
        };

        let legend = mapping
            .iter()
            .map(|(bead_type, label)| format!("# {} {}", bead_type, label))
            .collect();

        let pair_coeffs = coefficients
            .coefficients()
            .iter()
            .map(|c| {
                format!(
                    "pair_coeff {} {} {:.6} {:.6} {}",
                    c.type_a, c.type_b, c.epsilon, c.sigma, cutoff_params
                )
            })
            .collect();

        Self {
            legend,
            pair_style: format!("pair_style {} {}", style, cutoff_params),
            pair_coeffs,
            pair_modify: style.needs_shift().then(|| "pair_modify shift yes".to_string()),
        }
    }

    pub fn pair_style_line(&self) -> &str {
        &self.pair_style
    }

    pub fn pair_coeff_lines(&self) -> &[String] {
        &self.pair_coeffs
    }

    pub fn pair_modify_line(&self) -> Option<&str> {
        self.pair_modify.as_deref()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        HEADER_LINES
            .into_iter()
            .chain(self.legend.iter().map(String::as_str))
            .chain(std::iter::once(self.pair_style.as_str()))
            .chain(self.pair_coeffs.iter().map(String::as_str))
            .chain(self.pair_modify.as_deref())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}

/// Shortest round-trip decimal form, keeping a trailing `.0` on integral values.
fn format_cutoff(value: f64) -> String {
    format!("{:?}", value)
}
