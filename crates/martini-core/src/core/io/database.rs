use crate::core::models::coefficient::LjParameters;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

const SIGMA_FIELD: usize = 3;
const EPSILON_FIELD: usize = 4;
/// Decimal places kept for sigma and epsilon when they are read.
const VALUE_PRECISION: usize = 6;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No match for {first} {second} pair coeffs")]
    NoMatch { first: String, second: String },
    #[error("Multiple matches for {first} {second} pair coeffs (database lines {lines:?})")]
    AmbiguousMatch {
        first: String,
        second: String,
        lines: Vec<usize>,
    },
    #[error("Malformed database row on line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
}

/// One whitespace-delimited line of the parameter database.
///
/// Field layout: `label1 label2 <unused> sigma(nm) epsilon(kJ/mol) [...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseRow {
    pub line: usize,
    fields: Vec<String>,
}

impl DatabaseRow {
    fn parse(line: usize, content: &str) -> Option<Self> {
        let fields: Vec<String> = content.split_whitespace().map(str::to_string).collect();
        (fields.len() >= 2).then_some(Self { line, fields })
    }

    pub fn labels(&self) -> (&str, &str) {
        (&self.fields[0], &self.fields[1])
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Unordered label match: `{label1, label2} == {first, second}`.
    pub fn matches(&self, first: &str, second: &str) -> bool {
        let (l1, l2) = self.labels();
        (l1 == first && l2 == second) || (l1 == second && l2 == first)
    }

    /// Extracts `epsilon` from field 4 and `sigma` from field 3, rounded to
    /// six decimals before any unit conversion.
    pub fn parameters(&self) -> Result<LjParameters, DatabaseError> {
        let epsilon = self.numeric_field(EPSILON_FIELD, "epsilon")?;
        let sigma = self.numeric_field(SIGMA_FIELD, "sigma")?;
        Ok(LjParameters { epsilon, sigma })
    }

    fn numeric_field(&self, index: usize, name: &str) -> Result<f64, DatabaseError> {
        let raw = self.fields.get(index).ok_or_else(|| DatabaseError::MalformedRow {
            line: self.line,
            reason: format!(
                "expected at least {} fields, found {}",
                EPSILON_FIELD + 1,
                self.fields.len()
            ),
        })?;
        raw.parse()
            .map(round_value)
            .map_err(|_| DatabaseError::MalformedRow {
                line: self.line,
                reason: format!("{} value '{}' is not a number", name, raw),
            })
    }
}

fn round_value(value: f64) -> f64 {
    format!("{:.*}", VALUE_PRECISION, value)
        .parse()
        .unwrap_or(value)
}

/// MARTINI nonbonded parameter table in GROMACS units, loaded into memory once.
///
/// Row order follows the file. Lines with fewer than two fields can never match
/// a label pair and are not kept.
#[derive(Debug, Clone, Default)]
pub struct MartiniDatabase {
    rows: Vec<DatabaseRow>,
}

impl MartiniDatabase {
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, DatabaseError> {
        let mut rows = Vec::new();
        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if let Some(row) = DatabaseRow::parse(line_num + 1, &line) {
                rows.push(row);
            }
        }
        debug!("Loaded {} candidate rows from parameter database.", rows.len());
        Ok(Self { rows })
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    pub fn rows(&self) -> &[DatabaseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows whose label pair equals `{first, second}`, in file order.
    ///
    /// For `first == second` only explicit self-interaction rows match.
    pub fn find_matches(&self, first: &str, second: &str) -> Vec<&DatabaseRow> {
        self.rows
            .iter()
            .filter(|row| row.matches(first, second))
            .collect()
    }

    /// Resolves the parameters for a label pair. Exactly one row must match.
    pub fn lookup(&self, first: &str, second: &str) -> Result<LjParameters, DatabaseError> {
        let matches = self.find_matches(first, second);
        match matches.as_slice() {
            [] => Err(DatabaseError::NoMatch {
                first: first.to_string(),
                second: second.to_string(),
            }),
            [row] => {
                trace!(line = row.line, "MATCH FOUND {:?}", row.fields());
                row.parameters()
            }
            rows => Err(DatabaseError::AmbiguousMatch {
                first: first.to_string(),
                second: second.to_string(),
                lines: rows.iter().map(|row| row.line).collect(),
            }),
        }
    }
}
