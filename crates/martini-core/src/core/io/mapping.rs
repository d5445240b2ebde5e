use crate::core::models::mapping::{BeadType, TypeLabelMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Leading characters that mark comment or directive lines in a mapping file.
const COMMENT_MARKERS: [char; 3] = ['#', '$', '@'];

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: expected '<type> <label>', found {found} field(s)")]
    MissingField { line: usize, found: usize },
    #[error("Line {line}: bead type '{value}' is not a positive integer")]
    InvalidType { line: usize, value: String },
    #[error("Line {line}: bead type {bead_type} is mapped more than once")]
    DuplicateType { line: usize, bead_type: BeadType },
}

/// Reader for the bead type mapping file (conventionally `martini.inp`).
///
/// ```text
/// # type  label
///   1     TC5
///   2     TP1
/// ```
///
/// Lines starting with `#`, `$` or `@` are skipped. Every other line, blank
/// ones included, must hold a type and a label; fields after the label are
/// ignored.
pub struct MappingFile;

impl MappingFile {
    pub fn read_from(reader: &mut impl BufRead) -> Result<TypeLabelMap, MappingError> {
        let mut map = TypeLabelMap::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let trimmed = line.trim();
            if trimmed.starts_with(COMMENT_MARKERS) {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() < 2 {
                return Err(MappingError::MissingField {
                    line: line_num,
                    found: fields.len(),
                });
            }

            let bead_type = fields[0]
                .parse::<u32>()
                .ok()
                .and_then(BeadType::new)
                .ok_or_else(|| MappingError::InvalidType {
                    line: line_num,
                    value: fields[0].to_string(),
                })?;

            if !map.insert(bead_type, fields[1]) {
                return Err(MappingError::DuplicateType {
                    line: line_num,
                    bead_type,
                });
            }
        }

        Ok(map)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<TypeLabelMap, MappingError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
