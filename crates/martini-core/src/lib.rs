//! # MARTINI Pair-Coefficient Library
//!
//! Converts a MARTINI coarse-grained force-field parameter database, written in
//! GROMACS units (nm, kJ/mol), into LAMMPS `pair_style` / `pair_coeff` directives
//! in LAMMPS `real` units (Å, kcal/mol).
//!
//! ## Architectural Philosophy
//!
//! The library follows the same three-layer split used across the project:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`TypeLabelMap`,
//!   `PairCoefficient`, `PairStyle`), unit conversion constants, and the file
//!   readers and writers for the mapping file, the reference database and the
//!   LAMMPS coefficient file.
//!
//! - **[`engine`]: The Logic Core.** Run configuration, error types, progress
//!   reporting, and the enumeration of unordered type pairs against the database.
//!
//! - **[`workflows`]: The Public API.** The end-to-end generation pipeline:
//!   validate, parse, look up, convert, format, write.

pub mod core;
pub mod engine;
pub mod workflows;
