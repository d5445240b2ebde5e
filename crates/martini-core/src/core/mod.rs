//! # Core Module
//!
//! Fundamental building blocks for coefficient generation.
//!
//! - **Data Models** ([`models`]) - Bead type mappings, pair styles and pair coefficients
//! - **Units** ([`units`]) - GROMACS to LAMMPS `real` unit conversion
//! - **File I/O** ([`io`]) - Mapping file parser, reference database, LAMMPS directive writer

pub mod io;
pub mod models;
pub mod units;
