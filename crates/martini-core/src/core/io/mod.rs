//! # I/O Module
//!
//! Readers and writers for the three files the pipeline touches.
//!
//! - [`mapping`] - `<type> <label>` mapping file (e.g. `martini.inp`)
//! - [`database`] - GROMACS-format MARTINI parameter database (e.g. `martini_v3.0.0.itp`)
//! - [`lammps`] - LAMMPS pair coefficient document (e.g. `paircoeffs.txt`)

pub mod database;
pub mod lammps;
pub mod mapping;
