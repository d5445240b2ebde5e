//! # Models Module
//!
//! Plain data types shared by the I/O layer and the engine.
//!
//! - [`mapping`] - Ordered bead type to MARTINI label mapping
//! - [`coefficient`] - Lennard-Jones parameters and per-pair coefficients
//! - [`style`] - Supported LAMMPS pair styles and their cutoffs

pub mod coefficient;
pub mod mapping;
pub mod style;
