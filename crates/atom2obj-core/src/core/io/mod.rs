//! Provides input/output functionality for the formats on both ends of the translator.
//!
//! The input side reads the sectioned, whitespace-delimited atom-dump text produced by
//! LAMMPS-style `restart2data` converters. The output side writes the subset of the
//! Wavefront OBJ format needed for a triangle mesh with per-face materials.

pub mod error;
pub mod lammps;
pub mod obj;
pub mod sections;
