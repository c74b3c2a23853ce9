//! # atom2obj Core Library
//!
//! Converts molecular-dynamics snapshots written in the LAMMPS atom-dump text format
//! into OBJ triangle meshes. Every entry of the `Angles` section is read as one
//! triangle over three atoms of the `Atoms` section.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`, `AtomTable`,
//!   `AngleRecord`), the section-based text reader, the OBJ writer and small geometry
//!   helpers.
//!
//! - **[`engine`]: The Mesh Builder.** Translation configuration, error types and the two
//!   ordered building stages: vertex emission with index compaction, then face filtering
//!   against edge-length and area thresholds.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a single
//!   `translate(input, output, config)` call.

pub mod core;
pub mod engine;
pub mod workflows;
