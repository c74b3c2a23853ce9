//! # Core Module
//!
//! Fundamental building blocks of the translator: the snapshot data model, the text
//! formats on both ends of the pipeline and the triangle geometry used for filtering.
//!
//! ## Architecture
//!
//! - **Snapshot Representation** ([`models`]) - Atoms, the ordered atom table and angle triples
//! - **File I/O** ([`io`]) - Section extraction, atom-dump parsing and OBJ emission
//! - **Geometry** ([`utils`]) - Squared edge lengths and squared cross-product magnitude

pub mod io;
pub mod models;
pub mod utils;
