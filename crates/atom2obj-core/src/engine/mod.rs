//! # Engine Module
//!
//! Builds a mesh from a parsed snapshot in two ordered stages.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Scale factor, filter thresholds and the material palette
//! - **Error Handling** ([`error`]) - Translation errors wrapping format and I/O failures
//! - **Vertex Stage** ([`vertices`]) - Angle reference collection, pruning and compact reindexing
//! - **Face Stage** ([`faces`]) - Reference validation, geometric filtering and material selection
//!
//! The vertex stage must finish before the face stage starts: compact indices depend on
//! which atoms are referenced at all, and faces are written in terms of compact indices.

pub mod config;
pub mod error;
pub mod faces;
pub mod vertices;
