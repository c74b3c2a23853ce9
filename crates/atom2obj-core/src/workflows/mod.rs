//! # Workflows Module
//!
//! High-level entry points. A workflow reads a snapshot, runs both engine stages in
//! order and writes the resulting mesh.
//!
//! - **Translation Workflow** ([`translate`]) - One atom-dump file in, one OBJ file out.

pub mod translate;
