//! Data structures describing one parsed snapshot.

pub mod angle;
pub mod atom;
pub mod table;
