use nalgebra::Point3;

/// A single atom as read from the `Atoms` section of a snapshot.
///
/// Besides the parsed position, the record keeps the coordinate tokens exactly as they
/// appeared in the input so that an unscaled translation reproduces them byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The original atom index (first field of the line).
    pub index: usize,
    /// The molecule id (second field). Not used by the mesh, kept for diagnostics.
    pub molecule: i64,
    /// The atom type code (third field). Drives material selection.
    pub atom_type: i32,
    /// The raw, unscaled position.
    pub position: Point3<f64>,
    /// The x, y and z tokens as written in the input.
    pub coordinate_text: [String; 3],
}

impl AtomRecord {
    pub fn new(
        index: usize,
        molecule: i64,
        atom_type: i32,
        position: Point3<f64>,
        coordinate_text: [String; 3],
    ) -> Self {
        Self {
            index,
            molecule,
            atom_type,
            position,
            coordinate_text,
        }
    }
}

#[cfg(test)]
impl AtomRecord {
    /// Builds a record whose coordinate text is the shortest round-trip form of `position`.
    pub(crate) fn from_position(index: usize, atom_type: i32, position: Point3<f64>) -> Self {
        let coordinate_text = [
            position.x.to_string(),
            position.y.to_string(),
            position.z.to_string(),
        ];
        Self::new(index, 0, atom_type, position, coordinate_text)
    }
}
