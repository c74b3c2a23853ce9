/// One entry of the `Angles` section, read as a triangle `A B C`.
///
/// The id and type tokens are passed through untouched; only the three atom
/// references carry meaning for the mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AngleRecord {
    /// 1-based line number in the source text.
    pub line: usize,
    pub id: String,
    pub angle_type: String,
    /// Atom references in source order. Winding depends on this order.
    pub atoms: [usize; 3],
}

impl AngleRecord {
    pub fn new(line: usize, id: &str, angle_type: &str, atoms: [usize; 3]) -> Self {
        Self {
            line,
            id: id.to_string(),
            angle_type: angle_type.to_string(),
            atoms,
        }
    }
}
