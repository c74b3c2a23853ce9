use crate::core::io::error::FormatError;
use crate::core::io::obj::ObjVertex;
use crate::core::models::angle::AngleRecord;
use crate::core::models::atom::AtomRecord;
use crate::core::models::table::AtomTable;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Original atom indices named by at least one angle.
pub type ReferencedVertices = BTreeSet<usize>;

/// Scans every angle once and returns the set of atom indices they reference.
///
/// Nothing is checked against the atom table here; dangling references surface in the
/// face stage.
pub fn collect_references<I>(angles: I) -> Result<ReferencedVertices, FormatError>
where
    I: IntoIterator<Item = Result<AngleRecord, FormatError>>,
{
    let mut referenced = ReferencedVertices::new();
    for angle in angles {
        referenced.extend(angle?.atoms);
    }
    Ok(referenced)
}

/// Output of the vertex stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexEmission {
    /// Vertices in compact index order (position `i` holds compact index `i + 1`).
    pub vertices: Vec<ObjVertex>,
    index_remap: HashMap<usize, usize>,
    type_remap: Vec<i32>,
}

impl VertexEmission {
    /// Compact 1-based index assigned to the original atom `index`.
    pub fn compact_index(&self, index: usize) -> Option<usize> {
        self.index_remap.get(&index).copied()
    }

    /// Atom type of the vertex with the given compact index.
    pub fn atom_type(&self, compact: usize) -> Option<i32> {
        compact
            .checked_sub(1)
            .and_then(|slot| self.type_remap.get(slot))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push(&mut self, atom: &AtomRecord, scale_factor: f64) {
        let compact = self.vertices.len() + 1;
        self.vertices.push(ObjVertex {
            coordinates: format_coordinates(atom, scale_factor),
        });
        self.index_remap.insert(atom.index, compact);
        self.type_remap.push(atom.atom_type);
    }
}

fn format_coordinates(atom: &AtomRecord, scale_factor: f64) -> [String; 3] {
    if scale_factor == 1.0 {
        return atom.coordinate_text.clone();
    }
    let p = atom.position * scale_factor;
    [p.x.to_string(), p.y.to_string(), p.z.to_string()]
}

/// Walks `table` in ascending index order and emits one vertex per referenced atom.
///
/// Compact indices start at 1 and advance only when an atom is kept, so the output is
/// contiguous whatever gaps the original numbering has.
pub fn emit_vertices(
    table: &AtomTable,
    referenced: &ReferencedVertices,
    scale_factor: f64,
) -> VertexEmission {
    let mut emission = VertexEmission::default();
    for atom in table.iter().filter(|a| referenced.contains(&a.index)) {
        emission.push(atom, scale_factor);
    }
    debug!(
        "Emitted {} of {} atoms as vertices ({} referenced).",
        emission.len(),
        table.len(),
        referenced.len()
    );
    emission
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn table() -> AtomTable {
        AtomTable::from_records([
            AtomRecord::from_position(10, 1, Point3::new(1.0, 2.0, 3.0)),
            AtomRecord::from_position(3, 2, Point3::new(0.0, 0.0, 0.0)),
            AtomRecord::from_position(7, 3, Point3::new(-1.0, 0.5, 0.0)),
            AtomRecord::from_position(5, 4, Point3::new(9.0, 9.0, 9.0)),
        ])
    }

    fn angle(atoms: [usize; 3]) -> Result<AngleRecord, FormatError> {
        Ok(AngleRecord::new(1, "1", "1", atoms))
    }

    #[test]
    fn collect_references_unions_all_angles() {
        let referenced =
            collect_references(vec![angle([3, 7, 10]), angle([10, 3, 42])]).unwrap();
        assert_eq!(
            referenced.into_iter().collect::<Vec<_>>(),
            vec![3, 7, 10, 42]
        );
    }

    #[test]
    fn collect_references_propagates_parse_errors() {
        let err = FormatError::InvalidInt {
            line: 9,
            field: 3,
            value: "x".into(),
        };
        let result = collect_references(vec![angle([1, 2, 3]), Err(err.clone())]);
        assert_eq!(result, Err(err));
    }

    #[test]
    fn unreferenced_atoms_consume_no_index() {
        let referenced: ReferencedVertices = [3, 7, 10].into_iter().collect();
        let emission = emit_vertices(&table(), &referenced, 1.0);

        assert_eq!(emission.len(), 3);
        assert_eq!(emission.compact_index(3), Some(1));
        assert_eq!(emission.compact_index(7), Some(2));
        assert_eq!(emission.compact_index(10), Some(3));
        assert_eq!(emission.compact_index(5), None);

        assert_eq!(emission.atom_type(1), Some(2));
        assert_eq!(emission.atom_type(2), Some(3));
        assert_eq!(emission.atom_type(3), Some(1));
        assert_eq!(emission.atom_type(0), None);
        assert_eq!(emission.atom_type(4), None);
    }

    #[test]
    fn remap_is_a_bijection_onto_contiguous_range() {
        let referenced: ReferencedVertices = [3, 5, 7, 10, 99].into_iter().collect();
        let emission = emit_vertices(&table(), &referenced, 1.0);

        let mut compact: Vec<usize> = [3, 5, 7, 10]
            .iter()
            .filter_map(|&i| emission.compact_index(i))
            .collect();
        assert_eq!(compact, vec![1, 2, 3, 4]);
        compact.dedup();
        assert_eq!(compact.len(), emission.len());
        assert_eq!(emission.compact_index(99), None);
    }

    #[test]
    fn unit_scale_copies_input_text() {
        let mut table = AtomTable::new();
        table.insert(AtomRecord::new(
            1,
            1,
            1,
            Point3::new(0.1, 2.0, -3.0),
            ["1.000e-1".into(), "2.0".into(), "-3.".into()],
        ));
        let referenced: ReferencedVertices = [1].into_iter().collect();
        let emission = emit_vertices(&table, &referenced, 1.0);
        assert_eq!(emission.vertices[0].coordinates, ["1.000e-1", "2.0", "-3."]);
    }

    #[test]
    fn scaled_coordinates_are_multiplied() {
        let referenced: ReferencedVertices = [10].into_iter().collect();
        let emission = emit_vertices(&table(), &referenced, 2.0);
        assert_eq!(emission.vertices[0].coordinates, ["2", "4", "6"]);
    }

    #[test]
    fn empty_reference_set_emits_nothing() {
        let emission = emit_vertices(&table(), &ReferencedVertices::new(), 1.0);
        assert!(emission.is_empty());
    }
}
