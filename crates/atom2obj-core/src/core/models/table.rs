use super::atom::AtomRecord;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Atoms of one snapshot keyed by their original index.
///
/// Iteration is always in ascending index order, which makes vertex numbering
/// deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomTable {
    atoms: BTreeMap<usize, AtomRecord>,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `atom` unless its index is already present.
    ///
    /// Returns `false` and leaves the existing record untouched on a duplicate index.
    pub fn insert(&mut self, atom: AtomRecord) -> bool {
        match self.atoms.entry(atom.index) {
            Entry::Vacant(slot) => {
                slot.insert(atom);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&AtomRecord> {
        self.atoms.get(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.atoms.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Atoms in ascending original index order.
    pub fn iter(&self) -> impl Iterator<Item = &AtomRecord> {
        self.atoms.values()
    }
}

#[cfg(test)]
impl AtomTable {
    /// Builds a table for tests. Panics on a repeated index.
    pub(crate) fn from_records(atoms: impl IntoIterator<Item = AtomRecord>) -> Self {
        let mut table = Self::new();
        for atom in atoms {
            let index = atom.index;
            assert!(table.insert(atom), "duplicate atom index {}", index);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom(index: usize, atom_type: i32) -> AtomRecord {
        AtomRecord::from_position(index, atom_type, Point3::origin())
    }

    #[test]
    fn iteration_is_ascending_regardless_of_insertion_order() {
        let table = AtomTable::from_records([atom(30, 1), atom(2, 1), atom(17, 1)]);
        let order: Vec<usize> = table.iter().map(|a| a.index).collect();
        assert_eq!(order, vec![2, 17, 30]);
    }

    #[test]
    fn insert_rejects_duplicate_index_without_overwriting() {
        let mut table = AtomTable::new();
        assert!(table.insert(atom(4, 1)));
        assert!(!table.insert(atom(4, 9)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(4).unwrap().atom_type, 1);
    }

    #[test]
    fn lookups_report_missing_indices() {
        let table = AtomTable::from_records([atom(1, 1)]);
        assert!(table.contains(1));
        assert!(!table.contains(2));
        assert!(table.get(2).is_none());
        assert!(!table.is_empty());
    }

    #[test]
    #[should_panic(expected = "duplicate atom index 3")]
    fn test_tables_refuse_repeated_indices() {
        AtomTable::from_records([atom(3, 1), atom(3, 2)]);
    }
}
