use super::error::FormatError;
use super::sections::{ANGLES, ATOMS, SectionLines, find_section};
use crate::core::models::angle::AngleRecord;
use crate::core::models::atom::AtomRecord;
use crate::core::models::table::AtomTable;
use nalgebra::Point3;
use std::str::FromStr;

const ATOM_FIELDS: usize = 6;
const ANGLE_FIELDS: usize = 5;

fn split_fields<'a>(
    line_num: usize,
    line: &'a str,
    section: &'static str,
    expected: usize,
) -> Result<Vec<&'a str>, FormatError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < expected {
        return Err(FormatError::TruncatedLine {
            line: line_num,
            section,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Parses the 1-based `field` of `fields` as an integer of type `T`.
fn parse_int<T: FromStr>(line_num: usize, fields: &[&str], field: usize) -> Result<T, FormatError> {
    let value = fields[field - 1];
    value.parse().map_err(|_| FormatError::InvalidInt {
        line: line_num,
        field,
        value: value.into(),
    })
}

fn parse_coordinate(line_num: usize, fields: &[&str], field: usize) -> Result<f64, FormatError> {
    let value = fields[field - 1];
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormatError::InvalidFloat {
            line: line_num,
            field,
            value: value.into(),
        }),
    }
}

/// Parses one `Atoms` data line: `<index> <molecule> <type> <x> <y> <z> ...`.
///
/// Trailing fields (image flags, charges) are ignored.
pub fn parse_atom_line(line_num: usize, line: &str) -> Result<AtomRecord, FormatError> {
    let fields = split_fields(line_num, line, ATOMS, ATOM_FIELDS)?;

    let index: usize = parse_int(line_num, &fields, 1)?;
    let molecule: i64 = parse_int(line_num, &fields, 2)?;
    let atom_type: i32 = parse_int(line_num, &fields, 3)?;
    let x = parse_coordinate(line_num, &fields, 4)?;
    let y = parse_coordinate(line_num, &fields, 5)?;
    let z = parse_coordinate(line_num, &fields, 6)?;

    Ok(AtomRecord::new(
        index,
        molecule,
        atom_type,
        Point3::new(x, y, z),
        [fields[3].into(), fields[4].into(), fields[5].into()],
    ))
}

/// Parses one `Angles` data line: `<angle-id> <angle-type> <atomA> <atomB> <atomC> ...`.
pub fn parse_angle_line(line_num: usize, line: &str) -> Result<AngleRecord, FormatError> {
    let fields = split_fields(line_num, line, ANGLES, ANGLE_FIELDS)?;

    let a: usize = parse_int(line_num, &fields, 3)?;
    let b: usize = parse_int(line_num, &fields, 4)?;
    let c: usize = parse_int(line_num, &fields, 5)?;

    Ok(AngleRecord::new(line_num, fields[0], fields[1], [a, b, c]))
}

/// Iterator over the parsed records of the `Angles` section.
///
/// Stops after the first error is yielded.
#[derive(Debug, Clone)]
pub struct Angles<'a> {
    lines: SectionLines<'a>,
    failed: bool,
}

impl Iterator for Angles<'_> {
    type Item = Result<AngleRecord, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (line_num, line) = self.lines.next()?;
        let record = parse_angle_line(line_num, line);
        self.failed = record.is_err();
        Some(record)
    }
}

/// A materialized atom-dump snapshot.
///
/// Holds the complete text so that each section can be walked as many times as needed,
/// every walk with its own cursor.
#[derive(Debug, Clone, Copy)]
pub struct AtomDump<'a> {
    text: &'a str,
}

impl<'a> AtomDump<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    fn require_section(&self, name: &'static str) -> Result<(), FormatError> {
        find_section(self.text, name)
            .map(|_| ())
            .ok_or(FormatError::MissingSection(name))
    }

    /// Parses the `Atoms` section into an ordered table.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the section is missing, a line is truncated or holds an
    /// unparsable number, or an atom index repeats.
    pub fn atom_table(&self) -> Result<AtomTable, FormatError> {
        self.require_section(ATOMS)?;

        let mut table = AtomTable::new();
        for (line_num, line) in SectionLines::new(self.text, ATOMS) {
            let atom = parse_atom_line(line_num, line)?;
            let index = atom.index;
            if !table.insert(atom) {
                return Err(FormatError::DuplicateAtom {
                    line: line_num,
                    index,
                });
            }
        }
        Ok(table)
    }

    /// Starts a fresh pass over the `Angles` section.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingSection`] if the text has no `Angles` header.
    pub fn angles(&self) -> Result<Angles<'a>, FormatError> {
        self.require_section(ANGLES)?;
        Ok(Angles {
            lines: SectionLines::new(self.text, ANGLES),
            failed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = "\
LAMMPS data file via write_data

4 atoms
2 angles

Atoms # angle

3 1 2 0.0 1.0 0.0 0 0 0
1 1 2 0.0 0.0 0.0 0 0 0
2 1 2 1.0 0.0 0.0 0 0 0
4 2 1 5.0e-1 5.0e-1 1.0 0 0 0

Velocities

1 0 0 0

Angles

1 1 1 2 3
2 3 2 4 3
";

    #[test]
    fn atom_table_is_sorted_and_complete() {
        let table = AtomDump::new(SNAPSHOT).atom_table().unwrap();
        let order: Vec<usize> = table.iter().map(|a| a.index).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);

        let atom = table.get(4).unwrap();
        assert_eq!(atom.molecule, 2);
        assert_eq!(atom.atom_type, 1);
        assert_eq!(atom.position, Point3::new(0.5, 0.5, 1.0));
        assert_eq!(atom.coordinate_text, ["5.0e-1", "5.0e-1", "1.0"]);
    }

    #[test]
    fn angles_are_parsed_in_source_order() {
        let angles: Vec<AngleRecord> = AtomDump::new(SNAPSHOT)
            .angles()
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(angles.len(), 2);
        assert_eq!(angles[0].atoms, [1, 2, 3]);
        assert_eq!(angles[1].atoms, [2, 4, 3]);
        assert_eq!(angles[1].id, "2");
        assert_eq!(angles[1].angle_type, "3");
        assert_eq!(angles[1].line, 20);
    }

    #[test]
    fn missing_sections_are_reported() {
        let dump = AtomDump::new("Atoms\n\n1 1 1 0 0 0\n");
        assert!(dump.atom_table().is_ok());
        assert_eq!(
            dump.angles().unwrap_err(),
            FormatError::MissingSection(ANGLES)
        );
        assert_eq!(
            AtomDump::new("Angles\n\n1 1 1 2 3\n").atom_table(),
            Err(FormatError::MissingSection(ATOMS))
        );
    }

    #[test]
    fn fields_borrow_from_the_source_line() {
        let line = String::from("7 2 3 0.5 0.5 0.5 0 0 1");
        let fields = split_fields(4, &line, ATOMS, ATOM_FIELDS).unwrap();
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[8], "1");
        assert!(std::ptr::eq(fields[0].as_ptr(), line.as_ptr()));
    }

    #[test]
    fn truncated_atom_line_fails() {
        let err = parse_atom_line(12, "1 1 1 0.0 0.0").unwrap_err();
        assert_eq!(
            err,
            FormatError::TruncatedLine {
                line: 12,
                section: ATOMS,
                expected: 6,
                found: 5,
            }
        );
    }

    #[test]
    fn unparsable_fields_are_never_defaulted() {
        assert!(matches!(
            parse_atom_line(1, "x 1 1 0 0 0"),
            Err(FormatError::InvalidInt { field: 1, .. })
        ));
        assert!(matches!(
            parse_atom_line(1, "-1 1 1 0 0 0"),
            Err(FormatError::InvalidInt { field: 1, .. })
        ));
        assert!(matches!(
            parse_atom_line(1, "1 1 1 0 abc 0"),
            Err(FormatError::InvalidFloat { field: 5, ref value, .. }) if value == "abc"
        ));
        assert!(matches!(
            parse_atom_line(1, "1 1 1 0 0 nan"),
            Err(FormatError::InvalidFloat { field: 6, .. })
        ));
        assert!(matches!(
            parse_angle_line(1, "1 1 1 2.5 3"),
            Err(FormatError::InvalidInt { field: 4, .. })
        ));
    }

    #[test]
    fn truncated_angle_line_fails() {
        assert!(matches!(
            parse_angle_line(3, "1 1 1 2"),
            Err(FormatError::TruncatedLine {
                line: 3,
                expected: 5,
                found: 4,
                ..
            })
        ));
    }

    #[test]
    fn duplicate_atom_index_is_rejected() {
        let text = "Atoms\n\n1 1 1 0 0 0\n2 1 1 1 0 0\n1 1 1 5 5 5\n";
        assert_eq!(
            AtomDump::new(text).atom_table(),
            Err(FormatError::DuplicateAtom { line: 5, index: 1 })
        );
    }

    #[test]
    fn angle_iteration_stops_after_first_error() {
        let text = "Angles\n\n1 1 1 2 3\n2 1 oops 2 3\n3 1 1 2 3\n";
        let results: Vec<_> = AtomDump::new(text).angles().unwrap().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(FormatError::InvalidInt { line: 4, field: 3, .. })
        ));
    }
}
