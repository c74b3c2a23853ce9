use thiserror::Error;

/// Malformed or inconsistent snapshot content.
///
/// Every variant aborts the translation of the current file. Line numbers are 1-based
/// and refer to the input text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Missing required section: '{0}'")]
    MissingSection(&'static str),

    #[error(
        "Line {line} in section '{section}' has {found} field(s), at least {expected} required"
    )]
    TruncatedLine {
        line: usize,
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid integer in field {field} on line {line} (value: '{value}')")]
    InvalidInt {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("Invalid float in field {field} on line {line} (value: '{value}')")]
    InvalidFloat {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("Duplicate atom index {index} on line {line}")]
    DuplicateAtom { line: usize, index: usize },

    #[error("Angle on line {line} references atom {atom}, which is not in the 'Atoms' section")]
    DanglingReference { line: usize, atom: usize },

    #[error(
        "Angle on line {line} uses atom {atom} of type {atom_type}; material lookup requires types starting at 1"
    )]
    InvalidMaterialType {
        line: usize,
        atom: usize,
        atom_type: i32,
    },
}
