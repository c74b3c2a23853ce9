use std::iter::Enumerate;
use std::str::Lines;

pub const ATOMS: &str = "Atoms";
pub const ANGLES: &str = "Angles";

/// Returns `true` if the first whitespace-delimited token of `line` is `name`.
///
/// Only the first token is compared so that headers such as `Atoms # full` match.
fn is_header(line: &str, name: &str) -> bool {
    line.split_whitespace().next() == Some(name)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seeking,
    Separator,
    Data,
    Done,
}

/// Lazy iterator over the data lines of one named section.
///
/// Yields `(line_number, line)` pairs with 1-based line numbers. The header line and the
/// single blank separator after it are skipped; the section ends at the next blank line
/// or at the end of the text. A section that never occurs yields nothing.
///
/// The iterator borrows the text, so a second pass is simply a second `SectionLines`.
#[derive(Debug, Clone)]
pub struct SectionLines<'a> {
    lines: Enumerate<Lines<'a>>,
    name: &'a str,
    state: State,
}

impl<'a> SectionLines<'a> {
    pub fn new(text: &'a str, name: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            name,
            state: State::Seeking,
        }
    }

    fn finish(&mut self) -> Option<(usize, &'a str)> {
        self.state = State::Done;
        None
    }
}

impl<'a> Iterator for SectionLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Done => return None,
                State::Seeking => {
                    let Some((_, line)) = self.lines.next() else {
                        return self.finish();
                    };
                    if is_header(line, self.name) {
                        self.state = State::Separator;
                    }
                }
                State::Separator => {
                    let Some((idx, line)) = self.lines.next() else {
                        return self.finish();
                    };
                    self.state = State::Data;
                    if !is_blank(line) {
                        return Some((idx + 1, line));
                    }
                }
                State::Data => {
                    let Some((idx, line)) = self.lines.next() else {
                        return self.finish();
                    };
                    if is_blank(line) {
                        return self.finish();
                    }
                    return Some((idx + 1, line));
                }
            }
        }
    }
}

/// Returns the 1-based line number of the first header of section `name`, if any.
pub fn find_section(text: &str, name: &str) -> Option<usize> {
    text.lines()
        .position(|line| is_header(line, name))
        .map(|idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = "\
LAMMPS data file

3 atoms
1 angles

Atoms # angle

1 1 1 0.0 0.0 0.0
2 1 1 1.0 0.0 0.0
3 1 1 0.0 1.0 0.0

Angles

1 1 1 2 3
";

    #[test]
    fn yields_data_lines_with_line_numbers() {
        let lines: Vec<_> = SectionLines::new(SNAPSHOT, ATOMS).collect();
        assert_eq!(
            lines,
            vec![
                (8, "1 1 1 0.0 0.0 0.0"),
                (9, "2 1 1 1.0 0.0 0.0"),
                (10, "3 1 1 0.0 1.0 0.0"),
            ]
        );
    }

    #[test]
    fn section_at_end_of_input_stops_at_eof() {
        let lines: Vec<_> = SectionLines::new(SNAPSHOT, ANGLES).collect();
        assert_eq!(lines, vec![(14, "1 1 1 2 3")]);
    }

    #[test]
    fn header_with_trailing_tokens_is_recognised() {
        assert_eq!(find_section(SNAPSHOT, ATOMS), Some(6));
        assert_eq!(find_section(SNAPSHOT, ANGLES), Some(12));
    }

    #[test]
    fn missing_section_yields_nothing() {
        assert_eq!(SectionLines::new(SNAPSHOT, "Bonds").count(), 0);
        assert_eq!(find_section(SNAPSHOT, "Bonds"), None);
    }

    #[test]
    fn similarly_named_sections_do_not_match() {
        let text = "Angle Coeffs\n\n1 100.0 180.0\n\nAngles\n\n1 1 1 2 3\n";
        let lines: Vec<_> = SectionLines::new(text, ANGLES).collect();
        assert_eq!(lines, vec![(7, "1 1 1 2 3")]);
    }

    #[test]
    fn only_one_separator_line_is_skipped() {
        let text = "Atoms\n\n\n1 1 1 0 0 0\n";
        assert_eq!(SectionLines::new(text, ATOMS).count(), 0);
    }

    #[test]
    fn data_directly_after_header_is_accepted() {
        let text = "Atoms\n1 1 1 0 0 0\n2 1 1 1 0 0\n\nVelocities\n";
        let lines: Vec<_> = SectionLines::new(text, ATOMS).collect();
        assert_eq!(lines, vec![(2, "1 1 1 0 0 0"), (3, "2 1 1 1 0 0")]);
    }

    #[test]
    fn whitespace_only_line_terminates_section() {
        let text = "Atoms\n\n1 1 1 0 0 0\n   \n2 1 1 1 0 0\n";
        assert_eq!(SectionLines::new(text, ATOMS).count(), 1);
    }

    #[test]
    fn each_pass_has_its_own_cursor() {
        let mut first = SectionLines::new(SNAPSHOT, ATOMS);
        first.next();
        let second: Vec<_> = SectionLines::new(SNAPSHOT, ATOMS).collect();
        assert_eq!(second.len(), 3);
        assert_eq!(first.count(), 2);
    }
}
