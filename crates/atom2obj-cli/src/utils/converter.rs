use crate::error::{CliError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// External program that turns a restart snapshot into an atom dump.
///
/// Invoked as `<program> <restart> <atom-dump>`.
#[derive(Debug, Clone)]
pub struct SnapshotConverter {
    program: String,
}

impl SnapshotConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn convert(&self, restart: &Path, atom_dump: &Path) -> Result<()> {
        debug!(
            "Running '{} {} {}'",
            self.program,
            restart.display(),
            atom_dump.display()
        );
        let output = Command::new(&self.program)
            .arg(restart)
            .arg(atom_dump)
            .output()
            .map_err(|e| self.failure(restart, format!("could not start: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(
                restart,
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }
        Ok(())
    }

    fn failure(&self, restart: &Path, reason: String) -> CliError {
        CliError::Converter {
            program: self.program.clone(),
            input: restart.to_path_buf(),
            reason,
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn successful_program_produces_output() {
        let dir = tempdir().unwrap();
        let restart = dir.path().join("a.restart.1");
        let atom = dir.path().join("a.1.atom");
        fs::write(&restart, "Atoms\n").unwrap();

        SnapshotConverter::new("cp").convert(&restart, &atom).unwrap();
        assert_eq!(fs::read_to_string(&atom).unwrap(), "Atoms\n");
    }

    #[test]
    fn non_zero_exit_is_an_error() {
        let dir = tempdir().unwrap();
        let restart = dir.path().join("missing.restart.1");
        let atom = dir.path().join("missing.1.atom");

        let result = SnapshotConverter::new("cp").convert(&restart, &atom);
        assert!(matches!(result, Err(CliError::Converter { .. })));
    }

    #[test]
    fn unknown_program_is_an_error() {
        let dir = tempdir().unwrap();
        let result = SnapshotConverter::new("atom2obj-no-such-converter")
            .convert(&dir.path().join("x"), &dir.path().join("y"));
        match result {
            Err(CliError::Converter { program, reason, .. }) => {
                assert_eq!(program, "atom2obj-no-such-converter");
                assert!(reason.starts_with("could not start"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
