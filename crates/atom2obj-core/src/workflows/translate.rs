use crate::core::io::error::FormatError;
use crate::core::io::lammps::AtomDump;
use crate::core::io::obj::{ObjFile, ObjMesh};
use crate::engine::config::TranslationConfig;
use crate::engine::error::TranslateError;
use crate::engine::faces::{FaceFilter, FaceStats};
use crate::engine::vertices::{collect_references, emit_vertices};
use std::path::Path;
use tracing::{debug, info, instrument};

const FALLBACK_STEM: &str = "mesh";

/// What a translation kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    /// Atoms in the `Atoms` section.
    pub atoms: usize,
    /// Distinct atom indices named by any angle.
    pub referenced: usize,
    pub vertices: usize,
    pub faces: FaceStats,
}

/// Name written on the `mtllib` line for a given input file: `<stem>.mtl`.
pub fn material_library_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or(FALLBACK_STEM.into());
    format!("{}.mtl", stem)
}

/// Builds the mesh for an in-memory snapshot.
///
/// `material_library` is only used when the configuration carries a palette.
///
/// # Errors
///
/// Returns the first [`FormatError`] found; in that case no mesh is produced at all.
#[instrument(skip_all, name = "translate_text")]
pub fn run(
    text: &str,
    material_library: Option<&str>,
    config: &TranslationConfig,
) -> Result<(ObjMesh, TranslationSummary), FormatError> {
    let dump = AtomDump::new(text);

    let table = dump.atom_table()?;
    debug!("Parsed {} atoms.", table.len());

    let referenced = collect_references(dump.angles()?)?;
    if config.is_scaled() {
        debug!("Scaling output coordinates by {}.", config.scale_factor);
    }
    let emission = emit_vertices(&table, &referenced, config.scale_factor);

    let filter = FaceFilter::new(&table, &emission, config);
    let (faces, stats) = filter.filter_all(dump.angles()?)?;
    debug!(
        "Kept {} faces, dropped {} (edge: {}, area: {}).",
        stats.accepted,
        stats.rejected(),
        stats.rejected_edge,
        stats.rejected_area
    );

    let summary = TranslationSummary {
        atoms: table.len(),
        referenced: referenced.len(),
        vertices: emission.len(),
        faces: stats,
    };
    let mesh = ObjMesh {
        material_library: if config.uses_materials() {
            material_library.map(str::to_string)
        } else {
            None
        },
        vertices: emission.vertices,
        faces,
    };
    Ok((mesh, summary))
}

/// Translates the atom-dump file at `input` into an OBJ mesh at `output`.
///
/// The input is read completely before anything is written; the output file is only
/// created once the mesh has been built, so a malformed snapshot leaves no output behind.
///
/// # Errors
///
/// [`TranslateError::Io`] if the input cannot be read or the output cannot be written,
/// [`TranslateError::Malformed`] if the snapshot is invalid.
#[instrument(skip_all, fields(input = %input.as_ref().display()))]
pub fn translate<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &TranslationConfig,
) -> Result<TranslationSummary, TranslateError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = std::fs::read_to_string(input).map_err(|source| TranslateError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let library = material_library_name(input);
    let (mesh, summary) =
        run(&text, Some(&library), config).map_err(|source| TranslateError::Malformed {
            path: input.to_path_buf(),
            source,
        })?;

    ObjFile::write_to_path(&mesh, output).map_err(|source| TranslateError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} vertices and {} faces to {:?}",
        summary.vertices, summary.faces.accepted, output
    );
    Ok(summary)
}
