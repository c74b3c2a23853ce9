use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const HEADER_COMMENT: &str = "# Generated by atom2obj";

/// One `v` line. Coordinates are kept as already-formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjVertex {
    pub coordinates: [String; 3],
}

/// One `f` line with compact 1-based vertex indices, optionally followed by `usemtl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjFace {
    pub vertices: [usize; 3],
    pub material: Option<String>,
}

/// A triangle mesh ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjMesh {
    /// File name written on the `mtllib` line, if materials are in use.
    pub material_library: Option<String>,
    pub vertices: Vec<ObjVertex>,
    pub faces: Vec<ObjFace>,
}

pub struct ObjFile;

impl ObjFile {
    /// Writes `mesh` in OBJ layout: header, optional `mtllib`, vertex list, triangle list.
    pub fn write_to(mesh: &ObjMesh, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER_COMMENT)?;
        if let Some(library) = &mesh.material_library {
            writeln!(writer, "mtllib {}", library)?;
        }

        writeln!(writer)?;
        writeln!(writer, "# Vertex list")?;
        writeln!(writer)?;
        for vertex in &mesh.vertices {
            let [x, y, z] = &vertex.coordinates;
            writeln!(writer, "v {} {} {}", x, y, z)?;
        }

        writeln!(writer)?;
        writeln!(writer, "# Triangle list")?;
        writeln!(writer)?;
        for face in &mesh.faces {
            let [a, b, c] = face.vertices;
            writeln!(writer, "f {} {} {}", a, b, c)?;
            if let Some(material) = &face.material {
                writeln!(writer, "usemtl {}", material)?;
            }
        }
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(mesh: &ObjMesh, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(mesh, &mut writer)?;
        writer.flush()
    }
}
