use super::config::TranslationConfig;
use super::vertices::VertexEmission;
use crate::core::io::error::FormatError;
use crate::core::io::obj::ObjFace;
use crate::core::models::angle::AngleRecord;
use crate::core::models::table::AtomTable;
use crate::core::utils::geometry::TriangleMetrics;
use tracing::trace;

/// Counts of what happened to the angles of one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceStats {
    pub accepted: usize,
    pub rejected_edge: usize,
    pub rejected_area: usize,
}

impl FaceStats {
    pub fn rejected(&self) -> usize {
        self.rejected_edge + self.rejected_area
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceOutcome {
    Accepted(ObjFace),
    RejectedEdge,
    RejectedArea,
}

/// Decides for each angle whether it becomes a face.
pub struct FaceFilter<'a> {
    table: &'a AtomTable,
    emission: &'a VertexEmission,
    config: &'a TranslationConfig,
}

impl<'a> FaceFilter<'a> {
    pub fn new(
        table: &'a AtomTable,
        emission: &'a VertexEmission,
        config: &'a TranslationConfig,
    ) -> Self {
        Self {
            table,
            emission,
            config,
        }
    }

    /// Validates, measures and remaps a single angle.
    ///
    /// # Errors
    ///
    /// [`FormatError::DanglingReference`] if any atom has no vertex, and
    /// [`FormatError::InvalidMaterialType`] if a palette is set and the face's atom type
    /// is below 1.
    pub fn evaluate(&self, angle: &AngleRecord) -> Result<FaceOutcome, FormatError> {
        let mut compact = [0usize; 3];
        let mut positions = Vec::with_capacity(3);
        for (slot, &atom) in angle.atoms.iter().enumerate() {
            let dangling = FormatError::DanglingReference {
                line: angle.line,
                atom,
            };
            compact[slot] = self.emission.compact_index(atom).ok_or(dangling.clone())?;
            positions.push(self.table.get(atom).ok_or(dangling)?.position);
        }

        let metrics = TriangleMetrics::new(&positions[0], &positions[1], &positions[2]);
        if metrics.max_edge_squared() > self.config.max_edge_length_squared {
            trace!(
                "Dropping angle on line {}: squared edge {} exceeds {}",
                angle.line,
                metrics.max_edge_squared(),
                self.config.max_edge_length_squared
            );
            return Ok(FaceOutcome::RejectedEdge);
        }
        if metrics.area_squared > self.config.max_area_squared {
            trace!(
                "Dropping angle on line {}: squared area {} exceeds {}",
                angle.line, metrics.area_squared, self.config.max_area_squared
            );
            return Ok(FaceOutcome::RejectedArea);
        }

        let material = self.material_for(angle, compact[0])?;
        Ok(FaceOutcome::Accepted(ObjFace {
            vertices: compact,
            material,
        }))
    }

    fn material_for(
        &self,
        angle: &AngleRecord,
        compact: usize,
    ) -> Result<Option<String>, FormatError> {
        let Some(palette) = &self.config.palette else {
            return Ok(None);
        };
        let atom = angle.atoms[0];
        let atom_type = self
            .emission
            .atom_type(compact)
            .ok_or(FormatError::DanglingReference {
                line: angle.line,
                atom,
            })?;
        if atom_type < 1 {
            return Err(FormatError::InvalidMaterialType {
                line: angle.line,
                atom,
                atom_type,
            });
        }
        let slot = (atom_type as usize - 1) % palette.len();
        Ok(Some(palette[slot].clone()))
    }

    /// Runs every angle through [`evaluate`](Self::evaluate) and collects accepted faces.
    ///
    /// The first error aborts the pass; no faces are returned in that case.
    pub fn filter_all<I>(&self, angles: I) -> Result<(Vec<ObjFace>, FaceStats), FormatError>
    where
        I: IntoIterator<Item = Result<AngleRecord, FormatError>>,
    {
        let mut faces = Vec::new();
        let mut stats = FaceStats::default();
        for angle in angles {
            match self.evaluate(&angle?)? {
                FaceOutcome::Accepted(face) => {
                    stats.accepted += 1;
                    faces.push(face);
                }
                FaceOutcome::RejectedEdge => stats.rejected_edge += 1,
                FaceOutcome::RejectedArea => stats.rejected_area += 1,
            }
        }
        Ok((faces, stats))
    }
}
