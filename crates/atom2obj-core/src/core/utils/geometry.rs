use nalgebra::Point3;

/// Squared size measures of the triangle `A B C`, taken from vertex `A`.
///
/// No square roots are taken; callers compare against squared thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleMetrics {
    /// `|B - A|²`
    pub edge_ab_squared: f64,
    /// `|C - A|²`
    pub edge_ac_squared: f64,
    /// `|(B - A) × (C - A)|²`, i.e. four times the squared triangle area.
    pub area_squared: f64,
}

impl TriangleMetrics {
    pub fn new(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Self {
        let ab = b - a;
        let ac = c - a;
        Self {
            edge_ab_squared: ab.norm_squared(),
            edge_ac_squared: ac.norm_squared(),
            area_squared: ab.cross(&ac).norm_squared(),
        }
    }

    pub fn max_edge_squared(&self) -> f64 {
        self.edge_ab_squared.max(self.edge_ac_squared)
    }
}
