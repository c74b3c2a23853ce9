use thiserror::Error;

pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Material palette must contain at least one name")]
    EmptyPalette,
}

/// Settings shared by every translation of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Multiplies every emitted coordinate. Filtering always uses raw coordinates.
    pub scale_factor: f64,
    /// Faces with `|B - A|²` or `|C - A|²` above this value are dropped.
    pub max_edge_length_squared: f64,
    /// Faces with `|(B - A) × (C - A)|²` above this value are dropped.
    pub max_area_squared: f64,
    /// Material names indexed by `(atom_type - 1) mod len`. `None` disables materials.
    pub palette: Option<Vec<String>>,
}

impl TranslationConfig {
    pub fn is_scaled(&self) -> bool {
        self.scale_factor != 1.0
    }

    pub fn uses_materials(&self) -> bool {
        self.palette.is_some()
    }
}

#[derive(Default)]
pub struct TranslationConfigBuilder {
    scale_factor: Option<f64>,
    max_edge_length_squared: Option<f64>,
    max_area_squared: Option<f64>,
    palette: Option<Vec<String>>,
}

impl TranslationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale_factor(mut self, factor: f64) -> Self {
        self.scale_factor = Some(factor);
        self
    }
    pub fn max_edge_length_squared(mut self, threshold: f64) -> Self {
        self.max_edge_length_squared = Some(threshold);
        self
    }
    pub fn max_area_squared(mut self, threshold: f64) -> Self {
        self.max_area_squared = Some(threshold);
        self
    }
    pub fn palette(mut self, palette: Option<Vec<String>>) -> Self {
        self.palette = palette;
        self
    }

    pub fn build(self) -> Result<TranslationConfig, ConfigError> {
        let scale_factor = self.scale_factor.unwrap_or(DEFAULT_SCALE_FACTOR);
        if !scale_factor.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "scale_factor",
                reason: format!("must be finite, got {}", scale_factor),
            });
        }

        let max_edge_length_squared = validate_threshold(
            "max_edge_length_squared",
            self.max_edge_length_squared
                .ok_or(ConfigError::MissingParameter("max_edge_length_squared"))?,
        )?;
        let max_area_squared = validate_threshold(
            "max_area_squared",
            self.max_area_squared
                .ok_or(ConfigError::MissingParameter("max_area_squared"))?,
        )?;

        if let Some(palette) = &self.palette {
            if palette.is_empty() {
                return Err(ConfigError::EmptyPalette);
            }
            if let Some(bad) = palette
                .iter()
                .find(|name| name.is_empty() || name.contains(char::is_whitespace))
            {
                return Err(ConfigError::InvalidParameter {
                    name: "palette",
                    reason: format!("material name '{}' must be a single non-empty token", bad),
                });
            }
        }

        Ok(TranslationConfig {
            scale_factor,
            max_edge_length_squared,
            max_area_squared,
            palette: self.palette,
        })
    }
}

fn validate_threshold(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_nan() || value < 0.0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be a non-negative number, got {}", value),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> TranslationConfigBuilder {
        TranslationConfigBuilder::new()
            .max_edge_length_squared(2.0)
            .max_area_squared(2.0)
    }

    #[test]
    fn scale_defaults_to_one_and_palette_to_none() {
        let config = base().build().unwrap();
        assert_eq!(config.scale_factor, 1.0);
        assert!(!config.is_scaled());
        assert!(!config.uses_materials());
    }

    #[test]
    fn thresholds_are_required() {
        let result = TranslationConfigBuilder::new().max_area_squared(1.0).build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("max_edge_length_squared"))
        );
        let result = TranslationConfigBuilder::new()
            .max_edge_length_squared(1.0)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("max_area_squared")));
    }

    #[test]
    fn infinite_thresholds_disable_filtering_and_are_accepted() {
        let config = TranslationConfigBuilder::new()
            .max_edge_length_squared(f64::INFINITY)
            .max_area_squared(f64::INFINITY)
            .build()
            .unwrap();
        assert!(config.max_edge_length_squared.is_infinite());
    }

    #[test]
    fn negative_or_nan_thresholds_are_rejected() {
        assert!(matches!(
            base().max_edge_length_squared(-1.0).build(),
            Err(ConfigError::InvalidParameter {
                name: "max_edge_length_squared",
                ..
            })
        ));
        assert!(matches!(
            base().max_area_squared(f64::NAN).build(),
            Err(ConfigError::InvalidParameter {
                name: "max_area_squared",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_scale_is_rejected() {
        assert!(matches!(
            base().scale_factor(f64::INFINITY).build(),
            Err(ConfigError::InvalidParameter {
                name: "scale_factor",
                ..
            })
        ));
    }

    #[test]
    fn palette_must_be_non_empty_single_tokens() {
        assert_eq!(
            base().palette(Some(vec![])).build(),
            Err(ConfigError::EmptyPalette)
        );
        assert!(matches!(
            base()
                .palette(Some(vec!["red".into(), "dark blue".into()]))
                .build(),
            Err(ConfigError::InvalidParameter { name: "palette", .. })
        ));

        let config = base()
            .scale_factor(0.1)
            .palette(Some(vec!["red".into(), "blue".into()]))
            .build()
            .unwrap();
        assert!(config.is_scaled());
        assert!(config.uses_materials());
    }
}
