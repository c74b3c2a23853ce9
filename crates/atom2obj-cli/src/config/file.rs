use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileFilterConfig {
    #[serde(rename = "max-edge-length-squared")]
    pub max_edge_length_squared: Option<f64>,
    #[serde(rename = "max-area-squared")]
    pub max_area_squared: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileMaterialsConfig {
    pub palette: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileBatchConfig {
    pub converter: Option<String>,
    #[serde(rename = "keep-intermediate")]
    pub keep_intermediate: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "scale-factor")]
    pub scale_factor: Option<f64>,
    pub filter: Option<FileFilterConfig>,
    pub materials: Option<FileMaterialsConfig>,
    pub batch: Option<FileBatchConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
