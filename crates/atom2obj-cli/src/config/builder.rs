use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, BatchSettings};
use crate::cli::TranslationArgs;
use crate::error::{CliError, Result};
use atom2obj::engine::config::TranslationConfigBuilder;

/// Merges built-in defaults, the config file, `--set` values and CLI flags, in that order.
pub fn build_config(args: &TranslationArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let scale_factor = args
        .scale_factor
        .or(file_config.scale_factor)
        .unwrap_or(defaults.scale_factor);

    let filter_file = file_config.filter.take().unwrap_or_default();
    let max_edge_length_squared = args
        .max_edge_length_squared
        .or(filter_file.max_edge_length_squared)
        .unwrap_or(defaults.max_edge_length_squared);
    let max_area_squared = args
        .max_area_squared
        .or(filter_file.max_area_squared)
        .unwrap_or(defaults.max_area_squared);

    let palette = if args.no_palette {
        None
    } else {
        args.palette
            .clone()
            .or_else(|| file_config.materials.take().and_then(|m| m.palette))
    };

    let translation = TranslationConfigBuilder::new()
        .scale_factor(scale_factor)
        .max_edge_length_squared(max_edge_length_squared)
        .max_area_squared(max_area_squared)
        .palette(palette)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let batch_file = file_config.batch.take().unwrap_or_default();
    let batch = BatchSettings {
        converter: batch_file.converter.unwrap_or(defaults.converter),
        keep_intermediate: batch_file
            .keep_intermediate
            .unwrap_or(defaults.keep_intermediate),
    };

    Ok(AppConfig { translation, batch })
}

fn parse_value<T: std::str::FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "scale-factor" => {
                config.scale_factor = Some(parse_value(key, value_str, "float")?);
            }
            "filter.max-edge-length-squared" => {
                config
                    .filter
                    .get_or_insert_with(Default::default)
                    .max_edge_length_squared = Some(parse_value(key, value_str, "float")?);
            }
            "filter.max-area-squared" => {
                config
                    .filter
                    .get_or_insert_with(Default::default)
                    .max_area_squared = Some(parse_value(key, value_str, "float")?);
            }
            "materials.palette" => {
                config.materials.get_or_insert_with(Default::default).palette = Some(
                    value_str
                        .split(',')
                        .map(|name| name.trim().to_string())
                        .collect(),
                );
            }
            "batch.converter" => {
                config.batch.get_or_insert_with(Default::default).converter =
                    Some(value_str.to_string());
            }
            "batch.keep-intermediate" => {
                config
                    .batch
                    .get_or_insert_with(Default::default)
                    .keep_intermediate = Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
