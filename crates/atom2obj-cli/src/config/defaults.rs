pub struct DefaultsConfig {
    pub scale_factor: f64,
    pub max_edge_length_squared: f64,
    pub max_area_squared: f64,
    pub converter: String,
    pub keep_intermediate: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            max_edge_length_squared: 2.0,
            max_area_squared: 2.0,
            converter: "restart2data".to_string(),
            keep_intermediate: false,
        }
    }
}
