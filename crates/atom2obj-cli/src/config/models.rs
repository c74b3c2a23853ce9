use atom2obj::engine::config::TranslationConfig;

pub struct AppConfig {
    pub translation: TranslationConfig,
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSettings {
    pub converter: String,
    pub keep_intermediate: bool,
}
