use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load settings from abacus.toml: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Settings validation error: {0}")]
    Validation(String),
}
