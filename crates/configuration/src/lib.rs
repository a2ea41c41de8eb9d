// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{EngineSettings, Settings};

/// Loads the library configuration from an `abacus.toml` file.
///
/// The file is optional: embedding applications that ship no configuration
/// get the built-in defaults. Values that are present are validated before
/// being returned.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `abacus.toml`.
        .add_source(config::File::with_name("abacus").required(false))
        .build()?;

    // Attempt to deserialize the configuration into our `Settings` struct.
    let settings = builder.try_deserialize::<Settings>()?;

    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.engine.power_exponent_limit <= 0 {
        return Err(ConfigError::Validation(
            "engine.power_exponent_limit must be positive".to_string(),
        ));
    }
    Ok(())
}
