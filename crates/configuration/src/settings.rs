use serde::Deserialize;

/// The root configuration structure for the library.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineSettings,
}

/// Tunables for the calculation engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// The integer-exponent guard in `power`: two integer operands with an
    /// exponent above this limit are rejected as overflow before any
    /// computation is attempted.
    pub power_exponent_limit: i64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            power_exponent_limit: 10_000,
        }
    }
}
