/// Errors produced while loading a merge configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document could not be parsed.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for config results.
pub type ConfigResult<T> = Result<T, ConfigError>;
