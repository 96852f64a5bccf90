use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Stage-scoped errors, one variant per pipeline stage
    #[error("{0}")]
    Validation(String),

    #[error("Could not resolve identifier: {message}")]
    Resolution { message: String },

    #[error("Failed to load leagues for season {season}: {message}")]
    Enumeration { season: i32, message: String },

    #[error("Failed to load league detail: {message}")]
    Detail { message: String },

    #[error("No response from server: {message} (URL: {url})")]
    Network { message: String, url: String },

    // Ambient errors
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a validation error for input rejected before any network call
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a resolution error carrying the backend's message
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::Resolution {
            message: message.into(),
        }
    }

    /// Create an enumeration error for a failed leagues query
    pub fn enumeration(season: i32, message: impl Into<String>) -> Self {
        Self::Enumeration {
            season,
            message: message.into(),
        }
    }

    /// Create a detail error for a failed league-detail query
    pub fn detail(message: impl Into<String>) -> Self {
        Self::Detail {
            message: message.into(),
        }
    }

    /// Create a network error for a request that got no response at all
    pub fn network(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if the error never reached the network
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Config(_) | AppError::LogSetup(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_helper() {
        let error = AppError::validation("Please enter a Sleeper username or user ID.");
        assert!(matches!(error, AppError::Validation(_)));
        assert_eq!(
            error.to_string(),
            "Please enter a Sleeper username or user ID."
        );
        assert!(error.is_local());
    }

    #[test]
    fn test_resolution_helper() {
        let error = AppError::resolution("Sleeper user 'ghost' not found.");
        assert!(matches!(error, AppError::Resolution { .. }));
        assert_eq!(
            error.to_string(),
            "Could not resolve identifier: Sleeper user 'ghost' not found."
        );
        assert!(!error.is_local());
    }

    #[test]
    fn test_enumeration_helper() {
        let error = AppError::enumeration(2024, "Server returned status 502");
        assert!(matches!(error, AppError::Enumeration { .. }));
        assert_eq!(
            error.to_string(),
            "Failed to load leagues for season 2024: Server returned status 502"
        );
    }

    #[test]
    fn test_detail_helper() {
        let error = AppError::detail("Server returned status 404");
        assert!(matches!(error, AppError::Detail { .. }));
        assert_eq!(
            error.to_string(),
            "Failed to load league detail: Server returned status 404"
        );
    }

    #[test]
    fn test_network_helper() {
        let error = AppError::network("connection refused", "http://localhost:8000/api/v1");
        assert!(matches!(error, AppError::Network { .. }));
        assert_eq!(
            error.to_string(),
            "No response from server: connection refused (URL: http://localhost:8000/api/v1)"
        );
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::validation("empty identifier"),
            AppError::resolution("not found"),
            AppError::enumeration(2025, "status 500"),
            AppError::detail("status 503"),
            AppError::network("timed out", "http://example.com"),
            AppError::config_error("bad config"),
            AppError::log_setup_error("bad log path"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                !display_string.is_empty(),
                "Error display should not be empty: {error:?}"
            );
        }
    }
}
