//! Server-side error types

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_URL must be an absolute http(s) URL, got {0:?}")]
    InvalidSiteUrl(String),
}

/// Errors that stop the server from starting or serving
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load Leptos configuration: {0}")]
    Leptos(String),

    #[error("Failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts_into_server_error() {
        let err: ServerError = ConfigError::InvalidSiteUrl("nope".into()).into();
        assert!(matches!(err, ServerError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: SITE_URL must be an absolute http(s) URL, got \"nope\""
        );
    }

    #[test]
    fn test_bind_error_message() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        assert_eq!(
            ServerError::Bind(io).to_string(),
            "Failed to bind listener: address in use"
        );
    }
}
