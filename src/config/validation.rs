//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation beyond what serde enforces syntactically
//! - Check endpoint URLs actually parse
//! - Check value ranges (batch size, timeouts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the parsed config
//! - Runs once at startup, before the config is accepted

use url::Url;

use crate::config::schema::BotConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &BotConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Url::parse(&config.service.base_url) {
        errors.push(ValidationError {
            field: "service.base_url",
            message: format!("invalid URL '{}': {}", config.service.base_url, e),
        });
    }
    if let Err(e) = Url::parse(&config.chain.rpc_url) {
        errors.push(ValidationError {
            field: "chain.rpc_url",
            message: format!("invalid URL '{}': {}", config.chain.rpc_url, e),
        });
    }
    if config.service.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "service.request_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "chain.rpc_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.draws.batch_size == 0 {
        errors.push(ValidationError {
            field: "draws.batch_size",
            message: "must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&BotConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let mut config = BotConfig::default();
        config.draws.batch_size = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "draws.batch_size");
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut config = BotConfig::default();
        config.service.base_url = "not a url".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "service.base_url");
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = BotConfig::default();
        config.service.base_url = "::".to_string();
        config.chain.rpc_url = String::new();
        config.draws.batch_size = 0;
        config.service.request_timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
