use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    InvalidInput(String),

    #[error("You are not logged in. Run `login` first.")]
    Unauthenticated,

    #[error("{0}")]
    Rejected(String),

    #[error("Cannot reach the server: {0}")]
    Unavailable(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::InvalidInput(msg) => AppError::InvalidInput(msg),
            DomainError::Unauthenticated => AppError::Unauthenticated,
            DomainError::Rejected(msg) => AppError::Rejected(msg),
            DomainError::Backend(msg) => AppError::Unavailable(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl AppError {
    /// Process exit status for the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) | AppError::Config(_) => 2,
            AppError::Unauthenticated => 3,
            AppError::NotFound | AppError::Rejected(_) => 4,
            AppError::Unavailable(_) => 5,
            AppError::Internal(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        assert_eq!(AppError::NotFound.to_string(), "Not found");
    }

    #[test]
    fn internal_error_display() {
        assert_eq!(
            AppError::Internal("msg".to_string()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn rejection_shows_server_message() {
        let app_err: AppError = DomainError::Rejected("Sai mật khẩu".to_string()).into();
        assert_eq!(app_err.to_string(), "Sai mật khẩu");
        assert_eq!(app_err.exit_code(), 4);
    }

    #[test]
    fn domain_backend_maps_to_unavailable() {
        let app_err: AppError = DomainError::Backend("HTTP error! status: 502".to_string()).into();
        assert!(matches!(app_err, AppError::Unavailable(_)));
        assert_eq!(app_err.exit_code(), 5);
    }

    #[test]
    fn domain_unauthenticated_maps_to_app_unauthenticated() {
        let app_err: AppError = DomainError::Unauthenticated.into();
        assert!(matches!(app_err, AppError::Unauthenticated));
        assert_eq!(app_err.exit_code(), 3);
    }

    #[test]
    fn domain_invalid_input_keeps_message() {
        let app_err: AppError = DomainError::InvalidInput("pate: -1 is negative".to_string()).into();
        assert_eq!(app_err.to_string(), "pate: -1 is negative");
        assert_eq!(app_err.exit_code(), 2);
    }

    #[test]
    fn config_error_converts() {
        let app_err: AppError = ConfigError::InvalidValue {
            key: "ORDERING_HTTP_TIMEOUT_SECS",
            expected: "a positive number of seconds",
            value: "x".to_string(),
        }
        .into();
        assert!(matches!(app_err, AppError::Config(_)));
    }
}
