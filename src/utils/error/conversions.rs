//! Error conversion implementations

use super::types::AppError;
use std::sync::Arc;

// The claims cache hands back loader failures behind an Arc. None of the
// wrapped source errors are Clone, so the variant is kept and the source is
// flattened into its message.
impl From<Arc<AppError>> for AppError {
    fn from(err: Arc<AppError>) -> Self {
        match err.as_ref() {
            AppError::Auth(message) => AppError::Auth(message.clone()),
            AppError::Jwt(e) => AppError::Auth(format!("Invalid ID token: {}", e)),
            AppError::Identity(message) => AppError::Identity(message.clone()),
            AppError::Unauthorized(message) => AppError::Unauthorized(message.clone()),
            AppError::Forbidden(message) => AppError::Forbidden(message.clone()),
            AppError::NotFound(message) => AppError::NotFound(message.clone()),
            AppError::Validation(message) => AppError::Validation(message.clone()),
            other => AppError::Internal(other.to_string()),
        }
    }
}
