use serde::Serialize;
use uuid::Uuid;

/// Unified error type for wishlist operations.
///
/// Visibility checks never produce errors (a permission check fails closed);
/// denied access surfaces from the service layer as [`ServiceError::Forbidden`].
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(
        #[from]
        #[serde(skip)]
        sea_orm::error::DbErr,
    ),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Concurrent modification: {0}")]
    ConcurrentModification(Uuid),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Other error: {0}")]
    Other(
        #[from]
        #[serde(skip)]
        anyhow::Error,
    ),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl ServiceError {
    /// True when retrying the same call with the same input cannot succeed.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::ValidationError(_)
                | Self::InvalidOperation(_)
                | Self::Unauthorized(_)
                | Self::Forbidden(_)
                | Self::Conflict(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert() {
        use validator::Validate;

        #[derive(Validate)]
        struct Input {
            #[validate(range(min = 1))]
            quantity: i32,
        }

        let err: ServiceError = Input { quantity: 0 }.validate().unwrap_err().into();
        assert!(matches!(err, ServiceError::ValidationError(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn database_errors_are_not_client_errors() {
        let err = ServiceError::DatabaseError(sea_orm::error::DbErr::Custom("boom".into()));
        assert!(!err.is_client_error());
    }
}
