use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

/// Input problems that are reported back to the user as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("servings must be a positive number, got {0}")]
    InvalidServings(f64),

    #[error("please select a food item")]
    MissingSelection,

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    #[error("invalid email")]
    InvalidEmail,

    #[error("name must not be empty")]
    EmptyName,

    #[error("no image provided")]
    EmptyImage,

    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),
}

/// Failures surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no active session")]
    NoSession,

    #[error("no account for {0}")]
    UnknownEmail(String),

    #[error("email already registered")]
    EmailTaken,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NoSession => StatusCode::UNAUTHORIZED,
            AppError::UnknownEmail(_) => StatusCode::NOT_FOUND,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for (StatusCode, String) {
    fn from(e: AppError) -> Self {
        if let AppError::Internal(inner) = &e {
            error!(error = %inner, "request failed");
        }
        (e.status(), e.to_string())
    }
}

impl From<ValidationError> for (StatusCode, String) {
    fn from(e: ValidationError) -> Self {
        AppError::from(e).into()
    }
}
