//! Conversion of domain and request errors into HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sf_core::errors::{AuthError, DomainError};
use sf_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Error type returned by route handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request data")]
    Validation(#[from] ValidationErrors),

    /// Malformed request body
    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => domain_status(error),
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => domain_error_response(error),
            ApiError::Validation(errors) => validation_error_response(errors),
            ApiError::BadRequest(message) => HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::BAD_REQUEST, message.as_str())),
        }
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::PaymentDeclined => StatusCode::PAYMENT_REQUIRED,
        DomainError::Auth(AuthError::AuthenticationFailed) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::UserAlreadyExists) => StatusCode::BAD_REQUEST,
        DomainError::Auth(AuthError::RegistrationDisabled) => StatusCode::FORBIDDEN,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn domain_error_response(error: &DomainError) -> HttpResponse {
    let status = domain_status(error);

    let body = match error {
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error");
            ErrorResponse::new(error.error_code(), "An internal error occurred")
        }
        DomainError::Unauthorized => ErrorResponse::new(
            error.error_code(),
            "Authentication credentials were not provided",
        ),
        DomainError::Forbidden => ErrorResponse::new(
            error.error_code(),
            "You do not have permission to perform this action",
        ),
        DomainError::PaymentDeclined => {
            ErrorResponse::new(error.error_code(), "Your card was declined")
        }
        DomainError::ValidationErr(validation) => {
            ErrorResponse::new(error.error_code(), validation.to_string())
                .add_detail("field", validation.field())
        }
        other => ErrorResponse::new(other.error_code(), other.to_string()),
    };

    if status.is_client_error() {
        tracing::debug!(status = status.as_u16(), code = %body.error, "Request rejected");
    }

    HttpResponse::build(status).json(body)
}

fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.add_detail(field.to_string(), messages);
    }

    HttpResponse::BadRequest().json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::errors::{TokenError, ValidationError};

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::Unauthorized, 401),
            (DomainError::Forbidden, 403),
            (DomainError::not_found("Order"), 404),
            (DomainError::PaymentDeclined, 402),
            (AuthError::AuthenticationFailed.into(), 401),
            (AuthError::UserAlreadyExists.into(), 400),
            (TokenError::TokenExpired.into(), 401),
            (DomainError::internal("boom"), 500),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status_code().as_u16(), status);
        }
    }

    #[test]
    fn test_validation_error_status() {
        let error = DomainError::from(ValidationError::InvalidFormat {
            field: "card_number".to_string(),
        });
        let response = ApiError::from(error).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
