use async_graphql::ErrorExtensions;
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Doctor {0} not found")]
    DoctorNotFound(i32),

    #[error("Patient {0} not found")]
    PatientNotFound(i32),

    #[error("Appointment {0} not found")]
    AppointmentNotFound(i32),

    #[error("Invalid {kind} id: {value}")]
    InvalidId { kind: &'static str, value: String },
}

impl BookingError {
    /// Machine-readable code placed under `extensions.code` in GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::DoctorNotFound(_)
            | BookingError::PatientNotFound(_)
            | BookingError::AppointmentNotFound(_) => "NOT_FOUND",
            BookingError::InvalidId { .. } => "BAD_USER_INPUT",
        }
    }
}

impl ErrorExtensions for BookingError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code.to_string()))
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidId { .. } => AppError::BadRequest(err.to_string()),
            _ => AppError::NotFound(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_graphql_error_carries_code() {
        let err = BookingError::AppointmentNotFound(42).extend();

        assert_eq!(err.message, "Appointment 42 not found");
        let extensions = serde_json::to_value(&err.extensions).unwrap();
        assert_eq!(extensions["code"], "NOT_FOUND");
    }

    #[test]
    fn test_app_error_mapping() {
        let not_found: AppError = BookingError::DoctorNotFound(1).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let bad: AppError = BookingError::InvalidId { kind: "doctor", value: "x".to_string() }.into();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bad.to_string(), "Bad Request: Invalid doctor id: x");
    }
}
