//! HTTP-facing error type and the mapping from service errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tt_core::error::TicketError;

/// Error as it leaves the HTTP layer.
///
/// Service errors are mapped here before they reach the wire. For the
/// ticket mutations the mapping deliberately loses information: a missing
/// ticket and a storage fault both surface as the same generic 400 so the
/// response does not reveal which ticket ids exist. The distinction is
/// kept in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 404 with the entity name and id.
    NotFound { resource: String, id: String },
    /// 401 with the rule that denied the caller.
    Unauthorized { message: String },
    /// 400 with a caller-actionable message.
    BadRequest { message: String },
    /// 500 with a generic body; detail goes to the log only.
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => format!("{} {} was not found", resource, id),
            Self::Unauthorized { message } => message.clone(),
            Self::BadRequest { message } => message.clone(),
            Self::Internal { .. } => "An internal error occurred".to_string(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Unauthorized { .. } => "unauthorized",
            Self::BadRequest { .. } => "bad_request",
            Self::Internal { .. } => "internal",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { message } = &self {
            tracing::error!(detail = %message, "internal error");
        }
        let body = ErrorBody {
            error: self.code(),
            message: self.message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Direct mapping, used where the full error taxonomy may surface
/// (ticket creation). The mutation handlers go through
/// [`collapse_mutation_error`] instead.
impl From<TicketError> for ApiError {
    fn from(err: TicketError) -> Self {
        match err {
            TicketError::NotFound { entity, id } => Self::not_found(entity, id),
            TicketError::Unauthorized { message } => Self::unauthorized(message),
            TicketError::BadInput { message } => Self::bad_request(message),
            // RePrompt is handled by the creation handler before this
            // conversion; reaching it here means a handler forgot to.
            TicketError::RePrompt { reason } => Self::bad_request(reason),
            TicketError::Fault(message) => Self::internal(message),
        }
    }
}

/// Error mapping for the three ticket mutations (toggle complete, change
/// hours, toggle watch).
///
/// Authorization denials keep their message and become 401. Everything
/// else, including a ticket that does not exist and repository faults,
/// collapses to one generic 400. The internal kind is logged at warn
/// before it is discarded.
pub fn collapse_mutation_error(err: TicketError) -> ApiError {
    match err {
        TicketError::Unauthorized { message } => ApiError::unauthorized(message),
        other => {
            tracing::warn!(code = other.error_code(), error = %other, "mutation failed");
            ApiError::bad_request("The request could not be processed")
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            ApiError::not_found("Ticket", 7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::unauthorized("no").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_body_does_not_leak_detail() {
        let err = ApiError::internal("connection pool exhausted");
        assert_eq!(err.message(), "An internal error occurred");
    }

    #[test]
    fn collapse_keeps_unauthorized_verbatim() {
        let err = collapse_mutation_error(TicketError::unauthorized(
            "Only developers assigned to this project can watch the tasks",
        ));
        assert_eq!(
            err,
            ApiError::unauthorized(
                "Only developers assigned to this project can watch the tasks"
            )
        );
    }

    #[test]
    fn collapse_hides_missing_ticket_and_faults_behind_same_response() {
        let from_missing = collapse_mutation_error(TicketError::not_found("Ticket", 42));
        let from_fault = collapse_mutation_error(TicketError::fault("db down"));
        assert_eq!(from_missing, from_fault);
        assert_eq!(from_missing.status_code(), StatusCode::BAD_REQUEST);
    }
}
