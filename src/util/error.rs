use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::repository::repository_error::RepositoryError;

#[derive(Debug)]
pub enum HandlerErrorKind {
    NotFound,
    BadRequest,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Error returned by HTTP handlers. Responses carry only a status code: 404
/// and 400 have empty bodies by contract, and no error body format is defined
/// for 500s, so the message stays in the logs.
#[derive(Debug)]
pub struct HandlerError {
    pub kind: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::NotFound,
            message: msg.into(),
        }
    }

    pub fn bad_request<T: Into<String>>(msg: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::BadRequest,
            message: msg.into(),
        }
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Internal,
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl From<RepositoryError> for HandlerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HandlerError::not_found(msg),
            other => HandlerError::internal(other.to_string()),
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.kind {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Internal => {
                tracing::error!("Handler error: {}", self.message);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status.into_response()
    }
}
