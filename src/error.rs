//! Defines the app level error type and its conversion to HTTP responses.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::ErrorCode;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, this is returned when a delete did not
    /// match any row. Internally, this error may occur when a query returns
    /// no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The database rejected a write because it broke a constraint, e.g.,
    /// the household for a new account does not exist.
    ///
    /// The string is the message reported by SQLite.
    #[error("a database constraint was violated: {0}")]
    ConstraintViolation(String),

    /// A query parameter was missing or could not be parsed.
    ///
    /// The string is the reason given by the query string extractor.
    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(sql_error, description)
                if sql_error.code == ErrorCode::ConstraintViolation =>
            {
                Error::ConstraintViolation(
                    description.unwrap_or_else(|| sql_error.to_string()),
                )
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND.into_response(),
            Error::ConstraintViolation(reason) => {
                tracing::debug!("Rejected write: {reason}");
                StatusCode::BAD_REQUEST.into_response()
            }
            Error::InvalidQuery(reason) => {
                tracing::debug!("Rejected query: {reason}");
                StatusCode::BAD_REQUEST.into_response()
            }
            // The details are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
