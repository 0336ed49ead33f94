//! Error types for the Starport server application.
//!
//! Domain errors use `thiserror` and implement `IntoResponse` for Axum HTTP
//! responses; the unified [`Error`] aggregates them together with external
//! library errors via `#[from]` conversions.

pub mod config;
pub mod ship;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, ship::ShipError},
    model::api::ErrorDto,
};

/// Main error type for the Starport server application.
///
/// Maps errors to HTTP responses for API consumers: ship validation failures
/// become 400, missing ships become 404, and everything else is treated as an
/// internal server error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Ship domain error (validation failure or missing ship).
    #[error(transparent)]
    ShipError(#[from] ShipError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (listener binding, server shutdown).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ShipError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client to avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
