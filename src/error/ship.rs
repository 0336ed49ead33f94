use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ShipError {
    #[error("Invalid ship data: {0}")]
    Validation(String),
    #[error("Ship ID {0} not found")]
    NotFound(i64),
}

impl IntoResponse for ShipError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(ship_id) => {
                tracing::debug!(ship_id = %ship_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
