//! Maps `AppError` onto HTTP responses.
//!
//! Body shape: `{ "error": .., "message": .., "statusCode": .. }`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use ql_core::error::AppError;
use serde::Serialize;
use thiserror::Error;

/// `AppError` lives in ql-core, so it needs a local wrapper to be a
/// `ResponseError`.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub AppError);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
    status_code: u16,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            AppError::NotFound(..) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (error, message) = match &self.0 {
            AppError::NotFound(..) => ("Not found", self.0.to_string()),
            AppError::ValidationError(msg) => ("Bad request", msg.clone()),
            AppError::Unauthorized(msg) => ("Unauthorized", msg.clone()),
            AppError::Internal(detail) => {
                log::error!("internal error: {detail}");
                ("Internal server error", "something went wrong".to_string())
            }
        };

        HttpResponse::build(status).json(ErrorBody {
            error,
            message,
            status_code: status.as_u16(),
        })
    }
}
