use std::borrow::Cow;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

#[derive(Debug, Display)]
pub enum AppError {
    /// Caller-fixable input problem. The message is echoed back verbatim.
    #[display("{_0}")]
    Validation(String),

    #[display("{_0}")]
    NotFound(String),

    /// The datastore rejected the operation because the schema itself is
    /// wrong or missing. The message carries the remediation.
    #[display("{_0}")]
    Schema(String),

    /// Anything else. The detail is logged server-side only.
    #[display("Internal server error: {_0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Internal(detail) => {
                tracing::error!("internal error: {}", detail);
                "Something went wrong".to_string()
            }
            AppError::Schema(msg) => {
                tracing::error!("schema error: {}", msg);
                msg.clone()
            }
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({ "error": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Schema(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(e)
                if e.code() == Some(Cow::Borrowed("42P01"))
                    || e.code() == Some(Cow::Borrowed("42703")) =>
            {
                AppError::Schema(
                    "Database schema is missing or out of date. Run `sqlx migrate run` to apply migrations."
                        .into(),
                )
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23502")) => {
                AppError::Schema(
                    "Database rejected the write: a required column was not supplied.".into(),
                )
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
