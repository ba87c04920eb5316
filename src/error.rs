use thiserror::Error;

#[cfg(feature = "ssr")]
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Failure talking to the relational store.
#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Field `message` must be a string")]
    InvalidMessage,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(feature = "ssr")]
impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().body("Internal server error")
    }
}

#[cfg(feature = "ssr")]
impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload | ApiError::InvalidMessage => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Store(err) => err.error_response(),
            _ => HttpResponse::build(self.status_code()).body(self.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product slug in catalog: {0}")]
    DuplicateSlug(String),
}
