// errors.rs
use crate::store::StoreError;
use astra::Response;
use thiserror::Error;

/// Errors that end a request with an error page rather than an inline
/// message: routing misses, malformed requests, and failures below the pages.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
