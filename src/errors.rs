// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic
/// (routing, response building).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::InternalError => 500,
        }
    }
}
