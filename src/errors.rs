use astra::Response;
use std::fmt;

/// Errors originating from routing and page rendering. The analyze
/// pipeline has its own error type (`analyze::AnalyzeError`) because its
/// failures go out as JSON, not HTML pages.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
