use tavily_application::SearchBackendError;
use thiserror::Error;

/// Errors raised by the Tavily HTTP client
#[derive(Error, Debug)]
pub enum TavilyError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Tavily API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse Tavily response: {0}")]
    Parse(String),
}

impl From<TavilyError> for SearchBackendError {
    fn from(err: TavilyError) -> Self {
        match err {
            TavilyError::Request(e) if e.is_timeout() => SearchBackendError::Timeout,
            TavilyError::Status { status, body } => SearchBackendError::Status { status, body },
            TavilyError::Parse(msg) => SearchBackendError::InvalidResponse(msg),
            other => SearchBackendError::RequestFailed(other.to_string()),
        }
    }
}
