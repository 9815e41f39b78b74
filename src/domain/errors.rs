use derive_more::Display;

/// Why a single endpoint could not produce a payload.
///
/// All variants collapse into the absence sentinel at the orchestration
/// boundary; they only survive long enough to be logged.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    #[display(fmt = "Request failed: {}", _0)]
    Transport(String),
    #[display(fmt = "HTTP {} {}", status, status_text)]
    Status { status: u16, status_text: String },
    #[display(fmt = "Failed to parse JSON: {}", _0)]
    Parse(String),
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Parse(error.to_string())
    }
}

/// Errors raised by the browser-facing layers (DOM lookups, chart construction).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum UiError {
    #[display(fmt = "Element not found: {}", _0)]
    ElementNotFound(String),
    #[display(fmt = "Browser API error: {}", _0)]
    BrowserApi(String),
    #[display(fmt = "Chart construction failed: {}", _0)]
    ChartConstruction(String),
}

impl std::error::Error for UiError {}

// Simple convenience type aliases
pub type FetchResult<T> = Result<T, FetchError>;
pub type UiResult<T> = Result<T, UiError>;
