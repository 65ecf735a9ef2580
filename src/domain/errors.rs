/// Failure taxonomy for backend calls. Both variants collapse into a single
/// user-displayable string at the API client boundary; nothing above the
/// controller ever sees these.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network failure, timeout, or an unparsable success body.
    Transport(String),
    /// Non-2xx response; `detail` is the optional message from the error body.
    Application { status: u16, detail: Option<String> },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport Error: {}", msg),
            FetchError::Application { status, detail } => match detail {
                Some(detail) => write!(f, "Application Error ({}): {}", status, detail),
                None => write!(f, "Application Error ({})", status),
            },
        }
    }
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// Collapse into the string shown to the user: the server-supplied detail
    /// when present, otherwise the caller's fixed fallback.
    pub fn into_message(self, fallback: &str) -> String {
        match self {
            FetchError::Application { detail: Some(detail), .. } => detail,
            _ => fallback.to_string(),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
