use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

// Error type alias used throughout the crate.
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*-------------------------------------------------------------------------------------------------
  Fetch Error
-------------------------------------------------------------------------------------------------*/

/// Failure kind for a single fetch operation. Every failure mode of the HTTP
/// stack collapses into one of these kinds at the source-adapter boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FetchErrorKind {
    /// The request exceeded the per-request timeout.
    Timeout,

    /// The connection could not be established.
    Connection,

    /// The remote returned a non-success status code.
    Status(u16),

    /// The response body could not be read or parsed.
    Body,
}

/// Error returned by the fallible fetch operations on [Client](crate::Client).
/// The public fetch operations absorb this error into a logged empty result;
/// callers that need the failure mode use the fallible variants and inspect
/// [FetchError::kind].
#[derive(Debug)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn status(code: u16) -> Self {
        Self::new(FetchErrorKind::Status(code), format!("HTTP status {code}"))
    }

    pub(crate) fn body(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Body, message)
    }

    /// The failure kind for this fetch error.
    pub fn kind(&self) -> FetchErrorKind {
        self.kind
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FetchErrorKind::Timeout => write!(f, "request timed out: {}", self.message),
            FetchErrorKind::Connection => write!(f, "connection failed: {}", self.message),
            FetchErrorKind::Status(code) => write!(f, "remote rejected request ({code})"),
            FetchErrorKind::Body => write!(f, "unparseable response body: {}", self.message),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            FetchErrorKind::Timeout
        } else if error.is_connect() {
            FetchErrorKind::Connection
        } else if error.is_body() || error.is_decode() {
            FetchErrorKind::Body
        } else {
            FetchErrorKind::Connection
        };
        Self::new(kind, error.to_string())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_status() {
        let error = FetchError::status(503);
        assert_eq!(error.kind(), FetchErrorKind::Status(503));
        assert_eq!(error.to_string(), "remote rejected request (503)");
    }

    #[test]
    fn test_fetch_error_body() {
        let error = FetchError::body("expected value at line 1");
        assert_eq!(error.kind(), FetchErrorKind::Body);
        assert!(error.to_string().contains("unparseable response body"));
    }
}
