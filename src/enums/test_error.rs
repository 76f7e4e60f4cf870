use thiserror::Error;
use crate::config::constants::UNKNOWN_ERROR_MESSAGE;
use crate::structs::send_result::SendResult;

/// Failure of a test notification call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestError {
    /// No structured answer from the server: connection refused, timeout, unreadable body.
    #[error("{0}")]
    Transport(String),

    /// The server rejected the test and described why.
    #[error("HTTP {status_code}: {snippet}")]
    Remote { status_code: u16, snippet: String },
}

impl TestError {
    pub fn into_send_result(self) -> SendResult {
        let (status_code, snippet) = match self {
            Self::Transport(message) => (0, message),
            Self::Remote { status_code, snippet } => (status_code, snippet),
        };

        let snippet = if snippet.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            snippet
        };

        SendResult { status_code, snippet }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_becomes_status_zero() {
        let result = TestError::Transport("timeout".to_string()).into_send_result();
        assert_eq!(result, SendResult { status_code: 0, snippet: "timeout".to_string() });
    }

    #[test]
    fn remote_passes_through() {
        let error = TestError::Remote { status_code: 429, snippet: "slow down".to_string() };
        assert_eq!(error.into_send_result(), SendResult { status_code: 429, snippet: "slow down".to_string() });
    }

    #[test]
    fn empty_snippet_falls_back_to_unknown() {
        let error = TestError::Remote { status_code: 502, snippet: String::new() };
        assert_eq!(error.into_send_result().snippet, UNKNOWN_ERROR_MESSAGE);
    }
}
