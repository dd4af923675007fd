use serde::Deserialize;

/// Discriminant of [`Error`], for callers that branch on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Authorization,
    Server,
    Deserialization,
    Transport,
}

/// Failures returned by every [`Client`](super::Client) operation.
///
/// Nothing is retried; each failure reaches the caller as soon as it happens.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered 401 or 403.
    #[error("Authorization failed, is your API key correct?")]
    Authorization,

    /// The server rejected the request and explained why in its error body.
    #[error("An error occurred while communicating with the DeepL server: '{0}'.")]
    Server(String),

    /// A successful response did not have the expected shape.
    #[error("Could not deserialize the DeepL server response")]
    Deserialization(#[source] serde_json::Error),

    /// Network failure, or an HTTP error status without a usable message.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Authorization => ErrorKind::Authorization,
            Self::Server(_) => ErrorKind::Server,
            Self::Deserialization(_) => ErrorKind::Deserialization,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the diagnostic `message` from an error response body.
///
/// Only a non-empty string counts. `None` when the body is not JSON, has no
/// `message`, or the message is empty or of another JSON type such as a
/// number, so the caller falls back to a transport error.
pub(crate) fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|message| !message.is_empty())
}
