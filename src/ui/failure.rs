use std::fmt::{self, Display};

/// Which side of the wire a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never got a usable answer: connect, timeout, bad URL.
    Network,
    /// The service answered, but with a non-2xx status or an unreadable body.
    Server,
}

/// A failed request as the model sees it. Transport details are flattened
/// into a message so the model stays independent of the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Network,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Server,
            message: message.into(),
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Network => write!(f, "network error: {}", self.message),
            FailureKind::Server => write!(f, "server error: {}", self.message),
        }
    }
}

impl std::error::Error for Failure {}
