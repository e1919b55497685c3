use std::io;

use thiserror::Error;

use crate::{
    api::{Alias, error::ApiError},
    ui::{Failure, FailureKind},
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("{status}: {error}")]
    Server { status: u16, error: ApiError },

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("invalid server url {0:?}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Server { .. } | ClientError::MalformedResponse(_) => FailureKind::Server,
            ClientError::Network(_) | ClientError::InvalidUrl(_) => FailureKind::Network,
        }
    }
}

impl From<&ClientError> for Failure {
    fn from(err: &ClientError) -> Self {
        let message = match err {
            // reqwest keeps the interesting part (refused, timed out) in the source
            ClientError::Network(e) => match std::error::Error::source(e) {
                Some(source) => format!("{e}: {source}"),
                None => e.to_string(),
            },
            other => other.to_string(),
        };
        Failure {
            kind: err.kind(),
            message,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors of the `daas-env` subcommands.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("no container with alias {0}")]
    UnknownAlias(Alias),

    #[error("container {0} has no alias and cannot be edited")]
    ReadOnly(Alias),

    #[error("invalid assignment {0:?}, expected KEY=VALUE")]
    InvalidAssignment(String),

    #[error("failed to load containers: {0}")]
    Fetch(Failure),

    #[error("failed to save {alias}: {failure}")]
    Save { alias: Alias, failure: Failure },

    #[error("saved {alias}, but reloading containers failed: {failure}")]
    Refresh { alias: Alias, failure: Failure },

    #[error("editor failed: {0}")]
    Editor(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_server_failures() {
        let err = ClientError::Server {
            status: 500,
            error: ApiError::Internal,
        };
        let failure = Failure::from(&err);
        assert_eq!(failure.kind, FailureKind::Server);
        assert_eq!(failure.message, "500: internal error");
    }

    #[test]
    fn bad_url_is_a_network_failure() {
        let err = ClientError::InvalidUrl("nope".into());
        assert_eq!(Failure::from(&err).kind, FailureKind::Network);
    }
}
