use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The provider has no such capability or does not know the language.
    /// Expected control flow, not a failure.
    #[error("Not supported by this provider")]
    Unsupported,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::Transport(err.into())
    }
}

/// A failed network call, reduced to the shape the classifier needs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub timeout: bool,
    /// HTTP status, absent when no response was received
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn timed_out(message: impl Into<String>) -> Self {
        Self {
            timeout: true,
            status: None,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            timeout: false,
            status: None,
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self {
            timeout: false,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Timeout wins over everything, then a missing status means the network failed
    pub fn kind(&self) -> TransportErrorKind {
        if self.timeout {
            TransportErrorKind::Timeout
        } else if self.status.is_none() {
            TransportErrorKind::Network
        } else {
            TransportErrorKind::Server
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            timeout: err.is_timeout(),
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    Timeout,
    Network,
    Server,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Network => "network error",
            TransportErrorKind::Server => "server error",
        };
        f.write_str(name)
    }
}

/// Registration-time failures. Never produces a usable instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{provider} requires `{field}`, the translation API cannot be used without it")]
    MissingCredential {
        provider: String,
        field: &'static str,
    },

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}
