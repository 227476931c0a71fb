use tongues_translator::{TransportError, TransportErrorKind};

/// Why a dispatched call did not produce a value
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The provider cannot do this for the given query, e.g. an unknown language
    #[error("Not supported by the selected provider")]
    Unsupported,

    /// Network call failed. Displays the fixed message for its category, the
    /// underlying error is kept for diagnostics.
    #[error("{}", user_message(.kind))]
    Transport {
        kind: TransportErrorKind,
        #[source]
        source: TransportError,
    },

    #[error("No provider registered under `{0}`.")]
    NotRegistered(String),
}

impl DispatchError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DispatchError::Unsupported)
    }
}

impl From<TransportError> for DispatchError {
    fn from(source: TransportError) -> Self {
        DispatchError::Transport {
            kind: source.kind(),
            source,
        }
    }
}

/// One message per category, whichever provider failed
pub fn user_message(kind: &TransportErrorKind) -> &'static str {
    match kind {
        TransportErrorKind::Timeout => "The query timed out, please try again later.",
        TransportErrorKind::Network => {
            "Network error, please check your network settings and retry."
        }
        TransportErrorKind::Server => "The server encountered an error, please try again later.",
    }
}
