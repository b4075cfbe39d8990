use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot encode: {0}")]
    Encoding(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Resolution failed: {0}")]
    Resolution(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),
}

impl DomainError {
    /// True for socket/OS/timeout failures reported by a transport.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::Transport { .. } | DomainError::TransportTimeout { .. }
        )
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        DomainError::MalformedMessage(msg.into())
    }
}
