use std::fmt;

/// Failure to destroy a single secret capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SecretError {
    #[error("secret already destroyed")]
    AlreadyDestroyed,
    #[error("secret destruction failed: {0}")]
    DestroyFailed(String),
}

/// One failed destruction observed while clearing secret slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretFailure {
    /// Name of the slot whose capability failed to destroy.
    pub slot: &'static str,
    /// The capability's own error.
    pub error: SecretError,
}

impl fmt::Display for SecretFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.slot, self.error)
    }
}

/// Renders a failure list as `slot: cause, slot: cause`.
pub struct FailureList<'a>(pub &'a [SecretFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

/// Security-state errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TlsError {
    #[error("entity role already set to {current}, refusing change to {attempted}")]
    RoleAlreadySet {
        current: &'static str,
        attempted: &'static str,
    },
    #[error("secret clear incomplete: {}", FailureList(.0))]
    ClearIncomplete(Vec<SecretFailure>),
    #[error("renegotiation not allowed by configuration")]
    RenegotiationNotAllowed,
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("channel binding unavailable: {0}")]
    ChannelBindingUnavailable(String),
    #[error("secret error: {0}")]
    SecretError(#[from] SecretError),
}

impl TlsError {
    /// Slot-level failures carried by a `ClearIncomplete` error, empty otherwise.
    pub fn failures(&self) -> &[SecretFailure] {
        match self {
            TlsError::ClearIncomplete(failures) => failures,
            _ => &[],
        }
    }
}
