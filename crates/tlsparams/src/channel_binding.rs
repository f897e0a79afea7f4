//! Channel bindings for TLS (RFC 5929).

use tlsparams_types::TlsError;

use crate::params::{RecordState, SecurityParameters};

/// Channel binding types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelBinding {
    /// Hash of the server's end-entity certificate.
    TlsServerEndPoint,
    /// First Finished message of the most recent handshake.
    TlsUnique,
}

impl ChannelBinding {
    /// Registered name of the binding type.
    pub fn name(self) -> &'static str {
        match self {
            ChannelBinding::TlsServerEndPoint => "tls-server-end-point",
            ChannelBinding::TlsUnique => "tls-unique",
        }
    }
}

/// Export a copy of the channel binding value.
///
/// Only available after a handshake has completed. `tls-unique` is not
/// defined for TLS 1.3; `tls-server-end-point` is `None` when the server
/// presented no usable certificate.
pub fn export_channel_binding(
    params: &SecurityParameters,
    kind: ChannelBinding,
) -> Result<Option<Vec<u8>>, TlsError> {
    match params.state() {
        RecordState::Established | RecordState::Renegotiating => {}
        state => {
            return Err(TlsError::InvalidState(format!(
                "{} unavailable in state {state:?}",
                kind.name()
            )))
        }
    }
    match kind {
        ChannelBinding::TlsServerEndPoint => Ok(params
            .tls_server_end_point()
            .filter(|v| !v.is_empty())
            .map(<[u8]>::to_vec)),
        ChannelBinding::TlsUnique => {
            if params.negotiated_version().is_some_and(|v| v.is_tls13()) {
                return Err(TlsError::ChannelBindingUnavailable(
                    "tls-unique is not defined for TLS 1.3".into(),
                ));
            }
            Ok(params.tls_unique().map(<[u8]>::to_vec))
        }
    }
}
