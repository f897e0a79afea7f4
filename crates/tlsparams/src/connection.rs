//! Owner of one connection's security parameters.
//!
//! The context hands shared borrows of the parameters to the record layer and
//! the application, and a writer to the handshake layer. Access is single
//! threaded per connection: a reader must not race `close()`.

use tlsparams_types::TlsError;
use tracing::{info, warn};

use crate::channel_binding::{export_channel_binding, ChannelBinding};
use crate::config::ConnectionConfig;
use crate::connection_info::ConnectionInfo;
use crate::params::{RecordState, SecurityParameters, SecurityParametersWriter};

/// Per-connection owner of [`SecurityParameters`].
#[derive(Debug)]
pub struct ConnectionContext {
    config: ConnectionConfig,
    params: SecurityParameters,
}

impl ConnectionContext {
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            params: SecurityParameters::new(),
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Read-only view for the record layer and application.
    pub fn security_parameters(&self) -> &SecurityParameters {
        &self.params
    }

    /// Mutation interface for the handshake layer.
    ///
    /// The configured role is written on first use.
    pub fn handshake(&mut self) -> Result<SecurityParametersWriter<'_>, TlsError> {
        if self.params.state() == RecordState::Cleared {
            return Err(TlsError::InvalidState("connection already closed".into()));
        }
        let role = self.config.role;
        let mut writer = self.params.writer();
        if writer.params().entity().is_none() {
            writer.set_entity(role)?;
        }
        Ok(writer)
    }

    /// The handshake layer reports completion of a (re)negotiation.
    pub fn complete_handshake(&mut self) -> Result<(), TlsError> {
        match self.params.state() {
            RecordState::Negotiating | RecordState::Renegotiating => {
                self.params.writer().mark_established();
                Ok(())
            }
            state => Err(TlsError::InvalidState(format!(
                "cannot complete handshake in state {state:?}"
            ))),
        }
    }

    /// Start a renegotiation on an established connection.
    ///
    /// Destroys the previous epoch's secrets before the new handshake can
    /// install any. Secrets that fail to destroy are reported, but the
    /// connection still moves to `Renegotiating`.
    pub fn begin_renegotiation(&mut self) -> Result<(), TlsError> {
        if !self.config.allow_renegotiation {
            return Err(TlsError::RenegotiationNotAllowed);
        }
        if self.params.state() != RecordState::Established {
            return Err(TlsError::InvalidState(format!(
                "cannot renegotiate in state {:?}",
                self.params.state()
            )));
        }
        self.params.writer().set_renegotiating(true)
    }

    /// Tear down: destroy every secret and drop negotiation-scoped data.
    ///
    /// Idempotent. The state becomes `Cleared` even if some secrets failed
    /// to destroy; those failures are returned.
    pub fn close(&mut self) -> Result<(), TlsError> {
        let result = self.params.clear();
        if self.params.state() != RecordState::Cleared {
            self.params.set_state(RecordState::Cleared);
            info!("security parameters cleared");
        }
        result
    }

    /// Snapshot of negotiated state, once a handshake has completed.
    pub fn connection_info(&self) -> Option<ConnectionInfo> {
        match self.params.state() {
            RecordState::Established | RecordState::Renegotiating => {
                Some(ConnectionInfo::from_parameters(&self.params))
            }
            _ => None,
        }
    }

    pub fn export_channel_binding(
        &self,
        kind: ChannelBinding,
    ) -> Result<Option<Vec<u8>>, TlsError> {
        export_channel_binding(&self.params, kind)
    }
}

/// Dropping a context always closes it. Secrets are destroyed on drop with no
/// opt-out; the secret store itself destroys anything still held when the
/// parameters are dropped on their own.
impl Drop for ConnectionContext {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "secret destruction incomplete on drop");
        }
    }
}
