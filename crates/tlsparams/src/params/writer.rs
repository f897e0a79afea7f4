//! Mutation interface used by the handshake layer.
//!
//! Setters store what they are given without validating it; deciding when a
//! value is correct is the handshake state machine's job.

use std::sync::Arc;

use tlsparams_types::TlsError;
use tracing::{info, warn};
use zeroize::Zeroizing;

use super::{RecordState, SecurityParameters};
use crate::certificate::Certificate;
use crate::crypt::secret::{SecretSlot, TlsSecret};
use crate::crypt::{KeyExchangeAlg, MaxFragmentLength, NamedGroup, PrfAlgorithm, SignatureScheme};
use crate::extensions::{ApplicationProtocol, ProtocolName, ServerName};
use crate::{CipherSuite, ProtocolVersion, TlsRole};

/// Write access to one connection's [`SecurityParameters`].
#[derive(Debug)]
pub struct SecurityParametersWriter<'a> {
    params: &'a mut SecurityParameters,
}

impl<'a> SecurityParametersWriter<'a> {
    pub(super) fn new(params: &'a mut SecurityParameters) -> Self {
        Self { params }
    }

    /// Read back through the writer.
    pub fn params(&self) -> &SecurityParameters {
        self.params
    }

    /// Assign the entity role. The first assignment wins.
    ///
    /// Re-asserting the current role is a no-op; asking for the other role
    /// fails with `RoleAlreadySet` and leaves the record untouched.
    pub fn set_entity(&mut self, role: TlsRole) -> Result<(), TlsError> {
        match self.params.entity {
            None => {
                self.params.entity = Some(role);
                if self.params.state == RecordState::Empty {
                    self.params.state = RecordState::Negotiating;
                }
                info!(role = role.as_str(), "negotiation started");
                Ok(())
            }
            Some(current) if current == role => Ok(()),
            Some(current) => {
                warn!(
                    current = current.as_str(),
                    attempted = role.as_str(),
                    "rejected entity role change"
                );
                Err(TlsError::RoleAlreadySet {
                    current: current.as_str(),
                    attempted: role.as_str(),
                })
            }
        }
    }

    /// Set the renegotiating flag.
    ///
    /// Raising it on an established connection moves to `Renegotiating` and
    /// clears the previous epoch (secrets and negotiation-scoped fields)
    /// before any new secret can be installed. Lowering it while the record
    /// is `Renegotiating` fails with `InvalidState` and changes nothing; the
    /// renegotiation ends through `mark_established`.
    pub fn set_renegotiating(&mut self, renegotiating: bool) -> Result<(), TlsError> {
        if !renegotiating && self.params.state == RecordState::Renegotiating {
            warn!("rejected clearing the renegotiating flag mid-renegotiation");
            return Err(TlsError::InvalidState("renegotiation in progress".into()));
        }
        self.params.renegotiating = renegotiating;
        if renegotiating && self.params.state == RecordState::Established {
            self.params.state = RecordState::Renegotiating;
            info!("renegotiation started; clearing previous epoch");
            return self.params.clear();
        }
        Ok(())
    }

    pub fn set_secure_renegotiation(&mut self, secure: bool) {
        self.params.secure_renegotiation = secure;
    }

    pub fn set_cipher_suite(&mut self, suite: CipherSuite) {
        self.params.cipher_suite = suite;
    }

    pub fn set_max_fragment_length(&mut self, mfl: Option<MaxFragmentLength>) {
        self.params.max_fragment_length = mfl;
    }

    pub fn set_prf_algorithm(&mut self, prf: PrfAlgorithm) {
        self.params.prf_algorithm = Some(prf);
    }

    pub fn set_verify_data_length(&mut self, len: usize) {
        self.params.verify_data_length = Some(len);
    }

    pub fn set_key_exchange_algorithm(&mut self, kx: KeyExchangeAlg) {
        self.params.key_exchange_algorithm = Some(kx);
    }

    pub fn set_negotiated_version(&mut self, version: ProtocolVersion) {
        self.params.negotiated_version = Some(version);
    }

    /// Install a secret, destroying the one it replaces first.
    pub fn set_secret(
        &mut self,
        slot: SecretSlot,
        secret: Box<dyn TlsSecret>,
    ) -> Result<(), TlsError> {
        self.params.secrets.set(slot, secret)
    }

    pub fn set_early_secret<S: TlsSecret + 'static>(&mut self, secret: S) -> Result<(), TlsError> {
        self.set_secret(SecretSlot::Early, Box::new(secret))
    }

    pub fn set_handshake_secret<S: TlsSecret + 'static>(
        &mut self,
        secret: S,
    ) -> Result<(), TlsError> {
        self.set_secret(SecretSlot::Handshake, Box::new(secret))
    }

    pub fn set_master_secret<S: TlsSecret + 'static>(&mut self, secret: S) -> Result<(), TlsError> {
        self.set_secret(SecretSlot::Master, Box::new(secret))
    }

    pub fn set_shared_secret<S: TlsSecret + 'static>(&mut self, secret: S) -> Result<(), TlsError> {
        self.set_secret(SecretSlot::Shared, Box::new(secret))
    }

    pub fn set_traffic_secret_client<S: TlsSecret + 'static>(
        &mut self,
        secret: S,
    ) -> Result<(), TlsError> {
        self.set_secret(SecretSlot::ClientTraffic, Box::new(secret))
    }

    pub fn set_traffic_secret_server<S: TlsSecret + 'static>(
        &mut self,
        secret: S,
    ) -> Result<(), TlsError> {
        self.set_secret(SecretSlot::ServerTraffic, Box::new(secret))
    }

    /// Destroy a single secret once it is no longer needed, e.g. the shared
    /// secret after the master secret has been derived.
    pub fn clear_secret(&mut self, slot: SecretSlot) -> Result<(), TlsError> {
        self.params.secrets.clear_slot(slot)
    }

    pub fn set_client_random(&mut self, random: [u8; 32]) {
        self.params.client_random = Some(random);
    }

    pub fn set_server_random(&mut self, random: [u8; 32]) {
        self.params.server_random = Some(random);
    }

    pub fn set_session_hash(&mut self, hash: Vec<u8>) {
        self.params.session_hash = Some(hash);
    }

    pub fn set_session_id(&mut self, id: Vec<u8>) {
        self.params.session_id = Some(id);
    }

    pub fn set_psk(&mut self, psk: Vec<u8>) {
        self.params.psk = Some(Zeroizing::new(psk));
    }

    pub fn set_psk_identity(&mut self, identity: Vec<u8>) {
        self.params.psk_identity = Some(identity);
    }

    pub fn set_srp_identity(&mut self, identity: Vec<u8>) {
        self.params.srp_identity = Some(identity);
    }

    pub fn set_tls_server_end_point(&mut self, value: Vec<u8>) {
        self.params.tls_server_end_point = Some(value);
    }

    pub fn set_tls_unique(&mut self, value: Vec<u8>) {
        self.params.tls_unique = Some(value);
    }

    pub fn set_local_verify_data(&mut self, verify_data: Vec<u8>) {
        self.params.local_verify_data = Some(verify_data);
    }

    pub fn set_peer_verify_data(&mut self, verify_data: Vec<u8>) {
        self.params.peer_verify_data = Some(verify_data);
    }

    pub fn set_encrypt_then_mac(&mut self, enabled: bool) {
        self.params.encrypt_then_mac = enabled;
    }

    pub fn set_extended_master_secret(&mut self, enabled: bool) {
        self.params.extended_master_secret = enabled;
    }

    pub fn set_extended_padding(&mut self, enabled: bool) {
        self.params.extended_padding = enabled;
    }

    pub fn set_truncated_hmac(&mut self, enabled: bool) {
        self.params.truncated_hmac = enabled;
    }

    /// Record the ALPN outcome. `None` means negotiated with no protocol
    /// selected; either way the protocol counts as set afterwards.
    pub fn set_application_protocol(&mut self, protocol: Option<ProtocolName>) {
        self.params.application_protocol = ApplicationProtocol::Negotiated(protocol);
    }

    pub fn set_client_server_names(&mut self, names: Vec<ServerName>) {
        self.params.client_server_names = Some(names);
    }

    pub fn set_client_sig_algs(&mut self, schemes: Vec<SignatureScheme>) {
        self.params.client_sig_algs = Some(schemes);
    }

    pub fn set_client_sig_algs_cert(&mut self, schemes: Vec<SignatureScheme>) {
        self.params.client_sig_algs_cert = Some(schemes);
    }

    pub fn set_client_supported_groups(&mut self, groups: Vec<NamedGroup>) {
        self.params.client_supported_groups = Some(groups);
    }

    pub fn set_local_certificate(&mut self, certificate: Arc<Certificate>) {
        self.params.local_certificate = Some(certificate);
    }

    pub fn set_peer_certificate(&mut self, certificate: Arc<Certificate>) {
        self.params.peer_certificate = Some(certificate);
    }

    /// Signal that the handshake (or renegotiation) completed.
    pub fn mark_established(&mut self) {
        self.params.state = RecordState::Established;
        info!(suite = self.params.cipher_suite.0, "security parameters established");
    }
}
