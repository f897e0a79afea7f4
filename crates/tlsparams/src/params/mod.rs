//! Security parameters of one TLS connection.
//!
//! [`SecurityParameters`] accumulates everything the handshake negotiates:
//! role, cipher suite, secrets, randoms, identities, channel-binding tokens,
//! extension results and certificates. Shared references only expose reads.
//! Mutation goes through [`SecurityParametersWriter`], which can only be
//! obtained from a unique borrow held by the handshake layer.
//!
//! Reads of anything not yet negotiated return `None` rather than failing.

mod secrets;
mod writer;

pub use secrets::SecretStore;
pub use writer::SecurityParametersWriter;

use std::fmt;
use std::sync::Arc;

use tlsparams_types::TlsError;
use tracing::debug;
use zeroize::Zeroizing;

use crate::certificate::Certificate;
use crate::crypt::secret::{SecretSlot, TlsSecret};
use crate::crypt::{
    CompressionMethod, KeyExchangeAlg, MaxFragmentLength, NamedGroup, PrfAlgorithm,
    SignatureScheme,
};
use crate::extensions::{ApplicationProtocol, ProtocolName, ServerName};
use crate::{CipherSuite, ProtocolVersion, TlsRole};

/// Lifecycle of the security parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Nothing written yet.
    Empty,
    /// First handshake in progress.
    Negotiating,
    /// Handshake completed.
    Established,
    /// A renegotiation handshake is in progress.
    Renegotiating,
    /// Torn down; all secrets destroyed.
    Cleared,
}

/// Negotiated security state of one connection.
pub struct SecurityParameters {
    state: RecordState,
    entity: Option<TlsRole>,
    renegotiating: bool,
    secure_renegotiation: bool,
    cipher_suite: CipherSuite,
    max_fragment_length: Option<MaxFragmentLength>,
    prf_algorithm: Option<PrfAlgorithm>,
    verify_data_length: Option<usize>,
    key_exchange_algorithm: Option<KeyExchangeAlg>,
    negotiated_version: Option<ProtocolVersion>,
    secrets: SecretStore,
    client_random: Option<[u8; 32]>,
    server_random: Option<[u8; 32]>,
    session_hash: Option<Vec<u8>>,
    session_id: Option<Vec<u8>>,
    psk: Option<Zeroizing<Vec<u8>>>,
    psk_identity: Option<Vec<u8>>,
    srp_identity: Option<Vec<u8>>,
    tls_server_end_point: Option<Vec<u8>>,
    tls_unique: Option<Vec<u8>>,
    local_verify_data: Option<Vec<u8>>,
    peer_verify_data: Option<Vec<u8>>,
    encrypt_then_mac: bool,
    extended_master_secret: bool,
    extended_padding: bool,
    truncated_hmac: bool,
    application_protocol: ApplicationProtocol,
    client_server_names: Option<Vec<ServerName>>,
    client_sig_algs: Option<Vec<SignatureScheme>>,
    client_sig_algs_cert: Option<Vec<SignatureScheme>>,
    client_supported_groups: Option<Vec<NamedGroup>>,
    local_certificate: Option<Arc<Certificate>>,
    peer_certificate: Option<Arc<Certificate>>,
}

impl Default for SecurityParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecurityParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityParameters")
            .field("state", &self.state)
            .field("entity", &self.entity)
            .field("negotiated_version", &self.negotiated_version)
            .field("cipher_suite", &self.cipher_suite)
            .field("prf_algorithm", &self.prf_algorithm)
            .field("key_exchange_algorithm", &self.key_exchange_algorithm)
            .field("renegotiating", &self.renegotiating)
            .field("secrets", &self.secrets)
            .field(
                "psk",
                &self.psk.as_ref().map(|p| format!("[{} bytes]", p.len())),
            )
            .field("application_protocol", &self.application_protocol)
            .finish_non_exhaustive()
    }
}

impl SecurityParameters {
    /// Fresh parameters for a new connection: nothing negotiated.
    pub fn new() -> Self {
        Self {
            state: RecordState::Empty,
            entity: None,
            renegotiating: false,
            secure_renegotiation: false,
            cipher_suite: CipherSuite::TLS_NULL_WITH_NULL_NULL,
            max_fragment_length: None,
            prf_algorithm: None,
            verify_data_length: None,
            key_exchange_algorithm: None,
            negotiated_version: None,
            secrets: SecretStore::new(),
            client_random: None,
            server_random: None,
            session_hash: None,
            session_id: None,
            psk: None,
            psk_identity: None,
            srp_identity: None,
            tls_server_end_point: None,
            tls_unique: None,
            local_verify_data: None,
            peer_verify_data: None,
            encrypt_then_mac: false,
            extended_master_secret: false,
            extended_padding: false,
            truncated_hmac: false,
            application_protocol: ApplicationProtocol::NotNegotiated,
            client_server_names: None,
            client_sig_algs: None,
            client_sig_algs_cert: None,
            client_supported_groups: None,
            local_certificate: None,
            peer_certificate: None,
        }
    }

    /// Mutation interface for the handshake layer.
    pub fn writer(&mut self) -> SecurityParametersWriter<'_> {
        SecurityParametersWriter::new(self)
    }

    /// Destroy all secrets and drop negotiation-scoped data.
    ///
    /// Session hash, session id, the client's server names, signature
    /// algorithm lists and supported groups are discarded. Verify data,
    /// channel-binding tokens, certificates, cipher suite and role are kept
    /// until the next negotiation overwrites them. Every secret is attempted
    /// even if some fail to destroy; failures come back as `ClearIncomplete`.
    pub fn clear(&mut self) -> Result<(), TlsError> {
        self.session_hash = None;
        self.session_id = None;
        self.client_server_names = None;
        self.client_sig_algs = None;
        self.client_sig_algs_cert = None;
        self.client_supported_groups = None;
        debug!("negotiation-scoped fields discarded");
        self.secrets.clear_all()
    }

    pub(crate) fn set_state(&mut self, state: RecordState) {
        self.state = state;
    }

    pub fn state(&self) -> RecordState {
        self.state
    }

    /// The local endpoint's role, once assigned.
    pub fn entity(&self) -> Option<TlsRole> {
        self.entity
    }

    pub fn is_renegotiating(&self) -> bool {
        self.renegotiating
    }

    /// Whether RFC 5746 secure renegotiation was negotiated.
    pub fn is_secure_renegotiation(&self) -> bool {
        self.secure_renegotiation
    }

    /// Negotiated cipher suite; `TLS_NULL_WITH_NULL_NULL` before negotiation.
    pub fn cipher_suite(&self) -> CipherSuite {
        self.cipher_suite
    }

    pub fn compression_algorithm(&self) -> CompressionMethod {
        CompressionMethod::Null
    }

    pub fn max_fragment_length(&self) -> Option<MaxFragmentLength> {
        self.max_fragment_length
    }

    pub fn prf_algorithm(&self) -> Option<PrfAlgorithm> {
        self.prf_algorithm
    }

    /// Finished verify_data length; known once the cipher suite is negotiated.
    pub fn verify_data_length(&self) -> Option<usize> {
        self.verify_data_length
    }

    pub fn key_exchange_algorithm(&self) -> Option<KeyExchangeAlg> {
        self.key_exchange_algorithm
    }

    pub fn negotiated_version(&self) -> Option<ProtocolVersion> {
        self.negotiated_version
    }

    /// The capability in `slot`, if one is held.
    ///
    /// Do not retain it beyond the lifetime of the owning connection.
    pub fn secret(&self, slot: SecretSlot) -> Option<&dyn TlsSecret> {
        self.secrets.get(slot)
    }

    pub fn early_secret(&self) -> Option<&dyn TlsSecret> {
        self.secret(SecretSlot::Early)
    }

    pub fn handshake_secret(&self) -> Option<&dyn TlsSecret> {
        self.secret(SecretSlot::Handshake)
    }

    pub fn master_secret(&self) -> Option<&dyn TlsSecret> {
        self.secret(SecretSlot::Master)
    }

    pub fn shared_secret(&self) -> Option<&dyn TlsSecret> {
        self.secret(SecretSlot::Shared)
    }

    pub fn traffic_secret_client(&self) -> Option<&dyn TlsSecret> {
        self.secret(SecretSlot::ClientTraffic)
    }

    pub fn traffic_secret_server(&self) -> Option<&dyn TlsSecret> {
        self.secret(SecretSlot::ServerTraffic)
    }

    /// True when no secret slot holds a capability.
    pub fn secrets_cleared(&self) -> bool {
        self.secrets.is_empty()
    }

    pub fn client_random(&self) -> Option<&[u8; 32]> {
        self.client_random.as_ref()
    }

    pub fn server_random(&self) -> Option<&[u8; 32]> {
        self.server_random.as_ref()
    }

    pub fn session_hash(&self) -> Option<&[u8]> {
        self.session_hash.as_deref()
    }

    pub fn session_id(&self) -> Option<&[u8]> {
        self.session_id.as_deref()
    }

    pub fn psk(&self) -> Option<&[u8]> {
        self.psk.as_deref().map(Vec::as_slice)
    }

    pub fn psk_identity(&self) -> Option<&[u8]> {
        self.psk_identity.as_deref()
    }

    pub fn srp_identity(&self) -> Option<&[u8]> {
        self.srp_identity.as_deref()
    }

    /// RFC 5929 tls-server-end-point binding value.
    pub fn tls_server_end_point(&self) -> Option<&[u8]> {
        self.tls_server_end_point.as_deref()
    }

    /// RFC 5929 tls-unique binding value.
    pub fn tls_unique(&self) -> Option<&[u8]> {
        self.tls_unique.as_deref()
    }

    pub fn local_verify_data(&self) -> Option<&[u8]> {
        self.local_verify_data.as_deref()
    }

    pub fn peer_verify_data(&self) -> Option<&[u8]> {
        self.peer_verify_data.as_deref()
    }

    pub fn is_encrypt_then_mac(&self) -> bool {
        self.encrypt_then_mac
    }

    pub fn is_extended_master_secret(&self) -> bool {
        self.extended_master_secret
    }

    pub fn is_extended_padding(&self) -> bool {
        self.extended_padding
    }

    pub fn is_truncated_hmac(&self) -> bool {
        self.truncated_hmac
    }

    /// Selected ALPN protocol. `None` both before negotiation and when
    /// negotiation selected nothing; see [`Self::is_application_protocol_set`].
    pub fn application_protocol(&self) -> Option<&ProtocolName> {
        self.application_protocol.protocol()
    }

    /// Whether ALPN negotiation took place.
    pub fn is_application_protocol_set(&self) -> bool {
        self.application_protocol.is_set()
    }

    pub fn client_server_names(&self) -> Option<&[ServerName]> {
        self.client_server_names.as_deref()
    }

    pub fn client_sig_algs(&self) -> Option<&[SignatureScheme]> {
        self.client_sig_algs.as_deref()
    }

    pub fn client_sig_algs_cert(&self) -> Option<&[SignatureScheme]> {
        self.client_sig_algs_cert.as_deref()
    }

    pub fn client_supported_groups(&self) -> Option<&[NamedGroup]> {
        self.client_supported_groups.as_deref()
    }

    pub fn local_certificate(&self) -> Option<&Arc<Certificate>> {
        self.local_certificate.as_ref()
    }

    pub fn peer_certificate(&self) -> Option<&Arc<Certificate>> {
        self.peer_certificate.as_ref()
    }
}
