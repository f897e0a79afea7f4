//! Connection information snapshot.
//!
//! After a TLS handshake completes, callers can query negotiated parameters
//! via the [`ConnectionInfo`] struct. It never carries secret material.

use std::sync::Arc;

use crate::certificate::Certificate;
use crate::extensions::ProtocolName;
use crate::params::SecurityParameters;
use crate::{CipherSuite, ProtocolVersion, TlsRole};

/// Snapshot of negotiated connection parameters after handshake.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    /// Local role.
    pub role: Option<TlsRole>,
    /// Negotiated protocol version.
    pub version: Option<ProtocolVersion>,
    /// The negotiated cipher suite.
    pub cipher_suite: CipherSuite,
    /// Negotiated ALPN protocol (if any).
    pub alpn_protocol: Option<ProtocolName>,
    /// Whether ALPN negotiation happened at all.
    pub alpn_negotiated: bool,
    /// Session identifier, if one was assigned.
    pub session_id: Option<Vec<u8>>,
    /// Peer certificate chain, shared with the security parameters.
    pub peer_certificate: Option<Arc<Certificate>>,
    /// Peer's Finished verify_data.
    pub peer_verify_data: Vec<u8>,
    /// Local Finished verify_data.
    pub local_verify_data: Vec<u8>,
    /// Whether the Extended Master Secret extension (RFC 7627) was used.
    pub extended_master_secret: bool,
    /// Whether Encrypt-then-MAC (RFC 7366) is in effect.
    pub encrypt_then_mac: bool,
}

impl ConnectionInfo {
    /// Copy the non-secret negotiated state out of `params`.
    pub fn from_parameters(params: &SecurityParameters) -> Self {
        Self {
            role: params.entity(),
            version: params.negotiated_version(),
            cipher_suite: params.cipher_suite(),
            alpn_protocol: params.application_protocol().cloned(),
            alpn_negotiated: params.is_application_protocol_set(),
            session_id: params.session_id().map(<[u8]>::to_vec),
            peer_certificate: params.peer_certificate().cloned(),
            peer_verify_data: params.peer_verify_data().unwrap_or_default().to_vec(),
            local_verify_data: params.local_verify_data().unwrap_or_default().to_vec(),
            extended_master_secret: params.is_extended_master_secret(),
            encrypt_then_mac: params.is_encrypt_then_mac(),
        }
    }
}
