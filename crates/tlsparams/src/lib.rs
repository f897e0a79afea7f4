#![forbid(unsafe_code)]
#![doc = "Per-connection TLS security parameters: negotiated state and secret lifecycle."]

pub mod certificate;
pub mod channel_binding;
pub mod config;
pub mod connection;
pub mod connection_info;
pub mod crypt;
pub mod extensions;
pub mod params;

pub use tlsparams_types::{SecretError, SecretFailure, TlsError};

use std::fmt;

/// Protocol version as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolVersion(pub u16);

impl ProtocolVersion {
    pub const SSL_V3: Self = Self(0x0300);
    pub const TLS_V1_0: Self = Self(0x0301);
    pub const TLS_V1_1: Self = Self(0x0302);
    pub const TLS_V1_2: Self = Self(0x0303);
    pub const TLS_V1_3: Self = Self(0x0304);
    pub const DTLS_V1_0: Self = Self(0xFEFF);
    pub const DTLS_V1_2: Self = Self(0xFEFD);
    pub const DTLS_V1_3: Self = Self(0xFEFC);

    /// Returns true if this is a DTLS version.
    pub fn is_dtls(self) -> bool {
        self.0 >> 8 == 0xFE
    }

    /// Returns true for TLS 1.3 and DTLS 1.3.
    pub fn is_tls13(self) -> bool {
        self == Self::TLS_V1_3 || self == Self::DTLS_V1_3
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SSL_V3 => f.write_str("SSLv3"),
            Self::TLS_V1_0 => f.write_str("TLSv1.0"),
            Self::TLS_V1_1 => f.write_str("TLSv1.1"),
            Self::TLS_V1_2 => f.write_str("TLSv1.2"),
            Self::TLS_V1_3 => f.write_str("TLSv1.3"),
            Self::DTLS_V1_0 => f.write_str("DTLSv1.0"),
            Self::DTLS_V1_2 => f.write_str("DTLSv1.2"),
            Self::DTLS_V1_3 => f.write_str("DTLSv1.3"),
            Self(v) => write!(f, "0x{v:04x}"),
        }
    }
}

/// TLS cipher suite identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSuite(pub u16);

impl CipherSuite {
    /// Initial suite of every connection before negotiation (no protection).
    pub const TLS_NULL_WITH_NULL_NULL: Self = Self(0x0000);

    // TLS 1.3 cipher suites
    pub const TLS_AES_128_GCM_SHA256: Self = Self(0x1301);
    pub const TLS_AES_256_GCM_SHA384: Self = Self(0x1302);
    pub const TLS_CHACHA20_POLY1305_SHA256: Self = Self(0x1303);

    // TLS 1.2 cipher suites (representative)
    pub const TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256: Self = Self(0xC02F);
    pub const TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384: Self = Self(0xC030);
    pub const TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: Self = Self(0xC02B);
    pub const TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: Self = Self(0xC02C);
    pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256: Self = Self(0xC027);
    pub const TLS_PSK_WITH_AES_128_GCM_SHA256: Self = Self(0x00A8);

    /// Returns true for the null suite, i.e. nothing negotiated yet.
    pub fn is_null(self) -> bool {
        self == Self::TLS_NULL_WITH_NULL_NULL
    }
}

impl Default for CipherSuite {
    fn default() -> Self {
        Self::TLS_NULL_WITH_NULL_NULL
    }
}

/// The role of a TLS endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsRole {
    Client,
    Server,
}

impl TlsRole {
    /// Lowercase role name, used in logs and errors.
    pub fn as_str(self) -> &'static str {
        match self {
            TlsRole::Client => "client",
            TlsRole::Server => "server",
        }
    }

    /// The opposite endpoint.
    pub fn peer(self) -> Self {
        match self {
            TlsRole::Client => TlsRole::Server,
            TlsRole::Server => TlsRole::Client,
        }
    }
}
