//! Negotiated cryptographic identifiers and the opaque secret capability.
//!
//! Nothing here derives keys; the handshake layer computes secrets and
//! hands them over as [`secret::TlsSecret`] capabilities.

pub mod secret;

pub use tlsparams_types::{HashAlgId, PrfAlgorithm};

/// TLS named group identifiers (for key exchange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedGroup(pub u16);

impl NamedGroup {
    // Elliptic curves
    pub const SECP256R1: Self = Self(0x0017);
    pub const SECP384R1: Self = Self(0x0018);
    pub const SECP521R1: Self = Self(0x0019);
    pub const X25519: Self = Self(0x001D);
    pub const X448: Self = Self(0x001E);
    // Finite field DH
    pub const FFDHE2048: Self = Self(0x0100);
    pub const FFDHE3072: Self = Self(0x0101);
    pub const FFDHE4096: Self = Self(0x0102);
    // Post-quantum hybrid
    pub const X25519_MLKEM768: Self = Self(0x11EC);

    /// Returns true for finite-field Diffie-Hellman groups.
    pub fn is_ffdhe(&self) -> bool {
        (0x0100..=0x01FF).contains(&self.0)
    }
}

/// TLS signature scheme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureScheme(pub u16);

impl SignatureScheme {
    pub const RSA_PKCS1_SHA256: Self = Self(0x0401);
    pub const RSA_PKCS1_SHA384: Self = Self(0x0501);
    pub const RSA_PKCS1_SHA512: Self = Self(0x0601);
    pub const ECDSA_SECP256R1_SHA256: Self = Self(0x0403);
    pub const ECDSA_SECP384R1_SHA384: Self = Self(0x0503);
    pub const ECDSA_SECP521R1_SHA512: Self = Self(0x0603);
    pub const RSA_PSS_RSAE_SHA256: Self = Self(0x0804);
    pub const RSA_PSS_RSAE_SHA384: Self = Self(0x0805);
    pub const RSA_PSS_RSAE_SHA512: Self = Self(0x0806);
    pub const ED25519: Self = Self(0x0807);
    pub const SM2_SM3: Self = Self(0x0708);
}

/// Key exchange algorithm of the negotiated cipher suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyExchangeAlg {
    /// Static RSA key exchange (client encrypts PMS with server's RSA cert key).
    Rsa,
    Dhe,
    Ecdhe,
    /// Plain PSK key exchange (RFC 4279), identity-based.
    Psk,
    DhePsk,
    RsaPsk,
    EcdhePsk,
    /// SRP key exchange (RFC 5054).
    Srp,
    /// TLS 1.3: key exchange is negotiated separately from the cipher suite.
    Tls13,
}

impl KeyExchangeAlg {
    /// Returns true if the exchange mixes in a pre-shared key.
    pub fn uses_psk(self) -> bool {
        matches!(
            self,
            KeyExchangeAlg::Psk
                | KeyExchangeAlg::DhePsk
                | KeyExchangeAlg::RsaPsk
                | KeyExchangeAlg::EcdhePsk
        )
    }
}

/// Record compression method. Only `null` is ever negotiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CompressionMethod {
    #[default]
    Null = 0,
}

/// Maximum fragment length codes (RFC 6066 §4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MaxFragmentLength {
    Pow2_9 = 1,
    Pow2_10 = 2,
    Pow2_11 = 3,
    Pow2_12 = 4,
}

impl MaxFragmentLength {
    /// Convert from u8 to MaxFragmentLength.
    pub fn from_u8(v: u8) -> Result<Self, u8> {
        match v {
            1 => Ok(MaxFragmentLength::Pow2_9),
            2 => Ok(MaxFragmentLength::Pow2_10),
            3 => Ok(MaxFragmentLength::Pow2_11),
            4 => Ok(MaxFragmentLength::Pow2_12),
            _ => Err(v),
        }
    }

    /// Plaintext fragment limit in bytes.
    pub fn length(self) -> usize {
        1 << (8 + self as u8)
    }
}
