/// Hash algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sm3,
}

impl HashAlgId {
    /// Digest output size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            HashAlgId::Md5 => 16,
            HashAlgId::Sha1 => 20,
            HashAlgId::Sha256 | HashAlgId::Sm3 => 32,
            HashAlgId::Sha384 => 48,
        }
    }
}

/// Pseudorandom function used for key derivation and Finished verify_data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrfAlgorithm {
    /// SSL 3.0 MD5/SHA-1 construction.
    SslPrfLegacy = 0,
    /// TLS 1.0/1.1 MD5 ⊕ SHA-1 PRF.
    TlsPrfLegacy = 1,
    TlsPrfSha256 = 2,
    TlsPrfSha384 = 3,
    Tls13HkdfSha256 = 4,
    Tls13HkdfSha384 = 5,
    Tls13HkdfSm3 = 7,
}

impl PrfAlgorithm {
    /// Convert from the numeric identifier.
    pub fn from_u8(v: u8) -> Result<Self, u8> {
        match v {
            0 => Ok(PrfAlgorithm::SslPrfLegacy),
            1 => Ok(PrfAlgorithm::TlsPrfLegacy),
            2 => Ok(PrfAlgorithm::TlsPrfSha256),
            3 => Ok(PrfAlgorithm::TlsPrfSha384),
            4 => Ok(PrfAlgorithm::Tls13HkdfSha256),
            5 => Ok(PrfAlgorithm::Tls13HkdfSha384),
            7 => Ok(PrfAlgorithm::Tls13HkdfSm3),
            _ => Err(v),
        }
    }

    /// The underlying hash, or `None` for the legacy dual-hash constructions.
    pub fn hash_alg(self) -> Option<HashAlgId> {
        match self {
            PrfAlgorithm::SslPrfLegacy | PrfAlgorithm::TlsPrfLegacy => None,
            PrfAlgorithm::TlsPrfSha256 | PrfAlgorithm::Tls13HkdfSha256 => Some(HashAlgId::Sha256),
            PrfAlgorithm::TlsPrfSha384 | PrfAlgorithm::Tls13HkdfSha384 => Some(HashAlgId::Sha384),
            PrfAlgorithm::Tls13HkdfSm3 => Some(HashAlgId::Sm3),
        }
    }

    /// Returns true for the HKDF-based TLS 1.3 key schedules.
    pub fn is_tls13(self) -> bool {
        matches!(
            self,
            PrfAlgorithm::Tls13HkdfSha256
                | PrfAlgorithm::Tls13HkdfSha384
                | PrfAlgorithm::Tls13HkdfSm3
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prf_from_u8() {
        assert_eq!(PrfAlgorithm::from_u8(2), Ok(PrfAlgorithm::TlsPrfSha256));
        assert_eq!(PrfAlgorithm::from_u8(7), Ok(PrfAlgorithm::Tls13HkdfSm3));
        // 6 is unassigned
        assert_eq!(PrfAlgorithm::from_u8(6), Err(6));
    }

    #[test]
    fn test_prf_hash_alg() {
        assert_eq!(PrfAlgorithm::TlsPrfLegacy.hash_alg(), None);
        assert_eq!(
            PrfAlgorithm::Tls13HkdfSha384.hash_alg(),
            Some(HashAlgId::Sha384)
        );
        assert_eq!(HashAlgId::Sha384.output_len(), 48);
        assert!(PrfAlgorithm::Tls13HkdfSha256.is_tls13());
        assert!(!PrfAlgorithm::TlsPrfSha256.is_tls13());
    }
}
