//! Negotiated extension data (SNI, ALPN).

use std::fmt;

/// One entry of a client's server_name extension (RFC 6066 §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerName {
    pub name_type: u8,
    pub name: Vec<u8>,
}

impl ServerName {
    pub const HOST_NAME: u8 = 0;

    pub fn host_name(name: &str) -> Self {
        Self {
            name_type: Self::HOST_NAME,
            name: name.as_bytes().to_vec(),
        }
    }

    /// The name as UTF-8, for host_name entries only.
    pub fn as_host_name(&self) -> Option<&str> {
        if self.name_type != Self::HOST_NAME {
            return None;
        }
        std::str::from_utf8(&self.name).ok()
    }
}

/// An ALPN protocol name (RFC 7301).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ProtocolName(Vec<u8>);

impl ProtocolName {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn http_1_1() -> Self {
        Self(b"http/1.1".to_vec())
    }

    pub fn http_2() -> Self {
        Self(b"h2".to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_utf8(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl fmt::Debug for ProtocolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_utf8() {
            Some(s) => write!(f, "ProtocolName({s:?})"),
            None => write!(f, "ProtocolName({:02x?})", self.0),
        }
    }
}

/// ALPN outcome.
///
/// `Negotiated(None)` means the extension exchange happened but no protocol
/// was selected, which is distinct from the exchange never happening.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApplicationProtocol {
    #[default]
    NotNegotiated,
    Negotiated(Option<ProtocolName>),
}

impl ApplicationProtocol {
    pub fn protocol(&self) -> Option<&ProtocolName> {
        match self {
            ApplicationProtocol::Negotiated(Some(p)) => Some(p),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, ApplicationProtocol::Negotiated(_))
    }
}
