//! Connection configuration with builder pattern.

use crate::TlsRole;

/// Per-connection settings that govern the security parameters' lifecycle.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// The local role, written into the security parameters on first use.
    pub role: TlsRole,
    /// Whether a renegotiation may start on an established connection.
    pub allow_renegotiation: bool,
}

impl ConnectionConfig {
    /// Create a builder for connection configuration.
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::default()
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfigBuilder::default().build()
    }
}

/// Builder for `ConnectionConfig`.
#[derive(Debug)]
pub struct ConnectionConfigBuilder {
    role: TlsRole,
    allow_renegotiation: bool,
}

impl Default for ConnectionConfigBuilder {
    fn default() -> Self {
        Self {
            role: TlsRole::Client,
            allow_renegotiation: false,
        }
    }
}

impl ConnectionConfigBuilder {
    pub fn role(mut self, role: TlsRole) -> Self {
        self.role = role;
        self
    }

    pub fn allow_renegotiation(mut self, allow: bool) -> Self {
        self.allow_renegotiation = allow;
        self
    }

    pub fn build(self) -> ConnectionConfig {
        ConnectionConfig {
            role: self.role,
            allow_renegotiation: self.allow_renegotiation,
        }
    }
}
