//! Opaque, destroyable secret capabilities.
//!
//! A secret is handed to the security parameters by the handshake layer once
//! derived. Readers never get an owned copy of the key material: `with_bytes`
//! lends it to a closure for the duration of the call. Every capability can be
//! destroyed exactly once; reading a destroyed capability is a defined
//! operation that reports `is_destroyed() == true` and lends nothing.

use std::fmt;

use subtle::ConstantTimeEq;
use tlsparams_types::SecretError;
use zeroize::{Zeroize, Zeroizing};

/// A destroyable handle to key material.
pub trait TlsSecret: Send + Sync {
    /// Destroy the underlying key material.
    ///
    /// Fails with `SecretError::AlreadyDestroyed` on a second call.
    fn destroy(&mut self) -> Result<(), SecretError>;

    /// Whether `destroy` has completed on this capability.
    fn is_destroyed(&self) -> bool;

    /// Lend the key material to `f`, e.g. to key a record cipher.
    ///
    /// Fails with `SecretError::AlreadyDestroyed` without calling `f` once
    /// the capability has been destroyed.
    fn with_bytes(&self, f: &mut dyn FnMut(&[u8])) -> Result<(), SecretError>;
}

impl fmt::Debug for dyn TlsSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_destroyed() {
            f.write_str("<destroyed secret>")
        } else {
            f.write_str("<secret>")
        }
    }
}

/// Named secret slots held per connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretSlot {
    Early,
    Handshake,
    Master,
    /// Key-exchange output (pre-master or (EC)DHE shared secret).
    Shared,
    ClientTraffic,
    ServerTraffic,
}

impl SecretSlot {
    pub const ALL: [SecretSlot; 6] = [
        SecretSlot::Early,
        SecretSlot::Handshake,
        SecretSlot::Master,
        SecretSlot::Shared,
        SecretSlot::ClientTraffic,
        SecretSlot::ServerTraffic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SecretSlot::Early => "early",
            SecretSlot::Handshake => "handshake",
            SecretSlot::Master => "master",
            SecretSlot::Shared => "shared",
            SecretSlot::ClientTraffic => "client_traffic",
            SecretSlot::ServerTraffic => "server_traffic",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SecretSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-memory secret capability. Zeroized on destroy and on drop.
pub struct SecretBytes {
    bytes: Vec<u8>,
    destroyed: bool,
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBytes")
            .field("len", &self.bytes.len())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

impl SecretBytes {
    /// Take ownership of freshly derived key material.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            destroyed: false,
        }
    }

    /// Length of the live key material (0 once destroyed).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Constant-time equality. A destroyed secret equals nothing.
    pub fn ct_eq(&self, other: &SecretBytes) -> bool {
        if self.destroyed || other.destroyed || self.bytes.len() != other.bytes.len() {
            return false;
        }
        self.bytes.ct_eq(&other.bytes).into()
    }

    /// Move the key material out, leaving this capability destroyed.
    pub fn extract(&mut self) -> Result<Zeroizing<Vec<u8>>, SecretError> {
        if self.destroyed {
            return Err(SecretError::AlreadyDestroyed);
        }
        self.destroyed = true;
        Ok(Zeroizing::new(std::mem::take(&mut self.bytes)))
    }
}

impl TlsSecret for SecretBytes {
    fn destroy(&mut self) -> Result<(), SecretError> {
        if self.destroyed {
            return Err(SecretError::AlreadyDestroyed);
        }
        self.bytes.zeroize();
        self.destroyed = true;
        Ok(())
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn with_bytes(&self, f: &mut dyn FnMut(&[u8])) -> Result<(), SecretError> {
        if self.destroyed {
            return Err(SecretError::AlreadyDestroyed);
        }
        f(&self.bytes);
        Ok(())
    }
}
