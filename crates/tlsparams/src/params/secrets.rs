//! Ownership and staged destruction of derived secrets.
//!
//! Each slot owns at most one capability. A slot is emptied before its old
//! capability is destroyed, so a reader can only ever observe a live secret or
//! an absent one.

use std::fmt;

use tlsparams_types::{SecretFailure, TlsError};
use tracing::{debug, warn};

use crate::crypt::secret::{SecretSlot, TlsSecret};

/// Per-connection secret slots.
#[derive(Default)]
pub struct SecretStore {
    slots: [Option<Box<dyn TlsSecret>>; 6],
}

impl fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live_slots()).finish()
    }
}

impl SecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `secret` in `slot`, destroying whatever the slot held.
    ///
    /// The new capability is installed even when destroying the old one
    /// fails; that failure is reported as `ClearIncomplete` for the slot.
    pub fn set(&mut self, slot: SecretSlot, secret: Box<dyn TlsSecret>) -> Result<(), TlsError> {
        let previous = self.slots[slot.index()].take();
        let result = match previous {
            Some(old) => {
                debug!(slot = slot.name(), "replacing secret");
                destroy_one(slot, old).map_err(|f| TlsError::ClearIncomplete(vec![f]))
            }
            None => {
                debug!(slot = slot.name(), "secret set");
                Ok(())
            }
        };
        self.slots[slot.index()] = Some(secret);
        result
    }

    pub fn get(&self, slot: SecretSlot) -> Option<&dyn TlsSecret> {
        self.slots[slot.index()].as_deref()
    }

    /// Destroy and remove the secret in one slot. Absent slots succeed.
    pub fn clear_slot(&mut self, slot: SecretSlot) -> Result<(), TlsError> {
        match self.slots[slot.index()].take() {
            Some(old) => destroy_one(slot, old).map_err(|f| TlsError::ClearIncomplete(vec![f])),
            None => Ok(()),
        }
    }

    /// Destroy every held secret and leave all slots absent.
    ///
    /// Every slot is attempted even after a failure; all failures are returned
    /// together. Calling this on an empty store is a no-op.
    pub fn clear_all(&mut self) -> Result<(), TlsError> {
        let mut failures = Vec::new();
        for slot in SecretSlot::ALL {
            if let Some(old) = self.slots[slot.index()].take() {
                if let Err(failure) = destroy_one(slot, old) {
                    failures.push(failure);
                }
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(TlsError::ClearIncomplete(failures))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Slots currently holding a capability, in declaration order.
    pub fn live_slots(&self) -> impl Iterator<Item = SecretSlot> + '_ {
        SecretSlot::ALL
            .into_iter()
            .filter(move |slot| self.slots[slot.index()].is_some())
    }
}

/// Anything still held is always destroyed when the store is dropped.
/// Failures were already logged by `destroy_one`.
impl Drop for SecretStore {
    fn drop(&mut self) {
        let _ = self.clear_all();
    }
}

fn destroy_one(slot: SecretSlot, mut secret: Box<dyn TlsSecret>) -> Result<(), SecretFailure> {
    match secret.destroy() {
        Ok(()) => {
            debug!(slot = slot.name(), "secret destroyed");
            Ok(())
        }
        Err(error) => {
            warn!(slot = slot.name(), %error, "secret destruction failed");
            Err(SecretFailure {
                slot: slot.name(),
                error,
            })
        }
    }
}
