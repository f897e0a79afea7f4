//! Certificate chain references.
//!
//! The certificate loader or validator owns the canonical chain; the security
//! parameters only keep an `Arc` to it. Nothing in this crate parses or
//! verifies the DER contents.

/// An ordered certificate chain (DER-encoded, leaf first).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Certificate {
    entries: Vec<Vec<u8>>,
}

impl Certificate {
    pub fn new(entries: Vec<Vec<u8>>) -> Self {
        Self { entries }
    }

    /// An empty chain, as sent by a client declining to authenticate.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The end-entity certificate, if any.
    pub fn leaf(&self) -> Option<&[u8]> {
        self.entries.first().map(Vec::as_slice)
    }

    pub fn entries(&self) -> &[Vec<u8>] {
        &self.entries
    }
}
