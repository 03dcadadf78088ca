//! Corruption report entity

use super::corruption_method::CorruptionMethod;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Records what a single corruption destroyed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorruptionReport {
    /// The method that was applied
    pub method: CorruptionMethod,
    /// Number of bytes the method rewrote
    pub affected_bytes: usize,
    /// SHA-256 of the affected region before corruption, hex encoded
    pub original_sha256: String,
    /// Whether the method can be undone from its output alone
    pub reversible: bool,
}

impl CorruptionReport {
    /// Builds a report from the region that is about to be rewritten
    pub fn new(method: CorruptionMethod, original_region: &[u8]) -> Self {
        Self {
            method,
            affected_bytes: original_region.len(),
            original_sha256: hex::encode(Sha256::digest(original_region)),
            reversible: method.is_reversible(),
        }
    }
}
