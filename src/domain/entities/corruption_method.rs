//! Corruption method entity
//!
//! The closed set of byte transforms the corruption engine can apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

/// Strategy used to damage a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorruptionMethod {
    /// Bitwise complement of every header byte
    #[default]
    HeaderFlip,
    /// Header replaced by uniformly random bytes
    RandomBytes,
    /// Header replaced by zero bytes
    ZeroFill,
    /// Header byte order reversed
    ReverseBytes,
    /// Every header byte shifted left by one bit, bit 7 discarded
    BitShiftLeft,
    /// Whole file replaced by random bytes of the same length
    OverwriteAll,
}

impl CorruptionMethod {
    pub const ALL: [CorruptionMethod; 6] = [
        CorruptionMethod::HeaderFlip,
        CorruptionMethod::RandomBytes,
        CorruptionMethod::ZeroFill,
        CorruptionMethod::ReverseBytes,
        CorruptionMethod::BitShiftLeft,
        CorruptionMethod::OverwriteAll,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CorruptionMethod::HeaderFlip => "header-flip",
            CorruptionMethod::RandomBytes => "random-bytes",
            CorruptionMethod::ZeroFill => "zero-fill",
            CorruptionMethod::ReverseBytes => "reverse-bytes",
            CorruptionMethod::BitShiftLeft => "bit-shift-left",
            CorruptionMethod::OverwriteAll => "overwrite-all",
        }
    }

    /// Whether the output still carries enough information to undo the
    /// transform. Only the self-inverse transforms qualify.
    pub fn is_reversible(&self) -> bool {
        matches!(
            self,
            CorruptionMethod::HeaderFlip | CorruptionMethod::ReverseBytes
        )
    }

    /// Whether any recovery rule can rebuild a header after this transform.
    /// `OverwriteAll` leaves no structure behind.
    pub fn is_repairable(&self) -> bool {
        *self != CorruptionMethod::OverwriteAll
    }

    /// Byte range the transform rewrites for a file of `len` bytes
    pub fn affected_range(&self, len: usize, header_size: usize) -> Range<usize> {
        match self {
            CorruptionMethod::OverwriteAll => 0..len,
            _ => 0..header_size.min(len),
        }
    }
}

impl fmt::Display for CorruptionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown corruption method '{0}' (expected one of: header-flip, random-bytes, zero-fill, reverse-bytes, bit-shift-left, overwrite-all)")]
pub struct ParseMethodError(pub String);

impl FromStr for CorruptionMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        CorruptionMethod::ALL
            .into_iter()
            .find(|method| method.name() == normalized)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}
