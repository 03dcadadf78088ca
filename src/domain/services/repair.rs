//! Header repair rules
//!
//! The recovery chain is a closed, ordered list of rules. Rules only build a
//! candidate buffer; nothing here touches the file system. The first rule
//! that produces a candidate wins, even when a later rule would also apply.

use super::byte_transform::unflip_header;
use super::signature_catalog::SignatureCatalog;
use std::fmt;

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const ZIP_MAGIC: &[u8] = &[0x50, 0x4B];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PDF_MAGIC: &[u8] = &[0x25, 0x50, 0x44, 0x46];

/// A single repair strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairRule {
    PngHeader,
    ZipHeader,
    JpegHeader,
    PdfHeader,
    BitwiseUnflip,
    HeaderPatch,
}

impl RepairRule {
    /// Evaluation order of the recovery chain
    pub const CHAIN: [RepairRule; 6] = [
        RepairRule::PngHeader,
        RepairRule::ZipHeader,
        RepairRule::JpegHeader,
        RepairRule::PdfHeader,
        RepairRule::BitwiseUnflip,
        RepairRule::HeaderPatch,
    ];

    /// Method tag reported on a successful recovery
    pub fn method_name(&self) -> &'static str {
        match self {
            RepairRule::PngHeader => "Repaired PNG header",
            RepairRule::ZipHeader => "Repaired ZIP header",
            RepairRule::JpegHeader => "Repaired JPEG header",
            RepairRule::PdfHeader => "Repaired PDF header",
            RepairRule::BitwiseUnflip => "Recovered by bitwise unflip",
            RepairRule::HeaderPatch => "Fallback recovery by header patch",
        }
    }

    /// Builds a candidate for `data` if this rule applies
    ///
    /// `extension` is compared case-insensitively.
    pub fn attempt(
        &self,
        data: &[u8],
        extension: &str,
        header_size: usize,
        catalog: &SignatureCatalog,
    ) -> Option<Vec<u8>> {
        match self {
            RepairRule::PngHeader => restore_magic(data, extension, &["png"], PNG_MAGIC),
            RepairRule::ZipHeader => restore_magic(data, extension, &["zip"], ZIP_MAGIC),
            RepairRule::JpegHeader => {
                restore_magic(data, extension, &["jpg", "jpeg"], JPEG_MAGIC)
            }
            RepairRule::PdfHeader => restore_magic(data, extension, &["pdf"], PDF_MAGIC),
            RepairRule::BitwiseUnflip => {
                if data.is_empty() {
                    return None;
                }
                let candidate = unflip_header(data, header_size);
                catalog.matches(&candidate, extension).then_some(candidate)
            }
            RepairRule::HeaderPatch => {
                let end = header_size.min(data.len());
                if end == 0 || data[..end].iter().any(|&b| b != 0) {
                    return None;
                }
                let mut candidate = data.to_vec();
                candidate[..end].fill(0xFF);
                Some(candidate)
            }
        }
    }
}

impl fmt::Display for RepairRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// A candidate produced by the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub rule: RepairRule,
    pub candidate: Vec<u8>,
}

/// Runs the chain over `data`, returning the first candidate
pub fn find_repair(
    data: &[u8],
    extension: &str,
    header_size: usize,
    catalog: &SignatureCatalog,
) -> Option<Repair> {
    RepairRule::CHAIN.iter().find_map(|rule| {
        rule.attempt(data, extension, header_size, catalog)
            .map(|candidate| Repair {
                rule: *rule,
                candidate,
            })
    })
}

/// Replaces a zeroed leading run of `magic.len()` bytes with `magic`
fn restore_magic(
    data: &[u8],
    extension: &str,
    extensions: &[&str],
    magic: &[u8],
) -> Option<Vec<u8>> {
    if !extensions
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(extension))
    {
        return None;
    }
    if data.len() < magic.len() || data[..magic.len()].iter().any(|&b| b != 0) {
        return None;
    }

    let mut candidate = data.to_vec();
    candidate[..magic.len()].copy_from_slice(magic);
    Some(candidate)
}
