//! Signature catalog service
//!
//! A static table of magic numbers keyed by extension. Every entry is
//! anchored at offset 0; matching is a plain prefix comparison.

use crate::domain::entities::SignatureEntry;

/// Built-in signature table, in lookup order
pub static SIGNATURES: &[SignatureEntry] = &[
    SignatureEntry::new("png", &[0x89, 0x50, 0x4E, 0x47]),
    SignatureEntry::new("jpg", &[0xFF, 0xD8, 0xFF]),
    SignatureEntry::new("jpeg", &[0xFF, 0xD8, 0xFF]),
    SignatureEntry::new("zip", &[0x50, 0x4B]),
    SignatureEntry::new("pdf", &[0x25, 0x50, 0x44, 0x46]),
    SignatureEntry::new("gif", &[0x47, 0x49, 0x46, 0x38]),
    SignatureEntry::new("bmp", &[0x42, 0x4D]),
    SignatureEntry::new("tif", &[0x49, 0x49, 0x2A, 0x00]),
    SignatureEntry::new("tiff", &[0x49, 0x49, 0x2A, 0x00]),
    SignatureEntry::new("webp", &[0x52, 0x49, 0x46, 0x46]),
    SignatureEntry::new("gz", &[0x1F, 0x8B]),
    SignatureEntry::new("7z", &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]),
];

/// Catalog of known file signatures
///
/// # Example
///
/// ```
/// use garble::domain::services::SignatureCatalog;
///
/// let catalog = SignatureCatalog::default();
/// assert!(catalog.matches(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A], "PNG"));
/// assert!(!catalog.matches(&[0x00, 0x00, 0x00, 0x00], "png"));
/// assert!(!catalog.matches(&[0x89, 0x50, 0x4E, 0x47], "xyz"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SignatureCatalog {
    entries: &'static [SignatureEntry],
}

impl SignatureCatalog {
    /// Creates a catalog over a caller-supplied table
    pub const fn with_entries(entries: &'static [SignatureEntry]) -> Self {
        Self { entries }
    }

    /// Returns the entry registered for `extension`, ignoring case
    pub fn entry_for(&self, extension: &str) -> Option<&'static SignatureEntry> {
        self.entries
            .iter()
            .find(|entry| entry.extension.eq_ignore_ascii_case(extension))
    }

    /// Checks whether `header` starts with the magic registered for
    /// `extension`. Unknown extensions never match.
    pub fn matches(&self, header: &[u8], extension: &str) -> bool {
        self.entry_for(extension)
            .is_some_and(|entry| entry.matches_header(header))
    }

    /// Identifies `header` by content alone, first entry in table order wins
    pub fn identify(&self, header: &[u8]) -> Option<&'static SignatureEntry> {
        self.entries.iter().find(|entry| entry.matches_header(header))
    }

    /// Returns whether `extension` has a registered entry
    pub fn knows(&self, extension: &str) -> bool {
        self.entry_for(extension).is_some()
    }

    pub fn entries(&self) -> &'static [SignatureEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SignatureCatalog {
    fn default() -> Self {
        Self::with_entries(SIGNATURES)
    }
}
