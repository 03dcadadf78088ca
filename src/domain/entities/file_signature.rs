//! File signature entity
//!
//! Represents the magic bytes that identify a specific file type, and the
//! extension-based classification the recovery post-check relies on.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Types of files the engine can classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// PNG image format
    Png,
    /// JPEG image format
    Jpeg,
    /// ZIP archive (and its derivatives)
    Zip,
    /// PDF document
    Pdf,
    /// GIF image format
    Gif,
    /// BMP image format
    Bmp,
    /// TIFF image format
    Tiff,
    /// WebP image format (RIFF container)
    WebP,
    /// GZIP stream
    Gzip,
    /// 7-Zip archive
    SevenZip,
    /// Unknown or unsupported format
    Unknown,
}

impl FileType {
    /// Classifies a file extension, ignoring case
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "png" => FileType::Png,
            "jpg" | "jpeg" => FileType::Jpeg,
            "zip" => FileType::Zip,
            "pdf" => FileType::Pdf,
            "gif" => FileType::Gif,
            "bmp" => FileType::Bmp,
            "tif" | "tiff" => FileType::Tiff,
            "webp" => FileType::WebP,
            "gz" => FileType::Gzip,
            "7z" => FileType::SevenZip,
            _ => FileType::Unknown,
        }
    }

    /// Classifies a path by its extension
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    /// Returns a human-readable name for this file type
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Png => "PNG Image",
            FileType::Jpeg => "JPEG Image",
            FileType::Zip => "ZIP Archive",
            FileType::Pdf => "PDF Document",
            FileType::Gif => "GIF Image",
            FileType::Bmp => "BMP Image",
            FileType::Tiff => "TIFF Image",
            FileType::WebP => "WebP Image",
            FileType::Gzip => "GZIP Stream",
            FileType::SevenZip => "7-Zip Archive",
            FileType::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != FileType::Unknown
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A registered magic number, anchored at offset 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEntry {
    /// Lower-case extension this entry is registered for
    pub extension: &'static str,
    /// Leading bytes of a well-formed file
    pub magic: &'static [u8],
}

impl SignatureEntry {
    pub const fn new(extension: &'static str, magic: &'static [u8]) -> Self {
        Self { extension, magic }
    }

    /// Returns the file type this entry identifies
    pub fn file_type(&self) -> FileType {
        FileType::from_extension(self.extension)
    }

    /// Checks if `header` starts with this entry's magic bytes
    pub fn matches_header(&self, header: &[u8]) -> bool {
        header.starts_with(self.magic)
    }
}
