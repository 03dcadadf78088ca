//! Domain layer unit tests
//!
//! Tests for file classification, the signature catalog, corruption methods
//! and the repair chain.

use garble::domain::entities::{CorruptionMethod, CorruptionReport, FileType, LogKind};
use garble::domain::services::{RepairRule, SIGNATURES, SignatureCatalog, find_repair};
use rstest::*;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// FileType Tests
// ============================================================================

#[rstest]
#[case("png", FileType::Png)]
#[case("PNG", FileType::Png)]
#[case("jpg", FileType::Jpeg)]
#[case("JpEg", FileType::Jpeg)]
#[case("zip", FileType::Zip)]
#[case("pdf", FileType::Pdf)]
#[case("gif", FileType::Gif)]
#[case("tiff", FileType::Tiff)]
#[case("7z", FileType::SevenZip)]
#[case("txt", FileType::Unknown)]
#[case("", FileType::Unknown)]
fn test_file_type_from_extension(#[case] extension: &str, #[case] expected: FileType) {
    assert_eq!(FileType::from_extension(extension), expected);
}

#[rstest]
#[case("/data/photo.png", FileType::Png)]
#[case("/data/corrupted_photo.PNG", FileType::Png)]
#[case("/data/archive.tar.gz", FileType::Gzip)]
#[case("/data/README", FileType::Unknown)]
#[case("/data/.hidden", FileType::Unknown)]
fn test_file_type_from_path(#[case] path: &str, #[case] expected: FileType) {
    assert_eq!(FileType::from_path(Path::new(path)), expected);
}

#[test]
fn test_unknown_is_not_known() {
    assert!(!FileType::Unknown.is_known());
    assert!(FileType::Pdf.is_known());
}

// ============================================================================
// SignatureCatalog Tests
// ============================================================================

#[fixture]
fn catalog() -> SignatureCatalog {
    SignatureCatalog::default()
}

#[rstest]
fn test_every_signature_classifies_as_its_extension(catalog: SignatureCatalog) {
    for entry in catalog.entries() {
        assert!(entry.file_type().is_known(), "{}", entry.extension);
        assert!(catalog.matches(entry.magic, entry.extension));
    }
}

#[rstest]
#[case(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], "png", true)]
#[case(&[0x89, 0x50, 0x4E], "png", false)]
#[case(&[0xFF, 0xD8, 0xFF, 0xE0], "jpg", true)]
#[case(&[0xFF, 0xD8, 0xFF, 0xE0], "JPEG", true)]
#[case(&[0x50, 0x4B, 0x03, 0x04], "zip", true)]
#[case(b"%PDF-1.7", "pdf", true)]
#[case(b"%PDF-1.7", "png", false)]
#[case(b"GIF89a", "gif", true)]
#[case(&[0x00, 0x00, 0x00, 0x00], "png", false)]
#[case(&[0x89, 0x50, 0x4E, 0x47], "xyz", false)]
fn test_catalog_matches(
    catalog: SignatureCatalog,
    #[case] header: &[u8],
    #[case] extension: &str,
    #[case] expected: bool,
) {
    assert_eq!(catalog.matches(header, extension), expected);
}

#[rstest]
fn test_identify_by_content(catalog: SignatureCatalog) {
    let entry = catalog.identify(b"%PDF-1.4\n").unwrap();
    assert_eq!(entry.file_type(), FileType::Pdf);
    assert!(catalog.identify(&[0x00, 0x01, 0x02]).is_none());
    assert!(catalog.identify(&[]).is_none());
}

#[rstest]
fn test_catalog_knows(catalog: SignatureCatalog) {
    assert!(catalog.knows("Png"));
    assert!(catalog.knows("7z"));
    assert!(!catalog.knows("docx"));
    assert_eq!(catalog.len(), SIGNATURES.len());
    assert!(!catalog.is_empty());
}

// ============================================================================
// CorruptionMethod Tests
// ============================================================================

#[rstest]
#[case("header-flip", CorruptionMethod::HeaderFlip)]
#[case("ZERO_FILL", CorruptionMethod::ZeroFill)]
#[case(" bit-shift-left ", CorruptionMethod::BitShiftLeft)]
#[case("overwrite_all", CorruptionMethod::OverwriteAll)]
fn test_method_from_str(#[case] raw: &str, #[case] expected: CorruptionMethod) {
    assert_eq!(CorruptionMethod::from_str(raw).unwrap(), expected);
}

#[test]
fn test_method_names_round_trip() {
    for method in CorruptionMethod::ALL {
        assert_eq!(method.name().parse::<CorruptionMethod>(), Ok(method));
    }
    assert!("shred".parse::<CorruptionMethod>().is_err());
}

#[test]
fn test_default_method_is_header_flip() {
    assert_eq!(CorruptionMethod::default(), CorruptionMethod::HeaderFlip);
}

#[rstest]
#[case(CorruptionMethod::ZeroFill, 1000, 256, 0..256)]
#[case(CorruptionMethod::ZeroFill, 10, 256, 0..10)]
#[case(CorruptionMethod::OverwriteAll, 1000, 256, 0..1000)]
#[case(CorruptionMethod::HeaderFlip, 0, 256, 0..0)]
fn test_affected_range(
    #[case] method: CorruptionMethod,
    #[case] len: usize,
    #[case] header_size: usize,
    #[case] expected: std::ops::Range<usize>,
) {
    assert_eq!(method.affected_range(len, header_size), expected);
}

#[test]
fn test_only_overwrite_all_is_unrepairable() {
    for method in CorruptionMethod::ALL {
        assert_eq!(
            method.is_repairable(),
            method != CorruptionMethod::OverwriteAll
        );
    }
}

#[test]
fn test_report_hashes_original_region() {
    let report = CorruptionReport::new(CorruptionMethod::HeaderFlip, b"abc");
    assert_eq!(report.affected_bytes, 3);
    assert_eq!(
        report.original_sha256,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert!(report.reversible);
    assert!(!CorruptionReport::new(CorruptionMethod::ZeroFill, b"abc").reversible);
}

#[test]
fn test_log_kind_parse() {
    assert_eq!("Warning".parse::<LogKind>(), Ok(LogKind::Warning));
    assert!("loud".parse::<LogKind>().is_err());
    assert_eq!(format!("[{:<7}]", LogKind::Info), "[info   ]");
}

// ============================================================================
// Repair Chain Tests
// ============================================================================

#[rstest]
#[case("png", RepairRule::PngHeader, &[0x89, 0x50, 0x4E, 0x47])]
#[case("zip", RepairRule::ZipHeader, &[0x50, 0x4B])]
#[case("jpg", RepairRule::JpegHeader, &[0xFF, 0xD8, 0xFF])]
#[case("jpeg", RepairRule::JpegHeader, &[0xFF, 0xD8, 0xFF])]
#[case("pdf", RepairRule::PdfHeader, &[0x25, 0x50, 0x44, 0x46])]
fn test_zeroed_header_repaired_by_magic_rule(
    catalog: SignatureCatalog,
    #[case] extension: &str,
    #[case] rule: RepairRule,
    #[case] magic: &[u8],
) {
    let mut data = vec![0u8; 64];
    data.extend_from_slice(b"payload");

    let repair = find_repair(&data, extension, 256, &catalog).unwrap();
    assert_eq!(repair.rule, rule);
    assert_eq!(repair.candidate.len(), data.len());
    assert_eq!(&repair.candidate[..magic.len()], magic);
    assert_eq!(&repair.candidate[magic.len()..], &data[magic.len()..]);
}

#[rstest]
fn test_flipped_gif_recovered_by_unflip(catalog: SignatureCatalog) {
    let original = b"GIF89a\x01\x00\x01\x00 rest of image";
    let flipped: Vec<u8> = original
        .iter()
        .enumerate()
        .map(|(i, b)| if i < 8 { !b } else { *b })
        .collect();

    let repair = find_repair(&flipped, "gif", 8, &catalog).unwrap();
    assert_eq!(repair.rule, RepairRule::BitwiseUnflip);
    assert_eq!(repair.candidate, original.to_vec());
}

#[rstest]
fn test_zeroed_gif_falls_back_to_header_patch(catalog: SignatureCatalog) {
    let data = vec![0u8; 12];
    let repair = find_repair(&data, "gif", 8, &catalog).unwrap();
    assert_eq!(repair.rule, RepairRule::HeaderPatch);
    assert_eq!(&repair.candidate[..8], &[0xFF; 8]);
    assert_eq!(&repair.candidate[8..], &[0u8; 4]);
}

#[rstest]
fn test_random_garbage_has_no_repair(catalog: SignatureCatalog) {
    let data = [0x13, 0x37, 0xC0, 0xDE, 0x42, 0x42];
    assert!(find_repair(&data, "png", 256, &catalog).is_none());
    assert!(find_repair(&data, "xyz", 256, &catalog).is_none());
}

#[test]
fn test_method_names_are_stable() {
    let names: Vec<&str> = RepairRule::CHAIN.iter().map(|r| r.method_name()).collect();
    assert_eq!(
        names,
        [
            "Repaired PNG header",
            "Repaired ZIP header",
            "Repaired JPEG header",
            "Repaired PDF header",
            "Recovered by bitwise unflip",
            "Fallback recovery by header patch",
        ]
    );
}
