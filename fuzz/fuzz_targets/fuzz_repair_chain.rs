#![no_main]

use garble::domain::services::{SignatureCatalog, find_repair};
use libfuzzer_sys::fuzz_target;

const EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "zip", "pdf", "gif", "7z", "bin"];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, body)) = data.split_first() else {
        return;
    };
    let extension = EXTENSIONS[selector as usize % EXTENSIONS.len()];
    let header_size = (selector as usize % 64) + 1;
    let catalog = SignatureCatalog::default();

    if let Some(repair) = find_repair(body, extension, header_size, &catalog) {
        assert_eq!(repair.candidate.len(), body.len());
    } else {
        let _ = catalog.identify(body);
    }
});
