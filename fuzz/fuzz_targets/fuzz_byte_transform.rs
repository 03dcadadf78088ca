#![no_main]

use garble::domain::entities::CorruptionMethod;
use garble::domain::services::byte_transform;
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, body)) = data.split_first() else {
        return;
    };
    let method = CorruptionMethod::ALL[selector as usize % CorruptionMethod::ALL.len()];
    let header_size = (selector as usize) + 1;
    let mut rng = StdRng::seed_from_u64(selector as u64);

    let out = byte_transform::apply(method, body, header_size, &mut rng);
    assert_eq!(out.len(), body.len());
    if method != CorruptionMethod::OverwriteAll {
        let end = header_size.min(body.len());
        assert_eq!(&out[end..], &body[end..]);
    }
});
