//! Property tests for the byte transforms and the repair chain

use garble::domain::entities::CorruptionMethod;
use garble::domain::services::byte_transform::{apply, unflip_header};
use garble::domain::services::{SignatureCatalog, find_repair};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn any_method() -> impl Strategy<Value = CorruptionMethod> {
    prop::sample::select(CorruptionMethod::ALL.to_vec())
}

proptest! {
    #[test]
    fn length_is_preserved(
        method in any_method(),
        data in prop::collection::vec(any::<u8>(), 0..2048),
        header_size in 1usize..1024,
        seed in any::<u64>(),
    ) {
        let out = apply(method, &data, header_size, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(out.len(), data.len());
    }

    #[test]
    fn suffix_is_untouched(
        method in any_method(),
        data in prop::collection::vec(any::<u8>(), 0..2048),
        header_size in 1usize..1024,
        seed in any::<u64>(),
    ) {
        prop_assume!(method != CorruptionMethod::OverwriteAll);
        let out = apply(method, &data, header_size, &mut StdRng::seed_from_u64(seed));
        let end = header_size.min(data.len());
        prop_assert_eq!(&out[end..], &data[end..]);
    }

    #[test]
    fn self_inverse_methods_round_trip(
        data in prop::collection::vec(any::<u8>(), 0..1024),
        header_size in 1usize..512,
    ) {
        let mut rng = StdRng::seed_from_u64(0);
        for method in [CorruptionMethod::HeaderFlip, CorruptionMethod::ReverseBytes] {
            let once = apply(method, &data, header_size, &mut rng);
            let twice = apply(method, &once, header_size, &mut rng);
            prop_assert_eq!(&twice, &data);
        }
    }

    #[test]
    fn unflip_undoes_header_flip(
        data in prop::collection::vec(any::<u8>(), 0..1024),
        header_size in 1usize..512,
    ) {
        let flipped = apply(
            CorruptionMethod::HeaderFlip,
            &data,
            header_size,
            &mut StdRng::seed_from_u64(0),
        );
        prop_assert_eq!(unflip_header(&flipped, header_size), data);
    }

    #[test]
    fn bit_shift_doubles_each_header_byte(
        data in prop::collection::vec(any::<u8>(), 1..512),
        header_size in 1usize..512,
    ) {
        let out = apply(
            CorruptionMethod::BitShiftLeft,
            &data,
            header_size,
            &mut StdRng::seed_from_u64(0),
        );
        let end = header_size.min(data.len());
        for (before, after) in data[..end].iter().zip(&out[..end]) {
            prop_assert_eq!(*after as u16, (*before as u16 * 2) % 256);
        }
    }

    #[test]
    fn zero_fill_clears_header(
        data in prop::collection::vec(any::<u8>(), 0..1024),
        header_size in 1usize..512,
    ) {
        let out = apply(
            CorruptionMethod::ZeroFill,
            &data,
            header_size,
            &mut StdRng::seed_from_u64(0),
        );
        let end = header_size.min(data.len());
        prop_assert!(out[..end].iter().all(|&b| b == 0));
    }

    #[test]
    fn repair_keeps_length(
        data in prop::collection::vec(any::<u8>(), 0..512),
        extension in prop::sample::select(vec!["png", "jpg", "zip", "pdf", "gif", "bin"]),
        header_size in 1usize..256,
    ) {
        let catalog = SignatureCatalog::default();
        if let Some(repair) = find_repair(&data, extension, header_size, &catalog) {
            prop_assert_eq!(repair.candidate.len(), data.len());
        }
    }
}
