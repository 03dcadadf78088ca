//! Byte transforms
//!
//! Pure functions mapping file content to corrupted content. Every method
//! preserves the total length; all but `OverwriteAll` leave the bytes past
//! `header_size` untouched.

use crate::domain::entities::CorruptionMethod;
use rand::Rng;

/// Applies `method` to `data`, returning the corrupted bytes
///
/// Randomized methods draw from `rng`; the other methods never touch it.
///
/// # Example
///
/// ```
/// use garble::domain::entities::CorruptionMethod;
/// use garble::domain::services::byte_transform;
///
/// let mut rng = rand::thread_rng();
/// let out = byte_transform::apply(CorruptionMethod::HeaderFlip, &[0x00, 0x0F, 0xAA], 2, &mut rng);
/// assert_eq!(out, vec![0xFF, 0xF0, 0xAA]);
/// ```
pub fn apply<R: Rng>(
    method: CorruptionMethod,
    data: &[u8],
    header_size: usize,
    rng: &mut R,
) -> Vec<u8> {
    let mut out = data.to_vec();
    let range = method.affected_range(out.len(), header_size);
    transform_in_place(method, &mut out[range], rng);
    out
}

/// Rewrites `region` in place; `region` is the already-split affected range
pub fn transform_in_place<R: Rng>(
    method: CorruptionMethod,
    region: &mut [u8],
    rng: &mut R,
) {
    match method {
        CorruptionMethod::HeaderFlip => region.iter_mut().for_each(|b| *b = !*b),
        CorruptionMethod::RandomBytes | CorruptionMethod::OverwriteAll => rng.fill(region),
        CorruptionMethod::ZeroFill => region.fill(0),
        CorruptionMethod::ReverseBytes => region.reverse(),
        CorruptionMethod::BitShiftLeft => region.iter_mut().for_each(|b| *b <<= 1),
    }
}

/// Bitwise complement of the first `header_size` bytes, used by recovery to
/// undo a `HeaderFlip`
pub fn unflip_header(data: &[u8], header_size: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    let end = header_size.min(out.len());
    out[..end].iter_mut().for_each(|b| *b = !*b);
    out
}
