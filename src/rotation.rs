use crate::util::*;

/// Rotates `v` left by `mid` elements, so `v[mid..]` ends up in front of
/// `v[..mid]`. The first block is parked in `scratch` during the move.
#[inline]
pub fn rotate_with_scratch<T: Copy>(v: &mut [T], scratch: &mut [T], mid: usize) {
    assert_abort(mid <= v.len() && mid <= scratch.len());

    let len = v.len();
    scratch[..mid].copy_from_slice(&v[..mid]);
    v.copy_within(mid.., 0);
    v[len - mid..].copy_from_slice(&scratch[..mid]);
}
