use crate::util::*;

/// Swaps `v[i]` and `v[i + 1]` if the former is greater than the latter.
/// Returns whether a swap happened. Equal elements stay where they are.
#[inline(always)]
pub fn compare_exchange<T: Copy, F: Cmp<T>>(v: &mut [T], i: usize, is_less: &mut F) -> bool {
    let first_greater = is_less(&v[i + 1], &v[i]);

    (v[i], v[i + 1]) = if first_greater {
        (v[i + 1], v[i])
    } else {
        (v[i], v[i + 1])
    };

    first_greater
}

/// Stably sorts `v`, which is intended to hold at most `SMALL_SORT` elements.
/// Any length is sorted correctly, it just stops being competitive quickly.
pub fn tiny_sort<T: Copy, F: Cmp<T>>(v: &mut [T], is_less: &mut F) {
    match v.len() {
        0 | 1 => {}
        2 => {
            compare_exchange(v, 0, is_less);
        }
        3 => {
            compare_exchange(v, 0, is_less);
            if compare_exchange(v, 1, is_less) {
                compare_exchange(v, 0, is_less);
            }
        }
        _ => odd_even_sort(v, is_less),
    }
}

/// Odd-even transposition sort. Each sweep compare-exchanges every other
/// adjacent pair, walking down from the top, and consecutive sweeps alternate
/// which pairs they touch.
///
/// Once a sweep swaps nothing, the pairs of the other parity were left in order
/// by the sweep before it, so every adjacent pair is ordered and we are done.
/// The first sweep has no predecessor and never terminates the sort. Otherwise
/// `n` sweeps always suffice.
fn odd_even_sort<T: Copy, F: Cmp<T>>(v: &mut [T], is_less: &mut F) {
    let n = v.len();
    assert_abort(n >= 4);

    let tops = [n - 3, n - 2];
    for sweep in 0..n {
        let mut swapped = false;
        let mut i = tops[sweep % 2];
        loop {
            swapped |= compare_exchange(v, i, is_less);
            match i.checked_sub(2) {
                Some(next) => i = next,
                None => break,
            }
        }

        if sweep > 0 && !swapped {
            return;
        }
    }
}
