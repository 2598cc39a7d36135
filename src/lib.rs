#![forbid(unsafe_code)]

//! Paritysort is a stable, in-place merge sort for slices of 64-bit elements
//! such as packed keys, indices or tagged words. Elements are ordered solely by
//! a caller-supplied comparator, which may read an auxiliary context (an
//! indirection table, a secondary key) passed alongside the slice.
//!
//! Each range is split into four quarters which are sorted on their own and
//! then combined. Ranges of at most seven elements go to an odd-even
//! transposition sort. Four sorted quarters that are already in order cost
//! three comparisons, quarters in strictly descending order are put in place
//! by rotation, and everything else is combined by three parity merges, which
//! merge from both ends at once. The divide-and-conquer traversal runs on an
//! explicit work stack, not on the call stack.
//!
//! ```
//! let names = ["pear", "apple", "fig"];
//! let mut idx = [0u64, 1, 2];
//! paritysort::sort_with_context(&mut idx, &names, |a, b, names| {
//!     names[*a as usize].cmp(names[*b as usize])
//! });
//! assert_eq!(idx, [1, 2, 0]);
//! ```
//!
//! A scratch buffer as long as the input and the work stack are allocated for
//! every call. Running out of memory aborts the process.

// Ranges of this many or fewer elements are sorted directly.
const SMALL_SORT: usize = 7;

// Frames reserved for the work stack up front. Its depth grows by one per
// quartering, so this is never exceeded in practice; it still grows (and
// logs a warning) when needed.
const INITIAL_STACK_FRAMES: usize = 128;

// We always need the tracking module internally to provide a fallback dummy
// implementation to prevent adding conditional compilation everywhere.
#[cfg(not(feature = "tracking"))]
mod tracking;
#[cfg(feature = "tracking")]
pub mod tracking;

mod parity_merge;
mod paritysort;
mod rotation;
mod segment;
mod small_sort;
mod util;
mod work_stack;

use core::cmp::Ordering;

use util::*;

mod private {
    pub trait Sealed {}
}

/// A fixed-width 64-bit element that can be sorted by this crate.
///
/// Implemented for `u64`, `i64`, `f64` and, on 64-bit targets, `usize` and
/// `isize`. Larger records are sorted by proxy, e.g. as indices into a table
/// passed as context to [`sort_with_context`].
pub trait Element: Copy + Default + private::Sealed {}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(
            const _: () = assert!(core::mem::size_of::<$t>() == 8);
            impl private::Sealed for $t {}
            impl Element for $t {}
        )*
    };
}

impl_element!(u64, i64, f64);
#[cfg(target_pointer_width = "64")]
impl_element!(usize, isize);

/// See [`slice::sort`].
pub fn sort<E: Element + Ord>(v: &mut [E]) {
    sort_by(v, |a, b| a.cmp(b))
}

/// See [`slice::sort_by_key`].
pub fn sort_by_key<E: Element, K: Ord, F: FnMut(&E) -> K>(v: &mut [E], mut f: F) {
    sort_by(v, |a, b| f(a).cmp(&f(b)))
}

/// See [`slice::sort_by`].
pub fn sort_by<E, F>(v: &mut [E], mut compare: F)
where
    E: Element,
    F: FnMut(&E, &E) -> Ordering,
{
    sort_with_context(v, &(), |a, b, _| compare(a, b))
}

/// Stably sorts `v` with a comparator that also receives `ctx`.
///
/// `compare` must describe a total preorder on the elements and answer the
/// same way every time it is asked about the same pair during this call. If it
/// does not, the resulting order is unspecified, but `v` still ends up holding
/// exactly its original elements. The same holds if `compare` panics.
pub fn sort_with_context<E, C, F>(v: &mut [E], ctx: &C, mut compare: F)
where
    E: Element,
    C: ?Sized,
    F: FnMut(&E, &E, &C) -> Ordering,
{
    let mut is_less = cmp_from_closure(|a: &E, b: &E| {
        tracking::register_cmp(a, b);
        compare(a, b, ctx) == Ordering::Less
    });

    let n = v.len();
    if n <= SMALL_SORT {
        return paritysort::paritysort(v, &mut [], &mut is_less);
    }

    let mut scratch = alloc_buffer::<E>(n);
    paritysort::paritysort(v, &mut scratch, &mut is_less)
}

/// Like [`sort_by`], except this function does not allocate a scratch buffer
/// and uses the passed one instead.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `v`.
pub fn sort_with_buffer_by<E, F>(v: &mut [E], buffer: &mut [E], mut compare: F)
where
    E: Element,
    F: FnMut(&E, &E) -> Ordering,
{
    sort_with_buffer_with_context(v, buffer, &(), |a, b, _| compare(a, b))
}

/// Like [`sort_with_context`], except this function does not allocate a
/// scratch buffer and uses the passed one instead.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `v`.
pub fn sort_with_buffer_with_context<E, C, F>(
    v: &mut [E],
    buffer: &mut [E],
    ctx: &C,
    mut compare: F,
) where
    E: Element,
    C: ?Sized,
    F: FnMut(&E, &E, &C) -> Ordering,
{
    assert!(
        buffer.len() >= v.len(),
        "scratch buffer holds {} elements, sorting {} needs as many",
        buffer.len(),
        v.len()
    );

    let mut is_less = cmp_from_closure(|a: &E, b: &E| {
        tracking::register_cmp(a, b);
        compare(a, b, ctx) == Ordering::Less
    });

    let n = v.len();
    paritysort::paritysort(v, &mut buffer[..n], &mut is_less)
}
