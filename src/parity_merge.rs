/*
    A parity merge combines two adjacent sorted runs of (nearly) equal length
    from src into dst with two independent cursors:

         left_begin          right_begin
            |                   |
            [    left     ]     [     right      ]
                          |                      |
                      left_end               right_end

         dst_begin
            |
            [               dst                  ]
                                                 |
                                              dst_end

    A merge at the beginning compares the elements at left_begin and
    right_begin, copies the smaller one to dst_begin (ties go to left) and
    advances the pointer it picked along with dst_begin.

    A merge at the end compares the elements at left_end - 1 and right_end - 1,
    copies the larger one to dst_end - 1 (ties go to right) and retreats the
    pointer it picked along with dst_end.

    Neither operation depends on the outcome of the other, so interleaving them
    gives the CPU two independent dependency chains to work on.

    With left_len == right_len == k we do k merges at each end. With
    right_len == k + 1 the beginning does one extra merge. The number of
    operations on each side only depends on the lengths, never on the
    comparison results, so all reads stay within src and all writes within dst
    even for a nonsensical comparison operator. There is a single spot where a
    cursor may run off its own run: the last merge at the beginning in the
    k + 1 case, after the beginning took all k left elements. That merge is
    guarded.

    For a valid comparison operator both sides meet exactly, that is
    left_begin == left_end and right_begin == right_end afterwards. When they
    did not meet, the output is not a permutation of the input and we copy src
    over instead.
*/

use crate::tracking::{self, Operation};
use crate::util::*;

pub struct ParityMergeState<'s, 'd, T: Copy> {
    src: &'s [T],
    dst: &'d mut [T],

    left_begin: usize,
    left_end: usize,
    right_begin: usize,
    right_end: usize,
    dst_begin: usize,
    dst_end: usize,
}

impl<'s, 'd, T: Copy> ParityMergeState<'s, 'd, T> {
    /// Prepares merging `src[..left_len]` with `src[left_len..]` into `dst`.
    ///
    /// Aborts unless `dst` has the length of `src` and the right run is as
    /// long as the left run or one element longer.
    pub fn new(src: &'s [T], left_len: usize, dst: &'d mut [T]) -> Self {
        let len = src.len();
        assert_abort(dst.len() == len);
        assert_abort(left_len >= 1 && 2 * left_len <= len && len <= 2 * left_len + 1);

        Self {
            src,
            dst,
            left_begin: 0,
            left_end: left_len,
            right_begin: left_len,
            right_end: len,
            dst_begin: 0,
            dst_end: len,
        }
    }

    /// Merges one element from left, right into the destination, reading/writing
    /// at the begin of all the slices.
    #[inline(always)]
    pub fn merge_one_at_begin<F: Cmp<T>>(&mut self, is_less: &mut F) {
        let right_less = is_less(&self.src[self.right_begin], &self.src[self.left_begin]);
        let src = if right_less {
            self.right_begin
        } else {
            self.left_begin
        };
        self.dst[self.dst_begin] = self.src[src];
        self.dst_begin += 1;
        self.left_begin += (!right_less) as usize;
        self.right_begin += right_less as usize;
    }

    /// Exactly the same as merge_one_at_begin, but takes from right if left is
    /// already empty.
    #[inline]
    pub fn merge_one_at_begin_imbalance_guarded<F: Cmp<T>>(&mut self, is_less: &mut F) {
        if self.left_begin >= self.left_end {
            self.dst[self.dst_begin] = self.src[self.right_begin];
            self.dst_begin += 1;
            self.right_begin += 1;
        } else {
            self.merge_one_at_begin(is_less);
        }
    }

    /// Merges one element from left, right into the destination, reading/writing
    /// at the end of all the slices.
    #[inline(always)]
    pub fn merge_one_at_end<F: Cmp<T>>(&mut self, is_less: &mut F) {
        let left_scan = self.left_end - 1;
        let right_scan = self.right_end - 1;
        let right_less = is_less(&self.src[right_scan], &self.src[left_scan]);
        let src = if right_less { left_scan } else { right_scan };
        self.dst_end -= 1;
        self.dst[self.dst_end] = self.src[src];
        self.left_end -= right_less as usize;
        self.right_end -= (!right_less) as usize;
    }

    /// Both cursors met exactly, only an invalid comparison operator can
    /// violate this.
    #[inline(always)]
    pub fn merge_successful(&self) -> bool {
        self.left_begin == self.left_end && self.right_begin == self.right_end
    }

    /// Runs the full merge.
    pub fn merge<F: Cmp<T>>(mut self, is_less: &mut F) {
        let left_len = self.left_end;
        let right_len = self.right_end - self.right_begin;

        if left_len < right_len {
            self.merge_one_at_begin(is_less);
        }

        for _ in 1..left_len {
            self.merge_one_at_begin(is_less);
            self.merge_one_at_end(is_less);
        }

        self.merge_one_at_begin_imbalance_guarded(is_less);
        self.merge_one_at_end(is_less);

        if !self.merge_successful() {
            // Bad comparison operator, just copy over input.
            self.dst.copy_from_slice(self.src);
        }

        // Everything is accounted for, nothing left for the drop handler.
        self.left_begin = self.left_end;
        self.right_begin = self.right_end;
        self.dst_begin = self.dst_end;
    }
}

impl<'s, 'd, T: Copy> Drop for ParityMergeState<'s, 'd, T> {
    /// Only has work to do if is_less panicked. The elements not merged yet are
    /// copied into the gap in dst so that dst holds every element of src.
    #[cold]
    fn drop(&mut self) {
        let (Some(left_len), Some(right_len)) = (
            self.left_end.checked_sub(self.left_begin),
            self.right_end.checked_sub(self.right_begin),
        ) else {
            // The cursors crossed before the panic, dst holds duplicates.
            self.dst.copy_from_slice(self.src);
            return;
        };
        assert_abort(left_len + right_len == self.dst_end - self.dst_begin);

        let mid = self.dst_begin + left_len;
        let (left, right) = (
            &self.src[self.left_begin..self.left_end],
            &self.src[self.right_begin..self.right_end],
        );
        self.dst[self.dst_begin..mid].copy_from_slice(left);
        self.dst[mid..self.dst_end].copy_from_slice(right);
    }
}

/// Merges the sorted runs `src[..left_len]` and `src[left_len..]` into `dst`.
/// The merge is stable. The right run must be as long as the left one or one
/// element longer.
pub fn parity_merge<T: Copy, F: Cmp<T>>(
    src: &[T],
    dst: &mut [T],
    left_len: usize,
    is_less: &mut F,
) {
    tracking::register_op(Operation::ParityMerge {
        left: left_len,
        right: src.len() - left_len,
    });

    if left_len == 0 {
        dst.copy_from_slice(src);
        return;
    }

    ParityMergeState::new(src, left_len, dst).merge(is_less);
}
