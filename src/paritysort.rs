use crate::parity_merge::parity_merge;
use crate::rotation::rotate_with_scratch;
use crate::segment::Segment;
use crate::small_sort::tiny_sort;
use crate::tracking::{self, Operation};
use crate::util::*;
use crate::work_stack::{Frame, Phase, WorkStack};
use crate::{INITIAL_STACK_FRAMES, SMALL_SORT};

/// Name under which work stack growth is reported.
const STACK_NAME: &str = "paritysort";

/// Stably sorts `v`, using `scratch` (at least as long as `v` unless `v` has
/// at most `SMALL_SORT` elements) as merge space.
pub fn paritysort<T: Copy, F: Cmp<T>>(v: &mut [T], scratch: &mut [T], is_less: &mut F) {
    tracking::register_buffer("input", v);
    tracking::register_buffer("scratch", scratch);

    if v.len() <= SMALL_SORT {
        tracking::register_op(Operation::TinySort {
            begin: 0,
            len: v.len(),
        });
        tiny_sort(v, is_less);
    } else {
        let stack = WorkStack::with_capacity(STACK_NAME, INITIAL_STACK_FRAMES);
        drive(v, scratch, is_less, stack);
    }

    tracking::deregister_buffer("input");
    tracking::deregister_buffer("scratch");
}

/// The quad-partitioning merge sort, with recursion flattened onto `stack`.
///
/// Sorting a range pushes itself back with the next phase, followed by the
/// quarter that has to be sorted before that phase can run. The child is on
/// top, so it runs first and the parent resumes once the child and all of its
/// descendants are done.
fn drive<T: Copy, F: Cmp<T>>(
    v: &mut [T],
    scratch: &mut [T],
    is_less: &mut F,
    mut stack: WorkStack,
) {
    assert_abort(scratch.len() >= v.len());

    stack.push(Frame::entry(0, v.len()));
    while let Some(frame) = stack.pop() {
        let Frame {
            begin,
            len,
            seg,
            phase,
        } = frame;

        match phase {
            Phase::Entry => {
                if len <= SMALL_SORT {
                    tracking::register_op(Operation::TinySort { begin, len });
                    tiny_sort(&mut v[begin..begin + len], is_less);
                    continue;
                }

                let seg = Segment::new(len);
                let resume = Frame {
                    seg,
                    phase: Phase::AfterQ1,
                    ..frame
                };
                stack.push_pair(resume, Frame::entry(begin, seg.q1));
            }
            Phase::AfterQ1 => {
                let resume = Frame {
                    phase: Phase::AfterQ2,
                    ..frame
                };
                stack.push_pair(resume, Frame::entry(begin + seg.q2_begin(), seg.q2));
            }
            Phase::AfterQ2 => {
                let resume = Frame {
                    phase: Phase::AfterQ3,
                    ..frame
                };
                stack.push_pair(resume, Frame::entry(begin + seg.q3_begin(), seg.q3));
            }
            Phase::AfterQ3 => {
                let resume = Frame {
                    phase: Phase::AfterQ4,
                    ..frame
                };
                stack.push_pair(resume, Frame::entry(begin + seg.q4_begin(), seg.q4));
            }
            Phase::AfterQ4 => {
                merge_quarters(
                    &mut v[begin..begin + len],
                    &mut scratch[..len],
                    seg,
                    begin,
                    is_less,
                );
            }
        }
    }
}

/// Combines four adjacent sorted quarters of `v` into one sorted run.
fn merge_quarters<T: Copy, F: Cmp<T>>(
    v: &mut [T],
    scratch: &mut [T],
    seg: Segment,
    begin: usize,
    is_less: &mut F,
) {
    let len = v.len();
    let q2 = seg.q2_begin();
    let q3 = seg.q3_begin();
    let q4 = seg.q4_begin();

    // Every junction already in order.
    if !is_less(&v[q2], &v[q2 - 1])
        && !is_less(&v[q3], &v[q3 - 1])
        && !is_less(&v[q4], &v[q4 - 1])
    {
        tracking::register_op(Operation::AlreadySorted { begin, len });
        return;
    }

    // Each quarter lies strictly above the next one, so reversing the order
    // of the quarters sorts the range. Strictness keeps this stable.
    if is_less(&v[q3 - 1], &v[0])
        && is_less(&v[q4 - 1], &v[q2])
        && is_less(&v[len - 1], &v[q3])
    {
        tracking::register_op(Operation::Rotation { begin, len });
        rotate_with_scratch(v, scratch, seg.q1);
        rotate_with_scratch(&mut v[..seg.q2 + seg.rh], scratch, seg.q2);
        rotate_with_scratch(&mut v[..seg.rh], scratch, seg.q3);
        return;
    }

    let (scratch_left, scratch_right) = scratch.split_at_mut(seg.lh);
    parity_merge(&v[..seg.lh], scratch_left, seg.q1, is_less);
    parity_merge(&v[seg.lh..], scratch_right, seg.q3, is_less);
    parity_merge(scratch, v, seg.lh, is_less);
}
