use crate::segment::Segment;
use crate::tracking::{self, Operation};
use crate::util::*;

/// Where a suspended sort of a range picks up again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing done yet.
    Entry,
    /// The first quarter is sorted.
    AfterQ1,
    /// The first two quarters are sorted.
    AfterQ2,
    /// The first three quarters are sorted.
    AfterQ3,
    /// All four quarters are sorted, only the merge is left.
    AfterQ4,
}

/// A suspended sort of `v[begin..begin + len]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub begin: usize,
    pub len: usize,
    pub seg: Segment,
    pub phase: Phase,
}

impl Frame {
    pub fn entry(begin: usize, len: usize) -> Self {
        Self {
            begin,
            len,
            seg: Segment::default(),
            phase: Phase::Entry,
        }
    }
}

/// The explicit stack of pending frames. Capacity is managed by hand: it
/// doubles whenever fewer than two free slots would remain, and every growth
/// is logged.
pub struct WorkStack {
    name: &'static str,
    frames: Vec<Frame>,
    capacity: usize,
}

impl WorkStack {
    pub fn with_capacity(name: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(2);
        let mut frames = Vec::new();
        frames.try_reserve_exact(capacity).unwrap_abort();
        Self {
            name,
            frames,
            capacity,
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Suspends `resume` and schedules `child` to run before it.
    #[inline]
    pub fn push_pair(&mut self, resume: Frame, child: Frame) {
        self.reserve_pair();
        self.frames.push(resume);
        self.frames.push(child);
    }

    #[inline]
    pub fn push(&mut self, frame: Frame) {
        self.reserve_pair();
        self.frames.push(frame);
    }

    #[inline]
    fn reserve_pair(&mut self) {
        if self.frames.len() + 2 >= self.capacity {
            self.grow();
        }
    }

    /// Doubles the capacity and reports it at warn level as
    /// `resizing <name> stack for <frames> frames`. The level tag in front of
    /// the message is left to the host's logger.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let new_capacity = self.capacity.checked_mul(2).unwrap_abort();
        self.frames
            .try_reserve_exact(new_capacity - self.frames.len())
            .unwrap_abort();
        self.capacity = new_capacity;

        log::warn!("resizing {} stack for {} frames", self.name, new_capacity);
        tracking::register_op(Operation::StackGrowth {
            frames: new_capacity,
        });
    }
}
