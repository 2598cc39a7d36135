/// The quad partition of a range: two halves, each split into two quarters.
///
/// ```text
/// [ q1 | q2 ][ q3 | q4 ]
/// [   lh    ][   rh    ]
/// ```
///
/// The right half (and within each half the second quarter) takes the odd
/// element, so `q1 <= q2 <= q1 + 1`, `q3 <= q4 <= q3 + 1` and
/// `lh <= rh <= lh + 1`. The parity merge relies on this.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    pub lh: usize,
    pub q1: usize,
    pub q2: usize,
    pub rh: usize,
    pub q3: usize,
    pub q4: usize,
}

impl Segment {
    #[inline]
    pub const fn new(len: usize) -> Self {
        let lh = len / 2;
        let rh = len - lh;
        Self {
            lh,
            q1: lh / 2,
            q2: lh - lh / 2,
            rh,
            q3: rh / 2,
            q4: rh - rh / 2,
        }
    }

    /// Offset of the second quarter.
    #[inline]
    pub const fn q2_begin(&self) -> usize {
        self.q1
    }

    /// Offset of the third quarter, which is also the start of the right half.
    #[inline]
    pub const fn q3_begin(&self) -> usize {
        self.lh
    }

    /// Offset of the fourth quarter.
    #[inline]
    pub const fn q4_begin(&self) -> usize {
        self.lh + self.q3
    }
}
