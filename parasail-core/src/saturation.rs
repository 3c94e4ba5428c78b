//! Running min/max tracker used to detect lane-width overflow mid-kernel
//! (spec §4.4, "Saturation detection").
//!
//! Parallels the real library's convention of reserving the lane type's
//! extreme values as sentinels: once an observed score gets within one
//! gap-open of either bound, a further addition could wrap, so the kernel
//! that owns this tracker reports `SATURATED` instead of a wrong answer.

use parasail_types::{LaneElement, Score};
use std::marker::PhantomData;

pub struct Tracker<T: LaneElement> {
    min_seen: Score,
    max_seen: Score,
    _marker: PhantomData<T>,
}

impl<T: LaneElement> Tracker<T> {
    pub fn new() -> Self {
        Tracker { min_seen: Score::MAX, max_seen: Score::MIN, _marker: PhantomData }
    }

    #[inline]
    pub fn observe(&mut self, v: Score) {
        if v < self.min_seen {
            self.min_seen = v;
        }
        if v > self.max_seen {
            self.max_seen = v;
        }
    }

    /// `open` is the gap-open penalty, `max_sub` the substitution matrix's
    /// largest entry — the two quantities that could still be added to the
    /// current extreme before the next column without our noticing.
    pub fn saturated(&self, open: Score, max_sub: Score) -> bool {
        self.max_seen >= T::MAX.to_score() - max_sub || self.min_seen <= T::MIN.to_score() + open
    }
}

impl<T: LaneElement> Default for Tracker<T> {
    fn default() -> Self {
        Self::new()
    }
}
