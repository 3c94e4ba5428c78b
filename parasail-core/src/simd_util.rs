//! Small portable-SIMD helpers shared by the striped and scan kernels.
//!
//! Mirrors the style of `pa-bitpacking/src/simd.rs`'s `rotate_left`: real
//! hardware would use a single shuffle/permute instruction here; `std::simd`
//! doesn't expose a stable "insert at lane 0, shift the rest" primitive, so
//! we go through `to_array`/`from_array` and trust the optimizer to fold it
//! into the equivalent shuffle for `LaneCount`s that are actual hardware
//! widths.

use std::simd::{LaneCount, Simd, SupportedLaneCount};

/// Shift every lane one position towards the high end, discarding the
/// previous highest lane and inserting `first` at lane 0.
#[inline(always)]
pub fn shift_insert<T, const L: usize>(v: Simd<T, L>, first: T) -> Simd<T, L>
where
    T: std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    let mut arr = v.to_array();
    for k in (1..L).rev() {
        arr[k] = arr[k - 1];
    }
    arr[0] = first;
    Simd::from_array(arr)
}

/// The lane that was shifted out of `v` by a `shift_insert`, i.e. the
/// highest lane's old value. Used by the diagonal kernel's anti-diagonal
/// advance, which needs both the shifted vector and the dropped lane.
#[inline(always)]
pub fn highest_lane<T, const L: usize>(v: Simd<T, L>) -> T
where
    T: std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    v.to_array()[L - 1]
}
