//! Compile-time recurrence selection (spec §9: "generate kernels from a
//! single generic body parameterized by `(recurrence, scheme, ...)`").
//!
//! Each of NW/SG/SW is a zero-sized marker type implementing
//! `RecurrenceKind`; kernels are generic over `R: RecurrenceKind` so the
//! boundary-condition and zero-clamp differences are resolved at
//! monomorphization time rather than by a runtime branch in the hot loop.

use parasail_types::Recurrence;

pub trait RecurrenceKind: Copy + 'static {
    /// SW: clamp `H` to zero every cell and track a running max.
    const LOCAL: bool;
    /// SG: the top row (`H[0, j]`) starts at zero instead of `-open - extend*(j-1)`.
    const FREE_QUERY_START: bool;
    /// SG: the left column (`H[i, 0]`) starts at zero instead of `-open - extend*(i-1)`.
    const FREE_REF_START: bool;
    /// SG: the final score is the max of the last row/column rather than
    /// strictly the bottom-right corner.
    const FREE_EITHER_END: bool;

    const TAG: Recurrence;
}

#[derive(Debug, Clone, Copy)]
pub struct Nw;
#[derive(Debug, Clone, Copy)]
pub struct Sg;
#[derive(Debug, Clone, Copy)]
pub struct Sw;

impl RecurrenceKind for Nw {
    const LOCAL: bool = false;
    const FREE_QUERY_START: bool = false;
    const FREE_REF_START: bool = false;
    const FREE_EITHER_END: bool = false;
    const TAG: Recurrence = Recurrence::Nw;
}

impl RecurrenceKind for Sg {
    // This crate's SG is fully end-gap-free on both sequences (the common
    // "glocal"/overlap convention): both start boundaries are zero and the
    // final score is read from the best of the last row or column (spec
    // §4.4.1 step 5, "SG: max over the last column and over the last row").
    const LOCAL: bool = false;
    const FREE_QUERY_START: bool = true;
    const FREE_REF_START: bool = true;
    const FREE_EITHER_END: bool = true;
    const TAG: Recurrence = Recurrence::Sg;
}

impl RecurrenceKind for Sw {
    const LOCAL: bool = true;
    const FREE_QUERY_START: bool = true;
    const FREE_REF_START: bool = true;
    const FREE_EITHER_END: bool = true;
    const TAG: Recurrence = Recurrence::Sw;
}
