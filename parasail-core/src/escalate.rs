//! Saturation escalation (spec §4.6).
//!
//! The top-level convenience entry point: try the narrowest lane width
//! first, and only pay for a wider, slower rerun if the narrow kernel
//! reports `SATURATED`. The 64-bit instantiation is authoritative — wide
//! enough that no realistic alignment score overflows it.

use crate::dispatch;
use crate::recurrence::RecurrenceKind;
use crate::result::AlignResult;
use parasail_matrices::Matrix;
use parasail_types::{GapParams, Scheme};

pub fn align<R: RecurrenceKind>(
    s1: &[u8],
    s2: &[u8],
    gap: GapParams,
    matrix: &Matrix,
    scheme: Scheme,
    emit_table: bool,
    emit_rowcol: bool,
    emit_stats: bool,
) -> AlignResult {
    let r8 = dispatch::align::<i8, R>(s1, s2, gap, matrix, scheme, emit_table, emit_rowcol, emit_stats);
    if !r8.is_saturated() {
        return r8;
    }
    let r16 = dispatch::align::<i16, R>(s1, s2, gap, matrix, scheme, emit_table, emit_rowcol, emit_stats);
    if !r16.is_saturated() {
        return r16;
    }
    let r32 = dispatch::align::<i32, R>(s1, s2, gap, matrix, scheme, emit_table, emit_rowcol, emit_stats);
    if !r32.is_saturated() {
        return r32;
    }
    dispatch::align::<i64, R>(s1, s2, gap, matrix, scheme, emit_table, emit_rowcol, emit_stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::Nw;
    use parasail_matrices::blosum62;

    #[test]
    fn long_identical_run_escalates_past_int8() {
        let matrix = blosum62();
        let s1 = matrix.map_sequence(&vec![b'A'; 200]).unwrap();
        let s2 = matrix.map_sequence(&vec![b'A'; 200]).unwrap();
        let gap = GapParams::new(10, 1);
        let result = align::<Nw>(&s1, &s2, gap, &matrix, Scheme::Striped, false, false, false);
        assert!(!result.is_saturated());
        assert_eq!(result.score, 200 * matrix.score(b'A', b'A').unwrap() as i64);
    }
}
