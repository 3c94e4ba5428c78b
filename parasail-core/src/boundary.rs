//! Boundary-row/column helpers shared by all three vectorized schemes
//! (spec §3, "Boundaries").

use crate::recurrence::RecurrenceKind;
use parasail_types::Score;

/// `H[0][0..=n]`, the top boundary row.
pub fn top_row<R: RecurrenceKind>(n: usize, open: Score, extend: Score) -> Vec<Score> {
    let mut row = vec![0 as Score; n + 1];
    if !R::FREE_QUERY_START {
        for (j, v) in row.iter_mut().enumerate().skip(1) {
            *v = -open - extend * (j as Score - 1);
        }
    }
    row
}

/// `H[0..=m][0]`, the left boundary column.
pub fn left_col<R: RecurrenceKind>(m: usize, open: Score, extend: Score) -> Vec<Score> {
    let mut col = vec![0 as Score; m + 1];
    if !R::FREE_REF_START {
        for (i, v) in col.iter_mut().enumerate().skip(1) {
            *v = -open - extend * (i as Score - 1);
        }
    }
    col
}
