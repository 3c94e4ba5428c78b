//! Anti-diagonal kernel (spec §4.4.3).
//!
//! Cells are grouped by `d = i + j` instead of by column. Within a
//! diagonal, lane `k` is cell `(row_lo + k, d - row_lo - k)` — advancing
//! `d` by one slides every lane's window down-and-right by one cell, which
//! is why this scheme never needs the cross-segment shift tricks the
//! striped kernel does: a cell's diagonal/up/left predecessors all live at
//! a *fixed* row offset on the previous one or two diagonals, addressed by
//! plain indexing into the rolling `h_dm1`/`h_dm2`/`e_dm1`/`f_dm1` arrays.

use crate::boundary;
use crate::recurrence::RecurrenceKind;
use crate::result::{AlignResult, Stats};
use crate::{flags, saturation};
use parasail_matrices::Matrix;
use parasail_types::{GapParams, LaneElement, Score};
use std::simd::{LaneCount, Simd, SupportedLaneCount};

const NEG_INF: Score = Score::MIN / 4;

#[derive(Clone, Copy, PartialEq, Eq)]
enum From {
    Diag,
    Del,
    Ins,
    Zero,
}

pub struct Options {
    pub emit_table: bool,
    pub emit_rowcol: bool,
    pub emit_stats: bool,
}

/// Row range `[lo, hi]` (both inclusive, 1-indexed) of cells that lie on
/// diagonal `d` within an `m x n` grid.
fn row_range(d: usize, m: usize, n: usize) -> Option<(usize, usize)> {
    let lo = d.saturating_sub(n).max(1);
    let hi = (d - 1).min(m);
    (lo <= hi).then_some((lo, hi))
}

pub fn align<T, const L: usize, R: RecurrenceKind>(
    s1: &[u8],
    s2: &[u8],
    gap: GapParams,
    matrix: &Matrix,
    opts: &Options,
) -> AlignResult
where
    T: LaneElement + std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    let m = s1.len();
    let n = s2.len();
    let open = gap.open as Score;
    let extend = gap.extend as Score;

    let h_top = boundary::top_row::<R>(n, open, extend);
    let h_left = boundary::left_col::<R>(m, open, extend);

    // Rolling diagonals, indexed by absolute row `i`; only ever read at rows
    // that are strictly interior to both the current and previous
    // diagonal (row/column-0 predecessors are resolved straight from
    // `h_left`/`h_top` below instead of being pre-seeded into these).
    let mut h_dm2 = vec![0 as Score; m + 1];
    let mut h_dm1 = vec![0 as Score; m + 1];
    let mut e_dm1 = vec![NEG_INF; m + 1];
    let mut f_dm1 = vec![NEG_INF; m + 1];
    let mut stats_dm2 = vec![Stats::default(); m + 1];
    let mut stats_dm1 = vec![Stats::default(); m + 1];

    let mut tracker = saturation::Tracker::<T>::new();
    let mut global_max: Score = Score::MIN;
    let mut global_max_pos = (0usize, 0usize);
    let mut best_last_col: Score = Score::MIN;
    let mut best_last_col_pos = 0usize;
    let mut best_last_row: Score = Score::MIN;
    let mut best_last_row_pos = 0usize;
    let mut global_stats = Stats::default();
    let mut best_last_col_stats = Stats::default();
    let mut best_last_row_stats = Stats::default();
    let mut nw_stats = Stats::default();

    let mut score_table = opts.emit_table.then(|| vec![0 as Score; m * n]);
    let mut stats_table = (opts.emit_table && opts.emit_stats)
        .then(|| vec![Stats::default(); m * n]);
    let mut score_row = opts.emit_rowcol.then(|| vec![0 as Score; n]);
    let mut score_col = opts.emit_rowcol.then(|| vec![0 as Score; m]);
    let mut stats_row = (opts.emit_rowcol && opts.emit_stats).then(|| vec![Stats::default(); n]);
    let mut stats_col = (opts.emit_rowcol && opts.emit_stats).then(|| vec![Stats::default(); m]);

    for d in 2..=(m + n) {
        let Some((lo, hi)) = row_range(d, m, n) else { continue };
        let mut h_cur = vec![0 as Score; m + 1];
        let mut e_cur = vec![NEG_INF; m + 1];
        let mut f_cur = vec![NEG_INF; m + 1];
        let mut stats_cur = vec![Stats::default(); m + 1];

        let mut row = lo;
        while row <= hi {
            let chunk_hi = (row + L - 1).min(hi);
            let width = chunk_hi - row + 1;

            let mut diag_val = [0 as Score; 64];
            let mut e_val = [NEG_INF; 64];
            let mut f_val = [NEG_INF; 64];
            let mut sub_arr = [0 as Score; 64];
            for k in 0..width {
                let i = row + k;
                let j = d - i;

                // H[i-1][j-1]: row/column-0 cases read the boundary arrays
                // directly, otherwise it's an interior cell on diagonal d-2.
                let diag_pred = if i == 1 && j == 1 {
                    0
                } else if i == 1 {
                    h_top[j - 1]
                } else if j == 1 {
                    h_left[i - 1]
                } else {
                    h_dm2[i - 1]
                };

                // H[i][j-1] / E[i][j-1]: column-0 has no incoming E.
                let (e_pred_h, e_pred_e) = if j == 1 { (h_left[i], NEG_INF) } else { (h_dm1[i], e_dm1[i]) };

                // H[i-1][j] / F[i-1][j]: row-0 has no incoming F.
                let (f_pred_h, f_pred_f) = if i == 1 { (h_top[j], NEG_INF) } else { (h_dm1[i - 1], f_dm1[i - 1]) };

                sub_arr[k] = matrix.score_idx(s1[i - 1] as usize, s2[j - 1] as usize) as Score;
                diag_val[k] = diag_pred + sub_arr[k];
                e_val[k] = (e_pred_e - extend).max(e_pred_h - open);
                f_val[k] = (f_pred_f - extend).max(f_pred_h - open);
            }

            // Elementwise 3-way max, genuinely lane-parallel: no cell in this
            // chunk depends on another cell in the same chunk.
            let diag_vec = load_chunk::<T, L>(&diag_val, width);
            let e_vec = load_chunk::<T, L>(&e_val, width);
            let f_vec = load_chunk::<T, L>(&f_val, width);
            let mut h_vec = diag_vec.simd_max(e_vec).simd_max(f_vec);
            if R::LOCAL {
                h_vec = h_vec.simd_max(Simd::splat(T::ZERO));
            }
            let h_arr = h_vec.to_array();

            for k in 0..width {
                let i = row + k;
                let j = d - i;

                let h_val_raw = h_arr[k].to_score();
                let mut h_val = h_val_raw;
                let mut from = if h_val_raw == diag_val[k] {
                    From::Diag
                } else if h_val_raw == e_val[k] {
                    From::Del
                } else if h_val_raw == f_val[k] {
                    From::Ins
                } else {
                    From::Zero
                };
                if R::LOCAL && h_val_raw == 0 && diag_val[k] != 0 && e_val[k] != 0 && f_val[k] != 0 {
                    from = From::Zero;
                }

                let mut st = Stats::default();
                if opts.emit_stats {
                    st = match from {
                        From::Diag => {
                            if i == 1 || j == 1 {
                                Stats::default()
                            } else {
                                stats_dm2[i - 1]
                            }
                        }
                        From::Del => {
                            if j == 1 {
                                Stats::default()
                            } else {
                                stats_dm1[i]
                            }
                        }
                        From::Ins => {
                            if i == 1 {
                                Stats::default()
                            } else {
                                stats_dm1[i - 1]
                            }
                        }
                        From::Zero => Stats::default(),
                    };
                    if from != From::Zero {
                        st.length += 1;
                    }
                    if from == From::Diag {
                        if s1[i - 1] == s2[j - 1] {
                            st.matches += 1;
                        }
                        if sub_arr[k] > 0 {
                            st.similar += 1;
                        }
                    }
                    stats_cur[i] = st;
                }

                h_cur[i] = h_val;
                e_cur[i] = e_val[k];
                f_cur[i] = f_val[k];

                tracker.observe(h_val);

                if R::LOCAL && h_val > global_max {
                    global_max = h_val;
                    global_max_pos = (i, j);
                    global_stats = st;
                }
                if R::FREE_EITHER_END && j == n && h_val > best_last_col {
                    best_last_col = h_val;
                    best_last_col_pos = i;
                    best_last_col_stats = st;
                }
                if R::FREE_EITHER_END && i == m && h_val > best_last_row {
                    best_last_row = h_val;
                    best_last_row_pos = j;
                    best_last_row_stats = st;
                }
                if !R::LOCAL && !R::FREE_EITHER_END && i == m && j == n {
                    nw_stats = st;
                }
                if let Some(table) = score_table.as_mut() {
                    table[(i - 1) * n + (j - 1)] = h_val;
                }
                if let Some(st_table) = stats_table.as_mut() {
                    st_table[(i - 1) * n + (j - 1)] = stats_cur[i];
                }
                if let Some(col) = score_col.as_mut() {
                    if j == n {
                        col[i - 1] = h_val;
                    }
                }
                if let Some(row) = score_row.as_mut() {
                    if i == m {
                        row[j - 1] = h_val;
                    }
                }
                if let Some(col) = stats_col.as_mut() {
                    if j == n {
                        col[i - 1] = stats_cur[i];
                    }
                }
                if let Some(row) = stats_row.as_mut() {
                    if i == m {
                        row[j - 1] = stats_cur[i];
                    }
                }
            }

            row = chunk_hi + 1;
        }

        h_dm2 = h_dm1;
        h_dm1 = h_cur;
        e_dm1 = e_cur;
        f_dm1 = f_cur;
        if opts.emit_stats {
            stats_dm2 = stats_dm1;
            stats_dm1 = stats_cur;
        }
    }

    let base_flag = flags::recurrence_bit(R::TAG) | flags::DIAG | flags::lanes_bit(L) | flags::bits_flag(T::BITS);
    if tracker.saturated(open, matrix.max as Score) {
        return AlignResult::saturated(base_flag);
    }

    let (score, end_query, end_ref, stats) = if R::LOCAL {
        (global_max, global_max_pos.0 - 1, global_max_pos.1 - 1, global_stats)
    } else if R::FREE_EITHER_END {
        if best_last_col >= best_last_row {
            (best_last_col, best_last_col_pos - 1, n - 1, best_last_col_stats)
        } else {
            (best_last_row, m - 1, best_last_row_pos - 1, best_last_row_stats)
        }
    } else {
        (h_dm1[m], m - 1, n - 1, nw_stats)
    };

    AlignResult {
        score,
        end_query,
        end_ref,
        score_table,
        stats_table,
        score_row,
        score_col,
        stats_row,
        stats_col,
        stats: opts.emit_stats.then_some(stats),
        flag: base_flag
            | if opts.emit_table { flags::TABLE } else { 0 }
            | if opts.emit_rowcol { flags::ROWCOL } else { 0 }
            | if opts.emit_stats { flags::STATS } else { 0 },
    }
}

#[inline]
fn load_chunk<T, const L: usize>(arr: &[Score; 64], width: usize) -> Simd<T, L>
where
    T: LaneElement + std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    let data: [T; L] = std::array::from_fn(|k| {
        if k < width {
            T::from_score_saturating(arr[k])
        } else {
            T::ZERO
        }
    });
    Simd::from_array(data)
}
