//! Striped (Farrar) kernel (spec §4.4.1).
//!
//! Query laid out in interleaved segments (`parasail_profile::Profile`);
//! inner loop walks segments for a fixed reference column, followed by a
//! lazy-F correction pass. The correction pass here is expressed as a
//! sequential sweep over true query row order rather than a cross-lane
//! shuffle loop (see `simd_util` module docs) — same externally observable
//! result, traded hardware-instruction fidelity for a portable
//! implementation we can reason about without a disassembler.

use crate::boundary;
use crate::recurrence::RecurrenceKind;
use crate::result::{AlignResult, Stats};
use crate::{flags, saturation};
use parasail_matrices::Matrix;
use parasail_profile::Profile;
use parasail_types::{GapParams, LaneElement, Score};
use std::simd::{LaneCount, Simd, SupportedLaneCount};

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

/// `s1`/`s2` must already be mapped through `matrix`'s symbol mapper.
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
    let seg_len = m.div_ceil(L).max(1);

    let profile = Profile::<T, L>::build(s1, matrix);
    let top = boundary::top_row::<R>(n, open, extend);
    let left = boundary::left_col::<R>(m, open, extend);

    // Striped position -> logical row (1-indexed into H), and the inverse.
    let row_of = |seg: usize, lane: usize| -> usize { lane * seg_len + seg + 1 };

    let mut h_load: Vec<Simd<T, L>> = (0..seg_len)
        .map(|seg| {
            let arr: [T; L] = std::array::from_fn(|lane| {
                let i = row_of(seg, lane);
                if i <= m {
                    T::from_score_saturating(left[i])
                } else {
                    T::ZERO
                }
            });
            Simd::from_array(arr)
        })
        .collect();
    let mut e_load: Vec<Simd<T, L>> = vec![Simd::splat(T::MIN); seg_len];

    let mut stats_load = vec![Stats::default(); seg_len * L];

    let mut tracker = saturation::Tracker::<T>::new();
    let mut global_max: Score = Score::MIN;
    let mut global_max_pos = (0usize, 0usize);
    // SG final score is the best of the last column (tracked as we sweep
    // column n) and the last row (tracked as we cross i == m in every column).
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

    for j in 1..=n {
        let symbol_idx = s2[j - 1] as usize;

        // Pass A: vectorized diag + substitution + E, F deferred.
        let mut h_store: Vec<Simd<T, L>> = Vec::with_capacity(seg_len);
        for seg in 0..seg_len {
            let diag = if seg == 0 {
                crate::simd_util::shift_insert(h_load[seg_len - 1], T::from_score_saturating(top[j - 1]))
            } else {
                h_load[seg - 1]
            };
            let sub = Simd::from_slice(profile.segment(symbol_idx, seg));
            let mut h = sat_add(diag, sub);
            h = h.simd_max(e_load[seg]);
            if R::LOCAL {
                h = h.simd_max(Simd::splat(T::ZERO));
            }
            h_store.push(h);
        }

        // Pass B: sequential lazy-F correction + stats, in true row order.
        // F[1][j] degenerates to H[0][j] - open since F[0][j] doesn't exist.
        let mut f_running = top[j] - open;
        let mut stats_store = vec![Stats::default(); seg_len * L];
        for i in 1..=m {
            let seg = (i - 1) % seg_len;
            let lane = (i - 1) / seg_len;

            let mut h_val = h_store[seg].to_array()[lane].to_score();
            let e_val = e_load[seg].to_array()[lane].to_score();
            let diag_val = if seg == 0 {
                if lane == 0 { top[j - 1] } else { h_load[seg_len - 1].to_array()[lane - 1].to_score() }
            } else {
                h_load[seg - 1].to_array()[lane].to_score()
            };
            let sub = matrix.score_idx(s1[i - 1] as usize, symbol_idx) as Score;

            let mut from = if h_val == diag_val + sub {
                From::Diag
            } else if h_val == e_val {
                From::Del
            } else {
                From::Zero
            };

            if f_running > h_val {
                h_val = f_running;
                from = From::Ins;
            }
            if R::LOCAL && h_val < 0 {
                h_val = 0;
                from = From::Zero;
            }

            let mut st = Stats::default();
            if opts.emit_stats {
                st = match from {
                    From::Diag => {
                        if lane == 0 && seg == 0 {
                            Stats::default()
                        } else if seg == 0 {
                            stats_load[(seg_len - 1) * L + (lane - 1)]
                        } else {
                            stats_load[(seg - 1) * L + lane]
                        }
                    }
                    // E[i][j] derives from H[i][j-1]: previous column, same row.
                    From::Del => stats_load[seg * L + lane],
                    From::Ins => {
                        if i >= 2 {
                            let pseg = (i - 2) % seg_len;
                            let plane = (i - 2) / seg_len;
                            stats_store[pseg * L + plane]
                        } else {
                            Stats::default()
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
                    if sub > 0 {
                        st.similar += 1;
                    }
                }
                stats_store[seg * L + lane] = st;
            }

            let mut arr = h_store[seg].to_array();
            arr[lane] = T::from_score_saturating(h_val);
            h_store[seg] = Simd::from_array(arr);

            tracker.observe(h_val);
            f_running = (f_running - extend).max(h_val - open);

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
                st_table[(i - 1) * n + (j - 1)] = stats_store[seg * L + lane];
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
                    col[i - 1] = stats_store[seg * L + lane];
                }
            }
            if let Some(row) = stats_row.as_mut() {
                if i == m {
                    row[j - 1] = stats_store[seg * L + lane];
                }
            }
        }

        // Pass C: E update for next column, using final (post-fixup) H.
        for seg in 0..seg_len {
            let h = h_store[seg];
            e_load[seg] = sat_sub(e_load[seg], extend_splat::<T, L>(extend)).simd_max(sat_sub_score(h, open));
        }

        if opts.emit_stats {
            stats_load = stats_store;
        }
        h_load = h_store;
    }

    finalize::<T, L, R>(
        m,
        n,
        h_load,
        seg_len,
        global_max,
        global_max_pos,
        best_last_col,
        best_last_col_pos,
        best_last_row,
        best_last_row_pos,
        global_stats,
        best_last_col_stats,
        best_last_row_stats,
        nw_stats,
        &tracker,
        matrix,
        open,
        score_table,
        stats_table,
        score_row,
        score_col,
        stats_row,
        stats_col,
        opts,
    )
}

#[inline]
fn sat_add<T, const L: usize>(a: Simd<T, L>, b: Simd<T, L>) -> Simd<T, L>
where
    T: LaneElement + std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    let aa = a.to_array();
    let bb = b.to_array();
    let out: [T; L] = std::array::from_fn(|k| {
        T::from_score_saturating(aa[k].to_score() + bb[k].to_score())
    });
    Simd::from_array(out)
}

#[inline]
fn sat_sub<T, const L: usize>(a: Simd<T, L>, b: Simd<T, L>) -> Simd<T, L>
where
    T: LaneElement + std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    let aa = a.to_array();
    let bb = b.to_array();
    let out: [T; L] = std::array::from_fn(|k| {
        T::from_score_saturating(aa[k].to_score() - bb[k].to_score())
    });
    Simd::from_array(out)
}

#[inline]
fn sat_sub_score<T, const L: usize>(a: Simd<T, L>, b: Score) -> Simd<T, L>
where
    T: LaneElement + std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    let aa = a.to_array();
    let out: [T; L] = std::array::from_fn(|k| T::from_score_saturating(aa[k].to_score() - b));
    Simd::from_array(out)
}

#[inline]
fn extend_splat<T, const L: usize>(extend: Score) -> Simd<T, L>
where
    T: LaneElement + std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    Simd::splat(T::from_score_saturating(extend))
}

#[allow(clippy::too_many_arguments)]
fn finalize<T, const L: usize, R: RecurrenceKind>(
    m: usize,
    n: usize,
    h_load: Vec<Simd<T, L>>,
    seg_len: usize,
    global_max: Score,
    global_max_pos: (usize, usize),
    best_last_col: Score,
    best_last_col_pos: usize,
    best_last_row: Score,
    best_last_row_pos: usize,
    global_stats: Stats,
    best_last_col_stats: Stats,
    best_last_row_stats: Stats,
    nw_stats: Stats,
    tracker: &saturation::Tracker<T>,
    matrix: &Matrix,
    open: Score,
    score_table: Option<Vec<Score>>,
    stats_table: Option<Vec<Stats>>,
    score_row: Option<Vec<Score>>,
    score_col: Option<Vec<Score>>,
    stats_row: Option<Vec<Stats>>,
    stats_col: Option<Vec<Stats>>,
    opts: &Options,
) -> AlignResult
where
    T: LaneElement + std::simd::SimdElement,
    LaneCount<L>: SupportedLaneCount,
{
    let base_flag = flags::recurrence_bit(R::TAG) | flags::STRIPED | flags::lanes_bit(L) | flags::bits_flag(T::BITS);

    if tracker.saturated(open, matrix.max as Score) {
        return AlignResult::saturated(base_flag);
    }

    let (score, end_query, end_ref, stats) = if R::LOCAL {
        (global_max, global_max_pos.0 - 1, global_max_pos.1 - 1, global_stats)
    } else if R::FREE_EITHER_END {
        // Best of the last column and the last row (spec §4.4.1 step 5);
        // the bottom-right corner is a candidate of both sweeps already.
        if best_last_col >= best_last_row {
            (best_last_col, best_last_col_pos - 1, n - 1, best_last_col_stats)
        } else {
            (best_last_row, m - 1, best_last_row_pos - 1, best_last_row_stats)
        }
    } else {
        let i = m;
        let seg = (i - 1) % seg_len;
        let lane = (i - 1) / seg_len;
        (h_load[seg].to_array()[lane].to_score(), m - 1, n - 1, nw_stats)
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
