//! Reference scalar implementations (spec §4.7).
//!
//! A straightforward triple-nested loop over the `H`/`E`/`F` recurrences in
//! `i64` arithmetic. Serves as the test oracle for every vectorized kernel
//! (spec §8, invariant 1) and as the ultimate fallback when no SIMD ISA is
//! detected (spec §2, component 7).

use crate::flags;
use crate::recurrence::RecurrenceKind;
use crate::result::{AlignResult, Stats};
use parasail_matrices::Matrix;
use parasail_types::{GapParams, Score};

const NEG_INF: Score = Score::MIN / 4;

#[derive(Clone, Copy, Default)]
struct Cell {
    h: Score,
    stats: Stats,
}

/// Which predecessor a cell's best score came from, used only to propagate
/// `(matches, similar, length)` consistently — this crate produces no
/// traceback path (spec §1, Non-goals).
#[derive(Clone, Copy, PartialEq, Eq)]
enum From {
    Diag,
    Del, // E: gap in reference
    Ins, // F: gap in query
    Zero,
}

/// Run the scalar `(recurrence, scheme=none, options)` reference for mapped
/// sequences `s1` (query, rows) and `s2` (reference, columns).
///
/// `s1`/`s2` must already be mapped through `matrix`'s symbol mapper
/// (`Matrix::map_sequence`). `emit_table`/`emit_stats` control which
/// optional outputs are populated, mirroring the `{plain, table, rowcol,
/// stats}` options matrix of spec §2, component 4.
pub fn align<R: RecurrenceKind>(
    s1: &[u8],
    s2: &[u8],
    gap: GapParams,
    matrix: &Matrix,
    emit_table: bool,
    emit_stats: bool,
) -> AlignResult {
    let m = s1.len();
    let n = s2.len();
    let open = gap.open as Score;
    let extend = gap.extend as Score;

    let mut h = vec![vec![Cell::default(); n + 1]; m + 1];
    let mut e = vec![vec![NEG_INF; n + 1]; m + 1];
    let mut f = vec![vec![NEG_INF; n + 1]; m + 1];

    h[0][0] = Cell::default();
    for i in 1..=m {
        h[i][0].h = if R::FREE_REF_START { 0 } else { -open - extend * (i as Score - 1) };
    }
    for j in 1..=n {
        h[0][j].h = if R::FREE_QUERY_START { 0 } else { -open - extend * (j as Score - 1) };
    }

    let mut global_max = h[0][0].h;
    let mut global_max_pos = (0usize, 0usize);

    for i in 1..=m {
        for j in 1..=n {
            e[i][j] = (e[i][j - 1] - extend).max(h[i][j - 1].h - open);
            f[i][j] = (f[i - 1][j] - extend).max(h[i - 1][j].h - open);

            let sub = matrix.score_idx(s1[i - 1] as usize, s2[j - 1] as usize) as Score;
            let diag = h[i - 1][j - 1].h + sub;

            let mut best = diag;
            let mut from = From::Diag;
            if e[i][j] > best {
                best = e[i][j];
                from = From::Del;
            }
            if f[i][j] > best {
                best = f[i][j];
                from = From::Ins;
            }
            if R::LOCAL && 0 > best {
                best = 0;
                from = From::Zero;
            }

            let stats = if emit_stats {
                let mut s = match from {
                    From::Diag => h[i - 1][j - 1].stats,
                    From::Del => h[i][j - 1].stats,
                    From::Ins => h[i - 1][j].stats,
                    From::Zero => Stats::default(),
                };
                if from != From::Zero {
                    s.length += 1;
                }
                if from == From::Diag {
                    if s1[i - 1] == s2[j - 1] {
                        s.matches += 1;
                    }
                    if sub > 0 {
                        s.similar += 1;
                    }
                }
                s
            } else {
                Stats::default()
            };

            h[i][j] = Cell { h: best, stats };

            if R::LOCAL && best > global_max {
                global_max = best;
                global_max_pos = (i, j);
            }
        }
    }

    let (score, end_query, end_ref) = if R::LOCAL {
        (global_max, global_max_pos.0.saturating_sub(1), global_max_pos.1.saturating_sub(1))
    } else if R::FREE_EITHER_END {
        let mut best = h[m][n].h;
        let mut pos = (m, n);
        for i in 1..=m {
            if h[i][n].h > best {
                best = h[i][n].h;
                pos = (i, n);
            }
        }
        for j in 1..=n {
            if h[m][j].h > best {
                best = h[m][j].h;
                pos = (m, j);
            }
        }
        (best, pos.0.saturating_sub(1), pos.1.saturating_sub(1))
    } else {
        (h[m][n].h, m.saturating_sub(1), n.saturating_sub(1))
    };

    let mut result = AlignResult {
        score,
        end_query,
        end_ref,
        flag: flags::recurrence_bit(R::TAG),
        ..Default::default()
    };

    if emit_stats {
        result.flag |= flags::STATS;
        result.stats = Some(if R::LOCAL {
            h[global_max_pos.0][global_max_pos.1].stats
        } else if R::FREE_EITHER_END {
            h[end_query + 1][end_ref + 1].stats
        } else {
            h[m][n].stats
        });
    }

    if emit_table {
        result.flag |= flags::TABLE;
        let mut table = vec![0; m * n];
        let mut stats_table = emit_stats.then(|| vec![Stats::default(); m * n]);
        for i in 0..m {
            for j in 0..n {
                table[i * n + j] = h[i + 1][j + 1].h;
                if let Some(st) = stats_table.as_mut() {
                    st[i * n + j] = h[i + 1][j + 1].stats;
                }
            }
        }
        result.score_table = Some(table);
        result.stats_table = stats_table;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::{Nw, Sg, Sw};
    use parasail_matrices::blosum62;

    fn setup(q: &str, r: &str) -> (Vec<u8>, Vec<u8>, Matrix) {
        let matrix = blosum62();
        let s1 = matrix.map_sequence(q.as_bytes()).unwrap();
        let s2 = matrix.map_sequence(r.as_bytes()).unwrap();
        (s1, s2, matrix)
    }

    #[test]
    fn sw_scores_haegawghee_pawheae() {
        let (s1, s2, matrix) = setup("HEAGAWGHEE", "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let result = align::<Sw>(&s1, &s2, gap, &matrix, false, false);
        assert_eq!(result.score, 28);
        assert_eq!(result.end_query, 8);
        assert_eq!(result.end_ref, 6);
    }

    #[test]
    fn nw_scores_haegawghee_pawheae() {
        let (s1, s2, matrix) = setup("HEAGAWGHEE", "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let result = align::<Nw>(&s1, &s2, gap, &matrix, false, false);
        assert_eq!(result.score, 19);
        assert_eq!(result.end_query, 9);
        assert_eq!(result.end_ref, 6);
    }

    #[test]
    fn sg_score_haegawghee_pawheae() {
        let (s1, s2, matrix) = setup("HEAGAWGHEE", "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let result = align::<Sg>(&s1, &s2, gap, &matrix, false, false);
        assert_eq!(result.score, 22);
    }

    #[test]
    fn nw_identical_sequences() {
        let (s1, s2, matrix) = setup("AAAA", "AAAA");
        let gap = GapParams::new(10, 1);
        let result = align::<Nw>(&s1, &s2, gap, &matrix, false, false);
        assert_eq!(result.score, 4 * matrix.score(b'A', b'A').unwrap() as Score);
    }

    #[test]
    fn sw_table_non_negative_and_max_is_score() {
        let (s1, s2, matrix) = setup("HEAGAWGHEE", "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let result = align::<Sw>(&s1, &s2, gap, &matrix, true, false);
        let table = result.score_table.unwrap();
        assert!(table.iter().all(|&v| v >= 0));
        assert_eq!(*table.iter().max().unwrap(), result.score);
    }

    #[test]
    fn nw_corner_equals_table_corner() {
        let (s1, s2, matrix) = setup("HEAGAWGHEE", "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let result = align::<Nw>(&s1, &s2, gap, &matrix, true, false);
        let table = result.score_table.unwrap();
        assert_eq!(table[(s1.len() - 1) * s2.len() + (s2.len() - 1)], result.score);
    }

    #[test]
    fn stats_length_matches_simple_identical_alignment() {
        let (s1, s2, matrix) = setup("AAAA", "AAAA");
        let gap = GapParams::new(10, 1);
        let result = align::<Nw>(&s1, &s2, gap, &matrix, false, true);
        let stats = result.stats.unwrap();
        assert_eq!(stats.matches, 4);
        assert_eq!(stats.length, 4);
        assert_eq!(stats.similar, 4);
    }
}
